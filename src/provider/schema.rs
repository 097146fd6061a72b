//! Attribute schemas for resources, data sources and the provider block

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use crate::provider::ProviderError;

#[derive(Debug, Clone, PartialEq)]
pub enum ValueType {
    String,
    Int,
    Bool,
    List(Box<ValueType>),
    Set(Box<ValueType>),
    Map(Box<ValueType>),
    Block(Schema),
}

impl ValueType {
    fn name(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Int => "int",
            ValueType::Bool => "bool",
            ValueType::List(_) => "list",
            ValueType::Set(_) => "set",
            ValueType::Map(_) => "map",
            ValueType::Block(_) => "block",
        }
    }

    fn descriptor(&self) -> Value {
        match self {
            ValueType::List(elem) | ValueType::Set(elem) | ValueType::Map(elem) => {
                json!({"type": self.name(), "elem": elem.descriptor()})
            }
            ValueType::Block(schema) => json!({"type": "block", "attributes": schema.descriptor()}),
            _ => json!({"type": self.name()}),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    IntInSlice(&'static [i64]),
    StringInSlice(&'static [&'static str]),
    IntAtMost(i64),
}

impl Validation {
    fn check(&self, key: &str, value: &Value) -> Result<(), ProviderError> {
        match (self, value) {
            (Validation::IntInSlice(allowed), Value::Number(number)) => {
                let got = number.as_i64().unwrap_or_default();
                if allowed.contains(&got) {
                    return Ok(());
                }
                let allowed = allowed
                    .iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                Err(ProviderError::Validation(format!(
                    "expected {key} to be one of [{allowed}], got {got}"
                )))
            }
            (Validation::StringInSlice(allowed), Value::String(got)) => {
                if allowed.contains(&got.as_str()) {
                    return Ok(());
                }
                Err(ProviderError::Validation(format!(
                    "expected {key} to be one of {allowed:?}, got {got}"
                )))
            }
            (Validation::IntAtMost(max), Value::Number(number)) => {
                let got = number.as_i64().unwrap_or_default();
                if got <= *max {
                    return Ok(());
                }
                Err(ProviderError::Validation(format!(
                    "expected {key} to be at most ({max}), got {got}"
                )))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub value_type: ValueType,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub default: Option<Value>,
    pub env_default: Option<&'static str>,
    pub description: &'static str,
    pub validation: Option<Validation>,
}

impl Field {
    pub fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            required: false,
            optional: true,
            computed: false,
            sensitive: false,
            default: None,
            env_default: None,
            description: "",
            validation: None,
        }
    }

    pub fn string() -> Self {
        Self::new(ValueType::String)
    }

    pub fn int() -> Self {
        Self::new(ValueType::Int)
    }

    pub fn bool() -> Self {
        Self::new(ValueType::Bool)
    }

    pub fn string_list() -> Self {
        Self::new(ValueType::List(Box::new(ValueType::String)))
    }

    pub fn int_list() -> Self {
        Self::new(ValueType::List(Box::new(ValueType::Int)))
    }

    pub fn string_set() -> Self {
        Self::new(ValueType::Set(Box::new(ValueType::String)))
    }

    pub fn int_set() -> Self {
        Self::new(ValueType::Set(Box::new(ValueType::Int)))
    }

    pub fn string_map() -> Self {
        Self::new(ValueType::Map(Box::new(ValueType::String)))
    }

    pub fn int_map() -> Self {
        Self::new(ValueType::Map(Box::new(ValueType::Int)))
    }

    pub fn block(schema: Schema) -> Self {
        Self::new(ValueType::Block(schema))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn computed_only(mut self) -> Self {
        self.computed = true;
        self.optional = false;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn env_default(mut self, variable: &'static str) -> Self {
        self.env_default = Some(variable);
        self
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn validate(mut self, validation: Validation) -> Self {
        self.validation = Some(validation);
        self
    }

    fn descriptor(&self) -> Value {
        let mut descriptor = self.value_type.descriptor();
        if let Value::Object(object) = &mut descriptor {
            object.insert("required".to_string(), json!(self.required));
            object.insert("optional".to_string(), json!(self.optional));
            object.insert("computed".to_string(), json!(self.computed));
            object.insert("sensitive".to_string(), json!(self.sensitive));
            if let Some(default) = &self.default {
                object.insert("default".to_string(), default.clone());
            }
            if !self.description.is_empty() {
                object.insert("description".to_string(), json!(self.description));
            }
        }
        descriptor
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: BTreeMap<&'static str, Field>,
}

impl Schema {
    pub fn new(fields: impl IntoIterator<Item = (&'static str, Field)>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    pub fn extend(mut self, fields: impl IntoIterator<Item = (&'static str, Field)>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &Field)> {
        self.fields.iter().map(|(key, field)| (*key, field))
    }

    pub fn descriptor(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(key, field)| (key.to_string(), field.descriptor()))
                .collect(),
        )
    }

    pub fn apply(&self, config: &Map<String, Value>) -> Result<Map<String, Value>, ProviderError> {
        let mut values = Map::new();

        for (key, value) in config {
            if value.is_null() {
                continue;
            }
            let field = self.fields.get(key.as_str()).ok_or_else(|| {
                ProviderError::Validation(format!(
                    "An argument named \"{key}\" is not expected here."
                ))
            })?;
            if field.computed && !field.optional && !field.required {
                continue;
            }
            values.insert(key.clone(), check_value(key, &field.value_type, value)?);
        }

        for (key, field) in &self.fields {
            if values.contains_key(*key) {
                continue;
            }
            let fallback = field
                .env_default
                .and_then(|variable| std::env::var(variable).ok())
                .filter(|value| !value.trim().is_empty())
                .map(Value::String)
                .or_else(|| field.default.clone());
            match fallback {
                Some(value) => {
                    values.insert(key.to_string(), value);
                }
                None if field.required => {
                    return Err(ProviderError::Validation(format!(
                        "The argument \"{key}\" is required, but no definition was found."
                    )));
                }
                None => {}
            }
        }

        for (key, field) in &self.fields {
            if let (Some(validation), Some(value)) = (&field.validation, values.get(*key)) {
                validation.check(key, value)?;
            }
        }

        Ok(values)
    }
}

fn type_error(key: &str, value_type: &ValueType, value: &Value) -> ProviderError {
    ProviderError::Validation(format!(
        "Inappropriate value for attribute \"{key}\": {} required, got {value}.",
        value_type.name()
    ))
}

fn check_value(key: &str, value_type: &ValueType, value: &Value) -> Result<Value, ProviderError> {
    match (value_type, value) {
        (ValueType::String, Value::String(_)) => Ok(value.clone()),
        (ValueType::String, Value::Number(number)) => Ok(Value::String(number.to_string())),
        (ValueType::String, Value::Bool(flag)) => Ok(Value::String(flag.to_string())),
        (ValueType::Int, Value::Number(number)) if number.is_i64() => Ok(value.clone()),
        (ValueType::Int, Value::String(raw)) => raw
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| type_error(key, value_type, value)),
        (ValueType::Bool, Value::Bool(_)) => Ok(value.clone()),
        (ValueType::List(elem) | ValueType::Set(elem), Value::Array(items)) => items
            .iter()
            .map(|item| check_value(key, elem, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        (ValueType::Map(elem), Value::Object(entries)) => entries
            .iter()
            .map(|(name, item)| check_value(key, elem, item).map(|item| (name.clone(), item)))
            .collect::<Result<Map<_, _>, _>>()
            .map(Value::Object),
        (ValueType::Block(schema), Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Object(object) => schema.apply(object).map(Value::Object),
                _ => Err(type_error(key, value_type, item)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        (ValueType::Block(schema), Value::Object(object)) => {
            schema.apply(object).map(|object| json!([object]))
        }
        _ => Err(type_error(key, value_type, value)),
    }
}
