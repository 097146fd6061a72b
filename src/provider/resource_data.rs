//! Terraform side state of one resource or data source instance

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::provider::{schema::Schema, ProviderError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceData {
    id: String,
    values: Map<String, Value>,
}

impl ResourceData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: Map::new(),
        }
    }

    pub fn from_config(schema: &Schema, config: &Value) -> Result<Self, ProviderError> {
        let empty = Map::new();
        let config = match config {
            Value::Object(object) => object,
            Value::Null => &empty,
            other => {
                return Err(ProviderError::Validation(format!(
                    "configuration must be an object, got {other}"
                )))
            }
        };

        Ok(Self {
            id: String::new(),
            values: schema.apply(config)?,
        })
    }

    // One entry of a block attribute, already checked against its schema.
    pub fn from_block(values: Map<String, Value>) -> Self {
        Self {
            id: String::new(),
            values,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|value| !value.is_null())
    }

    pub fn get_ok(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|value| !is_zero_value(value))
    }

    pub fn get_string(&self, key: &str) -> String {
        match self.get(key) {
            Some(Value::String(value)) => value.clone(),
            Some(Value::Number(number)) => number.to_string(),
            _ => String::new(),
        }
    }

    pub fn get_int(&self, key: &str) -> i64 {
        match self.get(key) {
            Some(Value::Number(number)) => number.as_i64().unwrap_or_default(),
            Some(Value::String(value)) => value.trim().parse().unwrap_or_default(),
            _ => 0,
        }
    }

    pub fn get_bool(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Value::Bool(true)))
    }

    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(string_of).collect(),
            _ => Vec::new(),
        }
    }

    pub fn get_int_list(&self, key: &str) -> Vec<i64> {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_i64).collect(),
            _ => Vec::new(),
        }
    }

    pub fn get_int_set(&self, key: &str) -> Vec<i64> {
        let mut members = self.get_int_list(key);
        members.sort_unstable();
        members.dedup();
        members
    }

    pub fn get_string_set(&self, key: &str) -> Vec<String> {
        let mut members = self.get_string_list(key);
        members.sort();
        members.dedup();
        members
    }

    pub fn get_string_map(&self, key: &str) -> BTreeMap<String, String> {
        match self.get(key) {
            Some(Value::Object(entries)) => entries
                .iter()
                .filter_map(|(name, value)| string_of(value).map(|value| (name.clone(), value)))
                .collect(),
            _ => BTreeMap::new(),
        }
    }

    pub fn get_map(&self, key: &str) -> Map<String, Value> {
        match self.get(key) {
            Some(Value::Object(entries)) => entries.clone(),
            _ => Map::new(),
        }
    }

    pub fn get_blocks(&self, key: &str) -> Vec<Map<String, Value>> {
        match self.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_object().cloned())
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn set(&mut self, key: &str, value: impl Serialize) {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.values.insert(key.to_string(), value);
    }

    pub fn state(&self) -> Value {
        Value::Object(self.values.clone())
    }
}

fn string_of(value: &Value) -> Option<String> {
    match value {
        Value::String(value) => Some(value.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn is_zero_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(value) => value.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::provider::schema::Field;

    fn data(values: Value) -> ResourceData {
        let schema = Schema::new([
            ("name", Field::string()),
            ("count", Field::int()),
            ("enabled", Field::bool()),
            ("ids", Field::string_list()),
            ("members", Field::string_set()),
            ("headers", Field::string_map()),
        ]);
        ResourceData::from_config(&schema, &values).expect("valid config")
    }

    #[test]
    fn getters_return_zero_values_for_missing_keys() {
        let d = data(Value::Null);

        assert_eq!(d.get_string("name"), "");
        assert_eq!(d.get_int("count"), 0);
        assert!(!d.get_bool("enabled"));
        assert!(d.get_string_list("ids").is_empty());
        assert!(d.get_string_map("headers").is_empty());
    }

    #[test]
    fn get_ok_treats_zero_values_as_unset() {
        let d = data(json!({"name": "", "count": 0, "enabled": false, "ids": ["1"]}));

        assert!(d.get_ok("name").is_none());
        assert!(d.get_ok("count").is_none());
        assert!(d.get_ok("enabled").is_none());
        assert_eq!(d.get_ok("ids"), Some(&json!(["1"])));
    }

    #[test]
    fn sets_and_maps_are_normalized() {
        let d = data(json!({
            "members": ["b", "a", "b"],
            "headers": {"X-Zeta": "1", "Accept": "2"}
        }));

        assert_eq!(d.get_string_set("members"), vec!["a", "b"]);
        assert_eq!(
            d.get_string_map("headers").into_keys().collect::<Vec<_>>(),
            vec!["Accept", "X-Zeta"]
        );
    }

    #[test]
    fn block_entries_use_the_same_getters() {
        let schema = Schema::new([(
            "slots",
            Field::block(Schema::new([
                ("day", Field::int().required()),
                ("days", Field::int_list()),
            ])),
        )]);
        let d = ResourceData::from_config(
            &schema,
            &json!({"slots": [{"day": 2, "days": [3, 1, 3]}]}),
        )
        .expect("valid config");

        let slot = ResourceData::from_block(d.get_blocks("slots").remove(0));

        assert_eq!(slot.id(), "");
        assert_eq!(slot.get_int("day"), 2);
        assert_eq!(slot.get_int_set("days"), vec![1, 3]);
    }

    #[test]
    fn set_overwrites_state() {
        let mut d = data(json!({"name": "foo"}));
        d.set("name", "bar");
        d.set("ids", vec!["1", "2"]);
        d.set_id("123");

        assert_eq!(d.id(), "123");
        assert_eq!(d.state(), json!({"name": "bar", "ids": ["1", "2"]}));
    }
}
