use async_trait::async_trait;

use crate::{
    api::{types::Tag, Site24x7Client},
    provider::{
        data_sources::{collect_matches, name_pattern},
        resource::DataSource,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct TagDataSource {
    schema: Schema,
}

impl TagDataSource {
    pub fn new() -> Self {
        Self {
            schema: Schema::new([
                (
                    "tag_name_regex",
                    Field::string()
                        .required()
                        .describe("Regular expression denoting the name of the tag."),
                ),
                (
                    "tag_value_regex",
                    Field::string().describe("Regular expression denoting the value of the tag."),
                ),
                ("matching_ids", Field::string_list().computed_only()),
                ("matching_ids_and_names", Field::string_list().computed_only()),
                ("tag_name", Field::string().computed().describe("Tag name.")),
                ("tag_value", Field::string().computed().describe("Tag value.")),
                ("tag_type", Field::int().computed().describe("Tag type.")),
                ("tag_color", Field::string().computed().describe("Tag color.")),
            ]),
        }
    }
}

impl Default for TagDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for TagDataSource {
    fn type_name(&self) -> &'static str {
        "site24x7_tag"
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    async fn read(&self, client: &Site24x7Client, d: &mut ResourceData) -> Result<(), ProviderError> {
        let name_regex = name_pattern(d, "tag_name_regex")?;
        let value_regex = match d.get_ok("tag_value_regex") {
            Some(_) => Some(name_pattern(d, "tag_value_regex")?),
            None => None,
        };
        let tags = client.tags().list().await?;

        let matches = collect_matches(
            &tags,
            |tag| tag.tag_id.as_str(),
            |tag| format!("{}:{}", tag.tag_name, tag.tag_value),
            |tag| {
                if tag.tag_name.is_empty() || !name_regex.is_match(&tag.tag_name) {
                    return false;
                }
                match &value_regex {
                    Some(value_regex) => {
                        !tag.tag_value.is_empty() && value_regex.is_match(&tag.tag_value)
                    }
                    None => true,
                }
            },
        );
        let Some(tag) = matches.first else {
            let message = match &value_regex {
                Some(_) => format!(
                    "Unable to find tag matching the name : \"{}\" and value : \"{}\"",
                    d.get_string("tag_name_regex"),
                    d.get_string("tag_value_regex")
                ),
                None => format!(
                    "Unable to find tag matching the name : \"{}",
                    d.get_string("tag_name_regex")
                ),
            };
            return Err(ProviderError::not_found(message));
        };

        d.set_id(&tag.tag_id);
        d.set("matching_ids", &matches.ids);
        d.set("matching_ids_and_names", &matches.ids_and_names);
        flatten(tag, d);
        Ok(())
    }
}

fn flatten(tag: &Tag, d: &mut ResourceData) {
    d.set("tag_name", &tag.tag_name);
    d.set("tag_value", &tag.tag_value);
    d.set("tag_type", tag.tag_type);
    d.set("tag_color", &tag.tag_color);
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::{json, Value};

    use super::*;
    use crate::testing::fake_client;

    fn tags() -> Value {
        json!([
            {"tag_id": "1", "tag_name": "env", "tag_value": "prod", "tag_type": 1, "tag_color": "#B7DA9E"},
            {"tag_id": "2", "tag_name": "env", "tag_value": "staging", "tag_type": 1},
            {"tag_id": "3", "tag_name": "team", "tag_value": "ops", "tag_type": "2"},
            {"tag_id": "4", "tag_name": "env", "tag_type": 1}
        ])
    }

    async fn read(config: Value) -> Result<ResourceData, ProviderError> {
        let (transport, client) = fake_client();
        transport.respond_data(Method::GET, "tags", tags());
        let data_source = TagDataSource::new();
        let mut d = ResourceData::from_config(data_source.schema(), &config)?;
        data_source.read(&client, &mut d).await?;
        Ok(d)
    }

    #[tokio::test]
    async fn matches_by_name_only() {
        let d = read(json!({"tag_name_regex": "^ENV$"})).await.expect("read");

        assert_eq!(d.id(), "1");
        assert_eq!(d.get_string("tag_color"), "#B7DA9E");
        assert_eq!(d.get_string_list("matching_ids"), vec!["1", "2"]);
        assert_eq!(
            d.get_string_list("matching_ids_and_names"),
            vec!["1__env:prod", "2__env:staging"]
        );
    }

    #[tokio::test]
    async fn value_regex_narrows_the_match() {
        let d = read(json!({"tag_name_regex": "env", "tag_value_regex": "stag"}))
            .await
            .expect("read");

        assert_eq!(d.id(), "2");
        assert_eq!(d.get_string_list("matching_ids_and_names"), vec!["2__env:staging"]);
    }

    #[tokio::test]
    async fn value_regex_skips_tags_without_value() {
        let d = read(json!({"tag_name_regex": "env", "tag_value_regex": ".*"}))
            .await
            .expect("read");

        assert_eq!(d.get_string_list("matching_ids"), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn no_match_names_both_expressions() {
        let err = read(json!({"tag_name_regex": "env", "tag_value_regex": "qa"}))
            .await
            .expect_err("no match");

        assert_eq!(
            err.to_string(),
            "Unable to find tag matching the name : \"env\" and value : \"qa\""
        );
    }
}
