use async_trait::async_trait;

use crate::{
    api::{endpoints::Endpoint, types::Tag, Site24x7Client},
    provider::{
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema, Validation},
        ProviderError,
    },
};

pub struct TagMapping;

#[async_trait]
impl Mapping for TagMapping {
    type Api = Tag;

    const TYPE_NAME: &'static str = "site24x7_tag";

    fn schema() -> Schema {
        Schema::new([
            (
                "tag_name",
                Field::string().required().describe("Tag name."),
            ),
            (
                "tag_value",
                Field::string().required().describe("Tag value."),
            ),
            (
                "tag_type",
                Field::int()
                    .default(1)
                    .validate(Validation::IntInSlice(&[1, 2]))
                    .describe("1 user defined tag, 2 tag imported from AWS."),
            ),
            (
                "tag_color",
                Field::string()
                    .required()
                    .describe("Hex color code of the tag, for example #B7DA9E."),
            ),
        ])
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<Tag> {
        client.tags()
    }

    async fn to_api(d: &mut ResourceData, _client: &Site24x7Client) -> Result<Tag, ProviderError> {
        Ok(Tag {
            tag_id: d.id().to_string(),
            tag_name: d.get_string("tag_name"),
            tag_value: d.get_string("tag_value"),
            tag_type: d.get_int("tag_type"),
            tag_color: d.get_string("tag_color"),
        })
    }

    fn id_of(api: &Tag) -> &str {
        &api.tag_id
    }

    fn flatten(api: &Tag, d: &mut ResourceData) {
        d.set("tag_name", &api.tag_name);
        d.set("tag_value", &api.tag_value);
        d.set("tag_type", api.tag_type);
        d.set("tag_color", &api.tag_color);
    }
}
