use async_trait::async_trait;

use crate::{
    api::{endpoints::Endpoint, types::UserGroup, Site24x7Client},
    provider::{
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema, Validation},
        ProviderError,
    },
};

pub struct UserGroupMapping;

#[async_trait]
impl Mapping for UserGroupMapping {
    type Api = UserGroup;

    const TYPE_NAME: &'static str = "site24x7_user_group";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string()
                    .required()
                    .describe("Display Name for the User Group."),
            ),
            (
                "attribute_group_id",
                Field::string()
                    .required()
                    .describe("Attribute Alert Group to be associated with the User Group."),
            ),
            (
                "users",
                Field::string_list()
                    .required()
                    .describe("User IDs of the users to be associated to the group."),
            ),
            (
                "product_id",
                Field::int()
                    .default(0)
                    .validate(Validation::IntInSlice(&[0, 1, 2]))
                    .describe("Product for which the user group is being created. Default value is 0."),
            ),
        ])
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<UserGroup> {
        client.user_groups()
    }

    async fn to_api(d: &mut ResourceData, _client: &Site24x7Client) -> Result<UserGroup, ProviderError> {
        Ok(UserGroup {
            user_group_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            users: d.get_string_list("users"),
            attribute_group_id: d.get_string("attribute_group_id"),
            product_id: d.get_int("product_id"),
        })
    }

    fn id_of(api: &UserGroup) -> &str {
        &api.user_group_id
    }

    fn flatten(api: &UserGroup, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("users", &api.users);
        d.set("attribute_group_id", &api.attribute_group_id);
        d.set("product_id", api.product_id);
    }
}
