//! Business view subgroups below a monitor group

use async_trait::async_trait;

use crate::{
    api::{admin::Subgroup, endpoints::Endpoint, Site24x7Client},
    provider::{
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct SubgroupMapping;

#[async_trait]
impl Mapping for SubgroupMapping {
    type Api = Subgroup;

    const TYPE_NAME: &'static str = "site24x7_subgroup";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string().required().describe("Display Name for the Subgroup."),
            ),
            (
                "parent_group_id",
                Field::string()
                    .required()
                    .describe("Monitor group or subgroup under which the subgroup is configured."),
            ),
            (
                "top_group_id",
                Field::string()
                    .required()
                    .describe("Top monitor group for which the business view has been configured."),
            ),
            (
                "description",
                Field::string().describe("Description for the Subgroup."),
            ),
            (
                "health_threshold_count",
                Field::int()
                    .default(1)
                    .describe("Number of monitors' health that decide the group status. '0' considers every monitor."),
            ),
            (
                "monitors",
                Field::string_set().describe("Monitors to be associated with the subgroup."),
            ),
            (
                "group_type",
                Field::int()
                    .default(1)
                    .describe("Type of monitors that can be associated. '1' allows every monitor type."),
            ),
        ])
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<Subgroup> {
        client.subgroups()
    }

    async fn to_api(d: &mut ResourceData, _client: &Site24x7Client) -> Result<Subgroup, ProviderError> {
        Ok(Subgroup {
            id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            top_group_id: d.get_string("top_group_id"),
            parent_group_id: d.get_string("parent_group_id"),
            description: d.get_string("description"),
            group_type: d.get_int("group_type"),
            monitors: d.get_string_set("monitors"),
            health_threshold_count: d.get_int("health_threshold_count"),
        })
    }

    fn id_of(api: &Subgroup) -> &str {
        &api.id
    }

    fn flatten(api: &Subgroup, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("description", &api.description);
        d.set("monitors", &api.monitors);
        d.set("health_threshold_count", api.health_threshold_count);
        d.set("top_group_id", &api.top_group_id);
        d.set("parent_group_id", &api.parent_group_id);
        d.set("group_type", api.group_type);
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::{
        provider::resource::{Crud, Resource},
        testing::fake_client,
    };

    #[tokio::test]
    async fn create_posts_subgroup_with_defaults() {
        let (transport, client) = fake_client();
        transport.respond_data(Method::POST, "subgroups", json!({"group_id": "sg1"}));
        let mut d = ResourceData::from_config(
            &SubgroupMapping::schema(),
            &json!({
                "display_name": "Web tier",
                "parent_group_id": "mg1",
                "top_group_id": "mg1",
                "monitors": ["m2", "m1", "m2"]
            }),
        )
        .expect("valid config");

        Crud::<SubgroupMapping>::new()
            .create(&client, &mut d)
            .await
            .expect("created");

        assert_eq!(d.id(), "sg1");
        assert_eq!(
            transport.last_body(Method::POST, "subgroups"),
            json!({
                "display_name": "Web tier",
                "top_group_id": "mg1",
                "parent_group_id": "mg1",
                "group_type": 1,
                "monitors": ["m1", "m2"],
                "health_threshold_count": 1
            })
        );
    }

    #[tokio::test]
    async fn deleting_a_missing_subgroup_succeeds() {
        let (transport, client) = fake_client();
        transport.respond(
            Method::DELETE,
            "subgroups/sg1",
            404,
            json!({"error_code": 1001, "message": "not found"}),
        );

        Crud::<SubgroupMapping>::new()
            .delete(&client, &ResourceData::with_id("sg1"))
            .await
            .expect("404 on delete is ignored");
    }
}
