use async_trait::async_trait;

use crate::{
    api::{
        errors::ApiError,
        types::{MonitorGroup, UserGroup},
        Site24x7Client,
    },
    provider::{
        common::Fields, data_sources::Lookup, resource_data::ResourceData, schema::Field,
    },
};

pub struct UserGroupLookup;

#[async_trait]
impl Lookup for UserGroupLookup {
    type Item = UserGroup;

    const TYPE_NAME: &'static str = "site24x7_user_group";
    const NOUN: &'static str = "user group";

    fn fields() -> Fields {
        vec![
            (
                "display_name",
                Field::string().computed().describe("Display name for the user group."),
            ),
            (
                "attribute_group_id",
                Field::string()
                    .computed()
                    .describe("Attribute alert group associated with the user group."),
            ),
            (
                "users",
                Field::string_set()
                    .computed()
                    .describe("User IDs of the members."),
            ),
            (
                "product_id",
                Field::int()
                    .computed()
                    .describe("Product for which the user group was created."),
            ),
        ]
    }

    async fn list(client: &Site24x7Client) -> Result<Vec<UserGroup>, ApiError> {
        client.user_groups().list().await
    }

    fn id(item: &UserGroup) -> &str {
        &item.user_group_id
    }

    fn name(item: &UserGroup) -> &str {
        &item.display_name
    }

    fn flatten(item: &UserGroup, d: &mut ResourceData) {
        d.set("display_name", &item.display_name);
        d.set("attribute_group_id", &item.attribute_group_id);
        d.set("users", &item.users);
        d.set("product_id", item.product_id);
    }
}

pub struct MonitorGroupLookup;

#[async_trait]
impl Lookup for MonitorGroupLookup {
    type Item = MonitorGroup;

    const TYPE_NAME: &'static str = "site24x7_monitor_group";
    const NOUN: &'static str = "monitor group";

    fn fields() -> Fields {
        vec![
            (
                "display_name",
                Field::string().computed().describe("Display name for the monitor group."),
            ),
            (
                "description",
                Field::string().computed().describe("Description of the monitor group."),
            ),
            (
                "health_threshold_count",
                Field::int()
                    .computed()
                    .describe("Number of monitors whose health decides the group status."),
            ),
            (
                "monitors",
                Field::string_set().computed().describe("Monitors in the group."),
            ),
            (
                "dependency_resource_ids",
                Field::string_set()
                    .computed()
                    .describe("Resources the group depends on."),
            ),
            (
                "suppress_alert",
                Field::bool()
                    .computed()
                    .describe("Whether alerts are suppressed while a dependency is down."),
            ),
        ]
    }

    async fn list(client: &Site24x7Client) -> Result<Vec<MonitorGroup>, ApiError> {
        client.monitor_groups().list().await
    }

    fn id(item: &MonitorGroup) -> &str {
        &item.group_id
    }

    fn name(item: &MonitorGroup) -> &str {
        &item.display_name
    }

    fn flatten(item: &MonitorGroup, d: &mut ResourceData) {
        d.set("display_name", &item.display_name);
        d.set("description", &item.description);
        d.set("health_threshold_count", item.health_threshold_count);
        d.set("monitors", &item.monitors);
        d.set("dependency_resource_ids", &item.dependency_resource_ids);
        d.set("suppress_alert", item.suppress_alert);
    }
}
