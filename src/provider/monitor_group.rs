use async_trait::async_trait;

use crate::{
    api::{endpoints::Endpoint, types::MonitorGroup, Site24x7Client},
    provider::{
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

const DEPENDS_ON_MONITORS: i64 = 2;

pub struct MonitorGroupMapping;

#[async_trait]
impl Mapping for MonitorGroupMapping {
    type Api = MonitorGroup;

    const TYPE_NAME: &'static str = "site24x7_monitor_group";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string()
                    .required()
                    .describe("Display Name for the Monitor Group."),
            ),
            (
                "description",
                Field::string().describe("Description for the Monitor Group."),
            ),
            (
                "health_threshold_count",
                Field::int().default(1).describe(
                    "Number of monitors' health that decide the group status. '0' implies that all the monitors are considered.",
                ),
            ),
            (
                "dependency_resource_ids",
                Field::string_set()
                    .describe("List of dependent resource IDs. Alerts are suppressed while a dependency is down."),
            ),
            (
                "suppress_alert",
                Field::bool()
                    .default(false)
                    .describe("Suppress alerts when the dependent monitor is down."),
            ),
            (
                "healthcheck_profile_id",
                Field::string()
                    .computed()
                    .describe("Health check profile to be associated with the monitor group."),
            ),
            (
                "notification_profile_id",
                Field::string()
                    .computed()
                    .describe("Notification profile to be associated with the monitor group."),
            ),
            (
                "user_group_ids",
                Field::string_list()
                    .computed()
                    .describe("List of user groups to be notified on monitor group status change."),
            ),
            (
                "tag_ids",
                Field::string_set().describe("List of tag IDs to be associated with the monitor group."),
            ),
            (
                "third_party_service_ids",
                Field::string_list()
                    .describe("List of third party service IDs to be associated with the monitor group."),
            ),
            (
                "enable_incident_management",
                Field::bool()
                    .default(false)
                    .describe("Enable incident management."),
            ),
            (
                "healing_period",
                Field::int().describe("Minutes to wait before closing the incident."),
            ),
            (
                "alert_frequency",
                Field::int().describe("Minutes between repeated alerts."),
            ),
            (
                "alert_periodically",
                Field::bool()
                    .default(false)
                    .describe("Repeat alerts while the incident is open."),
            ),
        ])
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<MonitorGroup> {
        client.monitor_groups()
    }

    async fn to_api(d: &mut ResourceData, _client: &Site24x7Client) -> Result<MonitorGroup, ProviderError> {
        let dependency_resource_ids = d.get_string_set("dependency_resource_ids");
        let dependency_resource_type = if dependency_resource_ids.is_empty() {
            0
        } else {
            DEPENDS_ON_MONITORS
        };

        Ok(MonitorGroup {
            group_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            description: d.get_string("description"),
            monitors: Vec::new(),
            health_threshold_count: d.get_int("health_threshold_count"),
            dependency_resource_ids,
            suppress_alert: d.get_bool("suppress_alert"),
            dependency_resource_type,
            notification_profile_id: d.get_string("notification_profile_id"),
            health_check_profile_id: d.get_string("healthcheck_profile_id"),
            tag_ids: d.get_string_set("tag_ids"),
            user_group_ids: d.get_string_list("user_group_ids"),
            third_party_service_ids: d.get_string_list("third_party_service_ids"),
            enable_incident_management: d.get_bool("enable_incident_management"),
            healing_period: d.get_int("healing_period"),
            alert_frequency: d.get_int("alert_frequency"),
            alert_periodically: d.get_bool("alert_periodically"),
        })
    }

    fn id_of(api: &MonitorGroup) -> &str {
        &api.group_id
    }

    fn flatten(api: &MonitorGroup, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("description", &api.description);
        d.set("health_threshold_count", api.health_threshold_count);
        d.set("dependency_resource_ids", &api.dependency_resource_ids);
        d.set("suppress_alert", api.suppress_alert);
        d.set("healthcheck_profile_id", &api.health_check_profile_id);
        d.set("notification_profile_id", &api.notification_profile_id);
        d.set("user_group_ids", &api.user_group_ids);
        d.set("tag_ids", &api.tag_ids);
        d.set("third_party_service_ids", &api.third_party_service_ids);
        d.set("enable_incident_management", api.enable_incident_management);
        d.set("healing_period", api.healing_period);
        d.set("alert_frequency", api.alert_frequency);
        d.set("alert_periodically", api.alert_periodically);
    }

    // Group membership is managed from the monitors, so the current member
    // list is carried over.
    async fn update_remote(
        client: &Site24x7Client,
        id: &str,
        mut api: MonitorGroup,
    ) -> Result<MonitorGroup, ProviderError> {
        let endpoint = Self::endpoint(client);
        api.monitors = endpoint.get(id).await?.monitors;
        Ok(endpoint.update(id, &api).await?)
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

    fn data() -> ResourceData {
        ResourceData::from_config(
            &MonitorGroupMapping::schema(),
            &json!({
                "display_name": "Website group",
                "description": "Monitors of the website",
                "dependency_resource_ids": ["7", "3"],
                "suppress_alert": true,
                "tag_ids": ["t1"]
            }),
        )
        .expect("valid config")
    }

    #[tokio::test]
    async fn create_sets_selection_type_for_dependencies() {
        let (transport, client) = fake_client();
        transport.respond_data(Method::POST, "monitor_groups", json!({"group_id": "g1"}));
        let mut d = data();

        Crud::<MonitorGroupMapping>::new()
            .create(&client, &mut d)
            .await
            .expect("created");

        let body = transport.last_body(Method::POST, "monitor_groups");
        assert_eq!(d.id(), "g1");
        assert_eq!(body["selection_type"], json!(2));
        assert_eq!(body["dependency_resource_ids"], json!(["3", "7"]));
        assert_eq!(body["health_threshold_count"], json!(1));
        assert_eq!(body["tags"], json!(["t1"]));
        assert!(body.get("monitors").is_none());
    }

    #[tokio::test]
    async fn update_preserves_remote_monitors() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::GET,
            "monitor_groups/g1",
            json!({"group_id": "g1", "display_name": "old", "monitors": ["m1", "m2"]}),
        );
        transport.respond_data(Method::PUT, "monitor_groups/g1", json!({"group_id": "g1"}));
        let mut d = data();
        d.set_id("g1");

        Crud::<MonitorGroupMapping>::new()
            .update(&client, &mut d)
            .await
            .expect("updated");

        let body = transport.last_body(Method::PUT, "monitor_groups/g1");
        assert_eq!(body["monitors"], json!(["m1", "m2"]));
        assert_eq!(body["display_name"], json!("Website group"));
    }

    #[tokio::test]
    async fn no_dependencies_leave_selection_type_out() {
        let (transport, client) = fake_client();
        transport.respond_data(Method::POST, "monitor_groups", json!({"group_id": "g2"}));
        let mut d = ResourceData::from_config(
            &MonitorGroupMapping::schema(),
            &json!({"display_name": "plain"}),
        )
        .expect("valid config");

        Crud::<MonitorGroupMapping>::new()
            .create(&client, &mut d)
            .await
            .expect("created");

        assert!(transport
            .last_body(Method::POST, "monitor_groups")
            .get("selection_type")
            .is_none());
    }
}
