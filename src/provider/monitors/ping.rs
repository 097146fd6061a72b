use async_trait::async_trait;

use crate::{
    api::{endpoints::Endpoint, monitors::PingMonitor, types::MonitorType, Site24x7Client},
    provider::{
        common::{self, MonitorProfiles},
        monitors::{network_fields, profile_fields},
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct PingMonitorMapping;

#[async_trait]
impl Mapping for PingMonitorMapping {
    type Api = PingMonitor;

    const TYPE_NAME: &'static str = "site24x7_ping_monitor";

    fn schema() -> Schema {
        Schema::new([(
            "host_name",
            Field::string()
                .required()
                .describe("Registered domain name or IP address of the host."),
        )])
        .extend(network_fields(10))
        .extend(profile_fields(true))
        .extend(common::action_fields())
        .extend(common::on_call_schedule_fields())
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<PingMonitor> {
        client.ping_monitors()
    }

    async fn to_api(d: &mut ResourceData, client: &Site24x7Client) -> Result<PingMonitor, ProviderError> {
        let action_ids = common::actions_from_map(&d.get_string_map("actions"))?;
        let profiles = MonitorProfiles::resolve(client, d, MonitorType::Ping, true).await?;

        Ok(PingMonitor {
            monitor_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            host_name: d.get_string("host_name"),
            use_ipv6: d.get_bool("use_ipv6"),
            monitor_type: MonitorType::Ping.to_string(),
            timeout: d.get_int("timeout"),
            check_frequency: d.get_string("check_frequency"),
            on_call_schedule_id: d.get_string("on_call_schedule_id"),
            perform_automation: d.get_bool("perform_automation"),
            location_profile_id: profiles.location_profile_id,
            notification_profile_id: profiles.notification_profile_id,
            threshold_profile_id: profiles.threshold_profile_id,
            monitor_groups: d.get_string_list("monitor_groups"),
            dependency_resource_ids: d.get_string_set("dependency_resource_ids"),
            user_group_ids: profiles.user_group_ids,
            tag_ids: profiles.tag_ids,
            third_party_service_ids: d.get_string_list("third_party_service_ids"),
            action_ids,
        })
    }

    fn id_of(api: &PingMonitor) -> &str {
        &api.monitor_id
    }

    fn flatten(api: &PingMonitor, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("type", &api.monitor_type);
        d.set("host_name", &api.host_name);
        d.set("use_ipv6", api.use_ipv6);
        d.set("timeout", api.timeout);
        d.set("check_frequency", &api.check_frequency);
        d.set("on_call_schedule_id", &api.on_call_schedule_id);
        d.set("perform_automation", api.perform_automation);
        d.set("location_profile_id", &api.location_profile_id);
        d.set("notification_profile_id", &api.notification_profile_id);
        d.set("threshold_profile_id", &api.threshold_profile_id);
        d.set("monitor_groups", &api.monitor_groups);
        d.set("dependency_resource_ids", &api.dependency_resource_ids);
        d.set("user_group_ids", &api.user_group_ids);
        d.set("tag_ids", &api.tag_ids);
        d.set("third_party_service_ids", &api.third_party_service_ids);
        d.set("actions", common::actions_to_map(&api.action_ids));
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
    async fn create_resolves_ping_threshold_profile() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::GET,
            "threshold_profiles",
            json!([
                {"profile_id": "t-url", "type": "URL", "profile_name": "web"},
                {"profile_id": "t-ping", "type": "PING", "profile_name": "ping"}
            ]),
        );
        transport.respond_data(Method::POST, "monitors", json!({"monitor_id": "p1"}));
        let mut d = ResourceData::from_config(
            &PingMonitorMapping::schema(),
            &json!({
                "display_name": "gateway",
                "host_name": "10.0.0.1",
                "location_profile_id": "loc",
                "notification_profile_id": "not",
                "user_group_ids": ["ug"]
            }),
        )
        .expect("valid config");

        Crud::<PingMonitorMapping>::new()
            .create(&client, &mut d)
            .await
            .expect("created");

        assert_eq!(d.id(), "p1");
        assert_eq!(d.get_string("threshold_profile_id"), "t-ping");
        let body = transport.last_body(Method::POST, "monitors");
        assert_eq!(body["type"], json!("PING"));
        assert_eq!(body["timeout"], json!(10));
        assert_eq!(body["check_frequency"], json!("5"));
        assert_eq!(body["threshold_profile_id"], json!("t-ping"));
    }
}
