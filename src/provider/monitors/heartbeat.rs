use async_trait::async_trait;

use crate::{
    api::{endpoints::Endpoint, monitors::HeartbeatMonitor, types::MonitorType, Site24x7Client},
    provider::{
        common::{self, MonitorProfiles},
        monitors::cron::passive_monitor_fields,
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct HeartbeatMonitorMapping;

#[async_trait]
impl Mapping for HeartbeatMonitorMapping {
    type Api = HeartbeatMonitor;

    const TYPE_NAME: &'static str = "site24x7_heartbeat_monitor";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string().required().describe("Display Name for the monitor."),
            ),
            (
                "name_in_ping_url",
                Field::string()
                    .required()
                    .describe("Unique name to be used in the ping URL."),
            ),
            ("type", Field::string().computed_only()),
        ])
        .extend(passive_monitor_fields())
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<HeartbeatMonitor> {
        client.heartbeat_monitors()
    }

    async fn to_api(
        d: &mut ResourceData,
        client: &Site24x7Client,
    ) -> Result<HeartbeatMonitor, ProviderError> {
        let profiles = MonitorProfiles::resolve(client, d, MonitorType::Heartbeat, false).await?;

        Ok(HeartbeatMonitor {
            monitor_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            name_in_ping_url: d.get_string("name_in_ping_url"),
            monitor_type: MonitorType::Heartbeat.to_string(),
            threshold_profile_id: profiles.threshold_profile_id,
            notification_profile_id: profiles.notification_profile_id,
            monitor_groups: common::sorted(d.get_string_list("monitor_groups")),
            tag_ids: profiles.tag_ids,
            third_party_service_ids: d.get_string_list("third_party_service_ids"),
            user_group_ids: profiles.user_group_ids,
            on_call_schedule_id: d.get_string("on_call_schedule_id"),
        })
    }

    fn id_of(api: &HeartbeatMonitor) -> &str {
        &api.monitor_id
    }

    fn flatten(api: &HeartbeatMonitor, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("type", &api.monitor_type);
        d.set("name_in_ping_url", &api.name_in_ping_url);
        d.set("threshold_profile_id", &api.threshold_profile_id);
        d.set("notification_profile_id", &api.notification_profile_id);
        d.set("monitor_groups", &api.monitor_groups);
        d.set("user_group_ids", &api.user_group_ids);
        d.set("tag_ids", &api.tag_ids);
        d.set("third_party_service_ids", &api.third_party_service_ids);
        d.set("on_call_schedule_id", &api.on_call_schedule_id);
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
    async fn ping_url_name_is_sent_as_unique_name() {
        let (transport, client) = fake_client();
        transport.respond_data(Method::PUT, "monitors/5", json!({"monitor_id": "5"}));
        let mut d = ResourceData::from_config(
            &HeartbeatMonitorMapping::schema(),
            &json!({
                "display_name": "Heartbeat",
                "name_in_ping_url": "status_check",
                "threshold_profile_id": "1",
                "notification_profile_id": "2",
                "tag_ids": ["3"]
            }),
        )
        .expect("valid config");
        d.set_id("5");

        Crud::<HeartbeatMonitorMapping>::new()
            .update(&client, &mut d)
            .await
            .expect("updated");

        let body = transport.last_body(Method::PUT, "monitors/5");
        assert_eq!(body["unique_name"], json!("status_check"));
        assert_eq!(body["monitor_id"], json!("5"));
        assert_eq!(body["type"], json!("HEARTBEAT"));
        assert_eq!(body["tag_ids"], json!(["3"]));
        assert!(body.get("user_group_ids").is_none());
        assert_eq!(d.id(), "5");
    }

    #[tokio::test]
    async fn read_maps_unique_name_back() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::GET,
            "monitors/5",
            json!({"monitor_id": "5", "unique_name": "status_check", "type": "HEARTBEAT"}),
        );
        let mut d = ResourceData::with_id("5");

        Crud::<HeartbeatMonitorMapping>::new()
            .read(&client, &mut d)
            .await
            .expect("read");

        assert_eq!(d.get_string("name_in_ping_url"), "status_check");
    }
}
