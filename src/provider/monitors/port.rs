use async_trait::async_trait;

use crate::{
    api::{endpoints::Endpoint, monitors::PortMonitor, types::MonitorType, Site24x7Client},
    provider::{
        common::{self, MonitorProfiles},
        monitors::{network_fields, profile_fields},
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct PortMonitorMapping;

#[async_trait]
impl Mapping for PortMonitorMapping {
    type Api = PortMonitor;

    const TYPE_NAME: &'static str = "site24x7_port_monitor";

    fn schema() -> Schema {
        Schema::new([
            (
                "host_name",
                Field::string()
                    .required()
                    .describe("Registered domain name or IP address of the host."),
            ),
            (
                "port",
                Field::int().default(80).describe("Port to be checked."),
            ),
            (
                "invert_port_check",
                Field::bool()
                    .default(true)
                    .describe("Invert the default behaviour of PORT check."),
            ),
            (
                "use_ssl",
                Field::bool().describe("Connect to the port over SSL."),
            ),
            (
                "application_type",
                Field::string().describe("Application protocol spoken on the port."),
            ),
            (
                "command",
                Field::string().describe("Command sent to the port once connected."),
            ),
        ])
        .extend(network_fields(10))
        .extend(common::content_check_fields(
            "matching_keyword_value",
            "matching_keyword_severity",
            "Check for the keyword in the response.",
        ))
        .extend(common::content_check_fields(
            "unmatching_keyword_value",
            "unmatching_keyword_severity",
            "Check for non existence of keyword in the response.",
        ))
        .extend(profile_fields(true))
        .extend(common::action_fields())
        .extend(common::on_call_schedule_fields())
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<PortMonitor> {
        client.port_monitors()
    }

    async fn to_api(d: &mut ResourceData, client: &Site24x7Client) -> Result<PortMonitor, ProviderError> {
        let action_ids = common::actions_from_map(&d.get_string_map("actions"))?;
        let profiles = MonitorProfiles::resolve(client, d, MonitorType::Port, true).await?;

        Ok(PortMonitor {
            monitor_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            host_name: d.get_string("host_name"),
            use_ipv6: d.get_bool("use_ipv6"),
            invert_port_check: d.get_bool("invert_port_check"),
            use_ssl: d.get_bool("use_ssl"),
            monitor_type: MonitorType::Port.to_string(),
            timeout: d.get_int("timeout"),
            application_type: d.get_string("application_type"),
            command: d.get_string("command"),
            matching_keyword: common::value_and_severity(
                d,
                "matching_keyword_value",
                "matching_keyword_severity",
            ),
            unmatching_keyword: common::value_and_severity(
                d,
                "unmatching_keyword_value",
                "unmatching_keyword_severity",
            ),
            port: d.get_int("port"),
            perform_automation: d.get_bool("perform_automation"),
            check_frequency: d.get_string("check_frequency"),
            on_call_schedule_id: d.get_string("on_call_schedule_id"),
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

    fn id_of(api: &PortMonitor) -> &str {
        &api.monitor_id
    }

    fn flatten(api: &PortMonitor, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("type", &api.monitor_type);
        d.set("host_name", &api.host_name);
        d.set("port", api.port);
        d.set("use_ipv6", api.use_ipv6);
        d.set("invert_port_check", api.invert_port_check);
        d.set("use_ssl", api.use_ssl);
        d.set("timeout", api.timeout);
        d.set("application_type", &api.application_type);
        d.set("command", &api.command);
        d.set("check_frequency", &api.check_frequency);
        d.set("perform_automation", api.perform_automation);
        d.set("on_call_schedule_id", &api.on_call_schedule_id);
        d.set("location_profile_id", &api.location_profile_id);
        d.set("notification_profile_id", &api.notification_profile_id);
        d.set("threshold_profile_id", &api.threshold_profile_id);
        d.set("monitor_groups", &api.monitor_groups);
        d.set("dependency_resource_ids", &api.dependency_resource_ids);
        d.set("user_group_ids", &api.user_group_ids);
        d.set("tag_ids", &api.tag_ids);
        d.set("third_party_service_ids", &api.third_party_service_ids);
        d.set("actions", common::actions_to_map(&api.action_ids));
        common::set_value_and_severity(
            d,
            api.matching_keyword.as_ref(),
            "matching_keyword_value",
            "matching_keyword_severity",
        );
        common::set_value_and_severity(
            d,
            api.unmatching_keyword.as_ref(),
            "unmatching_keyword_value",
            "unmatching_keyword_severity",
        );
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
    async fn create_sends_port_and_keyword_check() {
        let (transport, client) = fake_client();
        transport.respond_data(Method::POST, "monitors", json!({"monitor_id": "port1"}));
        let mut d = ResourceData::from_config(
            &PortMonitorMapping::schema(),
            &json!({
                "display_name": "smtp",
                "host_name": "mail.example.com",
                "port": 25,
                "command": "EHLO",
                "matching_keyword_value": "250",
                "location_profile_id": "loc",
                "notification_profile_id": "not",
                "threshold_profile_id": "thr",
                "actions": {"0": "act"}
            }),
        )
        .expect("valid config");

        Crud::<PortMonitorMapping>::new()
            .create(&client, &mut d)
            .await
            .expect("created");

        let body = transport.last_body(Method::POST, "monitors");
        assert_eq!(body["type"], json!("PORT"));
        assert_eq!(body["port"], json!(25));
        assert_eq!(body["invert_port_check"], json!(true));
        assert!(body.get("use_ssl").is_none());
        assert_eq!(body["matching_keyword"], json!({"severity": 2, "value": "250"}));
        assert!(body.get("unmatching_keyword").is_none());
        assert_eq!(body["action_ids"], json!([{"action_id": "act", "alert_type": 0}]));
    }

    #[tokio::test]
    async fn read_flattens_keyword_checks() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::GET,
            "monitors/port1",
            json!({
                "monitor_id": "port1",
                "type": "PORT",
                "host_name": "mail.example.com",
                "port": "25",
                "unmatching_keyword": {"severity": 0, "value": "554"}
            }),
        );
        let mut d = ResourceData::with_id("port1");

        Crud::<PortMonitorMapping>::new()
            .read(&client, &mut d)
            .await
            .expect("read");

        assert_eq!(d.get_int("port"), 25);
        assert_eq!(d.get_string("unmatching_keyword_value"), "554");
        assert_eq!(d.get_int("unmatching_keyword_severity"), 0);
        assert!(d.get("matching_keyword_value").is_none());
    }
}
