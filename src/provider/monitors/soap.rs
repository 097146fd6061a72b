use async_trait::async_trait;

use crate::{
    api::{endpoints::Endpoint, monitors::SoapMonitor, types::MonitorType, Site24x7Client},
    provider::{
        common::{self, MonitorProfiles},
        monitors::profile_fields,
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct SoapMonitorMapping;

#[async_trait]
impl Mapping for SoapMonitorMapping {
    type Api = SoapMonitor;

    const TYPE_NAME: &'static str = "site24x7_soap_monitor";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string().required().describe("Display Name for the monitor."),
            ),
            ("type", Field::string().computed_only()),
            (
                "website",
                Field::string().required().describe("SOAP endpoint to monitor."),
            ),
            (
                "request_param",
                Field::string().required().describe("SOAP request envelope to send."),
            ),
            (
                "soap_attributes_severity",
                Field::int().describe("Alert type raised when a SOAP attribute check fails."),
            ),
            (
                "soap_attributes",
                Field::string_map().describe("SOAP attribute names and their expected values."),
            ),
            (
                "timeout",
                Field::int()
                    .default(10)
                    .describe("Timeout for connecting to the endpoint. Range 1 - 45."),
            ),
            ("request_content_type", Field::string()),
            ("http_method", Field::string()),
            ("use_name_server", Field::bool()),
            (
                "up_status_codes",
                Field::string()
                    .default("")
                    .describe("Comma separated HTTP status codes that indicate a successful response."),
            ),
            ("http_protocol", Field::string()),
            (
                "use_ipv6",
                Field::bool().describe("Monitoring is performed over IPv6 from supported locations."),
            ),
            ("response_type", Field::string()),
            (
                "check_frequency",
                Field::string()
                    .default("5")
                    .describe("Interval at which the endpoint has to be monitored. Default value is 5 minutes."),
            ),
            (
                "perform_automation",
                Field::bool().describe("Execute the IT automation during scheduled maintenance."),
            ),
            ("use_alpn", Field::bool()),
            (
                "ssl_protocol",
                Field::string().describe("SSL Protocol to be associated with the monitor."),
            ),
            (
                "credential_profile_id",
                Field::string().describe("Credential Profile to associate."),
            ),
        ])
        .extend(common::response_header_fields())
        .extend(profile_fields(true))
        .extend(common::action_fields())
        .extend(common::on_call_schedule_fields())
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<SoapMonitor> {
        client.soap_monitors()
    }

    async fn to_api(d: &mut ResourceData, client: &Site24x7Client) -> Result<SoapMonitor, ProviderError> {
        let action_ids = common::actions_from_map(&d.get_string_map("actions"))?;
        let response_headers = common::response_headers_check(d);
        let profiles = MonitorProfiles::resolve(client, d, MonitorType::Soap, true).await?;

        Ok(SoapMonitor {
            monitor_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            monitor_type: MonitorType::Soap.to_string(),
            website: d.get_string("website"),
            request_param: d.get_string("request_param"),
            soap_attributes_severity: d.get_int("soap_attributes_severity"),
            soap_attributes: common::headers_from_map(&d.get_string_map("soap_attributes")),
            response_headers,
            timeout: d.get_int("timeout"),
            request_content_type: d.get_string("request_content_type"),
            http_method: d.get_string("http_method"),
            use_name_server: d.get_bool("use_name_server"),
            http_protocol: d.get_string("http_protocol"),
            use_ipv6: d.get_bool("use_ipv6"),
            response_type: d.get_string("response_type"),
            check_frequency: d.get_string("check_frequency"),
            credential_profile_id: d.get_string("credential_profile_id"),
            up_status_codes: d.get_string("up_status_codes"),
            ssl_protocol: d.get_string("ssl_protocol"),
            use_alpn: d.get_bool("use_alpn"),
            perform_automation: d.get_bool("perform_automation"),
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

    fn id_of(api: &SoapMonitor) -> &str {
        &api.monitor_id
    }

    fn flatten(api: &SoapMonitor, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("type", &api.monitor_type);
        d.set("website", &api.website);
        d.set("request_param", &api.request_param);
        d.set("soap_attributes_severity", api.soap_attributes_severity);
        d.set("soap_attributes", common::headers_to_map(&api.soap_attributes));
        common::set_response_headers_check(d, &api.response_headers);
        d.set("timeout", api.timeout);
        d.set("request_content_type", &api.request_content_type);
        d.set("http_method", &api.http_method);
        d.set("use_name_server", api.use_name_server);
        d.set("http_protocol", &api.http_protocol);
        d.set("use_ipv6", api.use_ipv6);
        d.set("response_type", &api.response_type);
        d.set("check_frequency", &api.check_frequency);
        d.set("credential_profile_id", &api.credential_profile_id);
        d.set("up_status_codes", &api.up_status_codes);
        d.set("ssl_protocol", &api.ssl_protocol);
        d.set("use_alpn", api.use_alpn);
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
    async fn create_sends_soap_attributes_as_name_value_pairs() {
        let (transport, client) = fake_client();
        transport.respond_data(Method::POST, "monitors", json!({"monitor_id": "soap1"}));
        let mut d = ResourceData::from_config(
            &SoapMonitorMapping::schema(),
            &json!({
                "display_name": "calculator",
                "website": "https://soap.example.com/calculator.asmx",
                "request_param": "<soap:Envelope/>",
                "soap_attributes_severity": 2,
                "soap_attributes": {"AddResult": "3"},
                "response_headers": {"Content-Type": "text/xml"},
                "location_profile_id": "loc",
                "notification_profile_id": "not",
                "threshold_profile_id": "thr"
            }),
        )
        .expect("valid config");

        Crud::<SoapMonitorMapping>::new()
            .create(&client, &mut d)
            .await
            .expect("created");

        let body = transport.last_body(Method::POST, "monitors");
        assert_eq!(body["type"], json!("SOAP"));
        assert_eq!(body["soap_attributes"], json!([{"name": "AddResult", "value": "3"}]));
        assert_eq!(
            body["response_headers_check"],
            json!({"severity": 2, "value": [{"name": "Content-Type", "value": "text/xml"}]})
        );
        assert_eq!(body["check_frequency"], json!("5"));
    }

    #[tokio::test]
    async fn read_flattens_soap_attributes() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::GET,
            "monitors/soap1",
            json!({
                "monitor_id": "soap1",
                "type": "SOAP",
                "soap_attributes": [{"name": "AddResult", "value": "3"}],
                "soap_attributes_severity": "0"
            }),
        );
        let mut d = ResourceData::with_id("soap1");

        Crud::<SoapMonitorMapping>::new()
            .read(&client, &mut d)
            .await
            .expect("read");

        assert_eq!(d.get_int("soap_attributes_severity"), 0);
        assert_eq!(
            d.get_string_map("soap_attributes").get("AddResult").map(String::as_str),
            Some("3")
        );
    }
}
