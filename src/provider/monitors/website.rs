use async_trait::async_trait;

use crate::{
    api::{
        endpoints::Endpoint,
        monitors::WebsiteMonitor,
        types::MonitorType,
        Site24x7Client,
    },
    provider::{
        common::{self, MonitorProfiles},
        monitors::{http_fields, http_monitor_fields, profile_fields},
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct WebsiteMonitorMapping;

#[async_trait]
impl Mapping for WebsiteMonitorMapping {
    type Api = WebsiteMonitor;

    const TYPE_NAME: &'static str = "site24x7_website_monitor";

    fn schema() -> Schema {
        Schema::new(http_monitor_fields())
            .extend(http_fields())
            .extend(common::content_check_fields(
                "matching_keyword_value",
                "matching_keyword_severity",
                "Check for the keyword in the website response.",
            ))
            .extend(common::content_check_fields(
                "unmatching_keyword_value",
                "unmatching_keyword_severity",
                "Check for non existence of keyword in the website response.",
            ))
            .extend(common::content_check_fields(
                "match_regex_value",
                "match_regex_severity",
                "Match the regular expression in the website response.",
            ))
            .extend([(
                "match_case",
                Field::bool().describe("Perform case sensitive keyword search or not."),
            )])
            .extend(common::response_header_fields())
            .extend(profile_fields(true))
            .extend(common::action_fields())
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<WebsiteMonitor> {
        client.website_monitors()
    }

    async fn to_api(
        d: &mut ResourceData,
        client: &Site24x7Client,
    ) -> Result<WebsiteMonitor, ProviderError> {
        let response_headers = common::response_headers_check(d);
        let action_ids = common::actions_from_map(&d.get_string_map("actions"))?;

        let profiles = MonitorProfiles::resolve(client, d, MonitorType::Url, true).await?;

        Ok(WebsiteMonitor {
            monitor_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            monitor_type: MonitorType::Url.to_string(),
            website: d.get_string("website"),
            check_frequency: d.get_string("check_frequency"),
            timeout: d.get_int("timeout"),
            use_ipv6: d.get_bool("use_ipv6"),
            http_method: d.get_string("http_method"),
            request_content_type: d.get_string("request_content_type"),
            request_body: d.get_string("request_body"),
            request_headers: common::headers_from_map(&d.get_string_map("request_headers")),
            user_agent: d.get_string("user_agent"),
            auth_method: d.get_string("auth_method"),
            auth_user: d.get_string("auth_user"),
            auth_pass: d.get_string("auth_pass"),
            credential_profile_id: d.get_string("credential_profile_id"),
            client_certificate_password: d.get_string("client_certificate_password"),
            use_name_server: d.get_bool("use_name_server"),
            forced_ips: d.get_string("forced_ips"),
            up_status_codes: d.get_string("up_status_codes"),
            ssl_protocol: d.get_string("ssl_protocol"),
            http_protocol: d.get_string("http_protocol"),
            use_alpn: d.get_bool("use_alpn"),
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
            match_case: d.get_bool("match_case"),
            match_regex: common::value_and_severity(d, "match_regex_value", "match_regex_severity"),
            response_headers,
            location_profile_id: profiles.location_profile_id,
            notification_profile_id: profiles.notification_profile_id,
            threshold_profile_id: profiles.threshold_profile_id,
            monitor_groups: common::sorted(d.get_string_list("monitor_groups")),
            dependency_resource_ids: d.get_string_set("dependency_resource_ids"),
            user_group_ids: profiles.user_group_ids,
            tag_ids: profiles.tag_ids,
            third_party_service_ids: d.get_string_list("third_party_service_ids"),
            action_ids,
        })
    }

    fn id_of(api: &WebsiteMonitor) -> &str {
        &api.monitor_id
    }

    fn flatten(api: &WebsiteMonitor, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("type", &api.monitor_type);
        d.set("website", &api.website);
        d.set("check_frequency", &api.check_frequency);
        d.set("timeout", api.timeout);
        d.set("use_ipv6", api.use_ipv6);

        d.set("http_method", &api.http_method);
        d.set("request_content_type", &api.request_content_type);
        d.set("request_body", &api.request_body);
        d.set("request_headers", common::headers_to_map(&api.request_headers));
        d.set("user_agent", &api.user_agent);
        d.set("auth_method", &api.auth_method);
        d.set("auth_user", &api.auth_user);
        d.set("auth_pass", &api.auth_pass);
        d.set("credential_profile_id", &api.credential_profile_id);
        d.set("client_certificate_password", &api.client_certificate_password);
        d.set("use_name_server", api.use_name_server);
        d.set("forced_ips", &api.forced_ips);
        d.set("up_status_codes", &api.up_status_codes);
        d.set("ssl_protocol", &api.ssl_protocol);
        d.set("http_protocol", &api.http_protocol);
        d.set("use_alpn", api.use_alpn);

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
        d.set("match_case", api.match_case);
        common::set_value_and_severity(
            d,
            api.match_regex.as_ref(),
            "match_regex_value",
            "match_regex_severity",
        );
        common::set_response_headers_check(d, &api.response_headers);

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
    use serde_json::{json, Value};

    use super::*;
    use crate::{
        api::types::{ActionRef, Header, HttpResponseHeader, Status, ValueAndSeverity},
        provider::resource::{Crud, Resource},
        testing::{fake_client, FakeTransport},
    };

    fn config() -> Value {
        json!({
            "display_name": "foo",
            "website": "https://foo.bar",
            "timeout": 10,
            "check_frequency": "5",
            "http_method": "P",
            "request_content_type": "application/json",
            "request_body": "{\"foo\": \"bar\"}",
            "request_headers": {"Content-Type": "application/json", "Accept": "application/json"},
            "matching_keyword_value": "foo",
            "response_headers": {"X-Cache": "HIT"},
            "response_headers_severity": 0,
            "location_profile_id": "456",
            "notification_profile_id": "789",
            "threshold_profile_id": "012",
            "monitor_groups": ["345", "234"],
            "dependency_resource_ids": ["567", "123"],
            "user_group_ids": ["123", "456"],
            "tag_ids": ["123"],
            "actions": {"1": "123action"},
            "use_name_server": true
        })
    }

    fn data() -> ResourceData {
        ResourceData::from_config(&WebsiteMonitorMapping::schema(), &config()).expect("valid config")
    }

    fn expected() -> WebsiteMonitor {
        WebsiteMonitor {
            display_name: "foo".to_string(),
            monitor_type: "URL".to_string(),
            website: "https://foo.bar".to_string(),
            check_frequency: "5".to_string(),
            timeout: 10,
            http_method: "P".to_string(),
            request_content_type: "application/json".to_string(),
            request_body: "{\"foo\": \"bar\"}".to_string(),
            request_headers: vec![
                Header {
                    name: "Accept".to_string(),
                    value: "application/json".to_string(),
                },
                Header {
                    name: "Content-Type".to_string(),
                    value: "application/json".to_string(),
                },
            ],
            auth_method: "B".to_string(),
            use_name_server: true,
            ssl_protocol: "Auto".to_string(),
            http_protocol: "H1.1".to_string(),
            matching_keyword: Some(ValueAndSeverity {
                value: "foo".to_string(),
                severity: Status::TROUBLE,
            }),
            response_headers: HttpResponseHeader {
                severity: Status::DOWN,
                value: vec![Header {
                    name: "X-Cache".to_string(),
                    value: "HIT".to_string(),
                }],
            },
            location_profile_id: "456".to_string(),
            notification_profile_id: "789".to_string(),
            threshold_profile_id: "012".to_string(),
            monitor_groups: vec!["234".to_string(), "345".to_string()],
            dependency_resource_ids: vec!["123".to_string(), "567".to_string()],
            user_group_ids: vec!["123".to_string(), "456".to_string()],
            tag_ids: vec!["123".to_string()],
            action_ids: vec![ActionRef {
                action_id: "123action".to_string(),
                alert_type: Status::UP,
            }],
            ..WebsiteMonitor::default()
        }
    }

    fn created(transport: &FakeTransport) {
        let mut created = serde_json::to_value(expected()).expect("serialize");
        created["monitor_id"] = json!("123");
        transport.respond_data(Method::POST, "monitors", created);
    }

    #[tokio::test]
    async fn create_posts_mapped_monitor() {
        let (transport, client) = fake_client();
        created(&transport);
        let mut d = data();

        Crud::<WebsiteMonitorMapping>::new()
            .create(&client, &mut d)
            .await
            .expect("created");

        assert_eq!(d.id(), "123");
        assert_eq!(
            transport.last_body(Method::POST, "monitors"),
            serde_json::to_value(expected()).expect("serialize")
        );
    }

    #[tokio::test]
    async fn update_puts_mapped_monitor() {
        let (transport, client) = fake_client();
        let mut updated = serde_json::to_value(expected()).expect("serialize");
        updated["monitor_id"] = json!("123");
        transport.respond_data(Method::PUT, "monitors/123", updated.clone());
        let mut d = data();
        d.set_id("123");

        Crud::<WebsiteMonitorMapping>::new()
            .update(&client, &mut d)
            .await
            .expect("updated");

        assert_eq!(transport.last_body(Method::PUT, "monitors/123"), updated);
    }

    #[tokio::test]
    async fn empty_profiles_resolve_defaults() {
        let (transport, client) = fake_client();
        created(&transport);
        transport.respond_data(
            Method::GET,
            "location_profiles",
            json!([{"profile_id": "loc-1", "profile_name": "Default"}]),
        );
        transport.respond_data(
            Method::GET,
            "threshold_profiles",
            json!([{"profile_id": "thr-1", "type": "URL"}]),
        );
        transport.respond_data(
            Method::GET,
            "notification_profiles",
            json!([{"profile_id": "not-1", "profile_name": "Default"}]),
        );
        let mut config = config();
        for key in ["location_profile_id", "notification_profile_id", "threshold_profile_id"] {
            config.as_object_mut().expect("object").remove(key);
        }
        let mut d = ResourceData::from_config(&WebsiteMonitorMapping::schema(), &config)
            .expect("valid config");

        Crud::<WebsiteMonitorMapping>::new()
            .create(&client, &mut d)
            .await
            .expect("created");

        let body = transport.last_body(Method::POST, "monitors");
        assert_eq!(body["location_profile_id"], json!("loc-1"));
        assert_eq!(body["threshold_profile_id"], json!("thr-1"));
        assert_eq!(body["notification_profile_id"], json!("not-1"));
        assert_eq!(d.get_string("location_profile_id"), "loc-1");
        assert!(transport.requests_to(Method::GET, "user_groups").is_empty());
    }

    #[tokio::test]
    async fn delete_treats_not_found_as_success() {
        let (transport, client) = fake_client();
        transport.respond(
            Method::DELETE,
            "monitors/123",
            404,
            json!({"error_code": 1, "message": "monitor not found"}),
        );

        Crud::<WebsiteMonitorMapping>::new()
            .delete(&client, &ResourceData::with_id("123"))
            .await
            .expect("gone is deleted");
    }

    #[tokio::test]
    async fn exists_is_false_on_not_found_and_propagates_other_errors() {
        let (transport, client) = fake_client();
        transport.respond(
            Method::GET,
            "monitors/123",
            404,
            json!({"error_code": 1, "message": "not found"}),
        );
        transport.respond(
            Method::GET,
            "monitors/456",
            500,
            json!({"error_code": 2, "message": "boom"}),
        );
        let resource = Crud::<WebsiteMonitorMapping>::new();

        let missing = resource
            .exists(&client, &ResourceData::with_id("123"))
            .await
            .expect("not found is not an error");
        let failed = resource.exists(&client, &ResourceData::with_id("456")).await;

        assert!(!missing);
        assert!(failed.is_err());
    }

    #[tokio::test]
    async fn read_flattens_remote_monitor() {
        let (transport, client) = fake_client();
        let mut remote = serde_json::to_value(expected()).expect("serialize");
        remote["monitor_id"] = json!("123");
        transport.respond_data(Method::GET, "monitors/123", remote);
        let mut d = ResourceData::with_id("123");

        Crud::<WebsiteMonitorMapping>::new()
            .read(&client, &mut d)
            .await
            .expect("read");

        assert_eq!(d.get_string("type"), "URL");
        assert_eq!(d.get_string("matching_keyword_value"), "foo");
        assert_eq!(d.get_int("response_headers_severity"), 0);
        assert_eq!(d.get_string_map("actions").get("1").map(String::as_str), Some("123action"));
        assert_eq!(d.get_string_map("request_headers").len(), 2);
    }
}
