//! REST API transaction monitors: an ordered sequence of API calls
//!
//! Each step carries one `step_details` block with the same request and
//! content checks as a single REST API monitor.

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::{
    api::{
        endpoints::Endpoint,
        monitors::{RestApiTransactionMonitor, Step, StepDetails},
        types::{MonitorType, Status},
        Site24x7Client,
    },
    provider::{
        common::{self, MonitorProfiles},
        monitors::{
            profile_fields,
            rest_api::{graphql, json_schema, match_json, set_graphql, set_json_checks, set_keyword_checks},
        },
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema, Validation},
        ProviderError,
    },
};

pub struct RestApiTransactionMonitorMapping;

fn step_details_schema() -> Schema {
    let severity = || {
        Field::int()
            .default(Status::TROUBLE.0)
            .validate(Validation::IntInSlice(&[0, 2]))
    };

    Schema::new([
        (
            "step_url",
            Field::string().required().describe("API request URL of the step."),
        ),
        (
            "timeout",
            Field::string()
                .default("10")
                .describe("Timeout for connecting to the API. Range 1 - 45."),
        ),
        (
            "response_content_type",
            Field::string()
                .default("T")
                .describe("Response content type. 'J' JSON, 'T' TEXT, 'X' XML."),
        ),
        (
            "match_json_path",
            Field::string_list().describe("JSON Path expressions that must match the JSON response."),
        ),
        ("match_json_path_severity", severity()),
        (
            "json_schema",
            Field::string().describe("JSON schema to be validated against the JSON response."),
        ),
        ("json_schema_severity", severity()),
        ("json_schema_check", Field::bool()),
        ("matching_keyword", Field::string_map()),
        ("unmatching_keyword", Field::string_map()),
        ("match_regex", Field::string_map()),
        ("match_case", Field::bool()),
        (
            "http_method",
            Field::string()
                .default("G")
                .describe("HTTP Method used for the request."),
        ),
        ("request_content_type", Field::string()),
        ("request_body", Field::string()),
        (
            "request_headers",
            Field::string_map().describe("A Map of request header name and value."),
        ),
        ("graphql_query", Field::string()),
        ("graphql_variables", Field::string()),
        ("user_agent", Field::string()),
        (
            "auth_method",
            Field::string()
                .default("B")
                .describe("Authentication method. 'B' Basic, 'N' NTLM, 'O' OAuth 2, 'W' Web token."),
        ),
        ("auth_user", Field::string()),
        ("auth_pass", Field::string().sensitive()),
        ("oauth2_provider", Field::string()),
        ("client_certificate_password", Field::string().sensitive()),
        ("jwt_id", Field::string()),
        ("use_name_server", Field::bool()),
        ("up_status_codes", Field::string().default("")),
        ("ssl_protocol", Field::string().default("Auto")),
        ("http_protocol", Field::string().default("H1.1")),
        ("use_alpn", Field::bool()),
    ])
    .extend(common::response_header_fields())
}

fn step_schema() -> Schema {
    Schema::new([
        (
            "display_name",
            Field::string().required().describe("Display name for the step."),
        ),
        (
            "step_details",
            Field::block(step_details_schema())
                .required()
                .describe("Request and content checks of the step."),
        ),
    ])
}

fn step_details(step_name: &str, d: &ResourceData) -> StepDetails {
    StepDetails {
        step_url: d.get_string("step_url"),
        display_name: step_name.to_string(),
        timeout: d.get_string("timeout"),
        http_method: d.get_string("http_method"),
        request_content_type: d.get_string("request_content_type"),
        request_body: d.get_string("request_body"),
        request_headers: common::headers_from_map(&d.get_string_map("request_headers")),
        graphql: graphql(d),
        user_agent: d.get_string("user_agent"),
        auth_method: d.get_string("auth_method"),
        auth_user: d.get_string("auth_user"),
        auth_pass: d.get_string("auth_pass"),
        oauth2_provider: d.get_string("oauth2_provider"),
        client_certificate_password: d.get_string("client_certificate_password"),
        jwt_id: d.get_string("jwt_id"),
        use_name_server: d.get_bool("use_name_server"),
        up_status_codes: d.get_string("up_status_codes"),
        ssl_protocol: d.get_string("ssl_protocol"),
        http_protocol: d.get_string("http_protocol"),
        use_alpn: d.get_bool("use_alpn"),
        response_content_type: d.get_string("response_content_type"),
        match_json: match_json(d),
        json_schema: json_schema(d),
        json_schema_check: d.get_bool("json_schema_check"),
        matching_keyword: common::keyword_check(d, "matching_keyword"),
        unmatching_keyword: common::keyword_check(d, "unmatching_keyword"),
        match_regex: common::keyword_check(d, "match_regex"),
        match_case: d.get_bool("match_case"),
        response_headers: common::response_headers_check(d),
    }
}

// Secrets are not returned by the API and stay out of the flattened block.
fn step_details_state(details: &StepDetails) -> Value {
    let mut d = ResourceData::from_block(Map::new());
    d.set("step_url", &details.step_url);
    d.set("timeout", &details.timeout);
    d.set("http_method", &details.http_method);
    d.set("request_content_type", &details.request_content_type);
    d.set("request_body", &details.request_body);
    d.set("request_headers", common::headers_to_map(&details.request_headers));
    set_graphql(&mut d, details.graphql.as_ref());
    d.set("user_agent", &details.user_agent);
    d.set("auth_method", &details.auth_method);
    d.set("auth_user", &details.auth_user);
    d.set("oauth2_provider", &details.oauth2_provider);
    d.set("jwt_id", &details.jwt_id);
    d.set("use_name_server", details.use_name_server);
    d.set("up_status_codes", &details.up_status_codes);
    d.set("ssl_protocol", &details.ssl_protocol);
    d.set("http_protocol", &details.http_protocol);
    d.set("use_alpn", details.use_alpn);
    d.set("response_content_type", &details.response_content_type);
    set_json_checks(&mut d, details.match_json.as_ref(), details.json_schema.as_ref());
    d.set("json_schema_check", details.json_schema_check);
    set_keyword_checks(
        &mut d,
        [
            ("matching_keyword", details.matching_keyword.as_ref()),
            ("unmatching_keyword", details.unmatching_keyword.as_ref()),
            ("match_regex", details.match_regex.as_ref()),
        ],
    );
    d.set("match_case", details.match_case);
    common::set_response_headers_check(&mut d, &details.response_headers);
    d.state()
}

#[async_trait]
impl Mapping for RestApiTransactionMonitorMapping {
    type Api = RestApiTransactionMonitor;

    const TYPE_NAME: &'static str = "site24x7_rest_api_transaction_monitor";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string().required().describe("Display Name for the monitor."),
            ),
            ("type", Field::string().computed_only()),
            (
                "check_frequency",
                Field::string()
                    .default("5")
                    .describe("Interval at which the sequence has to be run. Default value is 5 minutes."),
            ),
            (
                "steps",
                Field::block(step_schema())
                    .required()
                    .describe("List of monitor steps, run in order."),
            ),
        ])
        .extend(profile_fields(true))
        .extend(common::action_fields())
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<RestApiTransactionMonitor> {
        client.rest_api_transaction_monitors()
    }

    async fn to_api(
        d: &mut ResourceData,
        client: &Site24x7Client,
    ) -> Result<RestApiTransactionMonitor, ProviderError> {
        let action_ids = common::actions_from_map(&d.get_string_map("actions"))?;
        let steps = d
            .get_blocks("steps")
            .into_iter()
            .map(ResourceData::from_block)
            .map(|step| {
                let display_name = step.get_string("display_name");
                let step_details = step
                    .get_blocks("step_details")
                    .into_iter()
                    .map(ResourceData::from_block)
                    .map(|details| step_details(&display_name, &details))
                    .collect();
                Step {
                    step_id: String::new(),
                    monitor_id: d.id().to_string(),
                    display_name,
                    step_details,
                }
            })
            .collect();

        let profiles = MonitorProfiles::resolve(client, d, MonitorType::RestApiSeq, true).await?;

        Ok(RestApiTransactionMonitor {
            monitor_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            monitor_type: MonitorType::RestApiSeq.to_string(),
            check_frequency: d.get_string("check_frequency"),
            steps,
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

    fn id_of(api: &RestApiTransactionMonitor) -> &str {
        &api.monitor_id
    }

    fn flatten(api: &RestApiTransactionMonitor, d: &mut ResourceData) {
        let steps: Vec<Value> = api
            .steps
            .iter()
            .map(|step| {
                let details: Vec<Value> = step.step_details.iter().map(step_details_state).collect();
                json!({"display_name": step.display_name, "step_details": details})
            })
            .collect();

        d.set("display_name", &api.display_name);
        d.set("type", &api.monitor_type);
        d.set("check_frequency", &api.check_frequency);
        d.set("steps", steps);
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

    use super::*;
    use crate::{
        provider::resource::{Crud, Resource},
        testing::fake_client,
    };

    #[tokio::test]
    async fn create_sends_steps_in_order_with_step_defaults() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::GET,
            "threshold_profiles",
            json!([{"profile_id": "t-seq", "type": "RESTAPISEQ", "profile_name": "sequence"}]),
        );
        transport.respond_data(Method::POST, "monitors", json!({"monitor_id": "seq1"}));
        let mut d = ResourceData::from_config(
            &RestApiTransactionMonitorMapping::schema(),
            &json!({
                "display_name": "checkout flow",
                "location_profile_id": "loc",
                "notification_profile_id": "not",
                "steps": [
                    {
                        "display_name": "login",
                        "step_details": [{
                            "step_url": "https://api.example.com/login",
                            "http_method": "P",
                            "request_body": "{\"user\":\"demo\"}",
                            "request_headers": {"Accept": "application/json"},
                            "match_json_path": ["$.token"]
                        }]
                    },
                    {
                        "display_name": "cart",
                        "step_details": {"step_url": "https://api.example.com/cart"}
                    }
                ]
            }),
        )
        .expect("valid config");

        Crud::<RestApiTransactionMonitorMapping>::new()
            .create(&client, &mut d)
            .await
            .expect("created");

        let body = transport.last_body(Method::POST, "monitors");
        assert_eq!(body["type"], json!("RESTAPISEQ"));
        assert_eq!(body["threshold_profile_id"], json!("t-seq"));

        let login = &body["steps"][0];
        assert_eq!(login["display_name"], json!("login"));
        let details = &login["step_details"][0];
        assert_eq!(details["display_name"], json!("login"));
        assert_eq!(details["timeout"], json!("10"));
        assert_eq!(details["http_method"], json!("P"));
        assert_eq!(details["request_param"], json!("{\"user\":\"demo\"}"));
        assert_eq!(details["custom_headers"], json!([{"name": "Accept", "value": "application/json"}]));
        assert_eq!(details["response_type"], json!("T"));
        assert_eq!(details["match_json"], json!({"jsonpath": [{"name": "$.token"}], "severity": 2}));
        assert_eq!(details["ssl_protocol"], json!("Auto"));

        let cart = &body["steps"][1]["step_details"][0];
        assert_eq!(cart["step_url"], json!("https://api.example.com/cart"));
        assert_eq!(cart["http_method"], json!("G"));
        assert!(cart.get("match_json").is_none());
    }

    #[tokio::test]
    async fn step_without_url_is_rejected() {
        let err = ResourceData::from_config(
            &RestApiTransactionMonitorMapping::schema(),
            &json!({
                "display_name": "broken",
                "steps": [{"display_name": "first", "step_details": [{"http_method": "G"}]}]
            }),
        )
        .expect_err("step_url is required");

        assert!(err.to_string().contains("step_url"));
    }

    #[tokio::test]
    async fn read_flattens_steps_without_secrets() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::GET,
            "monitors/seq1",
            json!({
                "monitor_id": "seq1",
                "type": "RESTAPISEQ",
                "display_name": "checkout flow",
                "check_frequency": "15",
                "steps": [{
                    "step_id": "s1",
                    "display_name": "login",
                    "step_details": [{
                        "step_url": "https://api.example.com/login",
                        "timeout": 20,
                        "response_type": "J",
                        "auth_pass": "hidden",
                        "matching_keyword": {"severity": 2, "value": "token"}
                    }]
                }]
            }),
        );
        let mut d = ResourceData::with_id("seq1");

        Crud::<RestApiTransactionMonitorMapping>::new()
            .read(&client, &mut d)
            .await
            .expect("read");

        assert_eq!(d.get_string("check_frequency"), "15");
        let steps = d.get_blocks("steps");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0]["display_name"], json!("login"));
        let details = &steps[0]["step_details"][0];
        assert_eq!(details["timeout"], json!("20"));
        assert_eq!(details["response_content_type"], json!("J"));
        assert_eq!(details["matching_keyword"], json!({"severity": "2", "value": "token"}));
        assert!(details.get("auth_pass").is_none());
    }
}
