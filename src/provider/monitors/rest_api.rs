use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::{
    api::{
        endpoints::Endpoint,
        monitors::RestApiMonitor,
        types::{MonitorType, Status},
        Site24x7Client,
    },
    provider::{
        common::{self, MonitorProfiles},
        monitors::{http_fields, http_monitor_fields, profile_fields},
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema, Validation},
        ProviderError,
    },
};

pub struct RestApiMonitorMapping;

fn severity_of(check: &Map<String, Value>) -> i64 {
    match check.get("severity") {
        Some(Value::Number(number)) => number.as_f64().unwrap_or_default() as i64,
        Some(Value::String(value)) => value.trim().parse().unwrap_or_default(),
        _ => 0,
    }
}

fn string_of(check: &Map<String, Value>, key: &str) -> String {
    check
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

pub(super) fn match_json(d: &ResourceData) -> Option<Map<String, Value>> {
    let json_paths = d.get_string_list("match_json_path");
    (!json_paths.is_empty()).then(|| {
        let paths: Vec<Value> = json_paths.iter().map(|path| json!({"name": path})).collect();
        let mut check = Map::new();
        check.insert("jsonpath".to_string(), Value::Array(paths));
        check.insert("severity".to_string(), json!(d.get_int("match_json_path_severity")));
        check
    })
}

pub(super) fn json_schema(d: &ResourceData) -> Option<Map<String, Value>> {
    d.get_ok("json_schema").map(|_| {
        let mut check = Map::new();
        check.insert("severity".to_string(), json!(d.get_int("json_schema_severity")));
        check.insert("schema_value".to_string(), json!(d.get_string("json_schema")));
        check
    })
}

pub(super) fn graphql(d: &ResourceData) -> Option<Map<String, Value>> {
    d.get_ok("graphql_query").map(|_| {
        let mut query = Map::new();
        query.insert("query".to_string(), json!(d.get_string("graphql_query")));
        query.insert("variables".to_string(), json!(d.get_string("graphql_variables")));
        query
    })
}

pub(super) fn set_graphql(d: &mut ResourceData, graphql: Option<&Map<String, Value>>) {
    if let Some(graphql) = graphql {
        d.set("graphql_query", string_of(graphql, "query"));
        d.set("graphql_variables", string_of(graphql, "variables"));
    }
}

pub(super) fn set_json_checks(
    d: &mut ResourceData,
    match_json: Option<&Map<String, Value>>,
    json_schema: Option<&Map<String, Value>>,
) {
    if let Some(match_json) = match_json {
        let paths: Vec<String> = match match_json.get("jsonpath") {
            Some(Value::Array(paths)) => paths
                .iter()
                .filter_map(|path| path.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };
        d.set("match_json_path", paths);
        d.set("match_json_path_severity", severity_of(match_json));
    }
    if let Some(json_schema) = json_schema {
        d.set("json_schema", string_of(json_schema, "schema_value"));
        d.set("json_schema_severity", severity_of(json_schema));
    }
}

pub(super) fn set_keyword_checks(
    d: &mut ResourceData,
    checks: [(&str, Option<&Map<String, Value>>); 3],
) {
    for (key, check) in checks {
        if let Some(check) = check {
            d.set(key, common::string_values(check));
        }
    }
}

#[async_trait]
impl Mapping for RestApiMonitorMapping {
    type Api = RestApiMonitor;

    const TYPE_NAME: &'static str = "site24x7_rest_api_monitor";

    fn schema() -> Schema {
        let severity = || {
            Field::int()
                .default(Status::TROUBLE.0)
                .validate(Validation::IntInSlice(&[0, 2]))
        };

        Schema::new(http_monitor_fields())
            .extend(http_fields())
            .extend([
                (
                    "response_content_type",
                    Field::string()
                        .default("T")
                        .describe("Response content type. 'J' JSON, 'T' TEXT, 'X' XML."),
                ),
                (
                    "match_json_path",
                    Field::string_list()
                        .describe("JSON Path expressions that must match the JSON response."),
                ),
                (
                    "match_json_path_severity",
                    severity().describe("Alert type raised when the JSON path assertion fails."),
                ),
                (
                    "json_schema",
                    Field::string().describe("JSON schema to be validated against the JSON response."),
                ),
                (
                    "json_schema_severity",
                    severity().describe("Alert type raised when the JSON schema assertion fails."),
                ),
                (
                    "json_schema_check",
                    Field::bool().describe("Validate the JSON response against json_schema."),
                ),
                (
                    "matching_keyword",
                    Field::string_map()
                        .describe("Check for the keyword in the response. Map of severity and value."),
                ),
                (
                    "unmatching_keyword",
                    Field::string_map()
                        .describe("Check for non existence of keyword in the response. Map of severity and value."),
                ),
                (
                    "match_regex",
                    Field::string_map()
                        .describe("Match the regular expression in the response. Map of severity and value."),
                ),
                (
                    "match_case",
                    Field::bool().describe("Perform case sensitive keyword search or not."),
                ),
                (
                    "graphql_query",
                    Field::string().describe("GraphQL query sent to the API service."),
                ),
                (
                    "graphql_variables",
                    Field::string().describe("GraphQL variables sent with the query."),
                ),
                (
                    "oauth2_provider",
                    Field::string().describe("Provider ID of the OAuth Provider to be associated with the monitor."),
                ),
                (
                    "jwt_id",
                    Field::string().describe("Token ID of the Web Token to be associated with the monitor."),
                ),
            ])
            .extend(common::response_header_fields())
            .extend(profile_fields(true))
            .extend(common::action_fields())
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<RestApiMonitor> {
        client.rest_api_monitors()
    }

    async fn to_api(
        d: &mut ResourceData,
        client: &Site24x7Client,
    ) -> Result<RestApiMonitor, ProviderError> {
        let response_headers = common::response_headers_check(d);
        let action_ids = common::actions_from_map(&d.get_string_map("actions"))?;
        let match_json = match_json(d);
        let json_schema = json_schema(d);
        let graphql = graphql(d);

        let profiles = MonitorProfiles::resolve(client, d, MonitorType::RestApi, true).await?;

        Ok(RestApiMonitor {
            monitor_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            monitor_type: MonitorType::RestApi.to_string(),
            website: d.get_string("website"),
            check_frequency: d.get_string("check_frequency"),
            timeout: d.get_int("timeout"),
            use_ipv6: d.get_bool("use_ipv6"),
            http_method: d.get_string("http_method"),
            request_content_type: d.get_string("request_content_type"),
            request_body: d.get_string("request_body"),
            request_headers: common::headers_from_map(&d.get_string_map("request_headers")),
            graphql,
            user_agent: d.get_string("user_agent"),
            auth_method: d.get_string("auth_method"),
            auth_user: d.get_string("auth_user"),
            auth_pass: d.get_string("auth_pass"),
            credential_profile_id: d.get_string("credential_profile_id"),
            oauth2_provider: d.get_string("oauth2_provider"),
            client_certificate_password: d.get_string("client_certificate_password"),
            jwt_id: d.get_string("jwt_id"),
            use_name_server: d.get_bool("use_name_server"),
            http_protocol: d.get_string("http_protocol"),
            ssl_protocol: d.get_string("ssl_protocol"),
            up_status_codes: d.get_string("up_status_codes"),
            use_alpn: d.get_bool("use_alpn"),
            response_content_type: d.get_string("response_content_type"),
            match_json,
            json_schema,
            json_schema_check: d.get_bool("json_schema_check"),
            matching_keyword: common::keyword_check(d, "matching_keyword"),
            unmatching_keyword: common::keyword_check(d, "unmatching_keyword"),
            match_case: d.get_bool("match_case"),
            match_regex: common::keyword_check(d, "match_regex"),
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

    fn id_of(api: &RestApiMonitor) -> &str {
        &api.monitor_id
    }

    fn flatten(api: &RestApiMonitor, d: &mut ResourceData) {
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
        d.set("oauth2_provider", &api.oauth2_provider);
        d.set("client_certificate_password", &api.client_certificate_password);
        d.set("jwt_id", &api.jwt_id);
        d.set("use_name_server", api.use_name_server);
        d.set("http_protocol", &api.http_protocol);
        d.set("ssl_protocol", &api.ssl_protocol);
        d.set("up_status_codes", &api.up_status_codes);
        d.set("use_alpn", api.use_alpn);
        set_graphql(d, api.graphql.as_ref());

        d.set("response_content_type", &api.response_content_type);
        set_keyword_checks(
            d,
            [
                ("matching_keyword", api.matching_keyword.as_ref()),
                ("unmatching_keyword", api.unmatching_keyword.as_ref()),
                ("match_regex", api.match_regex.as_ref()),
            ],
        );
        set_json_checks(d, api.match_json.as_ref(), api.json_schema.as_ref());
        d.set("json_schema_check", api.json_schema_check);
        d.set("match_case", api.match_case);
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
