//! Monitor payloads, one struct per supported monitor type

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::types::{
    is_zero, lenient, ActionRef, Header, HttpResponseHeader, ValueAndSeverity,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub website: String,
    pub check_frequency: String,
    #[serde(deserialize_with = "lenient::int")]
    pub timeout: i64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub use_ipv6: bool,
    // HTTP configuration
    pub http_method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_content_type: String,
    #[serde(rename = "request_param", skip_serializing_if = "String::is_empty")]
    pub request_body: String,
    #[serde(rename = "custom_headers", skip_serializing_if = "Vec::is_empty")]
    pub request_headers: Vec<Header>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_agent: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_user: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_pass: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub credential_profile_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_certificate_password: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub use_name_server: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub forced_ips: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub up_status_codes: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_protocol: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub http_protocol: String,
    pub use_alpn: bool,
    // Content checks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_keyword: Option<ValueAndSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unmatching_keyword: Option<ValueAndSeverity>,
    pub match_case: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_regex: Option<ValueAndSeverity>,
    #[serde(rename = "response_headers_check")]
    pub response_headers: HttpResponseHeader,
    // Configuration profiles
    pub location_profile_id: String,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependency_resource_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub action_ids: Vec<ActionRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SslMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    pub domain_name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    #[serde(deserialize_with = "lenient::int")]
    pub timeout: i64,
    pub protocol: String,
    /// Sent as a number, returned as a string.
    #[serde(deserialize_with = "lenient::int")]
    pub port: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub expire_days: i64,
    #[serde(rename = "http_protocol")]
    pub http_protocol_version: String,
    pub ignore_domain_mismatch: bool,
    pub ignore_trust: bool,
    pub location_profile_id: String,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependency_resource_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestApiMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub website: String,
    pub check_frequency: String,
    #[serde(deserialize_with = "lenient::int")]
    pub timeout: i64,
    pub use_ipv6: bool,
    // HTTP configuration
    pub http_method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_content_type: String,
    #[serde(rename = "request_param", skip_serializing_if = "String::is_empty")]
    pub request_body: String,
    #[serde(rename = "custom_headers", skip_serializing_if = "Vec::is_empty")]
    pub request_headers: Vec<Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphql: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_agent: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_user: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_pass: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub credential_profile_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub oauth2_provider: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_certificate_password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub jwt_id: String,
    pub use_name_server: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub http_protocol: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_protocol: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub up_status_codes: String,
    pub use_alpn: bool,
    // Content checks
    #[serde(rename = "response_type")]
    pub response_content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_json: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_schema: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub json_schema_check: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_keyword: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unmatching_keyword: Option<Map<String, Value>>,
    pub match_case: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_regex: Option<Map<String, Value>>,
    #[serde(rename = "response_headers_check")]
    pub response_headers: HttpResponseHeader,
    // Configuration profiles
    pub location_profile_id: String,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependency_resource_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub action_ids: Vec<ActionRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CronMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    pub cron_expression: String,
    pub cron_tz: String,
    #[serde(deserialize_with = "lenient::int")]
    pub wait_time: i64,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub threshold_profile_id: String,
    pub notification_profile_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub on_call_schedule_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartbeatMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "unique_name")]
    pub name_in_ping_url: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub threshold_profile_id: String,
    pub notification_profile_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub on_call_schedule_id: String,
}

/// One expected DNS record for a DNS server monitor. Members depend on the
/// lookup type; unset members are left out of the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub addr: String,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub ttlo: i64,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub ttl: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target: String,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub priority: i64,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub port: i64,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub wt: i64,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub rcvd: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pns: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub admin: String,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub serial: i64,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub rff: i64,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub rtf: i64,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub expt: i64,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub mttl: i64,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub flg: i64,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub prtcl: i64,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub kalg: i64,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub kid: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,
    #[serde(rename = "certauth", skip_serializing_if = "String::is_empty")]
    pub cert_auth: String,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub halg: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsServerMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    pub domain_name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub dns_host: String,
    pub dns_port: String,
    pub use_ipv6: bool,
    pub check_frequency: String,
    #[serde(deserialize_with = "lenient::int")]
    pub timeout: i64,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub lookup_type: i64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub dnssec: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub deep_discovery: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub search_config: Vec<SearchConfig>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub on_call_schedule_id: String,
    pub location_profile_id: String,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependency_resource_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub action_ids: Vec<ActionRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebTransactionBrowserMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub base_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub selenium_script: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub script_type: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub perform_automation: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub check_frequency: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub async_dc_enabled: bool,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub browser_type: i64,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub think_time: i64,
    #[serde(rename = "ignore_cert_err", skip_serializing_if = "std::ops::Not::not")]
    pub ignore_cert_error: bool,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub ip_type: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_agent: String,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub browser_version: i64,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub page_load_time: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resolution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_details: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_details: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_headers: Vec<Header>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cookies: Vec<Header>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub threshold_profile_id: String,
    pub location_profile_id: String,
    pub notification_profile_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub on_call_schedule_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependency_resource_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub action_ids: Vec<ActionRef>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmazonMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub aws_external_id: String,
    pub role_arn: String,
    #[serde(rename = "aws_discovery_frequency", deserialize_with = "lenient::int")]
    pub discover_frequency: i64,
    #[serde(rename = "aws_discover_services")]
    pub discover_services: Vec<String>,
    pub notification_profile_id: String,
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcpServiceAccount {
    pub private_key: String,
    pub client_email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcpMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub project_id: String,
    #[serde(rename = "gcp_discover_services", skip_serializing_if = "Vec::is_empty")]
    pub discover_services: Vec<i64>,
    pub check_frequency: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub gcp_registration_method: String,
    #[serde(deserialize_with = "lenient::int")]
    pub stop_rediscover_option: i64,
    #[serde(rename = "gcp_sa_content")]
    pub service_account: GcpServiceAccount,
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    pub notification_profile_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebPageSpeedMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub website: String,
    pub check_frequency: String,
    #[serde(deserialize_with = "lenient::int")]
    pub timeout: i64,
    pub use_ipv6: bool,
    #[serde(deserialize_with = "lenient::int")]
    pub website_type: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub browser_type: i64,
    pub device_type: String,
    pub wpa_resolution: String,
    pub http_method: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_headers: Vec<Header>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_user: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_pass: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_agent: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub up_status_codes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_keyword: Option<ValueAndSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unmatching_keyword: Option<ValueAndSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_regex: Option<ValueAndSeverity>,
    pub match_case: bool,
    pub location_profile_id: String,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependency_resource_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub action_ids: Vec<ActionRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepDetails {
    pub step_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    // The sequence API wants the step timeout as a string.
    #[serde(deserialize_with = "lenient::string")]
    pub timeout: String,
    pub http_method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_content_type: String,
    #[serde(rename = "request_param", skip_serializing_if = "String::is_empty")]
    pub request_body: String,
    #[serde(rename = "custom_headers", skip_serializing_if = "Vec::is_empty")]
    pub request_headers: Vec<Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphql: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_agent: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_user: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_pass: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub oauth2_provider: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_certificate_password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub jwt_id: String,
    pub use_name_server: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub up_status_codes: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ssl_protocol: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub http_protocol: String,
    pub use_alpn: bool,
    #[serde(rename = "response_type")]
    pub response_content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_json: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_schema: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub json_schema_check: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_keyword: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unmatching_keyword: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_regex: Option<Map<String, Value>>,
    pub match_case: bool,
    #[serde(rename = "response_headers_check")]
    pub response_headers: HttpResponseHeader,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub step_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    pub step_details: Vec<StepDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestApiTransactionMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub check_frequency: String,
    pub steps: Vec<Step>,
    pub location_profile_id: String,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependency_resource_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub action_ids: Vec<ActionRef>,
}

// Server monitors come from the agent; only the settings below are writable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "hostname")]
    pub host_name: String,
    #[serde(rename = "ipaddress")]
    pub ip_address: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    #[serde(rename = "templateid")]
    pub template_id: String,
    #[serde(rename = "sm_poll_interval", deserialize_with = "lenient::int")]
    pub poll_interval: i64,
    #[serde(rename = "server_setting_it_aut")]
    pub it_automation_module: bool,
    #[serde(rename = "server_setting_plugins")]
    pub plugin_module: bool,
    pub log_needed: bool,
    pub perform_automation: bool,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_profile_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainExpiryMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub host_name: String,
    // Whois server queried for the domain.
    pub domain_name: String,
    #[serde(deserialize_with = "lenient::int")]
    pub port: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub timeout: i64,
    pub use_ipv6: bool,
    #[serde(deserialize_with = "lenient::int")]
    pub expire_days: i64,
    pub ignore_registry_date: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_keyword: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unmatching_keyword: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_regex: Option<Map<String, Value>>,
    pub match_case: bool,
    pub location_profile_id: String,
    pub notification_profile_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub on_call_schedule_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub action_ids: Vec<ActionRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IspMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    pub hostname: String,
    pub use_ipv6: bool,
    #[serde(rename = "type")]
    pub monitor_type: String,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub timeout: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub protocol: String,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub port: i64,
    pub check_frequency: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub on_call_schedule_id: String,
    pub perform_automation: bool,
    pub location_profile_id: String,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependency_resource_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub action_ids: Vec<ActionRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FtpTransferMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    pub host_name: String,
    pub protocol: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    #[serde(deserialize_with = "lenient::int")]
    pub port: i64,
    pub check_frequency: String,
    #[serde(deserialize_with = "lenient::int")]
    pub timeout: i64,
    pub check_upload: bool,
    pub check_download: bool,
    pub user_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub destination: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub credential_profile_id: String,
    pub perform_automation: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub on_call_schedule_id: String,
    pub location_profile_id: String,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependency_resource_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub action_ids: Vec<ActionRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    pub host_name: String,
    pub use_ipv6: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub invert_port_check: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub use_ssl: bool,
    #[serde(rename = "type")]
    pub monitor_type: String,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub timeout: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub application_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_keyword: Option<ValueAndSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unmatching_keyword: Option<ValueAndSeverity>,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub port: i64,
    pub perform_automation: bool,
    pub check_frequency: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub on_call_schedule_id: String,
    pub location_profile_id: String,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependency_resource_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub action_ids: Vec<ActionRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PingMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    pub host_name: String,
    pub use_ipv6: bool,
    #[serde(rename = "type")]
    pub monitor_type: String,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub timeout: i64,
    pub check_frequency: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub on_call_schedule_id: String,
    pub perform_automation: bool,
    pub location_profile_id: String,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependency_resource_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub action_ids: Vec<ActionRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoapMonitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub website: String,
    pub request_param: String,
    #[serde(deserialize_with = "lenient::int")]
    pub soap_attributes_severity: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub soap_attributes: Vec<Header>,
    #[serde(rename = "response_headers_check")]
    pub response_headers: HttpResponseHeader,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub timeout: i64,
    pub request_content_type: String,
    pub http_method: String,
    pub use_name_server: bool,
    pub http_protocol: String,
    pub use_ipv6: bool,
    pub response_type: String,
    pub check_frequency: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub credential_profile_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub up_status_codes: String,
    pub ssl_protocol: String,
    pub use_alpn: bool,
    pub perform_automation: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub on_call_schedule_id: String,
    pub location_profile_id: String,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependency_resource_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub action_ids: Vec<ActionRef>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ssl_monitor_port_is_read_from_string() {
        let monitor: SslMonitor = serde_json::from_value(json!({
            "monitor_id": "897654345678",
            "display_name": "ssl",
            "domain_name": "www.example.com",
            "type": "SSL_CERT",
            "port": "443",
            "timeout": 30
        }))
        .expect("ssl monitor");

        assert_eq!(monitor.port, 443);
        assert_eq!(
            serde_json::to_value(&monitor).expect("serialize")["port"],
            json!(443)
        );
    }

    #[test]
    fn website_monitor_serializes_vendor_member_names() {
        let monitor = WebsiteMonitor {
            display_name: "foo".to_string(),
            monitor_type: "URL".to_string(),
            request_body: "a=b".to_string(),
            third_party_service_ids: vec!["7".to_string()],
            ..WebsiteMonitor::default()
        };

        let value = serde_json::to_value(&monitor).expect("serialize");

        assert_eq!(value["type"], json!("URL"));
        assert_eq!(value["request_param"], json!("a=b"));
        assert_eq!(value["third_party_services"], json!(["7"]));
        assert!(value.get("monitor_id").is_none());
        assert!(value.get("custom_headers").is_none());
    }

    #[test]
    fn server_monitor_reads_agent_member_names() {
        let monitor: ServerMonitor = serde_json::from_value(json!({
            "monitor_id": "9",
            "display_name": "db-01",
            "hostname": "db-01.internal",
            "ipaddress": "10.0.0.4",
            "templateid": "17",
            "sm_poll_interval": "5",
            "server_setting_it_aut": true,
            "type": "SERVER"
        }))
        .expect("server monitor");

        assert_eq!(monitor.host_name, "db-01.internal");
        assert_eq!(monitor.ip_address, "10.0.0.4");
        assert_eq!(monitor.template_id, "17");
        assert_eq!(monitor.poll_interval, 5);
        assert!(monitor.it_automation_module);
        assert!(!monitor.plugin_module);
    }
}
