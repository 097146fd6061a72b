//! Account administration payloads
//!
//! Users, IT automation actions, credential profiles, maintenance windows,
//! business hours and subgroups, plus the two account-level singletons.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::types::{is_zero, lenient};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlAction {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub action_id: String,
    #[serde(deserialize_with = "lenient::int")]
    pub action_type: i64,
    pub action_name: String,
    pub action_url: String,
    #[serde(deserialize_with = "lenient::int")]
    pub action_timeout: i64,
    pub action_method: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub suppress_alert: bool,
    pub send_incident_parameters: bool,
    pub send_custom_parameters: bool,
    pub custom_parameters: String,
    pub send_in_json_format: bool,
    #[serde(rename = "send_mail")]
    pub send_email: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub oauth2_provider: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialProfile {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub credential_profile_id: String,
    #[serde(deserialize_with = "lenient::int")]
    pub credential_type: i64,
    pub credential_name: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertingPeriod {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertSettings {
    #[serde(deserialize_with = "lenient::int")]
    pub email_format: i64,
    pub alerting_period: AlertingPeriod,
    pub down: Vec<i64>,
    pub critical: Vec<i64>,
    pub trouble: Vec<i64>,
    pub up: Vec<i64>,
    pub applogs: Vec<i64>,
    pub anomaly: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_id: String,
    pub display_name: String,
    pub email_address: String,
    #[serde(deserialize_with = "lenient::int")]
    pub selection_type: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub user_role: i64,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub job_title: i64,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub mobile_settings: Map<String, Value>,
    pub alert_settings: AlertSettings,
    #[serde(rename = "user_groups", skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(rename = "notify_medium")]
    pub notification_medium: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    pub consent_for_non_eu_alerts: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subgroup {
    #[serde(rename = "group_id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub display_name: String,
    pub top_group_id: String,
    pub parent_group_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(deserialize_with = "lenient::int")]
    pub group_type: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<String>,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub health_threshold_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleMaintenance {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub maintenance_id: String,
    pub display_name: String,
    pub description: String,
    // 3 once, 2 weekly.
    #[serde(deserialize_with = "lenient::int")]
    pub maintenance_type: i64,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "timezone")]
    pub time_zone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub start_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub start_day: i64,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub end_day: i64,
    // Comes back as "", a number or null.
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub duration: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub week_days: Vec<i64>,
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub execute_every: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub maintenance_start_on: String,
    pub perform_monitoring: bool,
    #[serde(deserialize_with = "lenient::int")]
    pub selection_type: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSlot {
    #[serde(deserialize_with = "lenient::int")]
    pub day: i64,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessHour {
    #[serde(rename = "business_hours_id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub time_config: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsExternalId {
    pub external_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceKey {
    pub device_key: String,
}
