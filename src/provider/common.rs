//! Attributes and conversions shared by the monitor resources

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use crate::{
    api::{
        types::{ActionRef, Header, HttpResponseHeader, MonitorType, Status, ValueAndSeverity},
        Site24x7Client,
    },
    provider::{
        defaults,
        resource_data::ResourceData,
        schema::{Field, Validation},
        ProviderError,
    },
};

pub type Fields = Vec<(&'static str, Field)>;

pub fn location_profile_fields() -> Fields {
    vec![
        (
            "location_profile_id",
            Field::string()
                .computed()
                .describe("Location profile to be associated with the monitor."),
        ),
        (
            "location_profile_name",
            Field::string()
                .computed()
                .describe("Name of the location profile to be associated with the monitor."),
        ),
    ]
}

pub fn notification_profile_fields() -> Fields {
    vec![
        (
            "notification_profile_id",
            Field::string()
                .computed()
                .describe("Notification profile to be associated with the monitor."),
        ),
        (
            "notification_profile_name",
            Field::string()
                .computed()
                .describe("Name of the notification profile to be associated with the monitor."),
        ),
    ]
}

pub fn threshold_profile_fields() -> Fields {
    vec![(
        "threshold_profile_id",
        Field::string()
            .computed()
            .describe("Threshold profile to be associated with the monitor."),
    )]
}

pub fn monitor_group_fields() -> Fields {
    vec![
        (
            "monitor_groups",
            Field::string_list().describe("List of monitor groups to which the monitor has to be associated."),
        ),
        (
            "dependency_resource_ids",
            Field::string_set()
                .describe("List of dependent resource ids. Alerts are suppressed while a dependency is down."),
        ),
    ]
}

pub fn user_group_fields() -> Fields {
    vec![
        (
            "user_group_ids",
            Field::string_list()
                .computed()
                .describe("List of user groups to be notified when the monitor is down."),
        ),
        (
            "user_group_names",
            Field::string_list()
                .computed()
                .describe("Substrings of the user group names to be associated with the monitor."),
        ),
    ]
}

pub fn tag_fields() -> Fields {
    vec![
        (
            "tag_ids",
            Field::string_list()
                .computed()
                .describe("List of tags to be associated with the monitor."),
        ),
        (
            "tag_names",
            Field::string_list().describe("List of tag names to be associated with the monitor."),
        ),
    ]
}

pub fn third_party_service_fields() -> Fields {
    vec![(
        "third_party_service_ids",
        Field::string_list().describe("List of third party service IDs to be associated with the monitor."),
    )]
}

pub fn action_fields() -> Fields {
    vec![(
        "actions",
        Field::string_map().describe("Action to be performed on monitor status changes."),
    )]
}

pub fn on_call_schedule_fields() -> Fields {
    vec![(
        "on_call_schedule_id",
        Field::string().describe("Mandatory, if the user group ID is not given."),
    )]
}

pub fn content_check_fields(
    value_key: &'static str,
    severity_key: &'static str,
    description: &'static str,
) -> Fields {
    vec![
        (value_key, Field::string().describe(description)),
        (
            severity_key,
            Field::int()
                .default(Status::TROUBLE.0)
                .describe("Alert type to be raised when the check fails. 0 down, 2 trouble."),
        ),
    ]
}

pub fn response_header_fields() -> Fields {
    vec![
        (
            "response_headers",
            Field::string_map().describe("Response headers to be checked."),
        ),
        (
            "response_headers_severity",
            Field::int()
                .default(Status::TROUBLE.0)
                .validate(Validation::IntInSlice(&[0, 2]))
                .describe("Alert type to be raised when a response header check fails."),
        ),
    ]
}

pub fn response_headers_check(d: &ResourceData) -> HttpResponseHeader {
    let headers = d.get_string_map("response_headers");
    if headers.is_empty() {
        return HttpResponseHeader::default();
    }
    HttpResponseHeader {
        severity: Status(d.get_int("response_headers_severity")),
        value: headers_from_map(&headers),
    }
}

pub fn set_response_headers_check(d: &mut ResourceData, check: &HttpResponseHeader) {
    d.set("response_headers", headers_to_map(&check.value));
    d.set("response_headers_severity", check.severity);
}

pub fn headers_from_map(map: &BTreeMap<String, String>) -> Vec<Header> {
    map.iter()
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| Header {
            name: name.clone(),
            value: value.clone(),
        })
        .collect()
}

pub fn headers_to_map(headers: &[Header]) -> BTreeMap<String, String> {
    headers
        .iter()
        .filter(|header| !header.name.is_empty())
        .map(|header| (header.name.clone(), header.value.clone()))
        .collect()
}

pub fn actions_from_map(map: &BTreeMap<String, String>) -> Result<Vec<ActionRef>, ProviderError> {
    map.iter()
        .map(|(alert_type, action_id)| {
            let status = alert_type.trim().parse::<i64>().map_err(|_| {
                ProviderError::Validation(format!(
                    "invalid alert type \"{alert_type}\" in actions, expected a status code"
                ))
            })?;
            Ok(ActionRef {
                action_id: action_id.clone(),
                alert_type: Status(status),
            })
        })
        .collect()
}

pub fn actions_to_map(actions: &[ActionRef]) -> BTreeMap<String, String> {
    actions
        .iter()
        .map(|action| (action.alert_type.to_string(), action.action_id.clone()))
        .collect()
}

pub fn value_and_severity(
    d: &ResourceData,
    value_key: &str,
    severity_key: &str,
) -> Option<ValueAndSeverity> {
    d.get_ok(value_key)?;
    Some(ValueAndSeverity {
        value: d.get_string(value_key),
        severity: Status(d.get_int(severity_key)),
    })
}

pub fn set_value_and_severity(
    d: &mut ResourceData,
    check: Option<&ValueAndSeverity>,
    value_key: &str,
    severity_key: &str,
) {
    if let Some(check) = check {
        d.set(value_key, &check.value);
        d.set(severity_key, check.severity);
    }
}

// `{severity, value}` keyword check. Terraform hands the map over with
// string values, the API expects a numeric severity.
pub fn keyword_check(d: &ResourceData, key: &str) -> Option<Map<String, Value>> {
    let entries = d.get_string_map(key);
    if entries.is_empty() {
        return None;
    }
    Some(
        entries
            .into_iter()
            .map(|(name, value)| {
                let value = match (name.as_str(), value.trim().parse::<i64>()) {
                    ("severity", Ok(severity)) => json!(severity),
                    _ => json!(value),
                };
                (name, value)
            })
            .collect(),
    )
}

// Terraform maps hold strings only.
pub fn string_values(entries: &Map<String, Value>) -> Map<String, Value> {
    entries
        .iter()
        .map(|(name, value)| {
            let value = match value {
                Value::String(value) => value.clone(),
                other => other.to_string(),
            };
            (name.clone(), Value::String(value))
        })
        .collect()
}

pub fn sorted(mut values: Vec<String>) -> Vec<String> {
    values.sort();
    values
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitorProfiles {
    pub location_profile_id: String,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
    pub user_group_ids: Vec<String>,
    pub tag_ids: Vec<String>,
}

impl MonitorProfiles {
    pub async fn resolve(
        client: &Site24x7Client,
        d: &mut ResourceData,
        monitor_type: MonitorType,
        with_location: bool,
    ) -> Result<Self, ProviderError> {
        let location_profile_id = if with_location {
            defaults::location_profile_id(client, d).await?
        } else {
            String::new()
        };
        let threshold_profile_id = defaults::threshold_profile_id(client, d, monitor_type).await?;
        let notification_profile_id = defaults::set_notification_profile(client, d).await?;
        let user_group_ids = defaults::set_user_groups(client, d, false).await?;
        let tag_ids = defaults::set_tags(client, d).await?;

        Ok(Self {
            location_profile_id,
            notification_profile_id,
            threshold_profile_id,
            user_group_ids,
            tag_ids,
        })
    }
}
