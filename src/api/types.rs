//! Vendor data transfer objects shared across endpoints
//!
//! Field names follow the Site24x7 JSON payloads. Several numeric attributes
//! are accepted as integers but returned as strings, so they go through the
//! lenient decoders below.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub mod lenient {
    use serde::{de::Error, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Float(f64),
        Str(String),
        Null(()),
    }

    pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match IntOrString::deserialize(deserializer)? {
            IntOrString::Int(value) => Ok(value),
            IntOrString::Float(value) => Ok(value as i64),
            IntOrString::Str(value) if value.trim().is_empty() => Ok(0),
            IntOrString::Str(value) => value.trim().parse().map_err(D::Error::custom),
            IntOrString::Null(()) => Ok(0),
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match IntOrString::deserialize(deserializer)? {
            IntOrString::Int(value) => value.to_string(),
            IntOrString::Float(value) => value.to_string(),
            IntOrString::Str(value) => value,
            IntOrString::Null(()) => String::new(),
        })
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrObject {
        Bool(bool),
        Object { value: Option<bool> },
        Null(()),
    }

    pub fn bool_or_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match BoolOrObject::deserialize(deserializer)? {
            BoolOrObject::Bool(value) => value,
            BoolOrObject::Object { value } => value.unwrap_or_default(),
            BoolOrObject::Null(()) => false,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Status(pub i64);

impl Status {
    pub const DOWN: Status = Status(0);
    pub const UP: Status = Status(1);
    pub const TROUBLE: Status = Status(2);
    pub const CRITICAL: Status = Status(3);
    pub const SUSPENDED: Status = Status(5);
    pub const MAINTENANCE: Status = Status(7);
    pub const DISCOVERY: Status = Status(9);
    pub const CONFIGURATION_ERROR: Status = Status(10);
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::int(deserializer).map(Status)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonitorType {
    #[serde(rename = "URL")]
    Url,
    #[serde(rename = "HOMEPAGE")]
    Homepage,
    #[serde(rename = "SSL_CERT")]
    SslCert,
    #[serde(rename = "RESTAPI")]
    RestApi,
    #[serde(rename = "RESTAPISEQ")]
    RestApiSeq,
    #[serde(rename = "AMAZON")]
    Amazon,
    #[serde(rename = "SERVER")]
    Server,
    #[serde(rename = "CRON")]
    Cron,
    #[serde(rename = "HEARTBEAT")]
    Heartbeat,
    #[serde(rename = "DNS")]
    Dns,
    #[serde(rename = "DOMAINEXPIRY")]
    DomainExpiry,
    #[serde(rename = "REALBROWSER")]
    RealBrowser,
    #[serde(rename = "FTP")]
    Ftp,
    #[serde(rename = "ISP")]
    Isp,
    #[serde(rename = "PORT")]
    Port,
    #[serde(rename = "PING")]
    Ping,
    #[serde(rename = "SOAP")]
    Soap,
    #[serde(rename = "GCP")]
    Gcp,
}

impl MonitorType {
    pub const ALL: [MonitorType; 18] = [
        MonitorType::Url,
        MonitorType::Homepage,
        MonitorType::SslCert,
        MonitorType::RestApi,
        MonitorType::RestApiSeq,
        MonitorType::Amazon,
        MonitorType::Server,
        MonitorType::Cron,
        MonitorType::Heartbeat,
        MonitorType::Dns,
        MonitorType::DomainExpiry,
        MonitorType::RealBrowser,
        MonitorType::Ftp,
        MonitorType::Isp,
        MonitorType::Port,
        MonitorType::Ping,
        MonitorType::Soap,
        MonitorType::Gcp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MonitorType::Url => "URL",
            MonitorType::Homepage => "HOMEPAGE",
            MonitorType::SslCert => "SSL_CERT",
            MonitorType::RestApi => "RESTAPI",
            MonitorType::RestApiSeq => "RESTAPISEQ",
            MonitorType::Amazon => "AMAZON",
            MonitorType::Server => "SERVER",
            MonitorType::Cron => "CRON",
            MonitorType::Heartbeat => "HEARTBEAT",
            MonitorType::Dns => "DNS",
            MonitorType::DomainExpiry => "DOMAINEXPIRY",
            MonitorType::RealBrowser => "REALBROWSER",
            MonitorType::Ftp => "FTP",
            MonitorType::Isp => "ISP",
            MonitorType::Port => "PORT",
            MonitorType::Ping => "PING",
            MonitorType::Soap => "SOAP",
            MonitorType::Gcp => "GCP",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|monitor_type| monitor_type.as_str()).collect()
    }
}

impl fmt::Display for MonitorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueAndSeverity {
    pub severity: Status,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionRef {
    pub action_id: String,
    pub alert_type: Status,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpResponseHeader {
    pub severity: Status,
    pub value: Vec<Header>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Monitor {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitor_id: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub location_profile_id: String,
    pub notification_profile_id: String,
    pub threshold_profile_id: String,
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
pub struct MonitorGroup {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub group_id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<String>,
    #[serde(deserialize_with = "lenient::int")]
    pub health_threshold_count: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependency_resource_ids: Vec<String>,
    pub suppress_alert: bool,
    #[serde(
        rename = "selection_type",
        deserialize_with = "lenient::int",
        skip_serializing_if = "is_zero"
    )]
    pub dependency_resource_type: i64,
    pub notification_profile_id: String,
    #[serde(rename = "healthcheck_profile_id")]
    pub health_check_profile_id: String,
    #[serde(rename = "tags", skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_group_ids: Vec<String>,
    #[serde(rename = "third_party_services", skip_serializing_if = "Vec::is_empty")]
    pub third_party_service_ids: Vec<String>,
    pub enable_incident_management: bool,
    #[serde(deserialize_with = "lenient::int")]
    pub healing_period: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub alert_frequency: i64,
    pub alert_periodically: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag_id: String,
    pub tag_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag_value: String,
    // 1 user defined, 2 generated from AWS.
    #[serde(deserialize_with = "lenient::int", skip_serializing_if = "is_zero")]
    pub tag_type: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag_color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroup {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_group_id: String,
    pub display_name: String,
    pub users: Vec<String>,
    pub attribute_group_id: String,
    #[serde(deserialize_with = "lenient::int")]
    pub product_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationProfile {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub profile_id: String,
    pub profile_name: String,
    pub rca_needed: bool,
    pub notify_after_executing_actions: bool,
    #[serde(deserialize_with = "lenient::int")]
    pub downtime_notification_delay: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub persistent_notification: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub escalation_user_group_id: String,
    #[serde(deserialize_with = "lenient::int")]
    pub escalation_wait_time: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub escalation_automations: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub escalation_services: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub template_id: String,
    pub suppress_automation: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdProfile {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub profile_id: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub profile_name: String,
    // 1 static threshold, 2 AI based threshold.
    #[serde(deserialize_with = "lenient::int")]
    pub profile_type: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub down_location_threshold: i64,
    #[serde(
        deserialize_with = "lenient::bool_or_value",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub website_content_modified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_threshold: Option<Map<String, Value>>,
    #[serde(rename = "hb_availability1", skip_serializing_if = "Option::is_none")]
    pub trouble_if_not_pinged_more_than: Option<Map<String, Value>>,
    #[serde(rename = "hb_availability2", skip_serializing_if = "Option::is_none")]
    pub down_if_not_pinged_more_than: Option<Map<String, Value>>,
    #[serde(rename = "hb_availability3", skip_serializing_if = "Option::is_none")]
    pub trouble_if_pinged_within: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationProfile {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub profile_id: String,
    pub profile_name: String,
    pub primary_location: String,
    pub secondary_locations: Vec<String>,
    #[serde(rename = "restrict_alt_loc")]
    pub restrict_alternate_location_polling: bool,
    #[serde(rename = "outer_regions_location_consent")]
    pub location_consent_for_outer_regions: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MspCustomer {
    pub name: String,
    pub zaaid: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timezone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub industry: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub roletitle: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub invite: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customer_groups: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub digest: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub zuids: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub customer_company: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub customer_website: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email_address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub portal_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub captcha: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub zaaid: String,
}

pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}
