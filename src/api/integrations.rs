//! Third party integration payloads

use serde::{Deserialize, Serialize};

use crate::api::types::{lenient, Header};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookIntegration {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub service_id: String,
    #[serde(deserialize_with = "lenient::int", skip_serializing)]
    pub service_status: i64,
    pub name: String,
    pub url: String,
    #[serde(deserialize_with = "lenient::int")]
    pub timeout: i64,
    pub method: String,
    /// 0 all monitors, 2 selected monitors, 3 tags.
    #[serde(deserialize_with = "lenient::int")]
    pub selection_type: i64,
    pub trouble_alert: bool,
    pub critical_alert: bool,
    pub down_alert: bool,
    pub is_poller_webhook: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub poller: String,
    pub send_incident_parameters: bool,
    pub send_custom_parameters: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub custom_parameters: String,
    pub send_in_json_format: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_method: String,
    #[serde(rename = "username", skip_serializing_if = "String::is_empty")]
    pub user_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub oauth2_provider: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_agent: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_headers: Vec<Header>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<String>,
    #[serde(rename = "alert_tags_id", skip_serializing_if = "Vec::is_empty")]
    pub alert_tag_ids: Vec<String>,
    pub manage_tickets: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackIntegration {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub service_id: String,
    #[serde(deserialize_with = "lenient::int", skip_serializing)]
    pub service_status: i64,
    pub name: String,
    pub url: String,
    pub sender_name: String,
    pub title: String,
    #[serde(deserialize_with = "lenient::int")]
    pub selection_type: i64,
    pub trouble_alert: bool,
    pub critical_alert: bool,
    pub down_alert: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<String>,
    #[serde(rename = "alert_tags_id", skip_serializing_if = "Vec::is_empty")]
    pub alert_tag_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerDutyIntegration {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub service_id: String,
    #[serde(deserialize_with = "lenient::int", skip_serializing)]
    pub service_status: i64,
    pub name: String,
    pub service_key: String,
    #[serde(deserialize_with = "lenient::int")]
    pub selection_type: i64,
    pub sender_name: String,
    pub title: String,
    pub trouble_alert: bool,
    pub critical_alert: bool,
    pub down_alert: bool,
    pub manual_resolve: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub send_custom_parameters: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub custom_parameters: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<String>,
    #[serde(rename = "alert_tags_id", skip_serializing_if = "Vec::is_empty")]
    pub alert_tag_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpsgenieIntegration {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub service_id: String,
    #[serde(deserialize_with = "lenient::int", skip_serializing)]
    pub service_status: i64,
    pub name: String,
    pub url: String,
    #[serde(deserialize_with = "lenient::int")]
    pub selection_type: i64,
    pub trouble_alert: bool,
    pub critical_alert: bool,
    pub down_alert: bool,
    pub manual_resolve: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub send_custom_parameters: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub custom_parameters: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<String>,
    #[serde(rename = "alert_tags_id", skip_serializing_if = "Vec::is_empty")]
    pub alert_tag_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceNowIntegration {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub service_id: String,
    #[serde(deserialize_with = "lenient::int", skip_serializing)]
    pub service_status: i64,
    pub name: String,
    pub instance_url: String,
    pub sender_name: String,
    pub title: String,
    pub user_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(deserialize_with = "lenient::int")]
    pub selection_type: i64,
    pub trouble_alert: bool,
    pub critical_alert: bool,
    pub down_alert: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub send_custom_parameters: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub custom_parameters: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<String>,
    #[serde(rename = "alert_tags_id", skip_serializing_if = "Vec::is_empty")]
    pub alert_tag_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectwiseIntegration {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub service_id: String,
    #[serde(deserialize_with = "lenient::int", skip_serializing)]
    pub service_status: i64,
    pub name: String,
    pub url: String,
    pub company: String,
    pub public_key: String,
    pub private_key: String,
    pub company_id: String,
    pub close_status: String,
    #[serde(deserialize_with = "lenient::int")]
    pub selection_type: i64,
    pub trouble_alert: bool,
    pub critical_alert: bool,
    pub down_alert: bool,
    pub manual_resolve: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub send_custom_parameters: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub custom_parameters: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<String>,
    #[serde(rename = "alert_tags_id", skip_serializing_if = "Vec::is_empty")]
    pub alert_tag_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_groups: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramIntegration {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub service_id: String,
    #[serde(deserialize_with = "lenient::int", skip_serializing)]
    pub service_status: i64,
    pub name: String,
    #[serde(rename = "url")]
    pub channel_url: String,
    pub token: String,
    pub title: String,
    #[serde(deserialize_with = "lenient::int")]
    pub selection_type: i64,
    pub trouble_alert: bool,
    pub critical_alert: bool,
    pub down_alert: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitors: Vec<String>,
    #[serde(rename = "alert_tags_id", skip_serializing_if = "Vec::is_empty")]
    pub alert_tag_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn selection_type_may_arrive_as_string() {
        let integration: SlackIntegration = serde_json::from_value(json!({
            "service_id": "113770000023231001",
            "service_status": 1,
            "name": "Site24x7-Slack Integration",
            "url": "https://hooks.slack.com/services/T0/B0/XX",
            "selection_type": "2",
            "sender_name": "Site24x7",
            "title": "Site24x7 Alert",
            "monitors": ["1"]
        }))
        .expect("slack integration");

        assert_eq!(integration.selection_type, 2);
        assert_eq!(integration.service_status, 1);
        assert!(serde_json::to_value(&integration)
            .expect("serialize")
            .get("service_status")
            .is_none());
    }

    #[test]
    fn telegram_channel_url_travels_as_url() {
        let integration = TelegramIntegration {
            name: "ops".to_string(),
            channel_url: "https://t.me/site24x7_ops".to_string(),
            token: "bot-token".to_string(),
            ..TelegramIntegration::default()
        };

        let value = serde_json::to_value(&integration).expect("serialize");

        assert_eq!(value["url"], json!("https://t.me/site24x7_ops"));
        assert_eq!(value["token"], json!("bot-token"));
        assert!(value.get("channel_url").is_none());
    }
}
