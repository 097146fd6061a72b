//! Notification, threshold and location profiles
//!
//! Threshold profiles are shaped by the monitor type they apply to: heartbeat
//! profiles carry ping availability rules, every other type carries response
//! time thresholds.

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::{
    api::{
        endpoints::Endpoint,
        types::{LocationProfile, MonitorType, NotificationProfile, Status, ThresholdProfile},
        Site24x7Client,
    },
    provider::{
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema, Validation},
        ProviderError,
    },
};

pub struct NotificationProfileMapping;

#[async_trait]
impl Mapping for NotificationProfileMapping {
    type Api = NotificationProfile;

    const TYPE_NAME: &'static str = "site24x7_notification_profile";

    fn schema() -> Schema {
        Schema::new([
            (
                "profile_name",
                Field::string()
                    .required()
                    .describe("Display Name for the notification profile"),
            ),
            (
                "rca_needed",
                Field::bool()
                    .default(true)
                    .describe("Settings to send root cause analysis when monitor goes down."),
            ),
            (
                "notify_after_executing_actions",
                Field::bool()
                    .default(false)
                    .describe("Settings to downtime only after executing configured monitor actions."),
            ),
            (
                "downtime_notification_delay",
                Field::int()
                    .default(1)
                    .validate(Validation::IntInSlice(&[1, 2, 3, 4, 5]))
                    .describe("Configuration for delayed notification. Default value is 1."),
            ),
            (
                "persistent_notification",
                Field::int()
                    .validate(Validation::IntInSlice(&[-1, 1, 2, 3, 4, 5]))
                    .describe("Settings to receive persistent notification after number of errors."),
            ),
            (
                "escalation_user_group_id",
                Field::string().describe("User group ID for downtime escalation."),
            ),
            (
                "escalation_wait_time",
                Field::int().describe(
                    "Duration of Downtime before Escalation. Mandatory if any user group is added for escalation.",
                ),
            ),
            (
                "escalation_automations",
                Field::string_list().describe("Execute configured IT automations during an escalation."),
            ),
            (
                "escalation_services",
                Field::string_list()
                    .describe("Invoke and manage escalations in your preferred third party services."),
            ),
            (
                "template_id",
                Field::string().describe("Email template ID for notification"),
            ),
            (
                "suppress_automation",
                Field::bool()
                    .describe("Settings to stop an automation being executed on the dependent monitors."),
            ),
        ])
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<NotificationProfile> {
        client.notification_profiles()
    }

    async fn to_api(
        d: &mut ResourceData,
        _client: &Site24x7Client,
    ) -> Result<NotificationProfile, ProviderError> {
        Ok(NotificationProfile {
            profile_id: d.id().to_string(),
            profile_name: d.get_string("profile_name"),
            rca_needed: d.get_bool("rca_needed"),
            notify_after_executing_actions: d.get_bool("notify_after_executing_actions"),
            downtime_notification_delay: d.get_int("downtime_notification_delay"),
            persistent_notification: d.get_int("persistent_notification"),
            escalation_user_group_id: d.get_string("escalation_user_group_id"),
            escalation_wait_time: d.get_int("escalation_wait_time"),
            escalation_automations: d.get_string_list("escalation_automations"),
            escalation_services: d.get_string_list("escalation_services"),
            template_id: d.get_string("template_id"),
            suppress_automation: d.get_bool("suppress_automation"),
        })
    }

    fn id_of(api: &NotificationProfile) -> &str {
        &api.profile_id
    }

    fn flatten(api: &NotificationProfile, d: &mut ResourceData) {
        d.set("profile_name", &api.profile_name);
        d.set("rca_needed", api.rca_needed);
        d.set("notify_after_executing_actions", api.notify_after_executing_actions);
        d.set("downtime_notification_delay", api.downtime_notification_delay);
        d.set("persistent_notification", api.persistent_notification);
        d.set("escalation_user_group_id", &api.escalation_user_group_id);
        d.set("escalation_wait_time", api.escalation_wait_time);
        d.set("escalation_automations", &api.escalation_automations);
        d.set("escalation_services", &api.escalation_services);
        d.set("template_id", &api.template_id);
        d.set("suppress_automation", api.suppress_automation);
    }
}

pub struct ThresholdProfileMapping;

const RESPONSE_TIME_THRESHOLDS: [(&str, &str, Status); 4] = [
    ("primary_response_time_trouble_threshold", "primary", Status::TROUBLE),
    ("primary_response_time_critical_threshold", "primary", Status::CRITICAL),
    ("secondary_response_time_trouble_threshold", "secondary", Status::TROUBLE),
    ("secondary_response_time_critical_threshold", "secondary", Status::CRITICAL),
];

fn availability_rule(polls: i64) -> Map<String, Value> {
    let rule = json!({
        "comparison_operator": 1,
        "trouble": polls,
        "strategy": 1,
        "polls_check": 5
    });
    match rule {
        Value::Object(rule) => rule,
        _ => Map::new(),
    }
}

fn rule_value(rule: &Option<Map<String, Value>>) -> Option<&Value> {
    rule.as_ref().and_then(|rule| rule.get("trouble"))
}

fn response_time_threshold(d: &ResourceData) -> Option<Map<String, Value>> {
    let mut thresholds = Map::new();
    for (key, group, severity) in RESPONSE_TIME_THRESHOLDS {
        if d.get_ok(key).is_none() {
            continue;
        }
        let mut threshold = d.get_map(key);
        threshold.insert("severity".to_string(), Value::String(severity.to_string()));

        if let Value::Array(list) = thresholds
            .entry(group)
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            list.push(Value::Object(threshold));
        }
    }
    Some(thresholds).filter(|thresholds| !thresholds.is_empty())
}

fn severity_of(threshold: &Map<String, Value>) -> Option<i64> {
    match threshold.get("severity")? {
        Value::Number(number) => number.as_i64(),
        Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    }
}

fn flatten_response_time_threshold(thresholds: &Map<String, Value>, d: &mut ResourceData) {
    for (key, group, severity) in RESPONSE_TIME_THRESHOLDS {
        let Some(Value::Array(list)) = thresholds.get(group) else {
            continue;
        };
        let matching = list
            .iter()
            .filter_map(Value::as_object)
            .find(|threshold| severity_of(threshold) == Some(severity.0));
        if let Some(threshold) = matching {
            let mut threshold = threshold.clone();
            threshold.remove("severity");
            d.set(key, Value::Object(threshold));
        }
    }
}

#[async_trait]
impl Mapping for ThresholdProfileMapping {
    type Api = ThresholdProfile;

    const TYPE_NAME: &'static str = "site24x7_threshold_profile";

    fn schema() -> Schema {
        let response_time = |description| Field::int_map().describe(description);

        Schema::new([
            (
                "profile_name",
                Field::string()
                    .required()
                    .describe("Display Name for the threshold profile"),
            ),
            (
                "type",
                Field::string()
                    .required()
                    .describe("Type of the monitor for which the threshold profile is being created."),
            ),
            (
                "profile_type",
                Field::int()
                    .default(1)
                    .validate(Validation::IntInSlice(&[1, 2]))
                    .describe("Static Threshold(1) or AI-based Threshold(2)"),
            ),
            (
                "down_location_threshold",
                Field::int()
                    .default(3)
                    .validate(Validation::IntInSlice(&[0, 1, 2, 3, 4, 5, 6, 7, 8]))
                    .describe(
                        "Triggers alert when the monitor is down from configured number of locations. Default value is '3'",
                    ),
            ),
            (
                "website_content_modified",
                Field::bool()
                    .default(false)
                    .describe("Triggers alert when Website content is modified."),
            ),
            (
                "primary_response_time_trouble_threshold",
                response_time("Response time trouble threshold for the primary monitoring location."),
            ),
            (
                "primary_response_time_critical_threshold",
                response_time("Response time critical threshold for the primary monitoring location."),
            ),
            (
                "secondary_response_time_trouble_threshold",
                response_time("Response time trouble threshold for the secondary monitoring locations."),
            ),
            (
                "secondary_response_time_critical_threshold",
                response_time("Response time critical threshold for the secondary monitoring locations."),
            ),
            (
                "trouble_if_not_pinged_more_than",
                Field::int().describe("Heartbeat: trouble when no ping arrives for this many minutes."),
            ),
            (
                "down_if_not_pinged_more_than",
                Field::int().describe("Heartbeat: down when no ping arrives for this many minutes."),
            ),
            (
                "trouble_if_pinged_within",
                Field::int().describe("Heartbeat: trouble when a ping arrives within this many minutes."),
            ),
        ])
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<ThresholdProfile> {
        client.threshold_profiles()
    }

    async fn to_api(
        d: &mut ResourceData,
        _client: &Site24x7Client,
    ) -> Result<ThresholdProfile, ProviderError> {
        let monitor_type = d.get_string("type");
        let mut profile = ThresholdProfile {
            profile_id: d.id().to_string(),
            profile_name: d.get_string("profile_name"),
            monitor_type: monitor_type.clone(),
            profile_type: d.get_int("profile_type"),
            ..ThresholdProfile::default()
        };

        if monitor_type == MonitorType::Heartbeat.as_str() {
            let rule = |key| d.get_ok(key).map(|_| availability_rule(d.get_int(key)));
            profile.trouble_if_not_pinged_more_than = rule("trouble_if_not_pinged_more_than");
            profile.down_if_not_pinged_more_than = rule("down_if_not_pinged_more_than");
            profile.trouble_if_pinged_within = rule("trouble_if_pinged_within");
        } else {
            profile.down_location_threshold = d.get_int("down_location_threshold");
            profile.website_content_modified = d.get_bool("website_content_modified");
            profile.response_time_threshold = response_time_threshold(d);
        }

        Ok(profile)
    }

    fn id_of(api: &ThresholdProfile) -> &str {
        &api.profile_id
    }

    fn flatten(api: &ThresholdProfile, d: &mut ResourceData) {
        d.set("profile_name", &api.profile_name);
        d.set("type", &api.monitor_type);
        d.set("profile_type", api.profile_type);

        if api.monitor_type == MonitorType::Heartbeat.as_str() {
            let rules = [
                ("trouble_if_not_pinged_more_than", &api.trouble_if_not_pinged_more_than),
                ("down_if_not_pinged_more_than", &api.down_if_not_pinged_more_than),
                ("trouble_if_pinged_within", &api.trouble_if_pinged_within),
            ];
            for (key, rule) in rules {
                if let Some(value) = rule_value(rule) {
                    d.set(key, value);
                }
            }
        } else {
            d.set("down_location_threshold", api.down_location_threshold);
            d.set("website_content_modified", api.website_content_modified);
            if let Some(thresholds) = &api.response_time_threshold {
                flatten_response_time_threshold(thresholds, d);
            }
        }
    }
}

pub struct LocationProfileMapping;

#[async_trait]
impl Mapping for LocationProfileMapping {
    type Api = LocationProfile;

    const TYPE_NAME: &'static str = "site24x7_location_profile";

    fn schema() -> Schema {
        Schema::new([
            (
                "profile_name",
                Field::string()
                    .required()
                    .describe("Display name for the location profile."),
            ),
            (
                "primary_location",
                Field::string()
                    .required()
                    .describe("Primary location for monitoring."),
            ),
            (
                "secondary_locations",
                Field::string_list()
                    .required()
                    .describe("List of secondary locations for monitoring"),
            ),
            (
                "restrict_alternate_location_polling",
                Field::bool().describe(
                    "Restricts polling of the resource from the selected locations alone in the Location Profile, overrides the alternate location poll logic.",
                ),
            ),
            (
                "outer_regions_location_consent",
                Field::bool()
                    .describe("Consent to poll from locations outside the account's home region."),
            ),
        ])
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<LocationProfile> {
        client.location_profiles()
    }

    async fn to_api(
        d: &mut ResourceData,
        _client: &Site24x7Client,
    ) -> Result<LocationProfile, ProviderError> {
        Ok(LocationProfile {
            profile_id: d.id().to_string(),
            profile_name: d.get_string("profile_name"),
            primary_location: d.get_string("primary_location"),
            secondary_locations: d.get_string_list("secondary_locations"),
            restrict_alternate_location_polling: d.get_bool("restrict_alternate_location_polling"),
            location_consent_for_outer_regions: d.get_bool("outer_regions_location_consent"),
        })
    }

    fn id_of(api: &LocationProfile) -> &str {
        &api.profile_id
    }

    fn flatten(api: &LocationProfile, d: &mut ResourceData) {
        d.set("profile_name", &api.profile_name);
        d.set("primary_location", &api.primary_location);
        d.set("secondary_locations", &api.secondary_locations);
        d.set(
            "restrict_alternate_location_polling",
            api.restrict_alternate_location_polling,
        );
        d.set(
            "outer_regions_location_consent",
            api.location_consent_for_outer_regions,
        );
    }
}
