use async_trait::async_trait;

use crate::{
    api::{
        errors::ApiError,
        types::{LocationProfile, NotificationProfile, ThresholdProfile},
        Site24x7Client,
    },
    provider::{
        common::Fields, data_sources::Lookup, resource_data::ResourceData, schema::Field,
    },
};

pub struct LocationProfileLookup;

#[async_trait]
impl Lookup for LocationProfileLookup {
    type Item = LocationProfile;

    const TYPE_NAME: &'static str = "site24x7_location_profile";
    const NOUN: &'static str = "location profile";

    fn fields() -> Fields {
        vec![
            (
                "profile_name",
                Field::string()
                    .computed()
                    .describe("Display name for the location profile."),
            ),
            (
                "primary_location",
                Field::string()
                    .computed()
                    .describe("Primary location for monitoring."),
            ),
            (
                "secondary_locations",
                Field::string_set()
                    .computed()
                    .describe("List of secondary locations for monitoring."),
            ),
            (
                "outer_regions_location_consent",
                Field::bool().computed().describe(
                    "Whether consent is required for monitoring from locations outside the EEA.",
                ),
            ),
            (
                "restrict_alt_loc",
                Field::bool()
                    .computed()
                    .describe("Restricts polling to the locations of the profile."),
            ),
        ]
    }

    async fn list(client: &Site24x7Client) -> Result<Vec<LocationProfile>, ApiError> {
        client.location_profiles().list().await
    }

    fn id(item: &LocationProfile) -> &str {
        &item.profile_id
    }

    fn name(item: &LocationProfile) -> &str {
        &item.profile_name
    }

    fn flatten(item: &LocationProfile, d: &mut ResourceData) {
        d.set("profile_name", &item.profile_name);
        d.set("primary_location", &item.primary_location);
        d.set("secondary_locations", &item.secondary_locations);
        d.set(
            "outer_regions_location_consent",
            item.location_consent_for_outer_regions,
        );
        d.set("restrict_alt_loc", item.restrict_alternate_location_polling);
    }
}

pub struct ThresholdProfileLookup;

#[async_trait]
impl Lookup for ThresholdProfileLookup {
    type Item = ThresholdProfile;

    const TYPE_NAME: &'static str = "site24x7_threshold_profile";
    const NOUN: &'static str = "threshold profile";

    fn fields() -> Fields {
        vec![
            (
                "profile_name",
                Field::string()
                    .computed()
                    .describe("Display name for the threshold profile."),
            ),
            (
                "type",
                Field::string()
                    .computed()
                    .describe("Monitor type the threshold profile applies to."),
            ),
            (
                "profile_type",
                Field::int()
                    .computed()
                    .describe("Static Threshold(1) or AI-based Threshold(2)."),
            ),
            (
                "down_location_threshold",
                Field::int()
                    .computed()
                    .describe("Number of locations that have to report down before alerting."),
            ),
            (
                "website_content_modified",
                Field::bool()
                    .computed()
                    .describe("Alert when website content is modified."),
            ),
        ]
    }

    async fn list(client: &Site24x7Client) -> Result<Vec<ThresholdProfile>, ApiError> {
        client.threshold_profiles().list().await
    }

    fn id(item: &ThresholdProfile) -> &str {
        &item.profile_id
    }

    fn name(item: &ThresholdProfile) -> &str {
        &item.profile_name
    }

    fn flatten(item: &ThresholdProfile, d: &mut ResourceData) {
        d.set("profile_name", &item.profile_name);
        d.set("type", &item.monitor_type);
        d.set("profile_type", item.profile_type);
        d.set("down_location_threshold", item.down_location_threshold);
        d.set("website_content_modified", item.website_content_modified);
    }
}

pub struct NotificationProfileLookup;

#[async_trait]
impl Lookup for NotificationProfileLookup {
    type Item = NotificationProfile;

    const TYPE_NAME: &'static str = "site24x7_notification_profile";
    const NOUN: &'static str = "notification profile";

    fn fields() -> Fields {
        vec![
            (
                "profile_name",
                Field::string()
                    .computed()
                    .describe("Display name for the notification profile."),
            ),
            (
                "rca_needed",
                Field::bool()
                    .computed()
                    .describe("Send root cause analysis when the monitor goes down."),
            ),
            (
                "notify_after_executing_actions",
                Field::bool()
                    .computed()
                    .describe("Notify only after the configured actions ran."),
            ),
            (
                "template_id",
                Field::string()
                    .computed()
                    .describe("Email template ID for notification."),
            ),
            (
                "suppress_automation",
                Field::bool()
                    .computed()
                    .describe("Stop automations from running on dependent monitors."),
            ),
        ]
    }

    async fn list(client: &Site24x7Client) -> Result<Vec<NotificationProfile>, ApiError> {
        client.notification_profiles().list().await
    }

    fn id(item: &NotificationProfile) -> &str {
        &item.profile_id
    }

    fn name(item: &NotificationProfile) -> &str {
        &item.profile_name
    }

    fn flatten(item: &NotificationProfile, d: &mut ResourceData) {
        d.set("profile_name", &item.profile_name);
        d.set("rca_needed", item.rca_needed);
        d.set(
            "notify_after_executing_actions",
            item.notify_after_executing_actions,
        );
        d.set("template_id", &item.template_id);
        d.set("suppress_automation", item.suppress_automation);
    }
}
