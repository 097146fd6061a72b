//! Site24x7 users and their alert settings

use async_trait::async_trait;

use crate::{
    api::{
        admin::{AlertSettings, AlertingPeriod, User},
        endpoints::Endpoint,
        Site24x7Client,
    },
    provider::{
        common,
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema, Validation},
        ProviderError,
    },
};

const EMAIL: i64 = 1;

const ALERT_MEDIUMS: [(&str, &str); 4] = [
    ("down", "down_notification_medium"),
    ("critical", "critical_notification_medium"),
    ("trouble", "trouble_notification_medium"),
    ("up", "up_notification_medium"),
];

pub struct UserMapping;

fn medium_field(status: &str) -> Field {
    Field::int_set().required().describe(match status {
        "down" => "Medium through which you'd wish to receive the Down alerts. '1' Email, '2' SMS, '3' Voice Call.",
        "critical" => "Medium through which you'd wish to receive the Critical alerts. '1' Email, '2' SMS, '3' Voice Call.",
        "trouble" => "Medium through which you'd wish to receive the Trouble alerts. '1' Email, '2' SMS, '3' Voice Call.",
        _ => "Medium through which you'd wish to receive the Up alerts. '1' Email, '2' SMS, '3' Voice Call.",
    })
}

// Alerts go out by email when no medium is configured for a status.
fn mediums(d: &ResourceData, key: &str) -> Vec<i64> {
    let mediums = d.get_int_set(key);
    if mediums.is_empty() {
        vec![EMAIL]
    } else {
        mediums
    }
}

#[async_trait]
impl Mapping for UserMapping {
    type Api = User;

    const TYPE_NAME: &'static str = "site24x7_user";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string().required().describe("Name of the User."),
            ),
            (
                "email_address",
                Field::string()
                    .required()
                    .describe("Email address of the user. Email verification has to be done manually."),
            ),
            (
                "user_role",
                Field::int()
                    .required()
                    .describe("Role assigned to the user for accessing Site24x7."),
            ),
            (
                "job_title",
                Field::int().describe("Job title of the user."),
            ),
            (
                "selection_type",
                Field::int()
                    .default(0)
                    .validate(Validation::IntInSlice(&[0, 1]))
                    .describe("Resources associated to the user. '0' All Monitors, '1' Monitor Group."),
            ),
            (
                "monitor_groups",
                Field::string_set()
                    .computed()
                    .describe("Monitor groups the user can access. Mandatory when selection_type is 1."),
            ),
            (
                "notification_medium",
                Field::int_set()
                    .required()
                    .describe("Medium through which you'd wish to receive notifications. '1' Email, '2' SMS, '3' Voice Call."),
            ),
            (
                "user_group_ids",
                Field::string_set()
                    .computed()
                    .describe("Groups to be associated for the user for receiving alerts."),
            ),
            (
                "mobile_settings",
                Field::string_map()
                    .describe("Mobile settings: country_code, mobile_number, is_confirmed, call_provider_id, sms_provider_id."),
            ),
            ("down_notification_medium", medium_field("down")),
            ("critical_notification_medium", medium_field("critical")),
            ("trouble_notification_medium", medium_field("trouble")),
            ("up_notification_medium", medium_field("up")),
            (
                "alerting_period_start_time",
                Field::string()
                    .default("00:00")
                    .describe("Start of the window for Voice/SMS status alerts."),
            ),
            (
                "alerting_period_end_time",
                Field::string()
                    .default("00:00")
                    .describe("End of the window for Voice/SMS status alerts."),
            ),
            (
                "email_format",
                Field::int()
                    .default(1)
                    .describe("Denotes the email format. '0' Text, '1' HTML."),
            ),
            (
                "consent_for_non_eu_alerts",
                Field::bool()
                    .default(false)
                    .describe("Allow SMS and voice alert providers to process data outside the EU region."),
            ),
        ])
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<User> {
        client.users()
    }

    async fn to_api(d: &mut ResourceData, _client: &Site24x7Client) -> Result<User, ProviderError> {
        let [down, critical, trouble, up] = ALERT_MEDIUMS.map(|(_, key)| mediums(d, key));

        Ok(User {
            user_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            email_address: d.get_string("email_address"),
            selection_type: d.get_int("selection_type"),
            user_role: d.get_int("user_role"),
            job_title: d.get_int("job_title"),
            mobile_settings: d.get_map("mobile_settings"),
            alert_settings: AlertSettings {
                email_format: d.get_int("email_format"),
                alerting_period: AlertingPeriod {
                    start_time: d.get_string("alerting_period_start_time"),
                    end_time: d.get_string("alerting_period_end_time"),
                },
                down,
                critical,
                trouble,
                up,
                applogs: vec![EMAIL],
                anomaly: Vec::new(),
            },
            user_group_ids: d.get_string_set("user_group_ids"),
            notification_medium: d.get_int_set("notification_medium"),
            monitor_groups: d.get_string_set("monitor_groups"),
            consent_for_non_eu_alerts: d.get_bool("consent_for_non_eu_alerts"),
        })
    }

    fn id_of(api: &User) -> &str {
        &api.user_id
    }

    fn flatten(api: &User, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("email_address", &api.email_address);
        d.set("user_role", api.user_role);
        d.set("job_title", api.job_title);
        d.set("selection_type", api.selection_type);
        d.set("notification_medium", &api.notification_medium);
        d.set("user_group_ids", &api.user_group_ids);
        d.set("monitor_groups", &api.monitor_groups);
        d.set("mobile_settings", common::string_values(&api.mobile_settings));

        let alerts = &api.alert_settings;
        d.set("email_format", alerts.email_format);
        d.set("alerting_period_start_time", &alerts.alerting_period.start_time);
        d.set("alerting_period_end_time", &alerts.alerting_period.end_time);
        for ((_, key), mediums) in ALERT_MEDIUMS
            .iter()
            .zip([&alerts.down, &alerts.critical, &alerts.trouble, &alerts.up])
        {
            d.set(key, mediums);
        }
        d.set("consent_for_non_eu_alerts", api.consent_for_non_eu_alerts);
    }
}
