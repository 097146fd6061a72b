//! Web page speed (full page load) monitors

use async_trait::async_trait;

use crate::{
    api::{
        endpoints::Endpoint, monitors::WebPageSpeedMonitor, types::MonitorType, Site24x7Client,
    },
    provider::{
        common::{self, MonitorProfiles},
        monitors::profile_fields,
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct WebPageSpeedMonitorMapping;

#[async_trait]
impl Mapping for WebPageSpeedMonitorMapping {
    type Api = WebPageSpeedMonitor;

    const TYPE_NAME: &'static str = "site24x7_web_page_speed_monitor";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string().required().describe("Display Name for the monitor."),
            ),
            ("type", Field::string().computed_only()),
            (
                "website",
                Field::string().required().describe("Website address to monitor."),
            ),
            (
                "check_frequency",
                Field::string()
                    .default("5")
                    .describe("Interval at which your website has to be monitored. Default value is 5 minutes."),
            ),
            (
                "timeout",
                Field::int()
                    .default(30)
                    .describe("Timeout for connecting to website. Range 1 - 45."),
            ),
            (
                "use_ipv6",
                Field::bool().describe("Monitoring is performed over IPv6 from supported locations."),
            ),
            (
                "website_type",
                Field::int().default(1).describe("Type of the website. 1 for a homepage."),
            ),
            (
                "browser_type",
                Field::int().default(1).describe("Browser used to load the page. 1 Firefox, 2 Chrome."),
            ),
            (
                "device_type",
                Field::string().default("1").describe("Device emulated while loading the page."),
            ),
            (
                "wpa_resolution",
                Field::string()
                    .default("1024,768")
                    .describe("Screen resolution used to load the page."),
            ),
            (
                "http_method",
                Field::string()
                    .default("G")
                    .describe("HTTP Method to be used for accessing the website. PUT, PATCH and DELETE are not supported."),
            ),
            (
                "custom_headers",
                Field::string_map().describe("A Map of Header name and value."),
            ),
            ("auth_user", Field::string().describe("Authentication user name.")),
            (
                "auth_pass",
                Field::string().sensitive().describe("Authentication password."),
            ),
            (
                "user_agent",
                Field::string().describe("User Agent to be used while monitoring the website."),
            ),
            (
                "up_status_codes",
                Field::string()
                    .default("")
                    .describe("Comma separated HTTP status codes that indicate a successful response."),
            ),
            (
                "match_case",
                Field::bool().describe("Perform case sensitive keyword search or not."),
            ),
        ])
        .extend(common::content_check_fields(
            "matching_keyword_value",
            "matching_keyword_severity",
            "Check for the keyword in the website response.",
        ))
        .extend(common::content_check_fields(
            "unmatching_keyword_value",
            "unmatching_keyword_severity",
            "Check for non existence of keyword in the website response.",
        ))
        .extend(common::content_check_fields(
            "match_regex_value",
            "match_regex_severity",
            "Match the regular expression in the website response.",
        ))
        .extend(profile_fields(true))
        .extend(common::action_fields())
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<WebPageSpeedMonitor> {
        client.web_page_speed_monitors()
    }

    async fn to_api(
        d: &mut ResourceData,
        client: &Site24x7Client,
    ) -> Result<WebPageSpeedMonitor, ProviderError> {
        let action_ids = common::actions_from_map(&d.get_string_map("actions"))?;
        let profiles = MonitorProfiles::resolve(client, d, MonitorType::Homepage, true).await?;

        Ok(WebPageSpeedMonitor {
            monitor_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            monitor_type: MonitorType::Homepage.to_string(),
            website: d.get_string("website"),
            check_frequency: d.get_string("check_frequency"),
            timeout: d.get_int("timeout"),
            use_ipv6: d.get_bool("use_ipv6"),
            website_type: d.get_int("website_type"),
            browser_type: d.get_int("browser_type"),
            device_type: d.get_string("device_type"),
            wpa_resolution: d.get_string("wpa_resolution"),
            http_method: d.get_string("http_method"),
            custom_headers: common::headers_from_map(&d.get_string_map("custom_headers")),
            auth_user: d.get_string("auth_user"),
            auth_pass: d.get_string("auth_pass"),
            user_agent: d.get_string("user_agent"),
            up_status_codes: d.get_string("up_status_codes"),
            matching_keyword: common::value_and_severity(
                d,
                "matching_keyword_value",
                "matching_keyword_severity",
            ),
            unmatching_keyword: common::value_and_severity(
                d,
                "unmatching_keyword_value",
                "unmatching_keyword_severity",
            ),
            match_regex: common::value_and_severity(d, "match_regex_value", "match_regex_severity"),
            match_case: d.get_bool("match_case"),
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

    fn id_of(api: &WebPageSpeedMonitor) -> &str {
        &api.monitor_id
    }

    fn flatten(api: &WebPageSpeedMonitor, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("type", &api.monitor_type);
        d.set("website", &api.website);
        d.set("check_frequency", &api.check_frequency);
        d.set("timeout", api.timeout);
        d.set("use_ipv6", api.use_ipv6);
        d.set("website_type", api.website_type);
        d.set("browser_type", api.browser_type);
        d.set("device_type", &api.device_type);
        d.set("wpa_resolution", &api.wpa_resolution);
        d.set("http_method", &api.http_method);
        d.set("custom_headers", common::headers_to_map(&api.custom_headers));
        d.set("auth_user", &api.auth_user);
        d.set("user_agent", &api.user_agent);
        d.set("up_status_codes", &api.up_status_codes);
        common::set_value_and_severity(
            d,
            api.matching_keyword.as_ref(),
            "matching_keyword_value",
            "matching_keyword_severity",
        );
        common::set_value_and_severity(
            d,
            api.unmatching_keyword.as_ref(),
            "unmatching_keyword_value",
            "unmatching_keyword_severity",
        );
        common::set_value_and_severity(
            d,
            api.match_regex.as_ref(),
            "match_regex_value",
            "match_regex_severity",
        );
        d.set("match_case", api.match_case);
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
