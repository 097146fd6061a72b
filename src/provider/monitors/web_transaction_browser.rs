use async_trait::async_trait;
use serde_json::Value;

use crate::{
    api::{
        endpoints::Endpoint, monitors::WebTransactionBrowserMonitor, types::MonitorType,
        Site24x7Client,
    },
    provider::{
        common::{self, MonitorProfiles},
        monitors::profile_fields,
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema, Validation},
        ProviderError,
    },
};

pub struct WebTransactionBrowserMonitorMapping;

#[async_trait]
impl Mapping for WebTransactionBrowserMonitorMapping {
    type Api = WebTransactionBrowserMonitor;

    const TYPE_NAME: &'static str = "site24x7_web_transaction_browser_monitor";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string().required().describe("Display Name for the monitor."),
            ),
            ("type", Field::string().computed_only()),
            (
                "base_url",
                Field::string()
                    .required()
                    .describe("Base URL of the transaction."),
            ),
            (
                "selenium_script",
                Field::string().describe("Recorded transaction script."),
            ),
            (
                "script_type",
                Field::string().describe("Recorded transaction script type (txt or side)."),
            ),
            (
                "perform_automation",
                Field::bool().describe("Execute IT automations during scheduled maintenance."),
            ),
            (
                "check_frequency",
                Field::string()
                    .default("15")
                    .describe("Interval at which the transaction has to be monitored."),
            ),
            (
                "async_dc_enabled",
                Field::bool()
                    .default(true)
                    .describe("Poll the transaction from the locations one after another."),
            ),
            (
                "browser_type",
                Field::int()
                    .default(1)
                    .validate(Validation::IntInSlice(&[1, 2]))
                    .describe("Browser used for playback. 1 Firefox, 2 Chrome."),
            ),
            (
                "browser_version",
                Field::int()
                    .default(10101)
                    .describe("Version of the playback browser."),
            ),
            (
                "think_time",
                Field::int()
                    .default(1)
                    .describe("Think time between each step of the transaction, in seconds."),
            ),
            (
                "page_load_time",
                Field::int()
                    .default(60)
                    .describe("Timeout for page load, in seconds."),
            ),
            (
                "resolution",
                Field::string()
                    .default("1600,900")
                    .describe("Screen resolution of the playback browser."),
            ),
            (
                "ip_type",
                Field::int().describe("IP version to be used. 0 IPv4, 1 IPv6, 2 both."),
            ),
            (
                "ignore_cert_err",
                Field::bool()
                    .default(true)
                    .describe("Ignore certificate errors while running the transaction."),
            ),
            (
                "user_agent",
                Field::string().describe("User agent to be used during playback."),
            ),
            (
                "custom_headers",
                Field::string_map().describe("Custom headers sent with every request."),
            ),
            (
                "cookies",
                Field::string_map().describe("Cookies sent with every request."),
            ),
            (
                "proxy_details",
                Field::string_map().describe("Proxy server with webProxyUrl, webProxyUname and webProxyPass."),
            ),
            (
                "auth_details",
                Field::string_map()
                    .sensitive()
                    .describe("HTTP authentication with userName and password."),
            ),
        ])
        .extend(profile_fields(true))
        .extend(common::action_fields())
        .extend(common::on_call_schedule_fields())
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<WebTransactionBrowserMonitor> {
        client.web_transaction_browser_monitors()
    }

    async fn to_api(
        d: &mut ResourceData,
        client: &Site24x7Client,
    ) -> Result<WebTransactionBrowserMonitor, ProviderError> {
        let action_ids = common::actions_from_map(&d.get_string_map("actions"))?;
        let proxy_details = d.get_ok("proxy_details").map(|_| d.get_map("proxy_details"));
        let auth_details = d.get_ok("auth_details").map(|_| d.get_map("auth_details"));

        let profiles = MonitorProfiles::resolve(client, d, MonitorType::RealBrowser, true).await?;

        Ok(WebTransactionBrowserMonitor {
            monitor_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            monitor_type: MonitorType::RealBrowser.to_string(),
            base_url: d.get_string("base_url"),
            selenium_script: d.get_string("selenium_script"),
            script_type: d.get_string("script_type"),
            perform_automation: d.get_bool("perform_automation"),
            check_frequency: d.get_string("check_frequency"),
            async_dc_enabled: d.get_bool("async_dc_enabled"),
            browser_type: d.get_int("browser_type"),
            think_time: d.get_int("think_time"),
            ignore_cert_error: d.get_bool("ignore_cert_err"),
            ip_type: d.get_int("ip_type"),
            user_agent: d.get_string("user_agent"),
            browser_version: d.get_int("browser_version"),
            page_load_time: d.get_int("page_load_time"),
            resolution: d.get_string("resolution"),
            proxy_details,
            auth_details,
            custom_headers: common::headers_from_map(&d.get_string_map("custom_headers")),
            cookies: common::headers_from_map(&d.get_string_map("cookies")),
            threshold_profile_id: profiles.threshold_profile_id,
            location_profile_id: profiles.location_profile_id,
            notification_profile_id: profiles.notification_profile_id,
            user_group_ids: profiles.user_group_ids,
            on_call_schedule_id: d.get_string("on_call_schedule_id"),
            dependency_resource_ids: d.get_string_set("dependency_resource_ids"),
            monitor_groups: common::sorted(d.get_string_list("monitor_groups")),
            action_ids,
            third_party_service_ids: d.get_string_list("third_party_service_ids"),
            tag_ids: profiles.tag_ids,
        })
    }

    fn id_of(api: &WebTransactionBrowserMonitor) -> &str {
        &api.monitor_id
    }

    fn flatten(api: &WebTransactionBrowserMonitor, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("type", &api.monitor_type);
        d.set("base_url", &api.base_url);
        d.set("selenium_script", &api.selenium_script);
        d.set("script_type", &api.script_type);
        d.set("perform_automation", api.perform_automation);
        d.set("check_frequency", &api.check_frequency);
        d.set("async_dc_enabled", api.async_dc_enabled);
        d.set("browser_type", api.browser_type);
        d.set("browser_version", api.browser_version);
        d.set("think_time", api.think_time);
        d.set("page_load_time", api.page_load_time);
        d.set("resolution", &api.resolution);
        d.set("ip_type", api.ip_type);
        d.set("ignore_cert_err", api.ignore_cert_error);
        d.set("user_agent", &api.user_agent);
        d.set("custom_headers", common::headers_to_map(&api.custom_headers));
        d.set("cookies", common::headers_to_map(&api.cookies));
        if let Some(proxy_details) = &api.proxy_details {
            d.set("proxy_details", Value::Object(proxy_details.clone()));
        }
        d.set("location_profile_id", &api.location_profile_id);
        d.set("notification_profile_id", &api.notification_profile_id);
        d.set("threshold_profile_id", &api.threshold_profile_id);
        d.set("monitor_groups", &api.monitor_groups);
        d.set("dependency_resource_ids", &api.dependency_resource_ids);
        d.set("user_group_ids", &api.user_group_ids);
        d.set("tag_ids", &api.tag_ids);
        d.set("third_party_service_ids", &api.third_party_service_ids);
        d.set("on_call_schedule_id", &api.on_call_schedule_id);
        d.set("actions", common::actions_to_map(&api.action_ids));
    }
}
