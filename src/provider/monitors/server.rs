//! Server monitors
//!
//! The Site24x7 agent registers these. The resource only adopts an imported
//! monitor and edits its alerting settings.

use async_trait::async_trait;
use tracing::debug;

use crate::{
    api::{endpoints::Endpoint, monitors::ServerMonitor, types::MonitorType, Site24x7Client},
    provider::{
        common, defaults,
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct ServerMonitorMapping;

#[async_trait]
impl Mapping for ServerMonitorMapping {
    type Api = ServerMonitor;

    const TYPE_NAME: &'static str = "site24x7_server_monitor";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string().required().describe("Display Name for the monitor."),
            ),
            ("type", Field::string().computed_only()),
            ("host_name", Field::string().computed_only()),
            ("ip_address", Field::string().computed_only()),
            ("template_id", Field::string().computed_only()),
            (
                "poll_interval",
                Field::int()
                    .default(1)
                    .describe("Frequency at which data has to be collected for the server monitor."),
            ),
            ("it_automation_module", Field::bool().computed_only()),
            ("plugin_module", Field::bool().computed_only()),
            (
                "log_needed",
                Field::bool().default(true).describe("Enable Event Log/Syslog monitoring."),
            ),
            (
                "perform_automation",
                Field::bool()
                    .default(true)
                    .describe("Execute the IT automation during scheduled maintenance."),
            ),
            (
                "monitor_groups",
                Field::string_list()
                    .computed()
                    .describe("List of monitor groups to which the monitor has to be associated."),
            ),
        ])
        .extend(common::notification_profile_fields())
        .extend(common::threshold_profile_fields())
        .extend(common::user_group_fields())
        .extend(common::tag_fields())
        .extend(common::third_party_service_fields())
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<ServerMonitor> {
        client.server_monitors()
    }

    async fn to_api(d: &mut ResourceData, client: &Site24x7Client) -> Result<ServerMonitor, ProviderError> {
        let notification_profile_id = defaults::set_notification_profile(client, d).await?;
        let user_group_ids = defaults::set_user_groups(client, d, false).await?;
        let tag_ids = defaults::set_tags(client, d).await?;
        let threshold_profile_id =
            defaults::threshold_profile_id(client, d, MonitorType::Server).await?;

        Ok(ServerMonitor {
            monitor_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            monitor_type: MonitorType::Server.to_string(),
            poll_interval: d.get_int("poll_interval"),
            log_needed: d.get_bool("log_needed"),
            perform_automation: d.get_bool("perform_automation"),
            notification_profile_id,
            threshold_profile_id,
            monitor_groups: common::sorted(d.get_string_list("monitor_groups")),
            user_group_ids,
            tag_ids,
            third_party_service_ids: d.get_string_list("third_party_service_ids"),
            ..ServerMonitor::default()
        })
    }

    fn id_of(api: &ServerMonitor) -> &str {
        &api.monitor_id
    }

    fn flatten(api: &ServerMonitor, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("type", &api.monitor_type);
        d.set("host_name", &api.host_name);
        d.set("ip_address", &api.ip_address);
        d.set("template_id", &api.template_id);
        d.set("poll_interval", api.poll_interval);
        d.set("it_automation_module", api.it_automation_module);
        d.set("plugin_module", api.plugin_module);
        d.set("log_needed", api.log_needed);
        d.set("perform_automation", api.perform_automation);
        d.set("notification_profile_id", &api.notification_profile_id);
        d.set("threshold_profile_id", &api.threshold_profile_id);
        d.set("monitor_groups", common::sorted(api.monitor_groups.clone()));
        d.set("user_group_ids", &api.user_group_ids);
        d.set("tag_ids", &api.tag_ids);
        d.set("third_party_service_ids", &api.third_party_service_ids);
    }

    async fn create_remote(
        _client: &Site24x7Client,
        _api: ServerMonitor,
    ) -> Result<ServerMonitor, ProviderError> {
        Err(ProviderError::Validation(format!(
            "{} cannot be created. Install the Site24x7 server agent and import the monitor it registers",
            Self::TYPE_NAME
        )))
    }

    // The agent owns the host identity and module switches; the PUT has to
    // echo them back unchanged.
    async fn update_remote(
        client: &Site24x7Client,
        id: &str,
        mut api: ServerMonitor,
    ) -> Result<ServerMonitor, ProviderError> {
        let endpoint = Self::endpoint(client);
        let current = endpoint.get(id).await?;
        debug!(monitor_id = %current.monitor_id, host = %current.host_name, "carrying agent settings");

        api.monitor_id = current.monitor_id;
        api.host_name = current.host_name;
        api.ip_address = current.ip_address;
        api.template_id = current.template_id;
        api.it_automation_module = current.it_automation_module;
        api.plugin_module = current.plugin_module;
        api.resource_profile_id = current.resource_profile_id;
        Ok(endpoint.update(id, &api).await?)
    }
}
