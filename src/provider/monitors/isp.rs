use async_trait::async_trait;

use crate::{
    api::{endpoints::Endpoint, monitors::IspMonitor, types::MonitorType, Site24x7Client},
    provider::{
        common::{self, MonitorProfiles},
        monitors::{network_fields, profile_fields},
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct IspMonitorMapping;

#[async_trait]
impl Mapping for IspMonitorMapping {
    type Api = IspMonitor;

    const TYPE_NAME: &'static str = "site24x7_isp_monitor";

    fn schema() -> Schema {
        Schema::new([
            (
                "hostname",
                Field::string().required().describe("Registered domain name."),
            ),
            (
                "port",
                Field::int().default(443).describe("Port of the monitored server."),
            ),
            (
                "protocol",
                Field::string()
                    .default("1")
                    .describe("Protocol used for the path check. '1' ICMP, '2' TCP, '3' UDP."),
            ),
        ])
        .extend(network_fields(10))
        .extend(profile_fields(true))
        .extend(common::action_fields())
        .extend(common::on_call_schedule_fields())
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<IspMonitor> {
        client.isp_monitors()
    }

    async fn to_api(d: &mut ResourceData, client: &Site24x7Client) -> Result<IspMonitor, ProviderError> {
        let action_ids = common::actions_from_map(&d.get_string_map("actions"))?;
        let profiles = MonitorProfiles::resolve(client, d, MonitorType::Isp, true).await?;

        Ok(IspMonitor {
            monitor_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            hostname: d.get_string("hostname"),
            use_ipv6: d.get_bool("use_ipv6"),
            monitor_type: MonitorType::Isp.to_string(),
            timeout: d.get_int("timeout"),
            protocol: d.get_string("protocol"),
            port: d.get_int("port"),
            check_frequency: d.get_string("check_frequency"),
            on_call_schedule_id: d.get_string("on_call_schedule_id"),
            perform_automation: d.get_bool("perform_automation"),
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

    fn id_of(api: &IspMonitor) -> &str {
        &api.monitor_id
    }

    fn flatten(api: &IspMonitor, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("type", &api.monitor_type);
        d.set("hostname", &api.hostname);
        d.set("use_ipv6", api.use_ipv6);
        d.set("port", api.port);
        d.set("timeout", api.timeout);
        d.set("protocol", &api.protocol);
        d.set("check_frequency", &api.check_frequency);
        d.set("on_call_schedule_id", &api.on_call_schedule_id);
        d.set("perform_automation", api.perform_automation);
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
