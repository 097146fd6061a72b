use async_trait::async_trait;

use crate::{
    api::{endpoints::Endpoint, monitors::CronMonitor, types::MonitorType, Site24x7Client},
    provider::{
        common::{self, MonitorProfiles},
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct CronMonitorMapping;

pub(crate) fn passive_monitor_fields() -> common::Fields {
    let mut fields = common::notification_profile_fields();
    fields.extend(common::threshold_profile_fields());
    fields.push((
        "monitor_groups",
        Field::string_list().describe("List of monitor groups to which the monitor has to be associated."),
    ));
    fields.extend(common::user_group_fields());
    fields.extend(common::tag_fields());
    fields.extend(common::third_party_service_fields());
    fields.extend(common::on_call_schedule_fields());
    fields
}

#[async_trait]
impl Mapping for CronMonitorMapping {
    type Api = CronMonitor;

    const TYPE_NAME: &'static str = "site24x7_cron_monitor";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string().required().describe("Display Name for the monitor."),
            ),
            (
                "cron_expression",
                Field::string()
                    .required()
                    .describe("Cron expression to denote the job schedule."),
            ),
            (
                "cron_tz",
                Field::string()
                    .required()
                    .describe("Time zone for the server where the job is hosted."),
            ),
            (
                "wait_time",
                Field::int()
                    .required()
                    .describe("Maximum grace time in minutes for the job to complete."),
            ),
            ("type", Field::string().computed_only()),
        ])
        .extend(passive_monitor_fields())
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<CronMonitor> {
        client.cron_monitors()
    }

    async fn to_api(
        d: &mut ResourceData,
        client: &Site24x7Client,
    ) -> Result<CronMonitor, ProviderError> {
        let profiles = MonitorProfiles::resolve(client, d, MonitorType::Cron, false).await?;

        Ok(CronMonitor {
            monitor_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            cron_expression: d.get_string("cron_expression"),
            cron_tz: d.get_string("cron_tz"),
            wait_time: d.get_int("wait_time"),
            monitor_type: MonitorType::Cron.to_string(),
            threshold_profile_id: profiles.threshold_profile_id,
            notification_profile_id: profiles.notification_profile_id,
            monitor_groups: common::sorted(d.get_string_list("monitor_groups")),
            tag_ids: profiles.tag_ids,
            third_party_service_ids: d.get_string_list("third_party_service_ids"),
            user_group_ids: profiles.user_group_ids,
            on_call_schedule_id: d.get_string("on_call_schedule_id"),
        })
    }

    fn id_of(api: &CronMonitor) -> &str {
        &api.monitor_id
    }

    fn flatten(api: &CronMonitor, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("type", &api.monitor_type);
        d.set("cron_expression", &api.cron_expression);
        d.set("cron_tz", &api.cron_tz);
        d.set("wait_time", api.wait_time);
        d.set("threshold_profile_id", &api.threshold_profile_id);
        d.set("notification_profile_id", &api.notification_profile_id);
        d.set("monitor_groups", &api.monitor_groups);
        d.set("user_group_ids", &api.user_group_ids);
        d.set("tag_ids", &api.tag_ids);
        d.set("third_party_service_ids", &api.third_party_service_ids);
        d.set("on_call_schedule_id", &api.on_call_schedule_id);
    }
}
