//! Scheduled maintenance windows
//!
//! A window runs once between two dates or recurs weekly. Only the members of
//! the configured kind travel to the API, and only those are read back.

use async_trait::async_trait;

use crate::{
    api::{admin::ScheduleMaintenance, endpoints::Endpoint, Site24x7Client},
    provider::{
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema, Validation},
        ProviderError,
    },
};

const WEEKLY: i64 = 2;
const ONCE: i64 = 3;

pub struct ScheduleMaintenanceMapping;

#[async_trait]
impl Mapping for ScheduleMaintenanceMapping {
    type Api = ScheduleMaintenance;

    const TYPE_NAME: &'static str = "site24x7_schedule_maintenance";

    fn schema() -> Schema {
        Schema::new([
            ("display_name", Field::string().required()),
            ("description", Field::string()),
            (
                "maintenance_type",
                Field::int()
                    .required()
                    .validate(Validation::IntInSlice(&[WEEKLY, ONCE]))
                    .describe("Maintenance type. 3 = Once, 2 = Weekly"),
            ),
            ("start_time", Field::string().required()),
            ("end_time", Field::string().required()),
            (
                "time_zone",
                Field::string()
                    .describe("Time zone for your scheduled maintenance. Default is account timezone."),
            ),
            ("perform_monitoring", Field::bool().default(true)),
            (
                "start_date",
                Field::string().describe("Required for once maintenance. Format: yyyy-mm-dd"),
            ),
            (
                "end_date",
                Field::string().describe("Required for once maintenance. Format: yyyy-mm-dd"),
            ),
            (
                "start_day",
                Field::int().describe("Start day for weekly maintenance (1=Sun ... 7=Sat)"),
            ),
            (
                "end_day",
                Field::int().describe("End day for weekly maintenance (1=Sun ... 7=Sat)"),
            ),
            (
                "duration",
                Field::int().describe("Duration in minutes (required for weekly maintenance)"),
            ),
            (
                "week_days",
                Field::int_list().describe("Days of week on which maintenance should recur"),
            ),
            (
                "execute_every",
                Field::int()
                    .default(1)
                    .describe("Interval in weeks at which weekly maintenance recurs (1-4)"),
            ),
            (
                "maintenance_start_on",
                Field::string()
                    .describe("Date on which weekly maintenance should start. Format: yyyy-mm-dd"),
            ),
            (
                "selection_type",
                Field::int()
                    .default(2)
                    .describe("Resources under maintenance. 2 monitors, 1 monitor groups, 3 tags."),
            ),
            ("monitors", Field::string_list()),
            ("monitor_groups", Field::string_list()),
            ("tags", Field::string_list()),
        ])
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<ScheduleMaintenance> {
        client.maintenance()
    }

    async fn to_api(
        d: &mut ResourceData,
        _client: &Site24x7Client,
    ) -> Result<ScheduleMaintenance, ProviderError> {
        let mut maintenance = ScheduleMaintenance {
            maintenance_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            description: d.get_string("description"),
            maintenance_type: d.get_int("maintenance_type"),
            start_time: d.get_string("start_time"),
            end_time: d.get_string("end_time"),
            time_zone: d.get_string("time_zone"),
            perform_monitoring: d.get_bool("perform_monitoring"),
            selection_type: d.get_int("selection_type"),
            monitors: d.get_string_list("monitors"),
            monitor_groups: d.get_string_list("monitor_groups"),
            tags: d.get_string_list("tags"),
            ..ScheduleMaintenance::default()
        };

        match maintenance.maintenance_type {
            ONCE => {
                maintenance.start_date = d.get_string("start_date");
                maintenance.end_date = d.get_string("end_date");
            }
            WEEKLY => {
                maintenance.start_day = d.get_int("start_day");
                maintenance.end_day = d.get_int("end_day");
                maintenance.duration = d.get_int("duration");
                maintenance.week_days = d.get_int_list("week_days");
                maintenance.execute_every = d.get_int("execute_every");
                maintenance.maintenance_start_on = d.get_string("maintenance_start_on");
            }
            _ => {}
        }
        Ok(maintenance)
    }

    fn id_of(api: &ScheduleMaintenance) -> &str {
        &api.maintenance_id
    }

    fn flatten(api: &ScheduleMaintenance, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("description", &api.description);
        d.set("maintenance_type", api.maintenance_type);
        d.set("start_time", &api.start_time);
        d.set("end_time", &api.end_time);
        d.set("time_zone", &api.time_zone);
        d.set("perform_monitoring", api.perform_monitoring);
        d.set("selection_type", api.selection_type);
        d.set("monitors", &api.monitors);
        d.set("monitor_groups", &api.monitor_groups);
        d.set("tags", &api.tags);

        // Empty members mean the API left them out, so the configured value stays.
        match api.maintenance_type {
            ONCE => {
                for (key, value) in [("start_date", &api.start_date), ("end_date", &api.end_date)] {
                    if !value.is_empty() {
                        d.set(key, value);
                    }
                }
            }
            WEEKLY => {
                for (key, value) in [
                    ("start_day", api.start_day),
                    ("end_day", api.end_day),
                    ("duration", api.duration),
                    ("execute_every", api.execute_every),
                ] {
                    if value > 0 {
                        d.set(key, value);
                    }
                }
                if !api.week_days.is_empty() {
                    d.set("week_days", &api.week_days);
                }
                if !api.maintenance_start_on.is_empty() {
                    d.set("maintenance_start_on", &api.maintenance_start_on);
                }
            }
            _ => {}
        }
    }
}
