//! Monitor lookups by display name and monitor type
//!
//! Unlike the other data sources the name expression is matched case
//! sensitively. `site24x7_monitors` accepts either filter alone, while
//! `site24x7_monitor` needs both and keeps the last match.

use async_trait::async_trait;
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::{
    api::{types::Monitor, Site24x7Client},
    provider::{
        data_sources::{collect_matches, Matches},
        resource::DataSource,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

struct MonitorFilter {
    name: Option<Regex>,
    monitor_type: Option<String>,
}

impl MonitorFilter {
    fn from_data(d: &ResourceData) -> Result<Self, ProviderError> {
        let name = match d.get_string("name_regex") {
            raw if raw.is_empty() => None,
            raw => Some(Regex::new(&raw)?),
        };
        let monitor_type = Some(d.get_string("monitor_type")).filter(|value| !value.is_empty());
        Ok(Self { name, monitor_type })
    }

    fn matches(&self, monitor: &Monitor) -> bool {
        if self.name.is_none() && self.monitor_type.is_none() {
            return false;
        }
        // Unnamed monitors only match when filtering by type alone.
        let name_matches = self.name.as_ref().map_or(true, |name| {
            !monitor.display_name.is_empty() && name.is_match(&monitor.display_name)
        });
        let type_matches = self
            .monitor_type
            .as_deref()
            .map_or(true, |monitor_type| monitor_type == monitor.monitor_type);
        name_matches && type_matches
    }

    fn apply<'a>(&self, monitors: &'a [Monitor]) -> Matches<'a, Monitor> {
        collect_matches(
            monitors,
            |monitor| monitor.monitor_id.as_str(),
            |monitor| monitor.display_name.clone(),
            |monitor| self.matches(monitor),
        )
    }
}

fn no_match(d: &ResourceData, noun: &str) -> ProviderError {
    ProviderError::not_found(format!(
        "Unable to find {noun} matching the name : \"{}\" and monitor type : \"{}\"",
        d.get_string("name_regex"),
        d.get_string("monitor_type")
    ))
}

fn filter_fields() -> [(&'static str, Field); 2] {
    [
        (
            "name_regex",
            Field::string().describe("Regular expression denoting the display name of the monitor."),
        ),
        (
            "monitor_type",
            Field::string().describe("Type of the monitor, for example URL or RESTAPI."),
        ),
    ]
}

pub struct MonitorDataSource {
    schema: Schema,
}

impl MonitorDataSource {
    pub fn new() -> Self {
        Self {
            schema: Schema::new(filter_fields()).extend([
                ("display_name", Field::string().computed()),
                ("location_profile_id", Field::string().computed()),
                ("notification_profile_id", Field::string().computed()),
                ("threshold_profile_id", Field::string().computed()),
                ("monitor_groups", Field::string_list().computed()),
                ("user_group_ids", Field::string_list().computed()),
                ("tag_ids", Field::string_list().computed()),
                ("third_party_service_ids", Field::string_list().computed()),
            ]),
        }
    }
}

impl Default for MonitorDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for MonitorDataSource {
    fn type_name(&self) -> &'static str {
        "site24x7_monitor"
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    async fn read(&self, client: &Site24x7Client, d: &mut ResourceData) -> Result<(), ProviderError> {
        let filter = MonitorFilter::from_data(d)?;
        if filter.name.is_none() || filter.monitor_type.is_none() {
            return Err(no_match(d, "monitor"));
        }
        let monitors = client.monitors().list().await?;

        let Some(monitor) = filter.apply(&monitors).last else {
            return Err(no_match(d, "monitor"));
        };

        d.set_id(&monitor.monitor_id);
        d.set("monitor_type", &monitor.monitor_type);
        d.set("display_name", &monitor.display_name);
        d.set("location_profile_id", &monitor.location_profile_id);
        d.set("notification_profile_id", &monitor.notification_profile_id);
        d.set("threshold_profile_id", &monitor.threshold_profile_id);
        d.set("monitor_groups", &monitor.monitor_groups);
        d.set("user_group_ids", &monitor.user_group_ids);
        d.set("tag_ids", &monitor.tag_ids);
        d.set("third_party_service_ids", &monitor.third_party_service_ids);
        Ok(())
    }
}

pub struct MonitorsDataSource {
    schema: Schema,
}

impl MonitorsDataSource {
    pub fn new() -> Self {
        Self {
            schema: Schema::new(filter_fields()).extend([
                (
                    "ids",
                    Field::string_list()
                        .computed_only()
                        .describe("IDs of the matching monitors."),
                ),
                (
                    "ids_and_names",
                    Field::string_list()
                        .computed_only()
                        .describe("IDs and display names of the matching monitors, joined as <id>__<name>."),
                ),
            ]),
        }
    }
}

impl Default for MonitorsDataSource {
    fn default() -> Self {
        Self::new()
    }
}

fn filter_id(name_regex: &str, monitor_type: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name_regex.as_bytes());
    hasher.update(b"\0");
    hasher.update(monitor_type.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..16].to_string()
}

#[async_trait]
impl DataSource for MonitorsDataSource {
    fn type_name(&self) -> &'static str {
        "site24x7_monitors"
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    async fn read(&self, client: &Site24x7Client, d: &mut ResourceData) -> Result<(), ProviderError> {
        let filter = MonitorFilter::from_data(d)?;
        let monitors = client.monitors().list().await?;

        let matches = filter.apply(&monitors);
        if matches.ids.is_empty() {
            return Err(no_match(d, "monitors"));
        }

        let id = filter_id(&d.get_string("name_regex"), &d.get_string("monitor_type"));
        d.set_id(id);
        d.set("ids", &matches.ids);
        d.set("ids_and_names", &matches.ids_and_names);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::{json, Value};

    use super::*;
    use crate::testing::fake_client;

    fn monitors() -> Value {
        json!([
            {"monitor_id": "1", "display_name": "Website www", "type": "URL",
             "location_profile_id": "lp", "monitor_groups": ["g1"]},
            {"monitor_id": "2", "display_name": "website api", "type": "RESTAPI"},
            {"monitor_id": "3", "display_name": "Website shop", "type": "RESTAPI"},
            {"monitor_id": "4", "display_name": "", "type": "URL"}
        ])
    }

    async fn read(data_source: &dyn DataSource, config: Value) -> Result<ResourceData, ProviderError> {
        let (transport, client) = fake_client();
        transport.respond_data(Method::GET, "monitors", monitors());
        let mut d = ResourceData::from_config(data_source.schema(), &config)?;
        data_source.read(&client, &mut d).await?;
        Ok(d)
    }

    #[tokio::test]
    async fn monitors_match_name_case_sensitively() {
        let d = read(&MonitorsDataSource::new(), json!({"name_regex": "^Website"}))
            .await
            .expect("read");

        assert_eq!(d.get_string_list("ids"), vec!["1", "3"]);
        assert_eq!(
            d.get_string_list("ids_and_names"),
            vec!["1__Website www", "3__Website shop"]
        );
        assert_eq!(d.id(), filter_id("^Website", ""));
    }

    #[tokio::test]
    async fn monitors_combine_name_and_type() {
        let d = read(
            &MonitorsDataSource::new(),
            json!({"name_regex": "Website", "monitor_type": "RESTAPI"}),
        )
        .await
        .expect("read");

        assert_eq!(d.get_string_list("ids"), vec!["3"]);
    }

    #[tokio::test]
    async fn monitors_filter_by_type_alone() {
        let d = read(&MonitorsDataSource::new(), json!({"monitor_type": "URL"}))
            .await
            .expect("read");

        assert_eq!(d.get_string_list("ids"), vec!["1", "4"]);
        assert_eq!(d.get_string_list("ids_and_names"), vec!["1__Website www", "4__"]);
    }

    #[tokio::test]
    async fn monitors_without_match_fail() {
        let err = read(
            &MonitorsDataSource::new(),
            json!({"name_regex": "Server", "monitor_type": "URL"}),
        )
        .await
        .expect_err("no match");

        assert_eq!(
            err.to_string(),
            "Unable to find monitors matching the name : \"Server\" and monitor type : \"URL\""
        );
    }

    #[test]
    fn filter_id_is_stable() {
        assert_eq!(filter_id("web", "URL"), filter_id("web", "URL"));
        assert_ne!(filter_id("web", "URL"), filter_id("web", "RESTAPI"));
        assert_eq!(filter_id("web", "URL").len(), 16);
    }

    #[test]
    fn filter_id_separates_regex_from_type() {
        assert_ne!(filter_id("web", "URL"), filter_id("webU", "RL"));
        assert_ne!(filter_id("", "URL"), filter_id("URL", ""));
    }

    #[tokio::test]
    async fn monitor_takes_last_match() {
        let d = read(
            &MonitorDataSource::new(),
            json!({"name_regex": "(?i)^website", "monitor_type": "RESTAPI"}),
        )
        .await
        .expect("read");

        assert_eq!(d.id(), "3");
        assert_eq!(d.get_string("display_name"), "Website shop");
    }

    #[tokio::test]
    async fn monitor_copies_profiles_of_the_match() {
        let d = read(
            &MonitorDataSource::new(),
            json!({"name_regex": "Website", "monitor_type": "URL"}),
        )
        .await
        .expect("read");

        assert_eq!(d.id(), "1");
        assert_eq!(d.get_string("location_profile_id"), "lp");
        assert_eq!(d.get_string_list("monitor_groups"), vec!["g1"]);
    }

    #[tokio::test]
    async fn monitor_needs_both_filters() {
        let err = read(&MonitorDataSource::new(), json!({"monitor_type": "URL"}))
            .await
            .expect_err("type alone");
        assert_eq!(
            err.to_string(),
            "Unable to find monitor matching the name : \"\" and monitor type : \"URL\""
        );

        let err = read(&MonitorDataSource::new(), json!({"name_regex": "Website"}))
            .await
            .expect_err("name alone");
        assert_eq!(
            err.to_string(),
            "Unable to find monitor matching the name : \"Website\" and monitor type : \"\""
        );
    }

    #[tokio::test]
    async fn monitor_without_filters_matches_nothing() {
        let err = read(&MonitorDataSource::new(), json!({}))
            .await
            .expect_err("no filters");

        assert_eq!(
            err.to_string(),
            "Unable to find monitor matching the name : \"\" and monitor type : \"\""
        );
    }
}
