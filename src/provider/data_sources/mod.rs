//! Read-only lookups of existing Site24x7 objects by name
//!
//! Most data sources list one collection, match a case-insensitive regular
//! expression against each entry's name and expose the first match together
//! with the ids of every match. That shape is captured by [`Lookup`] and
//! served by [`RegexLookup`].

pub mod admin;
pub mod groups;
pub mod monitors;
pub mod msp;
pub mod profiles;
pub mod tag;

use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;
use regex::Regex;

use crate::{
    api::{errors::ApiError, Site24x7Client},
    provider::{
        common::Fields,
        resource::DataSource,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub fn all() -> Vec<Arc<dyn DataSource>> {
    vec![
        Arc::new(RegexLookup::<profiles::LocationProfileLookup>::new()),
        Arc::new(RegexLookup::<profiles::ThresholdProfileLookup>::new()),
        Arc::new(RegexLookup::<profiles::NotificationProfileLookup>::new()),
        Arc::new(RegexLookup::<groups::UserGroupLookup>::new()),
        Arc::new(RegexLookup::<groups::MonitorGroupLookup>::new()),
        Arc::new(RegexLookup::<msp::MspCustomerLookup>::new()),
        Arc::new(RegexLookup::<msp::CustomerLookup>::new()),
        Arc::new(tag::TagDataSource::new()),
        Arc::new(monitors::MonitorDataSource::new()),
        Arc::new(monitors::MonitorsDataSource::new()),
        Arc::new(RegexLookup::<admin::ItAutomationLookup>::new()),
        Arc::new(admin::UserDataSource::new()),
        Arc::new(admin::CredentialProfileDataSource::new()),
        Arc::new(admin::AwsExternalIdDataSource::new()),
        Arc::new(admin::DeviceKeyDataSource::new()),
    ]
}

#[async_trait]
pub trait Lookup: Send + Sync + 'static {
    type Item: Send + Sync;

    const TYPE_NAME: &'static str;

    const NOUN: &'static str;

    const REGEX_KEY: &'static str = "name_regex";
    const IDS_KEY: &'static str = "matching_ids";
    const IDS_AND_NAMES_KEY: &'static str = "matching_ids_and_names";

    fn fields() -> Fields;

    async fn list(client: &Site24x7Client) -> Result<Vec<Self::Item>, ApiError>;

    fn id(item: &Self::Item) -> &str;

    fn name(item: &Self::Item) -> &str;

    fn flatten(item: &Self::Item, d: &mut ResourceData);
}

pub struct RegexLookup<L> {
    schema: Schema,
    _lookup: PhantomData<fn() -> L>,
}

impl<L: Lookup> RegexLookup<L> {
    pub fn new() -> Self {
        Self {
            schema: Schema::new([
                (
                    L::REGEX_KEY,
                    Field::string()
                        .required()
                        .describe("Regular expression denoting the name."),
                ),
                (
                    L::IDS_KEY,
                    Field::string_list()
                        .computed_only()
                        .describe("IDs of every entry matching the regular expression."),
                ),
                (
                    L::IDS_AND_NAMES_KEY,
                    Field::string_list()
                        .computed_only()
                        .describe("IDs and names of every match, joined as <id>__<name>."),
                ),
            ])
            .extend(L::fields()),
            _lookup: PhantomData,
        }
    }
}

impl<L: Lookup> Default for RegexLookup<L> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<L: Lookup> DataSource for RegexLookup<L> {
    fn type_name(&self) -> &'static str {
        L::TYPE_NAME
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    async fn read(&self, client: &Site24x7Client, d: &mut ResourceData) -> Result<(), ProviderError> {
        let pattern = name_pattern(d, L::REGEX_KEY)?;
        let items = L::list(client).await?;

        let matches = collect_matches(
            &items,
            L::id,
            |item| L::name(item).to_string(),
            |item| !L::name(item).is_empty() && pattern.is_match(L::name(item)),
        );
        let first = matches.first.ok_or_else(|| {
            ProviderError::not_found(format!(
                "Unable to find {} matching the name : \"{}",
                L::NOUN,
                d.get_string(L::REGEX_KEY)
            ))
        })?;

        d.set_id(L::id(first));
        d.set(L::IDS_KEY, &matches.ids);
        d.set(L::IDS_AND_NAMES_KEY, &matches.ids_and_names);
        L::flatten(first, d);
        Ok(())
    }
}

pub(crate) fn name_pattern(d: &ResourceData, key: &str) -> Result<Regex, ProviderError> {
    let raw = d.get_string(key);
    if raw.is_empty() {
        return Err(ProviderError::Validation(format!(
            "Please enter a value for the attribute {key}!"
        )));
    }
    Ok(Regex::new(&format!("(?i){raw}"))?)
}

pub(crate) struct Matches<'a, T> {
    pub first: Option<&'a T>,
    pub last: Option<&'a T>,
    pub ids: Vec<String>,
    pub ids_and_names: Vec<String>,
}

pub(crate) fn collect_matches<'a, T>(
    items: &'a [T],
    id: fn(&T) -> &str,
    label: impl Fn(&T) -> String,
    is_match: impl Fn(&T) -> bool,
) -> Matches<'a, T> {
    let mut matches = Matches {
        first: None,
        last: None,
        ids: Vec::new(),
        ids_and_names: Vec::new(),
    };
    for item in items.iter().filter(|item| is_match(item)) {
        matches.first.get_or_insert(item);
        matches.last = Some(item);
        matches.ids.push(id(item).to_string());
        matches
            .ids_and_names
            .push(format!("{}__{}", id(item), label(item)));
    }
    matches
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::testing::fake_client;

    struct Named {
        id: &'static str,
        name: &'static str,
    }

    fn named(id: &'static str, name: &'static str) -> Named {
        Named { id, name }
    }

    #[test]
    fn collects_every_match_in_order() {
        let items = [
            named("1", "Production EU"),
            named("2", ""),
            named("3", "staging"),
            named("4", "production US"),
        ];
        let pattern = Regex::new("(?i)^production").expect("regex");

        let matches = collect_matches(
            &items,
            |item| item.id,
            |item| item.name.to_string(),
            |item| pattern.is_match(item.name),
        );

        assert_eq!(matches.first.map(|item| item.id), Some("1"));
        assert_eq!(matches.last.map(|item| item.id), Some("4"));
        assert_eq!(matches.ids, vec!["1", "4"]);
        assert_eq!(
            matches.ids_and_names,
            vec!["1__Production EU", "4__production US"]
        );
    }

    #[test]
    fn empty_regex_is_rejected() {
        let d = ResourceData::new();

        let err = name_pattern(&d, "name_regex").expect_err("empty regex");

        assert_eq!(err.to_string(), "Please enter a value for the attribute name_regex!");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn invalid_regex_is_reported() {
        let mut d = ResourceData::new();
        d.set("name_regex", "(unclosed");

        assert!(matches!(
            name_pattern(&d, "name_regex"),
            Err(ProviderError::Regex(_))
        ));
    }

    #[tokio::test]
    async fn registry_exposes_every_lookup() {
        let names: Vec<_> = all().iter().map(|data_source| data_source.type_name()).collect();

        assert_eq!(names.len(), 15);
        assert!(names.contains(&"site24x7_msp"));
        assert!(names.contains(&"site24x7_it_automation"));
        assert!(names.contains(&"site24x7_device_key"));
        assert!(names.contains(&"site24x7_customer"));
    }

    #[tokio::test]
    async fn no_match_reports_the_regex() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::GET,
            "location_profiles",
            json!([{"profile_id": "1", "profile_name": "Europe"}]),
        );
        let data_source = RegexLookup::<profiles::LocationProfileLookup>::new();
        let mut d = ResourceData::from_config(data_source.schema(), &json!({"name_regex": "asia"}))
            .expect("valid config");

        let err = data_source.read(&client, &mut d).await.expect_err("no match");

        assert_eq!(
            err.to_string(),
            "Unable to find location profile matching the name : \"asia"
        );
    }
}
