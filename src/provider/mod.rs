//! Terraform provider for Site24x7
//!
//! The [`Provider`] owns the provider block schema and the registry of
//! resources and data sources keyed by their Terraform type names.

pub mod business_hour;
pub mod common;
pub mod credential_profile;
pub mod customer;
pub mod data_sources;
pub mod defaults;
pub mod integrations;
pub mod monitor_group;
pub mod monitors;
pub mod profiles;
pub mod resource;
pub mod resource_data;
pub mod schedule_maintenance;
pub mod schema;
pub mod subgroup;
pub mod tag;
pub mod url_action;
pub mod user;
pub mod user_group;

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use serde_json::{json, Value};
use thiserror::Error;

use crate::{
    api::{
        backoff::RetryConfig, data_center::DataCenter, errors::ApiError, ClientConfig,
        Site24x7Client,
    },
    provider::{
        resource::{Crud, DataSource, Resource},
        resource_data::ResourceData,
        schema::{Field, Schema, Validation},
    },
};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("invalid regular expression: {0}")]
    Regex(#[from] regex::Error),
    #[error("unknown resource type \"{0}\"")]
    UnknownResource(String),
    #[error("unknown data source type \"{0}\"")]
    UnknownDataSource(String),
    #[error("provider is not configured")]
    NotConfigured,
    #[error("{0}")]
    Config(String),
}

impl ProviderError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::UnknownResource(_)
                | Self::UnknownDataSource(_)
                | Self::Regex(_)
        )
    }
}

pub fn provider_schema() -> Schema {
    Schema::new([
        (
            "oauth2_client_id",
            Field::string()
                .required()
                .env_default("SITE24X7_OAUTH2_CLIENT_ID")
                .describe("OAuth2 Client ID"),
        ),
        (
            "oauth2_client_secret",
            Field::string()
                .required()
                .sensitive()
                .env_default("SITE24X7_OAUTH2_CLIENT_SECRET")
                .describe("OAuth2 Client Secret"),
        ),
        (
            "oauth2_refresh_token",
            Field::string()
                .required()
                .sensitive()
                .env_default("SITE24X7_OAUTH2_REFRESH_TOKEN")
                .describe("OAuth2 Refresh Token"),
        ),
        (
            "oauth2_access_token",
            Field::string()
                .sensitive()
                .env_default("SITE24X7_OAUTH2_ACCESS_TOKEN")
                .describe("OAuth2 Access Token"),
        ),
        (
            "access_token_expiry",
            Field::string().describe("Access token expiry in seconds"),
        ),
        (
            "data_center",
            Field::string()
                .required()
                .validate(Validation::StringInSlice(&["US", "EU", "IN", "AU", "CN", "JP", "CA"]))
                .describe("Site24x7 data center."),
        ),
        ("zaaid", Field::string().describe("MSP customer zaaid")),
        (
            "retry_min_wait",
            Field::int()
                .default(1)
                .describe("Minimum wait time in seconds before retrying failed API requests."),
        ),
        (
            "retry_max_wait",
            Field::int().default(30).describe(
                "Maximum wait time in seconds before retrying failed API requests (exponential backoff).",
            ),
        ),
        (
            "max_retries",
            Field::int()
                .default(4)
                .describe("Maximum number of retries for Site24x7 API errors until giving up"),
        ),
    ])
}

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub access_token: Option<String>,
    pub access_token_expiry: Option<String>,
    pub data_center: &'static DataCenter,
    pub zaaid: Option<String>,
    pub retry: RetryConfig,
}

impl ProviderSettings {
    pub fn from_config(schema: &Schema, config: &Value) -> Result<Self, ProviderError> {
        let d = ResourceData::from_config(schema, config)?;

        let data_center_code = d.get_string("data_center");
        let data_center = DataCenter::from_code(&data_center_code).ok_or_else(|| {
            ProviderError::Config(format!(
                "unknown data center \"{data_center_code}\", expected one of {:?}",
                DataCenter::codes()
            ))
        })?;

        let optional = |key: &str| Some(d.get_string(key)).filter(|value| !value.is_empty());
        let seconds = |key: &str| Duration::from_secs(d.get_int(key).max(0) as u64);

        Ok(Self {
            client_id: d.get_string("oauth2_client_id"),
            client_secret: d.get_string("oauth2_client_secret"),
            refresh_token: d.get_string("oauth2_refresh_token"),
            access_token: optional("oauth2_access_token"),
            access_token_expiry: optional("access_token_expiry"),
            data_center,
            zaaid: optional("zaaid"),
            retry: RetryConfig {
                min_wait: seconds("retry_min_wait"),
                max_wait: seconds("retry_max_wait"),
                max_retries: d.get_int("max_retries").max(0) as u32,
            },
        })
    }

    pub fn client_config(self) -> ClientConfig {
        ClientConfig {
            client_id: self.client_id,
            client_secret: self.client_secret,
            refresh_token: self.refresh_token,
            access_token: self.access_token,
            access_token_expiry: self.access_token_expiry,
            data_center: self.data_center,
            zaaid: self.zaaid,
            retry: self.retry,
        }
    }
}

pub struct Provider {
    schema: Schema,
    resources: BTreeMap<&'static str, Arc<dyn Resource>>,
    data_sources: BTreeMap<&'static str, Arc<dyn DataSource>>,
}

impl Provider {
    pub fn new() -> Self {
        let resources: Vec<Arc<dyn Resource>> = vec![
            Arc::new(Crud::<monitors::website::WebsiteMonitorMapping>::new()),
            Arc::new(Crud::<monitors::ssl::SslMonitorMapping>::new()),
            Arc::new(Crud::<monitors::rest_api::RestApiMonitorMapping>::new()),
            Arc::new(Crud::<monitors::cron::CronMonitorMapping>::new()),
            Arc::new(Crud::<monitors::heartbeat::HeartbeatMonitorMapping>::new()),
            Arc::new(Crud::<monitors::dns_server::DnsServerMonitorMapping>::new()),
            Arc::new(Crud::<monitors::web_transaction_browser::WebTransactionBrowserMonitorMapping>::new()),
            Arc::new(Crud::<monitors::amazon::AmazonMonitorMapping>::new()),
            Arc::new(Crud::<monitors::gcp::GcpMonitorMapping>::new()),
            Arc::new(Crud::<monitors::web_page_speed::WebPageSpeedMonitorMapping>::new()),
            Arc::new(Crud::<monitors::rest_api_transaction::RestApiTransactionMonitorMapping>::new()),
            Arc::new(Crud::<monitors::server::ServerMonitorMapping>::new()),
            Arc::new(Crud::<monitors::domain_expiry::DomainExpiryMonitorMapping>::new()),
            Arc::new(Crud::<monitors::isp::IspMonitorMapping>::new()),
            Arc::new(Crud::<monitors::ftp_transfer::FtpTransferMonitorMapping>::new()),
            Arc::new(Crud::<monitors::port::PortMonitorMapping>::new()),
            Arc::new(Crud::<monitors::ping::PingMonitorMapping>::new()),
            Arc::new(Crud::<monitors::soap::SoapMonitorMapping>::new()),
            Arc::new(Crud::<monitor_group::MonitorGroupMapping>::new()),
            Arc::new(Crud::<subgroup::SubgroupMapping>::new()),
            Arc::new(Crud::<tag::TagMapping>::new()),
            Arc::new(Crud::<user_group::UserGroupMapping>::new()),
            Arc::new(Crud::<user::UserMapping>::new()),
            Arc::new(Crud::<url_action::UrlActionMapping>::new()),
            Arc::new(Crud::<schedule_maintenance::ScheduleMaintenanceMapping>::new()),
            Arc::new(Crud::<credential_profile::CredentialProfileMapping>::new()),
            Arc::new(Crud::<business_hour::BusinessHourMapping>::new()),
            Arc::new(Crud::<profiles::NotificationProfileMapping>::new()),
            Arc::new(Crud::<profiles::ThresholdProfileMapping>::new()),
            Arc::new(Crud::<profiles::LocationProfileMapping>::new()),
            Arc::new(Crud::<customer::CustomerMapping>::new()),
            Arc::new(Crud::<integrations::WebhookIntegrationMapping>::new()),
            Arc::new(Crud::<integrations::SlackIntegrationMapping>::new()),
            Arc::new(Crud::<integrations::PagerDutyIntegrationMapping>::new()),
            Arc::new(Crud::<integrations::OpsgenieIntegrationMapping>::new()),
            Arc::new(Crud::<integrations::ServiceNowIntegrationMapping>::new()),
            Arc::new(Crud::<integrations::ConnectwiseIntegrationMapping>::new()),
            Arc::new(Crud::<integrations::TelegramIntegrationMapping>::new()),
        ];

        Self {
            schema: provider_schema(),
            resources: resources
                .into_iter()
                .map(|resource| (resource.type_name(), resource))
                .collect(),
            data_sources: data_sources::all()
                .into_iter()
                .map(|data_source| (data_source.type_name(), data_source))
                .collect(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn resource(&self, type_name: &str) -> Result<Arc<dyn Resource>, ProviderError> {
        self.resources
            .get(type_name)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownResource(type_name.to_string()))
    }

    pub fn data_source(&self, type_name: &str) -> Result<Arc<dyn DataSource>, ProviderError> {
        self.data_sources
            .get(type_name)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownDataSource(type_name.to_string()))
    }

    pub fn resource_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.resources.keys().copied()
    }

    pub fn data_source_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.data_sources.keys().copied()
    }

    pub fn schema_descriptor(&self) -> Value {
        let resources: serde_json::Map<String, Value> = self
            .resources
            .iter()
            .map(|(name, resource)| (name.to_string(), resource.schema().descriptor()))
            .collect();
        let data_sources: serde_json::Map<String, Value> = self
            .data_sources
            .iter()
            .map(|(name, data_source)| (name.to_string(), data_source.schema().descriptor()))
            .collect();

        json!({
            "provider": self.schema.descriptor(),
            "resource_schemas": resources,
            "data_source_schemas": data_sources,
        })
    }

    pub fn configure(&self, config: &Value) -> Result<Site24x7Client, ProviderError> {
        let settings = ProviderSettings::from_config(&self.schema, config)?;
        Ok(Site24x7Client::new(settings.client_config())?)
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn config() -> Value {
        json!({
            "oauth2_client_id": "client-id",
            "oauth2_client_secret": "client-secret",
            "oauth2_refresh_token": "refresh-token",
            "data_center": "EU",
            "zaaid": "1234"
        })
    }

    #[test]
    fn registers_every_resource_and_data_source() {
        let provider = Provider::new();

        let resources: Vec<_> = provider.resource_names().collect();
        let data_sources: Vec<_> = provider.data_source_names().collect();

        assert_eq!(resources.len(), 38);
        assert!(resources.contains(&"site24x7_website_monitor"));
        assert!(resources.contains(&"site24x7_rest_api_transaction_monitor"));
        assert!(resources.contains(&"site24x7_businesshour"));
        assert!(resources.contains(&"site24x7_telegram_integration"));
        assert_eq!(data_sources.len(), 15);
        assert!(data_sources.contains(&"site24x7_monitors"));
        assert!(data_sources.contains(&"site24x7_aws_external_id"));
        assert!(matches!(
            provider.resource("site24x7_bogus"),
            Err(ProviderError::UnknownResource(_))
        ));
    }

    #[test]
    fn settings_apply_retry_defaults_and_data_center() {
        let settings =
            ProviderSettings::from_config(&provider_schema(), &config()).expect("valid settings");

        assert_eq!(settings.data_center.code, "EU");
        assert_eq!(settings.zaaid.as_deref(), Some("1234"));
        assert_eq!(settings.access_token, None);
        assert_eq!(settings.retry, RetryConfig::default());
    }

    #[test]
    fn unknown_data_center_is_rejected() {
        let mut config = config();
        config["data_center"] = json!("MARS");

        let err = ProviderSettings::from_config(&provider_schema(), &config)
            .expect_err("unknown data center");

        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("data_center"));
    }

    #[test]
    fn schema_descriptor_covers_resources_and_data_sources() {
        let descriptor = Provider::new().schema_descriptor();

        assert_eq!(
            descriptor["provider"]["data_center"]["required"],
            json!(true)
        );
        assert_eq!(
            descriptor["resource_schemas"]["site24x7_tag"]["tag_type"]["default"],
            json!(1)
        );
        assert!(descriptor["data_source_schemas"]["site24x7_msp"].is_object());
    }
}
