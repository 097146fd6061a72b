//! Site24x7 REST API client
//!
//! Requests flow through [`rest::RestClient`] into a transport stack of
//! retry/backoff over OAuth signing over reqwest. Each collection is exposed as
//! a typed [`endpoints::Endpoint`].

pub mod admin;
pub mod backoff;
pub mod data_center;
pub mod endpoints;
pub mod errors;
pub mod integrations;
pub mod monitors;
pub mod oauth;
pub mod rest;
pub mod types;

use std::sync::Arc;

use crate::api::{
    admin::{
        AwsExternalId, BusinessHour, CredentialProfile, DeviceKey, ScheduleMaintenance, Subgroup,
        UrlAction, User,
    },
    backoff::{RetryConfig, RetryTransport},
    data_center::DataCenter,
    endpoints::Endpoint,
    errors::ApiError,
    integrations::{
        ConnectwiseIntegration, OpsgenieIntegration, PagerDutyIntegration, ServiceNowIntegration,
        SlackIntegration, TelegramIntegration, WebhookIntegration,
    },
    monitors::{
        AmazonMonitor, CronMonitor, DnsServerMonitor, DomainExpiryMonitor, FtpTransferMonitor,
        GcpMonitor, HeartbeatMonitor, IspMonitor, PingMonitor, PortMonitor, RestApiMonitor,
        RestApiTransactionMonitor, ServerMonitor, SoapMonitor, SslMonitor,
        WebPageSpeedMonitor, WebTransactionBrowserMonitor, WebsiteMonitor,
    },
    oauth::{OAuthConfig, OAuthTransport, TokenSource},
    rest::{HttpTransport, RestClient},
    types::{
        Customer, LocationProfile, Monitor, MonitorGroup, MspCustomer, NotificationProfile,
        Tag, ThresholdProfile, UserGroup,
    },
};

const MONITORS: &str = "monitors";
const CUSTOMER_CREATE_HEADERS: &[(&str, &str)] = &[("terraform_skip", "true")];

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub access_token: Option<String>,
    pub access_token_expiry: Option<String>,
    pub data_center: &'static DataCenter,
    pub zaaid: Option<String>,
    pub retry: RetryConfig,
}

#[derive(Clone)]
pub struct Site24x7Client {
    rest: RestClient,
}

impl Site24x7Client {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ApiError::HttpClient)?;

        let tokens = Arc::new(TokenSource::new(
            OAuthConfig {
                client_id: config.client_id,
                client_secret: config.client_secret,
                refresh_token: config.refresh_token,
                access_token: config.access_token,
                expiry: config.access_token_expiry,
                token_url: config.data_center.token_url.to_string(),
            },
            http.clone(),
        ));
        let transport = RetryTransport::new(OAuthTransport::new(http, tokens), config.retry);

        Ok(Self::with_transport(
            Arc::new(transport),
            config.data_center.api_base_url,
            config.zaaid,
        ))
    }

    pub fn with_transport(
        transport: Arc<dyn HttpTransport>,
        base_url: impl Into<String>,
        zaaid: Option<String>,
    ) -> Self {
        Self {
            rest: RestClient::new(transport, base_url, zaaid),
        }
    }

    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    fn endpoint<T>(&self, resource: &'static str) -> Endpoint<T>
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
    {
        Endpoint::new(self.rest.clone(), resource)
    }

    pub fn monitors(&self) -> Endpoint<Monitor> {
        self.endpoint(MONITORS)
    }

    pub fn website_monitors(&self) -> Endpoint<WebsiteMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn ssl_monitors(&self) -> Endpoint<SslMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn rest_api_monitors(&self) -> Endpoint<RestApiMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn cron_monitors(&self) -> Endpoint<CronMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn heartbeat_monitors(&self) -> Endpoint<HeartbeatMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn dns_server_monitors(&self) -> Endpoint<DnsServerMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn web_transaction_browser_monitors(&self) -> Endpoint<WebTransactionBrowserMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn amazon_monitors(&self) -> Endpoint<AmazonMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn gcp_monitors(&self) -> Endpoint<GcpMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn web_page_speed_monitors(&self) -> Endpoint<WebPageSpeedMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn rest_api_transaction_monitors(&self) -> Endpoint<RestApiTransactionMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn server_monitors(&self) -> Endpoint<ServerMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn domain_expiry_monitors(&self) -> Endpoint<DomainExpiryMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn isp_monitors(&self) -> Endpoint<IspMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn ftp_transfer_monitors(&self) -> Endpoint<FtpTransferMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn port_monitors(&self) -> Endpoint<PortMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn ping_monitors(&self) -> Endpoint<PingMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn soap_monitors(&self) -> Endpoint<SoapMonitor> {
        self.endpoint(MONITORS)
    }

    pub fn subgroups(&self) -> Endpoint<Subgroup> {
        self.endpoint("subgroups")
    }

    pub fn it_automations(&self) -> Endpoint<UrlAction> {
        self.endpoint("it_automation")
    }

    pub fn users(&self) -> Endpoint<User> {
        self.endpoint("users")
    }

    pub fn maintenance(&self) -> Endpoint<ScheduleMaintenance> {
        self.endpoint("maintenance")
    }

    // Managed one at a time under the singular path, listed under the plural one.
    pub fn credential_profiles(&self) -> Endpoint<CredentialProfile> {
        self.endpoint("credential_profile")
    }

    pub fn web_credentials(&self) -> Endpoint<CredentialProfile> {
        self.endpoint("credential_profiles")
    }

    pub fn business_hours(&self) -> Endpoint<BusinessHour> {
        self.endpoint("business_hours")
    }

    pub fn aws_external_id(&self) -> Endpoint<AwsExternalId> {
        self.endpoint("aws/external_id")
    }

    pub fn device_key(&self) -> Endpoint<DeviceKey> {
        self.endpoint("device_key")
    }

    pub fn monitor_groups(&self) -> Endpoint<MonitorGroup> {
        self.endpoint("monitor_groups")
    }

    pub fn tags(&self) -> Endpoint<Tag> {
        self.endpoint("tags")
    }

    pub fn user_groups(&self) -> Endpoint<UserGroup> {
        self.endpoint("user_groups")
    }

    pub fn notification_profiles(&self) -> Endpoint<NotificationProfile> {
        self.endpoint("notification_profiles")
    }

    pub fn threshold_profiles(&self) -> Endpoint<ThresholdProfile> {
        self.endpoint("threshold_profiles")
    }

    pub fn location_profiles(&self) -> Endpoint<LocationProfile> {
        self.endpoint("location_profiles")
    }

    pub fn customers(&self) -> Endpoint<Customer> {
        self.endpoint("msp/customers")
            .with_create_headers(CUSTOMER_CREATE_HEADERS)
    }

    pub fn msp_customers(&self) -> Endpoint<MspCustomer> {
        self.endpoint("short/msp/customers")
    }

    pub fn webhook_integrations(&self) -> Endpoint<WebhookIntegration> {
        self.endpoint("integration/webhooks")
    }

    pub fn slack_integrations(&self) -> Endpoint<SlackIntegration> {
        self.endpoint("integration/slack")
    }

    pub fn pagerduty_integrations(&self) -> Endpoint<PagerDutyIntegration> {
        self.endpoint("integration/pager_duty")
    }

    pub fn opsgenie_integrations(&self) -> Endpoint<OpsgenieIntegration> {
        self.endpoint("integration/opsgenie")
    }

    pub fn servicenow_integrations(&self) -> Endpoint<ServiceNowIntegration> {
        self.endpoint("integration/service_now")
    }

    pub fn connectwise_integrations(&self) -> Endpoint<ConnectwiseIntegration> {
        self.endpoint("integration/connectwise")
    }

    pub fn telegram_integrations(&self) -> Endpoint<TelegramIntegration> {
        self.endpoint("integration/telegram")
    }
}
