//! Third party alerting integrations
//!
//! All integrations share the alert selection fields: which monitors or tags
//! raise alerts and at which severities.

use async_trait::async_trait;

use crate::{
    api::{
        endpoints::Endpoint,
        integrations::{
            ConnectwiseIntegration, OpsgenieIntegration, PagerDutyIntegration,
            ServiceNowIntegration, SlackIntegration, TelegramIntegration, WebhookIntegration,
        },
        Site24x7Client,
    },
    provider::{
        common::{self, Fields},
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema, Validation},
        ProviderError,
    },
};

fn alert_selection_fields(trouble_alert_default: bool) -> Fields {
    vec![
        (
            "selection_type",
            Field::int()
                .default(0)
                .validate(Validation::IntInSlice(&[0, 2, 3]))
                .describe("Resource type associated to this integration. 0 all monitors, 2 monitors, 3 tags."),
        ),
        (
            "trouble_alert",
            Field::bool()
                .default(trouble_alert_default)
                .describe("Send trouble alerts through this integration."),
        ),
        (
            "critical_alert",
            Field::bool().describe("Send critical alerts through this integration."),
        ),
        (
            "down_alert",
            Field::bool().describe("Send down alerts through this integration."),
        ),
        (
            "monitors",
            Field::string_list().describe("Monitors associated with the integration."),
        ),
        (
            "tags",
            Field::string_list().describe("Tags associated with the integration."),
        ),
        (
            "alert_tags_id",
            Field::string_list()
                .describe("Tag IDs; only alerts of monitors carrying these tags are sent."),
        ),
    ]
}

pub struct WebhookIntegrationMapping;

#[async_trait]
impl Mapping for WebhookIntegrationMapping {
    type Api = WebhookIntegration;

    const TYPE_NAME: &'static str = "site24x7_webhook_integration";

    fn schema() -> Schema {
        Schema::new([
            (
                "name",
                Field::string().required().describe("Display name for the integration."),
            ),
            (
                "url",
                Field::string().required().describe("Hook URL to which the message will be posted."),
            ),
            (
                "timeout",
                Field::int()
                    .default(30)
                    .describe("Seconds to wait for the hook URL to respond."),
            ),
            (
                "method",
                Field::string()
                    .default("G")
                    .validate(Validation::StringInSlice(&["G", "P", "PUT", "D"]))
                    .describe("HTTP method used to access the URL."),
            ),
            (
                "is_poller_webhook",
                Field::bool().describe("Send the webhook through an on-premise poller."),
            ),
            (
                "poller",
                Field::string().describe("On-premise poller that sends the webhook."),
            ),
            (
                "send_incident_parameters",
                Field::bool()
                    .default(true)
                    .describe("Send incident parameters with the request."),
            ),
            (
                "send_custom_parameters",
                Field::bool().describe("Send custom parameters with the request."),
            ),
            (
                "custom_parameters",
                Field::string().describe("Custom parameters to be sent with the request."),
            ),
            (
                "send_in_json_format",
                Field::bool().describe("Post the parameters as JSON."),
            ),
            (
                "auth_method",
                Field::string().describe("Authentication method for the hook URL."),
            ),
            (
                "user_name",
                Field::string().describe("User name for basic authentication."),
            ),
            (
                "password",
                Field::string()
                    .sensitive()
                    .describe("Password for basic authentication."),
            ),
            (
                "oauth2_provider",
                Field::string().describe("OAuth2 provider used to authenticate the request."),
            ),
            (
                "custom_headers",
                Field::string_map().describe("Headers sent with the request."),
            ),
            (
                "user_agent",
                Field::string().describe("User agent sent with the request."),
            ),
            (
                "manage_tickets",
                Field::bool().describe("Create, update and close tickets in the target service."),
            ),
        ])
        .extend(alert_selection_fields(true))
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<WebhookIntegration> {
        client.webhook_integrations()
    }

    async fn to_api(
        d: &mut ResourceData,
        _client: &Site24x7Client,
    ) -> Result<WebhookIntegration, ProviderError> {
        Ok(WebhookIntegration {
            service_id: d.id().to_string(),
            service_status: 0,
            name: d.get_string("name"),
            url: d.get_string("url"),
            timeout: d.get_int("timeout"),
            method: d.get_string("method"),
            selection_type: d.get_int("selection_type"),
            trouble_alert: d.get_bool("trouble_alert"),
            critical_alert: d.get_bool("critical_alert"),
            down_alert: d.get_bool("down_alert"),
            is_poller_webhook: d.get_bool("is_poller_webhook"),
            poller: d.get_string("poller"),
            send_incident_parameters: d.get_bool("send_incident_parameters"),
            send_custom_parameters: d.get_bool("send_custom_parameters"),
            custom_parameters: d.get_string("custom_parameters"),
            send_in_json_format: d.get_bool("send_in_json_format"),
            auth_method: d.get_string("auth_method"),
            user_name: d.get_string("user_name"),
            password: d.get_string("password"),
            oauth2_provider: d.get_string("oauth2_provider"),
            user_agent: d.get_string("user_agent"),
            custom_headers: common::headers_from_map(&d.get_string_map("custom_headers")),
            tags: d.get_string_list("tags"),
            monitors: d.get_string_list("monitors"),
            alert_tag_ids: d.get_string_list("alert_tags_id"),
            manage_tickets: d.get_bool("manage_tickets"),
        })
    }

    fn id_of(api: &WebhookIntegration) -> &str {
        &api.service_id
    }

    // The password is write only.
    fn flatten(api: &WebhookIntegration, d: &mut ResourceData) {
        d.set("name", &api.name);
        d.set("url", &api.url);
        d.set("timeout", api.timeout);
        d.set("method", &api.method);
        d.set("selection_type", api.selection_type);
        d.set("trouble_alert", api.trouble_alert);
        d.set("critical_alert", api.critical_alert);
        d.set("down_alert", api.down_alert);
        d.set("is_poller_webhook", api.is_poller_webhook);
        d.set("poller", &api.poller);
        d.set("send_incident_parameters", api.send_incident_parameters);
        d.set("send_custom_parameters", api.send_custom_parameters);
        d.set("custom_parameters", &api.custom_parameters);
        d.set("send_in_json_format", api.send_in_json_format);
        d.set("auth_method", &api.auth_method);
        d.set("user_name", &api.user_name);
        d.set("oauth2_provider", &api.oauth2_provider);
        d.set("user_agent", &api.user_agent);
        d.set("custom_headers", common::headers_to_map(&api.custom_headers));
        d.set("tags", &api.tags);
        d.set("monitors", &api.monitors);
        d.set("alert_tags_id", &api.alert_tag_ids);
        d.set("manage_tickets", api.manage_tickets);
    }
}

pub struct SlackIntegrationMapping;

#[async_trait]
impl Mapping for SlackIntegrationMapping {
    type Api = SlackIntegration;

    const TYPE_NAME: &'static str = "site24x7_slack_integration";

    fn schema() -> Schema {
        Schema::new([
            (
                "name",
                Field::string().required().describe("Display name for the integration."),
            ),
            (
                "url",
                Field::string().required().describe("Slack incoming webhook URL."),
            ),
            (
                "sender_name",
                Field::string().required().describe("Name of the service who posted the message."),
            ),
            (
                "title",
                Field::string().required().describe("Title of the incident."),
            ),
        ])
        .extend(alert_selection_fields(true))
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<SlackIntegration> {
        client.slack_integrations()
    }

    async fn to_api(
        d: &mut ResourceData,
        _client: &Site24x7Client,
    ) -> Result<SlackIntegration, ProviderError> {
        Ok(SlackIntegration {
            service_id: d.id().to_string(),
            service_status: 0,
            name: d.get_string("name"),
            url: d.get_string("url"),
            sender_name: d.get_string("sender_name"),
            title: d.get_string("title"),
            selection_type: d.get_int("selection_type"),
            trouble_alert: d.get_bool("trouble_alert"),
            critical_alert: d.get_bool("critical_alert"),
            down_alert: d.get_bool("down_alert"),
            tags: d.get_string_list("tags"),
            monitors: d.get_string_list("monitors"),
            alert_tag_ids: d.get_string_list("alert_tags_id"),
        })
    }

    fn id_of(api: &SlackIntegration) -> &str {
        &api.service_id
    }

    fn flatten(api: &SlackIntegration, d: &mut ResourceData) {
        d.set("name", &api.name);
        d.set("url", &api.url);
        d.set("sender_name", &api.sender_name);
        d.set("title", &api.title);
        d.set("selection_type", api.selection_type);
        d.set("trouble_alert", api.trouble_alert);
        d.set("critical_alert", api.critical_alert);
        d.set("down_alert", api.down_alert);
        d.set("tags", &api.tags);
        d.set("monitors", &api.monitors);
        d.set("alert_tags_id", &api.alert_tag_ids);
    }
}

pub struct PagerDutyIntegrationMapping;

#[async_trait]
impl Mapping for PagerDutyIntegrationMapping {
    type Api = PagerDutyIntegration;

    const TYPE_NAME: &'static str = "site24x7_pagerduty_integration";

    fn schema() -> Schema {
        Schema::new([
            (
                "name",
                Field::string().required().describe("Display name for the integration."),
            ),
            (
                "service_key",
                Field::string()
                    .required()
                    .sensitive()
                    .describe("Unique integration key provided by PagerDuty."),
            ),
            (
                "sender_name",
                Field::string().required().describe("Name of the service who posted the incident."),
            ),
            (
                "title",
                Field::string().required().describe("Title of the incident."),
            ),
            (
                "manual_resolve",
                Field::bool().describe("Resolve the incident manually."),
            ),
            (
                "send_custom_parameters",
                Field::bool().describe("Send custom parameters with the incident."),
            ),
            (
                "custom_parameters",
                Field::string().describe("Custom parameters to be sent with the incident."),
            ),
        ])
        .extend(alert_selection_fields(false))
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<PagerDutyIntegration> {
        client.pagerduty_integrations()
    }

    async fn to_api(
        d: &mut ResourceData,
        _client: &Site24x7Client,
    ) -> Result<PagerDutyIntegration, ProviderError> {
        Ok(PagerDutyIntegration {
            service_id: d.id().to_string(),
            service_status: 0,
            name: d.get_string("name"),
            service_key: d.get_string("service_key"),
            selection_type: d.get_int("selection_type"),
            sender_name: d.get_string("sender_name"),
            title: d.get_string("title"),
            trouble_alert: d.get_bool("trouble_alert"),
            critical_alert: d.get_bool("critical_alert"),
            down_alert: d.get_bool("down_alert"),
            manual_resolve: d.get_bool("manual_resolve"),
            send_custom_parameters: d.get_bool("send_custom_parameters"),
            custom_parameters: d.get_string("custom_parameters"),
            tags: d.get_string_list("tags"),
            monitors: d.get_string_list("monitors"),
            alert_tag_ids: d.get_string_list("alert_tags_id"),
        })
    }

    fn id_of(api: &PagerDutyIntegration) -> &str {
        &api.service_id
    }

    fn flatten(api: &PagerDutyIntegration, d: &mut ResourceData) {
        d.set("name", &api.name);
        d.set("sender_name", &api.sender_name);
        d.set("title", &api.title);
        d.set("selection_type", api.selection_type);
        d.set("trouble_alert", api.trouble_alert);
        d.set("critical_alert", api.critical_alert);
        d.set("down_alert", api.down_alert);
        d.set("manual_resolve", api.manual_resolve);
        d.set("send_custom_parameters", api.send_custom_parameters);
        d.set("custom_parameters", &api.custom_parameters);
        d.set("tags", &api.tags);
        d.set("monitors", &api.monitors);
        d.set("alert_tags_id", &api.alert_tag_ids);
    }
}

fn custom_parameter_fields() -> Fields {
    vec![
        (
            "send_custom_parameters",
            Field::bool().describe("Send custom parameters with the alert."),
        ),
        (
            "custom_parameters",
            Field::string().describe("Custom parameters to be sent with the alert."),
        ),
    ]
}

pub struct OpsgenieIntegrationMapping;

#[async_trait]
impl Mapping for OpsgenieIntegrationMapping {
    type Api = OpsgenieIntegration;

    const TYPE_NAME: &'static str = "site24x7_opsgenie_integration";

    fn schema() -> Schema {
        Schema::new([
            (
                "name",
                Field::string().required().describe("Display name for the integration."),
            ),
            (
                "url",
                Field::string().required().describe("Opsgenie API integration URL."),
            ),
            (
                "manual_resolve",
                Field::bool().describe("Resolve the incident manually."),
            ),
        ])
        .extend(custom_parameter_fields())
        .extend(alert_selection_fields(true))
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<OpsgenieIntegration> {
        client.opsgenie_integrations()
    }

    async fn to_api(
        d: &mut ResourceData,
        _client: &Site24x7Client,
    ) -> Result<OpsgenieIntegration, ProviderError> {
        Ok(OpsgenieIntegration {
            service_id: d.id().to_string(),
            service_status: 0,
            name: d.get_string("name"),
            url: d.get_string("url"),
            selection_type: d.get_int("selection_type"),
            trouble_alert: d.get_bool("trouble_alert"),
            critical_alert: d.get_bool("critical_alert"),
            down_alert: d.get_bool("down_alert"),
            manual_resolve: d.get_bool("manual_resolve"),
            send_custom_parameters: d.get_bool("send_custom_parameters"),
            custom_parameters: d.get_string("custom_parameters"),
            tags: d.get_string_list("tags"),
            monitors: d.get_string_list("monitors"),
            alert_tag_ids: d.get_string_list("alert_tags_id"),
        })
    }

    fn id_of(api: &OpsgenieIntegration) -> &str {
        &api.service_id
    }

    fn flatten(api: &OpsgenieIntegration, d: &mut ResourceData) {
        d.set("name", &api.name);
        d.set("url", &api.url);
        d.set("selection_type", api.selection_type);
        d.set("trouble_alert", api.trouble_alert);
        d.set("critical_alert", api.critical_alert);
        d.set("down_alert", api.down_alert);
        d.set("manual_resolve", api.manual_resolve);
        d.set("send_custom_parameters", api.send_custom_parameters);
        d.set("custom_parameters", &api.custom_parameters);
        d.set("tags", &api.tags);
        d.set("monitors", &api.monitors);
        d.set("alert_tags_id", &api.alert_tag_ids);
    }
}

pub struct ServiceNowIntegrationMapping;

#[async_trait]
impl Mapping for ServiceNowIntegrationMapping {
    type Api = ServiceNowIntegration;

    const TYPE_NAME: &'static str = "site24x7_servicenow_integration";

    fn schema() -> Schema {
        Schema::new([
            (
                "name",
                Field::string().required().describe("Display name for the integration."),
            ),
            (
                "instance_url",
                Field::string().required().describe("ServiceNow instance URL."),
            ),
            (
                "sender_name",
                Field::string().required().describe("Name of the service who posted the incident."),
            ),
            (
                "title",
                Field::string().required().describe("Title of the incident."),
            ),
            (
                "user_name",
                Field::string().required().describe("ServiceNow user name."),
            ),
            (
                "password",
                Field::string()
                    .required()
                    .sensitive()
                    .describe("ServiceNow password."),
            ),
        ])
        .extend(custom_parameter_fields())
        .extend(alert_selection_fields(true))
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<ServiceNowIntegration> {
        client.servicenow_integrations()
    }

    async fn to_api(
        d: &mut ResourceData,
        _client: &Site24x7Client,
    ) -> Result<ServiceNowIntegration, ProviderError> {
        Ok(ServiceNowIntegration {
            service_id: d.id().to_string(),
            service_status: 0,
            name: d.get_string("name"),
            instance_url: d.get_string("instance_url"),
            sender_name: d.get_string("sender_name"),
            title: d.get_string("title"),
            user_name: d.get_string("user_name"),
            password: d.get_string("password"),
            selection_type: d.get_int("selection_type"),
            trouble_alert: d.get_bool("trouble_alert"),
            critical_alert: d.get_bool("critical_alert"),
            down_alert: d.get_bool("down_alert"),
            send_custom_parameters: d.get_bool("send_custom_parameters"),
            custom_parameters: d.get_string("custom_parameters"),
            tags: d.get_string_list("tags"),
            monitors: d.get_string_list("monitors"),
            alert_tag_ids: d.get_string_list("alert_tags_id"),
        })
    }

    fn id_of(api: &ServiceNowIntegration) -> &str {
        &api.service_id
    }

    // The password is write only.
    fn flatten(api: &ServiceNowIntegration, d: &mut ResourceData) {
        d.set("name", &api.name);
        d.set("instance_url", &api.instance_url);
        d.set("sender_name", &api.sender_name);
        d.set("title", &api.title);
        d.set("user_name", &api.user_name);
        d.set("selection_type", api.selection_type);
        d.set("trouble_alert", api.trouble_alert);
        d.set("critical_alert", api.critical_alert);
        d.set("down_alert", api.down_alert);
        d.set("send_custom_parameters", api.send_custom_parameters);
        d.set("custom_parameters", &api.custom_parameters);
        d.set("tags", &api.tags);
        d.set("monitors", &api.monitors);
        d.set("alert_tags_id", &api.alert_tag_ids);
    }
}

pub struct ConnectwiseIntegrationMapping;

#[async_trait]
impl Mapping for ConnectwiseIntegrationMapping {
    type Api = ConnectwiseIntegration;

    const TYPE_NAME: &'static str = "site24x7_connectwise_integration";

    fn schema() -> Schema {
        let required = |description| Field::string().required().describe(description);

        Schema::new([
            ("name", required("Display name for the integration.")),
            ("url", required("ConnectWise site URL.")),
            ("company", required("ConnectWise company name used to log in.")),
            ("public_key", required("Public key of the ConnectWise API member.")),
            (
                "private_key",
                Field::string()
                    .required()
                    .sensitive()
                    .describe("Private key of the ConnectWise API member."),
            ),
            ("company_id", required("Company the tickets are raised for.")),
            ("close_status", required("Ticket status used when the alert resolves.")),
            (
                "manual_resolve",
                Field::bool().describe("Resolve the ticket manually."),
            ),
            (
                "user_groups",
                Field::string_list().describe("User groups notified about ticket updates."),
            ),
        ])
        .extend(custom_parameter_fields())
        .extend(alert_selection_fields(true))
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<ConnectwiseIntegration> {
        client.connectwise_integrations()
    }

    async fn to_api(
        d: &mut ResourceData,
        _client: &Site24x7Client,
    ) -> Result<ConnectwiseIntegration, ProviderError> {
        Ok(ConnectwiseIntegration {
            service_id: d.id().to_string(),
            service_status: 0,
            name: d.get_string("name"),
            url: d.get_string("url"),
            company: d.get_string("company"),
            public_key: d.get_string("public_key"),
            private_key: d.get_string("private_key"),
            company_id: d.get_string("company_id"),
            close_status: d.get_string("close_status"),
            selection_type: d.get_int("selection_type"),
            trouble_alert: d.get_bool("trouble_alert"),
            critical_alert: d.get_bool("critical_alert"),
            down_alert: d.get_bool("down_alert"),
            manual_resolve: d.get_bool("manual_resolve"),
            send_custom_parameters: d.get_bool("send_custom_parameters"),
            custom_parameters: d.get_string("custom_parameters"),
            tags: d.get_string_list("tags"),
            monitors: d.get_string_list("monitors"),
            alert_tag_ids: d.get_string_list("alert_tags_id"),
            user_groups: d.get_string_list("user_groups"),
        })
    }

    fn id_of(api: &ConnectwiseIntegration) -> &str {
        &api.service_id
    }

    fn flatten(api: &ConnectwiseIntegration, d: &mut ResourceData) {
        d.set("name", &api.name);
        d.set("url", &api.url);
        d.set("company", &api.company);
        d.set("public_key", &api.public_key);
        d.set("private_key", &api.private_key);
        d.set("company_id", &api.company_id);
        d.set("close_status", &api.close_status);
        d.set("selection_type", api.selection_type);
        d.set("trouble_alert", api.trouble_alert);
        d.set("critical_alert", api.critical_alert);
        d.set("down_alert", api.down_alert);
        d.set("manual_resolve", api.manual_resolve);
        d.set("send_custom_parameters", api.send_custom_parameters);
        d.set("custom_parameters", &api.custom_parameters);
        d.set("tags", &api.tags);
        d.set("monitors", &api.monitors);
        d.set("alert_tags_id", &api.alert_tag_ids);
        d.set("user_groups", &api.user_groups);
    }
}

pub struct TelegramIntegrationMapping;

#[async_trait]
impl Mapping for TelegramIntegrationMapping {
    type Api = TelegramIntegration;

    const TYPE_NAME: &'static str = "site24x7_telegram_integration";

    fn schema() -> Schema {
        Schema::new([
            (
                "name",
                Field::string().required().describe("Display name for the integration."),
            ),
            (
                "channel_url",
                Field::string().required().describe("Telegram channel invite URL."),
            ),
            (
                "token",
                Field::string()
                    .required()
                    .sensitive()
                    .describe("Token of the bot that posts to the channel."),
            ),
            (
                "title",
                Field::string().required().describe("Title of the message."),
            ),
        ])
        .extend(alert_selection_fields(true))
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<TelegramIntegration> {
        client.telegram_integrations()
    }

    async fn to_api(
        d: &mut ResourceData,
        _client: &Site24x7Client,
    ) -> Result<TelegramIntegration, ProviderError> {
        Ok(TelegramIntegration {
            service_id: d.id().to_string(),
            service_status: 0,
            name: d.get_string("name"),
            channel_url: d.get_string("channel_url"),
            token: d.get_string("token"),
            title: d.get_string("title"),
            selection_type: d.get_int("selection_type"),
            trouble_alert: d.get_bool("trouble_alert"),
            critical_alert: d.get_bool("critical_alert"),
            down_alert: d.get_bool("down_alert"),
            tags: d.get_string_list("tags"),
            monitors: d.get_string_list("monitors"),
            alert_tag_ids: d.get_string_list("alert_tags_id"),
        })
    }

    fn id_of(api: &TelegramIntegration) -> &str {
        &api.service_id
    }

    fn flatten(api: &TelegramIntegration, d: &mut ResourceData) {
        d.set("name", &api.name);
        d.set("channel_url", &api.channel_url);
        d.set("token", &api.token);
        d.set("title", &api.title);
        d.set("selection_type", api.selection_type);
        d.set("trouble_alert", api.trouble_alert);
        d.set("critical_alert", api.critical_alert);
        d.set("down_alert", api.down_alert);
        d.set("tags", &api.tags);
        d.set("monitors", &api.monitors);
        d.set("alert_tags_id", &api.alert_tag_ids);
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::{
        provider::resource::{Crud, Resource},
        testing::fake_client,
    };

    #[tokio::test]
    async fn webhook_create_applies_defaults() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::POST,
            "integration/webhooks",
            json!({"service_id": "w1", "service_status": 0}),
        );
        let mut d = ResourceData::from_config(
            &WebhookIntegrationMapping::schema(),
            &json!({
                "name": "Ops hook",
                "url": "https://hooks.example.com/site24x7",
                "custom_headers": {"X-Token": "abc"},
                "monitors": ["m1"],
                "selection_type": 2
            }),
        )
        .expect("valid config");

        Crud::<WebhookIntegrationMapping>::new()
            .create(&client, &mut d)
            .await
            .expect("created");

        assert_eq!(d.id(), "w1");
        assert_eq!(
            transport.last_body(Method::POST, "integration/webhooks"),
            json!({
                "name": "Ops hook",
                "url": "https://hooks.example.com/site24x7",
                "timeout": 30,
                "method": "G",
                "selection_type": 2,
                "trouble_alert": true,
                "critical_alert": false,
                "down_alert": false,
                "is_poller_webhook": false,
                "send_incident_parameters": true,
                "send_custom_parameters": false,
                "send_in_json_format": false,
                "custom_headers": [{"name": "X-Token", "value": "abc"}],
                "monitors": ["m1"],
                "manage_tickets": false
            })
        );
    }

    #[tokio::test]
    async fn slack_read_flattens_string_selection_type() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::GET,
            "integration/slack/s1",
            json!({
                "service_id": "s1",
                "name": "Slack",
                "url": "https://hooks.slack.com/services/T0/B0/XX",
                "sender_name": "Site24x7",
                "title": "Alert",
                "selection_type": "3",
                "alert_tags_id": ["t1"]
            }),
        );
        let mut d = ResourceData::with_id("s1");

        Crud::<SlackIntegrationMapping>::new()
            .read(&client, &mut d)
            .await
            .expect("read");

        assert_eq!(d.get_int("selection_type"), 3);
        assert_eq!(d.get_string_list("alert_tags_id"), vec!["t1"]);
    }

    #[tokio::test]
    async fn pagerduty_delete_of_missing_integration_succeeds() {
        let (transport, client) = fake_client();
        transport.respond(
            Method::DELETE,
            "integration/pager_duty/p1",
            404,
            json!({"code": 1, "message": "not found"}),
        );

        Crud::<PagerDutyIntegrationMapping>::new()
            .delete(&client, &ResourceData::with_id("p1"))
            .await
            .expect("missing integration treated as deleted");
    }

    #[test]
    fn pagerduty_leaves_trouble_alert_off() {
        let d = ResourceData::from_config(
            &PagerDutyIntegrationMapping::schema(),
            &json!({"name": "PD", "service_key": "k", "sender_name": "s", "title": "t"}),
        )
        .expect("valid config");

        assert!(!d.get_bool("trouble_alert"));
        assert_eq!(d.get_int("selection_type"), 0);
    }

    #[tokio::test]
    async fn servicenow_password_is_sent_but_not_read_back() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::POST,
            "integration/service_now",
            json!({"service_id": "sn1"}),
        );
        transport.respond_data(
            Method::GET,
            "integration/service_now/sn1",
            json!({
                "service_id": "sn1",
                "name": "ServiceNow",
                "instance_url": "https://acme.service-now.com",
                "user_name": "svc",
                "selection_type": 0
            }),
        );
        let mut d = ResourceData::from_config(
            &ServiceNowIntegrationMapping::schema(),
            &json!({
                "name": "ServiceNow",
                "instance_url": "https://acme.service-now.com",
                "sender_name": "Site24x7",
                "title": "Alert",
                "user_name": "svc",
                "password": "secret"
            }),
        )
        .expect("valid config");
        let crud = Crud::<ServiceNowIntegrationMapping>::new();

        crud.create(&client, &mut d).await.expect("created");
        let body = transport.last_body(Method::POST, "integration/service_now");
        assert_eq!(body["password"], json!("secret"));
        assert_eq!(body["trouble_alert"], json!(true));

        let mut state = ResourceData::with_id("sn1");
        crud.read(&client, &mut state).await.expect("read");
        assert_eq!(state.get_string("user_name"), "svc");
        assert_eq!(state.get("password"), None);
    }

    #[tokio::test]
    async fn connectwise_carries_ticket_settings() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::PUT,
            "integration/connectwise/cw1",
            json!({"service_id": "cw1"}),
        );
        let mut d = ResourceData::from_config(
            &ConnectwiseIntegrationMapping::schema(),
            &json!({
                "name": "Site24x7-Connectwise Integration",
                "url": "https://wefvsefv.connectwisedev.com/",
                "company": "zylker_c",
                "public_key": "KefwvwfrmAb",
                "private_key": "wegraaeagt",
                "company_id": "GreenInc",
                "close_status": "Closed (resolved)",
                "alert_tags_id": ["123450023231001"],
                "user_groups": ["ug1"]
            }),
        )
        .expect("valid config");
        d.set_id("cw1");

        Crud::<ConnectwiseIntegrationMapping>::new()
            .update(&client, &mut d)
            .await
            .expect("updated");

        let body = transport.last_body(Method::PUT, "integration/connectwise/cw1");
        assert_eq!(body["company_id"], json!("GreenInc"));
        assert_eq!(body["close_status"], json!("Closed (resolved)"));
        assert_eq!(body["alert_tags_id"], json!(["123450023231001"]));
        assert_eq!(body["user_groups"], json!(["ug1"]));
        assert!(body.get("send_custom_parameters").is_none());
    }

    #[tokio::test]
    async fn telegram_and_opsgenie_post_to_their_collections() {
        let (transport, client) = fake_client();
        transport.respond_data(Method::POST, "integration/telegram", json!({"service_id": "t1"}));
        transport.respond_data(Method::POST, "integration/opsgenie", json!({"service_id": "o1"}));
        let mut telegram = ResourceData::from_config(
            &TelegramIntegrationMapping::schema(),
            &json!({
                "name": "Telegram",
                "channel_url": "https://t.me/site24x7_ops",
                "token": "bot-token",
                "title": "Alert"
            }),
        )
        .expect("valid config");
        let mut opsgenie = ResourceData::from_config(
            &OpsgenieIntegrationMapping::schema(),
            &json!({"name": "Opsgenie", "url": "https://api.opsgenie.com/v1/json/site24x7?apiKey=k"}),
        )
        .expect("valid config");

        Crud::<TelegramIntegrationMapping>::new()
            .create(&client, &mut telegram)
            .await
            .expect("telegram created");
        Crud::<OpsgenieIntegrationMapping>::new()
            .create(&client, &mut opsgenie)
            .await
            .expect("opsgenie created");

        assert_eq!(telegram.id(), "t1");
        assert_eq!(opsgenie.id(), "o1");
        assert_eq!(
            transport.last_body(Method::POST, "integration/telegram")["url"],
            json!("https://t.me/site24x7_ops")
        );
        assert_eq!(
            transport.last_body(Method::POST, "integration/opsgenie")["manual_resolve"],
            json!(false)
        );
    }
}
