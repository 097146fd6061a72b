//! IT automation actions that call a URL
//!
//! Their ids are what the monitors' `actions` maps point at.

use async_trait::async_trait;

use crate::{
    api::{admin::UrlAction, endpoints::Endpoint, Site24x7Client},
    provider::{
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema, Validation},
        ProviderError,
    },
};

// The only action type this resource manages.
const URL_ACTION_TYPE: i64 = 1;

pub struct UrlActionMapping;

#[async_trait]
impl Mapping for UrlActionMapping {
    type Api = UrlAction;

    const TYPE_NAME: &'static str = "site24x7_url_action";

    fn schema() -> Schema {
        Schema::new([
            (
                "name",
                Field::string().required().describe("Display name for the action."),
            ),
            (
                "url",
                Field::string().required().describe("URL to be invoked for action execution."),
            ),
            (
                "type",
                Field::int()
                    .default(URL_ACTION_TYPE)
                    .validate(Validation::IntInSlice(&[URL_ACTION_TYPE]))
                    .describe("Type of the action."),
            ),
            (
                "method",
                Field::string()
                    .default("G")
                    .describe("HTTP method used to access the URL."),
            ),
            (
                "timeout",
                Field::int()
                    .default(15)
                    .describe("Seconds to wait for the URL to respond."),
            ),
            (
                "requires_authentication",
                Field::bool().describe("Authentication for the URL. Kept for compatibility, not sent."),
            ),
            (
                "custom_parameters",
                Field::string().describe("Mandatory when send_custom_parameters is set."),
            ),
            (
                "send_custom_parameters",
                Field::bool().describe("Send custom parameters with the request."),
            ),
            (
                "send_in_json_format",
                Field::bool().describe("Post the parameters as JSON."),
            ),
            (
                "send_email",
                Field::bool().describe("Send an email when the action runs."),
            ),
            (
                "send_incident_parameters",
                Field::bool().describe("Send the incident parameters with the request."),
            ),
            (
                "auth_method",
                Field::string()
                    .default("B")
                    .describe("Authentication method. 'B' Basic/NTLM, 'O' OAuth, 'W' Web Token."),
            ),
            (
                "user_agent",
                Field::string().describe("User agent sent with the request."),
            ),
        ])
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<UrlAction> {
        client.it_automations()
    }

    async fn to_api(
        d: &mut ResourceData,
        _client: &Site24x7Client,
    ) -> Result<UrlAction, ProviderError> {
        Ok(UrlAction {
            action_id: d.id().to_string(),
            action_type: URL_ACTION_TYPE,
            action_name: d.get_string("name"),
            action_url: d.get_string("url"),
            action_timeout: d.get_int("timeout"),
            action_method: d.get_string("method"),
            send_incident_parameters: d.get_bool("send_incident_parameters"),
            send_custom_parameters: d.get_bool("send_custom_parameters"),
            custom_parameters: d.get_string("custom_parameters"),
            send_in_json_format: d.get_bool("send_in_json_format"),
            send_email: d.get_bool("send_email"),
            auth_method: d.get_string("auth_method"),
            user_agent: d.get_string("user_agent"),
            ..UrlAction::default()
        })
    }

    fn id_of(api: &UrlAction) -> &str {
        &api.action_id
    }

    fn flatten(api: &UrlAction, d: &mut ResourceData) {
        d.set("name", &api.action_name);
        d.set("url", &api.action_url);
        d.set("type", URL_ACTION_TYPE);
        d.set("method", &api.action_method);
        d.set("timeout", api.action_timeout);
        d.set("custom_parameters", &api.custom_parameters);
        d.set("send_custom_parameters", api.send_custom_parameters);
        d.set("send_in_json_format", api.send_in_json_format);
        d.set("send_email", api.send_email);
        d.set("send_incident_parameters", api.send_incident_parameters);
        d.set("auth_method", &api.auth_method);
        d.set("user_agent", &api.user_agent);
    }
}
