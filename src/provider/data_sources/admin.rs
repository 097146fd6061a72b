//! Lookups of account administration objects
//!
//! IT automations follow the common first-match lookup. Users and credential
//! profiles keep the last match instead, and the two account singletons
//! expose their value as the data source id.

use async_trait::async_trait;
use regex::Regex;

use crate::{
    api::{
        admin::UrlAction,
        errors::ApiError,
        Site24x7Client,
    },
    provider::{
        common::Fields,
        data_sources::{collect_matches, name_pattern, Lookup},
        resource::DataSource,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct ItAutomationLookup;

#[async_trait]
impl Lookup for ItAutomationLookup {
    type Item = UrlAction;

    const TYPE_NAME: &'static str = "site24x7_it_automation";
    const NOUN: &'static str = "IT action";

    fn fields() -> Fields {
        vec![
            ("action_name", Field::string().computed().describe("Display name for the action.")),
            ("action_type", Field::int().computed().describe("Type of the action.")),
            ("url", Field::string().computed().describe("URL invoked for action execution.")),
            ("method", Field::string().computed().describe("HTTP Method to access the action url.")),
            ("timeout", Field::int().computed()),
            ("send_custom_parameters", Field::bool().computed()),
            ("custom_parameters", Field::string().computed()),
            ("send_in_json_format", Field::bool().computed()),
            ("send_email", Field::bool().computed()),
            ("send_incident_parameters", Field::bool().computed()),
            ("auth_method", Field::string().computed()),
            ("user_agent", Field::string().computed()),
        ]
    }

    async fn list(client: &Site24x7Client) -> Result<Vec<UrlAction>, ApiError> {
        client.it_automations().list().await
    }

    fn id(item: &UrlAction) -> &str {
        &item.action_id
    }

    fn name(item: &UrlAction) -> &str {
        &item.action_name
    }

    fn flatten(item: &UrlAction, d: &mut ResourceData) {
        d.set("action_name", &item.action_name);
        d.set("action_type", item.action_type);
        d.set("url", &item.action_url);
        d.set("method", &item.action_method);
        d.set("timeout", item.action_timeout);
        d.set("send_custom_parameters", item.send_custom_parameters);
        d.set("custom_parameters", &item.custom_parameters);
        d.set("send_in_json_format", item.send_in_json_format);
        d.set("send_email", item.send_email);
        d.set("send_incident_parameters", item.send_incident_parameters);
        d.set("auth_method", &item.auth_method);
        d.set("user_agent", &item.user_agent);
    }
}

pub struct UserDataSource {
    schema: Schema,
}

impl UserDataSource {
    pub fn new() -> Self {
        Self {
            schema: Schema::new([
                (
                    "name_regex",
                    Field::string()
                        .required()
                        .describe("Regular expression denoting the name of the user."),
                ),
                ("matching_ids", Field::string_list().computed_only()),
                ("matching_ids_and_names", Field::string_list().computed_only()),
                ("display_name", Field::string().computed().describe("Display name for the user.")),
                ("email", Field::string().computed().describe("Email address of the user.")),
                ("role", Field::string().computed().describe("Role assigned to the user.")),
                (
                    "status",
                    Field::string()
                        .computed()
                        .describe("Status of the user (active or inactive)."),
                ),
            ]),
        }
    }
}

impl Default for UserDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for UserDataSource {
    fn type_name(&self) -> &'static str {
        "site24x7_user"
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    async fn read(&self, client: &Site24x7Client, d: &mut ResourceData) -> Result<(), ProviderError> {
        let pattern = name_pattern(d, "name_regex")?;
        let users = client.users().list().await?;

        // Users without a display name still take part in the match.
        let matches = collect_matches(
            &users,
            |user| user.user_id.as_str(),
            |user| user.display_name.clone(),
            |user| pattern.is_match(&user.display_name),
        );
        let Some(user) = matches.last else {
            return Err(ProviderError::not_found(format!(
                "Unable to find user matching the name: \"{}\"",
                d.get_string("name_regex")
            )));
        };

        d.set_id(&user.user_id);
        d.set("matching_ids", &matches.ids);
        d.set("matching_ids_and_names", &matches.ids_and_names);
        d.set("display_name", &user.display_name);
        d.set("email", &user.email_address);
        d.set("role", user.user_role.to_string());
        Ok(())
    }
}

pub struct CredentialProfileDataSource {
    schema: Schema,
}

impl CredentialProfileDataSource {
    pub fn new() -> Self {
        Self {
            schema: Schema::new([
                (
                    "name_regex",
                    Field::string()
                        .required()
                        .describe("Case sensitive regular expression denoting the name of the credential profile."),
                ),
                ("credential_type", Field::int().computed()),
                ("credential_name", Field::string().computed()),
                ("username", Field::string().computed()),
                ("password", Field::string().computed().sensitive()),
            ]),
        }
    }
}

impl Default for CredentialProfileDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for CredentialProfileDataSource {
    fn type_name(&self) -> &'static str {
        "site24x7_credential_profile"
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    async fn read(&self, client: &Site24x7Client, d: &mut ResourceData) -> Result<(), ProviderError> {
        let raw = d.get_string("name_regex");
        if raw.is_empty() {
            return Err(ProviderError::Validation(
                "Please enter a value for the attribute name_regex!".to_string(),
            ));
        }
        let pattern = Regex::new(&raw)?;
        let profiles = client.web_credentials().list().await?;

        let matches = collect_matches(
            &profiles,
            |profile| profile.credential_profile_id.as_str(),
            |profile| profile.credential_name.clone(),
            |profile| {
                !profile.credential_name.is_empty() && pattern.is_match(&profile.credential_name)
            },
        );
        let Some(profile) = matches.last else {
            return Err(ProviderError::not_found(format!(
                "Unable to find credential profile matching the name : \"{raw}"
            )));
        };

        d.set_id(&profile.credential_profile_id);
        d.set("credential_name", &profile.credential_name);
        d.set("credential_type", profile.credential_type);
        d.set("username", &profile.username);
        d.set("password", &profile.password);
        Ok(())
    }
}

pub struct AwsExternalIdDataSource {
    schema: Schema,
}

impl AwsExternalIdDataSource {
    pub fn new() -> Self {
        Self {
            schema: Schema::new(Vec::new()),
        }
    }
}

impl Default for AwsExternalIdDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for AwsExternalIdDataSource {
    fn type_name(&self) -> &'static str {
        "site24x7_aws_external_id"
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    async fn read(&self, client: &Site24x7Client, d: &mut ResourceData) -> Result<(), ProviderError> {
        let external_id = client.aws_external_id().fetch().await?;
        d.set_id(external_id.external_id);
        Ok(())
    }
}

pub struct DeviceKeyDataSource {
    schema: Schema,
}

impl DeviceKeyDataSource {
    pub fn new() -> Self {
        Self {
            schema: Schema::new(Vec::new()),
        }
    }
}

impl Default for DeviceKeyDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for DeviceKeyDataSource {
    fn type_name(&self) -> &'static str {
        "site24x7_device_key"
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    async fn read(&self, client: &Site24x7Client, d: &mut ResourceData) -> Result<(), ProviderError> {
        let key = client.device_key().fetch().await?;
        d.set_id(key.device_key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::{json, Value};

    use super::*;
    use crate::{provider::data_sources::RegexLookup, testing::fake_client};

    #[tokio::test]
    async fn it_automation_takes_first_named_match() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::GET,
            "it_automation",
            json!([
                {"action_id": "1", "action_name": ""},
                {"action_id": "2", "action_name": "Restart API", "action_type": 2,
                 "action_url": "https://hooks.example.com/restart", "action_method": "P",
                 "action_timeout": "30", "send_mail": true},
                {"action_id": "3", "action_name": "restart workers"}
            ]),
        );
        let data_source = RegexLookup::<ItAutomationLookup>::new();
        let mut d = ResourceData::from_config(data_source.schema(), &json!({"name_regex": "^restart"}))
            .expect("valid config");

        data_source.read(&client, &mut d).await.expect("found");

        assert_eq!(d.id(), "2");
        assert_eq!(d.get_string_list("matching_ids"), vec!["2", "3"]);
        assert_eq!(d.get_string("url"), "https://hooks.example.com/restart");
        assert_eq!(d.get_int("timeout"), 30);
        assert!(d.get_bool("send_email"));
    }

    async fn read_user(users: Value, regex: &str) -> Result<ResourceData, ProviderError> {
        let (transport, client) = fake_client();
        transport.respond_data(Method::GET, "users", users);
        let data_source = UserDataSource::new();
        let mut d = ResourceData::from_config(data_source.schema(), &json!({"name_regex": regex}))?;
        data_source.read(&client, &mut d).await?;
        Ok(d)
    }

    #[tokio::test]
    async fn user_keeps_last_match_and_role_as_text() {
        let d = read_user(
            json!([
                {"user_id": "u1", "display_name": "Ops Admin", "email_address": "a@example.com", "user_role": 1},
                {"user_id": "u2", "display_name": "ops oncall", "email_address": "b@example.com", "user_role": "2"}
            ]),
            "ops",
        )
        .await
        .expect("found");

        assert_eq!(d.id(), "u2");
        assert_eq!(d.get_string("email"), "b@example.com");
        assert_eq!(d.get_string("role"), "2");
        assert_eq!(d.get_string_list("matching_ids_and_names"), vec!["u1__Ops Admin", "u2__ops oncall"]);
        assert!(d.get("status").is_none());
    }

    #[tokio::test]
    async fn unnamed_user_matches_an_open_pattern() {
        let d = read_user(json!([{"user_id": "u9", "display_name": ""}]), ".*")
            .await
            .expect("found");

        assert_eq!(d.id(), "u9");
    }

    #[tokio::test]
    async fn missing_user_reports_the_closed_quote() {
        let err = read_user(json!([{"user_id": "u1", "display_name": "Ops"}]), "finance")
            .await
            .expect_err("no user");

        assert_eq!(err.to_string(), "Unable to find user matching the name: \"finance\"");
    }

    #[tokio::test]
    async fn credential_profile_match_is_case_sensitive_and_last_wins() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::GET,
            "credential_profiles",
            json!([
                {"credential_profile_id": "c1", "credential_name": "Prod API", "credential_type": 1, "username": "svc"},
                {"credential_profile_id": "c2", "credential_name": "prod api"},
                {"credential_profile_id": "c3", "credential_name": "Prod API v2", "username": "svc2", "password": "pw"}
            ]),
        );
        let data_source = CredentialProfileDataSource::new();
        let mut d = ResourceData::from_config(data_source.schema(), &json!({"name_regex": "^Prod"}))
            .expect("valid config");

        data_source.read(&client, &mut d).await.expect("found");

        assert_eq!(d.id(), "c3");
        assert_eq!(d.get_string("username"), "svc2");
        assert_eq!(d.get_string("password"), "pw");

        let mut d = ResourceData::from_config(data_source.schema(), &json!({"name_regex": "^PROD"}))
            .expect("valid config");
        let err = data_source.read(&client, &mut d).await.expect_err("no match");
        assert_eq!(
            err.to_string(),
            "Unable to find credential profile matching the name : \"^PROD"
        );
    }

    #[tokio::test]
    async fn account_singletons_become_the_id() {
        let (transport, client) = fake_client();
        transport.respond_data(Method::GET, "aws/external_id", json!({"external_id": "ext-123"}));
        transport.respond_data(Method::GET, "device_key", json!({"device_key": "us_abc"}));

        let mut external = ResourceData::new();
        AwsExternalIdDataSource::new()
            .read(&client, &mut external)
            .await
            .expect("external id");
        let mut key = ResourceData::new();
        DeviceKeyDataSource::new()
            .read(&client, &mut key)
            .await
            .expect("device key");

        assert_eq!(external.id(), "ext-123");
        assert_eq!(key.id(), "us_abc");
    }
}
