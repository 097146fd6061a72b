use async_trait::async_trait;

use crate::{
    api::{admin::CredentialProfile, endpoints::Endpoint, Site24x7Client},
    provider::{
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct CredentialProfileMapping;

#[async_trait]
impl Mapping for CredentialProfileMapping {
    type Api = CredentialProfile;

    const TYPE_NAME: &'static str = "site24x7_credential_profile";

    fn schema() -> Schema {
        Schema::new([
            (
                "credential_type",
                Field::int()
                    .required()
                    .describe("Credential type. 1 for web credentials, 3 for FTP credentials."),
            ),
            (
                "credential_name",
                Field::string()
                    .required()
                    .describe("Display name for the credential profile."),
            ),
            (
                "username",
                Field::string().required().describe("Username of the credential."),
            ),
            (
                "password",
                Field::string()
                    .required()
                    .sensitive()
                    .describe("Password of the credential."),
            ),
        ])
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<CredentialProfile> {
        client.credential_profiles()
    }

    async fn to_api(
        d: &mut ResourceData,
        _client: &Site24x7Client,
    ) -> Result<CredentialProfile, ProviderError> {
        Ok(CredentialProfile {
            credential_profile_id: d.id().to_string(),
            credential_type: d.get_int("credential_type"),
            credential_name: d.get_string("credential_name"),
            username: d.get_string("username"),
            password: d.get_string("password"),
        })
    }

    fn id_of(api: &CredentialProfile) -> &str {
        &api.credential_profile_id
    }

    // The password is write only and stays as configured.
    fn flatten(api: &CredentialProfile, d: &mut ResourceData) {
        d.set("credential_type", api.credential_type);
        d.set("credential_name", &api.credential_name);
        d.set("username", &api.username);
    }
}
