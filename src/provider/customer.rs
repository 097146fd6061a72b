use async_trait::async_trait;

use crate::{
    api::{endpoints::Endpoint, errors::ApiError, types::Customer, Site24x7Client},
    provider::{
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct CustomerMapping;

#[async_trait]
impl Mapping for CustomerMapping {
    type Api = Customer;

    const TYPE_NAME: &'static str = "site24x7_customer";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string().required().describe("Display name of the customer."),
            ),
            (
                "email_address",
                Field::string()
                    .required()
                    .describe("Email address of the customer's primary contact."),
            ),
            (
                "customer_company",
                Field::string().required().describe("Company name of the customer."),
            ),
            (
                "portal_name",
                Field::string()
                    .required()
                    .describe("Portal name used to access the customer account."),
            ),
            (
                "country_code",
                Field::string().required().describe("Country code of the customer."),
            ),
            (
                "timezone",
                Field::string().required().describe("Timezone of the customer."),
            ),
            ("language_code", Field::string().describe("Language code.")),
            ("industry", Field::string().describe("Industry of the customer.")),
            ("roletitle", Field::string().describe("Role title of the contact.")),
            (
                "invite",
                Field::bool().describe("Send an invitation to the customer's contact."),
            ),
            (
                "customer_groups",
                Field::string_set().describe("Customer groups the customer belongs to."),
            ),
            ("digest", Field::string().describe("Captcha digest.")),
            (
                "zuids",
                Field::string_set().describe("Zoho user ids of the technicians."),
            ),
            (
                "customer_website",
                Field::string().describe("Website of the customer."),
            ),
            ("captcha", Field::string().describe("Captcha value.")),
        ])
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<Customer> {
        client.customers()
    }

    async fn to_api(d: &mut ResourceData, _client: &Site24x7Client) -> Result<Customer, ProviderError> {
        Ok(Customer {
            user_id: d.id().to_string(),
            country_code: d.get_string("country_code"),
            timezone: d.get_string("timezone"),
            language_code: d.get_string("language_code"),
            industry: d.get_string("industry"),
            roletitle: d.get_string("roletitle"),
            invite: d.get_bool("invite"),
            customer_groups: d.get_string_set("customer_groups"),
            digest: d.get_string("digest"),
            zuids: d.get_string_set("zuids"),
            customer_company: d.get_string("customer_company"),
            display_name: d.get_string("display_name"),
            customer_website: d.get_string("customer_website"),
            email_address: d.get_string("email_address"),
            portal_name: d.get_string("portal_name"),
            captcha: d.get_string("captcha"),
            zaaid: String::new(),
        })
    }

    fn id_of(api: &Customer) -> &str {
        &api.user_id
    }

    fn flatten(api: &Customer, d: &mut ResourceData) {
        d.set("country_code", &api.country_code);
        d.set("timezone", &api.timezone);
        d.set("language_code", &api.language_code);
        d.set("industry", &api.industry);
        d.set("roletitle", &api.roletitle);
        d.set("invite", api.invite);
        d.set("customer_groups", &api.customer_groups);
        d.set("digest", &api.digest);
        d.set("zuids", &api.zuids);
        d.set("customer_company", &api.customer_company);
        d.set("display_name", &api.display_name);
        d.set("customer_website", &api.customer_website);
        d.set("email_address", &api.email_address);
        d.set("portal_name", &api.portal_name);
        d.set("captcha", &api.captcha);
    }

    async fn update_remote(
        client: &Site24x7Client,
        id: &str,
        mut api: Customer,
    ) -> Result<Customer, ProviderError> {
        api.user_id.clear();
        Ok(Self::endpoint(client).update(id, &api).await?)
    }

    // Customers are never removed through the API; dropping the resource
    // only forgets it.
    async fn delete_remote(_client: &Site24x7Client, _id: &str) -> Result<(), ApiError> {
        Ok(())
    }
}
