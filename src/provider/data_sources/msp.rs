use async_trait::async_trait;

use crate::{
    api::{
        errors::ApiError,
        types::{Customer, MspCustomer},
        Site24x7Client,
    },
    provider::{
        common::Fields, data_sources::Lookup, resource_data::ResourceData, schema::Field,
    },
};

pub struct MspCustomerLookup;

#[async_trait]
impl Lookup for MspCustomerLookup {
    type Item = MspCustomer;

    const TYPE_NAME: &'static str = "site24x7_msp";
    const NOUN: &'static str = "MSP customer";
    const REGEX_KEY: &'static str = "customer_name_regex";
    const IDS_KEY: &'static str = "matching_zaaids";
    const IDS_AND_NAMES_KEY: &'static str = "matching_zaaids_and_names";

    fn fields() -> Fields {
        vec![
            (
                "customer_name",
                Field::string().computed().describe("Name of the MSP customer."),
            ),
            (
                "zaaid",
                Field::string()
                    .computed()
                    .describe("Zaaid to be passed to the provider block to manage the customer."),
            ),
            (
                "user_id",
                Field::string().computed().describe("User ID of the MSP customer."),
            ),
        ]
    }

    async fn list(client: &Site24x7Client) -> Result<Vec<MspCustomer>, ApiError> {
        client.msp_customers().list().await
    }

    fn id(item: &MspCustomer) -> &str {
        &item.zaaid
    }

    fn name(item: &MspCustomer) -> &str {
        &item.name
    }

    fn flatten(item: &MspCustomer, d: &mut ResourceData) {
        d.set("customer_name", &item.name);
        d.set("zaaid", &item.zaaid);
        d.set("user_id", &item.user_id);
    }
}

pub struct CustomerLookup;

#[async_trait]
impl Lookup for CustomerLookup {
    type Item = Customer;

    const TYPE_NAME: &'static str = "site24x7_customer";
    const NOUN: &'static str = "customer";

    fn fields() -> Fields {
        vec![
            (
                "display_name",
                Field::string().computed().describe("Display name of the customer."),
            ),
            (
                "customer_company",
                Field::string().computed().describe("Company name of the customer."),
            ),
            (
                "portal_name",
                Field::string().computed().describe("Portal name of the customer."),
            ),
            (
                "email_address",
                Field::string()
                    .computed()
                    .describe("Email address of the customer's primary contact."),
            ),
        ]
    }

    async fn list(client: &Site24x7Client) -> Result<Vec<Customer>, ApiError> {
        client.customers().list().await
    }

    fn id(item: &Customer) -> &str {
        &item.user_id
    }

    fn name(item: &Customer) -> &str {
        &item.display_name
    }

    fn flatten(item: &Customer, d: &mut ResourceData) {
        d.set("display_name", &item.display_name);
        d.set("customer_company", &item.customer_company);
        d.set("portal_name", &item.portal_name);
        d.set("email_address", &item.email_address);
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::{
        provider::{data_sources::RegexLookup, resource::DataSource},
        testing::fake_client,
    };

    #[tokio::test]
    async fn msp_customers_are_keyed_by_zaaid() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::GET,
            "short/msp/customers",
            json!([
                {"name": "Acme", "zaaid": "z1", "user_id": "u1"},
                {"name": "Acme Labs", "zaaid": "z2", "user_id": "u2"},
                {"name": "Globex", "zaaid": "z3", "user_id": "u3"}
            ]),
        );
        let data_source = RegexLookup::<MspCustomerLookup>::new();
        let mut d = ResourceData::from_config(
            data_source.schema(),
            &json!({"customer_name_regex": "^acme"}),
        )
        .expect("valid config");

        data_source.read(&client, &mut d).await.expect("read");

        assert_eq!(d.id(), "z1");
        assert_eq!(d.get_string("user_id"), "u1");
        assert_eq!(d.get_string_list("matching_zaaids"), vec!["z1", "z2"]);
        assert_eq!(
            d.get_string_list("matching_zaaids_and_names"),
            vec!["z1__Acme", "z2__Acme Labs"]
        );
    }

    #[tokio::test]
    async fn msp_requires_customer_name_regex() {
        let (_transport, client) = fake_client();
        let data_source = RegexLookup::<MspCustomerLookup>::new();
        let mut d = ResourceData::new();

        let err = data_source.read(&client, &mut d).await.expect_err("no regex");

        assert_eq!(
            err.to_string(),
            "Please enter a value for the attribute customer_name_regex!"
        );
    }

    #[tokio::test]
    async fn customer_lookup_reads_msp_customers() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::GET,
            "msp/customers",
            json!([{"user_id": "u7", "display_name": "Initech", "portal_name": "initech"}]),
        );
        let data_source = RegexLookup::<CustomerLookup>::new();
        let mut d = ResourceData::from_config(data_source.schema(), &json!({"name_regex": "init"}))
            .expect("valid config");

        data_source.read(&client, &mut d).await.expect("read");

        assert_eq!(d.id(), "u7");
        assert_eq!(d.get_string("portal_name"), "initech");
    }
}
