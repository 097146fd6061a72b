//! Domain expiry monitors
//!
//! These have no threshold profile. The expiry window is the `expire_days`
//! attribute itself.

use async_trait::async_trait;

use crate::{
    api::{
        endpoints::Endpoint, monitors::DomainExpiryMonitor, types::MonitorType, Site24x7Client,
    },
    provider::{
        common, defaults,
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct DomainExpiryMonitorMapping;

#[async_trait]
impl Mapping for DomainExpiryMonitorMapping {
    type Api = DomainExpiryMonitor;

    const TYPE_NAME: &'static str = "site24x7_domain_expiry_monitor";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string().required().describe("Name for the monitor"),
            ),
            ("type", Field::string().computed_only()),
            (
                "host_name",
                Field::string().required().describe("Registered domain name."),
            ),
            (
                "domain_name",
                Field::string()
                    .default("whois.iana.org")
                    .describe("Whois server queried for the domain data."),
            ),
            ("port", Field::int().default(443).describe("Port of the Whois server.")),
            (
                "timeout",
                Field::int()
                    .default(10)
                    .describe("Timeout for connecting to the Whois server. Range 1 - 45."),
            ),
            (
                "expire_days",
                Field::int()
                    .default(30)
                    .describe("Day threshold for domain expiry notification. Range 1 - 999."),
            ),
            (
                "use_ipv6",
                Field::bool().describe("Monitoring is performed over IPv6 from supported locations."),
            ),
            (
                "ignore_registry_date",
                Field::bool()
                    .describe("Prefer the registrar expiry date over the registry expiry date."),
            ),
            (
                "matching_keyword",
                Field::string_map()
                    .describe("Check for the keyword in the Whois response. Map of severity and value."),
            ),
            (
                "unmatching_keyword",
                Field::string_map()
                    .describe("Check for non existence of keyword in the Whois response. Map of severity and value."),
            ),
            (
                "match_regex",
                Field::string_map()
                    .describe("Match the regular expression in the Whois response. Map of severity and value."),
            ),
            (
                "match_case",
                Field::bool().describe("Perform case sensitive keyword search or not."),
            ),
            (
                "monitor_groups",
                Field::string_list()
                    .describe("List of monitor groups to which the monitor has to be associated."),
            ),
        ])
        .extend(common::location_profile_fields())
        .extend(common::notification_profile_fields())
        .extend(common::user_group_fields())
        .extend(common::tag_fields())
        .extend(common::third_party_service_fields())
        .extend(common::action_fields())
        .extend(common::on_call_schedule_fields())
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<DomainExpiryMonitor> {
        client.domain_expiry_monitors()
    }

    async fn to_api(
        d: &mut ResourceData,
        client: &Site24x7Client,
    ) -> Result<DomainExpiryMonitor, ProviderError> {
        let action_ids = common::actions_from_map(&d.get_string_map("actions"))?;

        let location_profile_id = defaults::location_profile_id(client, d).await?;
        let notification_profile_id = defaults::set_notification_profile(client, d).await?;
        let user_group_ids = defaults::set_user_groups(client, d, false).await?;
        let tag_ids = defaults::set_tags(client, d).await?;

        Ok(DomainExpiryMonitor {
            monitor_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            monitor_type: MonitorType::DomainExpiry.to_string(),
            host_name: d.get_string("host_name"),
            domain_name: d.get_string("domain_name"),
            port: d.get_int("port"),
            timeout: d.get_int("timeout"),
            use_ipv6: d.get_bool("use_ipv6"),
            expire_days: d.get_int("expire_days"),
            ignore_registry_date: d.get_bool("ignore_registry_date"),
            matching_keyword: common::keyword_check(d, "matching_keyword"),
            unmatching_keyword: common::keyword_check(d, "unmatching_keyword"),
            match_regex: common::keyword_check(d, "match_regex"),
            match_case: d.get_bool("match_case"),
            location_profile_id,
            notification_profile_id,
            on_call_schedule_id: d.get_string("on_call_schedule_id"),
            monitor_groups: d.get_string_list("monitor_groups"),
            user_group_ids,
            tag_ids,
            third_party_service_ids: d.get_string_list("third_party_service_ids"),
            action_ids,
        })
    }

    fn id_of(api: &DomainExpiryMonitor) -> &str {
        &api.monitor_id
    }

    fn flatten(api: &DomainExpiryMonitor, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("type", &api.monitor_type);
        d.set("host_name", &api.host_name);
        d.set("domain_name", &api.domain_name);
        d.set("port", api.port);
        d.set("timeout", api.timeout);
        d.set("expire_days", api.expire_days);
        d.set("use_ipv6", api.use_ipv6);
        d.set("ignore_registry_date", api.ignore_registry_date);
        for (key, check) in [
            ("matching_keyword", &api.matching_keyword),
            ("unmatching_keyword", &api.unmatching_keyword),
            ("match_regex", &api.match_regex),
        ] {
            if let Some(check) = check {
                d.set(key, common::string_values(check));
            }
        }
        d.set("match_case", api.match_case);
        d.set("location_profile_id", &api.location_profile_id);
        d.set("notification_profile_id", &api.notification_profile_id);
        d.set("on_call_schedule_id", &api.on_call_schedule_id);
        d.set("monitor_groups", &api.monitor_groups);
        d.set("user_group_ids", &api.user_group_ids);
        d.set("tag_ids", &api.tag_ids);
        d.set("third_party_service_ids", &api.third_party_service_ids);
        d.set("actions", common::actions_to_map(&api.action_ids));
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
    async fn create_skips_threshold_lookup() {
        let (transport, client) = fake_client();
        transport.respond_data(Method::POST, "monitors", json!({"monitor_id": "dx1"}));
        let mut d = ResourceData::from_config(
            &DomainExpiryMonitorMapping::schema(),
            &json!({
                "display_name": "example.com expiry",
                "host_name": "example.com",
                "matching_keyword": {"severity": "2", "value": "clientTransferProhibited"},
                "location_profile_id": "loc",
                "notification_profile_id": "not",
                "user_group_ids": ["ug"]
            }),
        )
        .expect("valid config");

        Crud::<DomainExpiryMonitorMapping>::new()
            .create(&client, &mut d)
            .await
            .expect("created");

        assert!(transport.requests_to(Method::GET, "threshold_profiles").is_empty());
        let body = transport.last_body(Method::POST, "monitors");
        assert_eq!(body["type"], json!("DOMAINEXPIRY"));
        assert_eq!(body["domain_name"], json!("whois.iana.org"));
        assert_eq!(body["expire_days"], json!(30));
        assert_eq!(
            body["matching_keyword"],
            json!({"severity": 2, "value": "clientTransferProhibited"})
        );
        assert!(body.get("threshold_profile_id").is_none());
    }

    #[tokio::test]
    async fn read_turns_keyword_severity_into_text() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::GET,
            "monitors/dx1",
            json!({
                "monitor_id": "dx1",
                "type": "DOMAINEXPIRY",
                "host_name": "example.com",
                "domain_name": "whois.verisign-grs.com",
                "expire_days": "45",
                "unmatching_keyword": {"severity": 0, "value": "redemptionPeriod"}
            }),
        );
        let mut d = ResourceData::with_id("dx1");

        Crud::<DomainExpiryMonitorMapping>::new()
            .read(&client, &mut d)
            .await
            .expect("read");

        assert_eq!(d.get_int("expire_days"), 45);
        assert_eq!(d.get_string("domain_name"), "whois.verisign-grs.com");
        assert_eq!(
            d.get_string_map("unmatching_keyword").get("severity").map(String::as_str),
            Some("0")
        );
    }
}
