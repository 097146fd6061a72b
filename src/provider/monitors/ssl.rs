use async_trait::async_trait;

use crate::{
    api::{endpoints::Endpoint, monitors::SslMonitor, types::MonitorType, Site24x7Client},
    provider::{
        common::{self, MonitorProfiles},
        monitors::profile_fields,
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema, Validation},
        ProviderError,
    },
};

pub struct SslMonitorMapping;

#[async_trait]
impl Mapping for SslMonitorMapping {
    type Api = SslMonitor;

    const TYPE_NAME: &'static str = "site24x7_ssl_monitor";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string().required().describe("Display Name for the monitor."),
            ),
            (
                "domain_name",
                Field::string()
                    .required()
                    .describe("Domain name to be verified for SSL Certificate."),
            ),
            (
                "timeout",
                Field::int()
                    .default(30)
                    .validate(Validation::IntAtMost(45))
                    .describe("Timeout for connecting to the host. Range 1 - 45."),
            ),
            (
                "protocol",
                Field::string()
                    .default("HTTPS")
                    .describe("Supported protocols are HTTPS, SMTPS, POPS, IMAPS, FTPS or CUSTOM"),
            ),
            ("port", Field::int().default(443).describe("Server Port.")),
            (
                "expire_days",
                Field::int()
                    .default(30)
                    .validate(Validation::IntAtMost(999))
                    .describe("Day threshold for certificate expiry notification. Range 1 - 999."),
            ),
            (
                "http_protocol_version",
                Field::string()
                    .default("H1.1")
                    .describe("Version of the HTTP protocol."),
            ),
            (
                "ignore_domain_mismatch",
                Field::bool()
                    .default(false)
                    .describe("Boolean to ignore domain name mismatch errors."),
            ),
            (
                "ignore_trust",
                Field::bool()
                    .default(false)
                    .describe("To ignore the validation of SSL/TLS certificate chain."),
            ),
            ("type", Field::string().computed_only()),
        ])
        .extend(profile_fields(true))
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<SslMonitor> {
        client.ssl_monitors()
    }

    async fn to_api(
        d: &mut ResourceData,
        client: &Site24x7Client,
    ) -> Result<SslMonitor, ProviderError> {
        let profiles = MonitorProfiles::resolve(client, d, MonitorType::SslCert, true).await?;

        Ok(SslMonitor {
            monitor_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            domain_name: d.get_string("domain_name"),
            monitor_type: MonitorType::SslCert.to_string(),
            timeout: d.get_int("timeout"),
            protocol: d.get_string("protocol"),
            port: d.get_int("port"),
            expire_days: d.get_int("expire_days"),
            http_protocol_version: d.get_string("http_protocol_version"),
            ignore_domain_mismatch: d.get_bool("ignore_domain_mismatch"),
            ignore_trust: d.get_bool("ignore_trust"),
            location_profile_id: profiles.location_profile_id,
            notification_profile_id: profiles.notification_profile_id,
            threshold_profile_id: profiles.threshold_profile_id,
            monitor_groups: common::sorted(d.get_string_list("monitor_groups")),
            dependency_resource_ids: d.get_string_set("dependency_resource_ids"),
            user_group_ids: profiles.user_group_ids,
            tag_ids: profiles.tag_ids,
            third_party_service_ids: d.get_string_list("third_party_service_ids"),
        })
    }

    fn id_of(api: &SslMonitor) -> &str {
        &api.monitor_id
    }

    fn flatten(api: &SslMonitor, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("type", &api.monitor_type);
        d.set("domain_name", &api.domain_name);
        d.set("timeout", api.timeout);
        d.set("protocol", &api.protocol);
        d.set("port", api.port);
        d.set("expire_days", api.expire_days);
        d.set("http_protocol_version", &api.http_protocol_version);
        d.set("ignore_domain_mismatch", api.ignore_domain_mismatch);
        d.set("ignore_trust", api.ignore_trust);
        d.set("location_profile_id", &api.location_profile_id);
        d.set("notification_profile_id", &api.notification_profile_id);
        d.set("threshold_profile_id", &api.threshold_profile_id);
        d.set("monitor_groups", &api.monitor_groups);
        d.set("dependency_resource_ids", &api.dependency_resource_ids);
        d.set("user_group_ids", &api.user_group_ids);
        d.set("tag_ids", &api.tag_ids);
        d.set("third_party_service_ids", &api.third_party_service_ids);
    }
}
