use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::{
    api::{
        endpoints::Endpoint,
        monitors::{DnsServerMonitor, SearchConfig},
        types::MonitorType,
        Site24x7Client,
    },
    provider::{
        common::{self, MonitorProfiles},
        monitors::profile_fields,
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema, Validation},
        ProviderError,
    },
};

const RECORD_TYPES: &[&str] = &[
    "A", "AAAA", "NS", "CNAME", "PTR", "MX", "SRV", "TXT", "SOA", "DNSKEY", "CAA", "DS",
];

pub struct DnsServerMonitorMapping;

fn search_config_schema() -> Schema {
    let int = |description| Field::int().describe(description);
    let string = |description| Field::string().describe(description);

    Schema::new([
        (
            "lookup_type",
            Field::string()
                .required()
                .validate(Validation::StringInSlice(RECORD_TYPES))
                .describe("Record type the expected values belong to."),
        ),
        ("addr", string("IPv4 or IPv6 address.")),
        ("ttlo", int("TTL comparison operator.")),
        ("ttl", int("Time to live.")),
        ("target", string("Target host name.")),
        ("priority", int("Record priority.")),
        ("port", int("Service port.")),
        ("wt", int("Record weight.")),
        ("rcvd", int("Received value check.")),
        ("pns", string("Primary name server.")),
        ("admin", string("Administrator email.")),
        ("serial", int("Zone serial number.")),
        ("rff", int("Refresh interval.")),
        ("rtf", int("Retry interval.")),
        ("expt", int("Expiry time.")),
        ("mttl", int("Minimum TTL.")),
        ("flg", int("Flag.")),
        ("prtcl", int("Protocol.")),
        ("kalg", int("Key algorithm.")),
        ("kid", int("Key id.")),
        ("key", string("Public key.")),
        ("tag", string("CAA tag.")),
        ("cert_auth", string("Certificate authority.")),
        ("halg", int("Hash algorithm.")),
        ("hash", string("Digest.")),
    ])
}

fn search_config(block: &Map<String, Value>) -> SearchConfig {
    let int = |key: &str| block.get(key).and_then(Value::as_i64).unwrap_or_default();
    let string = |key: &str| {
        block
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    let mut record = SearchConfig {
        ttlo: int("ttlo"),
        ttl: int("ttl"),
        ..SearchConfig::default()
    };
    match string("lookup_type").as_str() {
        "A" | "AAAA" => record.addr = string("addr"),
        "NS" | "CNAME" | "PTR" => record.target = string("target"),
        "MX" => {
            record.target = string("target");
            record.priority = int("priority");
        }
        "SRV" => {
            record.port = int("port");
            record.target = string("target");
            record.wt = int("wt");
            record.priority = int("priority");
        }
        "TXT" => record.rcvd = int("rcvd"),
        "SOA" => {
            record.pns = string("pns");
            record.admin = string("admin");
            record.serial = int("serial");
            record.rff = int("rff");
            record.rtf = int("rtf");
            record.expt = int("expt");
            record.mttl = int("mttl");
        }
        "DNSKEY" => {
            record.flg = int("flg");
            record.prtcl = int("prtcl");
            record.kalg = int("kalg");
            record.kid = int("kid");
            record.key = string("key");
        }
        "CAA" => {
            record.tag = string("tag");
            record.cert_auth = string("cert_auth");
            record.flg = int("flg");
        }
        "DS" => {
            record.kid = int("kid");
            record.kalg = int("kalg");
            record.halg = int("halg");
            record.hash = string("hash");
        }
        _ => {}
    }
    record
}

#[async_trait]
impl Mapping for DnsServerMonitorMapping {
    type Api = DnsServerMonitor;

    const TYPE_NAME: &'static str = "site24x7_dns_server_monitor";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string().required().describe("Display Name for the monitor."),
            ),
            ("type", Field::string().computed_only()),
            (
                "dns_host",
                Field::string()
                    .required()
                    .describe("Name server to be monitored."),
            ),
            (
                "dns_port",
                Field::string().describe("Port of the name server."),
            ),
            (
                "use_ipv6",
                Field::bool().describe("Query the name server over IPv6."),
            ),
            (
                "domain_name",
                Field::string()
                    .required()
                    .describe("Domain name to be resolved."),
            ),
            (
                "check_frequency",
                Field::string()
                    .required()
                    .describe("Interval at which the name server has to be monitored."),
            ),
            (
                "timeout",
                Field::int()
                    .required()
                    .validate(Validation::IntAtMost(45))
                    .describe("Timeout for connecting to the name server. Range 1 - 45."),
            ),
            (
                "lookup_type",
                Field::int()
                    .required()
                    .describe("Lookup type constant of the DNS query."),
            ),
            (
                "dnssec",
                Field::bool()
                    .default(false)
                    .describe("Validate the DNSSEC signatures."),
            ),
            (
                "deep_discovery",
                Field::bool().describe("Discover all related records."),
            ),
            (
                "search_config",
                Field::block(search_config_schema()).describe("Expected records of the lookup."),
            ),
        ])
        .extend(profile_fields(true))
        .extend(common::action_fields())
        .extend(common::on_call_schedule_fields())
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<DnsServerMonitor> {
        client.dns_server_monitors()
    }

    async fn to_api(
        d: &mut ResourceData,
        client: &Site24x7Client,
    ) -> Result<DnsServerMonitor, ProviderError> {
        let action_ids = common::actions_from_map(&d.get_string_map("actions"))?;
        let search_config = d.get_blocks("search_config").iter().map(search_config).collect();

        let profiles = MonitorProfiles::resolve(client, d, MonitorType::Dns, true).await?;

        Ok(DnsServerMonitor {
            monitor_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            domain_name: d.get_string("domain_name"),
            monitor_type: MonitorType::Dns.to_string(),
            dns_host: d.get_string("dns_host"),
            dns_port: d.get_string("dns_port"),
            use_ipv6: d.get_bool("use_ipv6"),
            check_frequency: d.get_string("check_frequency"),
            timeout: d.get_int("timeout"),
            lookup_type: d.get_int("lookup_type"),
            dnssec: d.get_bool("dnssec"),
            deep_discovery: d.get_bool("deep_discovery"),
            search_config,
            on_call_schedule_id: d.get_string("on_call_schedule_id"),
            location_profile_id: profiles.location_profile_id,
            notification_profile_id: profiles.notification_profile_id,
            threshold_profile_id: profiles.threshold_profile_id,
            monitor_groups: common::sorted(d.get_string_list("monitor_groups")),
            dependency_resource_ids: d.get_string_set("dependency_resource_ids"),
            user_group_ids: profiles.user_group_ids,
            tag_ids: profiles.tag_ids,
            third_party_service_ids: d.get_string_list("third_party_service_ids"),
            action_ids,
        })
    }

    fn id_of(api: &DnsServerMonitor) -> &str {
        &api.monitor_id
    }

    // search_config stays as configured; the API does not echo the record type.
    fn flatten(api: &DnsServerMonitor, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("type", &api.monitor_type);
        d.set("dns_host", &api.dns_host);
        d.set("dns_port", &api.dns_port);
        d.set("use_ipv6", api.use_ipv6);
        d.set("domain_name", &api.domain_name);
        d.set("check_frequency", &api.check_frequency);
        d.set("timeout", api.timeout);
        d.set("lookup_type", api.lookup_type);
        d.set("dnssec", api.dnssec);
        d.set("deep_discovery", api.deep_discovery);
        d.set("on_call_schedule_id", &api.on_call_schedule_id);
        d.set("location_profile_id", &api.location_profile_id);
        d.set("notification_profile_id", &api.notification_profile_id);
        d.set("threshold_profile_id", &api.threshold_profile_id);
        d.set("monitor_groups", &api.monitor_groups);
        d.set("dependency_resource_ids", &api.dependency_resource_ids);
        d.set("user_group_ids", &api.user_group_ids);
        d.set("tag_ids", &api.tag_ids);
        d.set("third_party_service_ids", &api.third_party_service_ids);
        d.set("actions", common::actions_to_map(&api.action_ids));
    }
}
