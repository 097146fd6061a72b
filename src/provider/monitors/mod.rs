//! Monitor resources, one mapping per monitor type

pub mod amazon;
pub mod cron;
pub mod dns_server;
pub mod domain_expiry;
pub mod ftp_transfer;
pub mod gcp;
pub mod heartbeat;
pub mod isp;
pub mod ping;
pub mod port;
pub mod rest_api;
pub mod rest_api_transaction;
pub mod server;
pub mod soap;
pub mod ssl;
pub mod web_page_speed;
pub mod web_transaction_browser;
pub mod website;

use crate::provider::{
    common::{self, Fields},
    schema::{Field, Validation},
};

pub(crate) fn profile_fields(with_location: bool) -> Fields {
    let mut fields = Vec::new();
    if with_location {
        fields.extend(common::location_profile_fields());
    }
    fields.extend(common::notification_profile_fields());
    fields.extend(common::threshold_profile_fields());
    fields.extend(common::monitor_group_fields());
    fields.extend(common::user_group_fields());
    fields.extend(common::tag_fields());
    fields.extend(common::third_party_service_fields());
    fields
}

pub(crate) fn http_fields() -> Fields {
    vec![
        (
            "http_method",
            Field::string()
                .default("G")
                .describe("HTTP Method to be used for accessing the website. 'G' GET, 'P' POST, 'H' HEAD."),
        ),
        (
            "request_content_type",
            Field::string().describe("Provide content type for request params."),
        ),
        (
            "request_body",
            Field::string().describe("Provide the content to be passed in the request body."),
        ),
        (
            "request_headers",
            Field::string_map().describe("A Map of Header name and value."),
        ),
        ("user_agent", Field::string().describe("User Agent to be used while monitoring the website.")),
        (
            "auth_method",
            Field::string()
                .default("B")
                .describe("Authentication method. 'B' Basic/NTLM, 'O' OAuth 2, 'W' Web Token."),
        ),
        ("auth_user", Field::string().describe("Authentication user name.")),
        (
            "auth_pass",
            Field::string().sensitive().describe("Authentication password."),
        ),
        (
            "credential_profile_id",
            Field::string().describe("Credential Profile to associate the website with."),
        ),
        (
            "client_certificate_password",
            Field::string()
                .sensitive()
                .describe("Password of the uploaded client certificate."),
        ),
        (
            "use_name_server",
            Field::bool()
                .default(true)
                .describe("Resolve the IP address using Domain Name Server."),
        ),
        (
            "forced_ips",
            Field::string().describe("Comma separated IP addresses to be monitored."),
        ),
        (
            "up_status_codes",
            Field::string().describe("Comma separated HTTP status codes that indicate a successful response."),
        ),
        (
            "ssl_protocol",
            Field::string()
                .default("Auto")
                .describe("Specify the version of the SSL protocol."),
        ),
        (
            "http_protocol",
            Field::string()
                .default("H1.1")
                .describe("Specify the version of the HTTP protocol."),
        ),
        (
            "use_alpn",
            Field::bool()
                .default(false)
                .describe("Enable ALPN to send supported protocols as part of the TLS handshake."),
        ),
    ]
}

pub(crate) fn http_monitor_fields() -> Fields {
    vec![
        (
            "display_name",
            Field::string().required().describe("Display Name for the monitor."),
        ),
        (
            "website",
            Field::string().required().describe("Website address to monitor."),
        ),
        (
            "check_frequency",
            Field::string()
                .default("1")
                .describe("Interval at which your website has to be monitored. Default value is 1 minute."),
        ),
        (
            "timeout",
            Field::int()
                .default(10)
                .validate(Validation::IntAtMost(45))
                .describe("Timeout for connecting to website. Range 1 - 45."),
        ),
        (
            "use_ipv6",
            Field::bool().describe("Monitoring is performed over IPv6 from supported locations."),
        ),
        ("type", Field::string().computed_only()),
    ]
}

// Members shared by the host based monitors (ping, port, ISP, FTP and so on).
pub(crate) fn network_fields(timeout: i64) -> Fields {
    vec![
        (
            "display_name",
            Field::string().required().describe("Display Name for the monitor."),
        ),
        ("type", Field::string().computed_only()),
        (
            "timeout",
            Field::int()
                .default(timeout)
                .describe("Timeout for connecting to the host. Range 1 - 45."),
        ),
        (
            "use_ipv6",
            Field::bool().describe("Monitoring is performed over IPv6 from supported locations."),
        ),
        (
            "check_frequency",
            Field::string()
                .default("5")
                .describe("Interval at which the host has to be monitored. Default value is 5 minutes."),
        ),
        (
            "perform_automation",
            Field::bool().describe("Execute the IT automation during scheduled maintenance."),
        ),
    ]
}
