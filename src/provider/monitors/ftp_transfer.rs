//! FTP transfer monitors: upload and download a file on a schedule

use async_trait::async_trait;

use crate::{
    api::{
        endpoints::Endpoint, monitors::FtpTransferMonitor, types::MonitorType, Site24x7Client,
    },
    provider::{
        common::{self, MonitorProfiles},
        monitors::profile_fields,
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct FtpTransferMonitorMapping;

#[async_trait]
impl Mapping for FtpTransferMonitorMapping {
    type Api = FtpTransferMonitor;

    const TYPE_NAME: &'static str = "site24x7_ftp_transfer_monitor";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string().required().describe("Name for the monitor"),
            ),
            ("type", Field::string().computed_only()),
            (
                "host_name",
                Field::string()
                    .required()
                    .describe("Registered domain name or IP address."),
            ),
            (
                "protocol",
                Field::string()
                    .default("FTP")
                    .describe("Transfer protocol, FTP or FTPS."),
            ),
            ("port", Field::int().default(21).describe("Port of the FTP server.")),
            (
                "check_frequency",
                Field::string()
                    .default("5")
                    .describe("Interval at which the server has to be monitored. Default value is 5 minutes."),
            ),
            (
                "timeout",
                Field::int()
                    .default(10)
                    .describe("Timeout for connecting to the server. Range 1 - 45."),
            ),
            (
                "check_upload",
                Field::bool().default(true).describe("Check the file upload."),
            ),
            (
                "check_download",
                Field::bool().default(true).describe("Check the file download."),
            ),
            (
                "user_name",
                Field::string().describe("Username to access the file."),
            ),
            (
                "password",
                Field::string()
                    .sensitive()
                    .describe("Password to access the file."),
            ),
            (
                "destination",
                Field::string().describe("Destination path of the transferred file."),
            ),
            (
                "credential_profile_id",
                Field::string().describe("Credential profile holding the FTP login."),
            ),
            (
                "perform_automation",
                Field::bool().describe("Execute the IT automation during scheduled maintenance."),
            ),
        ])
        .extend(profile_fields(true))
        .extend(common::action_fields())
        .extend(common::on_call_schedule_fields())
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<FtpTransferMonitor> {
        client.ftp_transfer_monitors()
    }

    async fn to_api(
        d: &mut ResourceData,
        client: &Site24x7Client,
    ) -> Result<FtpTransferMonitor, ProviderError> {
        let action_ids = common::actions_from_map(&d.get_string_map("actions"))?;
        let profiles = MonitorProfiles::resolve(client, d, MonitorType::Ftp, true).await?;

        Ok(FtpTransferMonitor {
            monitor_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            host_name: d.get_string("host_name"),
            protocol: d.get_string("protocol"),
            monitor_type: MonitorType::Ftp.to_string(),
            port: d.get_int("port"),
            check_frequency: d.get_string("check_frequency"),
            timeout: d.get_int("timeout"),
            check_upload: d.get_bool("check_upload"),
            check_download: d.get_bool("check_download"),
            user_name: d.get_string("user_name"),
            password: d.get_string("password"),
            destination: d.get_string("destination"),
            credential_profile_id: d.get_string("credential_profile_id"),
            perform_automation: d.get_bool("perform_automation"),
            on_call_schedule_id: d.get_string("on_call_schedule_id"),
            location_profile_id: profiles.location_profile_id,
            notification_profile_id: profiles.notification_profile_id,
            threshold_profile_id: profiles.threshold_profile_id,
            monitor_groups: d.get_string_list("monitor_groups"),
            dependency_resource_ids: d.get_string_set("dependency_resource_ids"),
            user_group_ids: profiles.user_group_ids,
            tag_ids: profiles.tag_ids,
            third_party_service_ids: d.get_string_list("third_party_service_ids"),
            action_ids,
        })
    }

    fn id_of(api: &FtpTransferMonitor) -> &str {
        &api.monitor_id
    }

    // The password is write only.
    fn flatten(api: &FtpTransferMonitor, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("type", &api.monitor_type);
        d.set("host_name", &api.host_name);
        d.set("protocol", &api.protocol);
        d.set("port", api.port);
        d.set("check_frequency", &api.check_frequency);
        d.set("timeout", api.timeout);
        d.set("check_upload", api.check_upload);
        d.set("check_download", api.check_download);
        d.set("user_name", &api.user_name);
        d.set("destination", &api.destination);
        d.set("credential_profile_id", &api.credential_profile_id);
        d.set("perform_automation", api.perform_automation);
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
    async fn create_posts_transfer_checks() {
        let (transport, client) = fake_client();
        transport.respond_data(Method::POST, "monitors", json!({"monitor_id": "ftp1"}));
        let mut d = ResourceData::from_config(
            &FtpTransferMonitorMapping::schema(),
            &json!({
                "display_name": "uploads",
                "host_name": "ftp.example.com",
                "user_name": "svc",
                "password": "secret",
                "destination": "/incoming",
                "check_download": false,
                "location_profile_id": "loc",
                "notification_profile_id": "not",
                "threshold_profile_id": "thr"
            }),
        )
        .expect("valid config");

        Crud::<FtpTransferMonitorMapping>::new()
            .create(&client, &mut d)
            .await
            .expect("created");

        let body = transport.last_body(Method::POST, "monitors");
        assert_eq!(body["type"], json!("FTP"));
        assert_eq!(body["protocol"], json!("FTP"));
        assert_eq!(body["port"], json!(21));
        assert_eq!(body["check_upload"], json!(true));
        assert_eq!(body["check_download"], json!(false));
        assert_eq!(body["password"], json!("secret"));
        assert!(body.get("credential_profile_id").is_none());
    }

    #[tokio::test]
    async fn read_keeps_configured_password() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::GET,
            "monitors/ftp1",
            json!({
                "monitor_id": "ftp1",
                "type": "FTP",
                "host_name": "ftp.example.com",
                "user_name": "svc",
                "port": 990,
                "protocol": "FTPS"
            }),
        );
        let mut d = ResourceData::with_id("ftp1");
        d.set("password", "secret");

        Crud::<FtpTransferMonitorMapping>::new()
            .read(&client, &mut d)
            .await
            .expect("read");

        assert_eq!(d.get_string("protocol"), "FTPS");
        assert_eq!(d.get_int("port"), 990);
        assert_eq!(d.get_string("password"), "secret");
    }
}
