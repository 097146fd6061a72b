use async_trait::async_trait;

use crate::{
    api::{endpoints::Endpoint, monitors::AmazonMonitor, types::MonitorType, Site24x7Client},
    provider::{
        common, defaults,
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct AmazonMonitorMapping;

#[async_trait]
impl Mapping for AmazonMonitorMapping {
    type Api = AmazonMonitor;

    const TYPE_NAME: &'static str = "site24x7_amazon_monitor";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string().required().describe("Display Name for the monitor."),
            ),
            ("type", Field::string().computed_only()),
            (
                "role_arn",
                Field::string()
                    .required()
                    .describe("ARN of the IAM role granting Site24x7 read access."),
            ),
            (
                "aws_external_id",
                Field::string()
                    .required()
                    .describe("External ID configured in the IAM role trust policy."),
            ),
            (
                "aws_discovery_frequency",
                Field::int()
                    .default(1)
                    .describe("Rediscovery polling interval for the AWS account, in minutes."),
            ),
            (
                "aws_discover_services",
                Field::string_list().describe("AWS services to be discovered."),
            ),
        ])
        .extend(common::notification_profile_fields())
        .extend(common::user_group_fields())
        .extend(common::tag_fields())
        .extend(common::third_party_service_fields())
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<AmazonMonitor> {
        client.amazon_monitors()
    }

    async fn to_api(
        d: &mut ResourceData,
        client: &Site24x7Client,
    ) -> Result<AmazonMonitor, ProviderError> {
        let notification_profile_id = defaults::set_notification_profile(client, d).await?;
        let user_group_ids = defaults::set_user_groups(client, d, true).await?;
        let tag_ids = defaults::set_tags(client, d).await?;

        Ok(AmazonMonitor {
            monitor_id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            monitor_type: MonitorType::Amazon.to_string(),
            aws_external_id: d.get_string("aws_external_id"),
            role_arn: d.get_string("role_arn"),
            discover_frequency: d.get_int("aws_discovery_frequency"),
            discover_services: d.get_string_list("aws_discover_services"),
            notification_profile_id,
            user_group_ids,
            tag_ids,
            third_party_service_ids: d.get_string_list("third_party_service_ids"),
        })
    }

    fn id_of(api: &AmazonMonitor) -> &str {
        &api.monitor_id
    }

    fn flatten(api: &AmazonMonitor, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("type", &api.monitor_type);
        d.set("aws_external_id", &api.aws_external_id);
        d.set("role_arn", &api.role_arn);
        d.set("aws_discovery_frequency", api.discover_frequency);
        d.set("aws_discover_services", &api.discover_services);
        d.set("notification_profile_id", &api.notification_profile_id);
        d.set("user_group_ids", &api.user_group_ids);
        d.set("tag_ids", &api.tag_ids);
        d.set("third_party_service_ids", &api.third_party_service_ids);
    }
}
