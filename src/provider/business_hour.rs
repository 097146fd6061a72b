use async_trait::async_trait;

use crate::{
    api::{
        admin::{BusinessHour, TimeSlot},
        endpoints::Endpoint,
        Site24x7Client,
    },
    provider::{
        resource::Mapping,
        resource_data::ResourceData,
        schema::{Field, Schema},
        ProviderError,
    },
};

pub struct BusinessHourMapping;

fn time_slot_schema() -> Schema {
    Schema::new([
        (
            "day",
            Field::int()
                .required()
                .describe("Day of the week. 1 Sunday through 7 Saturday."),
        ),
        (
            "start_time",
            Field::string().required().describe("Start time in HH:mm."),
        ),
        (
            "end_time",
            Field::string().required().describe("End time in HH:mm."),
        ),
    ])
}

#[async_trait]
impl Mapping for BusinessHourMapping {
    type Api = BusinessHour;

    const TYPE_NAME: &'static str = "site24x7_businesshour";

    fn schema() -> Schema {
        Schema::new([
            (
                "display_name",
                Field::string()
                    .required()
                    .describe("Display name for the business hour."),
            ),
            (
                "description",
                Field::string().describe("Description for the business hour."),
            ),
            (
                "time_config",
                Field::block(time_slot_schema())
                    .required()
                    .describe("Working time slots, one per day."),
            ),
        ])
    }

    fn endpoint(client: &Site24x7Client) -> Endpoint<BusinessHour> {
        client.business_hours()
    }

    async fn to_api(
        d: &mut ResourceData,
        _client: &Site24x7Client,
    ) -> Result<BusinessHour, ProviderError> {
        let time_config = d
            .get_blocks("time_config")
            .into_iter()
            .map(ResourceData::from_block)
            .map(|slot| TimeSlot {
                day: slot.get_int("day"),
                start_time: slot.get_string("start_time"),
                end_time: slot.get_string("end_time"),
            })
            .collect();

        Ok(BusinessHour {
            id: d.id().to_string(),
            display_name: d.get_string("display_name"),
            description: d.get_string("description"),
            time_config,
        })
    }

    fn id_of(api: &BusinessHour) -> &str {
        &api.id
    }

    fn flatten(api: &BusinessHour, d: &mut ResourceData) {
        d.set("display_name", &api.display_name);
        d.set("description", &api.description);
        d.set("time_config", &api.time_config);
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
    async fn create_sends_time_slots_in_order() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::POST,
            "business_hours",
            json!({"business_hours_id": "bh1"}),
        );
        let mut d = ResourceData::from_config(
            &BusinessHourMapping::schema(),
            &json!({
                "display_name": "Office",
                "time_config": [
                    {"day": 2, "start_time": "09:00", "end_time": "17:00"},
                    {"day": 3, "start_time": "09:00", "end_time": "13:00"}
                ]
            }),
        )
        .expect("valid config");

        Crud::<BusinessHourMapping>::new()
            .create(&client, &mut d)
            .await
            .expect("created");

        assert_eq!(d.id(), "bh1");
        assert_eq!(
            transport.last_body(Method::POST, "business_hours"),
            json!({
                "display_name": "Office",
                "description": "",
                "time_config": [
                    {"day": 2, "start_time": "09:00", "end_time": "17:00"},
                    {"day": 3, "start_time": "09:00", "end_time": "13:00"}
                ]
            })
        );
    }

    #[test]
    fn time_slot_needs_a_day() {
        let err = ResourceData::from_config(
            &BusinessHourMapping::schema(),
            &json!({
                "display_name": "Office",
                "time_config": [{"start_time": "09:00", "end_time": "17:00"}]
            }),
        )
        .expect_err("day missing");

        assert!(err.to_string().contains("day"));
    }

    #[tokio::test]
    async fn read_flattens_time_slots() {
        let (transport, client) = fake_client();
        transport.respond_data(
            Method::GET,
            "business_hours/bh1",
            json!({
                "business_hours_id": "bh1",
                "display_name": "Office",
                "time_config": [{"day": "2", "start_time": "08:00", "end_time": "16:00"}]
            }),
        );
        let mut d = ResourceData::with_id("bh1");

        Crud::<BusinessHourMapping>::new()
            .read(&client, &mut d)
            .await
            .expect("read");

        let slots = d.get_blocks("time_config");
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0]["day"], json!(2));
        assert_eq!(slots[0]["start_time"], json!("08:00"));
    }
}
