//! Typed CRUD access to one Site24x7 collection

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};

use crate::api::{
    errors::ApiError,
    rest::{RestClient, JSON_CONTENT_TYPE},
};

pub struct Endpoint<T> {
    rest: RestClient,
    resource: &'static str,
    create_headers: &'static [(&'static str, &'static str)],
    _payload: PhantomData<fn() -> T>,
}

impl<T> Endpoint<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(rest: RestClient, resource: &'static str) -> Self {
        Self {
            rest,
            resource,
            create_headers: &[],
            _payload: PhantomData,
        }
    }

    pub fn with_create_headers(mut self, headers: &'static [(&'static str, &'static str)]) -> Self {
        self.create_headers = headers;
        self
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    pub async fn get(&self, id: &str) -> Result<T, ApiError> {
        self.rest
            .get()
            .resource(self.resource)
            .resource_id(id)
            .send()
            .await?
            .parse()
    }

    pub async fn list(&self) -> Result<Vec<T>, ApiError> {
        self.rest
            .get()
            .resource(self.resource)
            .send()
            .await?
            .parse()
    }

    // Account level objects that live at the collection path itself.
    pub async fn fetch(&self) -> Result<T, ApiError> {
        self.rest
            .get()
            .resource(self.resource)
            .send()
            .await?
            .parse()
    }

    pub async fn create(&self, value: &T) -> Result<T, ApiError> {
        let mut request = self
            .rest
            .post()
            .resource(self.resource)
            .add_header("Content-Type", JSON_CONTENT_TYPE);
        for (name, header_value) in self.create_headers {
            request = request.add_header(name, header_value);
        }

        request.body(value).send().await?.parse()
    }

    pub async fn update(&self, id: &str, value: &T) -> Result<T, ApiError> {
        self.rest
            .put()
            .resource(self.resource)
            .resource_id(id)
            .add_header("Content-Type", JSON_CONTENT_TYPE)
            .body(value)
            .send()
            .await?
            .parse()
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.rest
            .delete()
            .resource(self.resource)
            .resource_id(id)
            .send()
            .await
            .map(|_| ())
    }
}
