//! Resource and data source contracts
//!
//! Every managed object maps resource data to a vendor payload and back. The
//! CRUD entry points around that mapping are identical for all of them and
//! live in [`Crud`].

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::{
    api::{endpoints::Endpoint, errors::ApiError, Site24x7Client},
    provider::{resource_data::ResourceData, schema::Schema, ProviderError},
};

#[async_trait]
pub trait Resource: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> &Schema;

    async fn create(&self, client: &Site24x7Client, d: &mut ResourceData)
        -> Result<(), ProviderError>;

    async fn read(&self, client: &Site24x7Client, d: &mut ResourceData)
        -> Result<(), ProviderError>;

    async fn update(&self, client: &Site24x7Client, d: &mut ResourceData)
        -> Result<(), ProviderError>;

    async fn delete(&self, client: &Site24x7Client, d: &ResourceData) -> Result<(), ProviderError>;

    async fn exists(&self, client: &Site24x7Client, d: &ResourceData)
        -> Result<bool, ProviderError>;

    async fn import(&self, client: &Site24x7Client, id: &str) -> Result<ResourceData, ProviderError> {
        let mut d = ResourceData::with_id(id);
        self.read(client, &mut d).await?;
        Ok(d)
    }
}

#[async_trait]
pub trait DataSource: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> &Schema;

    async fn read(&self, client: &Site24x7Client, d: &mut ResourceData)
        -> Result<(), ProviderError>;
}

#[async_trait]
pub trait Mapping: Send + Sync + 'static {
    type Api: Serialize + DeserializeOwned + Send + Sync;

    const TYPE_NAME: &'static str;

    fn schema() -> Schema;

    fn endpoint(client: &Site24x7Client) -> Endpoint<Self::Api>;

    async fn to_api(d: &mut ResourceData, client: &Site24x7Client)
        -> Result<Self::Api, ProviderError>;

    fn id_of(api: &Self::Api) -> &str;

    fn flatten(api: &Self::Api, d: &mut ResourceData);

    async fn create_remote(
        client: &Site24x7Client,
        api: Self::Api,
    ) -> Result<Self::Api, ProviderError> {
        Ok(Self::endpoint(client).create(&api).await?)
    }

    async fn update_remote(
        client: &Site24x7Client,
        id: &str,
        api: Self::Api,
    ) -> Result<Self::Api, ProviderError> {
        Ok(Self::endpoint(client).update(id, &api).await?)
    }

    async fn delete_remote(client: &Site24x7Client, id: &str) -> Result<(), ApiError> {
        Self::endpoint(client).delete(id).await
    }
}

pub struct Crud<M> {
    schema: Schema,
    _mapping: PhantomData<fn() -> M>,
}

impl<M: Mapping> Crud<M> {
    pub fn new() -> Self {
        Self {
            schema: M::schema(),
            _mapping: PhantomData,
        }
    }
}

impl<M: Mapping> Default for Crud<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<M: Mapping> Resource for Crud<M> {
    fn type_name(&self) -> &'static str {
        M::TYPE_NAME
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    async fn create(
        &self,
        client: &Site24x7Client,
        d: &mut ResourceData,
    ) -> Result<(), ProviderError> {
        let api = M::to_api(d, client).await?;
        let created = M::create_remote(client, api).await?;

        debug!(resource = M::TYPE_NAME, id = M::id_of(&created), "resource created");
        d.set_id(M::id_of(&created));
        Ok(())
    }

    async fn read(&self, client: &Site24x7Client, d: &mut ResourceData) -> Result<(), ProviderError> {
        let api = M::endpoint(client).get(d.id()).await?;
        M::flatten(&api, d);
        Ok(())
    }

    async fn update(
        &self,
        client: &Site24x7Client,
        d: &mut ResourceData,
    ) -> Result<(), ProviderError> {
        let id = d.id().to_string();
        let api = M::to_api(d, client).await?;
        let updated = M::update_remote(client, &id, api).await?;

        let updated_id = M::id_of(&updated);
        if !updated_id.is_empty() {
            d.set_id(updated_id);
        }
        Ok(())
    }

    async fn delete(&self, client: &Site24x7Client, d: &ResourceData) -> Result<(), ProviderError> {
        match M::delete_remote(client, d.id()).await {
            Err(err) if err.is_not_found() => Ok(()),
            result => Ok(result?),
        }
    }

    async fn exists(&self, client: &Site24x7Client, d: &ResourceData) -> Result<bool, ProviderError> {
        match M::endpoint(client).get(d.id()).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
