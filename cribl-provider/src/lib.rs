//! Cribl Provider
//!
//! Maps declarative resources onto the Cribl Stream management API.
//!
//! ## Module Structure
//!
//! - `config` - Provider settings and endpoint resolution
//! - `provider` - CriblProvider bootstrap and dispatch
//! - `resources` - Resource type definitions
//! - `schemas` - Attribute schemas per resource type
//! - `models` - Config structs and their wire conversions
//! - `handlers` - Create/read/update/delete per resource type

pub mod config;
pub mod handlers;
pub mod models;
pub mod provider;
pub mod resources;
pub mod schemas;
mod utils;

pub use config::{ConfigError, ProviderConfig};
pub use provider::CriblProvider;

use cribl_core::provider::{BoxFuture, Provider, ProviderResult, ResourceType};
use cribl_core::resource::{Resource, ResourceId, State};

use resources::resource_types;

impl Provider for CriblProvider {
    fn name(&self) -> &'static str {
        "cribl"
    }

    fn resource_types(&self) -> Vec<Box<dyn ResourceType>> {
        resource_types()
    }

    fn read(
        &self,
        id: &ResourceId,
        identifier: Option<&str>,
        prior: Option<&State>,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        let id = id.clone();
        let identifier = identifier.map(|s| s.to_string());
        let prior = prior.cloned();
        Box::pin(async move {
            self.read_resource(&id, identifier.as_deref(), prior.as_ref())
                .await
        })
    }

    fn create(&self, resource: &Resource) -> BoxFuture<'_, ProviderResult<State>> {
        let resource = resource.clone();
        Box::pin(async move { self.create_resource(resource).await })
    }

    fn update(
        &self,
        id: &ResourceId,
        identifier: &str,
        _from: &State,
        to: &Resource,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        let id = id.clone();
        let identifier = identifier.to_string();
        let to = to.clone();
        Box::pin(async move { self.update_resource(id, &identifier, to).await })
    }

    fn delete(&self, id: &ResourceId, identifier: &str) -> BoxFuture<'_, ProviderResult<()>> {
        let id = id.clone();
        let identifier = identifier.to_string();
        Box::pin(async move { self.delete_resource(&id, &identifier).await })
    }
}
