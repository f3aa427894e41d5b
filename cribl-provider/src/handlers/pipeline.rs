use cribl_client::CriblClient;
use cribl_core::provider::ProviderResult;
use cribl_core::resource::{Resource, ResourceId, State};

use super::{client_error, deleted, ensure_same_identity, existing, found};
use crate::models::PipelineConfig;

pub async fn create(client: &CriblClient, resource: &Resource) -> ProviderResult<State> {
    let config = PipelineConfig::from_attributes(&resource.id, &resource.attributes)?;
    client
        .create_pipeline(&config.to_wire())
        .await
        .map_err(|e| client_error(&resource.id, "create pipeline", e))?;
    log::info!("Created pipeline '{}'", config.id);
    Ok(State::existing(resource.id.clone(), config.to_attributes()).with_identifier(config.id))
}

pub async fn read(
    client: &CriblClient,
    id: &ResourceId,
    identifier: &str,
    prior: Option<&State>,
) -> ProviderResult<State> {
    let Some(wire) = found(id, client.get_pipeline(identifier).await)? else {
        return Ok(State::not_found(id.clone()));
    };
    let config = match existing(prior) {
        Some(prior) => {
            let prior = PipelineConfig::from_attributes(id, &prior.attributes)?;
            PipelineConfig::refresh(&prior, wire)
        }
        None => PipelineConfig::from_wire(wire),
    };
    Ok(State::existing(id.clone(), config.to_attributes()).with_identifier(identifier))
}

pub async fn update(
    client: &CriblClient,
    id: &ResourceId,
    identifier: &str,
    to: &Resource,
) -> ProviderResult<State> {
    let config = PipelineConfig::from_attributes(id, &to.attributes)?;
    ensure_same_identity(id, identifier, &config.id)?;
    client
        .update_pipeline(identifier, &config.to_wire())
        .await
        .map_err(|e| client_error(id, "update pipeline", e))?;
    log::info!("Updated pipeline '{}'", identifier);
    Ok(State::existing(id.clone(), config.to_attributes()).with_identifier(identifier))
}

pub async fn delete(client: &CriblClient, id: &ResourceId, identifier: &str) -> ProviderResult<()> {
    deleted(id, client.delete_pipeline(identifier).await)
}
