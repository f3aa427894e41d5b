use cribl_client::CriblClient;
use cribl_core::provider::ProviderResult;
use cribl_core::resource::{Resource, ResourceId, State};

use super::{client_error, deleted, ensure_same_identity, existing, found};
use crate::models::InputDatagenConfig;

pub async fn create(client: &CriblClient, resource: &Resource) -> ProviderResult<State> {
    let config = InputDatagenConfig::from_attributes(&resource.id, &resource.attributes)?;
    client
        .create_input_datagen(&config.to_wire())
        .await
        .map_err(|e| client_error(&resource.id, "create datagen input", e))?;
    log::info!("Created datagen input '{}'", config.id);
    Ok(State::existing(resource.id.clone(), config.to_attributes()).with_identifier(config.id))
}

pub async fn read(
    client: &CriblClient,
    id: &ResourceId,
    identifier: &str,
    prior: Option<&State>,
) -> ProviderResult<State> {
    let Some(wire) = found(id, client.get_input_datagen(identifier).await)? else {
        return Ok(State::not_found(id.clone()));
    };
    let config = match existing(prior) {
        Some(prior) => {
            let prior = InputDatagenConfig::from_attributes(id, &prior.attributes)?;
            InputDatagenConfig::refresh(&prior, wire)
        }
        None => InputDatagenConfig::from_wire(wire, identifier),
    };
    Ok(State::existing(id.clone(), config.to_attributes()).with_identifier(identifier))
}

pub async fn update(
    client: &CriblClient,
    id: &ResourceId,
    identifier: &str,
    to: &Resource,
) -> ProviderResult<State> {
    let config = InputDatagenConfig::from_attributes(id, &to.attributes)?;
    ensure_same_identity(id, identifier, &config.id)?;
    client
        .update_input_datagen(identifier, &config.to_wire())
        .await
        .map_err(|e| client_error(id, "update datagen input", e))?;
    log::info!("Updated datagen input '{}'", identifier);
    Ok(State::existing(id.clone(), config.to_attributes()).with_identifier(identifier))
}

pub async fn delete(client: &CriblClient, id: &ResourceId, identifier: &str) -> ProviderResult<()> {
    deleted(id, client.delete_input(identifier).await)
}
