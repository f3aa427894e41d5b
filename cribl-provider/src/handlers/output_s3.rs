use cribl_client::CriblClient;
use cribl_core::provider::ProviderResult;
use cribl_core::resource::{Resource, ResourceId, State};

use super::{client_error, deleted, ensure_same_identity, existing, found};
use crate::models::OutputS3Config;

/// Create answers 205 Reset Content rather than 200
pub async fn create(client: &CriblClient, resource: &Resource) -> ProviderResult<State> {
    let config = OutputS3Config::from_attributes(&resource.id, &resource.attributes)?;
    client
        .create_output_s3(&config.to_wire())
        .await
        .map_err(|e| client_error(&resource.id, "create S3 output", e))?;
    log::info!("Created S3 output '{}'", config.id);
    Ok(State::existing(resource.id.clone(), config.to_attributes()).with_identifier(config.id))
}

/// Without prior state (import) `default_id` is taken to be the identifier.
pub async fn read(
    client: &CriblClient,
    id: &ResourceId,
    identifier: &str,
    prior: Option<&State>,
) -> ProviderResult<State> {
    let Some(wire) = found(id, client.get_output_s3(identifier).await)? else {
        return Ok(State::not_found(id.clone()));
    };
    let config = match existing(prior) {
        Some(prior) => {
            let prior = OutputS3Config::from_attributes(id, &prior.attributes)?;
            OutputS3Config::refresh(&prior, wire)
        }
        None => OutputS3Config::from_wire(wire, identifier, identifier),
    };
    Ok(State::existing(id.clone(), config.to_attributes()).with_identifier(identifier))
}

pub async fn update(
    client: &CriblClient,
    id: &ResourceId,
    identifier: &str,
    to: &Resource,
) -> ProviderResult<State> {
    let config = OutputS3Config::from_attributes(id, &to.attributes)?;
    ensure_same_identity(id, identifier, &config.id)?;
    client
        .update_output_s3(identifier, &config.to_wire())
        .await
        .map_err(|e| client_error(id, "update S3 output", e))?;
    log::info!("Updated S3 output '{}'", identifier);
    Ok(State::existing(id.clone(), config.to_attributes()).with_identifier(identifier))
}

pub async fn delete(client: &CriblClient, id: &ResourceId, identifier: &str) -> ProviderResult<()> {
    deleted(id, client.delete_output(identifier).await)
}
