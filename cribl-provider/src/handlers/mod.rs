//! Lifecycle handlers: one module per resource type
//!
//! Every handler performs a single HTTP round trip through the shared
//! client and translates the outcome into a [`State`].

pub mod input_datagen;
pub mod output_s3;
pub mod pipeline;
pub mod pipelines;
pub mod system;

use cribl_client::ClientError;
use cribl_core::provider::{ProviderError, ProviderResult};
use cribl_core::resource::{ResourceId, State};

/// Wrap a client failure with the action that caused it
pub(crate) fn client_error(id: &ResourceId, action: &str, err: ClientError) -> ProviderError {
    ProviderError::new(format!("Failed to {}", action))
        .for_resource(id.clone())
        .with_cause(err)
}

/// A delete that finds nothing to delete has still reached its goal
pub(crate) fn deleted(id: &ResourceId, result: cribl_client::Result<()>) -> ProviderResult<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_not_found() => {
            log::info!("{} was already gone", id);
            Ok(())
        }
        Err(e) => Err(client_error(id, "delete", e)),
    }
}

/// Outcome of a lookup: the record, or a not-found state
pub(crate) fn found<T>(
    id: &ResourceId,
    result: cribl_client::Result<T>,
) -> ProviderResult<Option<T>> {
    match result {
        Ok(record) => Ok(Some(record)),
        Err(e) if e.is_not_found() => {
            log::debug!("{} not found remotely", id);
            Ok(None)
        }
        Err(e) => Err(client_error(id, "read", e)),
    }
}

/// Prior state worth refreshing against
pub(crate) fn existing(prior: Option<&State>) -> Option<&State> {
    prior.filter(|state| state.exists)
}

/// Updates are keyed by the remote id; a changed `id` would address a
/// different object.
pub(crate) fn ensure_same_identity(
    id: &ResourceId,
    identifier: &str,
    desired: &str,
) -> ProviderResult<()> {
    if identifier == desired {
        Ok(())
    } else {
        Err(ProviderError::new(format!(
            "Cannot change id from '{}' to '{}'; destroy and recreate instead",
            identifier, desired
        ))
        .for_resource(id.clone()))
    }
}
