use cribl_client::CriblClient;
use cribl_core::provider::{ProviderError, ProviderResult};
use cribl_core::resource::{ResourceId, State};

use super::client_error;
use crate::models::BuildConfig;

/// Build info of the first node reported by `/system/info`
pub async fn read(client: &CriblClient, id: &ResourceId) -> ProviderResult<State> {
    let info = client
        .system_info()
        .await
        .map_err(|e| client_error(id, "read system info", e))?
        .into_first()
        .ok_or_else(|| {
            ProviderError::new("System info response contained no items").for_resource(id.clone())
        })?;
    let build = BuildConfig::from_wire(info);
    Ok(State::existing(id.clone(), build.to_attributes()))
}
