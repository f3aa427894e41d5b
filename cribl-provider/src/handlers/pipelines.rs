use std::collections::HashMap;

use cribl_client::CriblClient;
use cribl_core::provider::ProviderResult;
use cribl_core::resource::{ResourceId, State, Value};

use super::client_error;
use crate::models::PipelineSummary;

pub async fn read(client: &CriblClient, id: &ResourceId) -> ProviderResult<State> {
    let listing = client
        .list_pipelines()
        .await
        .map_err(|e| client_error(id, "list pipelines", e))?;

    let pipelines: Vec<Value> = listing
        .items
        .iter()
        .map(|p| PipelineSummary::from_wire(p).to_value())
        .collect();

    let mut attributes = HashMap::new();
    attributes.insert("count".to_string(), Value::Int(pipelines.len() as i64));
    attributes.insert("pipelines".to_string(), Value::List(pipelines));
    Ok(State::existing(id.clone(), attributes))
}
