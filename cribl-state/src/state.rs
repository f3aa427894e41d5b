//! State file structures for persisting managed Cribl objects

use std::collections::HashMap;

use cribl_core::resource::{ResourceId, State, Value};
use serde::{Deserialize, Serialize};

/// The main state file structure that persists to the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateFile {
    /// State file format version
    pub version: u32,
    /// Monotonically increasing number for each state modification
    pub serial: u64,
    /// Unique identifier for this state lineage (prevents accidental overwrites)
    pub lineage: String,
    /// Version of the tool that last wrote this state
    pub cribl_version: String,
    /// All managed resources and their current state
    pub resources: Vec<ResourceState>,
}

impl StateFile {
    /// Current state file format version
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            serial: 0,
            lineage: uuid::Uuid::new_v4().to_string(),
            cribl_version: env!("CARGO_PKG_VERSION").to_string(),
            resources: Vec::new(),
        }
    }

    /// Increment serial and stamp the current version for a new write
    pub fn increment_serial(&mut self) {
        self.serial += 1;
        self.cribl_version = env!("CARGO_PKG_VERSION").to_string();
    }

    pub fn find_resource(&self, id: &ResourceId) -> Option<&ResourceState> {
        self.resources.iter().find(|r| r.matches(id))
    }

    /// Add or replace the entry for a resource
    pub fn upsert_resource(&mut self, resource: ResourceState) {
        match self.resources.iter_mut().find(|r| {
            r.resource_type == resource.resource_type && r.name == resource.name
        }) {
            Some(existing) => *existing = resource,
            None => self.resources.push(resource),
        }
    }

    pub fn remove_resource(&mut self, id: &ResourceId) -> Option<ResourceState> {
        let pos = self.resources.iter().position(|r| r.matches(id))?;
        Some(self.resources.remove(pos))
    }

    /// Record the outcome of a provider call: existing states are upserted,
    /// not-found states drop the entry
    pub fn record(&mut self, provider: &str, state: &State) {
        if state.exists {
            self.upsert_resource(ResourceState::from_state(provider, state));
        } else {
            self.remove_resource(&state.id);
        }
    }

    /// Every recorded resource as a core [`State`], keyed by id
    pub fn states(&self) -> HashMap<ResourceId, State> {
        self.resources
            .iter()
            .map(|r| {
                let state = r.to_state();
                (state.id.clone(), state)
            })
            .collect()
    }
}

impl Default for StateFile {
    fn default() -> Self {
        Self::new()
    }
}

/// State of a single managed resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceState {
    /// Resource type (e.g., "pipeline", "output_s3")
    pub resource_type: String,
    /// Resource name from the document
    pub name: String,
    /// Provider name (e.g., "cribl")
    pub provider: String,
    /// Id of the remote object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Last known attributes as JSON values
    pub attributes: HashMap<String, serde_json::Value>,
}

impl ResourceState {
    pub fn new(
        resource_type: impl Into<String>,
        name: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
            provider: provider.into(),
            identifier: None,
            attributes: HashMap::new(),
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn id(&self) -> ResourceId {
        ResourceId::new(&self.resource_type, &self.name)
    }

    fn matches(&self, id: &ResourceId) -> bool {
        self.resource_type == id.resource_type && self.name == id.name
    }

    pub fn from_state(provider: &str, state: &State) -> Self {
        Self {
            resource_type: state.id.resource_type.clone(),
            name: state.id.name.clone(),
            provider: provider.to_string(),
            identifier: state.identifier.clone(),
            attributes: state
                .attributes
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        }
    }

    /// Null attributes are dropped
    pub fn to_state(&self) -> State {
        let attributes: HashMap<String, Value> = self
            .attributes
            .iter()
            .filter_map(|(k, v)| Value::from_json(v).map(|v| (k.clone(), v)))
            .collect();
        let state = State::existing(self.id(), attributes);
        match &self.identifier {
            Some(identifier) => state.with_identifier(identifier.clone()),
            None => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pipeline_state() -> State {
        let mut attrs = HashMap::new();
        attrs.insert("id".to_string(), Value::from("p1"));
        attrs.insert("timeout_ms".to_string(), Value::Int(30000));
        attrs.insert(
            "tags".to_string(),
            Value::List(vec![Value::from("prod")]),
        );
        State::existing(ResourceId::new("pipeline", "main"), attrs).with_identifier("p1")
    }

    #[test]
    fn new_state_file_is_empty() {
        let state = StateFile::new();
        assert_eq!(state.version, StateFile::CURRENT_VERSION);
        assert_eq!(state.serial, 0);
        assert!(!state.lineage.is_empty());
        assert!(state.resources.is_empty());
    }

    #[test]
    fn increment_serial() {
        let mut state = StateFile::new();
        state.increment_serial();
        state.increment_serial();
        assert_eq!(state.serial, 2);
    }

    #[test]
    fn upsert_replaces_existing_entry() {
        let mut state = StateFile::new();
        state.upsert_resource(
            ResourceState::new("pipeline", "main", "cribl").with_attribute("output", json!("a")),
        );
        state.upsert_resource(
            ResourceState::new("pipeline", "main", "cribl").with_attribute("output", json!("b")),
        );

        assert_eq!(state.resources.len(), 1);
        assert_eq!(state.resources[0].attributes.get("output"), Some(&json!("b")));
    }

    #[test]
    fn remove_resource() {
        let mut state = StateFile::new();
        state.upsert_resource(ResourceState::new("pipeline", "main", "cribl"));

        let id = ResourceId::new("pipeline", "main");
        assert!(state.remove_resource(&id).is_some());
        assert!(state.remove_resource(&id).is_none());
        assert!(state.resources.is_empty());
    }

    #[test]
    fn core_state_round_trip() {
        let original = pipeline_state();
        let stored = ResourceState::from_state("cribl", &original);

        assert_eq!(stored.identifier.as_deref(), Some("p1"));
        assert_eq!(stored.attributes.get("tags"), Some(&json!(["prod"])));
        assert_eq!(stored.to_state(), original);
    }

    #[test]
    fn record_removes_resources_that_are_gone() {
        let mut file = StateFile::new();
        file.record("cribl", &pipeline_state());
        assert_eq!(file.resources.len(), 1);

        file.record("cribl", &State::not_found(ResourceId::new("pipeline", "main")));
        assert!(file.resources.is_empty());
    }

    #[test]
    fn states_are_keyed_by_id() {
        let mut file = StateFile::new();
        file.record("cribl", &pipeline_state());

        let states = file.states();
        let state = &states[&ResourceId::new("pipeline", "main")];
        assert!(state.exists);
        assert_eq!(state.identifier.as_deref(), Some("p1"));
    }

    #[test]
    fn serialization_round_trip() {
        let mut state = StateFile::new();
        state.record("cribl", &pipeline_state());

        let json = serde_json::to_string_pretty(&state).unwrap();
        let deserialized: StateFile = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.lineage, state.lineage);
        assert_eq!(deserialized.resources, state.resources);
    }
}
