//! Document - Desired-state declaration loaded from JSON
//!
//! ```json
//! {
//!   "provider": { "base_url": "https://leader:9000" },
//!   "resources": [
//!     { "type": "pipeline", "name": "main", "attributes": { "id": "p1" } }
//!   ],
//!   "data_sources": [
//!     { "type": "system", "name": "leader" }
//!   ]
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::resource::{Resource, ResourceId, Value};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate declaration: {0}")]
    Duplicate(ResourceId),

    #[error("Attribute '{attribute}' of {id} must not be null")]
    NullAttribute { id: ResourceId, attribute: String },
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    provider: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    resources: Vec<RawDeclaration>,
    #[serde(default)]
    data_sources: Vec<RawDeclaration>,
}

#[derive(Debug, Deserialize)]
struct RawDeclaration {
    #[serde(rename = "type")]
    resource_type: String,
    name: String,
    #[serde(default)]
    attributes: serde_json::Map<String, serde_json::Value>,
}

/// Parsed desired-state document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Provider configuration attributes
    pub provider: HashMap<String, Value>,
    /// Managed resources followed by data sources (marked read-only)
    pub resources: Vec<Resource>,
}

impl Document {
    pub fn parse(input: &str) -> Result<Self, DocumentError> {
        let raw: RawDocument = serde_json::from_str(input)?;

        let provider = raw
            .provider
            .iter()
            .filter_map(|(k, v)| Value::from_json(v).map(|v| (k.clone(), v)))
            .collect();

        let mut seen = HashSet::new();
        let mut resources = Vec::new();
        let declarations = raw
            .resources
            .into_iter()
            .map(|d| (d, false))
            .chain(raw.data_sources.into_iter().map(|d| (d, true)));

        for (decl, read_only) in declarations {
            let mut resource = Resource::new(decl.resource_type, decl.name).with_read_only(read_only);
            if !seen.insert(resource.id.clone()) {
                return Err(DocumentError::Duplicate(resource.id));
            }
            for (key, json) in &decl.attributes {
                let value = Value::from_json(json).ok_or_else(|| DocumentError::NullAttribute {
                    id: resource.id.clone(),
                    attribute: key.clone(),
                })?;
                resource.attributes.insert(key.clone(), value);
            }
            resources.push(resource);
        }

        Ok(Self {
            provider,
            resources,
        })
    }

    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let input = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&input)
    }

    pub fn find(&self, id: &ResourceId) -> Option<&Resource> {
        self.resources.iter().find(|r| &r.id == id)
    }

    /// Managed resources only
    pub fn managed(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter().filter(|r| !r.is_data_source())
    }
}
