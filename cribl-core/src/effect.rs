//! Effect - A single side effect to be performed by a Provider
//!
//! Effects are plain values. Nothing happens until an Interpreter runs them.

use crate::resource::{Resource, ResourceId, State};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Read a data source
    Read { resource: Resource },
    /// Create a resource that has no remote counterpart yet
    Create(Resource),
    /// Bring an existing resource in line with the desired attributes
    Update {
        id: ResourceId,
        from: State,
        to: Resource,
    },
    /// Remove a resource that is no longer declared
    Delete { id: ResourceId, identifier: String },
}

impl Effect {
    /// Whether this Effect changes remote state
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Effect::Read { .. })
    }

    pub fn resource_id(&self) -> &ResourceId {
        match self {
            Effect::Read { resource } => &resource.id,
            Effect::Create(resource) => &resource.id,
            Effect::Update { id, .. } => id,
            Effect::Delete { id, .. } => id,
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::Read { resource } => write!(f, "read {}", resource.id),
            Effect::Create(resource) => write!(f, "create {}", resource.id),
            Effect::Update { id, .. } => write!(f, "update {}", id),
            Effect::Delete { id, identifier } => write!(f, "delete {} ({})", id, identifier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_is_not_mutating() {
        let read = Effect::Read {
            resource: Resource::new("system", "leader").with_read_only(true),
        };
        assert!(!read.is_mutating());
        assert!(Effect::Create(Resource::new("pipeline", "main")).is_mutating());
    }

    #[test]
    fn display_names_the_resource() {
        let effect = Effect::Delete {
            id: ResourceId::new("pipeline", "old"),
            identifier: "p-old".to_string(),
        };
        assert_eq!(effect.to_string(), "delete pipeline.old (p-old)");
    }
}
