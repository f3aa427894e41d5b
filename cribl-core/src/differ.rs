//! Differ - Compare desired state with current state to generate a Plan
//!
//! Compares the "desired state" declared in the document with the "current state"
//! fetched from the Provider, and generates a list of required Effects (Plan).

use std::collections::HashMap;

use crate::effect::Effect;
use crate::plan::Plan;
use crate::resource::{Resource, ResourceId, State, Value};
use crate::schema::ResourceSchema;

/// Result of a diff operation
#[derive(Debug, Clone, PartialEq)]
pub enum Diff {
    /// Resource does not exist -> needs creation
    Create(Resource),
    /// Resource exists with differences -> needs update
    Update {
        id: ResourceId,
        from: State,
        to: Resource,
        changed_attributes: Vec<String>,
    },
    /// Resource exists with no differences -> no action needed
    NoChange(ResourceId),
}

impl Diff {
    /// Returns whether this Diff involves a change
    pub fn is_change(&self) -> bool {
        !matches!(self, Diff::NoChange(_))
    }
}

/// Compare desired state with current state to compute a Diff
///
/// Without a schema every attribute held in `current` but no longer
/// declared counts as a change.
pub fn diff(desired: &Resource, current: &State, schema: Option<&ResourceSchema>) -> Diff {
    if !current.exists {
        return Diff::Create(desired.clone());
    }

    let changed = find_changed_attributes(&desired.attributes, &current.attributes, schema);

    if changed.is_empty() {
        Diff::NoChange(desired.id.clone())
    } else {
        Diff::Update {
            id: desired.id.clone(),
            from: current.clone(),
            to: desired.clone(),
            changed_attributes: changed,
        }
    }
}

/// Find changed attributes between desired and current state
///
/// An attribute dropped from the declaration is a change unless the schema
/// marks it write-only or does not know it.
pub fn find_changed_attributes(
    desired: &HashMap<String, Value>,
    current: &HashMap<String, Value>,
    schema: Option<&ResourceSchema>,
) -> Vec<String> {
    let modified = desired
        .iter()
        .filter(|(key, desired_value)| current.get(*key) != Some(*desired_value))
        .map(|(key, _)| key.clone());
    let removed = current
        .keys()
        .filter(|key| !desired.contains_key(*key))
        .filter(|key| schema.is_none_or(|s| s.tracks_removal(key)))
        .cloned();

    let mut changed: Vec<String> = modified.chain(removed).collect();
    changed.sort();
    changed
}

/// Compute Diff for multiple resources and generate a Plan
///
/// Data sources become Read effects. Resources found in `current_states` that
/// are no longer declared are scheduled for deletion. `schemas` is keyed by
/// resource type.
pub fn create_plan(
    desired: &[Resource],
    current_states: &HashMap<ResourceId, State>,
    schemas: &HashMap<String, ResourceSchema>,
) -> Plan {
    let mut plan = Plan::new();

    for resource in desired {
        if resource.is_data_source() {
            plan.add(Effect::Read {
                resource: resource.clone(),
            });
            continue;
        }

        let current = current_states
            .get(&resource.id)
            .cloned()
            .unwrap_or_else(|| State::not_found(resource.id.clone()));

        let schema = schemas.get(&resource.id.resource_type);
        match diff(resource, &current, schema) {
            Diff::Create(r) => plan.add(Effect::Create(r)),
            Diff::Update { id, from, to, .. } => plan.add(Effect::Update { id, from, to }),
            Diff::NoChange(_) => {}
        }
    }

    let mut orphans: Vec<&State> = current_states
        .values()
        .filter(|state| state.exists && !desired.iter().any(|r| r.id == state.id))
        .collect();
    orphans.sort_by(|a, b| a.id.to_string().cmp(&b.id.to_string()));

    for state in orphans {
        if let Some(identifier) = &state.identifier {
            plan.add(Effect::Delete {
                id: state.id.clone(),
                identifier: identifier.clone(),
            });
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttributeSchema, AttributeType, types};

    fn pipeline_schema() -> ResourceSchema {
        ResourceSchema::new("pipeline")
            .attribute(AttributeSchema::new("id", AttributeType::String))
            .attribute(AttributeSchema::new("description", AttributeType::String))
            .attribute(AttributeSchema::new("tags", types::string_list()))
            .attribute(AttributeSchema::new("secret", AttributeType::String).write_only())
    }

    #[test]
    fn diff_create_when_not_exists() {
        let desired = Resource::new("pipeline", "main");
        let current = State::not_found(ResourceId::new("pipeline", "main"));

        let result = diff(&desired, &current, None);
        assert!(matches!(result, Diff::Create(_)));
    }

    #[test]
    fn diff_no_change_when_same() {
        let desired = Resource::new("pipeline", "main").with_attribute("timeout_ms", 30000i64);

        let mut attrs = HashMap::new();
        attrs.insert("timeout_ms".to_string(), Value::Int(30000));
        let current = State::existing(ResourceId::new("pipeline", "main"), attrs);

        let result = diff(&desired, &current, None);
        assert!(matches!(result, Diff::NoChange(_)));
    }

    #[test]
    fn diff_update_when_different() {
        let desired = Resource::new("pipeline", "main").with_attribute("output", "s3_archive");

        let mut attrs = HashMap::new();
        attrs.insert("output".to_string(), Value::from("default"));
        let current = State::existing(ResourceId::new("pipeline", "main"), attrs);

        match diff(&desired, &current, None) {
            Diff::Update {
                changed_attributes, ..
            } => {
                assert_eq!(changed_attributes, vec!["output".to_string()]);
            }
            other => panic!("Expected Update, got {:?}", other),
        }
    }

    #[test]
    fn create_plan_from_resources() {
        let resources = vec![
            Resource::new("pipeline", "new"),
            Resource::new("pipeline", "existing").with_attribute("timeout_ms", 1000i64),
            Resource::new("system", "leader").with_read_only(true),
        ];

        let mut current_states = HashMap::new();
        let mut attrs = HashMap::new();
        attrs.insert("timeout_ms".to_string(), Value::Int(500));
        current_states.insert(
            ResourceId::new("pipeline", "existing"),
            State::existing(ResourceId::new("pipeline", "existing"), attrs)
                .with_identifier("existing"),
        );

        let plan = create_plan(&resources, &current_states, &HashMap::new());

        assert_eq!(plan.effects().len(), 3);
        assert!(matches!(plan.effects()[0], Effect::Create(_)));
        assert!(matches!(plan.effects()[1], Effect::Update { .. }));
        assert!(matches!(plan.effects()[2], Effect::Read { .. }));
    }

    #[test]
    fn undeclared_resources_are_deleted() {
        let mut current_states = HashMap::new();
        let id = ResourceId::new("input_datagen", "old");
        current_states.insert(
            id.clone(),
            State::existing(id.clone(), HashMap::new()).with_identifier("in_old"),
        );

        let plan = create_plan(&[], &current_states, &HashMap::new());

        assert_eq!(
            plan.effects(),
            &[Effect::Delete {
                id,
                identifier: "in_old".to_string()
            }]
        );
    }

    #[test]
    fn dropped_attributes_are_changes() {
        let desired = Resource::new("pipeline", "main").with_attribute("id", "p1");

        let mut attrs = HashMap::new();
        attrs.insert("id".to_string(), Value::from("p1"));
        attrs.insert("description".to_string(), Value::from("old text"));
        attrs.insert("tags".to_string(), Value::from(vec!["prod"]));
        let current = State::existing(ResourceId::new("pipeline", "main"), attrs)
            .with_identifier("p1");

        let mut schemas = HashMap::new();
        schemas.insert("pipeline".to_string(), pipeline_schema());
        let mut states = HashMap::new();
        states.insert(current.id.clone(), current);

        let plan = create_plan(&[desired], &states, &schemas);
        assert_eq!(plan.effects().len(), 1);
        match &plan.effects()[0] {
            Effect::Update { from, to, .. } => {
                assert_eq!(
                    find_changed_attributes(&to.attributes, &from.attributes, Some(&pipeline_schema())),
                    vec!["description".to_string(), "tags".to_string()]
                );
            }
            other => panic!("Expected Update, got {:?}", other),
        }
    }

    #[test]
    fn write_only_and_unknown_attributes_do_not_drift() {
        let desired = HashMap::from([("id".to_string(), Value::from("p1"))]);
        let current = HashMap::from([
            ("id".to_string(), Value::from("p1")),
            ("secret".to_string(), Value::from("shh")),
            ("functions".to_string(), Value::List(vec![])),
        ]);

        let schema = pipeline_schema();
        assert!(find_changed_attributes(&desired, &current, Some(&schema)).is_empty());
        assert_eq!(
            find_changed_attributes(&desired, &current, None),
            vec!["functions".to_string(), "secret".to_string()]
        );
    }
}
