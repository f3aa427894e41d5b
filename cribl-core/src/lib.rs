//! Cribl Core
//!
//! Core library for declarative management of a Cribl deployment: resources,
//! schemas, diffing, plans and the provider abstraction

pub mod differ;
pub mod document;
pub mod effect;
pub mod interpreter;
pub mod plan;
pub mod provider;
pub mod resource;
pub mod schema;
