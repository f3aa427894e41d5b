//! Attribute schemas for every Cribl resource type and data source

mod input_datagen;
mod output_s3;
mod pipeline;
mod provider;
mod system;

pub use input_datagen::input_datagen_schema;
pub use output_s3::output_s3_schema;
pub use pipeline::{pipeline_schema, pipelines_schema};
pub use provider::provider_schema;
pub use system::system_schema;

use cribl_core::schema::ResourceSchema;

/// Schemas of all resource types and data sources
pub fn all_schemas() -> Vec<ResourceSchema> {
    vec![
        pipeline_schema(),
        output_s3_schema(),
        input_datagen_schema(),
        system_schema(),
        pipelines_schema(),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use cribl_core::resource::Value;
    use cribl_core::schema::TypeError;

    #[test]
    fn schema_names_are_unique() {
        let schemas = all_schemas();
        let mut names: Vec<_> = schemas.iter().map(|s| s.resource_type.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), schemas.len());
    }

    #[test]
    fn every_attribute_is_described() {
        for schema in all_schemas().into_iter().chain([provider_schema()]) {
            for (name, attr) in &schema.attributes {
                assert!(
                    attr.description.is_some(),
                    "{}.{} has no description",
                    schema.resource_type,
                    name
                );
            }
        }
    }

    #[test]
    fn pipeline_requires_timeout_and_output() {
        let mut attrs = HashMap::new();
        attrs.insert("id".to_string(), Value::from("p1"));

        let errors = pipeline_schema().validate(&attrs).unwrap_err();
        let mut missing: Vec<_> = errors
            .iter()
            .filter_map(|e| match e {
                TypeError::MissingRequired { name } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        missing.sort();
        assert_eq!(missing, vec!["output", "timeout_ms"]);
    }

    #[test]
    fn s3_secrets_are_sensitive() {
        let schema = output_s3_schema();
        assert!(schema.is_sensitive("aws_api_key"));
        assert!(schema.is_sensitive("aws_secret_key"));
        assert!(schema.is_sensitive("aws_secret"));
        assert!(!schema.is_sensitive("bucket"));
    }

    #[test]
    fn s3_write_only_fields_never_drift() {
        let schema = output_s3_schema();
        assert!(!schema.tracks_removal("default_id"));
        assert!(!schema.tracks_removal("aws_api_key"));
        assert!(!schema.tracks_removal("aws_secret_key"));
        assert!(schema.tracks_removal("stream_tags"));
        assert!(schema.tracks_removal("description"));
    }

    #[test]
    fn s3_rejects_unknown_enum_value() {
        let mut attrs = HashMap::new();
        attrs.insert("id".to_string(), Value::from("s3_out"));
        attrs.insert("default_id".to_string(), Value::from("default"));
        attrs.insert("bucket".to_string(), Value::from("logs"));
        attrs.insert("stage_path".to_string(), Value::from("/tmp/stage"));
        attrs.insert("compress".to_string(), Value::from("zstd"));

        let errors = output_s3_schema().validate(&attrs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("zstd"));
    }

    #[test]
    fn datagen_defaults_type() {
        let schema = input_datagen_schema();
        let mut attrs = HashMap::new();
        attrs.insert("id".to_string(), Value::from("in_gen"));
        schema.apply_defaults(&mut attrs);

        assert_eq!(attrs.get("type"), Some(&Value::from("datagen")));
        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn datagen_samples_are_checked_per_item() {
        let mut sample = HashMap::new();
        sample.insert("sample".to_string(), Value::from("syslog.log"));
        let mut attrs = HashMap::new();
        attrs.insert("id".to_string(), Value::from("in_gen"));
        attrs.insert("samples".to_string(), Value::List(vec![Value::Map(sample)]));

        let errors = input_datagen_schema().validate(&attrs).unwrap_err();
        assert!(errors[0].to_string().contains("events_per_sec"));
    }
}
