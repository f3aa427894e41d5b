use std::collections::HashMap;

use cribl_client::models::{Pipeline, PipelineConf};
use cribl_core::resource::Value;

use crate::utils::attribute_struct;

attribute_struct! {
    pub struct PipelineConfig {
        pub id: String,
        pub description: Option<String>,
        /// Async function timeout in milliseconds
        pub timeout_ms: Option<i64>,
        pub tags: Option<Vec<String>>,
        pub output: Option<String>,
    }
}

impl PipelineConfig {
    pub fn to_wire(&self) -> Pipeline {
        Pipeline {
            id: self.id.clone(),
            conf: PipelineConf {
                async_func_timeout: self.timeout_ms,
                description: self.description.clone(),
                streamtags: self.tags.clone(),
                output: self.output.clone(),
            },
        }
    }

    pub fn from_wire(wire: Pipeline) -> Self {
        Self {
            id: wire.id,
            description: wire.conf.description,
            timeout_ms: wire.conf.async_func_timeout,
            tags: wire.conf.streamtags,
            output: wire.conf.output,
        }
    }

    pub fn refresh(prior: &Self, wire: Pipeline) -> Self {
        Self::merge(prior, Self::from_wire(wire))
    }
}

/// One entry of the `pipelines` data source
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSummary {
    pub id: String,
    pub timeout_ms: Option<i64>,
}

impl PipelineSummary {
    pub fn from_wire(wire: &Pipeline) -> Self {
        Self {
            id: wire.id.clone(),
            timeout_ms: wire.conf.async_func_timeout,
        }
    }

    pub fn to_value(&self) -> Value {
        let mut map = HashMap::new();
        map.insert("id".to_string(), Value::from(self.id.as_str()));
        if let Some(timeout) = self.timeout_ms {
            map.insert("timeout_ms".to_string(), Value::Int(timeout));
        }
        Value::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cribl_core::resource::ResourceId;

    fn sample() -> PipelineConfig {
        PipelineConfig {
            id: "p1".to_string(),
            description: Some("main pipeline".to_string()),
            timeout_ms: Some(30000),
            tags: Some(vec!["prod".to_string(), "edge".to_string()]),
            output: Some("default".to_string()),
        }
    }

    #[test]
    fn wire_round_trip_is_lossless() {
        let config = sample();
        assert_eq!(PipelineConfig::from_wire(config.to_wire()), config);

        let sparse = PipelineConfig {
            id: "p2".to_string(),
            description: None,
            timeout_ms: None,
            tags: Some(vec![]),
            output: None,
        };
        assert_eq!(PipelineConfig::from_wire(sparse.to_wire()), sparse);
    }

    #[test]
    fn attributes_round_trip() {
        let config = sample();
        let id = ResourceId::new("pipeline", "main");
        assert_eq!(
            PipelineConfig::from_attributes(&id, &config.to_attributes()).unwrap(),
            config
        );
    }

    #[test]
    fn refresh_prefers_remote_values() {
        let prior = sample();
        let wire = Pipeline {
            id: "p1".to_string(),
            conf: PipelineConf {
                async_func_timeout: Some(5000),
                output: Some("s3_archive".to_string()),
                ..Default::default()
            },
        };

        let refreshed = PipelineConfig::refresh(&prior, wire);
        assert_eq!(refreshed.timeout_ms, Some(5000));
        assert_eq!(refreshed.output.as_deref(), Some("s3_archive"));
        assert_eq!(refreshed.description, prior.description);
        assert_eq!(refreshed.tags, prior.tags);
    }

    #[test]
    fn refresh_ignores_fields_not_held_in_state() {
        let prior = PipelineConfig {
            description: None,
            ..sample()
        };
        let mut wire = sample().to_wire();
        wire.conf.description = Some("set by the server".to_string());

        let refreshed = PipelineConfig::refresh(&prior, wire);
        assert_eq!(refreshed, prior);
    }
}
