use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: String,
    #[serde(default)]
    pub conf: PipelineConf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConf {
    /// Async function timeout in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub async_func_timeout: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streamtags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_fields_are_omitted_and_empty_lists_kept() {
        let pipeline = Pipeline {
            id: "p1".to_string(),
            conf: PipelineConf {
                async_func_timeout: Some(30000),
                streamtags: Some(vec![]),
                ..Default::default()
            },
        };
        assert_eq!(
            serde_json::to_value(&pipeline).unwrap(),
            json!({"id": "p1", "conf": {"asyncFuncTimeout": 30000, "streamtags": []}})
        );
    }

    #[test]
    fn parse_pipeline_with_extra_fields() {
        let pipeline: Pipeline = serde_json::from_value(json!({
            "id": "main",
            "conf": {"asyncFuncTimeout": 1000, "output": "default", "functions": []}
        }))
        .unwrap();
        assert_eq!(pipeline.conf.async_func_timeout, Some(1000));
        assert_eq!(pipeline.conf.output.as_deref(), Some("default"));
        assert_eq!(pipeline.conf.streamtags, None);
    }
}
