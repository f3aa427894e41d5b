use serde::{Deserialize, Serialize};

string_enum! {
    InputDatagenType {
        Datagen => "datagen",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatagenSample {
    /// Maximum events generated per second
    pub events_per_sec: f64,
    /// Name of the sample file to replay
    pub sample: String,
}

/// Datagen source as stored under `/system/inputs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDatagen {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub input_type: InputDatagenType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<DatagenSample>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pq_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_to_routes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<String>,
}

/// Type-agnostic view of any input returned by `GET /system/inputs`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputSummary {
    pub id: String,
    #[serde(rename = "type", default)]
    pub input_type: Option<String>,
    #[serde(default)]
    pub disabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn datagen_wire_shape() {
        let input = InputDatagen {
            id: Some("in_gen".to_string()),
            input_type: InputDatagenType::Datagen,
            description: None,
            environment: None,
            samples: Some(vec![DatagenSample {
                events_per_sec: 10.0,
                sample: "syslog.log".to_string(),
            }]),
            disabled: Some(false),
            pq_enabled: None,
            send_to_routes: Some(true),
            pipeline: None,
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "id": "in_gen",
                "type": "datagen",
                "samples": [{"eventsPerSec": 10.0, "sample": "syslog.log"}],
                "disabled": false,
                "sendToRoutes": true
            })
        );
    }

    #[test]
    fn unknown_input_type_is_rejected() {
        let result = serde_json::from_value::<InputDatagen>(json!({"id": "x", "type": "syslog"}));
        assert!(result.is_err());

        let summary: InputSummary =
            serde_json::from_value(json!({"id": "x", "type": "syslog", "host": "0.0.0.0"}))
                .unwrap();
        assert_eq!(summary.input_type.as_deref(), Some("syslog"));
    }
}
