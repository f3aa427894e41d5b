use std::collections::HashMap;

use cribl_client::models::{DatagenSample, InputDatagen, InputDatagenType};
use cribl_core::resource::Value;

use crate::utils::{AttrValue, attribute_struct};

/// One `{events_per_sec, sample}` pair of a datagen input
#[derive(Debug, Clone, PartialEq)]
pub struct SampleConfig {
    pub events_per_sec: i64,
    pub sample: String,
}

impl AttrValue for SampleConfig {
    fn from_value(value: &Value) -> Result<Self, String> {
        let Value::Map(map) = value else {
            return Err(format!("expected sample object, got {:?}", value));
        };
        let events_per_sec = map
            .get("events_per_sec")
            .ok_or("sample is missing 'events_per_sec'")
            .and_then(|v| i64::from_value(v).map_err(|_| "'events_per_sec' must be an integer"))?;
        let sample = map
            .get("sample")
            .ok_or("sample is missing 'sample'")
            .and_then(|v| String::from_value(v).map_err(|_| "'sample' must be a string"))?;
        Ok(Self {
            events_per_sec,
            sample,
        })
    }

    fn to_value(&self) -> Value {
        let mut map = HashMap::new();
        map.insert("events_per_sec".to_string(), Value::Int(self.events_per_sec));
        map.insert("sample".to_string(), Value::from(self.sample.as_str()));
        Value::Map(map)
    }
}

/// Rates are whole numbers on the attribute side while the API stores a
/// float. A fractional remote rate is rounded to the nearest integer, so a
/// rate of 0.5 set outside this tool reads back as 1.
fn whole_rate(rate: f64, sample: &str) -> i64 {
    let rounded = rate.round();
    if rounded != rate {
        log::warn!(
            "datagen sample '{}' has fractional rate {}; recording {}",
            sample,
            rate,
            rounded
        );
    }
    rounded as i64
}

attribute_struct! {
    pub struct InputDatagenConfig {
        pub id: String,
        pub input_type as "type": InputDatagenType,
        pub description: Option<String>,
        /// Git branch this input is restricted to
        pub environment: Option<String>,
        pub samples: Option<Vec<SampleConfig>>,
        pub disabled: Option<bool>,
        pub pq_enabled: Option<bool>,
        pub send_to_routes: Option<bool>,
        pub pipeline: Option<String>,
    }
}

impl InputDatagenConfig {
    pub fn to_wire(&self) -> InputDatagen {
        InputDatagen {
            id: Some(self.id.clone()),
            input_type: self.input_type,
            description: self.description.clone(),
            environment: self.environment.clone(),
            samples: self.samples.as_ref().map(|samples| {
                samples
                    .iter()
                    .map(|s| DatagenSample {
                        events_per_sec: s.events_per_sec as f64,
                        sample: s.sample.clone(),
                    })
                    .collect()
            }),
            disabled: self.disabled,
            pq_enabled: self.pq_enabled,
            send_to_routes: self.send_to_routes,
            pipeline: self.pipeline.clone(),
        }
    }

    /// `fallback_id` is used when the remote record omits its id
    pub fn from_wire(wire: InputDatagen, fallback_id: &str) -> Self {
        Self {
            id: wire.id.unwrap_or_else(|| fallback_id.to_string()),
            input_type: wire.input_type,
            description: wire.description,
            environment: wire.environment,
            samples: wire.samples.map(|samples| {
                samples
                    .into_iter()
                    .map(|s| SampleConfig {
                        events_per_sec: whole_rate(s.events_per_sec, &s.sample),
                        sample: s.sample,
                    })
                    .collect()
            }),
            disabled: wire.disabled,
            pq_enabled: wire.pq_enabled,
            send_to_routes: wire.send_to_routes,
            pipeline: wire.pipeline,
        }
    }

    pub fn refresh(prior: &Self, wire: InputDatagen) -> Self {
        Self::merge(prior, Self::from_wire(wire, &prior.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cribl_core::resource::ResourceId;

    fn sample() -> InputDatagenConfig {
        InputDatagenConfig {
            id: "in_gen".to_string(),
            input_type: InputDatagenType::Datagen,
            description: None,
            environment: Some("main".to_string()),
            samples: Some(vec![
                SampleConfig {
                    events_per_sec: 10,
                    sample: "apache_common.log".to_string(),
                },
                SampleConfig {
                    events_per_sec: 1,
                    sample: "syslog.log".to_string(),
                },
            ]),
            disabled: Some(false),
            pq_enabled: None,
            send_to_routes: Some(true),
            pipeline: Some("main".to_string()),
        }
    }

    #[test]
    fn wire_round_trip_keeps_sample_order() {
        let config = sample();
        assert_eq!(
            InputDatagenConfig::from_wire(config.to_wire(), "ignored"),
            config
        );
    }

    #[test]
    fn attributes_use_type_key() {
        let config = sample();
        let attrs = config.to_attributes();
        assert_eq!(attrs.get("type"), Some(&Value::from("datagen")));
        assert!(!attrs.contains_key("description"));

        let id = ResourceId::new("input_datagen", "gen");
        assert_eq!(
            InputDatagenConfig::from_attributes(&id, &attrs).unwrap(),
            config
        );
    }

    #[test]
    fn malformed_sample_is_rejected() {
        let mut attrs = sample().to_attributes();
        let mut bad = HashMap::new();
        bad.insert("sample".to_string(), Value::from("x.log"));
        attrs.insert("samples".to_string(), Value::List(vec![Value::Map(bad)]));

        let id = ResourceId::new("input_datagen", "gen");
        let err = InputDatagenConfig::from_attributes(&id, &attrs).unwrap_err();
        assert!(err.to_string().contains("events_per_sec"), "{err}");
    }

    #[test]
    fn fractional_remote_rate_is_rounded() {
        let mut wire = sample().to_wire();
        if let Some(samples) = wire.samples.as_mut() {
            samples[0].events_per_sec = 2.5;
            samples[1].events_per_sec = 0.4;
        }

        let config = InputDatagenConfig::from_wire(wire, "in_gen");
        let rates: Vec<i64> = config
            .samples
            .unwrap()
            .iter()
            .map(|s| s.events_per_sec)
            .collect();
        assert_eq!(rates, vec![3, 0]);
    }

    #[test]
    fn refresh_without_remote_id_keeps_prior_id() {
        let prior = sample();
        let mut wire = prior.to_wire();
        wire.id = None;
        wire.pipeline = None;

        let refreshed = InputDatagenConfig::refresh(&prior, wire);
        assert_eq!(refreshed.id, "in_gen");
        assert_eq!(refreshed.pipeline.as_deref(), Some("main"));
    }
}
