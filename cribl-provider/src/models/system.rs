use std::collections::HashMap;

use cribl_client::models::SystemInfo;
use cribl_core::resource::Value;

/// Build information exposed by the `system` data source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildConfig {
    pub hostname: Option<String>,
    pub version: Option<String>,
    pub branch: Option<String>,
}

impl BuildConfig {
    pub fn from_wire(wire: SystemInfo) -> Self {
        Self {
            hostname: wire.hostname,
            version: wire.build.version,
            branch: wire.build.branch,
        }
    }

    pub fn to_attributes(&self) -> HashMap<String, Value> {
        [
            ("hostname", &self.hostname),
            ("version", &self.version),
            ("branch", &self.branch),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.as_ref().map(|v| (k.to_string(), Value::from(v.as_str()))))
        .collect()
    }
}
