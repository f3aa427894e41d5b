use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One item of `GET /system/info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(rename = "BUILD", default)]
    pub build: BuildInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildInfo {
    #[serde(rename = "VERSION", default)]
    pub version: Option<String>,
    #[serde(rename = "BRANCH", default)]
    pub branch: Option<String>,
    /// Remaining build keys (commit, build date, ...)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
