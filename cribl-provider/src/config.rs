//! Provider connection settings read from the document's `provider` block

use std::collections::HashMap;
use std::fmt;

use cribl_client::ClientError;
use cribl_core::resource::{ResourceId, Value};

use crate::schemas::provider_schema;
use crate::utils::AttributeField;

/// Environment variable consulted when `base_url` is not configured
pub const CRIBL_URL_ENV: &str = "CRIBL_URL";

/// Path of the management API under the base URL
pub const API_PATH: &str = "/api/v1";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid provider configuration: {0}")]
    Invalid(String),

    #[error("No endpoint configured: set base_url, CRIBL_URL, or workspace_id and organization_id")]
    MissingBaseUrl,

    #[error("username and password must be set together")]
    IncompleteCredentials,

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unable to fetch auth token: {0}")]
    Login(#[source] ClientError),
}

#[derive(Clone, Default, PartialEq)]
pub struct ProviderConfig {
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
    pub workspace_id: Option<String>,
    pub organization_id: Option<String>,
    pub timeout_secs: Option<i64>,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("token", &redact(&self.token))
            .field("workspace_id", &self.workspace_id)
            .field("organization_id", &self.organization_id)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ProviderConfig {
    /// Parse and validate the attributes of a `provider` block
    pub fn from_attributes(attrs: &HashMap<String, Value>) -> Result<Self, ConfigError> {
        provider_schema().validate(attrs).map_err(|errors| {
            ConfigError::Invalid(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

        let id = ResourceId::new("provider", "cribl");
        let field = |key: &str| {
            <Option<String>>::read(&id, attrs, key)
                .map_err(|e| ConfigError::Invalid(e.message))
        };
        Ok(Self {
            base_url: field("base_url")?,
            username: field("username")?,
            password: field("password")?,
            token: field("token")?,
            workspace_id: field("workspace_id")?,
            organization_id: field("organization_id")?,
            timeout_secs: <Option<i64>>::read(&id, attrs, "timeout_secs")
                .map_err(|e| ConfigError::Invalid(e.message))?,
        })
    }

    /// Resolve the API root: explicit `base_url`, then the environment, then
    /// the Cribl.Cloud workspace URL. `/api/v1` is appended.
    pub fn api_url(&self, env: impl Fn(&str) -> Option<String>) -> Result<String, ConfigError> {
        let base = match (&self.base_url, &self.workspace_id, &self.organization_id) {
            (Some(url), _, _) => url.clone(),
            (None, workspace, organization) => match env(CRIBL_URL_ENV) {
                Some(url) if !url.is_empty() => url,
                _ => match (workspace, organization) {
                    (Some(w), Some(o)) => format!("https://{}-{}.cribl.cloud", w, o),
                    _ => return Err(ConfigError::MissingBaseUrl),
                },
            },
        };
        Ok(format!("{}{}", base.trim_end_matches('/'), API_PATH))
    }

    /// Username and password when both are set
    pub fn credentials(&self) -> Result<Option<(&str, &str)>, ConfigError> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Ok(Some((user.as_str(), pass.as_str()))),
            (None, None) => Ok(None),
            _ => Err(ConfigError::IncompleteCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn explicit_base_url_wins() {
        let config = ProviderConfig {
            base_url: Some("http://leader:9000/".to_string()),
            workspace_id: Some("main".to_string()),
            organization_id: Some("acme".to_string()),
            ..Default::default()
        };
        let url = config
            .api_url(|_| Some("http://other:9000".to_string()))
            .unwrap();
        assert_eq!(url, "http://leader:9000/api/v1");
    }

    #[test]
    fn environment_fallback() {
        let config = ProviderConfig::default();
        let url = config
            .api_url(|key| (key == CRIBL_URL_ENV).then(|| "http://env:9000".to_string()))
            .unwrap();
        assert_eq!(url, "http://env:9000/api/v1");
    }

    #[test]
    fn cloud_url_from_workspace() {
        let config = ProviderConfig {
            workspace_id: Some("main".to_string()),
            organization_id: Some("acme-xyz".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.api_url(no_env).unwrap(),
            "https://main-acme-xyz.cribl.cloud/api/v1"
        );
    }

    #[test]
    fn missing_endpoint_is_an_error() {
        let config = ProviderConfig {
            workspace_id: Some("main".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.api_url(no_env),
            Err(ConfigError::MissingBaseUrl)
        ));
    }

    #[test]
    fn credentials_must_come_in_pairs() {
        let config = ProviderConfig {
            username: Some("admin".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.credentials(),
            Err(ConfigError::IncompleteCredentials)
        ));
        assert_eq!(ProviderConfig::default().credentials().unwrap(), None);
    }

    #[test]
    fn parse_provider_block() {
        let mut attrs = HashMap::new();
        attrs.insert("base_url".to_string(), Value::from("http://leader:9000"));
        attrs.insert("token".to_string(), Value::from("tok"));
        attrs.insert("timeout_secs".to_string(), Value::Int(30));

        let config = ProviderConfig::from_attributes(&attrs).unwrap();
        assert_eq!(config.token.as_deref(), Some("tok"));
        assert_eq!(config.timeout_secs, Some(30));
    }

    #[test]
    fn unknown_provider_attribute_is_rejected() {
        let mut attrs = HashMap::new();
        attrs.insert("region".to_string(), Value::from("us-east-1"));
        let err = ProviderConfig::from_attributes(&attrs).unwrap_err();
        assert!(err.to_string().contains("region"));
    }

    #[test]
    fn debug_redacts_secrets() {
        let config = ProviderConfig {
            password: Some("hunter2".to_string()),
            token: Some("tok-123".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("tok-123"));
        assert!(debug.contains("<redacted>"));
    }
}
