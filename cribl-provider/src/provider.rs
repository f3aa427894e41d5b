//! Cribl Provider implementation
//!
//! Bootstraps an authenticated [`CriblClient`] and routes each resource
//! operation to the handler for its type.

use std::time::Duration;

use cribl_client::CriblClient;
use cribl_core::provider::{ProviderError, ProviderResult};
use cribl_core::resource::{Resource, ResourceId, State};

use crate::config::{ConfigError, ProviderConfig};
use crate::handlers;
use crate::resources::find_resource_type;

/// Cribl Provider
#[derive(Debug, Clone)]
pub struct CriblProvider {
    client: CriblClient,
}

impl CriblProvider {
    /// Wrap an already configured client
    pub fn new(client: CriblClient) -> Self {
        Self { client }
    }

    /// Build a client from provider settings, reading `CRIBL_URL` from the
    /// process environment
    pub async fn configure(config: &ProviderConfig) -> Result<Self, ConfigError> {
        Self::configure_with_env(config, |key| std::env::var(key).ok()).await
    }

    /// Build a client from provider settings
    ///
    /// A configured `token` is used as is; otherwise username and password
    /// are exchanged for a token with a single login call.
    pub async fn configure_with_env(
        config: &ProviderConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_url = config.api_url(env)?;
        let credentials = config.credentials()?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs.unsigned_abs()));
        }
        let client = CriblClient::with_client(api_url, builder.build()?);
        log::debug!("Configuring Cribl provider for {}", client.base_url());

        let client = match (&config.token, credentials) {
            (Some(token), _) => client.with_bearer_token(token.clone()),
            (None, Some((username, password))) => {
                let auth = client
                    .login(username, password)
                    .await
                    .map_err(ConfigError::Login)?;
                if auth.force_password_change.unwrap_or(false) {
                    log::warn!("Cribl requests a password change for user '{}'", username);
                }
                log::info!("Logged in to {} as '{}'", client.base_url(), username);
                client.with_bearer_token(auth.token)
            }
            (None, None) => client,
        };

        Ok(Self { client })
    }

    pub fn client(&self) -> &CriblClient {
        &self.client
    }

    pub(crate) async fn read_resource(
        &self,
        id: &ResourceId,
        identifier: Option<&str>,
        prior: Option<&State>,
    ) -> ProviderResult<State> {
        match id.resource_type.as_str() {
            "system" => return handlers::system::read(&self.client, id).await,
            "pipelines" => return handlers::pipelines::read(&self.client, id).await,
            _ => {}
        }

        let Some(identifier) = identifier.or_else(|| prior.and_then(|p| p.identifier.as_deref()))
        else {
            return Ok(State::not_found(id.clone()));
        };

        match id.resource_type.as_str() {
            "pipeline" => handlers::pipeline::read(&self.client, id, identifier, prior).await,
            "output_s3" => handlers::output_s3::read(&self.client, id, identifier, prior).await,
            "input_datagen" => {
                handlers::input_datagen::read(&self.client, id, identifier, prior).await
            }
            other => Err(unknown_type(id, other)),
        }
    }

    pub(crate) async fn create_resource(&self, resource: Resource) -> ProviderResult<State> {
        let resource = self.prepare(resource)?;
        match resource.id.resource_type.as_str() {
            "pipeline" => handlers::pipeline::create(&self.client, &resource).await,
            "output_s3" => handlers::output_s3::create(&self.client, &resource).await,
            "input_datagen" => handlers::input_datagen::create(&self.client, &resource).await,
            other => Err(unknown_type(&resource.id, other)),
        }
    }

    pub(crate) async fn update_resource(
        &self,
        id: ResourceId,
        identifier: &str,
        to: Resource,
    ) -> ProviderResult<State> {
        let to = self.prepare(to)?;
        match id.resource_type.as_str() {
            "pipeline" => handlers::pipeline::update(&self.client, &id, identifier, &to).await,
            "output_s3" => handlers::output_s3::update(&self.client, &id, identifier, &to).await,
            "input_datagen" => {
                handlers::input_datagen::update(&self.client, &id, identifier, &to).await
            }
            other => Err(unknown_type(&id, other)),
        }
    }

    pub(crate) async fn delete_resource(
        &self,
        id: &ResourceId,
        identifier: &str,
    ) -> ProviderResult<()> {
        match id.resource_type.as_str() {
            "pipeline" => handlers::pipeline::delete(&self.client, id, identifier).await,
            "output_s3" => handlers::output_s3::delete(&self.client, id, identifier).await,
            "input_datagen" => handlers::input_datagen::delete(&self.client, id, identifier).await,
            "system" | "pipelines" => Err(read_only(id)),
            other => Err(unknown_type(id, other)),
        }
    }

    /// Normalize and validate a managed resource before it is sent
    fn prepare(&self, mut resource: Resource) -> ProviderResult<Resource> {
        let id = resource.id.clone();
        let resource_type = find_resource_type(&id.resource_type)
            .ok_or_else(|| unknown_type(&id, &id.resource_type))?;
        if resource_type.is_data_source() {
            return Err(read_only(&id));
        }

        let schema = resource_type.schema();
        schema.normalize(&mut resource.attributes);
        schema.validate(&resource.attributes).map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            ProviderError::new(format!("Invalid attributes: {}", messages.join("; ")))
                .for_resource(id.clone())
        })?;
        Ok(resource)
    }
}

fn read_only(id: &ResourceId) -> ProviderError {
    ProviderError::new("Data sources are read-only").for_resource(id.clone())
}

fn unknown_type(id: &ResourceId, resource_type: &str) -> ProviderError {
    ProviderError::new(format!("Unsupported resource type '{}'", resource_type))
        .for_resource(id.clone())
}
