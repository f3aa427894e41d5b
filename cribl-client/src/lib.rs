//! Cribl HTTP Client
//!
//! A typed client for the Cribl Stream management API (`<base>/api/v1`).
//!
//! Every outgoing request passes through an ordered chain of request editors
//! before it is sent; authentication is one such editor.
//!
//! # Example
//!
//! ```no_run
//! use cribl_client::CriblClient;
//!
//! # async fn example() -> cribl_client::Result<()> {
//! let client = CriblClient::new("https://leader:9000/api/v1").with_bearer_token("abc");
//! let pipelines = client.list_pipelines().await?;
//! println!("{} pipelines", pipelines.count);
//! # Ok(())
//! # }
//! ```

mod auth;
mod decode;
pub mod error;
mod inputs;
pub mod models;
mod outputs;
mod pipelines;
mod system;

pub use decode::{decode, decode_empty};
pub use error::{ClientError, Result};

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder};

/// Decorator applied to every request before dispatch
pub type RequestEditor = Arc<dyn Fn(RequestBuilder) -> RequestBuilder + Send + Sync>;

/// HTTP client for the Cribl management API
///
/// Cheap to clone; the underlying connection pool and editor chain are shared.
#[derive(Clone)]
pub struct CriblClient {
    /// API root including `/api/v1`, without trailing slash
    base_url: String,
    client: Client,
    editors: Vec<RequestEditor>,
}

impl std::fmt::Debug for CriblClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CriblClient")
            .field("base_url", &self.base_url)
            .field("editors", &self.editors.len())
            .finish()
    }
}

impl CriblClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client around a preconfigured reqwest Client (timeouts, TLS, ...)
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            editors: Vec::new(),
        }
    }

    /// Append a request editor; editors run in insertion order
    pub fn with_request_editor<F>(mut self, editor: F) -> Self
    where
        F: Fn(RequestBuilder) -> RequestBuilder + Send + Sync + 'static,
    {
        self.editors.push(Arc::new(editor));
        self
    }

    /// Attach `Authorization: Bearer <token>` to every subsequent request
    pub fn with_bearer_token(self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.with_request_editor(move |req| req.bearer_auth(&token))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);
        self.editors
            .iter()
            .fold(self.client.request(method, url), |req, edit| edit(req))
    }
}

/// Reject ids that cannot be used as a single path segment
fn path_id(id: &str) -> Result<&str> {
    if id.is_empty() {
        Err(ClientError::InvalidRequest("id must not be empty".to_string()))
    } else if id == "." || id == ".." || id.contains(['/', '?', '#', '%']) {
        Err(ClientError::InvalidRequest(format!(
            "id '{}' contains reserved characters",
            id
        )))
    } else {
        Ok(id)
    }
}
