//! Authentication endpoint

use reqwest::{Method, StatusCode};

use crate::CriblClient;
use crate::decode::decode;
use crate::error::Result;
use crate::models::{AuthToken, LoginRequest};

impl CriblClient {
    /// Exchange username and password for a bearer token
    ///
    /// The returned token is not installed on this client; use
    /// [`CriblClient::with_bearer_token`].
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthToken> {
        log::debug!("logging in as {}", username);
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self
            .request(Method::POST, "/auth/login")
            .json(&body)
            .send()
            .await;

        decode(response, StatusCode::OK).await
    }
}
