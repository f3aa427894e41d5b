//! Response decoding
//!
//! Every endpoint funnels its response through [`decode`] or [`decode_empty`].
//! A response is accepted only when its status equals the one the endpoint
//! documents as success; anything else becomes a [`ClientError`].

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

/// Check the status of a response (or pass through a transport error) and
/// unmarshal the body into `T`.
pub async fn decode<T: DeserializeOwned>(
    response: std::result::Result<Response, reqwest::Error>,
    expected: StatusCode,
) -> Result<T> {
    let response = check_status(response?, expected).await?;
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Same status rules as [`decode`], discarding the body.
pub async fn decode_empty(
    response: std::result::Result<Response, reqwest::Error>,
    expected: StatusCode,
) -> Result<()> {
    check_status(response?, expected).await?;
    Ok(())
}

async fn check_status(response: Response, expected: StatusCode) -> Result<Response> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = error_message(&text);
    log::debug!("unexpected status {} (wanted {}): {}", status, expected, message);

    if status == StatusCode::NOT_FOUND {
        Err(ClientError::NotFound(message))
    } else {
        Err(ClientError::status(status.as_u16(), message))
    }
}

/// Cribl reports failures as `{"status":"error","message":"..."}`; fall back
/// to the raw text for anything else.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_taken_from_json_body() {
        assert_eq!(
            error_message(r#"{"status":"error","message":"Pipeline exists"}"#),
            "Pipeline exists"
        );
    }

    #[test]
    fn message_falls_back_to_raw_text() {
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
        assert_eq!(error_message(r#"{"error":"nope"}"#), r#"{"error":"nope"}"#);
        assert_eq!(error_message(""), "");
    }
}
