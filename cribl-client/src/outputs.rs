//! Output (destination) endpoints

use reqwest::{Method, StatusCode};

use crate::decode::{decode, decode_empty};
use crate::error::{ClientError, Result};
use crate::models::{Items, OutputS3, OutputSummary};
use crate::{CriblClient, path_id};

impl CriblClient {
    /// List every configured output regardless of type
    pub async fn list_outputs(&self) -> Result<Items<OutputSummary>> {
        let response = self.request(Method::GET, "/system/outputs").send().await;
        decode(response, StatusCode::OK).await
    }

    pub async fn get_output_s3(&self, id: &str) -> Result<OutputS3> {
        let path = format!("/system/outputs/{}", path_id(id)?);
        let response = self.request(Method::GET, &path).send().await;
        let items: Items<OutputS3> = decode(response, StatusCode::OK).await?;
        items
            .into_first()
            .filter(|output| output.id.as_deref().is_none_or(|got| got == id))
            .ok_or_else(|| ClientError::NotFound(format!("output '{}'", id)))
    }

    /// Create an S3 output; the API answers 205 Reset Content on success
    pub async fn create_output_s3(&self, output: &OutputS3) -> Result<()> {
        let response = self
            .request(Method::POST, "/system/outputs")
            .json(output)
            .send()
            .await;
        decode_empty(response, StatusCode::RESET_CONTENT).await
    }

    pub async fn update_output_s3(&self, id: &str, output: &OutputS3) -> Result<()> {
        let path = format!("/system/outputs/{}", path_id(id)?);
        let response = self
            .request(Method::PATCH, &path)
            .json(output)
            .send()
            .await;
        decode_empty(response, StatusCode::OK).await
    }

    pub async fn delete_output(&self, id: &str) -> Result<()> {
        let path = format!("/system/outputs/{}", path_id(id)?);
        let response = self.request(Method::DELETE, &path).send().await;
        decode_empty(response, StatusCode::OK).await
    }
}
