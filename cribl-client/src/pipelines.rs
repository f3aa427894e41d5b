//! Pipeline endpoints

use reqwest::{Method, StatusCode};

use crate::decode::{decode, decode_empty};
use crate::error::{ClientError, Result};
use crate::models::{Items, Pipeline};
use crate::{CriblClient, path_id};

impl CriblClient {
    pub async fn list_pipelines(&self) -> Result<Items<Pipeline>> {
        let response = self.request(Method::GET, "/pipelines").send().await;
        decode(response, StatusCode::OK).await
    }

    /// Get a pipeline by id
    ///
    /// An empty `items` envelope, or one holding a different pipeline, is
    /// reported as [`ClientError::NotFound`].
    pub async fn get_pipeline(&self, id: &str) -> Result<Pipeline> {
        let path = format!("/pipelines/{}", path_id(id)?);
        let response = self.request(Method::GET, &path).send().await;
        let items: Items<Pipeline> = decode(response, StatusCode::OK).await?;
        items
            .into_first()
            .filter(|pipeline| pipeline.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("pipeline '{}'", id)))
    }

    pub async fn create_pipeline(&self, pipeline: &Pipeline) -> Result<()> {
        path_id(&pipeline.id)?;
        let response = self
            .request(Method::POST, "/pipelines")
            .json(pipeline)
            .send()
            .await;
        decode_empty(response, StatusCode::OK).await
    }

    pub async fn update_pipeline(&self, id: &str, pipeline: &Pipeline) -> Result<()> {
        let path = format!("/pipelines/{}", path_id(id)?);
        let response = self
            .request(Method::PATCH, &path)
            .json(pipeline)
            .send()
            .await;
        decode_empty(response, StatusCode::OK).await
    }

    pub async fn delete_pipeline(&self, id: &str) -> Result<()> {
        let path = format!("/pipelines/{}", path_id(id)?);
        let response = self.request(Method::DELETE, &path).send().await;
        decode_empty(response, StatusCode::OK).await
    }
}
