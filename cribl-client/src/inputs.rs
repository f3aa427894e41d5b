//! Input (source) endpoints

use reqwest::{Method, StatusCode};

use crate::decode::{decode, decode_empty};
use crate::error::{ClientError, Result};
use crate::models::{InputDatagen, InputSummary, Items};
use crate::{CriblClient, path_id};

impl CriblClient {
    /// List every configured input regardless of type
    pub async fn list_inputs(&self) -> Result<Items<InputSummary>> {
        let response = self.request(Method::GET, "/system/inputs").send().await;
        decode(response, StatusCode::OK).await
    }

    pub async fn get_input_datagen(&self, id: &str) -> Result<InputDatagen> {
        let path = format!("/system/inputs/{}", path_id(id)?);
        let response = self.request(Method::GET, &path).send().await;
        let items: Items<InputDatagen> = decode(response, StatusCode::OK).await?;
        items
            .into_first()
            .filter(|input| input.id.as_deref().is_none_or(|got| got == id))
            .ok_or_else(|| ClientError::NotFound(format!("input '{}'", id)))
    }

    pub async fn create_input_datagen(&self, input: &InputDatagen) -> Result<()> {
        let response = self
            .request(Method::POST, "/system/inputs")
            .json(input)
            .send()
            .await;
        decode_empty(response, StatusCode::OK).await
    }

    pub async fn update_input_datagen(&self, id: &str, input: &InputDatagen) -> Result<()> {
        let path = format!("/system/inputs/{}", path_id(id)?);
        let response = self
            .request(Method::PATCH, &path)
            .json(input)
            .send()
            .await;
        decode_empty(response, StatusCode::OK).await
    }

    pub async fn delete_input(&self, id: &str) -> Result<()> {
        let path = format!("/system/inputs/{}", path_id(id)?);
        let response = self.request(Method::DELETE, &path).send().await;
        decode_empty(response, StatusCode::OK).await
    }
}
