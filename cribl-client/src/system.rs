//! System info endpoint

use reqwest::{Method, StatusCode};

use crate::CriblClient;
use crate::decode::decode;
use crate::error::Result;
use crate::models::{Items, SystemInfo};

impl CriblClient {
    /// Fetch hostname and build information of the leader
    pub async fn system_info(&self) -> Result<Items<SystemInfo>> {
        let response = self.request(Method::GET, "/system/info").send().await;
        decode(response, StatusCode::OK).await
    }
}
