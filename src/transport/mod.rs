pub mod http;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ApiError;

#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<ApiResponse, ApiError>;

    async fn post(&self, path: &str, body: Value) -> Result<ApiResponse, ApiError>;

    async fn put(&self, path: &str, body: Value) -> Result<ApiResponse, ApiError>;

    async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError>;

    /// Push raw bytes to a one-time upload target. The target is an absolute
    /// URL on a different origin and authenticates by itself, so no CSRF
    /// header and no session cookies are sent.
    async fn upload_binary(
        &self,
        url: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ApiResponse, ApiError>;
}
