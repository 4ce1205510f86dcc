use std::sync::Mutex;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;

use super::{ApiResponse, ApiTransport};
use crate::config::ApiConfig;
use crate::errors::ApiError;

const CSRF_HEADER: &str = "X-CSRFToken";

pub struct HttpTransport {
    base_url: String,
    csrf_token: Mutex<String>,
    client: reqwest::Client,
    // No cookie store: the upload target must not see the backend session.
    upload_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            csrf_token: Mutex::new(config.csrf_token.clone()),
            client,
            upload_client: reqwest::Client::new(),
        })
    }

    /// The anti-forgery token the backend set in its cookie. An empty token
    /// is still sent; the backend rejects it as an auth-style failure.
    pub fn set_csrf_token(&self, token: &str) {
        *self.csrf_token.lock().unwrap() = token.to_string();
    }

    fn endpoint(&self, path: &str) -> String {
        join_endpoint(&self.base_url, path)
    }

    fn csrf_header(&self) -> String {
        self.csrf_token.lock().unwrap().clone()
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<ApiResponse, ApiError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Ok(ApiResponse { status, body })
    }
}

fn join_endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<ApiResponse, ApiError> {
        self.execute(self.client.get(self.endpoint(path)).query(query))
            .await
    }

    async fn post(&self, path: &str, body: Value) -> Result<ApiResponse, ApiError> {
        self.execute(
            self.client
                .post(self.endpoint(path))
                .header(CSRF_HEADER, self.csrf_header())
                .json(&body),
        )
        .await
    }

    async fn put(&self, path: &str, body: Value) -> Result<ApiResponse, ApiError> {
        self.execute(
            self.client
                .put(self.endpoint(path))
                .header(CSRF_HEADER, self.csrf_header())
                .json(&body),
        )
        .await
    }

    async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.execute(
            self.client
                .delete(self.endpoint(path))
                .header(CSRF_HEADER, self.csrf_header()),
        )
        .await
    }

    async fn upload_binary(
        &self,
        url: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ApiResponse, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        self.execute(self.upload_client.post(url).multipart(form))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_endpoint_normalizes_slashes() {
        assert_eq!(
            join_endpoint("http://localhost:8000/api/v1", "rooms/"),
            "http://localhost:8000/api/v1/rooms/"
        );
        assert_eq!(
            join_endpoint("http://localhost:8000/api/v1/", "/rooms/42/bookings"),
            "http://localhost:8000/api/v1/rooms/42/bookings"
        );
    }

    #[test]
    fn test_csrf_token_can_be_replaced() {
        let transport = HttpTransport::new(&ApiConfig {
            base_url: "http://localhost:8000/api/v1".to_string(),
            csrf_token: String::new(),
        })
        .unwrap();
        assert_eq!(transport.csrf_header(), "");
        transport.set_csrf_token("abc123");
        assert_eq!(transport.csrf_header(), "abc123");
    }
}
