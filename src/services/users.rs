use std::sync::Arc;

use serde_json::json;

use super::parse_body;
use crate::errors::ApiError;
use crate::models::{SignUpFields, User};
use crate::transport::ApiTransport;

/// Thin session calls. Session continuity itself is the transport's cookie
/// store; OAuth flows are handled elsewhere entirely.
pub struct UserService {
    transport: Arc<dyn ApiTransport>,
}

impl UserService {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        let response = self.transport.get("users/me", &[]).await?;
        parse_body(response)
    }

    pub async fn log_in(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let response = self
            .transport
            .post(
                "users/login",
                json!({ "username": username, "password": password }),
            )
            .await?;
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        tracing::info!(username, "logged in");
        Ok(())
    }

    pub async fn sign_up(&self, fields: &SignUpFields) -> Result<User, ApiError> {
        let body = serde_json::to_value(fields).map_err(|err| ApiError::Decode(err.to_string()))?;
        let response = self.transport.post("users/", body).await?;
        parse_body(response)
    }

    pub async fn log_out(&self) -> Result<(), ApiError> {
        let response = self.transport.post("users/logout", json!(null)).await?;
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        Ok(())
    }
}
