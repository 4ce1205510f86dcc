use std::sync::Arc;

use serde_json::json;

use super::parse_body;
use crate::errors::ApiError;
use crate::models::{Photo, UploadTarget, UploadedImage};
use crate::transport::ApiTransport;

/// Steps of the direct-upload protocol. A failure carries the step it broke
/// at; earlier steps are never rolled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    RequestingUrl,
    Uploading,
    Registering,
}

impl std::fmt::Display for UploadStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            UploadStage::RequestingUrl => "requesting upload URL",
            UploadStage::Uploading => "pushing image bytes",
            UploadStage::Registering => "registering photo",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("photo upload failed while {stage}: {source}")]
pub struct UploadError {
    pub stage: UploadStage,
    #[source]
    pub source: ApiError,
}

pub struct PhotoService {
    transport: Arc<dyn ApiTransport>,
}

impl PhotoService {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// The three-step upload: obtain a one-time target from the media
    /// service, push the raw bytes straight to it (different origin, no CSRF
    /// header), then register the stored image as a photo of the listing.
    pub async fn upload_photo(
        &self,
        room_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
        description: &str,
    ) -> Result<Photo, UploadError> {
        tracing::debug!(room_id, "requesting one-time upload target");
        let target = self.request_upload_target().await.map_err(|source| UploadError {
            stage: UploadStage::RequestingUrl,
            source,
        })?;

        tracing::debug!(room_id, target_id = %target.id, "pushing image bytes");
        let image = self
            .push_bytes(&target, file_name, bytes)
            .await
            .map_err(|source| UploadError {
                stage: UploadStage::Uploading,
                source,
            })?;

        let file = image.variants.first().cloned().ok_or(UploadError {
            stage: UploadStage::Uploading,
            source: ApiError::Decode("direct-upload response carried no variants".to_string()),
        })?;

        tracing::debug!(room_id, image_id = %image.id, "registering photo");
        match self.register_photo(room_id, &file, description).await {
            Ok(photo) => Ok(photo),
            Err(source) => {
                // The image now lives at the storage provider with no Photo
                // record pointing at it. No compensating delete is attempted.
                tracing::warn!(
                    room_id,
                    image_id = %image.id,
                    "uploaded image left orphaned: registration failed"
                );
                Err(UploadError {
                    stage: UploadStage::Registering,
                    source,
                })
            }
        }
    }

    pub async fn request_upload_target(&self) -> Result<UploadTarget, ApiError> {
        let response = self.transport.post("medias/photos/get-url", json!({})).await?;
        parse_body(response)
    }

    async fn push_bytes(
        &self,
        target: &UploadTarget,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, ApiError> {
        let response = self
            .transport
            .upload_binary(&target.upload_url, file_name, bytes)
            .await?;
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        // The storage provider wraps the stored image under "result".
        let result = response
            .body
            .get("result")
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        serde_json::from_value(result).map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn register_photo(
        &self,
        room_id: &str,
        file: &str,
        description: &str,
    ) -> Result<Photo, ApiError> {
        let response = self
            .transport
            .post(
                &format!("rooms/{room_id}/photos"),
                json!({ "description": description, "file": file }),
            )
            .await?;
        if !response.is_success() {
            return Err(ApiError::from_owner_status(response.status, &response.body));
        }
        serde_json::from_value(response.body).map_err(|err| ApiError::Decode(err.to_string()))
    }
}
