use std::sync::Arc;

use super::parse_body;
use crate::errors::ApiError;
use crate::models::{Amenity, Category, Review, RoomDetail, RoomFields, RoomSummary};
use crate::transport::ApiTransport;

/// Listing CRUD plus the catalog and review reads. Every operation is a
/// single request/response round trip with no intermediate state.
pub struct RoomService {
    transport: Arc<dyn ApiTransport>,
}

impl RoomService {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self) -> Result<Vec<RoomSummary>, ApiError> {
        let response = self.transport.get("rooms/", &[]).await?;
        parse_body(response)
    }

    pub async fn get(&self, room_id: &str) -> Result<RoomDetail, ApiError> {
        let response = self.transport.get(&format!("rooms/{room_id}"), &[]).await?;
        parse_body(response)
    }

    pub async fn reviews(&self, room_id: &str) -> Result<Vec<Review>, ApiError> {
        let response = self
            .transport
            .get(&format!("rooms/{room_id}/reviews"), &[])
            .await?;
        parse_body(response)
    }

    pub async fn create(&self, fields: &RoomFields) -> Result<RoomDetail, ApiError> {
        let body = serde_json::to_value(fields).map_err(|err| ApiError::Decode(err.to_string()))?;
        let response = self.transport.post("rooms/", body).await?;
        let listing: RoomDetail = parse_body(response)?;
        tracing::info!(pk = listing.pk, name = %listing.name, "listing created");
        Ok(listing)
    }

    pub async fn update(&self, room_id: &str, fields: &RoomFields) -> Result<RoomDetail, ApiError> {
        let body = serde_json::to_value(fields).map_err(|err| ApiError::Decode(err.to_string()))?;
        let response = self.transport.put(&format!("rooms/{room_id}"), body).await?;
        if !response.is_success() {
            return Err(ApiError::from_owner_status(response.status, &response.body));
        }
        serde_json::from_value(response.body).map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub async fn delete(&self, room_id: &str) -> Result<(), ApiError> {
        let response = self.transport.delete(&format!("rooms/{room_id}")).await?;
        if !response.is_success() {
            return Err(ApiError::from_owner_status(response.status, &response.body));
        }
        tracing::info!(room_id, "listing deleted");
        Ok(())
    }

    pub async fn amenities(&self) -> Result<Vec<Amenity>, ApiError> {
        let response = self.transport.get("rooms/amenities/", &[]).await?;
        parse_body(response)
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let response = self.transport.get("categories/", &[]).await?;
        parse_body(response)
    }
}
