use serde::{Deserialize, Serialize};

use crate::models::photo::Photo;

/// Fields an owner submits when creating or updating a listing. Amenities
/// and category are references into separately owned catalogs.
#[derive(Debug, Clone, Serialize)]
pub struct RoomFields {
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: u32,
    pub rooms: u32,
    pub toilets: u32,
    pub description: String,
    pub address: String,
    pub pet_friendly: bool,
    pub kind: RoomKind,
    pub amenities: Vec<i64>,
    pub category: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    EntirePlace,
    PrivateRoom,
    SharedRoom,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomOwner {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomSummary {
    pub pk: i64,
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomDetail {
    pub pk: i64,
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: u32,
    pub rooms: u32,
    pub toilets: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    pub pet_friendly: bool,
    pub kind: RoomKind,
    pub owner: RoomOwner,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Amenity {
    pub pk: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub pk: i64,
    pub name: String,
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    pub user: RoomOwner,
    pub payload: String,
    pub rating: u32,
}
