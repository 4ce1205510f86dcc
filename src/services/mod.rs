pub mod bookings;
pub mod dates;
pub mod photos;
pub mod rooms;
pub mod users;

use serde::de::DeserializeOwned;

use crate::errors::ApiError;
use crate::transport::ApiResponse;

/// Deserialize a successful response body, or map the status to the error
/// taxonomy.
pub(crate) fn parse_body<T: DeserializeOwned>(response: ApiResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(ApiError::from_status(response.status, &response.body));
    }
    serde_json::from_value(response.body).map_err(|err| ApiError::Decode(err.to_string()))
}
