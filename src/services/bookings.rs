use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use serde_json::json;

use super::parse_body;
use crate::errors::ApiError;
use crate::models::{
    AvailabilityResult, Booking, BookingRequest, DateRange, ExperienceBooking, MyBooking,
};
use crate::transport::{ApiResponse, ApiTransport};

/// Outcome of an availability probe. `Superseded` means a newer range was
/// selected while this probe was in flight; its answer is stale and must not
/// drive any state. `Failed` is the fail-safe answer for transport or server
/// faults: the range is treated as not bookable.
#[derive(Debug)]
pub enum AvailabilityStatus {
    Available,
    Unavailable,
    Superseded,
    Failed,
}

impl AvailabilityStatus {
    pub fn is_bookable(&self) -> bool {
        matches!(self, AvailabilityStatus::Available)
    }
}

pub struct BookingService {
    transport: Arc<dyn ApiTransport>,
    // request-generation counter for probe supersession
    generation: AtomicU64,
    submitting: AtomicBool,
}

impl BookingService {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            transport,
            generation: AtomicU64::new(0),
            submitting: AtomicBool::new(false),
        }
    }

    /// Read-only probe of `rooms/{id}/bookings/check`. Issuing a new probe
    /// supersedes every probe still in flight, by issuance order — a user
    /// dragging the calendar only ever sees the answer for the range they
    /// selected last, regardless of response arrival order.
    pub async fn check_availability(&self, room_id: &str, range: DateRange) -> AvailabilityStatus {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let path = format!("rooms/{room_id}/bookings/check");
        let query = [
            ("check_in", range.check_in_param()),
            ("check_out", range.check_out_param()),
        ];
        let outcome = self.transport.get(&path, &query).await;

        if self.generation.load(Ordering::SeqCst) != token {
            return AvailabilityStatus::Superseded;
        }

        let response = match outcome {
            Ok(response) if response.is_success() => response,
            Ok(response) => {
                tracing::warn!(room_id, status = response.status, "availability check rejected");
                return AvailabilityStatus::Failed;
            }
            Err(err) => {
                tracing::warn!(room_id, error = %err, "availability check failed");
                return AvailabilityStatus::Failed;
            }
        };

        match serde_json::from_value::<AvailabilityResult>(response.body) {
            Ok(AvailabilityResult { ok: true }) => AvailabilityStatus::Available,
            Ok(AvailabilityResult { ok: false }) => AvailabilityStatus::Unavailable,
            Err(err) => {
                tracing::warn!(room_id, error = %err, "malformed availability response");
                AvailabilityStatus::Failed
            }
        }
    }

    /// Create a booking. The backend call is not idempotent, so at most one
    /// submission may be in flight per service; a second confirmation while
    /// one is pending is refused rather than retried or queued.
    pub async fn submit(&self, request: &BookingRequest) -> Result<Booking, ApiError> {
        if self.submitting.swap(true, Ordering::SeqCst) {
            return Err(ApiError::SubmissionInFlight);
        }
        let result = self.submit_inner(request).await;
        self.submitting.store(false, Ordering::SeqCst);
        result
    }

    async fn submit_inner(&self, request: &BookingRequest) -> Result<Booking, ApiError> {
        let range = request.range()?;
        let guests = request.guests.max(1);

        let path = format!("rooms/{}/bookings", request.room_id);
        let body = json!({
            "check_in": range.check_in_param(),
            "check_out": range.check_out_param(),
            "guests": guests,
        });
        let response = self.transport.post(&path, body).await?;
        if !response.is_success() {
            return Err(submit_error(response));
        }

        let booking: Booking =
            serde_json::from_value(response.body).map_err(|err| ApiError::Decode(err.to_string()))?;
        tracing::info!(
            room_id = %request.room_id,
            check_in = %range.check_in_param(),
            check_out = %range.check_out_param(),
            guests,
            "booking created"
        );
        Ok(booking)
    }

    /// Upcoming bookings of one room (the owner's view).
    pub async fn room_bookings(&self, room_id: &str) -> Result<Vec<Booking>, ApiError> {
        let response = self
            .transport
            .get(&format!("rooms/{room_id}/bookings"), &[])
            .await?;
        parse_body(response)
    }

    /// The current user's upcoming room bookings.
    pub async fn my_room_bookings(&self) -> Result<Vec<MyBooking>, ApiError> {
        let response = self.transport.get("bookings/rooms", &[]).await?;
        parse_body(response)
    }

    /// The current user's upcoming experience bookings.
    pub async fn my_experience_bookings(&self) -> Result<Vec<ExperienceBooking>, ApiError> {
        let response = self.transport.get("bookings/experiences", &[]).await?;
        parse_body(response)
    }
}

fn submit_error(response: ApiResponse) -> ApiError {
    // The backend reports a lost check-then-book race as a 400 whose message
    // names the taken dates, not as a 409.
    if response.status == 400 && response.body.to_string().contains("already taken") {
        return ApiError::DateConflict;
    }
    ApiError::from_status(response.status, &response.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_conflict_message_maps_to_date_conflict() {
        let response = ApiResponse {
            status: 400,
            body: json!(["Those (or some of those) dates are already taken."]),
        };
        assert!(matches!(submit_error(response), ApiError::DateConflict));
    }

    #[test]
    fn test_other_400_maps_to_validation() {
        let response = ApiResponse {
            status: 400,
            body: json!({"check_in": ["Can't book in the past!"]}),
        };
        assert!(matches!(submit_error(response), ApiError::Validation(_)));
    }

    #[test]
    fn test_403_maps_to_unauthenticated() {
        let response = ApiResponse {
            status: 403,
            body: json!({"detail": "CSRF Failed"}),
        };
        assert!(matches!(submit_error(response), ApiError::Unauthenticated));
    }
}
