use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::models::room::RoomSummary;

/// A check-in/check-out pair of civil dates. No time-of-day, no timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl DateRange {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, ApiError> {
        if check_in > check_out {
            return Err(ApiError::Validation(format!(
                "check in {check_in} is after check out {check_out}"
            )));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Canonical wire form: zero-padded ISO-8601.
    pub fn check_in_param(&self) -> String {
        self.check_in.format("%Y-%m-%d").to_string()
    }

    pub fn check_out_param(&self) -> String {
        self.check_out.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
    pub room_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

impl BookingRequest {
    pub fn new(room_id: impl Into<String>, range: DateRange, guests: u32) -> Self {
        Self {
            room_id: room_id.into(),
            check_in: range.check_in,
            check_out: range.check_out,
            // a zero guest count means "unset" upstream
            guests: guests.max(1),
        }
    }

    pub fn range(&self) -> Result<DateRange, ApiError> {
        DateRange::new(self.check_in, self.check_out)
    }
}

/// Wire shape of the availability check response.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityResult {
    pub ok: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Booking {
    pub pk: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

/// A room booking of the current user, as listed under `bookings/rooms`.
#[derive(Debug, Clone, Deserialize)]
pub struct MyBooking {
    pub pk: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub room: RoomSummary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceBooking {
    pub pk: i64,
    pub experience_time: DateTime<FixedOffset>,
    pub guests: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_date_range_rejects_reversed_dates() {
        let result = DateRange::new(date("2024-06-18"), date("2024-06-15"));
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_date_range_allows_same_day() {
        assert!(DateRange::new(date("2024-06-15"), date("2024-06-15")).is_ok());
    }

    #[test]
    fn test_params_are_zero_padded_iso() {
        let range = DateRange::new(date("2024-06-05"), date("2024-06-08")).unwrap();
        assert_eq!(range.check_in_param(), "2024-06-05");
        assert_eq!(range.check_out_param(), "2024-06-08");
    }

    #[test]
    fn test_zero_guests_becomes_one() {
        let range = DateRange::new(date("2024-06-15"), date("2024-06-18")).unwrap();
        let request = BookingRequest::new("42", range, 0);
        assert_eq!(request.guests, 1);
    }

    #[test]
    fn test_booking_deserializes_iso_dates() {
        let booking: Booking = serde_json::from_value(serde_json::json!({
            "pk": 7,
            "check_in": "2024-06-15",
            "check_out": "2024-06-18",
            "guests": 2,
        }))
        .unwrap();
        assert_eq!(booking.check_in, date("2024-06-15"));
        assert_eq!(booking.guests, 2);
    }
}
