use chrono::NaiveDate;

use crate::errors::ApiError;
use crate::models::DateRange;

/// Parse one calendar-picker value, e.g. `"6.15.2024, 12:00:00 AM"`, into a
/// civil date. The picker's locale formatter embeds a time-of-day segment
/// that is meaningless for a whole-day booking; it is dropped.
pub fn parse_picker_date(raw: &str) -> Result<NaiveDate, ApiError> {
    let segments: Vec<&str> = raw.split('.').collect();
    if segments.len() < 3 {
        return Err(ApiError::Validation(format!(
            "unrecognized calendar value: {raw:?}"
        )));
    }

    let month: u32 = parse_segment(segments[0], raw)?;
    let day: u32 = parse_segment(segments[1], raw)?;
    // The year segment may still carry the time component ("2024, 12:00:00 AM")
    // when the locale joins it with a comma rather than a dot.
    let year_part = segments[2].trim();
    let year: i32 = parse_segment(year_part.split(',').next().unwrap_or(year_part), raw)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ApiError::Validation(format!("{raw:?} is not a real calendar date"))
    })
}

fn parse_segment<T: std::str::FromStr>(segment: &str, raw: &str) -> Result<T, ApiError> {
    segment
        .trim()
        .parse()
        .map_err(|_| ApiError::Validation(format!("unrecognized calendar value: {raw:?}")))
}

/// Normalize a fully selected picker range into canonical civil dates.
pub fn normalize(raw_start: &str, raw_end: &str) -> Result<DateRange, ApiError> {
    let check_in = parse_picker_date(raw_start)?;
    let check_out = parse_picker_date(raw_end)?;
    DateRange::new(check_in, check_out)
}

/// `None` until the picker has produced both ends of the range; a partial
/// selection has no representation and must not reach the backend.
pub fn normalize_selection(values: &[&str]) -> Option<Result<DateRange, ApiError>> {
    if values.len() < 2 {
        return None;
    }
    Some(normalize(values[0], values[1]))
}
