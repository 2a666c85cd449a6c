use chrono::{DateTime, NaiveDateTime, Utc};

use crate::server::error::AppError;

/// Parses a UTC timestamp from the "YYYY-MM-DD HH:MM" wire format.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Successfully parsed timestamp
/// - `Err(AppError::BadRequest)` - Malformed input, Korean client message
pub fn parse_datetime_from_string(value: &str) -> Result<DateTime<Utc>, AppError> {
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M")
        .map_err(|_| AppError::BadRequest("날짜 형식이 올바르지 않습니다.".to_string()))?;

    Ok(naive.and_utc())
}
