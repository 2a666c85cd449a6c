//! Appointment parameters and the parsed recurrence rule.

use chrono::{DateTime, Utc, Weekday};

use crate::{model::schedule::RecurrenceDto, server::error::AppError};

/// Default occurrence count when a recurring create omits one.
pub const DEFAULT_OCCURRENCES: u32 = 10;
/// Upper bound on occurrences a single rule may generate.
pub const MAX_OCCURRENCES: u32 = 100;

#[derive(Debug, Clone)]
pub struct CreateAppointmentParams {
    pub user_id: i32,
    pub title: String,
    pub memo: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub recurrence_group_id: Option<String>,
}

/// Validated recurrence rule, parsed from the wire DTO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceRule {
    /// Repeats on a set of weekdays every `interval` weeks.
    Weekly {
        weekdays: Vec<Weekday>,
        interval: u32,
    },
    /// Repeats on a set of month days every `interval` months. Days that do
    /// not exist in a month are skipped.
    Monthly {
        month_days: Vec<u32>,
        interval: u32,
    },
}

impl RecurrenceRule {
    /// Validates the wire DTO into a rule and an occurrence count.
    ///
    /// # Returns
    /// - `Ok((rule, count))` - Parsed rule and clamped occurrence count
    /// - `Err(AppError::BadRequest)` - Unknown frequency, empty day set, or
    ///   out-of-range values; Korean client message
    pub fn from_dto(dto: &RecurrenceDto) -> Result<(Self, u32), AppError> {
        let interval = dto.interval.unwrap_or(1).max(1);
        let count = dto
            .count
            .unwrap_or(DEFAULT_OCCURRENCES)
            .min(MAX_OCCURRENCES);

        let rule = match dto.frequency.as_str() {
            "weekly" => {
                let numbers = dto
                    .weekdays
                    .as_deref()
                    .filter(|days| !days.is_empty())
                    .ok_or_else(invalid_rule)?;

                let mut weekdays = Vec::with_capacity(numbers.len());
                for number in numbers {
                    weekdays.push(weekday_from_iso(*number).ok_or_else(invalid_rule)?);
                }
                weekdays.sort_by_key(|day| day.number_from_monday());
                weekdays.dedup();

                RecurrenceRule::Weekly { weekdays, interval }
            }
            "monthly" => {
                let days = dto
                    .month_days
                    .as_deref()
                    .filter(|days| !days.is_empty())
                    .ok_or_else(invalid_rule)?;

                if days.iter().any(|day| *day < 1 || *day > 31) {
                    return Err(invalid_rule());
                }

                let mut month_days = days.to_vec();
                month_days.sort_unstable();
                month_days.dedup();

                RecurrenceRule::Monthly {
                    month_days,
                    interval,
                }
            }
            _ => return Err(invalid_rule()),
        };

        Ok((rule, count))
    }
}

fn invalid_rule() -> AppError {
    AppError::BadRequest("반복 규칙이 올바르지 않습니다.".to_string())
}

fn weekday_from_iso(number: u8) -> Option<Weekday> {
    match number {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}
