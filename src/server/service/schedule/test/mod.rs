use super::*;

use chrono::{TimeZone, Timelike, Weekday};

mod expand_monthly;
mod expand_weekly;

fn anchor(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}
