//! Recurring-date generator.
//!
//! Expands a recurrence rule into concrete occurrence timestamps. This is
//! plain date arithmetic on naive wall-clock dates: the time of day of the
//! anchor is carried to every occurrence and no timezone adjustment is made.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::server::model::schedule::RecurrenceRule;

/// Upper bound on months scanned for a monthly rule, so a day set that a
/// month cycle can never satisfy (e.g. day 30 every 12 months starting in
/// February) terminates instead of spinning.
const MAX_MONTHS_SCANNED: u32 = 600;

/// Expands a rule into at most `count` occurrences.
///
/// The first emitted occurrence is the earliest candidate at or after the
/// anchor; the anchor itself is included when it matches the rule. Weekly
/// rules step whole weeks from the anchor's week, monthly rules step months
/// from the anchor's month, skipping days that do not exist in a month.
pub fn expand(anchor: DateTime<Utc>, rule: &RecurrenceRule, count: u32) -> Vec<DateTime<Utc>> {
    let time = anchor.time();
    let start_date = anchor.date_naive();
    let mut occurrences: Vec<DateTime<Utc>> = Vec::with_capacity(count as usize);

    if count == 0 {
        return occurrences;
    }

    match rule {
        RecurrenceRule::Weekly { weekdays, interval } => {
            let mut week_start = start_date
                - Duration::days(i64::from(start_date.weekday().num_days_from_monday()));

            'weeks: loop {
                for weekday in weekdays {
                    let date =
                        week_start + Duration::days(i64::from(weekday.num_days_from_monday()));
                    if date < start_date {
                        continue;
                    }

                    occurrences.push(date.and_time(time).and_utc());
                    if occurrences.len() as u32 == count {
                        break 'weeks;
                    }
                }

                week_start += Duration::weeks(i64::from(*interval));
            }
        }
        RecurrenceRule::Monthly {
            month_days,
            interval,
        } => {
            let mut year = start_date.year();
            let mut month = start_date.month();
            let mut months_scanned = 0;

            'months: while months_scanned < MAX_MONTHS_SCANNED {
                for day in month_days {
                    let Some(date) = NaiveDate::from_ymd_opt(year, month, *day) else {
                        // Day doesn't exist in this month (e.g. Apr 31): skip.
                        continue;
                    };
                    if date < start_date {
                        continue;
                    }

                    occurrences.push(date.and_time(time).and_utc());
                    if occurrences.len() as u32 == count {
                        break 'months;
                    }
                }

                let advanced = month - 1 + interval;
                year += (advanced / 12) as i32;
                month = advanced % 12 + 1;
                months_scanned += interval;
            }
        }
    }

    occurrences
}

#[cfg(test)]
#[path = "test/mod.rs"]
mod test;
