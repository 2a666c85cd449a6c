use super::*;

/// Tests a simple weekly rule starting on a matching day.
///
/// 2026-03-02 is a Monday; Mon/Wed every week from there.
///
/// Expected: Mon 2, Wed 4, Mon 9, Wed 11 — anchor included, time carried
#[test]
fn expands_weekday_set_from_matching_anchor() {
    let rule = RecurrenceRule::Weekly {
        weekdays: vec![Weekday::Mon, Weekday::Wed],
        interval: 1,
    };

    let occurrences = expand(anchor(2026, 3, 2, 9, 30), &rule, 4);

    assert_eq!(
        occurrences,
        vec![
            anchor(2026, 3, 2, 9, 30),
            anchor(2026, 3, 4, 9, 30),
            anchor(2026, 3, 9, 9, 30),
            anchor(2026, 3, 11, 9, 30),
        ]
    );
}

/// Tests that days earlier in the anchor week are not emitted.
///
/// 2026-03-05 is a Thursday; a Mon/Fri rule must start with Fri 6, not
/// Mon 2.
///
/// Expected: Fri 6, then Mon 9
#[test]
fn skips_days_before_anchor_in_first_week() {
    let rule = RecurrenceRule::Weekly {
        weekdays: vec![Weekday::Mon, Weekday::Fri],
        interval: 1,
    };

    let occurrences = expand(anchor(2026, 3, 5, 18, 0), &rule, 2);

    assert_eq!(
        occurrences,
        vec![anchor(2026, 3, 6, 18, 0), anchor(2026, 3, 9, 18, 0)]
    );
}

/// Tests a two-week interval.
///
/// Expected: Mondays two weeks apart
#[test]
fn honors_week_interval() {
    let rule = RecurrenceRule::Weekly {
        weekdays: vec![Weekday::Mon],
        interval: 2,
    };

    let occurrences = expand(anchor(2026, 3, 2, 8, 0), &rule, 3);

    assert_eq!(
        occurrences,
        vec![
            anchor(2026, 3, 2, 8, 0),
            anchor(2026, 3, 16, 8, 0),
            anchor(2026, 3, 30, 8, 0),
        ]
    );
}

/// Tests expansion across a month boundary.
///
/// Expected: the series continues into April without gaps
#[test]
fn crosses_month_boundary() {
    let rule = RecurrenceRule::Weekly {
        weekdays: vec![Weekday::Tue],
        interval: 1,
    };

    let occurrences = expand(anchor(2026, 3, 24, 7, 0), &rule, 3);

    assert_eq!(
        occurrences,
        vec![
            anchor(2026, 3, 24, 7, 0),
            anchor(2026, 3, 31, 7, 0),
            anchor(2026, 4, 7, 7, 0),
        ]
    );
}

/// Tests that the time of day of the anchor is preserved.
///
/// Expected: every occurrence at 21:45
#[test]
fn carries_anchor_time_of_day() {
    let rule = RecurrenceRule::Weekly {
        weekdays: vec![Weekday::Sun],
        interval: 1,
    };

    let occurrences = expand(anchor(2026, 3, 1, 21, 45), &rule, 2);

    assert!(occurrences
        .iter()
        .all(|occurrence| occurrence.hour() == 21 && occurrence.minute() == 45));
}

/// Tests a zero count.
///
/// Expected: no occurrences
#[test]
fn zero_count_yields_nothing() {
    let rule = RecurrenceRule::Weekly {
        weekdays: vec![Weekday::Mon],
        interval: 1,
    };

    assert!(expand(anchor(2026, 3, 2, 9, 0), &rule, 0).is_empty());
}
