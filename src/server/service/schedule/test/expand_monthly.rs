use super::*;

/// Tests a simple monthly rule.
///
/// Expected: the 10th of three consecutive months
#[test]
fn expands_month_day_set() {
    let rule = RecurrenceRule::Monthly {
        month_days: vec![10],
        interval: 1,
    };

    let occurrences = expand(anchor(2026, 1, 10, 11, 0), &rule, 3);

    assert_eq!(
        occurrences,
        vec![
            anchor(2026, 1, 10, 11, 0),
            anchor(2026, 2, 10, 11, 0),
            anchor(2026, 3, 10, 11, 0),
        ]
    );
}

/// Tests that nonexistent days are skipped, not clamped.
///
/// Day 31 starting in January: February and April have no 31st, so the
/// series jumps Jan 31 → Mar 31 → May 31.
///
/// Expected: only months that actually have a 31st
#[test]
fn skips_months_without_the_day() {
    let rule = RecurrenceRule::Monthly {
        month_days: vec![31],
        interval: 1,
    };

    let occurrences = expand(anchor(2026, 1, 31, 10, 0), &rule, 3);

    assert_eq!(
        occurrences,
        vec![
            anchor(2026, 1, 31, 10, 0),
            anchor(2026, 3, 31, 10, 0),
            anchor(2026, 5, 31, 10, 0),
        ]
    );
}

/// Tests that days before the anchor in its month are dropped.
///
/// Rule on the 5th and 20th anchored on the 12th: the 5th of the anchor
/// month is in the past.
///
/// Expected: Jan 20, then Feb 5
#[test]
fn drops_days_before_anchor_in_first_month() {
    let rule = RecurrenceRule::Monthly {
        month_days: vec![5, 20],
        interval: 1,
    };

    let occurrences = expand(anchor(2026, 1, 12, 9, 0), &rule, 2);

    assert_eq!(
        occurrences,
        vec![anchor(2026, 1, 20, 9, 0), anchor(2026, 2, 5, 9, 0)]
    );
}

/// Tests the month interval with a year rollover.
///
/// Expected: every third month, continuing into the next year
#[test]
fn honors_month_interval_across_year_boundary() {
    let rule = RecurrenceRule::Monthly {
        month_days: vec![15],
        interval: 3,
    };

    let occurrences = expand(anchor(2026, 10, 15, 12, 0), &rule, 3);

    assert_eq!(
        occurrences,
        vec![
            anchor(2026, 10, 15, 12, 0),
            anchor(2027, 1, 15, 12, 0),
            anchor(2027, 4, 15, 12, 0),
        ]
    );
}

/// Tests the scan guard against rules no month can ever satisfy.
///
/// Day 30 every 12 months anchored in February never lands on a valid
/// date.
///
/// Expected: empty result instead of an endless loop
#[test]
fn terminates_on_unsatisfiable_rule() {
    let rule = RecurrenceRule::Monthly {
        month_days: vec![30],
        interval: 12,
    };

    let occurrences = expand(anchor(2026, 2, 1, 9, 0), &rule, 5);

    assert!(occurrences.is_empty());
}
