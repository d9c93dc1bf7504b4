use boardkit::format::{days_ago_at, time_ago_at, NEVER_DAYS};
use chrono::{TimeZone, Utc};

fn now() -> chrono::DateTime<chrono::Utc> {
    Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap()
}

#[test]
fn buckets_by_age() {
    assert_eq!(time_ago_at(Some("2026-08-23T11:59:30Z"), now()), "just now");
    assert_eq!(time_ago_at(Some("2026-08-23T11:15:00Z"), now()), "45m ago");
    assert_eq!(time_ago_at(Some("2026-08-23T04:00:00Z"), now()), "8h ago");
    assert_eq!(time_ago_at(Some("2026-08-22T06:00:00Z"), now()), "1 day ago");
    assert_eq!(time_ago_at(Some("2026-08-10T12:00:00Z"), now()), "13 days ago");
}

#[test]
fn missing_or_bad_timestamps_degrade() {
    assert_eq!(time_ago_at(None, now()), "?");
    assert_eq!(time_ago_at(Some("not a date"), now()), "?");
    assert_eq!(days_ago_at(None, now()), NEVER_DAYS);
    assert_eq!(days_ago_at(Some(""), now()), NEVER_DAYS);
}

#[test]
fn days_ago_counts_whole_days() {
    assert_eq!(days_ago_at(Some("2026-08-20T12:00:00Z"), now()), 3);
    assert_eq!(days_ago_at(Some("2026-08-23T01:00:00Z"), now()), 0);
}

#[test]
fn timezone_offsets_are_normalized() {
    // 14:00 at +02:00 is noon UTC.
    assert_eq!(time_ago_at(Some("2026-08-23T14:00:00+02:00"), now()), "just now");
}
