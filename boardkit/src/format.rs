//! Relative time formatting for ISO-8601 timestamps.

use chrono::{DateTime, Utc};

const MISSING: &str = "?";
/// Sentinel age for missing or unparsable timestamps, so they sink to the
/// bottom of freshness orderings.
pub const NEVER_DAYS: i64 = 9999;

fn parse_iso(iso: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(iso)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// "just now", "5m ago", "3h ago", "1 day ago", "12 days ago"; `"?"` for
/// missing or unparsable input.
pub fn time_ago(iso: Option<&str>) -> String {
    time_ago_at(iso, Utc::now())
}

/// [`time_ago`] against an explicit "now", for deterministic output.
pub fn time_ago_at(iso: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(then) = iso.and_then(parse_iso) else {
        return MISSING.to_string();
    };
    let seconds = (now - then).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }
    if seconds < 3600 {
        return format!("{}m ago", seconds / 60);
    }
    if seconds < 86400 {
        return format!("{}h ago", seconds / 3600);
    }
    let days = seconds / 86400;
    if days == 1 {
        "1 day ago".to_string()
    } else {
        format!("{days} days ago")
    }
}

/// Whole days since the timestamp, [`NEVER_DAYS`] when missing.
pub fn days_ago(iso: Option<&str>) -> i64 {
    days_ago_at(iso, Utc::now())
}

pub fn days_ago_at(iso: Option<&str>, now: DateTime<Utc>) -> i64 {
    match iso.and_then(parse_iso) {
        Some(then) => (now - then).num_days(),
        None => NEVER_DAYS,
    }
}
