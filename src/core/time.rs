use chrono::{DateTime, Duration, Utc};

pub const FIXED_TIME_ENV: &str = "PHISHSCOPE_FIXED_TIME";

pub fn now_utc() -> DateTime<Utc> {
    if let Ok(value) = std::env::var(FIXED_TIME_ENV) {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&value) {
            return dt.with_timezone(&Utc);
        }
    }
    Utc::now()
}

/// Whole days elapsed between `since` and `now`, truncated toward zero.
pub fn elapsed_days(since: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    now.signed_duration_since(since).num_days()
}

pub fn days_before(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}
