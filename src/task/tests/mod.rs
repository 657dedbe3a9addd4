//! Unit tests for the task module.

mod domain_tests;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a fixed instant for deterministic due-date checks.
#[derive(Debug, Clone)]
struct FixedClock(DateTime<Utc>);

impl FixedClock {
    fn at(now: DateTime<Utc>) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Fixed wall-clock instant used as "now" across the task tests.
fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Parses an RFC 3339 timestamp into a UTC datetime.
fn datetime(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}
