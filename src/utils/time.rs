use chrono::{Datelike, Local};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "now" for the account store.
///
/// The store only needs the calendar year (for auto-advancement) and a
/// millisecond timestamp (for record ids), so tests can pin both.
pub trait Clock {
    fn current_year(&self) -> i32;
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }

    fn now_millis(&self) -> i64 {
        current_timestamp_millis()
    }
}

/// Clock frozen at a given year and timestamp
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub year: i32,
    pub millis: i64,
}

impl FixedClock {
    pub fn new(year: i32, millis: i64) -> Self {
        Self { year, millis }
    }
}

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.year
    }

    fn now_millis(&self) -> i64 {
        self.millis
    }
}

pub fn current_timestamp_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Number of academic years a program has been running, counting the
/// start year as year 1.
pub fn elapsed_program_years(start_year: i32, current_year: i32) -> i32 {
    current_year - start_year + 1
}

/// Next record id: the creation timestamp, bumped past `last` so ids stay
/// strictly increasing when two records are created in the same millisecond.
pub fn next_id(now_millis: i64, last: Option<i64>) -> i64 {
    match last {
        Some(last) if last >= now_millis => last + 1,
        _ => now_millis,
    }
}
