//! Current-time source for date-derived predicates
//!
//! Contract activity is computed against "today", so the facade takes the
//! clock injected rather than reading the system time inline. Tests pin a
//! fixed date; production uses `SystemClock`.

use chrono::{Local, NaiveDate};

/// Source of the current date
pub trait Clock {
    /// The current local date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
