//! Billing cycle and time unit enums
//!
//! Both round-trip through `Display`/`FromStr` using the human-readable
//! labels the UI shows in dropdowns, which are also the values persisted to
//! the database.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A string did not match any variant of the named enum
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised {what} value: '{value}'")]
pub struct ParseEnumError {
    pub what: &'static str,
    pub value: String,
}

/// Billing cycle of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cycle {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Cycle {
    /// The human-readable label, also used as the persisted representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Cycle::Hourly => "Hourly",
            Cycle::Daily => "Daily",
            Cycle::Weekly => "Weekly",
            Cycle::Monthly => "Monthly",
            Cycle::Quarterly => "Quarterly",
            Cycle::Yearly => "Yearly",
        }
    }

    /// All variants, in display order
    pub fn all() -> [Cycle; 6] {
        [
            Cycle::Hourly,
            Cycle::Daily,
            Cycle::Weekly,
            Cycle::Monthly,
            Cycle::Quarterly,
            Cycle::Yearly,
        ]
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cycle {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cycle::all()
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                what: "Cycle",
                value: s.to_string(),
            })
    }
}

/// Unit a contract's work volume is counted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    /// The human-readable label, also used as the persisted representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Minute => "Minute",
            TimeUnit::Hour => "Hour",
            TimeUnit::Day => "Day",
        }
    }

    /// All variants, in display order
    pub fn all() -> [TimeUnit; 3] {
        [TimeUnit::Minute, TimeUnit::Hour, TimeUnit::Day]
    }

    /// One unit expressed as a duration
    pub fn to_duration(&self) -> Duration {
        match self {
            TimeUnit::Minute => Duration::minutes(1),
            TimeUnit::Hour => Duration::hours(1),
            TimeUnit::Day => Duration::days(1),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeUnit::all()
            .into_iter()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                what: "TimeUnit",
                value: s.to_string(),
            })
    }
}
