use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::time::{Cycle, TimeUnit};

/// Contract - an agreement with a client over rate, volume, and dates
///
/// Contracts carry the date fields the screen-level views partition on:
/// a contract is *upcoming* before its start date, *active* between start
/// and end while not marked completed, and *completed* once the flag is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Store-assigned identifier; None until first persisted
    pub id: Option<i64>,
    pub title: String,
    /// Client this contract is billed to; None while still a draft
    pub client_id: Option<i64>,
    pub signature_date: NaiveDate,
    pub start_date: NaiveDate,
    /// Open-ended contracts have no end date
    pub end_date: Option<NaiveDate>,
    /// Rate per unit, in `currency`
    pub rate: f64,
    /// ISO 4217 currency code
    pub currency: String,
    /// VAT rate as a fraction (0.19 for 19%)
    pub vat_rate: f64,
    pub unit: TimeUnit,
    pub units_per_workday: f64,
    /// Contracted volume in units, if capped
    pub volume: Option<i64>,
    /// Term of payment in days, if agreed
    pub term_of_payment: Option<i64>,
    pub billing_cycle: Cycle,
    pub is_completed: bool,
}

impl Contract {
    /// Create a new, not-yet-persisted contract with the mandatory fields
    ///
    /// Optional fields start unset; `billing_cycle` defaults to hourly, the
    /// most common arrangement.
    pub fn new(
        title: impl Into<String>,
        signature_date: NaiveDate,
        start_date: NaiveDate,
        rate: f64,
        currency: impl Into<String>,
        unit: TimeUnit,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            client_id: None,
            signature_date,
            start_date,
            end_date: None,
            rate,
            currency: currency.into(),
            vat_rate: 0.0,
            unit,
            units_per_workday: 8.0,
            volume: None,
            term_of_payment: None,
            billing_cycle: Cycle::Hourly,
            is_completed: false,
        }
    }

    /// True when the contract has started, has not ended, and is not
    /// marked completed
    pub fn is_active(&self, today: NaiveDate) -> bool {
        if self.is_completed {
            return false;
        }
        if self.start_date > today {
            return false;
        }
        match self.end_date {
            Some(end) => end >= today,
            None => true,
        }
    }

    /// True when the contract starts strictly after `today`
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.start_date > today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contract(start: NaiveDate, end: Option<NaiveDate>) -> Contract {
        let mut c = Contract::new(
            "Consulting",
            date(2023, 1, 1),
            start,
            90.0,
            "EUR",
            TimeUnit::Hour,
        );
        c.end_date = end;
        c
    }

    #[test]
    fn test_active_within_date_range() {
        let c = contract(date(2023, 2, 1), Some(date(2023, 6, 30)));
        assert!(c.is_active(date(2023, 3, 15)));
        assert!(c.is_active(date(2023, 2, 1)));
        assert!(c.is_active(date(2023, 6, 30)));
    }

    #[test]
    fn test_not_active_before_start_or_after_end() {
        let c = contract(date(2023, 2, 1), Some(date(2023, 6, 30)));
        assert!(!c.is_active(date(2023, 1, 31)));
        assert!(!c.is_active(date(2023, 7, 1)));
    }

    #[test]
    fn test_open_ended_contract_stays_active() {
        let c = contract(date(2023, 2, 1), None);
        assert!(c.is_active(date(2030, 1, 1)));
    }

    #[test]
    fn test_completed_contract_is_never_active() {
        let mut c = contract(date(2023, 2, 1), None);
        c.is_completed = true;
        assert!(!c.is_active(date(2023, 3, 15)));
    }

    #[test]
    fn test_upcoming_is_strictly_before_start() {
        let c = contract(date(2023, 2, 1), None);
        assert!(c.is_upcoming(date(2023, 1, 31)));
        assert!(!c.is_upcoming(date(2023, 2, 1)));
    }
}
