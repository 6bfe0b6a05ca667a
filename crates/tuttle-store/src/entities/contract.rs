//! Table mapping for contracts
//!
//! The widest mapping in the store: dates as ISO TEXT, enums by their
//! display label, the completion flag as 0/1.

use super::{date, flag, opt_date, opt_int, parse_text_column, text};
use crate::entity::{Entity, Field};
use rusqlite::types::Value;
use rusqlite::Row;
use tuttle_core::model::Contract;

/// Filter handle: contracts by client
pub const CLIENT_ID: Field<Contract, i64> = Field::new("client_id");

/// Filter handle: contracts by completion flag
pub const IS_COMPLETED: Field<Contract, bool> = Field::new("is_completed");

/// Filter handle: contracts by currency
pub const CURRENCY: Field<Contract, String> = Field::new("currency");

impl Entity for Contract {
    const TABLE: &'static str = "contracts";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "client_id",
        "signature_date",
        "start_date",
        "end_date",
        "rate",
        "currency",
        "vat_rate",
        "unit",
        "units_per_workday",
        "volume",
        "term_of_payment",
        "billing_cycle",
        "is_completed",
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            text(&self.title),
            opt_int(self.client_id),
            date(self.signature_date),
            date(self.start_date),
            opt_date(self.end_date),
            Value::Real(self.rate),
            text(&self.currency),
            Value::Real(self.vat_rate),
            text(self.unit.as_str()),
            Value::Real(self.units_per_workday),
            opt_int(self.volume),
            opt_int(self.term_of_payment),
            text(self.billing_cycle.as_str()),
            flag(self.is_completed),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Contract {
            id: Some(row.get("id")?),
            title: row.get("title")?,
            client_id: row.get("client_id")?,
            signature_date: row.get("signature_date")?,
            start_date: row.get("start_date")?,
            end_date: row.get("end_date")?,
            rate: row.get("rate")?,
            currency: row.get("currency")?,
            vat_rate: row.get("vat_rate")?,
            unit: parse_text_column(row, "unit")?,
            units_per_workday: row.get("units_per_workday")?,
            volume: row.get("volume")?,
            term_of_payment: row.get("term_of_payment")?,
            billing_cycle: parse_text_column(row, "billing_cycle")?,
            is_completed: row.get("is_completed")?,
        })
    }
}
