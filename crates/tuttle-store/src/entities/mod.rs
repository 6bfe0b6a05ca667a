//! `Entity` impls for the domain models
//!
//! One module per table. Column order here is the single source of truth:
//! `COLUMNS`, `values()`, and `from_row` in each module follow it.

pub mod client;
pub mod contact;
pub mod contract;
pub mod profile;

use chrono::NaiveDate;
use rusqlite::types::{Type, Value};
use rusqlite::Row;
use std::str::FromStr;

/// Owned TEXT value
pub(crate) fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

pub(crate) fn opt_text(s: Option<&str>) -> Value {
    match s {
        Some(s) => text(s),
        None => Value::Null,
    }
}

/// Dates persist as ISO `YYYY-MM-DD` TEXT, which rusqlite's chrono support
/// reads back as `NaiveDate`
pub(crate) fn date(d: NaiveDate) -> Value {
    Value::Text(d.format("%Y-%m-%d").to_string())
}

pub(crate) fn opt_date(d: Option<NaiveDate>) -> Value {
    match d {
        Some(d) => date(d),
        None => Value::Null,
    }
}

pub(crate) fn opt_int(v: Option<i64>) -> Value {
    match v {
        Some(v) => Value::Integer(v),
        None => Value::Null,
    }
}

pub(crate) fn flag(b: bool) -> Value {
    Value::Integer(if b { 1 } else { 0 })
}

/// Read a TEXT column and parse it into an enum-like type
///
/// Parse failures surface as conversion errors against the column, so the
/// store's classification layer reports them as serialization faults.
pub(crate) fn parse_text_column<T>(row: &Row<'_>, column: &str) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let stmt: &rusqlite::Statement<'_> = row.as_ref();
    let idx = stmt.column_index(column)?;
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
