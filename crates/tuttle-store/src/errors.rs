//! Error handling for tuttle-store
//!
//! Wraps the tuttle-core error facility with store-specific constructors
//! and the rusqlite classification boundary.

use tuttle_core::errors::{TuttleError, TuttleErrorKind};

/// Result type alias using TuttleError
pub type Result<T> = std::result::Result<T, TuttleError>;

/// Zero rows where exactly one was expected
pub fn not_found(table: &str, id: i64) -> TuttleError {
    TuttleError::new(TuttleErrorKind::NotFound)
        .with_table(table)
        .with_entity_id(id)
        .with_message("no row matched")
}

/// More than one row matched an identifier expected to be unique
pub fn multiple_results(table: &str, id: i64, count: usize) -> TuttleError {
    TuttleError::new(TuttleErrorKind::MultipleResults)
        .with_table(table)
        .with_entity_id(id)
        .with_message(format!("{} rows matched a unique id", count))
}

/// A singleton table holds more than one row
pub fn invariant_violation(table: &str, count: usize) -> TuttleError {
    TuttleError::new(TuttleErrorKind::InvariantViolation)
        .with_table(table)
        .with_message(format!("expected at most one row, found {}", count))
}

/// Fatal connection or file failure; not retried
pub fn storage_unavailable(op: &str, reason: impl Into<String>) -> TuttleError {
    TuttleError::new(TuttleErrorKind::StorageUnavailable)
        .with_op(op)
        .with_message(reason)
}

/// Classify a rusqlite error raised while running a query
///
/// Missing tables/columns indicate schema drift between the migrations and
/// the mapping layer; everything else is reported against the storage layer.
pub fn from_rusqlite(op: &str, table: &str, err: rusqlite::Error) -> TuttleError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(_, Some(msg))
            if msg.contains("no such table") || msg.contains("no such column") =>
        {
            TuttleErrorKind::Schema
        }
        rusqlite::Error::InvalidColumnName(_) | rusqlite::Error::InvalidColumnType(_, _, _) => {
            TuttleErrorKind::Schema
        }
        rusqlite::Error::FromSqlConversionFailure(_, _, _) => TuttleErrorKind::Serialization,
        _ => TuttleErrorKind::StorageUnavailable,
    };
    TuttleError::new(kind)
        .with_op(op)
        .with_table(table)
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_carries_context() {
        let err = not_found("contracts", 9);
        assert_eq!(err.kind(), TuttleErrorKind::NotFound);
        assert_eq!(err.table(), Some("contracts"));
        assert_eq!(err.entity_id(), Some(9));
    }

    #[test]
    fn test_missing_table_classified_as_schema() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let raw = conn
            .prepare("SELECT * FROM does_not_exist")
            .expect_err("table is missing");
        let err = from_rusqlite("query", "does_not_exist", raw);
        assert_eq!(err.kind(), TuttleErrorKind::Schema);
    }
}
