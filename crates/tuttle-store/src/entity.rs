//! Entity mapping trait and typed column handles
//!
//! `Entity` is the seam between the domain models and SQLite: one table per
//! entity type, integer primary key assigned by the store, columns listed in
//! a fixed order that `values()` and `from_row` both follow.
//!
//! `Field` replaces stringly-typed filter columns: a filter over a column
//! that does not exist, or with a value of the wrong type, is a compile
//! error instead of a runtime schema failure.

use rusqlite::types::Value;
use rusqlite::Row;
use std::marker::PhantomData;

/// A persisted record type with a store-assigned integer identifier
pub trait Entity: Sized {
    /// Table name
    const TABLE: &'static str;

    /// Column names excluding `id`, in the order `values()` yields them
    const COLUMNS: &'static [&'static str];

    /// The assigned identifier, or None if never persisted
    fn id(&self) -> Option<i64>;

    /// Record the identifier the store assigned on insert
    fn set_id(&mut self, id: i64);

    /// Column values in `COLUMNS` order
    fn values(&self) -> Vec<Value>;

    /// Rebuild the entity from a row selected as `id, COLUMNS...`
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// Typed handle on one column of one entity's table
///
/// Constructed as `const` items next to each `Entity` impl, so the set of
/// filterable columns is fixed at compile time.
pub struct Field<E, T> {
    column: &'static str,
    _marker: PhantomData<fn() -> (E, T)>,
}

impl<E, T> Field<E, T> {
    /// Create a handle for the named column
    ///
    /// Callers outside the entity modules have no reason to mint their own;
    /// use the constants exported beside each entity.
    pub const fn new(column: &'static str) -> Self {
        Self {
            column,
            _marker: PhantomData,
        }
    }

    /// The column name
    pub fn column(&self) -> &'static str {
        self.column
    }
}

// Derives would put bounds on E and T; the handle itself is always copyable.
impl<E, T> Clone for Field<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, T> Copy for Field<E, T> {}

impl<E, T> std::fmt::Debug for Field<E, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("column", &self.column).finish()
    }
}
