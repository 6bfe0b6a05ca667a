//! Generic entity store
//!
//! Type-parameterized persistence operations usable by any `Entity` shape,
//! over a single local database file. Every operation opens a short-lived
//! connection scoped to that call, so no connection state spans operations;
//! writes commit immediately with no caller-visible transaction.

use crate::db;
use crate::entity::{Entity, Field};
use crate::errors::{
    from_rusqlite, invariant_violation, multiple_results, not_found, Result,
};
use crate::migrations::apply_migrations;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, ToSql};
use std::path::PathBuf;
use tuttle_core::errors::{TuttleError, TuttleErrorKind};

/// Generic CRUD facade over the local SQLite file
///
/// One instance per process is the expected usage; the schema is ensured
/// once at construction and each operation connects on its own.
#[derive(Debug, Clone)]
pub struct EntityStore {
    db_path: PathBuf,
}

impl EntityStore {
    /// Open (creating if needed) the database at `path` and ensure the schema
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = path.into();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TuttleError::new(TuttleErrorKind::Io)
                    .with_op("open")
                    .with_message(format!(
                        "could not create data directory {}: {}",
                        parent.display(),
                        e
                    ))
            })?;
        }

        let mut conn = db::open(&db_path)?;
        apply_migrations(&mut conn)?;
        tracing::info!(path = %db_path.display(), "opened entity store");

        Ok(Self { db_path })
    }

    /// Open the store at the per-user default path (`~/.tuttle/tuttle.db`)
    pub fn open_default() -> Result<Self> {
        Self::open(db::default_db_path()?)
    }

    /// The database file this store reads and writes
    pub fn db_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Short-lived connection for a single operation
    fn connect(&self) -> Result<Connection> {
        db::open(&self.db_path)
    }

    /// `SELECT id, columns... FROM table` in `from_row` order
    fn select_sql<E: Entity>() -> String {
        format!(
            "SELECT id, {} FROM {} ",
            E::COLUMNS.join(", "),
            E::TABLE
        )
    }

    /// All rows of the entity's table, ordered by id
    ///
    /// An empty table is a valid, non-error result (logged at warn level,
    /// matching how screens want to notice-but-not-fail on empty data).
    pub fn query<E: Entity>(&self) -> Result<Vec<E>> {
        tracing::debug!(table = E::TABLE, "querying all rows");
        let conn = self.connect()?;
        let sql = Self::select_sql::<E>() + "ORDER BY id";
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| from_rusqlite("query", E::TABLE, e))?;
        let entities: Vec<E> = stmt
            .query_map([], E::from_row)
            .map_err(|e| from_rusqlite("query", E::TABLE, e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| from_rusqlite("query", E::TABLE, e))?;

        if entities.is_empty() {
            tracing::warn!(table = E::TABLE, "no rows found");
        } else {
            tracing::info!(table = E::TABLE, count = entities.len(), "rows loaded");
        }
        Ok(entities)
    }

    /// The row with the given id, or `None` if absent
    ///
    /// # Errors
    ///
    /// `MultipleResults` if more than one row matches the id; the primary
    /// key should make that impossible, so a hit means corruption.
    pub fn query_by_id<E: Entity>(&self, id: i64) -> Result<Option<E>> {
        tracing::debug!(table = E::TABLE, id, "querying by id");
        let conn = self.connect()?;
        let sql = Self::select_sql::<E>() + "WHERE id = ?";
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| from_rusqlite("query_by_id", E::TABLE, e))?;
        let mut matches: Vec<E> = stmt
            .query_map([id], E::from_row)
            .map_err(|e| from_rusqlite("query_by_id", E::TABLE, e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| from_rusqlite("query_by_id", E::TABLE, e))?;

        match matches.len() {
            0 => {
                tracing::warn!(table = E::TABLE, id, "no row with id");
                Ok(None)
            }
            1 => Ok(Some(matches.remove(0))),
            n => Err(multiple_results(E::TABLE, id, n).with_op("query_by_id")),
        }
    }

    /// All rows whose `field` equals `value`
    ///
    /// The typed handle fixes both the column and the value type at compile
    /// time, so there is no invalid-field failure mode at runtime.
    pub fn query_where<E: Entity, T: ToSql>(&self, field: Field<E, T>, value: &T) -> Result<Vec<E>> {
        tracing::debug!(table = E::TABLE, column = field.column(), "querying by field");
        let conn = self.connect()?;
        let sql = format!(
            "{}WHERE {} = ? ORDER BY id",
            Self::select_sql::<E>(),
            field.column()
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| from_rusqlite("query_where", E::TABLE, e))?;
        let entities: Vec<E> = stmt
            .query_map([value], E::from_row)
            .map_err(|e| from_rusqlite("query_where", E::TABLE, e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| from_rusqlite("query_where", E::TABLE, e))?;

        if entities.is_empty() {
            tracing::warn!(table = E::TABLE, column = field.column(), "no rows matched");
        }
        Ok(entities)
    }

    /// The only row of a singleton table, or `None` on an empty table
    ///
    /// # Errors
    ///
    /// `InvariantViolation` if the table holds more than one row.
    pub fn query_the_only<E: Entity>(&self) -> Result<Option<E>> {
        let mut entities = self.query::<E>()?;
        match entities.len() {
            0 => Ok(None),
            1 => Ok(entities.pop()),
            n => Err(invariant_violation(E::TABLE, n).with_op("query_the_only")),
        }
    }

    /// Insert or update the entity, distinguished by identifier presence
    ///
    /// Inserts assign the new rowid back onto the entity and return it;
    /// updates rewrite every column of the existing row in place.
    ///
    /// # Errors
    ///
    /// `NotFound` when updating an id that matches no row; the original
    /// row was deleted underneath the caller, and silently resurrecting it
    /// would hide that.
    pub fn store<E: Entity>(&self, entity: &mut E) -> Result<i64> {
        let conn = self.connect()?;
        match entity.id() {
            None => {
                let placeholders: Vec<String> =
                    (1..=E::COLUMNS.len()).map(|i| format!("?{}", i)).collect();
                let sql = format!(
                    "INSERT INTO {} ({}) VALUES ({})",
                    E::TABLE,
                    E::COLUMNS.join(", "),
                    placeholders.join(", ")
                );
                conn.execute(&sql, params_from_iter(entity.values()))
                    .map_err(|e| from_rusqlite("store", E::TABLE, e))?;
                let id = conn.last_insert_rowid();
                entity.set_id(id);
                tracing::info!(table = E::TABLE, id, "inserted row");
                Ok(id)
            }
            Some(id) => {
                let assignments: Vec<String> = E::COLUMNS
                    .iter()
                    .enumerate()
                    .map(|(i, col)| format!("{} = ?{}", col, i + 1))
                    .collect();
                let sql = format!(
                    "UPDATE {} SET {} WHERE id = ?{}",
                    E::TABLE,
                    assignments.join(", "),
                    E::COLUMNS.len() + 1
                );
                let mut params = entity.values();
                params.push(Value::Integer(id));
                let affected = conn
                    .execute(&sql, params_from_iter(params))
                    .map_err(|e| from_rusqlite("store", E::TABLE, e))?;
                if affected == 0 {
                    return Err(not_found(E::TABLE, id).with_op("store"));
                }
                tracing::info!(table = E::TABLE, id, "updated row");
                Ok(id)
            }
        }
    }

    /// Delete the row with the given id; a no-op if no row matches
    pub fn delete_by_id<E: Entity>(&self, id: i64) -> Result<()> {
        tracing::debug!(table = E::TABLE, id, "deleting by id");
        let conn = self.connect()?;
        let sql = format!("DELETE FROM {} WHERE id = ?", E::TABLE);
        let affected = conn
            .execute(&sql, [id])
            .map_err(|e| from_rusqlite("delete_by_id", E::TABLE, e))?;
        if affected == 0 {
            tracing::debug!(table = E::TABLE, id, "nothing to delete");
        }
        Ok(())
    }

    /// Number of rows in the entity's table
    pub fn count<E: Entity>(&self) -> Result<u64> {
        let conn = self.connect()?;
        let sql = format!("SELECT COUNT(*) FROM {}", E::TABLE);
        let count: i64 = conn
            .query_row(&sql, [], |row| row.get(0))
            .map_err(|e| from_rusqlite("count", E::TABLE, e))?;
        Ok(count as u64)
    }
}
