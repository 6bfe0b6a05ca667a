//! Tuttle Store - SQLite persistence for the tuttle data core
//!
//! Provides:
//! - Connection management with uniform per-connection pragmas
//! - Embedded SQL migrations with checksums and idempotent application
//! - The `Entity` mapping trait with typed column handles
//! - `EntityStore`, the generic CRUD facade every screen reads through
//!
//! Each store operation opens a short-lived connection scoped to that call;
//! no connection state spans operations. This trades throughput for
//! simplicity, which is the right trade for a single-user desktop tool.

pub mod db;
pub mod entities;
pub mod entity;
pub mod errors;
pub mod migrations;
pub mod store;

// Re-export key types
pub use entity::{Entity, Field};
pub use errors::Result;
pub use store::EntityStore;
