//! Tuttle Intent - screen-facing domain query facades
//!
//! Mediates between the generic `EntityStore` and screen-level consumers
//! needing named, filtered views of one entity type. Store errors are
//! converted into `IntentResult` envelopes (or empty maps, for the
//! convenience reads) at this boundary and never reach presentation code.

pub mod cache;
pub mod contracts;
pub mod data_source;

// Re-export key types
pub use cache::{ContractMap, ContractViewCache};
pub use contracts::ContractsIntent;
pub use data_source::{ContractsDataSource, StoreDataSource};
