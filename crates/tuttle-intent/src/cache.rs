//! Explicit view cache for the contracts facade
//!
//! One cache instance per facade instance, created by the caller and handed
//! in, so its lifecycle is visible rather than implicit in shared fields.
//! Invalidation is wholesale: the full set and every derived view drop
//! together, never incrementally.

use std::collections::BTreeMap;
use tuttle_core::model::Contract;

/// Contracts keyed by id, in id order
pub type ContractMap = BTreeMap<i64, Contract>;

/// Lazily populated cache of the contract full set and its derived views
///
/// `None` means not yet computed; an empty map is a real result (the
/// Loaded-Empty state after an empty table or a failed fetch).
#[derive(Debug, Clone, Default)]
pub struct ContractViewCache {
    pub(crate) all: Option<ContractMap>,
    pub(crate) active: Option<ContractMap>,
    pub(crate) completed: Option<ContractMap>,
    pub(crate) upcoming: Option<ContractMap>,
}

impl ContractViewCache {
    /// Create an empty cache (nothing computed)
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the full set has been fetched, even if it came back empty
    pub fn is_loaded(&self) -> bool {
        self.all.is_some()
    }

    /// Drop the full set and every derived view together
    pub fn clear(&mut self) {
        self.all = None;
        self.active = None;
        self.completed = None;
        self.upcoming = None;
    }
}
