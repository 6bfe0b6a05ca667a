//! Contracts intent layer
//!
//! Composes the data source with the injected view cache and exposes the
//! named, filtered views the contracts screens render: all, active,
//! completed, upcoming.
//!
//! Cache state machine per facade instance:
//! - Empty: no full set cached; the first full-set read fetches it.
//! - Loaded: derived views compute lazily from the cached full set and are
//!   themselves cached. A failed fetch loads an empty set (Loaded-Empty)
//!   and is not retried until invalidation.
//! - Back to Empty via `invalidate_caches` or any successful contract write.

use std::collections::BTreeMap;

use tuttle_core::model::{Client, Contact, Contract};
use tuttle_core::{Clock, IntentResult};

use crate::cache::{ContractMap, ContractViewCache};
use crate::data_source::ContractsDataSource;

/// Screen-facing facade for contract reads and writes
pub struct ContractsIntent<D: ContractsDataSource, C: Clock> {
    data_source: D,
    clock: C,
    cache: ContractViewCache,
}

impl<D: ContractsDataSource, C: Clock> ContractsIntent<D, C> {
    /// Create the facade over a data source, a clock for the date-derived
    /// views, and its own view cache
    pub fn new(data_source: D, clock: C, cache: ContractViewCache) -> Self {
        Self {
            data_source,
            clock,
            cache,
        }
    }

    /// Fetch the full set into the cache if it is not already loaded
    ///
    /// On data-source failure the cache loads empty; the failure was already
    /// logged and surfaced at the data-source boundary, and convenience
    /// reads degrade to "nothing to show" rather than erroring.
    fn ensure_loaded(&mut self) {
        if self.cache.is_loaded() {
            return;
        }
        self.cache.clear();
        let map = match self.data_source.get_all_contracts() {
            IntentResult::Success { data } => data
                .into_iter()
                .filter_map(|contract| contract.id.map(|id| (id, contract)))
                .collect(),
            IntentResult::Failure { error_message } => {
                tracing::warn!(error = %error_message, "loading contracts failed; caching empty set");
                ContractMap::new()
            }
        };
        self.cache.all = Some(map);
    }

    /// All contracts keyed by id; cached until invalidation
    pub fn get_all_contracts_as_map(&mut self) -> &ContractMap {
        self.ensure_loaded();
        self.cache.all.get_or_insert_with(ContractMap::new)
    }

    /// Contracts marked completed; computed once per loaded full set
    pub fn get_completed_contracts(&mut self) -> &ContractMap {
        self.ensure_loaded();
        let ContractViewCache { all, completed, .. } = &mut self.cache;
        completed.get_or_insert_with(|| {
            filter_view(all, |contract| contract.is_completed)
        })
    }

    /// Contracts currently running; computed once per loaded full set
    pub fn get_active_contracts(&mut self) -> &ContractMap {
        let today = self.clock.today();
        self.ensure_loaded();
        let ContractViewCache { all, active, .. } = &mut self.cache;
        active.get_or_insert_with(|| filter_view(all, |contract| contract.is_active(today)))
    }

    /// Contracts starting in the future; computed once per loaded full set
    pub fn get_upcoming_contracts(&mut self) -> &ContractMap {
        let today = self.clock.today();
        self.ensure_loaded();
        let ContractViewCache { all, upcoming, .. } = &mut self.cache;
        upcoming.get_or_insert_with(|| filter_view(all, |contract| contract.is_upcoming(today)))
    }

    /// One contract by id, bypassing the cache
    pub fn get_contract_by_id(&self, id: i64) -> IntentResult<Contract> {
        self.data_source
            .get_contract_by_id(id)
            .with_error_message("Failed to load the contract. Please retry.")
    }

    /// All clients keyed by id; empty on failure
    pub fn get_all_clients_as_map(&self) -> BTreeMap<i64, Client> {
        match self.data_source.get_all_clients() {
            IntentResult::Success { data } => data
                .into_iter()
                .filter_map(|client| client.id.map(|id| (id, client)))
                .collect(),
            IntentResult::Failure { error_message } => {
                tracing::warn!(error = %error_message, "loading clients failed");
                BTreeMap::new()
            }
        }
    }

    /// All contacts keyed by id; empty on failure
    pub fn get_all_contacts_as_map(&self) -> BTreeMap<i64, Contact> {
        match self.data_source.get_all_contacts() {
            IntentResult::Success { data } => data
                .into_iter()
                .filter_map(|contact| contact.id.map(|id| (id, contact)))
                .collect(),
            IntentResult::Failure { error_message } => {
                tracing::warn!(error = %error_message, "loading contacts failed");
                BTreeMap::new()
            }
        }
    }

    /// Save a client; pure passthrough, no contract-derived state to touch
    pub fn save_client(&self, client: &mut Client) -> IntentResult<i64> {
        self.data_source.save_client(client)
    }

    /// Save a contract; a successful write invalidates the cached views so
    /// the next read sees the stored state
    pub fn save_contract(&mut self, contract: &mut Contract) -> IntentResult<i64> {
        let result = self.data_source.save_contract(contract);
        if result.was_successful() {
            self.cache.clear();
        }
        result
    }

    /// Explicit wholesale invalidation; the next full-set read re-queries
    pub fn invalidate_caches(&mut self) {
        self.cache.clear();
    }
}

/// Single partition pass over the cached full set
fn filter_view(
    all: &Option<ContractMap>,
    mut predicate: impl FnMut(&Contract) -> bool,
) -> ContractMap {
    match all {
        Some(map) => map
            .iter()
            .filter(|(_, contract)| predicate(contract))
            .map(|(id, contract)| (*id, contract.clone()))
            .collect(),
        None => ContractMap::new(),
    }
}
