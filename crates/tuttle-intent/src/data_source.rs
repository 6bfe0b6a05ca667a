//! Data-source seam between the facades and the entity store
//!
//! Everything the contracts screen reads or writes goes through
//! `ContractsDataSource`, returning envelopes rather than errors. The
//! production implementation wraps `EntityStore`; tests substitute fakes to
//! observe query traffic.

use tuttle_core::model::{Client, Contact, Contract};
use tuttle_core::IntentResult;
use tuttle_store::EntityStore;

/// Store operations the contracts facade depends on
pub trait ContractsDataSource {
    /// All contracts, in id order
    fn get_all_contracts(&self) -> IntentResult<Vec<Contract>>;

    /// One contract by id; absence is a failure with a presentable message
    fn get_contract_by_id(&self, id: i64) -> IntentResult<Contract>;

    /// Insert or update a contract; assigns the id back on insert
    fn save_contract(&self, contract: &mut Contract) -> IntentResult<i64>;

    /// All clients, in id order
    fn get_all_clients(&self) -> IntentResult<Vec<Client>>;

    /// Insert or update a client; assigns the id back on insert
    fn save_client(&self, client: &mut Client) -> IntentResult<i64>;

    /// All contacts, in id order
    fn get_all_contacts(&self) -> IntentResult<Vec<Contact>>;
}

/// Production data source over the generic entity store
///
/// This is the boundary where `TuttleError` stops: every store failure is
/// rendered into the envelope's error message here.
#[derive(Debug, Clone)]
pub struct StoreDataSource {
    store: EntityStore,
}

impl StoreDataSource {
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }
}

impl ContractsDataSource for StoreDataSource {
    fn get_all_contracts(&self) -> IntentResult<Vec<Contract>> {
        self.store.query::<Contract>().into()
    }

    fn get_contract_by_id(&self, id: i64) -> IntentResult<Contract> {
        match self.store.query_by_id::<Contract>(id) {
            Ok(Some(contract)) => IntentResult::ok(contract),
            Ok(None) => IntentResult::fail(format!("No contract found with id {}", id)),
            Err(err) => IntentResult::fail(err.to_string()),
        }
    }

    fn save_contract(&self, contract: &mut Contract) -> IntentResult<i64> {
        self.store.store(contract).into()
    }

    fn get_all_clients(&self) -> IntentResult<Vec<Client>> {
        self.store.query::<Client>().into()
    }

    fn save_client(&self, client: &mut Client) -> IntentResult<i64> {
        self.store.store(client).into()
    }

    fn get_all_contacts(&self) -> IntentResult<Vec<Contact>> {
        self.store.query::<Contact>().into()
    }
}
