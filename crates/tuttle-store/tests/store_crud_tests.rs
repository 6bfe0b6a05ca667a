use chrono::NaiveDate;
use tempfile::TempDir;
use tuttle_core::errors::TuttleErrorKind;
use tuttle_core::model::{Client, Contact, Contract, TimeUnit, UserProfile};
use tuttle_store::entities::contract::{CLIENT_ID, IS_COMPLETED};
use tuttle_store::EntityStore;

fn new_store() -> (TempDir, EntityStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = EntityStore::open(dir.path().join("tuttle.db")).unwrap();
    (dir, store)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_contract(client_id: Option<i64>) -> Contract {
    let mut contract = Contract::new(
        "Backend consulting",
        date(2023, 1, 10),
        date(2023, 2, 1),
        95.0,
        "EUR",
        TimeUnit::Hour,
    );
    contract.client_id = client_id;
    contract.end_date = Some(date(2023, 8, 31));
    contract.vat_rate = 0.19;
    contract.volume = Some(400);
    contract.term_of_payment = Some(14);
    contract
}

// ===== STORE / INSERT TESTS =====

#[test]
fn test_store_assigns_id_and_round_trips_all_fields() {
    let (_dir, store) = new_store();

    let mut contract = sample_contract(None);
    assert!(contract.id.is_none());

    let id = store.store(&mut contract).unwrap();
    assert_eq!(contract.id, Some(id));

    let loaded = store.query_by_id::<Contract>(id).unwrap().unwrap();
    assert_eq!(loaded, contract);
}

#[test]
fn test_store_assigns_sequential_ids() {
    let (_dir, store) = new_store();

    let mut first = Client::new("Acme GmbH");
    let mut second = Client::new("Umbrella Corp");
    let first_id = store.store(&mut first).unwrap();
    let second_id = store.store(&mut second).unwrap();

    assert_ne!(first_id, second_id);
}

// ===== STORE / UPDATE TESTS =====

#[test]
fn test_store_with_id_updates_in_place() {
    let (_dir, store) = new_store();

    let mut contract = sample_contract(None);
    let id = store.store(&mut contract).unwrap();
    let count_before = store.count::<Contract>().unwrap();

    contract.title = "Backend consulting (extended)".to_string();
    contract.is_completed = true;
    store.store(&mut contract).unwrap();

    assert_eq!(store.count::<Contract>().unwrap(), count_before);
    let loaded = store.query_by_id::<Contract>(id).unwrap().unwrap();
    assert_eq!(loaded.title, "Backend consulting (extended)");
    assert!(loaded.is_completed);
}

#[test]
fn test_store_update_of_missing_row_is_not_found() {
    let (_dir, store) = new_store();

    let mut client = Client::new("Ghost Ltd");
    client.id = Some(999);
    let err = store.store(&mut client).unwrap_err();
    assert_eq!(err.kind(), TuttleErrorKind::NotFound);
}

// ===== QUERY TESTS =====

#[test]
fn test_query_empty_table_is_ok() {
    let (_dir, store) = new_store();
    let contracts: Vec<Contract> = store.query().unwrap();
    assert!(contracts.is_empty());
}

#[test]
fn test_query_by_id_absent_is_none() {
    let (_dir, store) = new_store();
    let loaded = store.query_by_id::<Client>(42).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_query_returns_rows_in_id_order() {
    let (_dir, store) = new_store();

    for name in ["C", "A", "B"] {
        store.store(&mut Client::new(name)).unwrap();
    }

    let clients: Vec<Client> = store.query().unwrap();
    let ids: Vec<i64> = clients.iter().map(|c| c.id.unwrap()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn test_query_where_filters_by_typed_field() {
    let (_dir, store) = new_store();

    let mut client = Client::new("Acme GmbH");
    let client_id = store.store(&mut client).unwrap();

    store.store(&mut sample_contract(Some(client_id))).unwrap();
    store.store(&mut sample_contract(None)).unwrap();

    let matched = store.query_where(CLIENT_ID, &client_id).unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].client_id, Some(client_id));
}

#[test]
fn test_query_where_on_flag_column() {
    let (_dir, store) = new_store();

    let mut open = sample_contract(None);
    let mut done = sample_contract(None);
    done.is_completed = true;
    store.store(&mut open).unwrap();
    store.store(&mut done).unwrap();

    let completed = store.query_where(IS_COMPLETED, &true).unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, done.id);
}

// ===== SINGLETON TABLE TESTS =====

#[test]
fn test_query_the_only_on_empty_table_is_none() {
    let (_dir, store) = new_store();
    assert!(store.query_the_only::<UserProfile>().unwrap().is_none());
}

#[test]
fn test_query_the_only_returns_single_row() {
    let (_dir, store) = new_store();

    let mut profile = UserProfile::new("Harry Tuttle", "harry@example.com");
    store.store(&mut profile).unwrap();

    let loaded = store.query_the_only::<UserProfile>().unwrap().unwrap();
    assert_eq!(loaded, profile);
}

#[test]
fn test_query_the_only_with_two_rows_violates_invariant() {
    let (_dir, store) = new_store();

    store
        .store(&mut UserProfile::new("Harry", "harry@example.com"))
        .unwrap();
    store
        .store(&mut UserProfile::new("Sam", "sam@example.com"))
        .unwrap();

    let err = store.query_the_only::<UserProfile>().unwrap_err();
    assert_eq!(err.kind(), TuttleErrorKind::InvariantViolation);
}

// ===== DELETE TESTS =====

#[test]
fn test_delete_by_id_removes_row() {
    let (_dir, store) = new_store();

    let mut contact = Contact::new("Ada", "Lovelace", "ada@example.com");
    let id = store.store(&mut contact).unwrap();

    store.delete_by_id::<Contact>(id).unwrap();
    assert!(store.query_by_id::<Contact>(id).unwrap().is_none());
}

#[test]
fn test_delete_by_id_is_idempotent() {
    let (_dir, store) = new_store();

    let mut contact = Contact::new("Ada", "Lovelace", "ada@example.com");
    let id = store.store(&mut contact).unwrap();

    store.delete_by_id::<Contact>(id).unwrap();
    // Second delete of the same id must not error
    store.delete_by_id::<Contact>(id).unwrap();
}

// ===== FAILURE MODE TESTS =====

#[test]
fn test_open_on_unopenable_path_is_storage_unavailable() {
    let dir = tempfile::tempdir().unwrap();

    // A directory where the database file should be: SQLite cannot open it,
    // and the failure is fatal rather than retried
    let blocked = dir.path().join("tuttle.db");
    std::fs::create_dir(&blocked).unwrap();

    let err = EntityStore::open(&blocked).unwrap_err();
    assert_eq!(err.kind(), TuttleErrorKind::StorageUnavailable);
}

#[test]
fn test_query_by_id_with_duplicate_ids_is_multiple_results() {
    let (_dir, store) = new_store();

    // Rebuild the contacts table without its primary key and plant two rows
    // with the same id, simulating corruption arriving from outside
    let conn = rusqlite::Connection::open(store.db_path()).unwrap();
    conn.execute_batch(
        "DROP TABLE contacts;
         CREATE TABLE contacts (
             id INTEGER,
             first_name TEXT NOT NULL,
             last_name TEXT NOT NULL,
             email TEXT NOT NULL,
             company TEXT,
             address TEXT
         );
         INSERT INTO contacts VALUES (7, 'Ada', 'Lovelace', 'ada@example.com', NULL, NULL);
         INSERT INTO contacts VALUES (7, 'Alan', 'Turing', 'alan@example.com', NULL, NULL);",
    )
    .unwrap();

    let err = store.query_by_id::<Contact>(7).unwrap_err();
    assert_eq!(err.kind(), TuttleErrorKind::MultipleResults);
}

// ===== LIFECYCLE TESTS =====

#[test]
fn test_open_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join(".tuttle").join("tuttle.db");
    let store = EntityStore::open(&nested).unwrap();
    assert!(nested.exists());
    assert_eq!(store.db_path(), nested.as_path());
}

#[test]
fn test_reopen_preserves_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tuttle.db");

    {
        let store = EntityStore::open(&path).unwrap();
        store.store(&mut Client::new("Acme GmbH")).unwrap();
    }

    let store = EntityStore::open(&path).unwrap();
    let clients: Vec<Client> = store.query().unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].name, "Acme GmbH");
}
