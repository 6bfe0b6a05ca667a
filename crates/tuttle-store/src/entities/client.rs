//! Table mapping for clients

use super::{opt_int, text};
use crate::entity::{Entity, Field};
use rusqlite::types::Value;
use rusqlite::Row;
use tuttle_core::model::Client;

/// Filter handle: clients by name
pub const NAME: Field<Client, String> = Field::new("name");

/// Filter handle: clients by invoicing contact
pub const INVOICING_CONTACT_ID: Field<Client, i64> = Field::new("invoicing_contact_id");

impl Entity for Client {
    const TABLE: &'static str = "clients";
    const COLUMNS: &'static [&'static str] = &["name", "invoicing_contact_id"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![text(&self.name), opt_int(self.invoicing_contact_id)]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Client {
            id: Some(row.get("id")?),
            name: row.get("name")?,
            invoicing_contact_id: row.get("invoicing_contact_id")?,
        })
    }
}
