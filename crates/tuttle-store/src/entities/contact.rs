//! Table mapping for contacts

use super::{opt_text, text};
use crate::entity::{Entity, Field};
use rusqlite::types::Value;
use rusqlite::Row;
use tuttle_core::model::Contact;

/// Filter handle: contacts by email
pub const EMAIL: Field<Contact, String> = Field::new("email");

/// Filter handle: contacts by company
pub const COMPANY: Field<Contact, String> = Field::new("company");

impl Entity for Contact {
    const TABLE: &'static str = "contacts";
    const COLUMNS: &'static [&'static str] =
        &["first_name", "last_name", "email", "company", "address"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            text(&self.first_name),
            text(&self.last_name),
            text(&self.email),
            opt_text(self.company.as_deref()),
            opt_text(self.address.as_deref()),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Contact {
            id: Some(row.get("id")?),
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            email: row.get("email")?,
            company: row.get("company")?,
            address: row.get("address")?,
        })
    }
}
