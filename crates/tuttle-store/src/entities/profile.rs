//! Table mapping for the singleton user profile

use super::{opt_text, text};
use crate::entity::Entity;
use rusqlite::types::Value;
use rusqlite::Row;
use tuttle_core::model::UserProfile;

impl Entity for UserProfile {
    const TABLE: &'static str = "user_profile";
    const COLUMNS: &'static [&'static str] = &["name", "email", "subtitle", "vat_number"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<Value> {
        vec![
            text(&self.name),
            text(&self.email),
            opt_text(self.subtitle.as_deref()),
            opt_text(self.vat_number.as_deref()),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(UserProfile {
            id: Some(row.get("id")?),
            name: row.get("name")?,
            email: row.get("email")?,
            subtitle: row.get("subtitle")?,
            vat_number: row.get("vat_number")?,
        })
    }
}
