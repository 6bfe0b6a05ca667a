use serde::{Deserialize, Serialize};

/// UserProfile - the freelancer's own identity, shown on invoices
///
/// The profile table is contracted to hold at most one row; the store's
/// `query_the_only` enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Store-assigned identifier; None until first persisted
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    /// Professional subtitle, e.g. "Software Engineer"
    pub subtitle: Option<String>,
    pub vat_number: Option<String>,
}

impl UserProfile {
    /// Create a new, not-yet-persisted profile
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            subtitle: None,
            vat_number: None,
        }
    }
}
