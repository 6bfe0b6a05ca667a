use serde::{Deserialize, Serialize};

/// Contact - a person attached to a client for invoicing and correspondence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Store-assigned identifier; None until first persisted
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Company the contact belongs to, if any
    pub company: Option<String>,
    /// Postal address as a single printable block
    pub address: Option<String>,
}

impl Contact {
    /// Create a new, not-yet-persisted contact
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            company: None,
            address: None,
        }
    }

    /// First and last name joined for display
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
