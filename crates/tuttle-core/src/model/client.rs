use serde::{Deserialize, Serialize};

/// Client - a party contracts are billed to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Store-assigned identifier; None until first persisted
    pub id: Option<i64>,
    /// Display name of the client
    pub name: String,
    /// Contact invoices for this client are addressed to, if set
    pub invoicing_contact_id: Option<i64>,
}

impl Client {
    /// Create a new, not-yet-persisted client
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            invoicing_contact_id: None,
        }
    }

    /// Attach the invoicing contact by id
    pub fn with_invoicing_contact(mut self, contact_id: i64) -> Self {
        self.invoicing_contact_id = Some(contact_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client_has_no_id() {
        let client = Client::new("Acme GmbH");
        assert!(client.id.is_none());
        assert!(client.invoicing_contact_id.is_none());
    }

    #[test]
    fn test_with_invoicing_contact() {
        let client = Client::new("Acme GmbH").with_invoicing_contact(3);
        assert_eq!(client.invoicing_contact_id, Some(3));
    }
}
