/// Result type alias using TuttleError
pub type Result<T> = std::result::Result<T, TuttleError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// A stable, structured classification of every error the data core can
/// produce. Each kind maps to a stable error code usable for programmatic
/// handling, testing, and presentation-layer branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuttleErrorKind {
    // Query shape
    /// Zero rows where exactly one was expected
    NotFound,
    /// More than one row matched an identifier expected to be unique
    MultipleResults,
    /// More than one row in a table contracted to hold at most one
    InvariantViolation,
    /// A table or column the mapping layer expects is missing or mistyped
    Schema,

    // Input
    InvalidInput,

    // Infrastructure
    /// Fatal connection/file failure on the local database; never retried
    StorageUnavailable,
    Serialization,
    Io,

    // Internal
    Internal,
}

impl TuttleErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            TuttleErrorKind::NotFound => "ERR_NOT_FOUND",
            TuttleErrorKind::MultipleResults => "ERR_MULTIPLE_RESULTS",
            TuttleErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            TuttleErrorKind::Schema => "ERR_SCHEMA",
            TuttleErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            TuttleErrorKind::StorageUnavailable => "ERR_STORAGE_UNAVAILABLE",
            TuttleErrorKind::Serialization => "ERR_SERIALIZATION",
            TuttleErrorKind::Io => "ERR_IO",
            TuttleErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the kind classification plus optional operation, table, and
/// entity-id context for debugging and log correlation.
#[derive(Debug, Clone)]
pub struct TuttleError {
    kind: TuttleErrorKind,
    op: Option<String>,
    table: Option<String>,
    entity_id: Option<i64>,
    message: String,
}

impl TuttleError {
    /// Create a new error with the specified kind
    pub fn new(kind: TuttleErrorKind) -> Self {
        Self {
            kind,
            op: None,
            table: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add table context
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Add entity-id context
    pub fn with_entity_id(mut self, id: i64) -> Self {
        self.entity_id = Some(id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> TuttleErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the table context, if any
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Get the entity-id context, if any
    pub fn entity_id(&self) -> Option<i64> {
        self.entity_id
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for TuttleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(table) = &self.table {
            write!(f, " (table: {})", table)?;
        }
        if let Some(entity_id) = self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for TuttleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
