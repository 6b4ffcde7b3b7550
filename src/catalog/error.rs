use thiserror::Error;

/// Errors that can occur during catalog operations.
///
/// None of these leave the catalog partially modified: every mutating
/// operation validates before it touches a record.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// A required field is missing or a value breaks a domain rule.
    #[error("{0}")]
    Validation(String),
    /// A value has the wrong kind, e.g. a price that is not a number.
    #[error("{0}")]
    TypeMismatch(String),
    #[error("Sweet with ID {0} already exists.")]
    Conflict(i64),
    #[error("Sweet with ID {0} not found.")]
    NotFound(i64),
    #[error("Not enough stock for {name}. Available: {available}, Requested: {requested}.")]
    InsufficientStock {
        name: String,
        available: u64,
        requested: u64,
    },
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::TypeMismatch(msg.into())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
