use thiserror::Error;

/// Roster validation failures, raised before any graph is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CounterError {
    #[error("Invalid type set for {entity}: {reason}")]
    InvalidTypeSet { entity: String, reason: String },

    #[error("Entity {name:?} has an empty identifier")]
    InvalidIdentifier { name: String },

    #[error("Duplicate entity identifier: {0}")]
    DuplicateEntity(String),
}

pub type Result<T> = std::result::Result<T, CounterError>;
