//! Error types for activerow

use thiserror::Error;

/// Result type alias for activerow operations
pub type OrmResult<T> = Result<T, OrmError>;

/// Error types for record and statement-building operations.
///
/// Driver-reported execution failures (a prepared statement returning
/// `false` from `execute`) are deliberately *not* represented here; they
/// surface as plain values from `save`/`delete` so callers keep a simple
/// success/failure contract for expected SQL failures.
#[derive(Debug, Error)]
pub enum OrmError {
    /// Database connection error or connection not ready
    #[error("Connection error: {0}")]
    Connection(String),

    /// A statement was built without a source table bound
    #[error("No source table bound for {0} statement")]
    MissingSource(&'static str),

    /// A condition key that is invalid for the requested operation
    #[error("Unexpected condition: {0}")]
    UnexpectedCondition(String),

    /// A column required by the operation does not exist on the table
    #[error("Missing column `{column}` on table `{table}`")]
    MissingColumn { table: String, column: String },

    /// Primary key column or value required but absent
    #[error("Missing primary key: {0}")]
    MissingPrimaryKey(String),

    /// A field name the record type does not declare
    #[error("Unknown column `{column}` for table `{table}`")]
    UnknownColumn { table: String, column: String },

    /// Identifier or builder input validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl OrmError {
    /// Create a connection error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create an unexpected-condition error
    pub fn unexpected_condition(message: impl Into<String>) -> Self {
        Self::UnexpectedCondition(message.into())
    }

    /// Create a missing-column error for a specific table
    pub fn missing_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Create a missing-primary-key error
    pub fn missing_primary_key(message: impl Into<String>) -> Self {
        Self::MissingPrimaryKey(message.into())
    }

    /// Create an unknown-column error for a specific table
    pub fn unknown_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a missing-column error
    pub fn is_missing_column(&self) -> bool {
        matches!(self, Self::MissingColumn { .. })
    }

    /// Check if this is a missing-primary-key error
    pub fn is_missing_primary_key(&self) -> bool {
        matches!(self, Self::MissingPrimaryKey(_))
    }

    /// Check if this is an unexpected-condition error
    pub fn is_unexpected_condition(&self) -> bool {
        matches!(self, Self::UnexpectedCondition(_))
    }

    /// Check if this is an unknown-column error
    pub fn is_unknown_column(&self) -> bool {
        matches!(self, Self::UnknownColumn { .. })
    }
}
