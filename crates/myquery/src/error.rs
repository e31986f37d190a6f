//! Error types for myquery

use thiserror::Error;

/// Result type alias for myquery operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Error types for clause construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Malformed sort direction token
    #[error("Invalid sort direction: {0}")]
    InvalidSort(String),

    /// Rejected limit parameters (negative offset or non-positive size)
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    /// Page metadata derivation failure
    #[error("Invalid page: {0}")]
    InvalidPage(String),
}

impl QueryError {
    /// Create an invalid sort direction error
    pub fn invalid_sort(token: impl Into<String>) -> Self {
        Self::InvalidSort(token.into())
    }

    /// Create an invalid limit error
    pub fn invalid_limit(message: impl Into<String>) -> Self {
        Self::InvalidLimit(message.into())
    }

    /// Create an invalid page error
    pub fn invalid_page(message: impl Into<String>) -> Self {
        Self::InvalidPage(message.into())
    }

    /// Check if this is an invalid limit error
    pub fn is_invalid_limit(&self) -> bool {
        matches!(self, Self::InvalidLimit(_))
    }

    /// Check if this is an invalid page error
    pub fn is_invalid_page(&self) -> bool {
        matches!(self, Self::InvalidPage(_))
    }
}
