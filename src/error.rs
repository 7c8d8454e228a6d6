//! Error Types
//!
//! Errors raised by collection operations, form validation and config loading.

use thiserror::Error;

use crate::models::TodoId;

/// Common result type for todo operations
pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("todo text is empty")]
    EmptyText,
    #[error("todo #{0} not found")]
    NotFound(TodoId),
    #[error("invalid config: {0}")]
    Config(String),
}
