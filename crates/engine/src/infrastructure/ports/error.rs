//! Error types for port operations.

use titlebattle_domain::{DomainError, EconomyError};

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Entity not found - includes entity type and ID for actionable error messages.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Storage operation failed - includes operation name for tracing.
    #[error("Storage error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// A transactional update was refused by its closure; nothing was written.
    #[error("Update rejected: {0}")]
    Rejected(#[from] DomainError),

    /// A single-record update was refused by an economy rule; nothing was written.
    #[error(transparent)]
    Economy(#[from] EconomyError),
}

impl RepoError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Failures of the battle narrator. The battle pipeline recovers from all of
/// them with the fallback narrative.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NarrativeError {
    #[error("Narrative request failed: {0}")]
    Llm(#[from] LlmError),
    #[error("Malformed narrative: {0}")]
    Malformed(String),
}

/// Failures of the title-text generator. These abort the battle.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TitleTextError {
    #[error("Title request failed: {0}")]
    Llm(#[from] LlmError),
    #[error("Generator returned no usable title text")]
    Empty,
}
