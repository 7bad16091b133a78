//! Unified error types for the domain layer
//!
//! `DomainError` covers validation and lookup failures shared by every
//! domain type. Economy rule violations have their own enum so callers can
//! surface them as rejected operations rather than generic failures.

use thiserror::Error;

use crate::ids::TitleId;
use crate::value_objects::Tier;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// A battle was requested before the owner's cooldown elapsed
    #[error("Battle cooldown active: {remaining_secs}s remaining")]
    CooldownActive { remaining_secs: u64 },
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Character name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a cooldown error
    pub fn cooldown(remaining_secs: u64) -> Self {
        Self::CooldownActive { remaining_secs }
    }
}

/// Title economy rule violations.
///
/// Every variant is returned before any state is touched: gold, tier and the
/// title collection are exactly as they were before the failed call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EconomyError {
    #[error("Insufficient funds: {required} gold required, {available} available")]
    InsufficientFunds { required: u64, available: u64 },

    #[error("Title is already at the highest tier ({0})")]
    MaxTierReached(Tier),

    #[error("Title {0} is equipped and cannot be sold")]
    TitleEquipped(TitleId),

    #[error("Title not found: {0}")]
    TitleNotFound(TitleId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Profile", "123e4567-e89b-12d3-a456-426614174000");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(err.to_string().contains("Profile"));
        assert!(err.to_string().contains("123e4567"));
    }

    #[test]
    fn test_cooldown_error() {
        let err = DomainError::cooldown(12);
        assert_eq!(err.to_string(), "Battle cooldown active: 12s remaining");
    }

    #[test]
    fn test_insufficient_funds_message() {
        let err = EconomyError::InsufficientFunds {
            required: 150,
            available: 149,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: 150 gold required, 149 available"
        );
    }

    #[test]
    fn test_max_tier_message() {
        let err = EconomyError::MaxTierReached(Tier::Myth);
        assert_eq!(err.to_string(), "Title is already at the highest tier (MYTH)");
    }
}
