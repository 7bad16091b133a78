//! Battle operation errors.

use crate::infrastructure::ports::{RepoError, TitleTextError};
use titlebattle_domain::{DomainError, ProfileId};

/// Errors from the battle pipeline. Nothing is produced on error.
#[derive(Debug, thiserror::Error)]
pub enum BattleError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Title generation failed: {0}")]
    TitleGeneration(#[from] TitleTextError),
}

/// Errors from a battle between two stored profiles.
#[derive(Debug, thiserror::Error)]
pub enum RankedBattleError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Profile not found: {0}")]
    ProfileNotFound(ProfileId),
    #[error("Battle cooldown active: {remaining_secs}s remaining")]
    CooldownActive { remaining_secs: u64 },
    #[error(transparent)]
    Battle(#[from] BattleError),
    #[error("Repository error: {0}")]
    Repo(RepoError),
}

impl From<RepoError> for RankedBattleError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Rejected(DomainError::CooldownActive { remaining_secs }) => {
                Self::CooldownActive { remaining_secs }
            }
            RepoError::Rejected(DomainError::Validation(msg)) => Self::InvalidInput(msg),
            other => Self::Repo(other),
        }
    }
}

impl From<DomainError> for RankedBattleError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::CooldownActive { remaining_secs } => Self::CooldownActive { remaining_secs },
            other => Self::InvalidInput(other.to_string()),
        }
    }
}
