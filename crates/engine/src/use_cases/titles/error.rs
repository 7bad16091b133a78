//! Title operation errors.

use crate::infrastructure::ports::RepoError;
use titlebattle_domain::{EconomyError, ProfileId};

/// Errors that can occur during title operations.
#[derive(Debug, thiserror::Error)]
pub enum TitleActionError {
    #[error("Profile not found: {0}")]
    ProfileNotFound(ProfileId),
    #[error(transparent)]
    Economy(#[from] EconomyError),
    #[error("Repository error: {0}")]
    Repo(RepoError),
}

impl From<RepoError> for TitleActionError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Economy(inner) => Self::Economy(inner),
            other => Self::Repo(other),
        }
    }
}
