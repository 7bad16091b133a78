//! Repository port traits for profile storage.

use async_trait::async_trait;
use titlebattle_domain::{DomainError, EconomyError, Profile, ProfileId};

use super::error::RepoError;

/// Mutation applied to two profiles inside one transaction.
///
/// Receives the records in the order their ids were passed. Returning an
/// error aborts the transaction with nothing written.
pub type PairUpdate =
    Box<dyn FnOnce(&mut Profile, &mut Profile) -> Result<(), DomainError> + Send>;

/// Mutation applied to one profile inside one transaction.
pub type ProfileUpdate = Box<dyn FnOnce(&mut Profile) -> Result<(), EconomyError> + Send>;

// =============================================================================
// Profile Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepo: Send + Sync {
    async fn get(&self, id: ProfileId) -> Result<Option<Profile>, RepoError>;
    async fn save(&self, profile: &Profile) -> Result<(), RepoError>;
    async fn list(&self) -> Result<Vec<Profile>, RepoError>;

    /// Read one record, apply `update`, then write it, atomically with
    /// respect to every other update.
    ///
    /// Fails with `NotFound` for an unknown id and with `Economy` if the
    /// closure fails; in both cases the record is unchanged.
    async fn update(&self, id: ProfileId, update: ProfileUpdate) -> Result<Profile, RepoError>;

    /// Read both records, apply `update`, then write both, atomically.
    ///
    /// Fails with `NotFound` if either id is unknown and with `Rejected` if
    /// the closure fails; in both cases neither record changes.
    async fn update_pair(
        &self,
        first: ProfileId,
        second: ProfileId,
        update: PairUpdate,
    ) -> Result<(Profile, Profile), RepoError>;
}
