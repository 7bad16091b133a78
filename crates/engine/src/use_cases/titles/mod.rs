//! Title use cases.
//!
//! Sell, enhance, equip and unequip titles on a stored profile. Each action
//! runs as one repository transaction on the profile, so it never overwrites
//! a battle settled concurrently; on any economy error nothing is saved.

use std::sync::Arc;

use tokio::sync::oneshot;
use titlebattle_domain::{EconomyError, EnhancementPlan, Profile, ProfileId, Title, TitleId};

use crate::infrastructure::ports::{ProfileRepo, RepoError};

mod error;

pub use error::TitleActionError;

/// Result of a title sale.
#[derive(Debug, Clone)]
pub struct SaleResult {
    pub sold: Title,
    pub credited: u64,
    pub profile: Profile,
}

/// Result of a title enhancement.
#[derive(Debug, Clone)]
pub struct EnhancementResult {
    pub plan: EnhancementPlan,
    pub title: Title,
    pub profile: Profile,
}

/// Title economy actions.
pub struct TitleActions {
    profiles: Arc<dyn ProfileRepo>,
}

impl TitleActions {
    pub fn new(profiles: Arc<dyn ProfileRepo>) -> Self {
        Self { profiles }
    }

    pub async fn sell(
        &self,
        profile_id: ProfileId,
        title_id: TitleId,
    ) -> Result<SaleResult, TitleActionError> {
        let (sold, profile) = self
            .apply(profile_id, move |profile| profile.sell_title(title_id))
            .await?;

        tracing::info!(
            profile_id = %profile_id,
            title_id = %title_id,
            tier = %sold.title.tier(),
            credited = sold.credited,
            "Title sold"
        );

        Ok(SaleResult {
            sold: sold.title,
            credited: sold.credited,
            profile,
        })
    }

    pub async fn enhance(
        &self,
        profile_id: ProfileId,
        title_id: TitleId,
    ) -> Result<EnhancementResult, TitleActionError> {
        let ((plan, title), profile) = self
            .apply(profile_id, move |profile| {
                let plan = profile.enhance_title(title_id)?;
                let title = profile
                    .title(title_id)
                    .cloned()
                    .ok_or(EconomyError::TitleNotFound(title_id))?;
                Ok((plan, title))
            })
            .await?;

        tracing::info!(
            profile_id = %profile_id,
            title_id = %title_id,
            from = %plan.from,
            to = %plan.to,
            cost = plan.cost,
            "Title enhanced"
        );

        Ok(EnhancementResult {
            plan,
            title,
            profile,
        })
    }

    pub async fn equip(
        &self,
        profile_id: ProfileId,
        title_id: TitleId,
    ) -> Result<Profile, TitleActionError> {
        let ((), profile) = self
            .apply(profile_id, move |profile| profile.equip_title(title_id))
            .await?;
        Ok(profile)
    }

    pub async fn unequip(
        &self,
        profile_id: ProfileId,
        title_id: TitleId,
    ) -> Result<Profile, TitleActionError> {
        let ((), profile) = self
            .apply(profile_id, move |profile| profile.unequip_title(title_id))
            .await?;
        Ok(profile)
    }

    /// Run `action` on the stored profile inside one repository update and
    /// hand back its value with the written profile.
    async fn apply<R, F>(
        &self,
        profile_id: ProfileId,
        action: F,
    ) -> Result<(R, Profile), TitleActionError>
    where
        R: Send + 'static,
        F: FnOnce(&mut Profile) -> Result<R, EconomyError> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let profile = self
            .profiles
            .update(
                profile_id,
                Box::new(move |profile: &mut Profile| {
                    let value = action(profile)?;
                    let _ = tx.send(value);
                    Ok(())
                }),
            )
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    TitleActionError::ProfileNotFound(profile_id)
                } else {
                    e.into()
                }
            })?;

        let value = rx
            .await
            .map_err(|_| RepoError::database("update", "profile update was not applied"))?;
        Ok((value, profile))
    }
}
