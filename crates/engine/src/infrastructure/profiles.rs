//! In-memory profile store
//!
//! Keeps every profile in a map behind one async mutex. Data is lost on
//! restart; this is the store the server runs with and the one the use-case
//! tests exercise.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::infrastructure::ports::{PairUpdate, ProfileRepo, ProfileUpdate, RepoError};
use titlebattle_domain::{DomainError, Profile, ProfileId};

/// In-memory profile repository
#[derive(Clone, Default)]
pub struct InMemoryProfileRepo {
    profiles: Arc<Mutex<HashMap<ProfileId, Profile>>>,
}

impl InMemoryProfileRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepo for InMemoryProfileRepo {
    async fn get(&self, id: ProfileId) -> Result<Option<Profile>, RepoError> {
        Ok(self.profiles.lock().await.get(&id).cloned())
    }

    async fn save(&self, profile: &Profile) -> Result<(), RepoError> {
        self.profiles
            .lock()
            .await
            .insert(profile.id(), profile.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Profile>, RepoError> {
        Ok(self.profiles.lock().await.values().cloned().collect())
    }

    async fn update(&self, id: ProfileId, update: ProfileUpdate) -> Result<Profile, RepoError> {
        let mut profiles = self.profiles.lock().await;

        let mut profile = profiles
            .get(&id)
            .cloned()
            .ok_or_else(|| RepoError::not_found("Profile", id))?;

        update(&mut profile)?;

        profiles.insert(id, profile.clone());
        Ok(profile)
    }

    async fn update_pair(
        &self,
        first: ProfileId,
        second: ProfileId,
        update: PairUpdate,
    ) -> Result<(Profile, Profile), RepoError> {
        if first == second {
            return Err(RepoError::Rejected(DomainError::validation(
                "a profile cannot be paired with itself",
            )));
        }

        // Held for the whole read-modify-write
        let mut profiles = self.profiles.lock().await;

        let mut a = profiles
            .get(&first)
            .cloned()
            .ok_or_else(|| RepoError::not_found("Profile", first))?;
        let mut b = profiles
            .get(&second)
            .cloned()
            .ok_or_else(|| RepoError::not_found("Profile", second))?;

        update(&mut a, &mut b)?;

        profiles.insert(first, a.clone());
        profiles.insert(second, b.clone());
        Ok((a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use titlebattle_domain::{BattleSettlement, CharacterName, EconomyError, TitleId};

    fn profile(name: &str) -> Profile {
        Profile::new(
            ProfileId::new(),
            CharacterName::new(name).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn save_then_get_and_list() {
        let repo = InMemoryProfileRepo::new();
        let aria = profile("Aria");
        repo.save(&aria).await.unwrap();

        assert_eq!(repo.get(aria.id()).await.unwrap(), Some(aria.clone()));
        assert_eq!(repo.get(ProfileId::new()).await.unwrap(), None);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_pair_writes_both_records() {
        let repo = InMemoryProfileRepo::new();
        let (aria, kael) = (profile("Aria"), profile("Kael"));
        repo.save(&aria).await.unwrap();
        repo.save(&kael).await.unwrap();
        let at = Utc::now();

        let (a, b) = repo
            .update_pair(
                aria.id(),
                kael.id(),
                Box::new(move |a: &mut Profile, b: &mut Profile| {
                    a.record_battle(BattleSettlement::win(16, 20, None, at));
                    b.record_battle(BattleSettlement::loss(-16, 5, at));
                    Ok(())
                }),
            )
            .await
            .unwrap();

        assert_eq!(a.rating(), 1016);
        assert_eq!(b.rating(), 984);
        assert_eq!(repo.get(aria.id()).await.unwrap(), Some(a));
        assert_eq!(repo.get(kael.id()).await.unwrap(), Some(b));
    }

    #[tokio::test]
    async fn rejected_update_writes_nothing() {
        let repo = InMemoryProfileRepo::new();
        let (aria, kael) = (profile("Aria"), profile("Kael"));
        repo.save(&aria).await.unwrap();
        repo.save(&kael).await.unwrap();

        let result = repo
            .update_pair(
                aria.id(),
                kael.id(),
                Box::new(|a: &mut Profile, _: &mut Profile| {
                    a.record_battle(BattleSettlement::win(16, 20, None, Utc::now()));
                    Err(DomainError::cooldown(12))
                }),
            )
            .await;

        assert!(matches!(
            result,
            Err(RepoError::Rejected(DomainError::CooldownActive { remaining_secs: 12 }))
        ));
        assert_eq!(repo.get(aria.id()).await.unwrap(), Some(aria));
        assert_eq!(repo.get(kael.id()).await.unwrap(), Some(kael));
    }

    #[tokio::test]
    async fn update_writes_the_record() {
        let repo = InMemoryProfileRepo::new();
        let aria = profile("Aria").with_gold(30);
        repo.save(&aria).await.unwrap();

        let updated = repo
            .update(
                aria.id(),
                Box::new(|p: &mut Profile| {
                    p.record_battle(BattleSettlement::win(0, 20, None, Utc::now()));
                    Ok(())
                }),
            )
            .await
            .unwrap();

        assert_eq!(updated.gold(), 50);
        assert_eq!(repo.get(aria.id()).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn refused_update_writes_nothing() {
        let repo = InMemoryProfileRepo::new();
        let aria = profile("Aria");
        repo.save(&aria).await.unwrap();
        let missing = TitleId::new();

        let result = repo
            .update(
                aria.id(),
                Box::new(move |p: &mut Profile| {
                    p.record_battle(BattleSettlement::win(16, 20, None, Utc::now()));
                    Err(EconomyError::TitleNotFound(missing))
                }),
            )
            .await;

        assert!(matches!(
            result,
            Err(RepoError::Economy(EconomyError::TitleNotFound(id))) if id == missing
        ));
        assert_eq!(repo.get(aria.id()).await.unwrap(), Some(aria));
    }

    #[tokio::test]
    async fn update_of_unknown_profile_is_not_found() {
        let repo = InMemoryProfileRepo::new();

        let result = repo
            .update(ProfileId::new(), Box::new(|_: &mut Profile| Ok(())))
            .await;

        assert!(matches!(result, Err(ref e) if e.is_not_found()));
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let repo = InMemoryProfileRepo::new();
        let aria = profile("Aria");
        repo.save(&aria).await.unwrap();

        let result = repo
            .update_pair(aria.id(), ProfileId::new(), Box::new(|_: &mut Profile, _: &mut Profile| Ok(())))
            .await;

        assert!(matches!(result, Err(ref e) if e.is_not_found()));
    }
}
