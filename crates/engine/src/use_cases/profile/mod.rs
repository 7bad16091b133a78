//! Profile use cases.
//!
//! Create and read owner profiles, and rank them on the leaderboard.

use std::sync::Arc;

use titlebattle_domain::{CharacterName, DomainError, Profile, ProfileId};

use crate::infrastructure::ports::{ClockPort, ProfileRepo, RandomPort, RepoError};
use crate::use_cases::GameRules;

/// Default leaderboard size when the caller gives none.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 20;
/// Upper bound on a single leaderboard page.
pub const MAX_LEADERBOARD_LIMIT: usize = 100;

/// Errors that can occur during profile operations.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Profile not found: {0}")]
    NotFound(ProfileId),
    #[error(transparent)]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Profile operations.
pub struct ProfileOps {
    profiles: Arc<dyn ProfileRepo>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
    rules: GameRules,
}

impl ProfileOps {
    pub fn new(
        profiles: Arc<dyn ProfileRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        rules: GameRules,
    ) -> Self {
        Self {
            profiles,
            clock,
            random,
            rules,
        }
    }

    /// Create a profile with the starting rating and no gold.
    pub async fn create(&self, character_name: &str) -> Result<Profile, ProfileError> {
        let name = CharacterName::new(character_name)?;
        let profile = Profile::new(
            ProfileId::from_uuid(self.random.gen_uuid()),
            name,
            self.clock.now(),
        )
        .with_rating(self.rules.starting_rating);
        self.profiles.save(&profile).await?;

        tracing::info!(profile_id = %profile.id(), name = %profile.name(), "Profile created");
        Ok(profile)
    }

    pub async fn get(&self, id: ProfileId) -> Result<Profile, ProfileError> {
        self.profiles
            .get(id)
            .await?
            .ok_or(ProfileError::NotFound(id))
    }

    /// Profiles by rating, then wins, both descending.
    pub async fn leaderboard(&self, limit: Option<usize>) -> Result<Vec<Profile>, ProfileError> {
        let limit = limit
            .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
            .min(MAX_LEADERBOARD_LIMIT);

        let mut profiles = self.profiles.list().await?;
        profiles.sort_by(|a, b| {
            b.rating()
                .cmp(&a.rating())
                .then_with(|| b.wins().cmp(&a.wins()))
                .then_with(|| a.name().as_str().cmp(b.name().as_str()))
        });
        profiles.truncate(limit);
        Ok(profiles)
    }

    /// Whole seconds until `profile` may battle again.
    pub fn cooldown_remaining(&self, profile: &Profile) -> u64 {
        profile.remaining_cooldown(self.clock.now(), self.rules.cooldown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, FixedRandom};
    use crate::infrastructure::ports::MockProfileRepo;
    use crate::infrastructure::profiles::InMemoryProfileRepo;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use titlebattle_domain::BattleSettlement;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn ops(repo: Arc<dyn ProfileRepo>) -> ProfileOps {
        ProfileOps::new(
            repo,
            Arc::new(FixedClock(now())),
            Arc::new(FixedRandom(0.5)),
            GameRules::default(),
        )
    }

    #[tokio::test]
    async fn create_starts_at_default_rating_with_no_gold() {
        let mut repo = MockProfileRepo::new();
        repo.expect_save()
            .withf(|p| p.name().as_str() == "Aria" && p.rating() == 1000)
            .times(1)
            .returning(|_| Ok(()));

        let profile = ops(Arc::new(repo)).create("  Aria  ").await.unwrap();

        assert_eq!(profile.rating(), 1000);
        assert_eq!(profile.gold(), 0);
        assert_eq!(profile.created_at(), now());
    }

    #[tokio::test]
    async fn create_rejects_invalid_names_without_saving() {
        let mut repo = MockProfileRepo::new();
        repo.expect_save().never();
        let ops = ops(Arc::new(repo));

        assert!(matches!(
            ops.create("   ").await,
            Err(ProfileError::Validation(_))
        ));
        assert!(matches!(
            ops.create(&"x".repeat(26)).await,
            Err(ProfileError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn get_unknown_is_not_found() {
        let mut repo = MockProfileRepo::new();
        repo.expect_get().returning(|_| Ok(None));

        let result = ops(Arc::new(repo)).get(ProfileId::new()).await;

        assert!(matches!(result, Err(ProfileError::NotFound(_))));
    }

    #[tokio::test]
    async fn leaderboard_orders_by_rating_then_wins() {
        let repo = Arc::new(InMemoryProfileRepo::new());
        let ops = ops(repo.clone());

        let mut low = Profile::new(ProfileId::new(), CharacterName::new("Low").unwrap(), now())
            .with_rating(900);
        low.record_battle(BattleSettlement::win(0, 0, None, now()));
        let mut veteran =
            Profile::new(ProfileId::new(), CharacterName::new("Veteran").unwrap(), now());
        veteran.record_battle(BattleSettlement::win(0, 0, None, now()));
        let rookie = Profile::new(ProfileId::new(), CharacterName::new("Rookie").unwrap(), now());
        let top = Profile::new(ProfileId::new(), CharacterName::new("Top").unwrap(), now())
            .with_rating(1300);
        for p in [&low, &veteran, &rookie, &top] {
            repo.save(p).await.unwrap();
        }

        let board = ops.leaderboard(None).await.unwrap();
        let names: Vec<&str> = board.iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, vec!["Top", "Veteran", "Rookie", "Low"]);

        let first_two = ops.leaderboard(Some(2)).await.unwrap();
        assert_eq!(first_two.len(), 2);
    }

    #[tokio::test]
    async fn cooldown_remaining_reflects_last_battle() {
        let repo = Arc::new(InMemoryProfileRepo::new());
        let ops = ops(repo);
        let mut profile = Profile::new(ProfileId::new(), CharacterName::new("Aria").unwrap(), now());
        assert_eq!(ops.cooldown_remaining(&profile), 0);

        profile.record_battle(BattleSettlement::loss(0, 0, now() - Duration::seconds(12)));
        assert_eq!(ops.cooldown_remaining(&profile), 18);
    }
}
