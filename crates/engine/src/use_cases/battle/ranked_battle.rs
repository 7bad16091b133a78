//! Ranked battle use case.
//!
//! A battle between two stored profiles. All generation runs first; the
//! result is then applied to both records in one repository transaction.

use std::sync::Arc;

use titlebattle_domain::{BattleOutcome, BattleSettlement, Profile, ProfileId, Side};

use crate::infrastructure::ports::{ClockPort, ProfileRepo};
use crate::use_cases::GameRules;

use super::error::RankedBattleError;
use super::run_battle::{Combatant, RunBattle};

/// Outcome plus both profiles as written.
#[derive(Debug, Clone)]
pub struct RankedBattleResult {
    pub outcome: BattleOutcome,
    pub challenger: Profile,
    pub opponent: Profile,
}

/// Ranked battle use case.
///
/// Orchestrates: profile lookup, cooldown gate, battle pipeline, atomic settlement.
pub struct RunRankedBattle {
    profiles: Arc<dyn ProfileRepo>,
    battle: Arc<RunBattle>,
    clock: Arc<dyn ClockPort>,
    rules: GameRules,
}

impl RunRankedBattle {
    pub fn new(
        profiles: Arc<dyn ProfileRepo>,
        battle: Arc<RunBattle>,
        clock: Arc<dyn ClockPort>,
        rules: GameRules,
    ) -> Self {
        Self {
            profiles,
            battle,
            clock,
            rules,
        }
    }

    /// Execute a battle of `challenger_id` against `opponent_id`.
    ///
    /// # Returns
    /// * `Ok(RankedBattleResult)` - both profiles updated symmetrically
    /// * `Err(RankedBattleError)` - nothing was written
    pub async fn execute(
        &self,
        challenger_id: ProfileId,
        opponent_id: ProfileId,
    ) -> Result<RankedBattleResult, RankedBattleError> {
        if challenger_id == opponent_id {
            return Err(RankedBattleError::InvalidInput(
                "a profile cannot battle itself".to_string(),
            ));
        }

        let challenger = self.load(challenger_id).await?;
        let opponent = self.load(opponent_id).await?;

        let cooldown = self.rules.cooldown();
        challenger.ensure_ready(self.clock.now(), cooldown)?;

        let outcome = self
            .battle
            .execute(
                Combatant::from_profile(&challenger),
                Combatant::from_profile(&opponent),
            )
            .await?;

        let settled_at = self.clock.now();
        let winner = outcome.winner;
        let delta = outcome.rating_delta;
        let title = outcome.new_title.clone();
        let (win_gold, loss_gold) = (self.rules.win_gold, self.rules.loss_gold);

        let (challenger, opponent) = self
            .profiles
            .update_pair(
                challenger_id,
                opponent_id,
                Box::new(move |challenger: &mut Profile, opponent: &mut Profile| {
                    // Another battle may have landed since the first check
                    challenger.ensure_ready(settled_at, cooldown)?;

                    let (winner_profile, loser_profile) = match winner {
                        Side::Challenger => (challenger, opponent),
                        Side::Opponent => (opponent, challenger),
                    };
                    winner_profile.record_battle(BattleSettlement::win(
                        delta, win_gold, title, settled_at,
                    ));
                    loser_profile.record_battle(BattleSettlement::loss(
                        -delta, loss_gold, settled_at,
                    ));
                    Ok(())
                }),
            )
            .await?;

        tracing::info!(
            challenger_id = %challenger_id,
            opponent_id = %opponent_id,
            winner = ?winner,
            challenger_rating = challenger.rating(),
            opponent_rating = opponent.rating(),
            "Ranked battle settled"
        );

        Ok(RankedBattleResult {
            outcome,
            challenger,
            opponent,
        })
    }

    async fn load(&self, id: ProfileId) -> Result<Profile, RankedBattleError> {
        self.profiles
            .get(id)
            .await?
            .ok_or(RankedBattleError::ProfileNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, FixedRandom};
    use crate::infrastructure::ports::{
        MockClockPort, MockNarrativeGeneratorPort, MockProfileRepo, MockTitleTextGeneratorPort,
        RepoError, TitleTextError,
    };
    use crate::infrastructure::profiles::InMemoryProfileRepo;
    use crate::use_cases::battle::BattleError;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use titlebattle_domain::{CharacterName, NarrativeResult, TitleName};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn profile(name: &str) -> Profile {
        Profile::new(ProfileId::new(), CharacterName::new(name).unwrap(), now())
    }

    fn narrator_declaring(winner: Side) -> MockNarrativeGeneratorPort {
        let mut narrator = MockNarrativeGeneratorPort::new();
        narrator.expect_generate_battle().returning(move |_| {
            Ok(NarrativeResult {
                winner,
                log: vec!["Blades cross".to_string()],
                keyword: "steel".to_string(),
            })
        });
        narrator
    }

    fn titles_ok() -> MockTitleTextGeneratorPort {
        let mut title_text = MockTitleTextGeneratorPort::new();
        title_text
            .expect_generate_title()
            .returning(|_, _, _| Ok(TitleName::new("Iron Will").unwrap()));
        title_text
    }

    fn use_case(
        repo: Arc<dyn ProfileRepo>,
        narrator: MockNarrativeGeneratorPort,
        title_text: MockTitleTextGeneratorPort,
        clock: Arc<dyn ClockPort>,
    ) -> RunRankedBattle {
        let battle = Arc::new(RunBattle::new(
            Arc::new(narrator),
            Arc::new(title_text),
            Arc::new(FixedRandom(0.3)),
            clock.clone(),
            32,
        ));
        RunRankedBattle::new(repo, battle, clock, GameRules::default())
    }

    async fn seeded(profiles: &[&Profile]) -> Arc<InMemoryProfileRepo> {
        let repo = Arc::new(InMemoryProfileRepo::new());
        for p in profiles {
            repo.save(p).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn applies_symmetric_result_to_both_profiles() {
        let aria = profile("Aria");
        let kael = profile("Kael").with_rating(1200);
        let repo = seeded(&[&aria, &kael]).await;

        let result = use_case(
            repo.clone(),
            narrator_declaring(Side::Challenger),
            titles_ok(),
            Arc::new(FixedClock(now())),
        )
        .execute(aria.id(), kael.id())
        .await
        .unwrap();

        assert_eq!(result.outcome.rating_delta, 24);
        assert_eq!(result.challenger.rating(), 1024);
        assert_eq!(result.opponent.rating(), 1176);
        assert_eq!(result.challenger.wins(), 1);
        assert_eq!(result.opponent.losses(), 1);
        assert_eq!(result.challenger.gold(), 20);
        assert_eq!(result.opponent.gold(), 5);
        assert_eq!(result.challenger.titles().len(), 1);
        assert!(result.opponent.titles().is_empty());
        assert_eq!(result.challenger.last_battle_at(), Some(now()));
        assert_eq!(result.opponent.last_battle_at(), Some(now()));

        let stored = repo.get(aria.id()).await.unwrap().unwrap();
        assert_eq!(stored, result.challenger);
    }

    #[tokio::test]
    async fn opponent_win_rewards_opponent() {
        let aria = profile("Aria");
        let kael = profile("Kael");
        let repo = seeded(&[&aria, &kael]).await;

        let result = use_case(
            repo,
            narrator_declaring(Side::Opponent),
            titles_ok(),
            Arc::new(FixedClock(now())),
        )
        .execute(aria.id(), kael.id())
        .await
        .unwrap();

        assert_eq!(result.challenger.rating(), 984);
        assert_eq!(result.opponent.rating(), 1016);
        assert_eq!(result.opponent.titles().len(), 1);
        assert_eq!(result.opponent.titles()[0].tier(), titlebattle_domain::Tier::Rare);
    }

    #[tokio::test]
    async fn loser_rating_is_floored_at_zero() {
        // Even ratings give a 16 point swing, more than the loser holds
        let aria = profile("Aria").with_rating(10);
        let kael = profile("Kael").with_rating(10);
        let repo = seeded(&[&aria, &kael]).await;

        let result = use_case(
            repo,
            narrator_declaring(Side::Challenger),
            titles_ok(),
            Arc::new(FixedClock(now())),
        )
        .execute(aria.id(), kael.id())
        .await
        .unwrap();

        assert_eq!(result.outcome.rating_delta, 16);
        assert_eq!(result.challenger.rating(), 26);
        assert_eq!(result.opponent.rating(), 0);
    }

    #[tokio::test]
    async fn cooldown_blocks_before_generation() {
        let mut aria = profile("Aria");
        aria.record_battle(BattleSettlement::loss(0, 0, now()));
        let kael = profile("Kael");
        let repo = seeded(&[&aria, &kael]).await;

        let mut narrator = MockNarrativeGeneratorPort::new();
        narrator.expect_generate_battle().never();
        let mut title_text = MockTitleTextGeneratorPort::new();
        title_text.expect_generate_title().never();

        let result = use_case(
            repo,
            narrator,
            title_text,
            Arc::new(FixedClock(now() + Duration::seconds(10))),
        )
        .execute(aria.id(), kael.id())
        .await;

        assert!(matches!(
            result,
            Err(RankedBattleError::CooldownActive { remaining_secs: 20 })
        ));
    }

    #[tokio::test]
    async fn cooldown_is_rechecked_inside_transaction() {
        let aria = profile("Aria");
        let kael = profile("Kael");
        let mut raced = aria.clone();
        raced.record_battle(BattleSettlement::win(0, 0, None, now()));

        let mut repo = MockProfileRepo::new();
        let (first, second) = (aria.clone(), kael.clone());
        repo.expect_get()
            .returning(move |id| Ok(Some(if id == first.id() { first.clone() } else { second.clone() })));
        let kael_in_tx = kael.clone();
        repo.expect_update_pair().times(1).returning(move |_, _, update| {
            let mut a = raced.clone();
            let mut b = kael_in_tx.clone();
            update(&mut a, &mut b)?;
            Ok((a, b))
        });

        let mut clock = MockClockPort::new();
        clock.expect_now().returning(now);

        let result = use_case(
            Arc::new(repo),
            narrator_declaring(Side::Challenger),
            titles_ok(),
            Arc::new(clock),
        )
        .execute(aria.id(), kael.id())
        .await;

        assert!(matches!(
            result,
            Err(RankedBattleError::CooldownActive { remaining_secs: 30 })
        ));
    }

    #[tokio::test]
    async fn title_failure_writes_nothing() {
        let aria = profile("Aria");
        let kael = profile("Kael");
        let repo = seeded(&[&aria, &kael]).await;

        let mut title_text = MockTitleTextGeneratorPort::new();
        title_text
            .expect_generate_title()
            .returning(|_, _, _| Err(TitleTextError::Empty));

        let result = use_case(
            repo.clone(),
            narrator_declaring(Side::Challenger),
            title_text,
            Arc::new(FixedClock(now())),
        )
        .execute(aria.id(), kael.id())
        .await;

        assert!(matches!(
            result,
            Err(RankedBattleError::Battle(BattleError::TitleGeneration(_)))
        ));
        assert_eq!(repo.get(aria.id()).await.unwrap(), Some(aria));
        assert_eq!(repo.get(kael.id()).await.unwrap(), Some(kael));
    }

    #[tokio::test]
    async fn unknown_opponent_is_not_found() {
        let aria = profile("Aria");
        let repo = seeded(&[&aria]).await;
        let missing = ProfileId::new();

        let result = use_case(
            repo,
            MockNarrativeGeneratorPort::new(),
            MockTitleTextGeneratorPort::new(),
            Arc::new(FixedClock(now())),
        )
        .execute(aria.id(), missing)
        .await;

        assert!(matches!(result, Err(RankedBattleError::ProfileNotFound(id)) if id == missing));
    }

    #[tokio::test]
    async fn self_battle_is_invalid() {
        let aria = profile("Aria");
        let repo = seeded(&[&aria]).await;

        let result = use_case(
            repo,
            MockNarrativeGeneratorPort::new(),
            MockTitleTextGeneratorPort::new(),
            Arc::new(FixedClock(now())),
        )
        .execute(aria.id(), aria.id())
        .await;

        assert!(matches!(result, Err(RankedBattleError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let mut repo = MockProfileRepo::new();
        repo.expect_get()
            .returning(|_| Err(RepoError::database("get", "unavailable")));

        let result = use_case(
            Arc::new(repo),
            MockNarrativeGeneratorPort::new(),
            MockTitleTextGeneratorPort::new(),
            Arc::new(FixedClock(now())),
        )
        .execute(ProfileId::new(), ProfileId::new())
        .await;

        assert!(matches!(result, Err(RankedBattleError::Repo(_))));
    }
}
