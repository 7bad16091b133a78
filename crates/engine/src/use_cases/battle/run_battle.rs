//! Run battle use case.
//!
//! Narrate a battle between two combatants, roll the reward tier, generate
//! the reward title text and compute the rating change. Nothing is persisted
//! here; the caller applies the outcome.

use std::sync::Arc;

use titlebattle_domain::{
    rating_delta, roll_tier, BattleOutcome, CharacterName, MatchResult, NarrativeResult, Profile,
    Side, Title, TitleId,
};

use crate::infrastructure::ports::{
    ClockPort, NarrativeCombatant, NarrativeGeneratorPort, NarrativeRequest, RandomPort,
    TitleTextGeneratorPort,
};

use super::error::BattleError;

/// One participant as the battle pipeline sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    pub name: CharacterName,
    pub rating: i32,
    /// Name of the equipped title, if any
    pub title: Option<String>,
}

impl Combatant {
    pub fn new(name: CharacterName, rating: i32) -> Self {
        Self {
            name,
            rating,
            title: None,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name().clone(),
            rating: profile.rating(),
            title: profile
                .equipped_title()
                .map(|t| t.name().as_str().to_string()),
        }
    }

    fn to_narrative(&self) -> NarrativeCombatant {
        NarrativeCombatant {
            name: self.name.as_str().to_string(),
            rating: self.rating,
            title: self.title.clone(),
        }
    }
}

/// Run battle use case.
///
/// Orchestrates: narrator (with fallback), rarity roll, title text, rating delta.
pub struct RunBattle {
    narrator: Arc<dyn NarrativeGeneratorPort>,
    title_text: Arc<dyn TitleTextGeneratorPort>,
    random: Arc<dyn RandomPort>,
    clock: Arc<dyn ClockPort>,
    k_factor: u32,
}

impl RunBattle {
    pub fn new(
        narrator: Arc<dyn NarrativeGeneratorPort>,
        title_text: Arc<dyn TitleTextGeneratorPort>,
        random: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
        k_factor: u32,
    ) -> Self {
        Self {
            narrator,
            title_text,
            random,
            clock,
            k_factor,
        }
    }

    /// Execute the battle pipeline.
    ///
    /// # Returns
    /// * `Ok(BattleOutcome)` - log, winner side, winner's rating gain and the reward title
    /// * `Err(BattleError)` - invalid input, or the title text could not be generated
    pub async fn execute(
        &self,
        challenger: Combatant,
        opponent: Combatant,
    ) -> Result<BattleOutcome, BattleError> {
        for combatant in [&challenger, &opponent] {
            if combatant.rating < 0 {
                return Err(BattleError::InvalidInput(format!(
                    "rating of {} cannot be negative",
                    combatant.name
                )));
            }
        }

        let request = NarrativeRequest {
            challenger: challenger.to_narrative(),
            opponent: opponent.to_narrative(),
        };
        let narrative = match self.narrator.generate_battle(request).await {
            Ok(narrative) => narrative,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    challenger = %challenger.name,
                    opponent = %opponent.name,
                    "Narrative generation failed, using fallback"
                );
                NarrativeResult::fallback()
            }
        };

        let (winner, loser) = match narrative.winner {
            Side::Challenger => (&challenger, &opponent),
            Side::Opponent => (&opponent, &challenger),
        };

        let tier = roll_tier(|| self.random.gen_unit());

        let title_name = self
            .title_text
            .generate_title(winner.name.as_str(), &narrative.keyword, tier)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, winner = %winner.name, %tier, "Title generation failed, battle aborted");
                BattleError::TitleGeneration(e)
            })?;

        let delta = rating_delta(winner.rating, loser.rating, MatchResult::Win, self.k_factor);
        let title = Title::new(
            TitleId::from_uuid(self.random.gen_uuid()),
            title_name,
            tier,
            self.clock.now(),
        );

        tracing::info!(
            winner = %winner.name,
            loser = %loser.name,
            rating_delta = delta,
            %tier,
            title = %title.name(),
            "Battle resolved"
        );

        Ok(BattleOutcome {
            log: narrative.log,
            winner: narrative.winner,
            rating_delta: delta,
            new_title: Some(title),
        })
    }
}
