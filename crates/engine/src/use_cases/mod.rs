//! Use cases - user story orchestration.
//!
//! Each use case composes domain rules with the ports it needs. Handlers in
//! `api` call these and never touch ports directly.

pub mod battle;
pub mod profile;
pub mod titles;

use chrono::Duration;
use titlebattle_domain::{DEFAULT_K_FACTOR, STARTING_RATING};

pub use battle::{
    BattleError, BattleUseCases, Combatant, RankedBattleError, RankedBattleResult, RunBattle,
    RunRankedBattle,
};
pub use profile::{ProfileError, ProfileOps};
pub use titles::{EnhancementResult, SaleResult, TitleActionError, TitleActions};

/// Longest configurable battle cooldown (one year).
const MAX_COOLDOWN_SECS: u64 = 365 * 24 * 60 * 60;

/// Tunable game rules shared by the battle and profile use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    /// Elo k-factor
    pub k_factor: u32,
    /// Gold credited to the winner of a ranked battle
    pub win_gold: u64,
    /// Gold credited to the loser of a ranked battle
    pub loss_gold: u64,
    /// Seconds a profile must wait between battles
    pub cooldown_secs: u64,
    /// Rating of a newly created profile
    pub starting_rating: i32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
            win_gold: 20,
            loss_gold: 5,
            cooldown_secs: 30,
            starting_rating: STARTING_RATING,
        }
    }
}

impl GameRules {
    pub fn cooldown(&self) -> Duration {
        Duration::seconds(self.cooldown_secs.min(MAX_COOLDOWN_SECS) as i64)
    }
}

/// Profile-facing use cases.
pub struct ProfileUseCases {
    pub ops: std::sync::Arc<ProfileOps>,
    pub titles: std::sync::Arc<TitleActions>,
}

impl ProfileUseCases {
    pub fn new(ops: std::sync::Arc<ProfileOps>, titles: std::sync::Arc<TitleActions>) -> Self {
        Self { ops, titles }
    }
}
