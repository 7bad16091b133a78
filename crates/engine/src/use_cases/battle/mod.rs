//! Battle use cases.
//!
//! Stateless battles between free-form names and ranked battles between
//! stored profiles.

use std::sync::Arc;

mod error;
mod ranked_battle;
mod run_battle;

pub use error::{BattleError, RankedBattleError};
pub use ranked_battle::{RankedBattleResult, RunRankedBattle};
pub use run_battle::{Combatant, RunBattle};

/// Container for battle use cases.
pub struct BattleUseCases {
    pub run: Arc<RunBattle>,
    pub ranked: Arc<RunRankedBattle>,
}

impl BattleUseCases {
    pub fn new(run: Arc<RunBattle>, ranked: Arc<RunRankedBattle>) -> Self {
        Self { run, ranked }
    }
}
