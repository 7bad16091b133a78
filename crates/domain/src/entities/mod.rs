//! Domain entities

mod battle_outcome;
mod title;

pub use battle_outcome::BattleOutcome;
pub use title::Title;
