//! Battle outcome record returned by the battle pipeline

use serde::{Deserialize, Serialize};

use super::title::Title;
use crate::value_objects::Side;

/// Complete result of one battle.
///
/// `rating_delta` is the winner's change. The loser's change is its exact
/// negative; callers apply the sign per participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleOutcome {
    pub log: Vec<String>,
    pub winner: Side,
    pub rating_delta: i32,
    /// Reward for the winner; losers never receive a title
    pub new_title: Option<Title>,
}

impl BattleOutcome {
    /// Rating change for `side`.
    pub fn delta_for(&self, side: Side) -> i32 {
        if side == self.winner {
            self.rating_delta
        } else {
            -self.rating_delta
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loser_gets_negated_delta() {
        let outcome = BattleOutcome {
            log: vec!["line".to_string()],
            winner: Side::Opponent,
            rating_delta: 19,
            new_title: None,
        };
        assert_eq!(outcome.delta_for(Side::Opponent), 19);
        assert_eq!(outcome.delta_for(Side::Challenger), -19);
    }
}
