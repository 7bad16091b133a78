//! Elo-style rating updates
//!
//! `rating_delta` is the signed change for one participant after one battle.
//! The floor of 0 on the rating itself is applied by the owner profile, not
//! here.

use serde::{Deserialize, Serialize};

/// Standard Elo K-factor.
pub const DEFAULT_K_FACTOR: u32 = 32;

/// Rating assigned to new profiles.
pub const STARTING_RATING: i32 = 1000;

/// Binary battle result from one participant's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchResult {
    Win,
    Lose,
}

impl MatchResult {
    /// The result seen by the other participant.
    pub fn opposite(self) -> Self {
        match self {
            MatchResult::Win => MatchResult::Lose,
            MatchResult::Lose => MatchResult::Win,
        }
    }
}

/// Probability that `self_rating` beats `opponent_rating`.
pub fn expected_score(self_rating: i32, opponent_rating: i32) -> f64 {
    let gap = (f64::from(opponent_rating) - f64::from(self_rating)) / 400.0;
    1.0 / (1.0 + 10_f64.powf(gap))
}

/// Signed rating change for `self_rating` after a battle against
/// `opponent_rating`.
///
/// `round(k * (actual - expected))`, rounded half away from zero. A win uses
/// `1 - expected`, which equals the opponent's expected score; a loss uses
/// `-expected`. Both sides of one battle are therefore computed from the same
/// floating-point value and are exact negatives of each other.
///
/// The magnitude is capped at `k - 1`, so `|delta| < k` holds even when
/// rounding would reach `k` for very large rating gaps.
///
/// # Example
/// ```
/// use titlebattle_domain::value_objects::{rating_delta, MatchResult};
///
/// assert_eq!(rating_delta(1000, 1000, MatchResult::Win, 32), 16);
/// assert_eq!(rating_delta(1200, 1000, MatchResult::Lose, 32), -24);
/// ```
pub fn rating_delta(
    self_rating: i32,
    opponent_rating: i32,
    result: MatchResult,
    k_factor: u32,
) -> i32 {
    let k = f64::from(k_factor);
    let cap = i64::from(k_factor.saturating_sub(1)).min(i64::from(i32::MAX));

    let magnitude = match result {
        MatchResult::Win => k * expected_score(opponent_rating, self_rating),
        MatchResult::Lose => k * expected_score(self_rating, opponent_rating),
    };
    let bounded = (magnitude.round() as i64).min(cap) as i32;

    match result {
        MatchResult::Win => bounded,
        MatchResult::Lose => -bounded,
    }
}

/// Apply a delta to a rating, flooring the result at 0.
pub fn apply_rating_delta(rating: i32, delta: i32) -> i32 {
    rating.saturating_add(delta).max(0)
}
