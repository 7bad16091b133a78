//! Title Battle domain.
//!
//! Pure game rules with no I/O: the tier ladder and its attribute table, the
//! rarity roll, the Elo rating update, the title economy and the owner
//! profile aggregate. Randomness and time are passed in by the caller.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::{BattleSettlement, Profile, SoldTitle};
pub use entities::{BattleOutcome, Title};
pub use error::{DomainError, EconomyError};
pub use ids::{ProfileId, TitleId};

pub use value_objects::{
    apply_rating_delta, enhance_cost, expected_score, next_tier, plan_enhancement, rarity_bands,
    rating_delta, roll_tier, sell_price, tier_for_value, weight, CharacterName, EnhancementPlan,
    MatchResult, NarrativeResult, RarityBand, Side, Tier, TierInfo, TitleName, DEFAULT_K_FACTOR,
    FALLBACK_KEYWORD, FALLBACK_LOG_LINE, MAX_CHARACTER_NAME_CHARS, ROLL_SCALE, STARTING_RATING,
};
