//! Value objects - Immutable objects defined by their attributes

mod battle;
mod economy;
mod names;
mod rarity;
mod rating;
mod tier;

pub use battle::{NarrativeResult, Side, FALLBACK_KEYWORD, FALLBACK_LOG_LINE};
pub use economy::{enhance_cost, next_tier, plan_enhancement, sell_price, EnhancementPlan};
pub use names::{CharacterName, TitleName, MAX_CHARACTER_NAME_CHARS};
pub use rarity::{rarity_bands, roll_tier, tier_for_value, weight, RarityBand, ROLL_SCALE};
pub use rating::{
    apply_rating_delta, expected_score, rating_delta, MatchResult, DEFAULT_K_FACTOR,
    STARTING_RATING,
};
pub use tier::{Tier, TierInfo};
