//! Rarity roll for battle reward titles
//!
//! A draw in `[0, 1)` is scaled to `[0, 100)` and matched against
//! `RARITY_BANDS`, rarest first. The bands are the single source of the
//! distribution; `weight` derives the percentages from them.

use super::tier::Tier;

/// Draws are scaled onto `[0, ROLL_SCALE)`.
pub const ROLL_SCALE: f64 = 100.0;

/// One threshold of the rarity table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityBand {
    pub tier: Tier,
    /// Exclusive upper bound of the scaled draw for this tier
    pub upper_bound: f64,
}

/// Cumulative thresholds, rarest tier first.
const RARITY_BANDS: [RarityBand; 5] = [
    RarityBand {
        tier: Tier::Myth,
        upper_bound: 1.0,
    },
    RarityBand {
        tier: Tier::Legend,
        upper_bound: 5.0,
    },
    RarityBand {
        tier: Tier::Hero,
        upper_bound: 20.0,
    },
    RarityBand {
        tier: Tier::Rare,
        upper_bound: 50.0,
    },
    RarityBand {
        tier: Tier::Common,
        upper_bound: ROLL_SCALE,
    },
];

/// The rarity bands in evaluation order.
pub fn rarity_bands() -> &'static [RarityBand] {
    &RARITY_BANDS
}

/// Map a scaled value in `[0, 100)` to its tier.
///
/// Values at or past the top of the scale, and NaN, fall through to the most
/// common tier; negative values land in the rarest band.
pub fn tier_for_value(value: f64) -> Tier {
    RARITY_BANDS
        .iter()
        .find(|band| value < band.upper_bound)
        .map(|band| band.tier)
        .unwrap_or(Tier::Common)
}

/// Roll a tier using an injected unit draw in `[0, 1)`.
///
/// Consumes exactly one draw.
///
/// # Example
/// ```
/// use titlebattle_domain::value_objects::{roll_tier, Tier};
///
/// assert_eq!(roll_tier(|| 0.5), Tier::Common);
/// assert_eq!(roll_tier(|| 0.0), Tier::Myth);
/// ```
pub fn roll_tier<F>(draw: F) -> Tier
where
    F: FnOnce() -> f64,
{
    tier_for_value(draw() * ROLL_SCALE)
}

/// Probability of a tier in percent, derived from the band widths.
pub fn weight(tier: Tier) -> f64 {
    let mut lower = 0.0;
    for band in &RARITY_BANDS {
        if band.tier == tier {
            return band.upper_bound - lower;
        }
        lower = band.upper_bound;
    }
    0.0
}
