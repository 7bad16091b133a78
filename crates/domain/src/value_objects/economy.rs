//! Title economy: sale and enhancement rules
//!
//! Lookups are thin views over the tier table. `plan_enhancement` is the
//! composed rule that the owner profile applies.

use serde::{Deserialize, Serialize};

use super::tier::Tier;
use crate::error::EconomyError;

/// Gold credited for selling a title of `tier`.
pub fn sell_price(tier: Tier) -> u64 {
    tier.sell_price()
}

/// Raw table cost to upgrade from `tier`.
///
/// Returns 0 for the terminal tier, which means "not applicable"; use
/// [`Tier::enhance_cost`] or [`plan_enhancement`] to get that case as a
/// value rather than a number.
pub fn enhance_cost(tier: Tier) -> u64 {
    tier.info().enhance_cost
}

/// The tier an enhancement from `tier` produces.
pub fn next_tier(tier: Tier) -> Option<Tier> {
    tier.next()
}

/// A validated enhancement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementPlan {
    pub from: Tier,
    pub to: Tier,
    pub cost: u64,
}

/// Check whether a title of `tier` can be enhanced with `gold`.
///
/// The terminal tier is rejected first, whatever the balance.
pub fn plan_enhancement(tier: Tier, gold: u64) -> Result<EnhancementPlan, EconomyError> {
    let to = next_tier(tier).ok_or(EconomyError::MaxTierReached(tier))?;
    let cost = enhance_cost(tier);
    if gold < cost {
        return Err(EconomyError::InsufficientFunds {
            required: cost,
            available: gold,
        });
    }
    Ok(EnhancementPlan { from: tier, to, cost })
}
