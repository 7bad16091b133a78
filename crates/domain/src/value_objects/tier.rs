//! Title tiers and their attribute table
//!
//! Tiers form a closed, strictly ordered ladder. Every per-tier attribute
//! (wire code, label, sale price, enhancement cost) lives in one row of
//! `TIER_TABLE`, indexed by `Tier::index`, so adding a tier is a compile
//! error until its row exists.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Rarity tier of a title, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    #[serde(alias = "NORMAL")]
    Common,
    Rare,
    Hero,
    Legend,
    Myth,
}

/// Static attributes of a single tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierInfo {
    pub tier: Tier,
    /// Wire code (upper case)
    pub code: &'static str,
    /// Display label
    pub label: &'static str,
    /// Gold credited when a title of this tier is sold
    pub sell_price: u64,
    /// Gold charged to upgrade *from* this tier; 0 only for the terminal tier,
    /// where it means "not applicable"
    pub enhance_cost: u64,
}

const TIER_TABLE: [TierInfo; 5] = [
    TierInfo {
        tier: Tier::Common,
        code: "COMMON",
        label: "Common",
        sell_price: 10,
        enhance_cost: 50,
    },
    TierInfo {
        tier: Tier::Rare,
        code: "RARE",
        label: "Rare",
        sell_price: 50,
        enhance_cost: 150,
    },
    TierInfo {
        tier: Tier::Hero,
        code: "HERO",
        label: "Hero",
        sell_price: 200,
        enhance_cost: 400,
    },
    TierInfo {
        tier: Tier::Legend,
        code: "LEGEND",
        label: "Legend",
        sell_price: 500,
        enhance_cost: 800,
    },
    TierInfo {
        tier: Tier::Myth,
        code: "MYTH",
        label: "Myth",
        sell_price: 1000,
        enhance_cost: 0,
    },
];

impl Tier {
    /// All tiers in ladder order.
    pub const ALL: [Tier; 5] = [
        Tier::Common,
        Tier::Rare,
        Tier::Hero,
        Tier::Legend,
        Tier::Myth,
    ];

    /// Position on the ladder (0 = weakest).
    pub const fn index(self) -> usize {
        match self {
            Tier::Common => 0,
            Tier::Rare => 1,
            Tier::Hero => 2,
            Tier::Legend => 3,
            Tier::Myth => 4,
        }
    }

    pub fn info(self) -> &'static TierInfo {
        &TIER_TABLE[self.index()]
    }

    pub fn code(self) -> &'static str {
        self.info().code
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn sell_price(self) -> u64 {
        self.info().sell_price
    }

    /// Cost to upgrade from this tier, or `None` when the tier is terminal.
    ///
    /// Never read the raw table cost of the terminal tier as a free upgrade.
    pub fn enhance_cost(self) -> Option<u64> {
        self.next().map(|_| self.info().enhance_cost)
    }

    /// The next tier up the ladder, `None` exactly at the top.
    pub fn next(self) -> Option<Tier> {
        Tier::ALL.get(self.index() + 1).copied()
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Tier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        if normalized == "NORMAL" {
            return Ok(Tier::Common);
        }
        Tier::ALL
            .into_iter()
            .find(|tier| tier.code() == normalized)
            .ok_or_else(|| DomainError::parse(format!("Unknown tier: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_match_ladder_order() {
        for (i, tier) in Tier::ALL.into_iter().enumerate() {
            assert_eq!(tier.index(), i);
            assert_eq!(tier.info().tier, tier);
        }
    }

    #[test]
    fn ordering_is_weakest_to_strongest() {
        assert!(Tier::Common < Tier::Rare);
        assert!(Tier::Rare < Tier::Hero);
        assert!(Tier::Hero < Tier::Legend);
        assert!(Tier::Legend < Tier::Myth);
    }

    #[test]
    fn next_chain_reaches_myth_then_stops() {
        let mut tier = Tier::Common;
        for _ in 0..4 {
            tier = tier.next().expect("ladder continues below myth");
        }
        assert_eq!(tier, Tier::Myth);
        assert_eq!(tier.next(), None);
    }

    #[test]
    fn sell_prices() {
        assert_eq!(Tier::Common.sell_price(), 10);
        assert_eq!(Tier::Rare.sell_price(), 50);
        assert_eq!(Tier::Hero.sell_price(), 200);
        assert_eq!(Tier::Legend.sell_price(), 500);
        assert_eq!(Tier::Myth.sell_price(), 1000);
    }

    #[test]
    fn enhance_costs_with_terminal_not_applicable() {
        assert_eq!(Tier::Common.enhance_cost(), Some(50));
        assert_eq!(Tier::Rare.enhance_cost(), Some(150));
        assert_eq!(Tier::Hero.enhance_cost(), Some(400));
        assert_eq!(Tier::Legend.enhance_cost(), Some(800));
        assert_eq!(Tier::Myth.enhance_cost(), None);
        assert!(Tier::Myth.is_terminal());
    }

    #[test]
    fn parses_codes_and_legacy_alias() {
        assert_eq!("myth".parse::<Tier>().unwrap(), Tier::Myth);
        assert_eq!(" Legend ".parse::<Tier>().unwrap(), Tier::Legend);
        assert_eq!("NORMAL".parse::<Tier>().unwrap(), Tier::Common);
        assert!("EPIC".parse::<Tier>().is_err());
    }

    #[test]
    fn serde_uses_upper_case_codes() {
        assert_eq!(serde_json::to_string(&Tier::Hero).unwrap(), "\"HERO\"");
        let legacy: Tier = serde_json::from_str("\"NORMAL\"").unwrap();
        assert_eq!(legacy, Tier::Common);
    }
}
