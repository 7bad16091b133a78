//! Title entity - a cosmetic rank awarded for winning a battle
//!
//! Titles are created only as battle rewards. Their tier may be raised in
//! place by enhancement; equipping is coordinated by the owning profile,
//! which guarantees at most one equipped title.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::TitleId;
use crate::value_objects::{Tier, TitleName};

/// An owned cosmetic rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    id: TitleId,
    name: TitleName,
    tier: Tier,
    description: String,
    created_at: DateTime<Utc>,
    equipped: bool,
}

impl Title {
    /// Create a freshly awarded, unequipped title.
    pub fn new(id: TitleId, name: TitleName, tier: Tier, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            tier,
            description: describe(tier),
            created_at,
            equipped: false,
        }
    }

    #[inline]
    pub fn id(&self) -> TitleId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &TitleName {
        &self.name
    }

    #[inline]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn is_equipped(&self) -> bool {
        self.equipped
    }

    /// Move the title to `tier` and refresh its description.
    pub(crate) fn upgrade_to(&mut self, tier: Tier) {
        self.tier = tier;
        self.description = describe(tier);
    }

    pub(crate) fn set_equipped(&mut self, equipped: bool) {
        self.equipped = equipped;
    }
}

fn describe(tier: Tier) -> String {
    format!("{} tier title", tier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Title {
        Title::new(
            TitleId::new(),
            TitleName::new("Stormbreaker").unwrap(),
            Tier::Rare,
            Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn new_title_is_unequipped_with_tier_description() {
        let title = sample();
        assert!(!title.is_equipped());
        assert_eq!(title.description(), "RARE tier title");
    }

    #[test]
    fn upgrade_refreshes_description() {
        let mut title = sample();
        title.upgrade_to(Tier::Hero);
        assert_eq!(title.tier(), Tier::Hero);
        assert_eq!(title.description(), "HERO tier title");
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["tier"], "RARE");
        assert_eq!(json["equipped"], false);
        assert!(json.get("createdAt").is_some());
    }
}
