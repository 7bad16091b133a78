//! Profile aggregate - an owner's rating, gold and title collection
//!
//! # Invariants
//!
//! - `rating` never drops below 0 (deltas are applied with a floor)
//! - `gold` is never negative (unsigned; costs are checked before deduction)
//! - At most one title is equipped
//! - An equipped title cannot be sold
//! - Every failing operation leaves the profile unchanged

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Title;
use crate::error::{DomainError, EconomyError};
use crate::ids::{ProfileId, TitleId};
use crate::value_objects::{
    apply_rating_delta, plan_enhancement, CharacterName, EnhancementPlan, MatchResult,
    STARTING_RATING,
};

/// An owner's persistent game state.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use titlebattle_domain::{CharacterName, Profile, ProfileId};
///
/// let profile = Profile::new(ProfileId::new(), CharacterName::new("Aria").unwrap(), Utc::now());
/// assert_eq!(profile.rating(), 1000);
/// assert_eq!(profile.gold(), 0);
/// assert!(profile.titles().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    id: ProfileId,
    name: CharacterName,
    rating: i32,
    gold: u64,
    wins: u32,
    losses: u32,
    last_battle_at: Option<DateTime<Utc>>,
    titles: Vec<Title>,
    created_at: DateTime<Utc>,
}

/// Result of a title sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoldTitle {
    pub title: Title,
    pub credited: u64,
}

/// What one battle changes on one participant's profile.
///
/// Only a win can carry a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleSettlement {
    result: MatchResult,
    rating_delta: i32,
    gold_reward: u64,
    title: Option<Title>,
    at: DateTime<Utc>,
}

impl BattleSettlement {
    pub fn win(rating_delta: i32, gold_reward: u64, title: Option<Title>, at: DateTime<Utc>) -> Self {
        Self {
            result: MatchResult::Win,
            rating_delta,
            gold_reward,
            title,
            at,
        }
    }

    pub fn loss(rating_delta: i32, gold_reward: u64, at: DateTime<Utc>) -> Self {
        Self {
            result: MatchResult::Lose,
            rating_delta,
            gold_reward,
            title: None,
            at,
        }
    }

    pub fn result(&self) -> MatchResult {
        self.result
    }
}

impl Profile {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a new profile with the starting rating and no gold.
    pub fn new(id: ProfileId, name: CharacterName, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            rating: STARTING_RATING,
            gold: 0,
            wins: 0,
            losses: 0,
            last_battle_at: None,
            titles: Vec::new(),
            created_at: now,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    pub fn with_rating(mut self, rating: i32) -> Self {
        self.rating = rating.max(0);
        self
    }

    pub fn with_gold(mut self, gold: u64) -> Self {
        self.gold = gold;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> ProfileId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    #[inline]
    pub fn rating(&self) -> i32 {
        self.rating
    }

    #[inline]
    pub fn gold(&self) -> u64 {
        self.gold
    }

    #[inline]
    pub fn wins(&self) -> u32 {
        self.wins
    }

    #[inline]
    pub fn losses(&self) -> u32 {
        self.losses
    }

    #[inline]
    pub fn last_battle_at(&self) -> Option<DateTime<Utc>> {
        self.last_battle_at
    }

    #[inline]
    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn title(&self, title_id: TitleId) -> Option<&Title> {
        self.titles.iter().find(|t| t.id() == title_id)
    }

    pub fn equipped_title(&self) -> Option<&Title> {
        self.titles.iter().find(|t| t.is_equipped())
    }

    // =========================================================================
    // Cooldown
    // =========================================================================

    /// Whole seconds until the next battle is allowed (rounded up, 0 if ready).
    pub fn remaining_cooldown(&self, now: DateTime<Utc>, cooldown: Duration) -> u64 {
        let Some(last) = self.last_battle_at else {
            return 0;
        };
        let elapsed = (now - last).max(Duration::zero());
        let remaining_ms = (cooldown - elapsed).num_milliseconds();
        if remaining_ms <= 0 {
            0
        } else {
            (remaining_ms as u64).div_ceil(1000)
        }
    }

    /// Fail with `DomainError::CooldownActive` while the cooldown runs.
    pub fn ensure_ready(&self, now: DateTime<Utc>, cooldown: Duration) -> Result<(), DomainError> {
        match self.remaining_cooldown(now, cooldown) {
            0 => Ok(()),
            remaining => Err(DomainError::cooldown(remaining)),
        }
    }

    // =========================================================================
    // Battle Resolution
    // =========================================================================

    /// Apply one battle: counters, floored rating, gold reward, timestamp,
    /// and the reward title on a win.
    pub fn record_battle(&mut self, settlement: BattleSettlement) {
        match settlement.result {
            MatchResult::Win => self.wins = self.wins.saturating_add(1),
            MatchResult::Lose => self.losses = self.losses.saturating_add(1),
        }
        self.rating = apply_rating_delta(self.rating, settlement.rating_delta);
        self.gold = self.gold.saturating_add(settlement.gold_reward);
        self.last_battle_at = Some(settlement.at);
        if let Some(title) = settlement.title {
            self.titles.push(title);
        }
    }

    // =========================================================================
    // Title Economy
    // =========================================================================

    /// Upgrade a title one tier, paying its enhancement cost.
    ///
    /// # Errors
    ///
    /// - `TitleNotFound` if the title is not owned
    /// - `MaxTierReached` if the title is already at the top tier
    /// - `InsufficientFunds` if gold is below the cost
    pub fn enhance_title(&mut self, title_id: TitleId) -> Result<EnhancementPlan, EconomyError> {
        let gold = self.gold;
        let title = self
            .titles
            .iter_mut()
            .find(|t| t.id() == title_id)
            .ok_or(EconomyError::TitleNotFound(title_id))?;

        let plan = plan_enhancement(title.tier(), gold)?;
        title.upgrade_to(plan.to);
        self.gold = gold - plan.cost;
        Ok(plan)
    }

    /// Sell a title for its tier's price and remove it from the collection.
    ///
    /// # Errors
    ///
    /// - `TitleNotFound` if the title is not owned
    /// - `TitleEquipped` if the title is currently equipped
    pub fn sell_title(&mut self, title_id: TitleId) -> Result<SoldTitle, EconomyError> {
        let index = self
            .titles
            .iter()
            .position(|t| t.id() == title_id)
            .ok_or(EconomyError::TitleNotFound(title_id))?;

        if self.titles[index].is_equipped() {
            return Err(EconomyError::TitleEquipped(title_id));
        }

        let title = self.titles.remove(index);
        let credited = title.tier().sell_price();
        self.gold = self.gold.saturating_add(credited);
        Ok(SoldTitle { title, credited })
    }

    /// Equip a title, unequipping any other.
    pub fn equip_title(&mut self, title_id: TitleId) -> Result<(), EconomyError> {
        if self.title(title_id).is_none() {
            return Err(EconomyError::TitleNotFound(title_id));
        }
        for title in &mut self.titles {
            title.set_equipped(title.id() == title_id);
        }
        Ok(())
    }

    pub fn unequip_title(&mut self, title_id: TitleId) -> Result<(), EconomyError> {
        let title = self
            .titles
            .iter_mut()
            .find(|t| t.id() == title_id)
            .ok_or(EconomyError::TitleNotFound(title_id))?;
        title.set_equipped(false);
        Ok(())
    }
}
