//! Response bodies for the HTTP API
//!
//! Timestamps are Unix epoch milliseconds, matching what browser clients
//! keep in local storage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared vocabulary types from domain
pub use titlebattle_domain::Tier;

/// A title as seen by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleDto {
    pub id: Uuid,
    pub name: String,
    pub tier: Tier,
    /// Display label of the tier
    pub tier_label: String,
    pub description: String,
    pub created_at: i64,
    pub equipped: bool,
    pub sell_price: u64,
    /// Cost of the next enhancement; absent at the top tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhance_cost: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_tier: Option<Tier>,
}

/// Which participant won, from the requesting client's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinnerDesignation {
    Me,
    Opponent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleResponse {
    pub log: Vec<String>,
    pub winner: WinnerDesignation,
    /// Winner's rating gain; the loser loses the same amount
    pub rating_delta: i32,
    pub new_title: Option<TitleDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: Uuid,
    pub character_name: String,
    pub rating: i32,
    pub gold: u64,
    pub wins: u32,
    pub losses: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_battle_time: Option<i64>,
    pub cooldown_remaining_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipped_title_id: Option<Uuid>,
    pub titles: Vec<TitleDto>,
}

/// Leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummaryDto {
    pub id: Uuid,
    pub character_name: String,
    pub rating: i32,
    pub wins: u32,
    pub losses: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipped_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedBattleResponse {
    pub outcome: BattleResponse,
    #[serde(rename = "self")]
    pub self_profile: ProfileDto,
    pub opponent: ProfileDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellTitleResponse {
    pub credited: u64,
    pub gold: u64,
    pub profile: ProfileDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceTitleResponse {
    pub title: TitleDto,
    pub cost: u64,
    pub profile: ProfileDto,
}

/// Error body for every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
