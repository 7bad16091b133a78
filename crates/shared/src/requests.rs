//! Request bodies and query parameters for the HTTP API

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stateless battle between two free-form character names.
///
/// Ratings default to the starting rating when the client does not track
/// them; equipped titles are optional flavour for the narrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRequest {
    #[serde(default)]
    pub self_name: String,
    #[serde(default)]
    pub opponent_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_rating: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent_rating: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    #[serde(default)]
    pub character_name: String,
}

/// Server-authoritative battle against another stored profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedBattleRequest {
    pub opponent_id: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}
