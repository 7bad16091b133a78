//! Battle sides and narrative results

use serde::{Deserialize, Serialize};

/// Log line used when no narrative could be generated.
pub const FALLBACK_LOG_LINE: &str = "After a fierce clash, the battle has been decided!";

/// Title keyword used when no narrative could be generated.
pub const FALLBACK_KEYWORD: &str = "courage";

/// One of the two participants of a battle.
///
/// The challenger is the participant who started the battle ("A" in
/// generator output), the opponent is the other one ("B").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Challenger,
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Challenger => Side::Opponent,
            Side::Opponent => Side::Challenger,
        }
    }

    /// Single-letter token used by text generators.
    pub fn token(self) -> &'static str {
        match self {
            Side::Challenger => "A",
            Side::Opponent => "B",
        }
    }

    /// Parse a generator token ("A" / "B", case-insensitive).
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "A" | "a" => Some(Side::Challenger),
            "B" | "b" => Some(Side::Opponent),
            _ => None,
        }
    }
}

/// Validated output of the narrative generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeResult {
    pub winner: Side,
    /// Ordered narration, one entry per line
    pub log: Vec<String>,
    /// Thematic keyword used to flavour the reward title
    pub keyword: String,
}

impl NarrativeResult {
    /// Deterministic stand-in used when narrative generation fails:
    /// the challenger wins, with one generic line and a generic keyword.
    pub fn fallback() -> Self {
        Self {
            winner: Side::Challenger,
            log: vec![FALLBACK_LOG_LINE.to_string()],
            keyword: FALLBACK_KEYWORD.to_string(),
        }
    }
}
