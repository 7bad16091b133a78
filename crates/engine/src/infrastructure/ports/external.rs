//! External service port traits (LLM, battle narrator, title-text generator).

use async_trait::async_trait;
use titlebattle_domain::{NarrativeResult, Tier, TitleName};

use super::error::{LlmError, NarrativeError, TitleTextError};

// =============================================================================
// LLM Types
// =============================================================================

/// LLM request/response types
#[derive(Debug, Clone)]
pub struct LlmRequest {
    /// The conversation history
    pub messages: Vec<ChatMessage>,
    /// System prompt / context
    pub system_prompt: Option<String>,
    /// Temperature for response generation (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl LlmRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            system_prompt: None,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// A user turn in the conversation
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Response from the LLM
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// The generated text content
    pub content: String,
    /// Why generation stopped
    pub finish_reason: FinishReason,
}

impl LlmResponse {
    /// Completed response.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            finish_reason: FinishReason::Stop,
        }
    }

    /// True when the model stopped at the token limit.
    pub fn is_truncated(&self) -> bool {
        self.finish_reason == FinishReason::Length
    }
}

/// Reason the generation finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    /// Hit `max_tokens`
    Length,
    Other,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmPort: Send + Sync {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;
}

// =============================================================================
// Battle Generation
// =============================================================================

/// One side of a battle as presented to the narrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeCombatant {
    pub name: String,
    pub rating: i32,
    /// Name of the equipped title, if any
    pub title: Option<String>,
}

/// Input for one battle narration. The challenger is participant "A".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeRequest {
    pub challenger: NarrativeCombatant,
    pub opponent: NarrativeCombatant,
}

/// Decides the winner and narrates the fight.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NarrativeGeneratorPort: Send + Sync {
    async fn generate_battle(
        &self,
        request: NarrativeRequest,
    ) -> Result<NarrativeResult, NarrativeError>;
}

/// Produces the display text of a reward title.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TitleTextGeneratorPort: Send + Sync {
    async fn generate_title(
        &self,
        winner_name: &str,
        keyword: &str,
        tier: Tier,
    ) -> Result<TitleName, TitleTextError>;
}
