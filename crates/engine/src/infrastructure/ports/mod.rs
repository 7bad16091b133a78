//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Profile storage (could swap in-memory -> a database)
//! - LLM calls and the generators built on them (could swap Ollama -> another provider)
//! - Clock/Random (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{PairUpdate, ProfileRepo, ProfileUpdate};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{
    ChatMessage, FinishReason, LlmPort, LlmRequest, LlmResponse, NarrativeCombatant,
    NarrativeGeneratorPort, NarrativeRequest, TitleTextGeneratorPort,
};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{MockLlmPort, MockNarrativeGeneratorPort, MockTitleTextGeneratorPort};

#[cfg(test)]
pub use repos::MockProfileRepo;

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::{LlmError, NarrativeError, RepoError, TitleTextError};
