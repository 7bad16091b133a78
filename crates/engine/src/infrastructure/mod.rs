//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod narrative_generator;
pub mod ollama;
pub mod ports;
pub mod profiles;
pub mod resilient_llm;
pub mod title_generator;
