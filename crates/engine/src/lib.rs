//! Title Battle Engine library.
//!
//! This crate contains all server-side code for the title battle game.
//!
//! ## Structure
//!
//! - `use_cases/` - Battle, profile and title orchestration
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod prompt_templates;
pub mod use_cases;

pub use app::App;
pub use config::EngineConfig;
