//! Title Battle Shared - Wire types for the HTTP API
//!
//! This crate contains the types exchanged between the engine and browser
//! clients:
//! - Request bodies and query parameters
//! - Response bodies and the error body
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, uuid and the domain vocabulary
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain IDs** - use raw `uuid::Uuid` in DTOs

pub mod requests;
pub mod responses;

pub use requests::{BattleRequest, CreateProfileRequest, LeaderboardQuery, RankedBattleRequest};
pub use responses::{
    BattleResponse, EnhanceTitleResponse, ErrorResponse, ProfileDto, ProfileSummaryDto,
    RankedBattleResponse, SellTitleResponse, Tier, TitleDto, WinnerDesignation,
};
