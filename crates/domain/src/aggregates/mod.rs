//! Aggregates - consistency boundaries for owner state

pub mod profile;

pub use profile::{BattleSettlement, Profile, SoldTitle};
