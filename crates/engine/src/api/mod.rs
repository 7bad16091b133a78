//! API layer - HTTP entry points.

mod convert;
mod error;
pub mod http;

pub use error::ApiError;
