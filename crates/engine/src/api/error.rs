//! Mapping of use-case errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use titlebattle_domain::EconomyError;
use titlebattle_shared::ErrorResponse;

use crate::infrastructure::ports::RepoError;
use crate::use_cases::{BattleError, ProfileError, RankedBattleError, TitleActionError};

/// Error returned by HTTP handlers.
///
/// Server-side failures carry their detail for logging only; the client
/// receives a generic message.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// An economy rule rejected the operation
    Conflict(String),
    TooManyRequests { remaining_secs: u64 },
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::TooManyRequests { remaining_secs } => (
                StatusCode::TOO_MANY_REQUESTS,
                format!("Battle cooldown active, retry in {remaining_secs}s"),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            RepoError::Rejected(inner) => ApiError::BadRequest(inner.to_string()),
            RepoError::Economy(inner) => inner.into(),
            RepoError::Database { .. } => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<EconomyError> for ApiError {
    fn from(e: EconomyError) -> Self {
        match e {
            EconomyError::TitleNotFound(_) => ApiError::NotFound(e.to_string()),
            EconomyError::InsufficientFunds { .. }
            | EconomyError::MaxTierReached(_)
            | EconomyError::TitleEquipped(_) => ApiError::Conflict(e.to_string()),
        }
    }
}

impl From<BattleError> for ApiError {
    fn from(e: BattleError) -> Self {
        match e {
            BattleError::InvalidInput(msg) => ApiError::BadRequest(msg),
            BattleError::TitleGeneration(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<RankedBattleError> for ApiError {
    fn from(e: RankedBattleError) -> Self {
        match e {
            RankedBattleError::InvalidInput(msg) => ApiError::BadRequest(msg),
            RankedBattleError::ProfileNotFound(_) => ApiError::NotFound(e.to_string()),
            RankedBattleError::CooldownActive { remaining_secs } => {
                ApiError::TooManyRequests { remaining_secs }
            }
            RankedBattleError::Battle(inner) => inner.into(),
            RankedBattleError::Repo(inner) => inner.into(),
        }
    }
}

impl From<ProfileError> for ApiError {
    fn from(e: ProfileError) -> Self {
        match e {
            ProfileError::NotFound(_) => ApiError::NotFound(e.to_string()),
            ProfileError::Validation(inner) => ApiError::BadRequest(inner.to_string()),
            ProfileError::Repo(inner) => inner.into(),
        }
    }
}

impl From<TitleActionError> for ApiError {
    fn from(e: TitleActionError) -> Self {
        match e {
            TitleActionError::ProfileNotFound(_) => ApiError::NotFound(e.to_string()),
            TitleActionError::Economy(inner) => inner.into(),
            TitleActionError::Repo(inner) => inner.into(),
        }
    }
}
