//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

use titlebattle_domain::{CharacterName, ProfileId, Side, TitleId};
use titlebattle_shared::{
    BattleRequest, BattleResponse, CreateProfileRequest, EnhanceTitleResponse, LeaderboardQuery,
    ProfileDto, ProfileSummaryDto, RankedBattleRequest, RankedBattleResponse, SellTitleResponse,
};

use super::convert::{battle_response, profile_dto, profile_summary, title_dto};
use super::ApiError;
use crate::app::App;
use crate::use_cases::Combatant;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/battle", post(battle))
        .route("/api/profiles", get(leaderboard).post(create_profile))
        .route("/api/profiles/{id}", get(get_profile))
        .route("/api/profiles/{id}/battles", post(ranked_battle))
        .route(
            "/api/profiles/{id}/titles/{title_id}/sell",
            post(sell_title),
        )
        .route(
            "/api/profiles/{id}/titles/{title_id}/enhance",
            post(enhance_title),
        )
        .route(
            "/api/profiles/{id}/titles/{title_id}/equip",
            post(equip_title),
        )
        .route(
            "/api/profiles/{id}/titles/{title_id}/unequip",
            post(unequip_title),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Battles
// =============================================================================

/// Stateless battle between two free-form names. The client keeps its own
/// rating, gold and cooldown.
async fn battle(
    State(app): State<Arc<App>>,
    Json(req): Json<BattleRequest>,
) -> Result<Json<BattleResponse>, ApiError> {
    let starting = app.rules.starting_rating;
    let challenger = combatant(&req.self_name, req.self_rating.unwrap_or(starting))?
        .with_title(req.self_title);
    let opponent = combatant(&req.opponent_name, req.opponent_rating.unwrap_or(starting))?
        .with_title(req.opponent_title);

    let outcome = app
        .use_cases
        .battle
        .run
        .execute(challenger, opponent)
        .await?;
    Ok(Json(battle_response(&outcome, Side::Challenger)))
}

fn combatant(name: &str, rating: i32) -> Result<Combatant, ApiError> {
    let name = CharacterName::new(name).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(Combatant::new(name, rating))
}

async fn ranked_battle(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(req): Json<RankedBattleRequest>,
) -> Result<Json<RankedBattleResponse>, ApiError> {
    let result = app
        .use_cases
        .battle
        .ranked
        .execute(ProfileId::from_uuid(id), ProfileId::from_uuid(req.opponent_id))
        .await?;

    let ops = &app.use_cases.profiles.ops;
    Ok(Json(RankedBattleResponse {
        outcome: battle_response(&result.outcome, Side::Challenger),
        self_profile: profile_dto(
            &result.challenger,
            ops.cooldown_remaining(&result.challenger),
        ),
        opponent: profile_dto(&result.opponent, ops.cooldown_remaining(&result.opponent)),
    }))
}

// =============================================================================
// Profiles
// =============================================================================

async fn create_profile(
    State(app): State<Arc<App>>,
    Json(req): Json<CreateProfileRequest>,
) -> Result<Json<ProfileDto>, ApiError> {
    let ops = &app.use_cases.profiles.ops;
    let profile = ops.create(&req.character_name).await?;
    Ok(Json(profile_dto(&profile, ops.cooldown_remaining(&profile))))
}

async fn get_profile(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileDto>, ApiError> {
    let ops = &app.use_cases.profiles.ops;
    let profile = ops.get(ProfileId::from_uuid(id)).await?;
    Ok(Json(profile_dto(&profile, ops.cooldown_remaining(&profile))))
}

async fn leaderboard(
    State(app): State<Arc<App>>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<ProfileSummaryDto>>, ApiError> {
    let profiles = app
        .use_cases
        .profiles
        .ops
        .leaderboard(query.limit)
        .await?;
    Ok(Json(profiles.iter().map(profile_summary).collect()))
}

// =============================================================================
// Titles
// =============================================================================

fn title_path((id, title_id): (Uuid, Uuid)) -> (ProfileId, TitleId) {
    (ProfileId::from_uuid(id), TitleId::from_uuid(title_id))
}

async fn sell_title(
    State(app): State<Arc<App>>,
    Path(path): Path<(Uuid, Uuid)>,
) -> Result<Json<SellTitleResponse>, ApiError> {
    let (profile_id, title_id) = title_path(path);
    let sale = app
        .use_cases
        .profiles
        .titles
        .sell(profile_id, title_id)
        .await?;

    let cooldown = app.use_cases.profiles.ops.cooldown_remaining(&sale.profile);
    Ok(Json(SellTitleResponse {
        credited: sale.credited,
        gold: sale.profile.gold(),
        profile: profile_dto(&sale.profile, cooldown),
    }))
}

async fn enhance_title(
    State(app): State<Arc<App>>,
    Path(path): Path<(Uuid, Uuid)>,
) -> Result<Json<EnhanceTitleResponse>, ApiError> {
    let (profile_id, title_id) = title_path(path);
    let result = app
        .use_cases
        .profiles
        .titles
        .enhance(profile_id, title_id)
        .await?;

    let cooldown = app
        .use_cases
        .profiles
        .ops
        .cooldown_remaining(&result.profile);
    Ok(Json(EnhanceTitleResponse {
        title: title_dto(&result.title),
        cost: result.plan.cost,
        profile: profile_dto(&result.profile, cooldown),
    }))
}

async fn equip_title(
    State(app): State<Arc<App>>,
    Path(path): Path<(Uuid, Uuid)>,
) -> Result<Json<ProfileDto>, ApiError> {
    let (profile_id, title_id) = title_path(path);
    let profile = app
        .use_cases
        .profiles
        .titles
        .equip(profile_id, title_id)
        .await?;
    let cooldown = app.use_cases.profiles.ops.cooldown_remaining(&profile);
    Ok(Json(profile_dto(&profile, cooldown)))
}

async fn unequip_title(
    State(app): State<Arc<App>>,
    Path(path): Path<(Uuid, Uuid)>,
) -> Result<Json<ProfileDto>, ApiError> {
    let (profile_id, title_id) = title_path(path);
    let profile = app
        .use_cases
        .profiles
        .titles
        .unequip(profile_id, title_id)
        .await?;
    let cooldown = app.use_cases.profiles.ops.cooldown_remaining(&profile);
    Ok(Json(profile_dto(&profile, cooldown)))
}
