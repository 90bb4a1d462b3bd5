//! Hero slide and hero intro endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::{HeroIntroRepository, HeroSlideRepository};
use shared::pagination::Paginated;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Page, ValidJson};
use crate::middleware::metrics::record_content_created;
use domain::models::hero::{
    CreateHeroIntroRequest, CreateHeroSlideRequest, HeroSlideResponse, UpdateHeroIntroRequest,
    UpdateHeroSlideRequest,
};
use domain::models::HeroIntro;
use domain::services::ViewAction;

/// GET /api/slides
pub async fn list_slides(
    State(state): State<AppState>,
    page: Page,
) -> Result<Json<Paginated<HeroSlideResponse>>, ApiError> {
    let repo = HeroSlideRepository::new(state.pool.clone());
    let (entities, count) = repo.list(page.limit(), page.offset()).await?;
    let results = entities
        .into_iter()
        .map(|e| HeroSlideResponse::new(e.into(), &state.media))
        .collect();
    Ok(Json(page.envelope(results, count)?))
}

/// GET /api/slides/:id
pub async fn get_slide(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<HeroSlideResponse>, ApiError> {
    let repo = HeroSlideRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Slide"))?;
    Ok(Json(HeroSlideResponse::new(entity.into(), &state.media)))
}

/// POST /api/slides
pub async fn create_slide(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateHeroSlideRequest>,
) -> Result<(StatusCode, Json<HeroSlideResponse>), ApiError> {
    let repo = HeroSlideRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    info!(slide_id = entity.id, position = entity.position, "Slide created");
    record_content_created("slides");

    Ok((
        StatusCode::CREATED,
        Json(HeroSlideResponse::new(entity.into(), &state.media)),
    ))
}

/// PUT|PATCH /api/slides/:id
pub async fn update_slide(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdateHeroSlideRequest>,
) -> Result<Json<HeroSlideResponse>, ApiError> {
    let repo = HeroSlideRepository::new(state.pool.clone());
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("Slide"))?;

    info!(slide_id = id, "Slide updated");
    Ok(Json(HeroSlideResponse::new(entity.into(), &state.media)))
}

/// DELETE /api/slides/:id
pub async fn delete_slide(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = HeroSlideRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("Slide"));
    }

    info!(slide_id = id, "Slide deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// List active hero intros, most recently edited first.
///
/// GET /api/hero-intro
pub async fn list_hero_intros(
    State(state): State<AppState>,
    page: Page,
) -> Result<Json<Paginated<HeroIntro>>, ApiError> {
    let repo = HeroIntroRepository::new(state.pool.clone());
    let (entities, count) = repo
        .list(ViewAction::List.active_only(), page.limit(), page.offset())
        .await?;
    let results = entities.into_iter().map(Into::into).collect();
    Ok(Json(page.envelope(results, count)?))
}

/// GET /api/hero-intro/:id
pub async fn get_hero_intro(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<HeroIntro>, ApiError> {
    let repo = HeroIntroRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id, ViewAction::Retrieve.active_only())
        .await?
        .ok_or_else(|| ApiError::not_found("Hero intro"))?;
    Ok(Json(entity.into()))
}

/// POST /api/hero-intro
pub async fn create_hero_intro(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateHeroIntroRequest>,
) -> Result<(StatusCode, Json<HeroIntro>), ApiError> {
    let repo = HeroIntroRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    info!(intro_id = entity.id, is_active = entity.is_active, "Hero intro created");
    record_content_created("hero_intro");

    Ok((StatusCode::CREATED, Json(entity.into())))
}

/// PUT|PATCH /api/hero-intro/:id
pub async fn update_hero_intro(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdateHeroIntroRequest>,
) -> Result<Json<HeroIntro>, ApiError> {
    let repo = HeroIntroRepository::new(state.pool.clone());
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("Hero intro"))?;

    info!(intro_id = id, "Hero intro updated");
    Ok(Json(entity.into()))
}

/// DELETE /api/hero-intro/:id
pub async fn delete_hero_intro(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = HeroIntroRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("Hero intro"));
    }

    info!(intro_id = id, "Hero intro deleted");
    Ok(StatusCode::NO_CONTENT)
}
