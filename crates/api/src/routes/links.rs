//! External link and footer link endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::{ExternalLinkRepository, FooterLinkRepository};
use shared::pagination::Paginated;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Page, ValidJson};
use crate::middleware::metrics::record_content_created;
use domain::models::link::{CreateLinkRequest, UpdateLinkRequest};
use domain::models::{ExternalLink, FooterLink};
use domain::services::ViewAction;

/// GET /api/links
pub async fn list_links(
    State(state): State<AppState>,
    page: Page,
) -> Result<Json<Paginated<ExternalLink>>, ApiError> {
    let repo = ExternalLinkRepository::new(state.pool.clone());
    let (entities, count) = repo.list(page.limit(), page.offset()).await?;
    let results = entities.into_iter().map(Into::into).collect();
    Ok(Json(page.envelope(results, count)?))
}

/// GET /api/links/:id
pub async fn get_link(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ExternalLink>, ApiError> {
    let repo = ExternalLinkRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Link"))?;
    Ok(Json(entity.into()))
}

/// POST /api/links
pub async fn create_link(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateLinkRequest>,
) -> Result<(StatusCode, Json<ExternalLink>), ApiError> {
    let repo = ExternalLinkRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    info!(link_id = entity.id, "External link created");
    record_content_created("links");

    Ok((StatusCode::CREATED, Json(entity.into())))
}

/// PUT|PATCH /api/links/:id
pub async fn update_link(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdateLinkRequest>,
) -> Result<Json<ExternalLink>, ApiError> {
    let repo = ExternalLinkRepository::new(state.pool.clone());
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("Link"))?;

    info!(link_id = id, "External link updated");
    Ok(Json(entity.into()))
}

/// DELETE /api/links/:id
pub async fn delete_link(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = ExternalLinkRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("Link"));
    }

    info!(link_id = id, "External link deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// List active footer links.
///
/// GET /api/footer-links
pub async fn list_footer_links(
    State(state): State<AppState>,
    page: Page,
) -> Result<Json<Paginated<FooterLink>>, ApiError> {
    let repo = FooterLinkRepository::new(state.pool.clone());
    let (entities, count) = repo
        .list(ViewAction::List.active_only(), page.limit(), page.offset())
        .await?;
    let results = entities.into_iter().map(Into::into).collect();
    Ok(Json(page.envelope(results, count)?))
}

/// Get an active footer link.
///
/// GET /api/footer-links/:id
pub async fn get_footer_link(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FooterLink>, ApiError> {
    let repo = FooterLinkRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id, ViewAction::Retrieve.active_only())
        .await?
        .ok_or_else(|| ApiError::not_found("Footer link"))?;
    Ok(Json(entity.into()))
}

/// POST /api/footer-links
pub async fn create_footer_link(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateLinkRequest>,
) -> Result<(StatusCode, Json<FooterLink>), ApiError> {
    let repo = FooterLinkRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    info!(link_id = entity.id, is_active = entity.is_active, "Footer link created");
    record_content_created("footer_links");

    Ok((StatusCode::CREATED, Json(entity.into())))
}

/// Update a footer link, active or not.
///
/// PUT|PATCH /api/footer-links/:id
pub async fn update_footer_link(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdateLinkRequest>,
) -> Result<Json<FooterLink>, ApiError> {
    let repo = FooterLinkRepository::new(state.pool.clone());
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("Footer link"))?;

    info!(link_id = id, "Footer link updated");
    Ok(Json(entity.into()))
}

/// DELETE /api/footer-links/:id
pub async fn delete_footer_link(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = FooterLinkRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("Footer link"));
    }

    info!(link_id = id, "Footer link deleted");
    Ok(StatusCode::NO_CONTENT)
}
