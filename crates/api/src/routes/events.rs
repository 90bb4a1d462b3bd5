//! Event and headline statistic endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::{EventRepository, StatRepository};
use shared::pagination::Paginated;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Page, ValidJson};
use crate::middleware::metrics::record_content_created;
use domain::models::event::{CreateEventRequest, UpdateEventRequest};
use domain::models::stat::{CreateStatRequest, UpdateStatRequest};
use domain::models::{Event, Stat};

/// List events by start date.
///
/// GET /api/events
pub async fn list_events(
    State(state): State<AppState>,
    page: Page,
) -> Result<Json<Paginated<Event>>, ApiError> {
    let repo = EventRepository::new(state.pool.clone());
    let (entities, count) = repo.list(page.limit(), page.offset()).await?;
    let results = entities.into_iter().map(Into::into).collect();
    Ok(Json(page.envelope(results, count)?))
}

/// GET /api/events/:id
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Event>, ApiError> {
    let repo = EventRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event"))?;
    Ok(Json(entity.into()))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let repo = EventRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    info!(event_id = entity.id, start_date = %entity.start_date, "Event created");
    record_content_created("events");

    Ok((StatusCode::CREATED, Json(entity.into())))
}

/// PUT|PATCH /api/events/:id
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdateEventRequest>,
) -> Result<Json<Event>, ApiError> {
    let repo = EventRepository::new(state.pool.clone());
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("Event"))?;

    info!(event_id = id, "Event updated");
    Ok(Json(entity.into()))
}

/// DELETE /api/events/:id
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = EventRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("Event"));
    }

    info!(event_id = id, "Event deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/stats
pub async fn list_stats(
    State(state): State<AppState>,
    page: Page,
) -> Result<Json<Paginated<Stat>>, ApiError> {
    let repo = StatRepository::new(state.pool.clone());
    let (entities, count) = repo.list(page.limit(), page.offset()).await?;
    let results = entities.into_iter().map(Into::into).collect();
    Ok(Json(page.envelope(results, count)?))
}

/// GET /api/stats/:id
pub async fn get_stat(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Stat>, ApiError> {
    let repo = StatRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Stat"))?;
    Ok(Json(entity.into()))
}

/// POST /api/stats
pub async fn create_stat(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateStatRequest>,
) -> Result<(StatusCode, Json<Stat>), ApiError> {
    let repo = StatRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    info!(stat_id = entity.id, "Stat created");
    record_content_created("stats");

    Ok((StatusCode::CREATED, Json(entity.into())))
}

/// PUT|PATCH /api/stats/:id
pub async fn update_stat(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdateStatRequest>,
) -> Result<Json<Stat>, ApiError> {
    let repo = StatRepository::new(state.pool.clone());
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("Stat"))?;

    info!(stat_id = id, "Stat updated");
    Ok(Json(entity.into()))
}

/// DELETE /api/stats/:id
pub async fn delete_stat(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = StatRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("Stat"));
    }

    info!(stat_id = id, "Stat deleted");
    Ok(StatusCode::NO_CONTENT)
}
