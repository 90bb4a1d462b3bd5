//! Video endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::VideoRepository;
use shared::pagination::Paginated;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Page, ValidJson};
use crate::middleware::metrics::record_content_created;
use domain::models::video::{CreateVideoRequest, UpdateVideoRequest, VideoResponse};
use domain::models::Video;

/// GET /api/videos
pub async fn list_videos(
    State(state): State<AppState>,
    page: Page,
) -> Result<Json<Paginated<VideoResponse>>, ApiError> {
    let repo = VideoRepository::new(state.pool.clone());
    let (entities, count) = repo.list(page.limit(), page.offset()).await?;

    let results = entities
        .into_iter()
        .map(|e| VideoResponse::new(e.into(), &state.media))
        .collect();
    Ok(Json(page.envelope(results, count)?))
}

/// GET /api/videos/:id
pub async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<VideoResponse>, ApiError> {
    let repo = VideoRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Video"))?;

    Ok(Json(VideoResponse::new(entity.into(), &state.media)))
}

/// Create a video. Needs an uploaded file or an external URL.
///
/// POST /api/videos
pub async fn create_video(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateVideoRequest>,
) -> Result<(StatusCode, Json<VideoResponse>), ApiError> {
    request.ensure_playable()?;

    let repo = VideoRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    info!(video_id = entity.id, "Video created");
    record_content_created("videos");

    Ok((
        StatusCode::CREATED,
        Json(VideoResponse::new(entity.into(), &state.media)),
    ))
}

/// Update a video. The merged record must still have a file or URL.
///
/// PUT|PATCH /api/videos/:id
pub async fn update_video(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdateVideoRequest>,
) -> Result<Json<VideoResponse>, ApiError> {
    let repo = VideoRepository::new(state.pool.clone());
    let current: Video = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Video"))?
        .into();
    request.ensure_playable(&current)?;

    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("Video"))?;

    info!(video_id = id, "Video updated");
    Ok(Json(VideoResponse::new(entity.into(), &state.media)))
}

/// DELETE /api/videos/:id
pub async fn delete_video(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = VideoRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("Video"));
    }

    info!(video_id = id, "Video deleted");
    Ok(StatusCode::NO_CONTENT)
}
