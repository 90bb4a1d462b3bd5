//! Notice endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::entities::NoticeEntity;
use persistence::repositories::{
    group_by_parent, AttachedImageRepository, ImageOwner, NoticeRepository,
};
use shared::pagination::Paginated;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Page, ValidJson};
use crate::middleware::metrics::record_content_created;
use domain::models::image::{AttachedImageResponse, CreateAttachedImageRequest};
use domain::models::notice::{CreateNoticeRequest, NoticeResponse, UpdateNoticeRequest};

async fn with_images(
    state: &AppState,
    entities: Vec<NoticeEntity>,
) -> Result<Vec<NoticeResponse>, ApiError> {
    let ids: Vec<i64> = entities.iter().map(|n| n.id).collect();
    let images = AttachedImageRepository::new(state.pool.clone(), ImageOwner::Notice)
        .list_for_many(&ids)
        .await?;
    let mut grouped = group_by_parent(images, |i| i.parent_id);

    Ok(entities
        .into_iter()
        .map(|entity| {
            let images = grouped
                .remove(&entity.id)
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect();
            NoticeResponse::new(entity.into(), images, &state.media)
        })
        .collect())
}

async fn find_notice(state: &AppState, id: i64) -> Result<NoticeEntity, ApiError> {
    NoticeRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Notice"))
}

/// List notices, newest and highest priority first.
///
/// GET /api/notices
pub async fn list_notices(
    State(state): State<AppState>,
    page: Page,
) -> Result<Json<Paginated<NoticeResponse>>, ApiError> {
    let repo = NoticeRepository::new(state.pool.clone());
    let (entities, count) = repo.list(page.limit(), page.offset()).await?;
    let results = with_images(&state, entities).await?;
    Ok(Json(page.envelope(results, count)?))
}

/// GET /api/notices/:id
pub async fn get_notice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<NoticeResponse>, ApiError> {
    let entity = find_notice(&state, id).await?;
    let mut responses = with_images(&state, vec![entity]).await?;
    responses
        .pop()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Notice"))
}

/// POST /api/notices
pub async fn create_notice(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateNoticeRequest>,
) -> Result<(StatusCode, Json<NoticeResponse>), ApiError> {
    let repo = NoticeRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    info!(notice_id = entity.id, priority = entity.priority, "Notice created");
    record_content_created("notices");

    let response = NoticeResponse::new(entity.into(), Vec::new(), &state.media);
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT|PATCH /api/notices/:id
pub async fn update_notice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdateNoticeRequest>,
) -> Result<Json<NoticeResponse>, ApiError> {
    let repo = NoticeRepository::new(state.pool.clone());
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("Notice"))?;

    info!(notice_id = id, "Notice updated");
    let mut responses = with_images(&state, vec![entity]).await?;
    responses
        .pop()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Notice"))
}

/// DELETE /api/notices/:id
pub async fn delete_notice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = NoticeRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("Notice"));
    }

    info!(notice_id = id, "Notice deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/notices/:id/images
pub async fn add_notice_image(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<CreateAttachedImageRequest>,
) -> Result<(StatusCode, Json<AttachedImageResponse>), ApiError> {
    let notice = find_notice(&state, id).await?;

    let repo = AttachedImageRepository::new(state.pool.clone(), ImageOwner::Notice);
    let entity = repo.create(notice.id, &request).await?;

    info!(notice_id = notice.id, image_id = entity.id, "Notice image added");
    Ok((
        StatusCode::CREATED,
        Json(AttachedImageResponse::new(entity.into(), &state.media)),
    ))
}

/// DELETE /api/notices/:id/images/:image_id
pub async fn delete_notice_image(
    State(state): State<AppState>,
    Path((id, image_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    let repo = AttachedImageRepository::new(state.pool.clone(), ImageOwner::Notice);
    if repo.delete(id, image_id).await? == 0 {
        return Err(ApiError::not_found("Notice image"));
    }

    info!(notice_id = id, image_id, "Notice image removed");
    Ok(StatusCode::NO_CONTENT)
}
