//! Publication and download category endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use persistence::entities::DownloadCategoryEntity;
use persistence::repositories::{group_by_parent, DownloadCategoryRepository, PublicationRepository};
use shared::pagination::Paginated;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Page, ValidJson};
use crate::middleware::metrics::record_content_created;
use domain::models::publication::{
    CreateDownloadCategoryRequest, CreatePublicationRequest, DownloadCategoryResponse,
    PublicationQuery, PublicationResponse, UpdateDownloadCategoryRequest,
    UpdatePublicationRequest,
};

/// List publications. Only active ones unless `active=false`.
///
/// GET /api/publications
pub async fn list_publications(
    State(state): State<AppState>,
    Query(query): Query<PublicationQuery>,
    page: Page,
) -> Result<Json<Paginated<PublicationResponse>>, ApiError> {
    let repo = PublicationRepository::new(state.pool.clone());
    let (entities, count) = repo
        .list(query.active_only(), page.limit(), page.offset())
        .await?;

    let results = entities
        .into_iter()
        .map(|e| PublicationResponse::new(e.into(), &state.media))
        .collect();
    Ok(Json(page.envelope(results, count)?))
}

/// GET /api/publications/:id
pub async fn get_publication(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<PublicationQuery>,
) -> Result<Json<PublicationResponse>, ApiError> {
    let repo = PublicationRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id, query.active_only())
        .await?
        .ok_or_else(|| ApiError::not_found("Publication"))?;

    Ok(Json(PublicationResponse::new(entity.into(), &state.media)))
}

/// POST /api/publications
pub async fn create_publication(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreatePublicationRequest>,
) -> Result<(StatusCode, Json<PublicationResponse>), ApiError> {
    let repo = PublicationRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    info!(
        publication_id = entity.id,
        category_id = ?entity.category_id,
        "Publication created"
    );
    record_content_created("publications");

    Ok((
        StatusCode::CREATED,
        Json(PublicationResponse::new(entity.into(), &state.media)),
    ))
}

/// Update a publication. Inactive publications can be edited too.
///
/// PUT|PATCH /api/publications/:id
pub async fn update_publication(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdatePublicationRequest>,
) -> Result<Json<PublicationResponse>, ApiError> {
    let repo = PublicationRepository::new(state.pool.clone());
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("Publication"))?;

    info!(publication_id = id, "Publication updated");
    Ok(Json(PublicationResponse::new(entity.into(), &state.media)))
}

/// DELETE /api/publications/:id
pub async fn delete_publication(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = PublicationRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("Publication"));
    }

    info!(publication_id = id, "Publication deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Embeds each category's active publications.
async fn with_publications(
    state: &AppState,
    categories: Vec<DownloadCategoryEntity>,
) -> Result<Vec<DownloadCategoryResponse>, ApiError> {
    let ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
    let publications = PublicationRepository::new(state.pool.clone())
        .list_active_for_categories(&ids)
        .await?;
    let mut grouped = group_by_parent(publications, |p| p.category_id.unwrap_or_default());

    Ok(categories
        .into_iter()
        .map(|category| {
            let publications = grouped
                .remove(&category.id)
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect();
            DownloadCategoryResponse::new(category.into(), publications, &state.media)
        })
        .collect())
}

/// GET /api/download-categories
pub async fn list_download_categories(
    State(state): State<AppState>,
    page: Page,
) -> Result<Json<Paginated<DownloadCategoryResponse>>, ApiError> {
    let repo = DownloadCategoryRepository::new(state.pool.clone());
    let (entities, count) = repo.list(page.limit(), page.offset()).await?;
    let results = with_publications(&state, entities).await?;
    Ok(Json(page.envelope(results, count)?))
}

/// GET /api/download-categories/:id
pub async fn get_download_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DownloadCategoryResponse>, ApiError> {
    let repo = DownloadCategoryRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Download category"))?;

    with_publications(&state, vec![entity])
        .await?
        .pop()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Download category"))
}

/// POST /api/download-categories
pub async fn create_download_category(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateDownloadCategoryRequest>,
) -> Result<(StatusCode, Json<DownloadCategoryResponse>), ApiError> {
    let repo = DownloadCategoryRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    info!(category_id = entity.id, name = %entity.name, "Download category created");
    record_content_created("download_categories");

    Ok((
        StatusCode::CREATED,
        Json(DownloadCategoryResponse::new(
            entity.into(),
            Vec::new(),
            &state.media,
        )),
    ))
}

/// PUT|PATCH /api/download-categories/:id
pub async fn update_download_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdateDownloadCategoryRequest>,
) -> Result<Json<DownloadCategoryResponse>, ApiError> {
    let repo = DownloadCategoryRepository::new(state.pool.clone());
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("Download category"))?;

    info!(category_id = id, "Download category updated");
    with_publications(&state, vec![entity])
        .await?
        .pop()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Download category"))
}

/// Delete a category. Its publications are kept and lose the category.
///
/// DELETE /api/download-categories/:id
pub async fn delete_download_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = DownloadCategoryRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("Download category"));
    }

    info!(category_id = id, "Download category deleted");
    Ok(StatusCode::NO_CONTENT)
}
