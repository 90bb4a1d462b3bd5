//! Album and gallery image endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use persistence::entities::AlbumEntity;
use persistence::repositories::{group_by_parent, AlbumRepository, GalleryImageRepository};
use shared::pagination::Paginated;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Page, ValidJson};
use crate::middleware::metrics::record_content_created;
use domain::models::album::{
    AlbumListQuery, AlbumResponse, CreateAlbumRequest, CreateGalleryImageRequest,
    GalleryImageResponse, GalleryListQuery, UpdateAlbumRequest, UpdateGalleryImageRequest,
};
use domain::models::Album;

async fn with_images(
    state: &AppState,
    albums: Vec<AlbumEntity>,
) -> Result<Vec<AlbumResponse>, ApiError> {
    let ids: Vec<i64> = albums.iter().map(|a| a.id).collect();
    let images = GalleryImageRepository::new(state.pool.clone())
        .list_for_albums(&ids)
        .await?;
    let mut grouped = group_by_parent(images, |i| i.album_id);

    Ok(albums
        .into_iter()
        .map(|album| {
            let images = grouped
                .remove(&album.id)
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect();
            AlbumResponse::new(album.into(), images, &state.media)
        })
        .collect())
}

async fn one_with_images(state: &AppState, album: AlbumEntity) -> Result<AlbumResponse, ApiError> {
    with_images(state, vec![album])
        .await?
        .pop()
        .ok_or_else(|| ApiError::not_found("Album"))
}

/// List albums with `is_active`, `slug`, `search` and `ordering` filters.
///
/// GET /api/albums
pub async fn list_albums(
    State(state): State<AppState>,
    Query(query): Query<AlbumListQuery>,
    page: Page,
) -> Result<Json<Paginated<AlbumResponse>>, ApiError> {
    let filter = query.into_filter()?;

    let repo = AlbumRepository::new(state.pool.clone());
    let (entities, count) = repo.list(&filter, page.limit(), page.offset()).await?;
    let results = with_images(&state, entities).await?;
    Ok(Json(page.envelope(results, count)?))
}

/// GET /api/albums/:id
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AlbumResponse>, ApiError> {
    let repo = AlbumRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Album"))?;

    Ok(Json(one_with_images(&state, entity).await?))
}

/// POST /api/albums
pub async fn create_album(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateAlbumRequest>,
) -> Result<(StatusCode, Json<AlbumResponse>), ApiError> {
    let slug = request.resolve_slug()?;

    let repo = AlbumRepository::new(state.pool.clone());
    let entity = repo.create(&request, &slug).await?;

    info!(album_id = entity.id, slug = %entity.slug, "Album created");
    record_content_created("albums");

    Ok((
        StatusCode::CREATED,
        Json(AlbumResponse::new(entity.into(), Vec::new(), &state.media)),
    ))
}

/// PUT|PATCH /api/albums/:id
pub async fn update_album(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdateAlbumRequest>,
) -> Result<Json<AlbumResponse>, ApiError> {
    let repo = AlbumRepository::new(state.pool.clone());
    let current: Album = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Album"))?
        .into();
    let slug = request.resolve_slug(&current)?;

    let entity = repo
        .update(id, &request, slug.as_deref())
        .await?
        .ok_or_else(|| ApiError::not_found("Album"))?;

    info!(album_id = id, "Album updated");
    Ok(Json(one_with_images(&state, entity).await?))
}

/// Delete an album together with its images.
///
/// DELETE /api/albums/:id
pub async fn delete_album(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = AlbumRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("Album"));
    }

    info!(album_id = id, "Album deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// List gallery images, optionally for one album.
///
/// GET /api/gallery
pub async fn list_gallery_images(
    State(state): State<AppState>,
    Query(query): Query<GalleryListQuery>,
    page: Page,
) -> Result<Json<Paginated<GalleryImageResponse>>, ApiError> {
    let filter = query.into_filter()?;

    let repo = GalleryImageRepository::new(state.pool.clone());
    let (entities, count) = repo.list(&filter, page.limit(), page.offset()).await?;

    let results = entities
        .into_iter()
        .map(|e| GalleryImageResponse::new(e.into(), &state.media))
        .collect();
    Ok(Json(page.envelope(results, count)?))
}

/// GET /api/gallery/:id
pub async fn get_gallery_image(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<GalleryImageResponse>, ApiError> {
    let repo = GalleryImageRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Gallery image"))?;

    Ok(Json(GalleryImageResponse::new(entity.into(), &state.media)))
}

/// POST /api/gallery
pub async fn create_gallery_image(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateGalleryImageRequest>,
) -> Result<(StatusCode, Json<GalleryImageResponse>), ApiError> {
    let repo = GalleryImageRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    info!(image_id = entity.id, album_id = entity.album_id, "Gallery image created");
    record_content_created("gallery");

    Ok((
        StatusCode::CREATED,
        Json(GalleryImageResponse::new(entity.into(), &state.media)),
    ))
}

/// PUT|PATCH /api/gallery/:id
pub async fn update_gallery_image(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdateGalleryImageRequest>,
) -> Result<Json<GalleryImageResponse>, ApiError> {
    let repo = GalleryImageRepository::new(state.pool.clone());
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("Gallery image"))?;

    info!(image_id = id, "Gallery image updated");
    Ok(Json(GalleryImageResponse::new(entity.into(), &state.media)))
}

/// DELETE /api/gallery/:id
pub async fn delete_gallery_image(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = GalleryImageRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("Gallery image"));
    }

    info!(image_id = id, "Gallery image deleted");
    Ok(StatusCode::NO_CONTENT)
}
