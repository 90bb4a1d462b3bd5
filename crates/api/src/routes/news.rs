//! News endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::entities::NewsEntity;
use persistence::repositories::{group_by_parent, AttachedImageRepository, ImageOwner, NewsRepository};
use shared::pagination::Paginated;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Page, ValidJson};
use crate::middleware::metrics::record_content_created;
use domain::models::image::{AttachedImageResponse, CreateAttachedImageRequest};
use domain::models::news::{CreateNewsRequest, NewsResponse, UpdateNewsRequest};
use domain::models::News;
use domain::services::visibility::{numeric_key, FEATURED_NEWS_LIMIT};

/// Resolves `news/{key}`: slug first, then a numeric id.
async fn find_news(repo: &NewsRepository, key: &str) -> Result<NewsEntity, ApiError> {
    if let Some(news) = repo.find_by_slug(key).await? {
        return Ok(news);
    }
    match numeric_key(key) {
        Some(id) => repo.find_by_id(id).await?,
        None => None,
    }
    .ok_or_else(|| ApiError::not_found("News"))
}

/// Attaches gallery images to each news item with one extra query.
async fn with_images(
    state: &AppState,
    entities: Vec<NewsEntity>,
) -> Result<Vec<NewsResponse>, ApiError> {
    let ids: Vec<i64> = entities.iter().map(|n| n.id).collect();
    let images = AttachedImageRepository::new(state.pool.clone(), ImageOwner::News)
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
            NewsResponse::new(entity.into(), images, &state.media)
        })
        .collect())
}

async fn one_with_images(state: &AppState, entity: NewsEntity) -> Result<NewsResponse, ApiError> {
    let mut responses = with_images(state, vec![entity]).await?;
    responses
        .pop()
        .ok_or_else(|| ApiError::Internal("news response missing".into()))
}

/// List news, newest first.
///
/// GET /api/news
pub async fn list_news(
    State(state): State<AppState>,
    page: Page,
) -> Result<Json<Paginated<NewsResponse>>, ApiError> {
    let repo = NewsRepository::new(state.pool.clone());
    let (entities, count) = repo.list(page.limit(), page.offset()).await?;
    let results = with_images(&state, entities).await?;
    Ok(Json(page.envelope(results, count)?))
}

/// Up to five featured news items.
///
/// GET /api/news/featured
pub async fn featured_news(
    State(state): State<AppState>,
) -> Result<Json<Vec<NewsResponse>>, ApiError> {
    let repo = NewsRepository::new(state.pool.clone());
    let entities = repo.list_featured(FEATURED_NEWS_LIMIT).await?;
    Ok(Json(with_images(&state, entities).await?))
}

/// Get a news item by slug or id.
///
/// GET /api/news/:key
pub async fn get_news(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<NewsResponse>, ApiError> {
    let repo = NewsRepository::new(state.pool.clone());
    let entity = find_news(&repo, &key).await?;
    Ok(Json(one_with_images(&state, entity).await?))
}

/// Create a news item. The slug is derived from the title when omitted.
///
/// POST /api/news
pub async fn create_news(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateNewsRequest>,
) -> Result<(StatusCode, Json<NewsResponse>), ApiError> {
    let slug = request.resolve_slug()?;

    let repo = NewsRepository::new(state.pool.clone());
    let entity = repo.create(&request, &slug).await?;

    info!(news_id = entity.id, slug = %entity.slug, "News created");
    record_content_created("news");

    let response = NewsResponse::new(entity.into(), Vec::new(), &state.media);
    Ok((StatusCode::CREATED, Json(response)))
}

/// Update a news item (partial update).
///
/// PUT|PATCH /api/news/:key
pub async fn update_news(
    State(state): State<AppState>,
    Path(key): Path<String>,
    ValidJson(request): ValidJson<UpdateNewsRequest>,
) -> Result<Json<NewsResponse>, ApiError> {
    let repo = NewsRepository::new(state.pool.clone());
    let current: News = find_news(&repo, &key).await?.into();
    let slug = request.resolve_slug(&current)?;

    let entity = repo
        .update(current.id, &request, slug.as_deref())
        .await?
        .ok_or_else(|| ApiError::not_found("News"))?;

    info!(news_id = entity.id, "News updated");
    Ok(Json(one_with_images(&state, entity).await?))
}

/// Delete a news item and its gallery.
///
/// DELETE /api/news/:key
pub async fn delete_news(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, ApiError> {
    let repo = NewsRepository::new(state.pool.clone());
    let news = find_news(&repo, &key).await?;

    if repo.delete(news.id).await? == 0 {
        return Err(ApiError::not_found("News"));
    }

    info!(news_id = news.id, "News deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Attach a gallery image to a news item.
///
/// POST /api/news/:key/images
pub async fn add_news_image(
    State(state): State<AppState>,
    Path(key): Path<String>,
    ValidJson(request): ValidJson<CreateAttachedImageRequest>,
) -> Result<(StatusCode, Json<AttachedImageResponse>), ApiError> {
    let news = find_news(&NewsRepository::new(state.pool.clone()), &key).await?;

    let repo = AttachedImageRepository::new(state.pool.clone(), ImageOwner::News);
    let entity = repo.create(news.id, &request).await?;

    info!(news_id = news.id, image_id = entity.id, "News image added");
    Ok((
        StatusCode::CREATED,
        Json(AttachedImageResponse::new(entity.into(), &state.media)),
    ))
}

/// Remove a gallery image from a news item.
///
/// DELETE /api/news/:key/images/:image_id
pub async fn delete_news_image(
    State(state): State<AppState>,
    Path((key, image_id)): Path<(String, i64)>,
) -> Result<StatusCode, ApiError> {
    let news = find_news(&NewsRepository::new(state.pool.clone()), &key).await?;

    let repo = AttachedImageRepository::new(state.pool.clone(), ImageOwner::News);
    if repo.delete(news.id, image_id).await? == 0 {
        return Err(ApiError::not_found("News image"));
    }

    info!(news_id = news.id, image_id, "News image removed");
    Ok(StatusCode::NO_CONTENT)
}
