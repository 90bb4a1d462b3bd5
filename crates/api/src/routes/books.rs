//! Library (books) and book category endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use persistence::entities::LibraryEntryEntity;
use persistence::repositories::{
    group_by_parent, BookImageRepository, LibraryCategoryRepository, LibraryEntryRepository,
};
use shared::pagination::Paginated;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Page, ValidJson};
use crate::middleware::metrics::record_content_created;
use domain::models::library::{
    BookImageResponse, BookListQuery, CreateBookImageRequest, CreateLibraryCategoryRequest,
    CreateLibraryEntryRequest, LibraryCategoryListQuery, LibraryCategoryResponse,
    LibraryEntryResponse, UpdateLibraryCategoryRequest, UpdateLibraryEntryRequest,
};
use domain::models::{LibraryCategory, LibraryEntry};
use domain::services::visibility;

async fn with_images(
    state: &AppState,
    entries: Vec<LibraryEntryEntity>,
) -> Result<Vec<LibraryEntryResponse>, ApiError> {
    let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
    let images = BookImageRepository::new(state.pool.clone())
        .list_for_many(&ids)
        .await?;
    let mut grouped = group_by_parent(images, |i| i.entry_id);

    Ok(entries
        .into_iter()
        .map(|entry| {
            let images = grouped
                .remove(&entry.id)
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect();
            LibraryEntryResponse::new(entry.into(), images, &state.media)
        })
        .collect())
}

async fn one_with_images(
    state: &AppState,
    entry: LibraryEntryEntity,
) -> Result<LibraryEntryResponse, ApiError> {
    with_images(state, vec![entry])
        .await?
        .pop()
        .ok_or_else(|| ApiError::Internal("book response missing".into()))
}

/// GET /api/book-categories
pub async fn list_book_categories(
    State(state): State<AppState>,
    Query(query): Query<LibraryCategoryListQuery>,
    page: Page,
) -> Result<Json<Paginated<LibraryCategoryResponse>>, ApiError> {
    let search = visibility::search_pattern(query.search.as_deref());

    let repo = LibraryCategoryRepository::new(state.pool.clone());
    let (entities, count) = repo
        .list(search.as_deref(), page.limit(), page.offset())
        .await?;
    let results = entities
        .into_iter()
        .map(|e| LibraryCategory::from(e).into())
        .collect();
    Ok(Json(page.envelope(results, count)?))
}

/// GET /api/book-categories/:id
pub async fn get_book_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LibraryCategoryResponse>, ApiError> {
    let repo = LibraryCategoryRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Book category"))?;
    Ok(Json(LibraryCategory::from(entity).into()))
}

/// POST /api/book-categories
pub async fn create_book_category(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateLibraryCategoryRequest>,
) -> Result<(StatusCode, Json<LibraryCategoryResponse>), ApiError> {
    let slug = request.resolve_slug()?;

    let repo = LibraryCategoryRepository::new(state.pool.clone());
    let entity = repo.create(&request, &slug).await?;

    info!(category_id = entity.id, slug = %entity.slug, "Book category created");
    record_content_created("book_categories");

    Ok((StatusCode::CREATED, Json(LibraryCategory::from(entity).into())))
}

/// PUT|PATCH /api/book-categories/:id
pub async fn update_book_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdateLibraryCategoryRequest>,
) -> Result<Json<LibraryCategoryResponse>, ApiError> {
    let repo = LibraryCategoryRepository::new(state.pool.clone());
    let current: LibraryCategory = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Book category"))?
        .into();
    let slug = request.resolve_slug(&current)?;

    let entity = repo
        .update(id, &request, slug.as_deref())
        .await?
        .ok_or_else(|| ApiError::not_found("Book category"))?;

    info!(category_id = id, "Book category updated");
    Ok(Json(LibraryCategory::from(entity).into()))
}

/// Delete a category. Its books stay, uncategorized.
///
/// DELETE /api/book-categories/:id
pub async fn delete_book_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = LibraryCategoryRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("Book category"));
    }

    info!(category_id = id, "Book category deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// List books with `active`, `featured`, `category`, `year`, `search` and
/// `ordering` filters.
///
/// GET /api/books
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<BookListQuery>,
    page: Page,
) -> Result<Json<Paginated<LibraryEntryResponse>>, ApiError> {
    let filter = query.into_filter()?;

    let repo = LibraryEntryRepository::new(state.pool.clone());
    let (entities, count) = repo.list(&filter, page.limit(), page.offset()).await?;
    let results = with_images(&state, entities).await?;
    Ok(Json(page.envelope(results, count)?))
}

/// The most recently published books, as a bare array.
///
/// GET /api/books/latest
pub async fn latest_books(
    State(state): State<AppState>,
    Query(query): Query<BookListQuery>,
) -> Result<Json<Vec<LibraryEntryResponse>>, ApiError> {
    let limit = query.latest_limit()?;
    let filter = query.into_filter()?;

    let repo = LibraryEntryRepository::new(state.pool.clone());
    let entities = repo.latest(&filter, limit).await?;
    Ok(Json(with_images(&state, entities).await?))
}

/// GET /api/books/:id
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<BookListQuery>,
) -> Result<Json<LibraryEntryResponse>, ApiError> {
    let active_only = visibility::parse_active_param(query.active.as_deref());

    let repo = LibraryEntryRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id, active_only)
        .await?
        .ok_or_else(|| ApiError::not_found("Book"))?;

    Ok(Json(one_with_images(&state, entity).await?))
}

/// POST /api/books
pub async fn create_book(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateLibraryEntryRequest>,
) -> Result<(StatusCode, Json<LibraryEntryResponse>), ApiError> {
    request.ensure_downloadable()?;

    let repo = LibraryEntryRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    info!(book_id = entity.id, category_id = ?entity.category_id, "Book created");
    record_content_created("books");

    Ok((
        StatusCode::CREATED,
        Json(LibraryEntryResponse::new(entity.into(), Vec::new(), &state.media)),
    ))
}

/// PUT|PATCH /api/books/:id
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdateLibraryEntryRequest>,
) -> Result<Json<LibraryEntryResponse>, ApiError> {
    let repo = LibraryEntryRepository::new(state.pool.clone());
    let current: LibraryEntry = repo
        .find_by_id(id, false)
        .await?
        .ok_or_else(|| ApiError::not_found("Book"))?
        .into();
    request.ensure_downloadable(&current)?;

    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("Book"))?;

    info!(book_id = id, "Book updated");
    Ok(Json(one_with_images(&state, entity).await?))
}

/// DELETE /api/books/:id
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = LibraryEntryRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("Book"));
    }

    info!(book_id = id, "Book deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/books/:id/images
pub async fn add_book_image(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<CreateBookImageRequest>,
) -> Result<(StatusCode, Json<BookImageResponse>), ApiError> {
    LibraryEntryRepository::new(state.pool.clone())
        .find_by_id(id, false)
        .await?
        .ok_or_else(|| ApiError::not_found("Book"))?;

    let repo = BookImageRepository::new(state.pool.clone());
    let entity = repo.create(id, &request).await?;

    info!(book_id = id, image_id = entity.id, "Book image added");
    Ok((
        StatusCode::CREATED,
        Json(BookImageResponse::new(entity.into(), &state.media)),
    ))
}

/// DELETE /api/books/:id/images/:image_id
pub async fn delete_book_image(
    State(state): State<AppState>,
    Path((id, image_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    let repo = BookImageRepository::new(state.pool.clone());
    if repo.delete(id, image_id).await? == 0 {
        return Err(ApiError::not_found("Book image"));
    }

    info!(book_id = id, image_id, "Book image removed");
    Ok(StatusCode::NO_CONTENT)
}
