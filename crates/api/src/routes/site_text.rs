//! About sections, text snippets and footer about endpoint handlers.
//!
//! Listing and retrieval only see active rows. Updates and deletes reach
//! inactive rows too so editors can bring them back.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::{
    AboutSectionRepository, FooterAboutRepository, SiteTextSnippetRepository,
};
use shared::pagination::Paginated;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Page, ValidJson};
use crate::middleware::metrics::record_content_created;
use domain::models::site_text::{
    AboutSectionListQuery, CreateAboutSectionRequest, CreateFooterAboutRequest,
    CreateSiteTextSnippetRequest, SnippetListQuery, UpdateAboutSectionRequest,
    UpdateFooterAboutRequest, UpdateSiteTextSnippetRequest,
};
use domain::models::{AboutSection, FooterAbout, SiteTextSnippet};
use domain::services::ViewAction;

/// GET /api/about-sections
pub async fn list_about_sections(
    State(state): State<AppState>,
    Query(query): Query<AboutSectionListQuery>,
    page: Page,
) -> Result<Json<Paginated<AboutSection>>, ApiError> {
    let ordering = query.ordering()?;

    let repo = AboutSectionRepository::new(state.pool.clone());
    let (entities, count) = repo
        .list(
            ViewAction::List.active_only(),
            ordering,
            page.limit(),
            page.offset(),
        )
        .await?;
    let results = entities.into_iter().map(Into::into).collect();
    Ok(Json(page.envelope(results, count)?))
}

/// GET /api/about-sections/:id
pub async fn get_about_section(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AboutSection>, ApiError> {
    let repo = AboutSectionRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id, ViewAction::Retrieve.active_only())
        .await?
        .ok_or_else(|| ApiError::not_found("About section"))?;
    Ok(Json(entity.into()))
}

/// POST /api/about-sections
pub async fn create_about_section(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateAboutSectionRequest>,
) -> Result<(StatusCode, Json<AboutSection>), ApiError> {
    let repo = AboutSectionRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    info!(section_id = entity.id, slug = %entity.slug, "About section created");
    record_content_created("about_sections");

    Ok((StatusCode::CREATED, Json(entity.into())))
}

/// PUT|PATCH /api/about-sections/:id
pub async fn update_about_section(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdateAboutSectionRequest>,
) -> Result<Json<AboutSection>, ApiError> {
    let repo = AboutSectionRepository::new(state.pool.clone());
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("About section"))?;

    info!(section_id = id, "About section updated");
    Ok(Json(entity.into()))
}

/// DELETE /api/about-sections/:id
pub async fn delete_about_section(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = AboutSectionRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("About section"));
    }

    info!(section_id = id, "About section deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/text-snippets
pub async fn list_text_snippets(
    State(state): State<AppState>,
    Query(query): Query<SnippetListQuery>,
    page: Page,
) -> Result<Json<Paginated<SiteTextSnippet>>, ApiError> {
    let search = query.search_pattern();

    let repo = SiteTextSnippetRepository::new(state.pool.clone());
    let (entities, count) = repo
        .list(
            ViewAction::List.active_only(),
            search.as_deref(),
            page.limit(),
            page.offset(),
        )
        .await?;
    let results = entities.into_iter().map(Into::into).collect();
    Ok(Json(page.envelope(results, count)?))
}

/// GET /api/text-snippets/:id
pub async fn get_text_snippet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SiteTextSnippet>, ApiError> {
    let repo = SiteTextSnippetRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id, ViewAction::Retrieve.active_only())
        .await?
        .ok_or_else(|| ApiError::not_found("Text snippet"))?;
    Ok(Json(entity.into()))
}

/// POST /api/text-snippets
pub async fn create_text_snippet(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateSiteTextSnippetRequest>,
) -> Result<(StatusCode, Json<SiteTextSnippet>), ApiError> {
    let repo = SiteTextSnippetRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    info!(snippet_id = entity.id, key = %entity.key, "Text snippet created");
    record_content_created("text_snippets");

    Ok((StatusCode::CREATED, Json(entity.into())))
}

/// PUT|PATCH /api/text-snippets/:id
pub async fn update_text_snippet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdateSiteTextSnippetRequest>,
) -> Result<Json<SiteTextSnippet>, ApiError> {
    let repo = SiteTextSnippetRepository::new(state.pool.clone());
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("Text snippet"))?;

    info!(snippet_id = id, "Text snippet updated");
    Ok(Json(entity.into()))
}

/// DELETE /api/text-snippets/:id
pub async fn delete_text_snippet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = SiteTextSnippetRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("Text snippet"));
    }

    info!(snippet_id = id, "Text snippet deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/footer-about
pub async fn list_footer_abouts(
    State(state): State<AppState>,
    page: Page,
) -> Result<Json<Paginated<FooterAbout>>, ApiError> {
    let repo = FooterAboutRepository::new(state.pool.clone());
    let (entities, count) = repo
        .list(ViewAction::List.active_only(), page.limit(), page.offset())
        .await?;
    let results = entities.into_iter().map(Into::into).collect();
    Ok(Json(page.envelope(results, count)?))
}

/// GET /api/footer-about/:id
pub async fn get_footer_about(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FooterAbout>, ApiError> {
    let repo = FooterAboutRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id, ViewAction::Retrieve.active_only())
        .await?
        .ok_or_else(|| ApiError::not_found("Footer about"))?;
    Ok(Json(entity.into()))
}

/// POST /api/footer-about
pub async fn create_footer_about(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateFooterAboutRequest>,
) -> Result<(StatusCode, Json<FooterAbout>), ApiError> {
    let repo = FooterAboutRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    info!(footer_about_id = entity.id, "Footer about created");
    record_content_created("footer_about");

    Ok((StatusCode::CREATED, Json(entity.into())))
}

/// PUT|PATCH /api/footer-about/:id
pub async fn update_footer_about(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdateFooterAboutRequest>,
) -> Result<Json<FooterAbout>, ApiError> {
    let repo = FooterAboutRepository::new(state.pool.clone());
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("Footer about"))?;

    info!(footer_about_id = id, "Footer about updated");
    Ok(Json(entity.into()))
}

/// DELETE /api/footer-about/:id
pub async fn delete_footer_about(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = FooterAboutRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("Footer about"));
    }

    info!(footer_about_id = id, "Footer about deleted");
    Ok(StatusCode::NO_CONTENT)
}
