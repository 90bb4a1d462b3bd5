//! Contact form and contact details endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::{ContactInfoRepository, ContactMessageRepository};
use shared::pagination::Paginated;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Page, ValidJson};
use crate::middleware::metrics::{record_contact_message, record_content_created};
use domain::models::contact::{
    ContactMessageResponse, CreateContactInfoRequest, CreateContactMessageRequest,
    UpdateContactInfoRequest,
};
use domain::models::{ContactInfo, ContactMessage};

/// GET /api/contact
pub async fn list_contact_messages(
    State(state): State<AppState>,
    page: Page,
) -> Result<Json<Paginated<ContactMessageResponse>>, ApiError> {
    let repo = ContactMessageRepository::new(state.pool.clone());
    let (entities, count) = repo.list(page.limit(), page.offset()).await?;
    let results = entities
        .into_iter()
        .map(|e| ContactMessage::from(e).into())
        .collect();
    Ok(Json(page.envelope(results, count)?))
}

/// POST /api/contact
pub async fn create_contact_message(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateContactMessageRequest>,
) -> Result<(StatusCode, Json<ContactMessageResponse>), ApiError> {
    let repo = ContactMessageRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    info!(message_id = entity.id, "Contact message received");
    record_contact_message();

    Ok((StatusCode::CREATED, Json(ContactMessage::from(entity).into())))
}

/// GET /api/contact-info
pub async fn list_contact_infos(
    State(state): State<AppState>,
    page: Page,
) -> Result<Json<Paginated<ContactInfo>>, ApiError> {
    let repo = ContactInfoRepository::new(state.pool.clone());
    let (entities, count) = repo.list(page.limit(), page.offset()).await?;
    let results = entities.into_iter().map(Into::into).collect();
    Ok(Json(page.envelope(results, count)?))
}

/// GET /api/contact-info/:id
pub async fn get_contact_info(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ContactInfo>, ApiError> {
    let repo = ContactInfoRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Contact info"))?;
    Ok(Json(entity.into()))
}

/// POST /api/contact-info
pub async fn create_contact_info(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateContactInfoRequest>,
) -> Result<(StatusCode, Json<ContactInfo>), ApiError> {
    let repo = ContactInfoRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    info!(contact_info_id = entity.id, "Contact info created");
    record_content_created("contact_info");

    Ok((StatusCode::CREATED, Json(entity.into())))
}

/// PUT|PATCH /api/contact-info/:id
pub async fn update_contact_info(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(request): ValidJson<UpdateContactInfoRequest>,
) -> Result<Json<ContactInfo>, ApiError> {
    let repo = ContactInfoRepository::new(state.pool.clone());
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::not_found("Contact info"))?;

    info!(contact_info_id = id, "Contact info updated");
    Ok(Json(entity.into()))
}

/// DELETE /api/contact-info/:id
pub async fn delete_contact_info(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = ContactInfoRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::not_found("Contact info"));
    }

    info!(contact_info_id = id, "Contact info deleted");
    Ok(StatusCode::NO_CONTENT)
}
