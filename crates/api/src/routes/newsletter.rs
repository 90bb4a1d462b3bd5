//! Newsletter subscription endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use persistence::repositories::NewsletterRepository;
use shared::pagination::Paginated;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Page, ValidJson};
use crate::middleware::metrics::record_newsletter_subscription;
use domain::models::newsletter::SubscribeRequest;
use domain::models::NewsletterSubscription;

/// GET /api/newsletter
pub async fn list_subscriptions(
    State(state): State<AppState>,
    page: Page,
) -> Result<Json<Paginated<NewsletterSubscription>>, ApiError> {
    let repo = NewsletterRepository::new(state.pool.clone());
    let (entities, count) = repo.list(page.limit(), page.offset()).await?;
    let results = entities.into_iter().map(Into::into).collect();
    Ok(Json(page.envelope(results, count)?))
}

/// Subscribe an address. A second subscription for the same address,
/// in any letter case, is a 409.
///
/// POST /api/newsletter
pub async fn subscribe(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<SubscribeRequest>,
) -> Result<(StatusCode, Json<NewsletterSubscription>), ApiError> {
    let email = request.normalized_email();

    let repo = NewsletterRepository::new(state.pool.clone());
    let entity = repo.create(&email).await?;

    info!(subscription_id = entity.id, "Newsletter subscription created");
    record_newsletter_subscription();

    Ok((StatusCode::CREATED, Json(entity.into())))
}
