//! Notice domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::image::{AttachedImage, AttachedImageResponse};
use crate::services::MediaUrls;

/// An official notice. Higher `priority` sorts first among notices published
/// at the same time.
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub content: String,
    pub content_si: String,
    pub image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a notice.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNoticeRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title_si: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    #[serde(default)]
    pub content_si: String,

    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub image: Option<String>,

    pub published_at: Option<DateTime<Utc>>,

    pub expires_at: Option<DateTime<Utc>>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Priority must not be negative"))]
    pub priority: i32,
}

/// Request payload for updating a notice (partial update).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateNoticeRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title_si: Option<String>,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: Option<String>,

    pub content_si: Option<String>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub image: Option<Option<String>>,

    pub published_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    pub expires_at: Option<Option<DateTime<Utc>>>,

    #[validate(range(min = 0, message = "Priority must not be negative"))]
    pub priority: Option<i32>,
}

/// Response payload for a notice with its gallery.
#[derive(Debug, Clone, Serialize)]
pub struct NoticeResponse {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub content: String,
    pub content_si: String,
    pub image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub gallery_images: Vec<AttachedImageResponse>,
}

impl NoticeResponse {
    pub fn new(notice: Notice, images: Vec<AttachedImage>, media: &MediaUrls) -> Self {
        Self {
            id: notice.id,
            title: notice.title,
            title_si: notice.title_si,
            content: notice.content,
            content_si: notice.content_si,
            image: media.url_opt(notice.image.as_deref()),
            published_at: notice.published_at,
            expires_at: notice.expires_at,
            priority: notice.priority,
            created_at: notice.created_at,
            updated_at: notice.updated_at,
            gallery_images: AttachedImageResponse::many(images, media),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults() {
        let req: CreateNoticeRequest = serde_json::from_value(serde_json::json!({
            "title": "Office closed",
            "content": "Closed on Poya day."
        }))
        .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.priority, 0);
        assert!(req.expires_at.is_none());
    }

    #[test]
    fn test_negative_priority_rejected() {
        let req: CreateNoticeRequest = serde_json::from_value(serde_json::json!({
            "title": "Office closed",
            "content": "x",
            "priority": -3
        }))
        .unwrap();
        assert!(req.validate().unwrap_err().field_errors().contains_key("priority"));
    }

    #[test]
    fn test_update_clears_expiry() {
        let req: UpdateNoticeRequest =
            serde_json::from_value(serde_json::json!({"expires_at": null})).unwrap();
        assert_eq!(req.expires_at, Some(None));
        assert!(req.title.is_none());
    }
}
