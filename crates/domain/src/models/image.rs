//! Ordered gallery images attached to news items and notices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::MediaUrls;

/// An image attached to a parent record (news item or notice).
///
/// Images are ordered by `position`, then `id`, and are deleted together
/// with their parent.
#[derive(Debug, Clone)]
pub struct AttachedImage {
    pub id: i64,
    pub parent_id: i64,
    pub image: String,
    pub caption: String,
    pub caption_si: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for attaching an image to a parent record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAttachedImageRequest {
    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub image: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Caption must be at most 255 characters"))]
    pub caption: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Caption must be at most 255 characters"))]
    pub caption_si: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "Position must not be negative"))]
    pub position: i32,
}

/// Response payload for an attached image.
#[derive(Debug, Clone, Serialize)]
pub struct AttachedImageResponse {
    pub id: i64,
    pub image: String,
    pub caption: String,
    pub caption_si: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AttachedImageResponse {
    pub fn new(image: AttachedImage, media: &MediaUrls) -> Self {
        Self {
            id: image.id,
            image: media.url(&image.image),
            caption: image.caption,
            caption_si: image.caption_si,
            position: image.position,
            created_at: image.created_at,
            updated_at: image.updated_at,
        }
    }

    pub fn many(images: Vec<AttachedImage>, media: &MediaUrls) -> Vec<Self> {
        images.into_iter().map(|i| Self::new(i, media)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults() {
        let req: CreateAttachedImageRequest =
            serde_json::from_str(r#"{"image": "news/gallery/a.jpg"}"#).unwrap();
        assert_eq!(req.caption, "");
        assert_eq!(req.position, 0);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_bad_path_and_position() {
        let req: CreateAttachedImageRequest =
            serde_json::from_str(r#"{"image": "../secret.jpg", "position": -1}"#).unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("image"));
        assert!(fields.contains_key("position"));
    }

    #[test]
    fn test_response_renders_url() {
        let now = Utc::now();
        let image = AttachedImage {
            id: 7,
            parent_id: 1,
            image: "notice/gallery/p.png".into(),
            caption: "Opening".into(),
            caption_si: String::new(),
            position: 2,
            created_at: now,
            updated_at: now,
        };
        let resp = AttachedImageResponse::new(image, &MediaUrls::new("/media/"));
        assert_eq!(resp.image, "/media/notice/gallery/p.png");
        assert_eq!(resp.position, 2);
    }
}
