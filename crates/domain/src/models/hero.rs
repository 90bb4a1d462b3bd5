//! Home page hero: rotating slides and the intro block.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::MediaUrls;

/// A slide in the home page carousel.
#[derive(Debug, Clone)]
pub struct HeroSlide {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub subtitle: String,
    pub subtitle_si: String,
    pub image: String,
    pub button_label: String,
    pub button_label_si: String,
    pub button_url: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHeroSlideRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title_si: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Subtitle must be at most 255 characters"))]
    pub subtitle: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Subtitle must be at most 255 characters"))]
    pub subtitle_si: String,

    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub image: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "Button label must be at most 100 characters"))]
    pub button_label: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "Button label must be at most 100 characters"))]
    pub button_label_si: String,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_blank_or_url"))]
    pub button_url: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "Position must not be negative"))]
    pub position: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateHeroSlideRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title_si: Option<String>,

    #[validate(length(max = 255, message = "Subtitle must be at most 255 characters"))]
    pub subtitle: Option<String>,

    #[validate(length(max = 255, message = "Subtitle must be at most 255 characters"))]
    pub subtitle_si: Option<String>,

    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub image: Option<String>,

    #[validate(length(max = 100, message = "Button label must be at most 100 characters"))]
    pub button_label: Option<String>,

    #[validate(length(max = 100, message = "Button label must be at most 100 characters"))]
    pub button_label_si: Option<String>,

    #[validate(custom(function = "shared::validation::validate_blank_or_url"))]
    pub button_url: Option<String>,

    #[validate(range(min = 0, message = "Position must not be negative"))]
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroSlideResponse {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub subtitle: String,
    pub subtitle_si: String,
    pub image: String,
    pub button_label: String,
    pub button_label_si: String,
    pub button_url: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HeroSlideResponse {
    pub fn new(slide: HeroSlide, media: &MediaUrls) -> Self {
        Self {
            id: slide.id,
            title: slide.title,
            title_si: slide.title_si,
            subtitle: slide.subtitle,
            subtitle_si: slide.subtitle_si,
            image: media.url(&slide.image),
            button_label: slide.button_label,
            button_label_si: slide.button_label_si,
            button_url: slide.button_url,
            position: slide.position,
            created_at: slide.created_at,
            updated_at: slide.updated_at,
        }
    }
}

/// The intro block beside the carousel. Only active intros are public.
#[derive(Debug, Clone, Serialize)]
pub struct HeroIntro {
    pub id: i64,
    pub heading: String,
    pub heading_si: String,
    pub highlight: String,
    pub highlight_si: String,
    pub description: String,
    pub description_si: String,
    pub primary_label: String,
    pub primary_label_si: String,
    pub primary_url: String,
    pub secondary_label: String,
    pub secondary_label_si: String,
    pub secondary_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHeroIntroRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "Heading must be at most 255 characters"))]
    pub heading: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Heading must be at most 255 characters"))]
    pub heading_si: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Highlight must be at most 255 characters"))]
    pub highlight: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Highlight must be at most 255 characters"))]
    pub highlight_si: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub description_si: String,

    #[serde(default)]
    #[validate(length(max = 120, message = "Label must be at most 120 characters"))]
    pub primary_label: String,

    #[serde(default)]
    #[validate(length(max = 120, message = "Label must be at most 120 characters"))]
    pub primary_label_si: String,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_blank_or_url"))]
    pub primary_url: String,

    #[serde(default)]
    #[validate(length(max = 120, message = "Label must be at most 120 characters"))]
    pub secondary_label: String,

    #[serde(default)]
    #[validate(length(max = 120, message = "Label must be at most 120 characters"))]
    pub secondary_label_si: String,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_blank_or_url"))]
    pub secondary_url: String,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateHeroIntroRequest {
    #[validate(length(max = 255, message = "Heading must be at most 255 characters"))]
    pub heading: Option<String>,

    #[validate(length(max = 255, message = "Heading must be at most 255 characters"))]
    pub heading_si: Option<String>,

    #[validate(length(max = 255, message = "Highlight must be at most 255 characters"))]
    pub highlight: Option<String>,

    #[validate(length(max = 255, message = "Highlight must be at most 255 characters"))]
    pub highlight_si: Option<String>,

    pub description: Option<String>,

    pub description_si: Option<String>,

    #[validate(length(max = 120, message = "Label must be at most 120 characters"))]
    pub primary_label: Option<String>,

    #[validate(length(max = 120, message = "Label must be at most 120 characters"))]
    pub primary_label_si: Option<String>,

    #[validate(custom(function = "shared::validation::validate_blank_or_url"))]
    pub primary_url: Option<String>,

    #[validate(length(max = 120, message = "Label must be at most 120 characters"))]
    pub secondary_label: Option<String>,

    #[validate(length(max = 120, message = "Label must be at most 120 characters"))]
    pub secondary_label_si: Option<String>,

    #[validate(custom(function = "shared::validation::validate_blank_or_url"))]
    pub secondary_url: Option<String>,

    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_requires_image() {
        let result: Result<CreateHeroSlideRequest, _> =
            serde_json::from_value(serde_json::json!({"title": "Welcome"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_slide_button_url_may_be_blank() {
        let req: CreateHeroSlideRequest = serde_json::from_value(serde_json::json!({
            "title": "Welcome",
            "image": "slides/welcome.jpg"
        }))
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_slide_response_image_url() {
        let now = Utc::now();
        let slide = HeroSlide {
            id: 1,
            title: "Welcome".into(),
            title_si: String::new(),
            subtitle: String::new(),
            subtitle_si: String::new(),
            image: "slides/welcome.jpg".into(),
            button_label: String::new(),
            button_label_si: String::new(),
            button_url: String::new(),
            position: 0,
            created_at: now,
            updated_at: now,
        };
        let resp = HeroSlideResponse::new(slide, &MediaUrls::new("/media/"));
        assert_eq!(resp.image, "/media/slides/welcome.jpg");
    }

    #[test]
    fn test_intro_all_fields_optional() {
        let req: CreateHeroIntroRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.is_active);
    }

    #[test]
    fn test_intro_rejects_bad_url() {
        let req: UpdateHeroIntroRequest =
            serde_json::from_value(serde_json::json!({"primary_url": "javascript:alert(1)"}))
                .unwrap();
        assert!(req
            .validate()
            .unwrap_err()
            .field_errors()
            .contains_key("primary_url"));
    }
}
