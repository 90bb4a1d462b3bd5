//! News domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;
use crate::models::image::{AttachedImage, AttachedImageResponse};
use crate::services::MediaUrls;

/// Column limit for news slugs.
pub const NEWS_SLUG_MAX_LEN: usize = 255;

/// A news article.
#[derive(Debug, Clone)]
pub struct News {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub slug: String,
    pub image: Option<String>,
    pub excerpt: String,
    pub excerpt_si: String,
    pub content: String,
    pub content_si: String,
    pub published_at: DateTime<Utc>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a news article.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNewsRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title_si: String,

    #[validate(
        length(max = 255, message = "Slug must be at most 255 characters"),
        custom(function = "shared::validation::validate_slug")
    )]
    pub slug: Option<String>,

    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub image: Option<String>,

    #[serde(default)]
    pub excerpt: String,

    #[serde(default)]
    pub excerpt_si: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    #[serde(default)]
    pub content_si: String,

    /// Defaults to the creation time.
    pub published_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub is_featured: bool,
}

impl CreateNewsRequest {
    /// The slug to store: the client's, or one derived from the title.
    pub fn resolve_slug(&self) -> Result<String, DomainError> {
        Ok(shared::slug::resolve_slug(
            self.slug.as_deref(),
            &self.title,
            NEWS_SLUG_MAX_LEN,
        )?)
    }
}

/// Request payload for updating a news article (partial update).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateNewsRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title_si: Option<String>,

    #[validate(
        length(max = 255, message = "Slug must be at most 255 characters"),
        custom(function = "shared::validation::validate_slug")
    )]
    pub slug: Option<String>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub image: Option<Option<String>>,

    pub excerpt: Option<String>,

    pub excerpt_si: Option<String>,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: Option<String>,

    pub content_si: Option<String>,

    pub published_at: Option<DateTime<Utc>>,

    pub is_featured: Option<bool>,
}

impl UpdateNewsRequest {
    /// The new slug, if the request changes it.
    ///
    /// An empty slug is re-derived from the effective title.
    pub fn resolve_slug(&self, current: &News) -> Result<Option<String>, DomainError> {
        let Some(slug) = self.slug.as_deref() else {
            return Ok(None);
        };
        let title = self.title.as_deref().unwrap_or(&current.title);
        Ok(Some(shared::slug::resolve_slug(
            Some(slug),
            title,
            NEWS_SLUG_MAX_LEN,
        )?))
    }
}

/// Response payload for a news article with its gallery.
#[derive(Debug, Clone, Serialize)]
pub struct NewsResponse {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub slug: String,
    pub image: Option<String>,
    pub excerpt: String,
    pub excerpt_si: String,
    pub content: String,
    pub content_si: String,
    pub published_at: DateTime<Utc>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub gallery_images: Vec<AttachedImageResponse>,
}

impl NewsResponse {
    pub fn new(news: News, images: Vec<AttachedImage>, media: &MediaUrls) -> Self {
        Self {
            id: news.id,
            title: news.title,
            title_si: news.title_si,
            slug: news.slug,
            image: media.url_opt(news.image.as_deref()),
            excerpt: news.excerpt,
            excerpt_si: news.excerpt_si,
            content: news.content,
            content_si: news.content_si,
            published_at: news.published_at,
            is_featured: news.is_featured,
            created_at: news.created_at,
            updated_at: news.updated_at,
            gallery_images: AttachedImageResponse::many(images, media),
        }
    }
}
