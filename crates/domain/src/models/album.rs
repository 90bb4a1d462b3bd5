//! Photo albums and their gallery images.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;
use crate::services::visibility::{self, Ordering};
use crate::services::MediaUrls;

/// Column limit for album slugs.
pub const ALBUM_SLUG_MAX_LEN: usize = 220;

/// Columns an album listing may be ordered by.
pub const ALBUM_ORDERING_FIELDS: &[&str] = &["position", "published_at", "created_at"];

/// Columns a gallery listing may be ordered by.
pub const GALLERY_ORDERING_FIELDS: &[&str] = &["position", "created_at"];

/// A photo album.
#[derive(Debug, Clone)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub slug: String,
    pub description: String,
    pub description_si: String,
    pub cover: Option<String>,
    pub is_active: bool,
    pub position: i32,
    pub published_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

/// Request payload for creating an album.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAlbumRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title_si: String,

    #[validate(
        length(max = 220, message = "Slug must be at most 220 characters"),
        custom(function = "shared::validation::validate_slug")
    )]
    pub slug: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub description_si: String,

    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub cover: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    #[validate(range(min = 0, message = "Position must not be negative"))]
    pub position: i32,

    pub published_at: Option<NaiveDate>,
}

impl CreateAlbumRequest {
    pub fn resolve_slug(&self) -> Result<String, DomainError> {
        Ok(shared::slug::resolve_slug(
            self.slug.as_deref(),
            &self.title,
            ALBUM_SLUG_MAX_LEN,
        )?)
    }
}

/// Request payload for updating an album (partial update).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAlbumRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title_si: Option<String>,

    #[validate(
        length(max = 220, message = "Slug must be at most 220 characters"),
        custom(function = "shared::validation::validate_slug")
    )]
    pub slug: Option<String>,

    pub description: Option<String>,

    pub description_si: Option<String>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub cover: Option<Option<String>>,

    pub is_active: Option<bool>,

    #[validate(range(min = 0, message = "Position must not be negative"))]
    pub position: Option<i32>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    pub published_at: Option<Option<NaiveDate>>,
}

impl UpdateAlbumRequest {
    /// The new slug, if the request changes it. An empty slug is re-derived
    /// from the effective title.
    pub fn resolve_slug(&self, current: &Album) -> Result<Option<String>, DomainError> {
        let Some(slug) = self.slug.as_deref() else {
            return Ok(None);
        };
        let title = self.title.as_deref().unwrap_or(&current.title);
        Ok(Some(shared::slug::resolve_slug(
            Some(slug),
            title,
            ALBUM_SLUG_MAX_LEN,
        )?))
    }
}

/// Raw query parameters for listing albums.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlbumListQuery {
    pub is_active: Option<String>,
    pub slug: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

/// Parsed album listing filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlbumFilter {
    pub is_active: Option<bool>,
    pub slug: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<Ordering>,
}

impl AlbumListQuery {
    pub fn into_filter(self) -> Result<AlbumFilter, DomainError> {
        Ok(AlbumFilter {
            is_active: visibility::parse_bool_param("is_active", self.is_active.as_deref())?,
            slug: self.slug.filter(|s| !s.is_empty()),
            search: visibility::search_pattern(self.search.as_deref()),
            ordering: Ordering::parse(self.ordering.as_deref(), ALBUM_ORDERING_FIELDS)?,
        })
    }
}

/// An image inside an album.
#[derive(Debug, Clone)]
pub struct GalleryImage {
    pub id: i64,
    pub album_id: i64,
    pub image: String,
    pub caption: String,
    pub caption_si: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a gallery image.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGalleryImageRequest {
    /// Album id.
    pub album: i64,

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

/// Request payload for updating a gallery image (partial update).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGalleryImageRequest {
    pub album: Option<i64>,

    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub image: Option<String>,

    #[validate(length(max = 255, message = "Caption must be at most 255 characters"))]
    pub caption: Option<String>,

    #[validate(length(max = 255, message = "Caption must be at most 255 characters"))]
    pub caption_si: Option<String>,

    #[validate(range(min = 0, message = "Position must not be negative"))]
    pub position: Option<i32>,
}

/// Raw query parameters for listing gallery images.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryListQuery {
    pub album: Option<String>,
    pub ordering: Option<String>,
}

/// Parsed gallery listing filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryFilter {
    pub album_id: Option<i64>,
    pub ordering: Option<Ordering>,
}

impl GalleryListQuery {
    pub fn into_filter(self) -> Result<GalleryFilter, DomainError> {
        Ok(GalleryFilter {
            album_id: visibility::parse_int_param("album", self.album.as_deref())?,
            ordering: Ordering::parse(self.ordering.as_deref(), GALLERY_ORDERING_FIELDS)?,
        })
    }
}

/// Response payload for a gallery image.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryImageResponse {
    pub id: i64,
    pub album: i64,
    pub image: String,
    pub caption: String,
    pub caption_si: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GalleryImageResponse {
    pub fn new(image: GalleryImage, media: &MediaUrls) -> Self {
        Self {
            id: image.id,
            album: image.album_id,
            image: media.url(&image.image),
            caption: image.caption,
            caption_si: image.caption_si,
            position: image.position,
            created_at: image.created_at,
            updated_at: image.updated_at,
        }
    }
}

/// Response payload for an album with its images.
#[derive(Debug, Clone, Serialize)]
pub struct AlbumResponse {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub slug: String,
    pub description: String,
    pub description_si: String,
    pub cover: Option<String>,
    pub is_active: bool,
    pub position: i32,
    pub published_at: Option<NaiveDate>,
    pub images: Vec<GalleryImageResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AlbumResponse {
    pub fn new(album: Album, images: Vec<GalleryImage>, media: &MediaUrls) -> Self {
        Self {
            id: album.id,
            title: album.title,
            title_si: album.title_si,
            slug: album.slug,
            description: album.description,
            description_si: album.description_si,
            cover: media.url_opt(album.cover.as_deref()),
            is_active: album.is_active,
            position: album.position,
            published_at: album.published_at,
            images: images
                .into_iter()
                .map(|i| GalleryImageResponse::new(i, media))
                .collect(),
            created_at: album.created_at,
            updated_at: album.updated_at,
        }
    }
}
