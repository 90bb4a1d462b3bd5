//! Library of published books and their categories.
//!
//! Served under `/books` and `/book-categories`. This is separate from the
//! downloads page (`publications` / `download-categories`).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;
use crate::services::visibility::{self, CategoryRef, FeaturedFilter, Ordering};
use crate::services::MediaUrls;

/// Column limit for category slugs.
pub const CATEGORY_SLUG_MAX_LEN: usize = 220;

/// Columns a book listing may be ordered by.
pub const BOOK_ORDERING_FIELDS: &[&str] = &["published_at", "created_at", "year", "title"];

/// Message returned when a book has nothing to download.
pub const BOOK_SOURCE_REQUIRED: &str = "Provide either a PDF file or an external URL.";

/// A book category.
#[derive(Debug, Clone)]
pub struct LibraryCategory {
    pub id: i64,
    pub name: String,
    pub name_si: String,
    pub slug: String,
    pub description: String,
    pub description_si: String,
    pub position: i32,
    /// Number of books linked to this category.
    pub publications_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLibraryCategoryRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub name_si: String,

    #[validate(
        length(max = 220, message = "Slug must be at most 220 characters"),
        custom(function = "shared::validation::validate_slug")
    )]
    pub slug: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub description_si: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "Position must not be negative"))]
    pub position: i32,
}

impl CreateLibraryCategoryRequest {
    pub fn resolve_slug(&self) -> Result<String, DomainError> {
        Ok(shared::slug::resolve_slug(
            self.slug.as_deref(),
            &self.name,
            CATEGORY_SLUG_MAX_LEN,
        )?)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateLibraryCategoryRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub name_si: Option<String>,

    #[validate(
        length(max = 220, message = "Slug must be at most 220 characters"),
        custom(function = "shared::validation::validate_slug")
    )]
    pub slug: Option<String>,

    pub description: Option<String>,

    pub description_si: Option<String>,

    #[validate(range(min = 0, message = "Position must not be negative"))]
    pub position: Option<i32>,
}

impl UpdateLibraryCategoryRequest {
    /// The new slug, if the request changes it. An empty slug is re-derived
    /// from the effective name.
    pub fn resolve_slug(&self, current: &LibraryCategory) -> Result<Option<String>, DomainError> {
        let Some(slug) = self.slug.as_deref() else {
            return Ok(None);
        };
        let name = self.name.as_deref().unwrap_or(&current.name);
        Ok(Some(shared::slug::resolve_slug(
            Some(slug),
            name,
            CATEGORY_SLUG_MAX_LEN,
        )?))
    }
}

/// Raw query parameters for listing book categories.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LibraryCategoryListQuery {
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LibraryCategoryResponse {
    pub id: i64,
    pub name: String,
    pub name_si: String,
    pub slug: String,
    pub description: String,
    pub description_si: String,
    pub position: i32,
    pub publications_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LibraryCategory> for LibraryCategoryResponse {
    fn from(c: LibraryCategory) -> Self {
        Self {
            id: c.id,
            name: c.name,
            name_si: c.name_si,
            slug: c.slug,
            description: c.description,
            description_si: c.description_si,
            position: c.position,
            publications_count: c.publications_count,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Category fields embedded in a book response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub id: i64,
    pub name: String,
    pub name_si: String,
    pub slug: String,
}

/// A book in the library.
#[derive(Debug, Clone)]
pub struct LibraryEntry {
    pub id: i64,
    pub category: Option<CategorySummary>,
    pub title: String,
    pub title_si: String,
    pub subtitle: String,
    pub subtitle_si: String,
    pub authors: String,
    pub authors_si: String,
    pub year: Option<i32>,
    pub description: String,
    pub description_si: String,
    pub cover: Option<String>,
    pub pdf_file: Option<String>,
    pub external_url: String,
    pub published_at: Option<NaiveDate>,
    pub is_active: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LibraryEntry {
    /// A book needs a PDF file or an external URL.
    pub fn ensure_downloadable(external_url: &str, pdf_file: Option<&str>) -> Result<(), DomainError> {
        if external_url.is_empty() && pdf_file.map_or(true, str::is_empty) {
            Err(DomainError::MissingSource(BOOK_SOURCE_REQUIRED))
        } else {
            Ok(())
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLibraryEntryRequest {
    pub category_id: Option<i64>,

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

    #[serde(default)]
    #[validate(length(max = 255, message = "Authors must be at most 255 characters"))]
    pub authors: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Authors must be at most 255 characters"))]
    pub authors_si: String,

    #[validate(range(min = 0, message = "Year must not be negative"))]
    pub year: Option<i32>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub description_si: String,

    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub cover: Option<String>,

    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub pdf_file: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_blank_or_url"))]
    pub external_url: String,

    pub published_at: Option<NaiveDate>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub is_featured: bool,
}

impl CreateLibraryEntryRequest {
    pub fn ensure_downloadable(&self) -> Result<(), DomainError> {
        LibraryEntry::ensure_downloadable(&self.external_url, self.pdf_file.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateLibraryEntryRequest {
    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    pub category_id: Option<Option<i64>>,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title_si: Option<String>,

    #[validate(length(max = 255, message = "Subtitle must be at most 255 characters"))]
    pub subtitle: Option<String>,

    #[validate(length(max = 255, message = "Subtitle must be at most 255 characters"))]
    pub subtitle_si: Option<String>,

    #[validate(length(max = 255, message = "Authors must be at most 255 characters"))]
    pub authors: Option<String>,

    #[validate(length(max = 255, message = "Authors must be at most 255 characters"))]
    pub authors_si: Option<String>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    #[validate(range(min = 0, message = "Year must not be negative"))]
    pub year: Option<Option<i32>>,

    pub description: Option<String>,

    pub description_si: Option<String>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub cover: Option<Option<String>>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub pdf_file: Option<Option<String>>,

    #[validate(custom(function = "shared::validation::validate_blank_or_url"))]
    pub external_url: Option<String>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    pub published_at: Option<Option<NaiveDate>>,

    pub is_active: Option<bool>,

    pub is_featured: Option<bool>,
}

impl UpdateLibraryEntryRequest {
    /// Checks the record that would result from applying this update.
    pub fn ensure_downloadable(&self, current: &LibraryEntry) -> Result<(), DomainError> {
        let external_url = self.external_url.as_deref().unwrap_or(&current.external_url);
        let pdf_file = match &self.pdf_file {
            Some(file) => file.as_deref(),
            None => current.pdf_file.as_deref(),
        };
        LibraryEntry::ensure_downloadable(external_url, pdf_file)
    }
}

/// Raw query parameters for listing books.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookListQuery {
    pub active: Option<String>,
    pub featured: Option<String>,
    pub category: Option<String>,
    pub year: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    /// Only read by the `latest` action.
    pub limit: Option<String>,
}

/// Parsed book listing filter.
#[derive(Debug, Clone, PartialEq)]
pub struct BookFilter {
    pub active_only: bool,
    pub featured: FeaturedFilter,
    pub category: Option<CategoryRef>,
    pub year: Option<i64>,
    pub search: Option<String>,
    pub ordering: Option<Ordering>,
}

impl Default for BookFilter {
    fn default() -> Self {
        Self {
            active_only: true,
            featured: FeaturedFilter::Any,
            category: None,
            year: None,
            search: None,
            ordering: None,
        }
    }
}

impl BookListQuery {
    pub fn into_filter(self) -> Result<BookFilter, DomainError> {
        Ok(BookFilter {
            active_only: visibility::parse_active_param(self.active.as_deref()),
            featured: FeaturedFilter::parse(self.featured.as_deref()),
            category: CategoryRef::parse(self.category.as_deref()),
            year: visibility::parse_int_param("year", self.year.as_deref())?,
            search: visibility::search_pattern(self.search.as_deref()),
            ordering: Ordering::parse(self.ordering.as_deref(), BOOK_ORDERING_FIELDS)?,
        })
    }

    /// Item count for the `latest` action.
    pub fn latest_limit(&self) -> Result<i64, DomainError> {
        visibility::parse_latest_limit(self.limit.as_deref())
    }
}

/// An image attached to a book.
#[derive(Debug, Clone)]
pub struct BookImage {
    pub id: i64,
    pub entry_id: i64,
    pub image: String,
    pub caption: String,
    pub caption_si: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookImageRequest {
    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub image: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Caption must be at most 255 characters"))]
    pub caption: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Caption must be at most 255 characters"))]
    pub caption_si: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookImageResponse {
    pub id: i64,
    pub image: String,
    pub caption: String,
    pub caption_si: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookImageResponse {
    pub fn new(image: BookImage, media: &MediaUrls) -> Self {
        Self {
            id: image.id,
            image: media.url(&image.image),
            caption: image.caption,
            caption_si: image.caption_si,
            created_at: image.created_at,
            updated_at: image.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LibraryEntryResponse {
    pub id: i64,
    pub category: Option<CategorySummary>,
    pub title: String,
    pub title_si: String,
    pub subtitle: String,
    pub subtitle_si: String,
    pub authors: String,
    pub authors_si: String,
    pub year: Option<i32>,
    pub description: String,
    pub description_si: String,
    pub cover: Option<String>,
    pub pdf_file: Option<String>,
    pub external_url: String,
    /// `external_url` when set, otherwise the PDF's URL.
    pub download_href: String,
    pub published_at: Option<NaiveDate>,
    pub is_active: bool,
    pub is_featured: bool,
    pub images: Vec<BookImageResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LibraryEntryResponse {
    pub fn new(entry: LibraryEntry, images: Vec<BookImage>, media: &MediaUrls) -> Self {
        let download_href = media.prefer_external(&entry.external_url, entry.pdf_file.as_deref());
        Self {
            id: entry.id,
            category: entry.category,
            title: entry.title,
            title_si: entry.title_si,
            subtitle: entry.subtitle,
            subtitle_si: entry.subtitle_si,
            authors: entry.authors,
            authors_si: entry.authors_si,
            year: entry.year,
            description: entry.description,
            description_si: entry.description_si,
            cover: media.url_opt(entry.cover.as_deref()),
            pdf_file: media.url_opt(entry.pdf_file.as_deref()),
            external_url: entry.external_url,
            download_href,
            published_at: entry.published_at,
            is_active: entry.is_active,
            is_featured: entry.is_featured,
            images: images
                .into_iter()
                .map(|i| BookImageResponse::new(i, media))
                .collect(),
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}
