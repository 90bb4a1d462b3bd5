//! Downloadable publications and their categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::MediaUrls;

/// A downloadable file (form, circular, report).
#[derive(Debug, Clone)]
pub struct Publication {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub description: String,
    pub description_si: String,
    pub file: Option<String>,
    pub external_url: String,
    pub cover: Option<String>,
    pub published_at: DateTime<Utc>,
    pub is_active: bool,
    pub department: String,
    pub department_si: String,
    pub category_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

/// Request payload for creating a publication.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePublicationRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title_si: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub description_si: String,

    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub file: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_blank_or_url"))]
    pub external_url: String,

    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub cover: Option<String>,

    pub published_at: Option<DateTime<Utc>>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    #[validate(length(max = 255, message = "Department must be at most 255 characters"))]
    pub department: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Department must be at most 255 characters"))]
    pub department_si: String,

    /// Download category id.
    pub category: Option<i64>,
}

/// Request payload for updating a publication (partial update).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePublicationRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title_si: Option<String>,

    pub description: Option<String>,

    pub description_si: Option<String>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub file: Option<Option<String>>,

    #[validate(custom(function = "shared::validation::validate_blank_or_url"))]
    pub external_url: Option<String>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub cover: Option<Option<String>>,

    pub published_at: Option<DateTime<Utc>>,

    pub is_active: Option<bool>,

    #[validate(length(max = 255, message = "Department must be at most 255 characters"))]
    pub department: Option<String>,

    #[validate(length(max = 255, message = "Department must be at most 255 characters"))]
    pub department_si: Option<String>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    pub category: Option<Option<i64>>,
}

/// Query parameters for listing and retrieving publications.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublicationQuery {
    pub active: Option<String>,
}

impl PublicationQuery {
    /// Whether only active publications are visible.
    pub fn active_only(&self) -> bool {
        crate::services::visibility::parse_active_param(self.active.as_deref())
    }
}

/// Response payload for a publication.
#[derive(Debug, Clone, Serialize)]
pub struct PublicationResponse {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub description: String,
    pub description_si: String,
    pub file: Option<String>,
    pub external_url: String,
    pub cover: Option<String>,
    pub published_at: DateTime<Utc>,
    pub is_active: bool,
    pub department: String,
    pub department_si: String,
    pub category: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PublicationResponse {
    pub fn new(p: Publication, media: &MediaUrls) -> Self {
        Self {
            id: p.id,
            title: p.title,
            title_si: p.title_si,
            description: p.description,
            description_si: p.description_si,
            file: media.url_opt(p.file.as_deref()),
            external_url: p.external_url,
            cover: media.url_opt(p.cover.as_deref()),
            published_at: p.published_at,
            is_active: p.is_active,
            department: p.department,
            department_si: p.department_si,
            category: p.category_id,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// A grouping of publications on the downloads page.
#[derive(Debug, Clone)]
pub struct DownloadCategory {
    pub id: i64,
    pub name: String,
    pub name_si: String,
    pub description: String,
    pub description_si: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a download category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDownloadCategoryRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name_si: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub description_si: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "Position must not be negative"))]
    pub position: i32,
}

/// Request payload for updating a download category (partial update).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDownloadCategoryRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name_si: Option<String>,

    pub description: Option<String>,

    pub description_si: Option<String>,

    #[validate(range(min = 0, message = "Position must not be negative"))]
    pub position: Option<i32>,
}

/// Response payload for a download category with its active publications.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadCategoryResponse {
    pub id: i64,
    pub name: String,
    pub name_si: String,
    pub description: String,
    pub description_si: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub publications: Vec<PublicationResponse>,
}

impl DownloadCategoryResponse {
    pub fn new(
        category: DownloadCategory,
        publications: Vec<Publication>,
        media: &MediaUrls,
    ) -> Self {
        Self {
            id: category.id,
            name: category.name,
            name_si: category.name_si,
            description: category.description,
            description_si: category.description_si,
            position: category.position,
            created_at: category.created_at,
            updated_at: category.updated_at,
            publications: publications
                .into_iter()
                .map(|p| PublicationResponse::new(p, media))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults_to_active() {
        let req: CreatePublicationRequest = serde_json::from_value(serde_json::json!({
            "title": "Annual Report"
        }))
        .unwrap();
        assert!(req.is_active);
        assert!(req.file.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_external_url_must_be_http() {
        let req: CreatePublicationRequest = serde_json::from_value(serde_json::json!({
            "title": "Annual Report",
            "external_url": "ftp://files.example.org/report.pdf"
        }))
        .unwrap();
        assert!(req
            .validate()
            .unwrap_err()
            .field_errors()
            .contains_key("external_url"));
    }

    #[test]
    fn test_update_category_null_detaches() {
        let req: UpdatePublicationRequest =
            serde_json::from_value(serde_json::json!({"category": null})).unwrap();
        assert_eq!(req.category, Some(None));
    }

    #[test]
    fn test_query_active_only() {
        assert!(PublicationQuery::default().active_only());
        let all = PublicationQuery {
            active: Some("False".into()),
        };
        assert!(!all.active_only());
    }

    #[test]
    fn test_response_resolves_file_and_cover() {
        let now = Utc::now();
        let p = Publication {
            id: 3,
            title: "Circular".into(),
            title_si: String::new(),
            description: String::new(),
            description_si: String::new(),
            file: Some("publications/c.pdf".into()),
            external_url: String::new(),
            cover: None,
            published_at: now,
            is_active: true,
            department: String::new(),
            department_si: String::new(),
            category_id: Some(2),
            created_at: now,
            updated_at: now,
        };
        let resp = PublicationResponse::new(p, &MediaUrls::new("/media/"));
        assert_eq!(resp.file.as_deref(), Some("/media/publications/c.pdf"));
        assert_eq!(resp.cover, None);
        assert_eq!(resp.category, Some(2));
    }
}
