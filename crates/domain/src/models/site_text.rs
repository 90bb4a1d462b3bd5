//! Editable page text: about sections, keyed text snippets, footer about.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;
use crate::services::visibility::{self, Ordering};

/// Columns an about section listing may be ordered by.
pub const ABOUT_ORDERING_FIELDS: &[&str] = &["position", "created_at"];

fn default_true() -> bool {
    true
}

/// A section of the "About us" page.
#[derive(Debug, Clone, Serialize)]
pub struct AboutSection {
    pub id: i64,
    pub slug: String,
    pub nav_label: String,
    pub nav_label_si: String,
    pub title: String,
    pub title_si: String,
    pub body: String,
    pub body_si: String,
    pub position: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAboutSectionRequest {
    #[validate(
        length(min = 1, max = 160, message = "Slug must be 1-160 characters"),
        custom(function = "shared::validation::validate_slug")
    )]
    pub slug: String,

    #[validate(length(min = 1, max = 255, message = "Navigation label must be 1-255 characters"))]
    pub nav_label: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Navigation label must be at most 255 characters"))]
    pub nav_label_si: String,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title_si: String,

    #[serde(default)]
    pub body: String,

    #[serde(default)]
    pub body_si: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "Position must not be negative"))]
    pub position: i32,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAboutSectionRequest {
    #[validate(
        length(min = 1, max = 160, message = "Slug must be 1-160 characters"),
        custom(function = "shared::validation::validate_slug")
    )]
    pub slug: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Navigation label must be 1-255 characters"))]
    pub nav_label: Option<String>,

    #[validate(length(max = 255, message = "Navigation label must be at most 255 characters"))]
    pub nav_label_si: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title_si: Option<String>,

    pub body: Option<String>,

    pub body_si: Option<String>,

    #[validate(range(min = 0, message = "Position must not be negative"))]
    pub position: Option<i32>,

    pub is_active: Option<bool>,
}

/// Raw query parameters for listing about sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AboutSectionListQuery {
    pub ordering: Option<String>,
}

impl AboutSectionListQuery {
    pub fn ordering(&self) -> Result<Option<Ordering>, DomainError> {
        Ordering::parse(self.ordering.as_deref(), ABOUT_ORDERING_FIELDS)
    }
}

/// A keyed piece of site copy looked up by the frontend.
#[derive(Debug, Clone, Serialize)]
pub struct SiteTextSnippet {
    pub id: i64,
    pub key: String,
    pub title: String,
    pub text: String,
    pub text_si: String,
    pub notes: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSiteTextSnippetRequest {
    #[validate(length(min = 1, max = 150, message = "Key must be 1-150 characters"))]
    pub key: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: String,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub text_si: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Notes must be at most 255 characters"))]
    pub notes: String,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSiteTextSnippetRequest {
    #[validate(length(min = 1, max = 150, message = "Key must be 1-150 characters"))]
    pub key: Option<String>,

    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: Option<String>,

    pub text: Option<String>,

    pub text_si: Option<String>,

    #[validate(length(max = 255, message = "Notes must be at most 255 characters"))]
    pub notes: Option<String>,

    pub is_active: Option<bool>,
}

/// Raw query parameters for listing snippets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnippetListQuery {
    pub search: Option<String>,
}

impl SnippetListQuery {
    /// ILIKE pattern over key, title and text.
    pub fn search_pattern(&self) -> Option<String> {
        visibility::search_pattern(self.search.as_deref())
    }
}

/// The "about" blurb in the site footer.
#[derive(Debug, Clone, Serialize)]
pub struct FooterAbout {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub body: String,
    pub body_si: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFooterAboutRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title_si: String,

    #[serde(default)]
    pub body: String,

    #[serde(default)]
    pub body_si: String,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFooterAboutRequest {
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title_si: Option<String>,

    pub body: Option<String>,

    pub body_si: Option<String>,

    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_slug_required_and_shaped() {
        let req: CreateAboutSectionRequest = serde_json::from_value(serde_json::json!({
            "slug": "our history",
            "nav_label": "History",
            "title": "Our History"
        }))
        .unwrap();
        assert!(req.validate().unwrap_err().field_errors().contains_key("slug"));

        let missing: Result<CreateAboutSectionRequest, _> =
            serde_json::from_value(serde_json::json!({"nav_label": "History", "title": "x"}));
        assert!(missing.is_err());
    }

    #[test]
    fn test_about_ordering_allow_list() {
        let q = AboutSectionListQuery {
            ordering: Some("-created_at".into()),
        };
        assert_eq!(q.ordering().unwrap().map(|o| o.column), Some("created_at"));

        let bad = AboutSectionListQuery {
            ordering: Some("title".into()),
        };
        assert!(bad.ordering().is_err());
    }

    #[test]
    fn test_snippet_search_pattern() {
        let q = SnippetListQuery {
            search: Some("footer".into()),
        };
        assert_eq!(q.search_pattern().as_deref(), Some("%footer%"));
        assert_eq!(SnippetListQuery::default().search_pattern(), None);
    }

    #[test]
    fn test_snippet_key_limit() {
        let req: CreateSiteTextSnippetRequest = serde_json::from_value(serde_json::json!({
            "key": "k".repeat(151)
        }))
        .unwrap();
        assert!(req.validate().unwrap_err().field_errors().contains_key("key"));
    }

    #[test]
    fn test_footer_about_defaults_active() {
        let req: CreateFooterAboutRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(req.is_active);
        assert!(req.validate().is_ok());
    }
}
