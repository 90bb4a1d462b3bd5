//! External and footer links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A link to a related site ("Ministry of Education").
#[derive(Debug, Clone, Serialize)]
pub struct ExternalLink {
    pub id: i64,
    pub name: String,
    pub name_si: String,
    pub url: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A link in the site footer. Only active links are public.
#[derive(Debug, Clone, Serialize)]
pub struct FooterLink {
    pub id: i64,
    pub name: String,
    pub name_si: String,
    pub url: String,
    pub position: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

/// Request payload for creating an external or footer link.
///
/// `is_active` only applies to footer links.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name_si: String,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub url: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "Position must not be negative"))]
    pub position: i32,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Request payload for updating a link (partial update).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name_si: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub url: Option<String>,

    #[validate(range(min = 0, message = "Position must not be negative"))]
    pub position: Option<i32>,

    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_is_required() {
        let req: CreateLinkRequest = serde_json::from_value(serde_json::json!({
            "name": "Ministry",
            "url": ""
        }))
        .unwrap();
        assert!(req.validate().unwrap_err().field_errors().contains_key("url"));
    }

    #[test]
    fn test_defaults() {
        let req: CreateLinkRequest = serde_json::from_value(serde_json::json!({
            "name": "Ministry",
            "url": "https://moe.gov.lk"
        }))
        .unwrap();
        assert!(req.validate().is_ok());
        assert!(req.is_active);
        assert_eq!(req.position, 0);
    }
}
