//! Common validation utilities.

use lazy_static::lazy_static;
use regex::Regex;
use validator::{ValidateEmail, ValidateUrl, ValidationError};

lazy_static! {
    /// Accepted shape for slugs supplied by clients.
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[-a-zA-Z0-9_]+$").unwrap();
}

/// Validates that a latitude value is within valid range (-90 to 90).
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_range");
        err.message = Some("Latitude must be between -90 and 90".into());
        Err(err)
    }
}

/// Validates that a longitude value is within valid range (-180 to 180).
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_range");
        err.message = Some("Longitude must be between -180 and 180".into());
        Err(err)
    }
}

/// Validates a client-supplied slug.
///
/// An empty slug is accepted: it asks the server to derive one.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() || SLUG_REGEX.is_match(slug) {
        Ok(())
    } else {
        let mut err = ValidationError::new("slug_format");
        err.message =
            Some("Slug may only contain letters, numbers, hyphens and underscores".into());
        Err(err)
    }
}

/// Validates a URL field that may be left blank.
pub fn validate_blank_or_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    validate_http_url(value)
}

/// Validates a URL field that must be filled in.
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    let has_scheme = value.starts_with("http://") || value.starts_with("https://");
    if has_scheme && value.validate_url() {
        Ok(())
    } else {
        let mut err = ValidationError::new("url");
        err.message = Some("Enter a valid http(s) URL".into());
        Err(err)
    }
}

/// Validates an email field that may be left blank.
pub fn validate_blank_or_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        let mut err = ValidationError::new("email");
        err.message = Some("Enter a valid email address".into());
        Err(err)
    }
}

/// Validates a relative media path such as `news/2024/photo.jpg`.
///
/// Paths are resolved under the media root, so absolute paths and parent
/// directory segments are rejected.
pub fn validate_media_path(path: &str) -> Result<(), ValidationError> {
    let invalid = path.trim().is_empty()
        || path.starts_with('/')
        || path.starts_with('\\')
        || path.contains('\\')
        || path.split('/').any(|segment| segment == ".." || segment.is_empty());

    if invalid {
        let mut err = ValidationError::new("media_path");
        err.message = Some("Media path must be a relative path inside the media root".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates a map zoom level (1 to 20).
pub fn validate_map_zoom(zoom: i16) -> Result<(), ValidationError> {
    if (1..=20).contains(&zoom) {
        Ok(())
    } else {
        let mut err = ValidationError::new("map_zoom_range");
        err.message = Some("Map zoom must be between 1 and 20".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_latitude() {
        assert!(validate_latitude(0.0).is_ok());
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.1).is_err());
        assert!(validate_latitude(-90.1).is_err());
    }

    #[test]
    fn test_validate_latitude_error_message() {
        let err = validate_latitude(100.0).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Latitude must be between -90 and 90"
        );
    }

    #[test]
    fn test_validate_longitude() {
        assert!(validate_longitude(80.633728).is_ok());
        assert!(validate_longitude(180.0).is_ok());
        assert!(validate_longitude(-180.1).is_err());
    }

    #[test]
    fn test_validate_blank_or_email() {
        assert!(validate_blank_or_email("").is_ok());
        assert!(validate_blank_or_email("info@gov.lk").is_ok());
        assert!(validate_blank_or_email("not-an-email").is_err());
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("annual-report_2024").is_ok());
        assert!(validate_slug("").is_ok());
        assert!(validate_slug("has space").is_err());
        assert!(validate_slug("slash/inside").is_err());
    }

    #[test]
    fn test_validate_blank_or_url() {
        assert!(validate_blank_or_url("").is_ok());
        assert!(validate_blank_or_url("https://www.youtube.com/watch?v=abc").is_ok());
        assert!(validate_blank_or_url("http://example.gov.lk/file.pdf").is_ok());
        assert!(validate_blank_or_url("ftp://example.com").is_err());
        assert!(validate_blank_or_url("not a url").is_err());
    }

    #[test]
    fn test_validate_http_url_requires_value() {
        assert!(validate_http_url("").is_err());
        assert!(validate_http_url("https://moe.gov.lk").is_ok());
    }

    #[test]
    fn test_validate_media_path() {
        assert!(validate_media_path("news/photo.jpg").is_ok());
        assert!(validate_media_path("albums/covers/a.png").is_ok());
        assert!(validate_media_path("").is_err());
        assert!(validate_media_path("/etc/passwd").is_err());
        assert!(validate_media_path("news/../../secret").is_err());
        assert!(validate_media_path("news//photo.jpg").is_err());
        assert!(validate_media_path("news\\photo.jpg").is_err());
    }

    #[test]
    fn test_validate_map_zoom() {
        assert!(validate_map_zoom(1).is_ok());
        assert!(validate_map_zoom(15).is_ok());
        assert!(validate_map_zoom(20).is_ok());
        assert!(validate_map_zoom(0).is_err());
        assert!(validate_map_zoom(21).is_err());
    }
}
