//! Domain error types.

use shared::slug::SlugError;
use thiserror::Error;

/// Errors raised by domain rules before anything reaches storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A record needs at least one of two alternative fields.
    #[error("{0}")]
    MissingSource(&'static str),

    #[error(transparent)]
    Slug(#[from] SlugError),

    /// A list/lookup query parameter could not be interpreted.
    #[error("Invalid value for '{param}': {reason}")]
    InvalidQuery { param: &'static str, reason: String },
}

impl DomainError {
    pub fn invalid_query(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidQuery {
            param,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_display() {
        let err = DomainError::MissingSource("Provide either a video file or an external URL.");
        assert_eq!(
            err.to_string(),
            "Provide either a video file or an external URL."
        );
    }

    #[test]
    fn test_invalid_query_display() {
        let err = DomainError::invalid_query("limit", "must be a whole number");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'limit': must be a whole number"
        );
    }

    #[test]
    fn test_slug_error_is_transparent() {
        let err: DomainError = SlugError::Empty("???".into()).into();
        assert!(err.to_string().contains("Cannot derive a slug"));
    }
}
