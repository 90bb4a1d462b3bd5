//! Slug derivation for URL-addressable content.

use thiserror::Error;

/// Error type for slug derivation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("Cannot derive a slug from '{0}'; provide one explicitly")]
    Empty(String),
}

/// Normalizes a display name into a slug.
///
/// Unicode is transliterated to ASCII, letters are lowercased, and every run
/// of other characters becomes a single hyphen. The result is truncated to
/// `max_len` bytes without leaving a trailing hyphen.
pub fn slugify(source: &str, max_len: usize) -> String {
    let slug = ::slug::slugify(source);
    if slug.len() <= max_len {
        return slug;
    }
    // slugify output is pure ASCII, so byte slicing is safe.
    slug[..max_len].trim_end_matches('-').to_string()
}

/// Returns the slug to persist for a record.
///
/// A non-empty client slug is kept as-is; otherwise the slug is derived from
/// the display name.
pub fn resolve_slug(
    provided: Option<&str>,
    source: &str,
    max_len: usize,
) -> Result<String, SlugError> {
    match provided.map(str::trim) {
        Some(slug) if !slug.is_empty() => Ok(slug.to_string()),
        _ => {
            let derived = slugify(source, max_len);
            if derived.is_empty() {
                Err(SlugError::Empty(source.to_string()))
            } else {
                Ok(derived)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Annual Report 2024", 255), "annual-report-2024");
    }

    #[test]
    fn test_slugify_collapses_punctuation() {
        assert_eq!(
            slugify("  Exam results -- released!  ", 255),
            "exam-results-released"
        );
    }

    #[test]
    fn test_slugify_transliterates() {
        assert_eq!(slugify("Café Programme", 255), "cafe-programme");
    }

    #[test]
    fn test_slugify_truncates_without_trailing_hyphen() {
        let slug = slugify("abcd efgh", 5);
        assert_eq!(slug, "abcd");
        assert!(slug.len() <= 5);
    }

    #[test]
    fn test_resolve_slug_prefers_provided() {
        assert_eq!(
            resolve_slug(Some("custom-slug"), "Title", 255).unwrap(),
            "custom-slug"
        );
    }

    #[test]
    fn test_resolve_slug_derives_when_missing_or_blank() {
        assert_eq!(resolve_slug(None, "New Term", 255).unwrap(), "new-term");
        assert_eq!(resolve_slug(Some(""), "New Term", 255).unwrap(), "new-term");
        assert_eq!(resolve_slug(Some("  "), "New Term", 255).unwrap(), "new-term");
    }

    #[test]
    fn test_resolve_slug_rejects_empty_derivation() {
        let err = resolve_slug(None, "!!!", 255).unwrap_err();
        assert_eq!(err, SlugError::Empty("!!!".to_string()));
    }
}
