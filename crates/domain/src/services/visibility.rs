//! Visibility, filtering and ordering rules applied at query time.
//!
//! Query parameters arrive as raw strings; the helpers here turn them into
//! typed filters that the repositories bind into SQL.

use crate::error::DomainError;

/// Maximum number of items returned by `GET /news/featured`.
pub const FEATURED_NEWS_LIMIT: i64 = 5;

/// Default item count for `GET /books/latest`.
pub const DEFAULT_LATEST_LIMIT: i64 = 6;

/// The operation a request performs on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    List,
    Retrieve,
    Create,
    Update,
    Delete,
}

impl ViewAction {
    /// Public-safe resources hide inactive rows from list/retrieve only;
    /// editing actions reach every row by id.
    pub fn active_only(self) -> bool {
        matches!(self, ViewAction::List | ViewAction::Retrieve)
    }
}

/// Interprets the `active` parameter of publication and book listings.
///
/// Anything other than `false` (case-insensitive) keeps the default
/// restriction to active rows.
pub fn parse_active_param(raw: Option<&str>) -> bool {
    !matches!(raw, Some(v) if v.trim().eq_ignore_ascii_case("false"))
}

/// Featured-flag filter for book listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeaturedFilter {
    #[default]
    Any,
    Only,
    Exclude,
}

impl FeaturedFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("true" | "1" | "yes") => FeaturedFilter::Only,
            Some("false" | "0" | "no") => FeaturedFilter::Exclude,
            _ => FeaturedFilter::Any,
        }
    }

    /// The `is_featured` value rows must have, if any.
    pub fn as_flag(self) -> Option<bool> {
        match self {
            FeaturedFilter::Any => None,
            FeaturedFilter::Only => Some(true),
            FeaturedFilter::Exclude => Some(false),
        }
    }
}

/// Category reference accepted by the `category` filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryRef {
    Id(i64),
    Slug(String),
}

impl CategoryRef {
    /// All-digit values are ids, any other non-empty value is a slug, and an
    /// empty value means no filtering.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let raw = raw.map(str::trim).filter(|v| !v.is_empty())?;
        match numeric_key(raw) {
            Some(id) => Some(CategoryRef::Id(id)),
            None => Some(CategoryRef::Slug(raw.to_string())),
        }
    }

    pub fn id(&self) -> Option<i64> {
        match self {
            CategoryRef::Id(id) => Some(*id),
            CategoryRef::Slug(_) => None,
        }
    }

    pub fn slug(&self) -> Option<&str> {
        match self {
            CategoryRef::Id(_) => None,
            CategoryRef::Slug(slug) => Some(slug),
        }
    }
}

/// Returns the numeric id for an all-ASCII-digit lookup key.
pub fn numeric_key(key: &str) -> Option<i64> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

/// Parses the `limit` parameter of `GET /books/latest`.
pub fn parse_latest_limit(raw: Option<&str>) -> Result<i64, DomainError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LATEST_LIMIT),
        Some(v) => v
            .parse::<u32>()
            .map(i64::from)
            .map_err(|_| DomainError::invalid_query("limit", "must be a whole number")),
    }
}

/// Parses an optional integer filter such as `album` or `year`.
pub fn parse_int_param(param: &'static str, raw: Option<&str>) -> Result<Option<i64>, DomainError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse::<i64>()
            .map(Some)
            .map_err(|_| DomainError::invalid_query(param, "must be a whole number")),
    }
}

/// Parses an optional boolean filter such as `is_active`.
pub fn parse_bool_param(param: &'static str, raw: Option<&str>) -> Result<Option<bool>, DomainError> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") => Ok(None),
        Some("true" | "1") => Ok(Some(true)),
        Some("false" | "0") => Ok(Some(false)),
        Some(_) => Err(DomainError::invalid_query(param, "must be true or false")),
    }
}

/// Builds an `ILIKE` pattern for free-text search.
///
/// `%`, `_` and `\` in the term are escaped so they match literally.
pub fn search_pattern(raw: Option<&str>) -> Option<String> {
    let term = raw.map(str::trim).filter(|v| !v.is_empty())?;
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    Some(escaped)
}

/// A client-requested sort on an allow-listed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering {
    pub column: &'static str,
    pub descending: bool,
}

impl Ordering {
    /// Parses `field` or `-field` against `allowed` columns.
    ///
    /// Only allow-listed names are ever interpolated into SQL.
    pub fn parse(raw: Option<&str>, allowed: &[&'static str]) -> Result<Option<Self>, DomainError> {
        let raw = match raw.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw,
            None => return Ok(None),
        };
        let (name, descending) = match raw.strip_prefix('-') {
            Some(name) => (name, true),
            None => (raw, false),
        };
        allowed
            .iter()
            .copied()
            .find(|column| *column == name)
            .map(|column| Some(Ordering { column, descending }))
            .ok_or_else(|| {
                DomainError::invalid_query(
                    "ordering",
                    format!("expected one of {}", allowed.join(", ")),
                )
            })
    }

    /// SQL fragment such as `published_at DESC NULLS LAST`.
    pub fn to_sql(&self) -> String {
        if self.descending {
            format!("{} DESC NULLS LAST", self.column)
        } else {
            format!("{} ASC", self.column)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_only_for_public_reads() {
        assert!(ViewAction::List.active_only());
        assert!(ViewAction::Retrieve.active_only());
        assert!(!ViewAction::Create.active_only());
        assert!(!ViewAction::Update.active_only());
        assert!(!ViewAction::Delete.active_only());
    }

    #[test]
    fn test_parse_active_param() {
        assert!(parse_active_param(None));
        assert!(parse_active_param(Some("true")));
        assert!(parse_active_param(Some("")));
        assert!(parse_active_param(Some("0")));
        assert!(!parse_active_param(Some("false")));
        assert!(!parse_active_param(Some("FALSE")));
    }

    #[test]
    fn test_featured_filter() {
        assert_eq!(FeaturedFilter::parse(None), FeaturedFilter::Any);
        assert_eq!(FeaturedFilter::parse(Some("")), FeaturedFilter::Any);
        assert_eq!(FeaturedFilter::parse(Some("Yes")), FeaturedFilter::Only);
        assert_eq!(FeaturedFilter::parse(Some("1")), FeaturedFilter::Only);
        assert_eq!(FeaturedFilter::parse(Some("no")), FeaturedFilter::Exclude);
        assert_eq!(FeaturedFilter::parse(Some("maybe")), FeaturedFilter::Any);
        assert_eq!(FeaturedFilter::Only.as_flag(), Some(true));
        assert_eq!(FeaturedFilter::Exclude.as_flag(), Some(false));
        assert_eq!(FeaturedFilter::Any.as_flag(), None);
    }

    #[test]
    fn test_category_ref() {
        assert_eq!(CategoryRef::parse(None), None);
        assert_eq!(CategoryRef::parse(Some("")), None);
        assert_eq!(CategoryRef::parse(Some("12")), Some(CategoryRef::Id(12)));
        assert_eq!(
            CategoryRef::parse(Some("pali-texts")),
            Some(CategoryRef::Slug("pali-texts".into()))
        );
        assert_eq!(CategoryRef::Id(3).id(), Some(3));
        assert_eq!(CategoryRef::Slug("x".into()).slug(), Some("x"));
    }

    #[test]
    fn test_numeric_key() {
        assert_eq!(numeric_key("42"), Some(42));
        assert_eq!(numeric_key("42a"), None);
        assert_eq!(numeric_key("-1"), None);
        assert_eq!(numeric_key(""), None);
        assert_eq!(numeric_key("99999999999999999999"), None);
    }

    #[test]
    fn test_parse_latest_limit() {
        assert_eq!(parse_latest_limit(None), Ok(6));
        assert_eq!(parse_latest_limit(Some("3")), Ok(3));
        assert!(parse_latest_limit(Some("three")).is_err());
        assert!(parse_latest_limit(Some("-1")).is_err());
    }

    #[test]
    fn test_parse_int_param() {
        assert_eq!(parse_int_param("year", None), Ok(None));
        assert_eq!(parse_int_param("year", Some("2019")), Ok(Some(2019)));
        assert!(parse_int_param("year", Some("twenty")).is_err());
    }

    #[test]
    fn test_parse_bool_param() {
        assert_eq!(parse_bool_param("is_active", Some("True")), Ok(Some(true)));
        assert_eq!(parse_bool_param("is_active", Some("0")), Ok(Some(false)));
        assert_eq!(parse_bool_param("is_active", None), Ok(None));
        assert!(parse_bool_param("is_active", Some("sometimes")).is_err());
    }

    #[test]
    fn test_search_pattern_escapes() {
        assert_eq!(search_pattern(None), None);
        assert_eq!(search_pattern(Some("  ")), None);
        assert_eq!(search_pattern(Some("vesak")).as_deref(), Some("%vesak%"));
        assert_eq!(search_pattern(Some("50%_off")).as_deref(), Some("%50\\%\\_off%"));
    }

    #[test]
    fn test_ordering_parse() {
        let allowed = ["position", "published_at", "created_at"];
        assert_eq!(Ordering::parse(None, &allowed), Ok(None));
        let asc = Ordering::parse(Some("position"), &allowed).unwrap().unwrap();
        assert_eq!(asc.to_sql(), "position ASC");
        let desc = Ordering::parse(Some("-published_at"), &allowed).unwrap().unwrap();
        assert_eq!(desc.to_sql(), "published_at DESC NULLS LAST");
        assert!(Ordering::parse(Some("title; DROP TABLE albums"), &allowed).is_err());
    }
}
