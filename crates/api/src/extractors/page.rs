//! Page-number pagination extractor.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use shared::pagination::{PageRequest, Paginated};

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
struct PageParams {
    page: Option<String>,
    page_size: Option<String>,
}

/// The requested page plus what is needed to build `next`/`previous` links.
#[derive(Debug, Clone)]
pub struct Page {
    pub request: PageRequest,
    path: String,
    query: Option<String>,
}

impl Page {
    pub fn new(request: PageRequest, path: impl Into<String>, query: Option<String>) -> Self {
        Self {
            request,
            path: path.into(),
            query,
        }
    }

    pub fn limit(&self) -> i64 {
        self.request.limit()
    }

    pub fn offset(&self) -> i64 {
        self.request.offset()
    }

    /// Wraps one page of results, rejecting pages past the end.
    pub fn envelope<T>(&self, results: Vec<T>, count: i64) -> Result<Paginated<T>, ApiError> {
        self.request.check_in_range(count)?;
        Ok(Paginated::new(
            results,
            count,
            self.request,
            &self.path,
            self.query.as_deref(),
        ))
    }
}

#[async_trait::async_trait]
impl FromRequestParts<AppState> for Page {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::try_from_uri(&parts.uri).unwrap_or_default();
        let request = PageRequest::parse(
            params.page.as_deref(),
            params.page_size.as_deref(),
            state.config.pagination.default_page_size,
            state.config.pagination.max_page_size,
        )?;

        Ok(Page::new(
            request,
            parts.uri.path(),
            parts.uri.query().map(str::to_string),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: u32, size: u32, query: Option<&str>) -> Page {
        Page::new(
            PageRequest {
                page: n,
                page_size: size,
            },
            "/api/news",
            query.map(str::to_string),
        )
    }

    #[test]
    fn test_envelope_links() {
        let envelope = page(2, 2, Some("page=2&search=flood"))
            .envelope(vec![3, 4], 5)
            .unwrap();
        assert_eq!(envelope.count, 5);
        assert_eq!(envelope.next.as_deref(), Some("/api/news?search=flood&page=3"));
        assert_eq!(envelope.previous.as_deref(), Some("/api/news?search=flood"));
    }

    #[test]
    fn test_envelope_rejects_page_past_end() {
        let err = page(3, 10, None).envelope(Vec::<i32>::new(), 12).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_first_page_of_empty_list() {
        let envelope = page(1, 10, None).envelope(Vec::<i32>::new(), 0).unwrap();
        assert!(envelope.next.is_none());
        assert!(envelope.previous.is_none());
        assert!(envelope.results.is_empty());
    }
}
