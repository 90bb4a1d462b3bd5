//! Page-number pagination utilities.
//!
//! Lists are returned as `{count, next, previous, results}` envelopes.
//! `next`/`previous` are request-relative links built from the current path
//! and query string with the `page` parameter replaced.

use serde::Serialize;
use thiserror::Error;

/// Query parameter carrying the page number.
pub const PAGE_PARAM: &str = "page";

/// Query parameter overriding the page size.
pub const PAGE_SIZE_PARAM: &str = "page_size";

/// Error type for page resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid page.")]
    InvalidPage,
}

/// A resolved page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Resolves raw `page` / `page_size` query values.
    ///
    /// A missing page means page 1; a page that is not a positive integer is
    /// an error. A page size that is missing, not a positive integer, or
    /// zero falls back to `default_size`; larger values are capped at
    /// `max_size`.
    pub fn parse(
        page: Option<&str>,
        page_size: Option<&str>,
        default_size: u32,
        max_size: u32,
    ) -> Result<Self, PaginationError> {
        let page = match page.map(str::trim) {
            None | Some("") => 1,
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => return Err(PaginationError::InvalidPage),
            },
        };

        let page_size = page_size
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .map(|n| n.min(max_size))
            .unwrap_or(default_size);

        Ok(Self { page, page_size })
    }

    /// Row limit for the SQL query.
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// Row offset for the SQL query.
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }

    /// Number of pages needed for `count` rows (at least one).
    pub fn num_pages(&self, count: i64) -> u32 {
        if count <= 0 {
            return 1;
        }
        let size = i64::from(self.page_size);
        ((count + size - 1) / size) as u32
    }

    /// Checks the requested page against the total row count.
    ///
    /// Page 1 is always valid, even for an empty list.
    pub fn check_in_range(&self, count: i64) -> Result<(), PaginationError> {
        if self.page > self.num_pages(count) {
            Err(PaginationError::InvalidPage)
        } else {
            Ok(())
        }
    }
}

/// Paginated list envelope.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    /// Builds the envelope for `results` on the requested page.
    ///
    /// `path` and `query` describe the current request and are used to build
    /// the neighbouring page links.
    pub fn new(
        results: Vec<T>,
        count: i64,
        request: PageRequest,
        path: &str,
        query: Option<&str>,
    ) -> Self {
        let last = request.num_pages(count);
        let next =
            (request.page < last).then(|| page_link(path, query, Some(request.page + 1)));
        let previous = match request.page {
            1 => None,
            // Page 1 drops the parameter entirely.
            2 => Some(page_link(path, query, None)),
            n => Some(page_link(path, query, Some(n - 1))),
        };

        Self {
            count,
            next,
            previous,
            results,
        }
    }

    /// Converts the result items while keeping the envelope.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}

/// Builds `path?query` with the page parameter replaced (or removed).
pub fn page_link(path: &str, query: Option<&str>, page: Option<u32>) -> String {
    let mut pairs: Vec<String> = query
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| pair.split('=').next() != Some(PAGE_PARAM))
        .map(str::to_string)
        .collect();

    if let Some(page) = page {
        pairs.push(format!("{}={}", PAGE_PARAM, page));
    }

    if pairs.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, pairs.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let req = PageRequest::parse(None, None, 10, 100).unwrap();
        assert_eq!(req, PageRequest { page: 1, page_size: 10 });
        assert_eq!(req.offset(), 0);
        assert_eq!(req.limit(), 10);
    }

    #[test]
    fn test_parse_page_and_size() {
        let req = PageRequest::parse(Some("3"), Some("6"), 10, 100).unwrap();
        assert_eq!(req.page, 3);
        assert_eq!(req.page_size, 6);
        assert_eq!(req.offset(), 12);
    }

    #[test]
    fn test_parse_invalid_page() {
        assert_eq!(
            PageRequest::parse(Some("abc"), None, 10, 100),
            Err(PaginationError::InvalidPage)
        );
        assert_eq!(
            PageRequest::parse(Some("0"), None, 10, 100),
            Err(PaginationError::InvalidPage)
        );
        assert_eq!(
            PageRequest::parse(Some("-2"), None, 10, 100),
            Err(PaginationError::InvalidPage)
        );
    }

    #[test]
    fn test_parse_page_size_falls_back_and_caps() {
        let req = PageRequest::parse(None, Some("lots"), 10, 100).unwrap();
        assert_eq!(req.page_size, 10);
        let req = PageRequest::parse(None, Some("0"), 10, 100).unwrap();
        assert_eq!(req.page_size, 10);
        let req = PageRequest::parse(None, Some("5000"), 10, 100).unwrap();
        assert_eq!(req.page_size, 100);
    }

    #[test]
    fn test_num_pages() {
        let req = PageRequest { page: 1, page_size: 10 };
        assert_eq!(req.num_pages(0), 1);
        assert_eq!(req.num_pages(10), 1);
        assert_eq!(req.num_pages(11), 2);
        assert_eq!(req.num_pages(30), 3);
    }

    #[test]
    fn test_check_in_range() {
        let empty_first = PageRequest { page: 1, page_size: 10 };
        assert!(empty_first.check_in_range(0).is_ok());

        let beyond = PageRequest { page: 3, page_size: 10 };
        assert!(beyond.check_in_range(20).is_err());
        assert!(beyond.check_in_range(21).is_ok());
    }

    #[test]
    fn test_page_link_replaces_page() {
        assert_eq!(
            page_link("/api/books", Some("page=2&featured=true"), Some(3)),
            "/api/books?featured=true&page=3"
        );
        assert_eq!(page_link("/api/books", Some("page=2"), None), "/api/books");
        assert_eq!(page_link("/api/news", None, Some(2)), "/api/news?page=2");
    }

    #[test]
    fn test_page_link_keeps_similar_keys() {
        assert_eq!(
            page_link("/api/news", Some("page_size=5&page=1"), Some(2)),
            "/api/news?page_size=5&page=2"
        );
    }

    #[test]
    fn test_paginated_links() {
        let req = PageRequest { page: 2, page_size: 2 };
        let page = Paginated::new(vec![3, 4], 5, req, "/api/stats", Some("page=2"));
        assert_eq!(page.count, 5);
        assert_eq!(page.next.as_deref(), Some("/api/stats?page=3"));
        assert_eq!(page.previous.as_deref(), Some("/api/stats"));

        let last = PageRequest { page: 3, page_size: 2 };
        let page = Paginated::new(vec![5], 5, last, "/api/stats", Some("page=3"));
        assert!(page.next.is_none());
        assert_eq!(page.previous.as_deref(), Some("/api/stats?page=2"));
    }

    #[test]
    fn test_paginated_map() {
        let req = PageRequest { page: 1, page_size: 10 };
        let page = Paginated::new(vec![1, 2], 2, req, "/api/x", None).map(|n| n * 10);
        assert_eq!(page.results, vec![10, 20]);
        assert!(page.next.is_none());
        assert!(page.previous.is_none());
    }
}
