//! Pagination types for list endpoints.
//!
//! The simulations API pages with zero-based indices and reports page metadata
//! next to the content.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (0-indexed).
    #[serde(default)]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_size() -> u32 {
    10
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: default_size(),
        }
    }
}

impl PageRequest {
    /// Creates a request for the given page and size.
    #[must_use]
    pub const fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Returns the request for the following page.
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            size: self.size,
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items in the current page.
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total_elements: u64,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Current page number (0-indexed).
    #[serde(default)]
    pub number: u32,
    /// Requested page size.
    #[serde(default)]
    pub size: u32,
    /// Whether this is the final page.
    #[serde(default)]
    pub last: Option<bool>,
}

impl<T> Page<T> {
    /// Creates a page, deriving the page count from the totals.
    #[must_use]
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let total_pages = if request.size == 0 {
            0
        } else {
            u32::try_from(total_elements.div_ceil(u64::from(request.size))).unwrap_or(u32::MAX)
        };

        Self {
            content,
            total_elements,
            total_pages,
            number: request.page,
            size: request.size,
            last: Some(request.page.saturating_add(1) >= total_pages),
        }
    }

    /// Returns true when no further page should be requested.
    ///
    /// Prefers the server's `last` flag and falls back to the page count.
    /// An empty page always ends iteration.
    #[must_use]
    pub fn is_last(&self) -> bool {
        if self.content.is_empty() {
            return true;
        }
        match self.last {
            Some(last) => last,
            None => self.number.saturating_add(1) >= self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_default() {
        let request = PageRequest::default();
        assert_eq!(request.page, 0);
        assert_eq!(request.size, 10);
    }

    #[test]
    fn test_page_request_next() {
        let request = PageRequest::new(0, 20);
        assert_eq!(request.next(), PageRequest::new(1, 20));
        assert_eq!(PageRequest::new(u32::MAX, 20).next().page, u32::MAX);
    }

    #[test]
    fn test_page_new_counts_pages() {
        // 25 items, 10 per page -> 3 pages
        let page: Page<i32> = Page::new(vec![1; 10], PageRequest::new(0, 10), 25);
        assert_eq!(page.total_pages, 3);
        assert!(!page.is_last());

        let page: Page<i32> = Page::new(vec![1; 5], PageRequest::new(2, 10), 25);
        assert!(page.is_last());
    }

    #[test]
    fn test_empty_page_is_last() {
        let page: Page<i32> = Page::new(vec![], PageRequest::new(0, 10), 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.is_last());
    }

    #[test]
    fn test_deserialize_spring_page() {
        let json = r#"{"content":[1,2],"totalElements":12,"totalPages":6,"number":0,"size":2}"#;
        let page: Page<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![1, 2]);
        assert_eq!(page.last, None);
        assert!(!page.is_last());
    }
}
