use serde::Serialize;

pub const MAX_PER_PAGE: u32 = 100;

/// A 1-based page request. Out of range values are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.per_page as u64
    }

    pub fn limit(&self) -> u64 {
        self.per_page as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// A slice of a larger ordered collection.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page,
            per_page: request.per_page,
            total,
        }
    }

    /// Cuts a page out of an already ordered collection.
    pub fn from_ordered(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.limit() as usize)
            .collect();
        Self::new(items, request, total)
    }

    pub fn pages(&self) -> u64 {
        self.total.div_ceil(self.per_page as u64)
    }

    pub fn has_next(&self) -> bool {
        (self.page as u64) < self.pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn info(&self) -> PageInfo {
        PageInfo {
            page: self.page,
            pages: self.pages(),
            per_page: self.per_page,
            total: self.total,
            has_next: self.has_next(),
            has_prev: self.has_prev(),
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
        }
    }
}

/// Pagination metadata as exposed by the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: u32,
    pub pages: u64,
    pub per_page: u32,
    pub total: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_clamps_values() {
        let req = PageRequest::new(0, 0);
        assert_eq!(req.page, 1);
        assert_eq!(req.per_page, 1);

        let req = PageRequest::new(3, 1000);
        assert_eq!(req.per_page, MAX_PER_PAGE);
        assert_eq!(req.offset(), 200);
    }

    #[test]
    fn test_page_navigation_flags() {
        let all: Vec<u32> = (1..=25).collect();

        let first = Page::from_ordered(all.clone(), PageRequest::new(1, 10));
        assert_eq!(first.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(first.pages(), 3);
        assert!(first.has_next());
        assert!(!first.has_prev());

        let last = Page::from_ordered(all, PageRequest::new(3, 10));
        assert_eq!(last.items, vec![21, 22, 23, 24, 25]);
        assert!(!last.has_next());
        assert!(last.has_prev());
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let page = Page::from_ordered(vec![1, 2, 3], PageRequest::new(5, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
        assert_eq!(page.pages(), 1);
        assert!(!page.has_next());
    }

    #[test]
    fn test_empty_collection_has_zero_pages() {
        let page: Page<u32> = Page::from_ordered(vec![], PageRequest::default());
        let info = page.info();
        assert_eq!(info.pages, 0);
        assert!(!info.has_next);
        assert!(!info.has_prev);
    }
}
