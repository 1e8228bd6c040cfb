//! Index and listing page slicing.

use crate::config::{PostCount, SiteConfig};
use std::ops::Range;

/// Posts shown on the index page: the first `postPerIndex`.
pub fn index_posts<'a, T>(config: &SiteConfig, posts: &'a [T]) -> &'a [T] {
    &posts[..posts.len().min(config.post_per_index.get())]
}

/// One page of a paginated listing (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: usize,
    total_pages: usize,
    per_page: usize,
    total_items: usize,
}

impl Pagination {
    /// Page `current` of `total_items` split into `per_page` chunks.
    ///
    /// An empty listing still has one (empty) page. Returns `None` for
    /// pages out of range.
    pub fn new(total_items: usize, per_page: PostCount, current: usize) -> Option<Self> {
        let per_page = per_page.get();
        let total_pages = total_items.div_ceil(per_page).max(1);
        (1..=total_pages).contains(&current).then_some(Self {
            current,
            total_pages,
            per_page,
            total_items,
        })
    }

    /// Listing page using the site's `postPerPage`.
    pub fn for_site(config: &SiteConfig, total_items: usize, current: usize) -> Option<Self> {
        Self::new(total_items, config.post_per_page, current)
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    #[inline]
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    #[inline]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Item indices on this page.
    pub fn range(&self) -> Range<usize> {
        let start = self.current.saturating_sub(1) * self.per_page;
        let end = (start + self.per_page).min(self.total_items);
        start.min(end)..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    pub fn prev(&self) -> Option<usize> {
        (self.current > 1).then(|| self.current - 1)
    }

    pub fn next(&self) -> Option<usize> {
        (self.current < self.total_pages).then(|| self.current + 1)
    }
}
