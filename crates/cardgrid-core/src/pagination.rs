//! Page arithmetic for the card grid.
//!
//! The engine keeps `1 <= page <= page_count` after every call. Every input
//! change (item count or page size) recomputes immediately, so the visible
//! window can never be read from stale pagination.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Current page and total pages, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: usize,
    #[serde(rename = "pages")]
    pub page_count: usize,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            page: 1,
            page_count: 1,
        }
    }
}

impl PageInfo {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationEngine {
    page: usize,
    page_count: usize,
    page_size: usize,
    item_count: usize,
}

impl PaginationEngine {
    /// Engine on page 1 for `item_count` items, `page_size` per page.
    pub fn new(item_count: usize, page_size: usize) -> Self {
        let mut engine = Self {
            page: 1,
            page_count: 1,
            page_size: page_size.max(1),
            item_count,
        };
        engine.recompute(item_count);
        engine
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn state(&self) -> PageInfo {
        PageInfo {
            page: self.page,
            page_count: self.page_count,
        }
    }

    /// Change cards per page (rows × columns) and recompute.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.recompute(self.item_count);
    }

    /// Recompute the page count for `item_count` items and clamp the page.
    pub fn recompute(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.page_count = item_count.div_ceil(self.page_size).max(1);
        self.page = self.page.clamp(1, self.page_count);
    }

    /// Move by `delta` pages. Moving past either end stops at that end.
    pub fn navigate(&mut self, delta: i64) {
        let delta =
            isize::try_from(delta).unwrap_or(if delta < 0 { isize::MIN } else { isize::MAX });
        self.page = self.page.saturating_add_signed(delta);
        self.recompute(self.item_count);
    }

    /// Jump to `target`. Targets outside `1..=page_count` clamp.
    pub fn go_to(&mut self, target: i64) {
        self.page = usize::try_from(target.max(1)).unwrap_or(usize::MAX);
        self.recompute(self.item_count);
    }

    /// Item indices shown on the current page.
    pub fn visible_range(&self) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.page_size);
        let end = self.item_count.min(start.saturating_add(self.page_size));
        start.min(end)..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_items_two_by_four() {
        let mut engine = PaginationEngine::new(10, 2 * 4);
        assert_eq!(engine.page_size(), 8);
        assert_eq!(engine.state(), PageInfo { page: 1, page_count: 2 });
        assert_eq!(engine.visible_range(), 0..8);

        engine.navigate(1);
        assert_eq!(engine.state().page, 2);
        assert_eq!(engine.visible_range(), 8..10);
    }

    #[test]
    fn empty_store_has_one_empty_page() {
        let engine = PaginationEngine::new(0, 8);
        assert_eq!(engine.state(), PageInfo { page: 1, page_count: 1 });
        assert_eq!(engine.visible_range(), 0..0);
    }

    #[test]
    fn go_to_past_the_end_clamps() {
        let mut engine = PaginationEngine::new(24, 8);
        assert_eq!(engine.state().page_count, 3);
        engine.go_to(999);
        assert_eq!(engine.state().page, 3);
        engine.go_to(-4);
        assert_eq!(engine.state().page, 1);
    }

    #[test]
    fn navigate_clamps_instead_of_wrapping() {
        let mut engine = PaginationEngine::new(24, 8);
        engine.navigate(-1);
        assert_eq!(engine.state().page, 1);
        engine.navigate(10);
        assert_eq!(engine.state().page, 3);
        engine.navigate(i64::MIN);
        assert_eq!(engine.state().page, 1);
    }

    #[test]
    fn growing_page_size_pulls_page_back_in_range() {
        let mut engine = PaginationEngine::new(100, 8);
        engine.go_to(13);
        assert_eq!(engine.state().page, 13);

        engine.set_page_size(50);
        assert_eq!(engine.state(), PageInfo { page: 2, page_count: 2 });
        assert_eq!(engine.visible_range(), 50..100);
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut engine = PaginationEngine::new(37, 6);
        engine.go_to(5);
        engine.recompute(37);
        let once = engine.state();
        engine.recompute(37);
        assert_eq!(engine.state(), once);
    }

    #[test]
    fn shrinking_item_count_clamps_page() {
        let mut engine = PaginationEngine::new(40, 8);
        engine.go_to(5);
        engine.recompute(9);
        assert_eq!(engine.state(), PageInfo { page: 2, page_count: 2 });
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let engine = PaginationEngine::new(3, 0);
        assert_eq!(engine.page_size(), 1);
        assert_eq!(engine.state().page_count, 3);
    }

    #[test]
    fn page_info_serializes_like_the_page_query() {
        let json = serde_json::to_string(&PageInfo { page: 2, page_count: 5 }).unwrap();
        assert_eq!(json, r#"{"page":2,"pages":5}"#);
    }
}
