//! Shared utility functions.
//!
//! Pagination, category filtering and the horizontal tab strip shared by
//! the section navigations.

use crate::constants::{SCROLL_SHADOW_THRESHOLD, TAB_SCROLL_FRACTION};

// =============================================================================
// Pagination
// =============================================================================

/// Number of pages needed for `count` items (0 for an empty list).
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Clamp a 1-based page into `[1, max(total, 1)]`.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Contiguous slice for a 1-based page. Out-of-range pages are clamped.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    let page_size = page_size.max(1);
    let page = clamp_page(page, total_pages(items.len(), page_size));
    let start = ((page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Contiguous slice for a 0-based page. Out-of-range pages are clamped.
pub fn paginate_zero_based<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    paginate(items, page_size, page.saturating_add(1))
}

// =============================================================================
// Category filtering
// =============================================================================

/// The selection that matches every item.
pub const ALL_CATEGORIES: &str = "all";

/// Category field of a record: either a single id or a list of ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Categories {
    One(&'static str),
    Many(&'static [&'static str]),
}

impl Categories {
    pub fn contains(&self, id: &str) -> bool {
        match self {
            Categories::One(c) => *c == id,
            Categories::Many(list) => list.contains(&id),
        }
    }

    /// Iterate the ids in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        let slice: &[&'static str] = match self {
            Categories::One(c) => std::slice::from_ref(c),
            Categories::Many(list) => list,
        };
        slice.iter().copied()
    }
}

/// Anything carrying a category field.
pub trait Categorized {
    fn categories(&self) -> Categories;
}

/// Whether `item` belongs to `selected` (`all` matches everything).
pub fn matches_category<T: Categorized>(item: &T, selected: &str) -> bool {
    selected == ALL_CATEGORIES || item.categories().contains(selected)
}

/// Items matching `selected`, in input order.
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], selected: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches_category(*item, selected))
        .collect()
}

// =============================================================================
// Text
// =============================================================================

/// Greedy word wrap to `width` columns. Words longer than a line are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }

        let len = chars.len();
        if current_len > 0 && current_len + 1 + len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars);
        current_len += len;
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

// =============================================================================
// Scroll shadows and tab strips
// =============================================================================

/// Which edges of a horizontally scrollable strip have hidden content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollShadows {
    pub left: bool,
    pub right: bool,
}

impl Default for ScrollShadows {
    fn default() -> Self {
        Self {
            left: false,
            right: true,
        }
    }
}

impl ScrollShadows {
    pub fn compute(scroll_left: u16, scroll_width: u16, client_width: u16, threshold: u16) -> Self {
        let max_left = i32::from(scroll_width) - i32::from(client_width) - i32::from(threshold);
        Self {
            left: scroll_left > threshold,
            right: i32::from(scroll_left) < max_left,
        }
    }
}

/// Horizontal strip of tabs with its own scroll offset.
///
/// Widths are in terminal cells. The strip is measured on render through
/// [`TabStrip::measure`]; shadow state is refreshed separately so it can be
/// debounced.
#[derive(Debug, Clone, Default)]
pub struct TabStrip {
    /// Width of every tab, including its padding.
    tab_widths: Vec<u16>,
    /// Gap between tabs.
    gap: u16,
    /// Visible width.
    client_width: u16,
    /// Current scroll offset from the left edge.
    pub offset: u16,
    pub shadows: ScrollShadows,
}

impl TabStrip {
    pub fn new<S: AsRef<str>>(labels: &[S], gap: u16) -> Self {
        let tab_widths = labels
            .iter()
            .map(|l| l.as_ref().chars().count() as u16 + 4)
            .collect();
        Self {
            tab_widths,
            gap,
            ..Self::default()
        }
    }

    /// Total width of all tabs and gaps.
    pub fn scroll_width(&self) -> u16 {
        let tabs: u16 = self.tab_widths.iter().sum();
        tabs + self.gap * (self.tab_widths.len().saturating_sub(1) as u16)
    }

    pub fn client_width(&self) -> u16 {
        self.client_width
    }

    fn max_offset(&self) -> u16 {
        self.scroll_width().saturating_sub(self.client_width)
    }

    /// Record the visible width and keep the offset in range.
    pub fn measure(&mut self, client_width: u16) {
        self.client_width = client_width;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Left edge of tab `index`.
    pub fn tab_left(&self, index: usize) -> u16 {
        self.tab_widths
            .iter()
            .take(index)
            .map(|w| w + self.gap)
            .sum()
    }

    pub fn tab_width(&self, index: usize) -> u16 {
        self.tab_widths.get(index).copied().unwrap_or(0)
    }

    /// Scroll by a fraction of the visible width.
    pub fn scroll_left(&mut self) {
        let step = self.step();
        self.offset = self.offset.saturating_sub(step);
    }

    pub fn scroll_right(&mut self) {
        let step = self.step();
        self.offset = self.offset.saturating_add(step).min(self.max_offset());
    }

    fn step(&self) -> u16 {
        ((f64::from(self.client_width) * TAB_SCROLL_FRACTION) as u16).max(1)
    }

    /// Scroll so that tab `index` sits in the middle of the visible area.
    pub fn center_on(&mut self, index: usize) {
        let center = i32::from(self.tab_left(index)) - i32::from(self.client_width) / 2
            + i32::from(self.tab_width(index)) / 2;
        self.offset = center.clamp(0, i32::from(self.max_offset())) as u16;
    }

    /// Recompute which edges hide content.
    pub fn refresh_shadows(&mut self) {
        self.shadows = ScrollShadows::compute(
            self.offset,
            self.scroll_width(),
            self.client_width,
            SCROLL_SHADOW_THRESHOLD,
        );
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item(&'static str, Categories);

    impl Categorized for Item {
        fn categories(&self) -> Categories {
            self.1
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item("ide", Categories::Many(&["web", "ui"])),
            Item("support", Categories::One("support")),
            Item("bottles", Categories::Many(&["design", "digital"])),
            Item("bedroom", Categories::One("design")),
        ]
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 4), 0);
        assert_eq!(total_pages(8, 4), 2);
        assert_eq!(total_pages(9, 4), 3);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn test_pages_reconstruct_list() {
        for len in 0..13usize {
            let list: Vec<usize> = (0..len).collect();
            for size in 1..6 {
                let pages = total_pages(len, size);
                let joined: Vec<usize> = (1..=pages)
                    .flat_map(|p| paginate(&list, size, p).iter().copied())
                    .collect();
                assert_eq!(joined, list, "len={} size={}", len, size);
            }
        }
    }

    #[test]
    fn test_paginate_clamps_page() {
        let list = [1, 2, 3, 4, 5];
        assert_eq!(paginate(&list, 2, 0), &[1, 2]);
        assert_eq!(paginate(&list, 2, 99), &[5]);
        assert!(paginate::<u8>(&[], 2, 1).is_empty());
        assert_eq!(paginate_zero_based(&list, 2, 1), &[3, 4]);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let list = items();
        let all = filter_by_category(&list, ALL_CATEGORIES);
        assert_eq!(all.len(), list.len());
        assert!(all.iter().zip(list.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_specific_category() {
        let list = items();
        let design = filter_by_category(&list, "design");
        let names: Vec<&str> = design.iter().map(|i| i.0).collect();
        assert_eq!(names, vec!["bottles", "bedroom"]);

        for item in &list {
            let included = design.contains(&item);
            assert_eq!(included, item.1.contains("design"));
        }

        assert!(filter_by_category(&list, "unknown").is_empty());
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        for line in wrap_text(crate::models::EXPERIENCES[0].description, 30) {
            assert!(line.chars().count() <= 30);
        }
    }

    #[test]
    fn test_scroll_shadows() {
        // At the start of a long strip
        assert_eq!(
            ScrollShadows::compute(0, 100, 40, 2),
            ScrollShadows {
                left: false,
                right: true
            }
        );
        // In the middle
        assert_eq!(
            ScrollShadows::compute(30, 100, 40, 2),
            ScrollShadows {
                left: true,
                right: true
            }
        );
        // At the end
        assert_eq!(
            ScrollShadows::compute(60, 100, 40, 2),
            ScrollShadows {
                left: true,
                right: false
            }
        );
        // Strip narrower than the viewport
        assert_eq!(
            ScrollShadows::compute(0, 20, 40, 2),
            ScrollShadows {
                left: false,
                right: false
            }
        );
    }

    #[test]
    fn test_tab_strip_scrolling() {
        let mut strip = TabStrip::new(&["About", "Experience", "Contact", "Projects"], 1);
        // 9 + 14 + 11 + 12 tabs, 3 gaps
        assert_eq!(strip.scroll_width(), 49);

        strip.measure(20);
        strip.scroll_right();
        assert_eq!(strip.offset, 6);
        for _ in 0..10 {
            strip.scroll_right();
        }
        assert_eq!(strip.offset, 29);
        strip.refresh_shadows();
        assert!(strip.shadows.left);
        assert!(!strip.shadows.right);

        strip.scroll_left();
        assert_eq!(strip.offset, 23);
    }

    #[test]
    fn test_tab_strip_center_on() {
        let mut strip = TabStrip::new(&["About", "Experience", "Contact", "Projects"], 1);
        strip.measure(20);

        strip.center_on(0);
        assert_eq!(strip.offset, 0);

        // Tab 2 starts at 25 and is 11 wide
        strip.center_on(2);
        assert_eq!(strip.offset, 25 - 10 + 5);

        strip.center_on(3);
        assert_eq!(strip.offset, 29);
    }

    #[test]
    fn test_measure_clamps_offset() {
        let mut strip = TabStrip::new(&["About", "Experience"], 1);
        strip.measure(10);
        strip.center_on(1);
        strip.measure(200);
        assert_eq!(strip.offset, 0);
    }
}
