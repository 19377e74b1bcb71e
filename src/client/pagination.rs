//! Fixed-size pagination over a rendered list.
//!
//! Visibility is computed from the original 0-based DOM order; items are
//! never reordered. Each list gets its own `Paginator`, so multiple lists
//! on one page stay independent.

use std::ops::Range;

/// Page size used when a list carries no (or an unparsable) size attribute.
pub const DEFAULT_PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    item_count: usize,
    page_size: usize,
    current: usize,
}

impl Paginator {
    /// A misconfigured page size of zero is normalized to one so the
    /// arithmetic below stays well-defined. Starts on page 1.
    pub fn new(item_count: usize, page_size: usize) -> Self {
        Self {
            item_count,
            page_size: page_size.max(1),
            current: 1,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    /// An empty list still has one (empty) page.
    pub fn total_pages(&self) -> usize {
        self.item_count.div_ceil(self.page_size).max(1)
    }

    /// Jump to a page, clamped to `[1, total_pages]`.
    pub fn goto(&mut self, page: usize) -> usize {
        self.current = page.clamp(1, self.total_pages());
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.goto(self.current + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.goto(self.current.saturating_sub(1))
    }

    /// Item indices visible on the current page.
    pub fn visible_range(&self) -> Range<usize> {
        let start = (self.current - 1) * self.page_size;
        let end = (start + self.page_size).min(self.item_count);
        start.min(end)..end
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible_range().contains(&index)
    }

    /// Rendering plan for the pager. Empty when the whole list fits on one
    /// page, otherwise previous / numbered / next controls in order.
    pub fn controls(&self) -> Vec<PagerControl> {
        let total = self.total_pages();
        if total <= 1 {
            return Vec::new();
        }
        let mut controls = Vec::with_capacity(total + 2);
        controls.push(PagerControl::Prev {
            enabled: self.current > 1,
        });
        for number in 1..=total {
            controls.push(PagerControl::Page {
                number,
                active: number == self.current,
            });
        }
        controls.push(PagerControl::Next {
            enabled: self.current < total,
        });
        controls
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerControl {
    Prev { enabled: bool },
    Page { number: usize, active: bool },
    Next { enabled: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_indices(paginator: &Paginator) -> Vec<usize> {
        (0..paginator.item_count())
            .filter(|&i| paginator.is_visible(i))
            .collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(Paginator::new(0, 6).total_pages(), 1);
        assert_eq!(Paginator::new(1, 6).total_pages(), 1);
        assert_eq!(Paginator::new(6, 6).total_pages(), 1);
        assert_eq!(Paginator::new(7, 6).total_pages(), 2);
        assert_eq!(Paginator::new(13, 6).total_pages(), 3);
    }

    #[test]
    fn test_zero_page_size_is_normalized() {
        let paginator = Paginator::new(5, 0);
        assert_eq!(paginator.page_size(), 1);
        assert_eq!(paginator.total_pages(), 5);
    }

    #[test]
    fn test_visibility_window_per_page() {
        let mut paginator = Paginator::new(13, 6);
        assert_eq!(visible_indices(&paginator), vec![0, 1, 2, 3, 4, 5]);

        paginator.goto(2);
        assert_eq!(visible_indices(&paginator), vec![6, 7, 8, 9, 10, 11]);

        paginator.goto(3);
        assert_eq!(visible_indices(&paginator), vec![12]);
    }

    #[test]
    fn test_prev_clamps_at_first_page() {
        let mut paginator = Paginator::new(13, 6);
        paginator.goto(1);
        assert_eq!(paginator.prev(), 1);
        assert_eq!(paginator.current_page(), 1);
    }

    #[test]
    fn test_next_clamps_at_last_page() {
        let mut paginator = Paginator::new(13, 6);
        paginator.goto(3);
        assert_eq!(paginator.next(), 3);
        assert_eq!(paginator.current_page(), 3);
    }

    #[test]
    fn test_goto_clamps_out_of_range_targets() {
        let mut paginator = Paginator::new(13, 6);
        assert_eq!(paginator.goto(99), 3);
        assert_eq!(paginator.goto(0), 1);
    }

    #[test]
    fn test_single_page_renders_no_controls() {
        assert!(Paginator::new(0, 6).controls().is_empty());
        assert!(Paginator::new(6, 6).controls().is_empty());
    }

    #[test]
    fn test_controls_order_and_states() {
        let mut paginator = Paginator::new(13, 6);
        paginator.goto(2);
        assert_eq!(
            paginator.controls(),
            vec![
                PagerControl::Prev { enabled: true },
                PagerControl::Page { number: 1, active: false },
                PagerControl::Page { number: 2, active: true },
                PagerControl::Page { number: 3, active: false },
                PagerControl::Next { enabled: true },
            ]
        );

        paginator.goto(1);
        assert_eq!(
            paginator.controls()[0],
            PagerControl::Prev { enabled: false }
        );
        paginator.goto(3);
        let controls = paginator.controls();
        assert_eq!(controls[controls.len() - 1], PagerControl::Next { enabled: false });
    }

    #[test]
    fn test_independent_lists_do_not_share_state() {
        let mut first = Paginator::new(13, 6);
        let second = Paginator::new(9, 4);

        first.goto(3);
        assert_eq!(second.current_page(), 1);
        assert_eq!(visible_indices(&second), vec![0, 1, 2, 3]);
        assert_eq!(visible_indices(&first), vec![12]);
    }
}
