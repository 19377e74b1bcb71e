//! Scroll-hint flags derived from the scroll geometry of a region.
//!
//! Pure and O(1): the wasm adapter feeds in the current geometry on load,
//! on every scroll event, and on window resize.

/// Rounding slack when deciding whether a region scrolls at all.
const SCROLLABLE_TOLERANCE: f64 = 1.0;
/// Slack before the top/bottom hints switch on.
const EDGE_TOLERANCE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollHints {
    pub is_scrollable: bool,
    pub can_scroll_up: bool,
    pub can_scroll_down: bool,
}

/// A region that does not scroll reports both direction flags false
/// regardless of its offset.
pub fn hints(metrics: &ScrollMetrics) -> ScrollHints {
    let is_scrollable = metrics.scroll_height > metrics.client_height + SCROLLABLE_TOLERANCE;
    let remaining_below = metrics.scroll_height - metrics.client_height - metrics.scroll_top;
    ScrollHints {
        is_scrollable,
        can_scroll_up: is_scrollable && metrics.scroll_top > EDGE_TOLERANCE,
        can_scroll_down: is_scrollable && remaining_below > EDGE_TOLERANCE,
    }
}
