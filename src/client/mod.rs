//! Client-side presentation state for the generated pages.
//!
//! The three controllers (theme, pagination, scroll hints) are plain data
//! types with no DOM dependency so they can be unit-tested natively. The
//! `dom` module, compiled only for wasm32, wires them to the rendered
//! document through `web-sys`.

pub mod pagination;
pub mod scroll;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod dom;

/// Storage key for the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "repofolio-theme";

// DOM contract shared between the HTML renderer and the wasm adapter.
// The generator emits these markers; the adapter looks them up.
pub const DARK_BODY_CLASS: &str = "dark-mode";
pub const LIGHT_TOGGLE_ID: &str = "toggle-light";
pub const DARK_TOGGLE_ID: &str = "toggle-dark";
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";

pub const PAGINATED_CLASS: &str = "paginated";
pub const PAGER_CLASS: &str = "pager";
pub const PAGE_SIZE_ATTR: &str = "data-page-size";
pub const GROUP_ATTR: &str = "data-group";

pub const SCROLLABLE_CLASS: &str = "scrollable";
pub const IS_SCROLLABLE_CLASS: &str = "is-scrollable";
pub const CAN_SCROLL_UP_CLASS: &str = "can-scroll-up";
pub const CAN_SCROLL_DOWN_CLASS: &str = "can-scroll-down";
