//! Theme selection with a persisted preference.
//!
//! The controller owns an injected [`PreferenceStore`] so the browser
//! adapter can hand it `localStorage` while tests use an in-memory fake.
//! Persistence is best-effort: if the store rejects a write (storage
//! disabled, quota denied) the theme still changes for the session.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything but the two known names is rejected.
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// The preference could not be read or written.
#[derive(Debug, Error)]
#[error("preference storage is unavailable")]
pub struct StoreError;

/// Durable per-origin storage for the theme preference.
pub trait PreferenceStore {
    fn get(&self) -> Option<Theme>;
    fn set(&mut self, theme: Theme) -> Result<(), StoreError>;
}

/// Desired presentation for the current theme: the body class and the
/// active state of the two toggle controls. Exactly one toggle is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeView {
    pub dark_body_class: bool,
    pub light_active: bool,
    pub dark_active: bool,
}

impl ThemeView {
    fn for_theme(theme: Theme) -> Self {
        Self {
            dark_body_class: theme == Theme::Dark,
            light_active: theme == Theme::Light,
            dark_active: theme == Theme::Dark,
        }
    }
}

pub struct ThemeController<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the effective theme: the persisted preference wins, then the
    /// theme the early inline initializer already put on the body, then light.
    pub fn load(store: S, fallback: Option<Theme>) -> Self {
        let current = store.get().or(fallback).unwrap_or_default();
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn view(&self) -> ThemeView {
        ThemeView::for_theme(self.current)
    }

    /// Switch the theme and persist it. A failing store is ignored; the
    /// session keeps the new theme either way.
    pub fn set(&mut self, theme: Theme) -> ThemeView {
        self.current = theme;
        let _ = self.store.set(theme);
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct MemoryStore {
        value: Rc<RefCell<Option<Theme>>>,
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self) -> Option<Theme> {
            *self.value.borrow()
        }

        fn set(&mut self, theme: Theme) -> Result<(), StoreError> {
            *self.value.borrow_mut() = Some(theme);
            Ok(())
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self) -> Option<Theme> {
            None
        }

        fn set(&mut self, _theme: Theme) -> Result<(), StoreError> {
            Err(StoreError)
        }
    }

    #[test]
    fn test_defaults_to_light_when_nothing_stored() {
        let controller = ThemeController::load(MemoryStore::default(), None);
        assert_eq!(controller.current(), Theme::Light);
    }

    #[test]
    fn test_falls_back_to_body_theme_when_store_empty() {
        let controller = ThemeController::load(MemoryStore::default(), Some(Theme::Dark));
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn test_persisted_value_beats_fallback() {
        let store = MemoryStore::default();
        *store.value.borrow_mut() = Some(Theme::Dark);
        let controller = ThemeController::load(store, Some(Theme::Light));
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn test_set_persists_and_marks_one_toggle_active() {
        let store = MemoryStore::default();
        let mut controller = ThemeController::load(store.clone(), None);

        let view = controller.set(Theme::Dark);
        assert_eq!(*store.value.borrow(), Some(Theme::Dark));
        assert!(view.dark_body_class);
        assert!(view.dark_active);
        assert!(!view.light_active);

        let view = controller.set(Theme::Light);
        assert_eq!(*store.value.borrow(), Some(Theme::Light));
        assert!(!view.dark_body_class);
        assert!(view.light_active);
        assert!(!view.dark_active);
    }

    #[test]
    fn test_reload_reapplies_persisted_theme() {
        let store = MemoryStore::default();
        let mut controller = ThemeController::load(store.clone(), None);
        controller.set(Theme::Dark);

        // Simulated reload: fresh controller over the same storage.
        let controller = ThemeController::load(store, None);
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn test_failing_store_still_updates_session_theme() {
        let mut controller = ThemeController::load(BrokenStore, None);
        let view = controller.set(Theme::Dark);
        assert_eq!(controller.current(), Theme::Dark);
        assert!(view.dark_body_class);
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::parse(""), None);
    }
}
