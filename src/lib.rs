//! repofolio: a minimal static personal website generated from public
//! GitHub repositories.
//!
//! The native binary fetches repository metadata, maintains
//! `projects-config.yaml` and renders `index.html`. The same crate compiled
//! for wasm32 ships only [`client`]: the theme, pagination and scroll-hint
//! controllers that enhance the rendered page.

pub mod client;

#[cfg(not(target_arch = "wasm32"))]
pub mod classify;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod github;
#[cfg(not(target_arch = "wasm32"))]
pub mod render;
