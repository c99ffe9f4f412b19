//! # Shelf web shell
//!
//! Dioxus front end: two root views (desktop and mobile chrome) over one router and three
//! static pages. The startup pipeline itself lives in `shelf_kernel::bootstrap`; this crate
//! supplies the pieces that touch Dioxus and the browser:
//!
//! * [`registry::ViewRegistry`]: resolves a root view id to its component.
//! * `browser::DomHost` (wasm only): mounts the application into the host element.
//! * [`settings::load`]: bundled config plus the build-time base path.

#[cfg(target_arch = "wasm32")]
mod browser;
pub mod pages;
pub mod registry;
pub mod routes;
pub mod settings;
pub mod views;

#[cfg(target_arch = "wasm32")]
pub use browser::start;
