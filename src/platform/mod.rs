//! Browser platform layer (wasm32 only)
//!
//! Binds the pure modules to the page:
//! - 2D canvas surface and animation-frame loop for the particle field
//! - Catalog fetch
//! - Grid and modal DOM views, wired to `Showcase::dispatch`
//! - Smooth scrolling and the glitch heading

pub mod app;
pub mod canvas;
pub mod dom;
pub mod fetch;
pub mod frame;
pub mod grid_view;
pub mod modal_view;
pub mod page;

pub use app::run;
