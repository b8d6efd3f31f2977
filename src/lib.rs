//! Portfolio FX - client-side behavior for a single-page portfolio
//!
//! Core modules:
//! - `sim`: Particle field simulation (pure, seeded, single-steppable)
//! - `renderer`: Drawing surface abstraction and frame composition
//! - `showcase`: Game catalog, card projection and the gallery modal state machine
//! - `page`: Smooth-scroll and glitch-hover helpers
//! - `platform`: Browser bindings (canvas, fetch, DOM views)
//! - `settings`: Data-driven configuration

pub mod page;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod showcase;
pub mod sim;

pub use settings::Settings;

/// Default configuration constants
pub mod consts {
    /// Size of the particle pool (fixed for the program lifetime)
    pub const PARTICLE_COUNT: usize = 100;
    /// Per-axis speed range is [-MAX_SPEED, MAX_SPEED) in pixels per frame
    pub const MAX_SPEED: f32 = 0.25;
    /// Particle radius range is [0, MAX_RADIUS)
    pub const MAX_RADIUS: f32 = 2.0;
    /// Two fixed particle colors, picked with a fair coin
    pub const PALETTE: [&str; 2] = ["#00ff88", "#7000ff"];

    /// Particles closer than this are joined by a line
    pub const LINK_DISTANCE: f32 = 100.0;
    /// Line opacity at zero distance, fading linearly to 0 at LINK_DISTANCE
    pub const LINK_MAX_ALPHA: f32 = 0.1;
    pub const LINK_WIDTH: f32 = 0.5;
    /// RGB of connection lines
    pub const LINK_COLOR: [u8; 3] = [255, 255, 255];

    /// Location of the game catalog JSON
    pub const DATA_URL: &str = "../assets/data/games.json";
    /// Card thumbnail used when a game has no image media
    pub const PLACEHOLDER_THUMBNAIL: &str = "assets/images/placeholder.png";
    /// Characters of description shown on a card
    pub const EXCERPT_CHARS: usize = 100;
    /// Marker appended to card excerpts
    pub const EXCERPT_MARKER: &str = "...";
    /// Tags shown on a card
    pub const CARD_TAG_LIMIT: usize = 2;

    /// CSS animation applied while the glitch heading is hovered
    pub const GLITCH_ANIMATION: &str = "glitch 0.3s cubic-bezier(.25, .46, .45, .94) both infinite";
}
