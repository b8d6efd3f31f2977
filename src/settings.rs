//! Site settings
//!
//! Read once at startup from an inline JSON block in the page. Every field is
//! optional in the JSON; missing fields fall back to `consts`.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Id of the `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Tunables for the particle field and the game showcase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Particle field ===
    /// Number of particles spawned on first load
    pub particle_count: usize,
    /// Per-axis speed bound (pixels per frame)
    pub max_speed: f32,
    /// Upper bound of the random particle radius
    pub max_radius: f32,
    /// Particle colors (CSS), chosen 50/50
    pub palette: [String; 2],

    // === Connections ===
    /// Distance below which two particles are linked
    pub link_distance: f32,
    /// Opacity of a zero-length link
    pub link_max_alpha: f32,
    /// Line width of links
    pub link_width: f32,
    /// RGB of links
    pub link_color: [u8; 3],

    // === Showcase ===
    /// Catalog JSON location
    pub data_url: String,
    /// Card thumbnail for games without images
    pub placeholder_thumbnail: String,
    /// Description characters kept on cards
    pub excerpt_chars: usize,
    /// Tags kept on cards
    pub card_tag_limit: usize,

    // === Page ===
    /// Animation applied to the hovered glitch heading
    pub glitch_animation: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particle_count: consts::PARTICLE_COUNT,
            max_speed: consts::MAX_SPEED,
            max_radius: consts::MAX_RADIUS,
            palette: consts::PALETTE.map(String::from),

            link_distance: consts::LINK_DISTANCE,
            link_max_alpha: consts::LINK_MAX_ALPHA,
            link_width: consts::LINK_WIDTH,
            link_color: consts::LINK_COLOR,

            data_url: consts::DATA_URL.to_string(),
            placeholder_thumbnail: consts::PLACEHOLDER_THUMBNAIL.to_string(),
            excerpt_chars: consts::EXCERPT_CHARS,
            card_tag_limit: consts::CARD_TAG_LIMIT,

            glitch_animation: consts::GLITCH_ANIMATION.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON, filling gaps with defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Clamp values that would break rendering
    pub fn sanitized(mut self) -> Self {
        self.max_speed = self.max_speed.abs();
        self.max_radius = self.max_radius.max(0.0);
        self.link_distance = self.link_distance.max(0.0);
        self.link_max_alpha = self.link_max_alpha.clamp(0.0, 1.0);
        self.link_width = self.link_width.max(0.0);
        self
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", CONFIG_ELEMENT_ID);
                    return settings;
                }
                Err(e) => log::warn!("Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.particle_count, 100);
        assert_eq!(settings.palette[0], "#00ff88");
    }

    #[test]
    fn test_partial_override() {
        let settings = Settings::from_json(r#"{"particle_count": 40, "data_url": "games.json"}"#).unwrap();
        assert_eq!(settings.particle_count, 40);
        assert_eq!(settings.data_url, "games.json");
        assert_eq!(settings.link_distance, consts::LINK_DISTANCE);
    }

    #[test]
    fn test_sanitize_clamps() {
        let settings = Settings::from_json(r#"{"link_max_alpha": 3.0, "link_distance": -5.0, "max_speed": -1.0}"#)
            .unwrap();
        assert_eq!(settings.link_max_alpha, 1.0);
        assert_eq!(settings.link_distance, 0.0);
        assert_eq!(settings.max_speed, 1.0);
    }

    #[test]
    fn test_invalid_json_errors() {
        assert!(Settings::from_json("{particle_count:").is_err());
    }
}
