//! Card projection for the games grid

use crate::settings::Settings;
use crate::showcase::catalog::GameRecord;

/// Everything a grid card displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub game_id: String,
    pub title: String,
    pub thumbnail: String,
    pub tags: Vec<String>,
    pub excerpt: String,
}

impl CardView {
    pub fn new(game: &GameRecord, settings: &Settings) -> Self {
        Self {
            game_id: game.id.clone(),
            title: game.title.clone(),
            thumbnail: game
                .first_image()
                .unwrap_or(settings.placeholder_thumbnail.as_str())
                .to_string(),
            tags: game.tags.iter().take(settings.card_tag_limit).cloned().collect(),
            excerpt: excerpt(&game.description, settings.excerpt_chars),
        }
    }

    /// Value for the card frame's `--bg-image` property (blurred backdrop)
    pub fn backdrop(&self) -> String {
        backdrop_property(&self.thumbnail)
    }
}

/// First `max_chars` characters followed by the excerpt marker.
///
/// Counts characters, so it may cut mid-word. The marker is always appended.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str(crate::consts::EXCERPT_MARKER);
    out
}

/// CSS `url()` value for an image source
pub fn backdrop_property(src: &str) -> String {
    format!("url({src})")
}

/// Thumbnail orientation, decides crop vs letterbox styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    Portrait,
    Landscape,
}

impl Aspect {
    /// Class names of every variant (cleared before applying a new one)
    pub const CLASSES: [&'static str; 2] = ["portrait", "landscape"];

    /// Strictly taller than wide is portrait; square is landscape
    pub fn classify(natural_width: u32, natural_height: u32) -> Self {
        if natural_height > natural_width {
            Aspect::Portrait
        } else {
            Aspect::Landscape
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Aspect::Portrait => "portrait",
            Aspect::Landscape => "landscape",
        }
    }
}
