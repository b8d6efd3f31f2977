//! Game catalog loaded from the site's JSON data file

use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors turning the data file into a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Not valid JSON, or not a list of game records
    #[error("invalid game data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One gallery entry. Gallery order is file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaItem {
    Image {
        src: String,
    },
    Video {
        /// Still shown as the gallery thumbnail
        poster: String,
        /// Embeddable player URL
        #[serde(rename = "videoUrl")]
        video_url: String,
    },
}

impl MediaItem {
    /// Image used for the gallery thumbnail
    pub fn thumbnail(&self) -> &str {
        match self {
            MediaItem::Image { src } => src,
            MediaItem::Video { poster, .. } => poster,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaItem::Video { .. })
    }
}

/// A game as described in the data file. Read-only after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "desc", default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    /// Source code link
    #[serde(rename = "githubUrl", default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(rename = "playUrl", default, skip_serializing_if = "Option::is_none")]
    pub play_url: Option<String>,
}

impl GameRecord {
    /// Source link, if present and non-empty
    pub fn source_link(&self) -> Option<&str> {
        self.source_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Play link, if present and non-empty
    pub fn play_link(&self) -> Option<&str> {
        self.play_url.as_deref().filter(|url| !url.is_empty())
    }

    /// First image-type media item
    pub fn first_image(&self) -> Option<&str> {
        self.media.iter().find_map(|m| match m {
            MediaItem::Image { src } => Some(src.as_str()),
            MediaItem::Video { .. } => None,
        })
    }
}

/// Games in file order plus a lookup by id
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    games: Vec<Rc<GameRecord>>,
    by_id: HashMap<String, Rc<GameRecord>>,
}

impl Catalog {
    /// Parse the data file (a JSON array of game records)
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<GameRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Index records by id. A repeated id replaces the earlier record in the
    /// lookup; both still appear in `games`.
    pub fn from_records(records: Vec<GameRecord>) -> Self {
        let games: Vec<Rc<GameRecord>> = records.into_iter().map(Rc::new).collect();
        let mut by_id = HashMap::with_capacity(games.len());
        for game in &games {
            if by_id.insert(game.id.clone(), Rc::clone(game)).is_some() {
                log::warn!("Duplicate game id {:?}, later entry wins", game.id);
            }
        }
        Self { games, by_id }
    }

    /// All records in file order
    pub fn games(&self) -> &[Rc<GameRecord>] {
        &self.games
    }

    pub fn get(&self, id: &str) -> Option<&Rc<GameRecord>> {
        self.by_id.get(id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
