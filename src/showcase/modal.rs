//! Game detail modal and its media gallery
//!
//! Navigation only exists on `Gallery`, which only exists while the modal is
//! open, so "navigate while closed" cannot be expressed except through the
//! `ModalState` wrappers, which ignore it.

use std::rc::Rc;

use super::catalog::{Catalog, GameRecord, MediaItem};

/// What a transition changed, so the view redraws only that
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalChange {
    /// Nothing to redraw
    Unchanged,
    /// A game was opened: redraw everything, gallery index is 0
    Opened,
    /// Different (or re-selected) media item is current
    MediaChanged,
    /// Modal hidden: stop video playback, unlock page scroll
    Closed,
}

/// The open game and which media item is on display.
///
/// Invariant: `index < media.len()` whenever the media list is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    game: Rc<GameRecord>,
    index: usize,
}

impl Gallery {
    pub fn new(game: Rc<GameRecord>) -> Self {
        Self { game, index: 0 }
    }

    pub fn game(&self) -> &GameRecord {
        &self.game
    }

    pub fn media(&self) -> &[MediaItem] {
        &self.game.media
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Media item on display (None for a game without media)
    pub fn current(&self) -> Option<&MediaItem> {
        self.game.media.get(self.index)
    }

    /// Jump to `index`. Out of range is ignored.
    pub fn select(&mut self, index: usize) -> ModalChange {
        if index >= self.game.media.len() {
            log::debug!("Ignoring media index {} (game {:?} has {})", index, self.game.id, self.game.media.len());
            return ModalChange::Unchanged;
        }
        self.index = index;
        ModalChange::MediaChanged
    }

    /// Following item, wrapping to the first
    pub fn next(&mut self) -> ModalChange {
        let len = self.game.media.len();
        if len == 0 {
            return ModalChange::Unchanged;
        }
        self.select((self.index + 1) % len)
    }

    /// Preceding item, wrapping to the last
    pub fn prev(&mut self) -> ModalChange {
        let len = self.game.media.len();
        if len == 0 {
            return ModalChange::Unchanged;
        }
        self.select((self.index + len - 1) % len)
    }
}

/// Single modal instance: closed, or open on one game
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Gallery),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    /// Page scrolling is locked while the modal shows
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn gallery(&self) -> Option<&Gallery> {
        match self {
            ModalState::Open(gallery) => Some(gallery),
            ModalState::Closed => None,
        }
    }

    fn gallery_mut(&mut self) -> Option<&mut Gallery> {
        match self {
            ModalState::Open(gallery) => Some(gallery),
            ModalState::Closed => None,
        }
    }

    /// Open `game_id` at its first media item. Unknown ids leave the state as is.
    pub fn open(&mut self, catalog: &Catalog, game_id: &str) -> ModalChange {
        match catalog.get(game_id) {
            Some(game) => {
                *self = ModalState::Open(Gallery::new(Rc::clone(game)));
                ModalChange::Opened
            }
            None => {
                log::debug!("Ignoring open for unknown game {:?}", game_id);
                ModalChange::Unchanged
            }
        }
    }

    pub fn select(&mut self, index: usize) -> ModalChange {
        self.gallery_mut().map_or(ModalChange::Unchanged, |g| g.select(index))
    }

    pub fn next(&mut self) -> ModalChange {
        self.gallery_mut().map_or(ModalChange::Unchanged, Gallery::next)
    }

    pub fn prev(&mut self) -> ModalChange {
        self.gallery_mut().map_or(ModalChange::Unchanged, Gallery::prev)
    }

    /// Close from any state. Always reports `Closed` so the view re-applies
    /// the close effects.
    pub fn close(&mut self) -> ModalChange {
        *self = ModalState::Closed;
        ModalChange::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(src: &str) -> MediaItem {
        MediaItem::Image { src: src.into() }
    }

    fn record(id: &str, media: Vec<MediaItem>) -> GameRecord {
        GameRecord {
            id: id.into(),
            title: id.to_uppercase(),
            description: String::new(),
            tags: Vec::new(),
            media,
            source_url: None,
            play_url: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            record(
                "g1",
                vec![
                    image("imgA"),
                    MediaItem::Video {
                        poster: "posterB".into(),
                        video_url: "vidB".into(),
                    },
                    image("imgC"),
                ],
            ),
            record("g2", vec![image("solo")]),
            record("empty", Vec::new()),
        ])
    }

    #[test]
    fn test_open_starts_at_first_item() {
        let catalog = catalog();
        let mut modal = ModalState::default();
        assert_eq!(modal.open(&catalog, "g1"), ModalChange::Opened);

        let gallery = modal.gallery().unwrap();
        assert_eq!(gallery.game().id, "g1");
        assert_eq!(gallery.index(), 0);
        assert_eq!(gallery.current(), Some(&image("imgA")));
        assert!(modal.scroll_locked());
    }

    #[test]
    fn test_walkthrough_with_wrap() {
        let catalog = catalog();
        let mut modal = ModalState::default();
        modal.open(&catalog, "g1");

        assert_eq!(modal.next(), ModalChange::MediaChanged);
        let gallery = modal.gallery().unwrap();
        assert_eq!(gallery.index(), 1);
        assert!(gallery.current().unwrap().is_video());

        modal.next();
        assert_eq!(modal.gallery().unwrap().current(), Some(&image("imgC")));

        modal.next();
        let gallery = modal.gallery().unwrap();
        assert_eq!(gallery.index(), 0);
        assert_eq!(gallery.current(), Some(&image("imgA")));
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let catalog = catalog();
        let mut modal = ModalState::default();
        modal.open(&catalog, "g1");
        modal.prev();
        assert_eq!(modal.gallery().unwrap().index(), 2);
    }

    #[test]
    fn test_single_item_navigation_stays_put() {
        let catalog = catalog();
        let mut modal = ModalState::default();
        modal.open(&catalog, "g2");
        assert_eq!(modal.next(), ModalChange::MediaChanged);
        assert_eq!(modal.gallery().unwrap().index(), 0);
        modal.prev();
        assert_eq!(modal.gallery().unwrap().index(), 0);
    }

    #[test]
    fn test_select() {
        let catalog = catalog();
        let mut modal = ModalState::default();
        modal.open(&catalog, "g1");
        assert_eq!(modal.select(2), ModalChange::MediaChanged);
        assert_eq!(modal.gallery().unwrap().index(), 2);
        assert_eq!(modal.select(3), ModalChange::Unchanged);
        assert_eq!(modal.gallery().unwrap().index(), 2);
    }

    #[test]
    fn test_empty_media_is_inert() {
        let catalog = catalog();
        let mut modal = ModalState::default();
        assert_eq!(modal.open(&catalog, "empty"), ModalChange::Opened);
        assert_eq!(modal.gallery().unwrap().current(), None);
        assert_eq!(modal.next(), ModalChange::Unchanged);
        assert_eq!(modal.prev(), ModalChange::Unchanged);
        assert_eq!(modal.select(0), ModalChange::Unchanged);
        assert_eq!(modal.gallery().unwrap().index(), 0);
    }

    #[test]
    fn test_unknown_id_keeps_state() {
        let catalog = catalog();
        let mut modal = ModalState::default();
        assert_eq!(modal.open(&catalog, "nope"), ModalChange::Unchanged);
        assert_eq!(modal, ModalState::Closed);

        modal.open(&catalog, "g1");
        modal.next();
        let before = modal.clone();
        assert_eq!(modal.open(&catalog, "nope"), ModalChange::Unchanged);
        assert_eq!(modal, before);
        assert_eq!(modal.gallery().unwrap().index(), 1);
    }

    #[test]
    fn test_navigation_while_closed_ignored() {
        let mut modal = ModalState::default();
        assert_eq!(modal.next(), ModalChange::Unchanged);
        assert_eq!(modal.prev(), ModalChange::Unchanged);
        assert_eq!(modal.select(0), ModalChange::Unchanged);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let catalog = catalog();
        let mut modal = ModalState::default();
        modal.open(&catalog, "g1");
        assert_eq!(modal.close(), ModalChange::Closed);
        assert!(!modal.scroll_locked());
        assert_eq!(modal.close(), ModalChange::Closed);
        assert_eq!(modal, ModalState::Closed);
    }

    #[test]
    fn test_opening_another_game_resets_index() {
        let catalog = catalog();
        let mut modal = ModalState::default();
        modal.open(&catalog, "g1");
        modal.select(2);
        modal.open(&catalog, "g2");
        let gallery = modal.gallery().unwrap();
        assert_eq!(gallery.game().id, "g2");
        assert_eq!(gallery.index(), 0);
    }
}
