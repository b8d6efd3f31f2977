//! Game showcase: catalog, grid cards and the detail modal
//!
//! Browser callbacks translate into `ShowcaseEvent`s and go through
//! `Showcase::dispatch`; the returned `ModalChange` tells the view what to
//! redraw.

pub mod catalog;
pub mod grid;
pub mod modal;

pub use catalog::{Catalog, CatalogError, GameRecord, MediaItem};
pub use grid::{Aspect, CardView};
pub use modal::{Gallery, ModalChange, ModalState};

use crate::settings::Settings;

/// User actions the showcase reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseEvent<'a> {
    /// Grid card clicked
    OpenGame(&'a str),
    /// Gallery thumbnail clicked
    SelectMedia(usize),
    NextMedia,
    PrevMedia,
    /// Close button
    Close,
    /// Click on the overlay outside the modal content
    Backdrop,
}

/// Loaded catalog plus the modal session
#[derive(Debug, Default)]
pub struct Showcase {
    catalog: Catalog,
    modal: ModalState,
}

impl Showcase {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            modal: ModalState::Closed,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Replace the catalog once the data file arrives
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    /// One card per game, in file order
    pub fn cards(&self, settings: &Settings) -> Vec<CardView> {
        self.catalog
            .games()
            .iter()
            .map(|game| CardView::new(game, settings))
            .collect()
    }

    /// Apply a user action to the modal
    pub fn dispatch(&mut self, event: ShowcaseEvent<'_>) -> ModalChange {
        match event {
            ShowcaseEvent::OpenGame(id) => self.modal.open(&self.catalog, id),
            ShowcaseEvent::SelectMedia(index) => self.modal.select(index),
            ShowcaseEvent::NextMedia => self.modal.next(),
            ShowcaseEvent::PrevMedia => self.modal.prev(),
            ShowcaseEvent::Close => self.modal.close(),
            ShowcaseEvent::Backdrop if self.modal.is_open() => self.modal.close(),
            ShowcaseEvent::Backdrop => ModalChange::Unchanged,
        }
    }
}
