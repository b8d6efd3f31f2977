//! Game detail modal: mirrors `ModalState` into the page

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, EventTarget, HtmlAnchorElement, HtmlElement, HtmlIFrameElement, HtmlImageElement,
};

use super::dom;
use crate::showcase::{Gallery, MediaItem, ModalChange, ModalState};

pub const MODAL_ID: &str = "game-modal";
pub const GALLERY_ID: &str = "modal-gallery";
pub const PREV_ID: &str = "media-prev-btn";
pub const NEXT_ID: &str = "media-next-btn";
pub const CLOSE_SELECTOR: &str = ".close-modal";
/// Class of a gallery thumbnail; carries `data-index`
pub const THUMB_CLASS: &str = "gallery-item";
pub const THUMB_INDEX_ATTR: &str = "data-index";

/// Handles to the modal's regions. Optional regions are skipped when missing.
pub struct ModalView {
    overlay: HtmlElement,
    body: Option<HtmlElement>,
    title: Option<Element>,
    desc: Option<Element>,
    tags: Option<Element>,
    gallery: Option<Element>,
    image: Option<HtmlImageElement>,
    video: Option<HtmlIFrameElement>,
    video_button: Option<HtmlElement>,
    source_link: Option<HtmlAnchorElement>,
    play_link: Option<HtmlAnchorElement>,
}

impl ModalView {
    /// None when the page has no modal
    pub fn find(document: &Document) -> Option<Self> {
        Some(Self {
            overlay: dom::by_id(document, MODAL_ID)?,
            body: document.body(),
            title: document.get_element_by_id("modal-title"),
            desc: document.get_element_by_id("modal-desc"),
            tags: document.get_element_by_id("modal-tags"),
            gallery: document.get_element_by_id(GALLERY_ID),
            image: dom::by_id(document, "modal-img"),
            video: dom::by_id(document, "modal-video-iframe"),
            video_button: dom::by_id(document, "video-play-btn"),
            source_link: dom::query(document, ".modal-actions .btn-primary"),
            play_link: dom::query(document, ".modal-actions .btn-secondary"),
        })
    }

    /// True when a click landed on the overlay itself, outside the content
    pub fn is_backdrop(&self, target: Option<EventTarget>) -> bool {
        target
            .as_ref()
            .and_then(|t| t.dyn_ref::<HtmlElement>())
            .is_some_and(|el| *el == self.overlay)
    }

    /// Redraw whatever `change` touched
    pub fn apply(&self, document: &Document, change: ModalChange, state: &ModalState) {
        match (change, state.gallery()) {
            (ModalChange::Opened, Some(gallery)) => {
                if let Err(e) = self.show_game(document, gallery) {
                    log::warn!("Could not render modal: {:?}", e);
                }
            }
            (ModalChange::MediaChanged, Some(gallery)) => self.show_media(gallery),
            (ModalChange::Closed, _) => self.hide(),
            _ => {}
        }
    }

    fn show_game(&self, document: &Document, gallery: &Gallery) -> Result<(), JsValue> {
        let game = gallery.game();

        if let Some(title) = &self.title {
            title.set_text_content(Some(&game.title));
        }
        if let Some(desc) = &self.desc {
            desc.set_text_content(Some(&game.description));
        }

        if let Some(tags) = &self.tags {
            tags.set_inner_html("");
            for tag in &game.tags {
                let span = document.create_element("span")?;
                span.set_class_name("tag");
                span.set_text_content(Some(tag));
                tags.append_child(&span)?;
            }
        }

        // Links keep their previous target when the game has none
        if let (Some(link), Some(url)) = (&self.source_link, game.source_link()) {
            link.set_href(url);
            link.set_target("_blank");
        }
        if let (Some(link), Some(url)) = (&self.play_link, game.play_link()) {
            link.set_href(url);
            link.set_target("_blank");
        }

        if let Some(strip) = &self.gallery {
            strip.set_inner_html("");
            for (index, item) in gallery.media().iter().enumerate() {
                let thumb = document.create_element("div")?;
                thumb.set_class_name(THUMB_CLASS);
                thumb.set_attribute(THUMB_INDEX_ATTR, &index.to_string())?;

                let img = document.create_element("img")?;
                img.set_attribute("src", item.thumbnail())?;
                thumb.append_child(&img)?;

                if item.is_video() {
                    let icon = document.create_element("i")?;
                    icon.set_class_name("fas fa-play-circle gallery-play-icon");
                    thumb.append_child(&icon)?;
                }
                strip.append_child(&thumb)?;
            }
        }

        self.show_media(gallery);
        dom::set_display(&self.overlay, "block");
        if let Some(body) = &self.body {
            let _ = body.style().set_property("overflow", "hidden");
        }
        Ok(())
    }

    fn show_media(&self, gallery: &Gallery) {
        let Some(item) = gallery.current() else {
            return;
        };

        if let Some(button) = &self.video_button {
            dom::set_display(button, "none");
        }

        match item {
            MediaItem::Video { video_url, .. } => {
                if let Some(image) = &self.image {
                    dom::set_display(image, "none");
                }
                if let Some(video) = &self.video {
                    video.set_src(video_url);
                    dom::set_display(video, "block");
                }
            }
            MediaItem::Image { src } => {
                if let Some(image) = &self.image {
                    image.set_src(src);
                    dom::set_display(image, "block");
                }
                if let Some(video) = &self.video {
                    dom::set_display(video, "none");
                    video.set_src("");
                }
            }
        }

        if let Some(strip) = &self.gallery {
            let thumbs = strip.children();
            for i in 0..thumbs.length() {
                if let Some(thumb) = thumbs.item(i) {
                    let _ = thumb
                        .class_list()
                        .toggle_with_force("active", i as usize == gallery.index());
                }
            }
        }
    }

    fn hide(&self) {
        dom::set_display(&self.overlay, "none");
        if let Some(body) = &self.body {
            let _ = body.style().set_property("overflow", "auto");
        }
        // Stops playback
        if let Some(video) = &self.video {
            video.set_src("");
        }
    }
}
