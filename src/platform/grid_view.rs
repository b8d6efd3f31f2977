//! Games grid: card elements and thumbnail aspect classification

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use super::dom;
use crate::showcase::{Aspect, CardView};

/// Id of the grid container
pub const GRID_ID: &str = "games-grid";
/// Class of a card; carries `data-game-id`
pub const CARD_CLASS: &str = "project-card";
pub const CARD_ID_ATTR: &str = "data-game-id";
/// Card frame holding the thumbnail
const CARD_IMAGE_SELECTOR: &str = ".project-card .card-image";

/// Replace the grid contents with `cards`, then classify thumbnails
pub fn render_grid(document: &Document, cards: &[CardView]) {
    let Some(grid) = document.get_element_by_id(GRID_ID) else {
        log::debug!("No #{} on this page", GRID_ID);
        return;
    };
    grid.set_inner_html("");

    for card in cards {
        match build_card(document, card) {
            Ok(el) => {
                let _ = grid.append_child(&el);
            }
            Err(e) => log::warn!("Could not build card {:?}: {:?}", card.game_id, e),
        }
    }

    classify_cards(document);
}

fn build_card(document: &Document, card: &CardView) -> Result<Element, JsValue> {
    let root = document.create_element("div")?;
    root.set_class_name(CARD_CLASS);
    root.set_attribute(CARD_ID_ATTR, &card.game_id)?;

    // Thumbnail with hover overlay
    let frame = document.create_element("div")?;
    frame.set_class_name("card-image");
    let img = document.create_element("img")?;
    img.set_attribute("src", &card.thumbnail)?;
    img.set_attribute("alt", &card.title)?;
    frame.append_child(&img)?;

    let overlay = document.create_element("div")?;
    overlay.set_class_name("overlay");
    let button = document.create_element("div")?;
    button.set_class_name("play-btn");
    let icon = document.create_element("i")?;
    icon.set_class_name("fas fa-expand");
    button.append_child(&icon)?;
    button.append_child(&document.create_text_node(" View"))?;
    overlay.append_child(&button)?;
    frame.append_child(&overlay)?;
    root.append_child(&frame)?;

    // Text
    let content = document.create_element("div")?;
    content.set_class_name("card-content");
    let tags = document.create_element("div")?;
    tags.set_class_name("tags");
    for tag in &card.tags {
        let span = document.create_element("span")?;
        span.set_class_name("tag");
        span.set_text_content(Some(tag));
        tags.append_child(&span)?;
    }
    content.append_child(&tags)?;

    let title = document.create_element("h3")?;
    title.set_text_content(Some(&card.title));
    content.append_child(&title)?;

    let excerpt = document.create_element("p")?;
    excerpt.set_text_content(Some(&card.excerpt));
    content.append_child(&excerpt)?;
    root.append_child(&content)?;

    Ok(root)
}

/// Give every card frame its blurred backdrop and a portrait/landscape class.
/// Thumbnails still loading are classified from their load event.
pub fn classify_cards(document: &Document) {
    for frame in dom::query_all(document, CARD_IMAGE_SELECTOR) {
        let Some(img) = frame
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        else {
            continue;
        };

        if let Some(html) = frame.dyn_ref::<HtmlElement>() {
            let src = img.get_attribute("src").unwrap_or_default();
            let _ = html
                .style()
                .set_property("--bg-image", &crate::showcase::grid::backdrop_property(&src));
        }

        if img.complete() {
            apply_aspect(&frame, &img);
        } else {
            let img_clone = img.clone();
            let closure = Closure::once(move || apply_aspect(&frame, &img_clone));
            let _ = img.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

fn apply_aspect(frame: &Element, img: &HtmlImageElement) {
    let aspect = Aspect::classify(img.natural_width(), img.natural_height());
    let classes = frame.class_list();
    for class in Aspect::CLASSES {
        let _ = classes.remove_1(class);
    }
    let _ = classes.add_1(aspect.class_name());
}
