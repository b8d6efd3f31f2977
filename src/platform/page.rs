//! Smooth in-page scrolling and the glitch heading hover

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use super::dom;
use crate::page::{ANCHOR_SELECTOR, GLITCH_SELECTOR, anchor_target, glitch_animation};

/// Animate `#fragment` links to their target instead of jumping
pub fn setup_smooth_scroll(document: &Document) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let document = document.clone();
        let link = anchor.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            event.prevent_default();
            if let Some(target) = document.query_selector(selector).ok().flatten() {
                scroll_smoothly(&target);
            }
        });
        let _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn scroll_smoothly(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Run the glitch animation only while the heading is hovered
pub fn setup_glitch_hover(document: &Document, animation: &str) {
    let Some(heading) = dom::query::<HtmlElement>(document, GLITCH_SELECTOR) else {
        return;
    };

    for (event, hovered) in [("mouseover", true), ("mouseout", false)] {
        let el = heading.clone();
        let animation = animation.to_string();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let _ = el
                .style()
                .set_property("animation", glitch_animation(hovered, &animation));
        });
        let _ = heading.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
