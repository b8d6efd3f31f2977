//! Small DOM helpers shared by the views

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement};

/// Element by id, cast to `T`
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// First element matching `selector`, cast to `T`
pub fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document.query_selector(selector).ok()??.dyn_into::<T>().ok()
}

/// Every element matching `selector`
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// New element with an optional class list
pub fn create<T: JsCast>(document: &Document, tag: &str, class: &str) -> Option<T> {
    let el = document.create_element(tag).ok()?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.dyn_into::<T>().ok()
}

/// Set the inline `display` style
pub fn set_display(el: &HtmlElement, value: &str) {
    let _ = el.style().set_property("display", value);
}

/// Closest ancestor (or self) of an event target matching `selector`
pub fn closest(target: Option<EventTarget>, selector: &str) -> Option<Element> {
    target?.dyn_into::<Element>().ok()?.closest(selector).ok()?
}
