//! One-shot catalog download

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::showcase::{Catalog, CatalogError};

/// Why the catalog could not be loaded
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("no browser window")]
    Unavailable,
    #[error("request failed: {0}")]
    Network(String),
    #[error("server answered HTTP {0}")]
    Status(u16),
    #[error("could not read response body: {0}")]
    Body(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Fetch and parse the game data file. No retry.
pub async fn fetch_catalog(url: &str) -> Result<Catalog, LoadError> {
    let window = web_sys::window().ok_or(LoadError::Unavailable)?;

    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| LoadError::Network(js_message(&e)))?
        .dyn_into()
        .map_err(|e| LoadError::Network(js_message(&e)))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let text = response.text().map_err(|e| LoadError::Body(js_message(&e)))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| LoadError::Body(js_message(&e)))?
        .as_string()
        .ok_or_else(|| LoadError::Body("body is not text".to_string()))?;

    Ok(Catalog::from_json(&text)?)
}
