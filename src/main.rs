//! Portfolio FX entry point
//!
//! The browser build starts from `wasm_main`. The native binary runs a
//! headless preview: it steps the particle field and, given a path, checks a
//! game data file.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    portfolio_fx::platform::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Portfolio FX (native) starting...");
    log::info!("The page runs in the browser - build for wasm32 and serve with `trunk serve`");

    let settings = portfolio_fx::Settings::load();
    preview_field(&settings);

    if let Some(path) = std::env::args().nth(1) {
        check_catalog(&path, &settings);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Step a field for a few seconds of frames and report what was drawn
#[cfg(not(target_arch = "wasm32"))]
fn preview_field(settings: &portfolio_fx::Settings) {
    use portfolio_fx::renderer::{CountingSurface, FieldAnimation};
    use portfolio_fx::sim::{ParticleField, Viewport};
    use rand::SeedableRng;

    const FRAMES: u64 = 300;

    let viewport = Viewport::new(1280, 720);
    let mut rng = rand_pcg::Pcg32::seed_from_u64(0x5eed);
    let field = ParticleField::new(settings, viewport, &mut rng);
    let mut animation = FieldAnimation::new(field, settings.clone());
    let mut surface = CountingSurface::default();

    let mut pairs = 0;
    while animation.frames() < FRAMES {
        if let Some(stats) = animation.frame(&mut surface) {
            pairs = stats.pairs_considered;
        }
    }
    animation.cancel();

    let out_of_bounds = animation
        .field()
        .particles()
        .iter()
        .filter(|p| !viewport.contains(p.pos))
        .count();
    println!(
        "{} frames: {} particles, {} pairs/frame, {:.1} links/frame, {} outside bounds",
        animation.frames(),
        animation.field().len(),
        pairs,
        surface.lines as f64 / FRAMES as f64,
        out_of_bounds
    );
    if let Some((lo, hi)) = surface.alpha_range {
        println!("link alpha range: {:.4}..{:.4}", lo, hi);
    }
}

/// Parse a game data file and print the cards it would produce
#[cfg(not(target_arch = "wasm32"))]
fn check_catalog(path: &str, settings: &portfolio_fx::Settings) {
    use portfolio_fx::showcase::{Catalog, Showcase};

    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Could not read {}: {}", path, e);
            return;
        }
    };
    match Catalog::from_json(&json) {
        Ok(catalog) => {
            let showcase = Showcase::new(catalog);
            for card in showcase.cards(settings) {
                println!("{} [{}] {}", card.title, card.tags.join(", "), card.thumbnail);
            }
        }
        Err(e) => log::error!("{}: {}", path, e),
    }
}
