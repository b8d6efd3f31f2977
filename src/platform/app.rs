//! Page bootstrap and event wiring

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, MouseEvent, Window};

use super::canvas::{CANVAS_ID, CanvasSurface, window_viewport};
use super::modal_view::{self, ModalView};
use super::{dom, fetch, frame, grid_view, page};
use crate::renderer::FieldAnimation;
use crate::settings::Settings;
use crate::showcase::{Showcase, ShowcaseEvent};
use crate::sim::ParticleField;

/// Showcase state plus the views it drives
struct App {
    document: Document,
    settings: Settings,
    showcase: Showcase,
    modal_view: Option<ModalView>,
}

impl App {
    fn new(document: Document, settings: Settings) -> Self {
        let view = ModalView::find(&document);
        if view.is_none() {
            log::debug!("No #{} on this page", modal_view::MODAL_ID);
        }
        Self {
            document,
            settings,
            showcase: Showcase::default(),
            modal_view: view,
        }
    }

    /// Single entry point for every showcase event
    fn dispatch(&mut self, event: ShowcaseEvent<'_>) {
        let change = self.showcase.dispatch(event);
        if let Some(view) = &self.modal_view {
            view.apply(&self.document, change, self.showcase.modal());
        }
    }

    fn render_grid(&self) {
        let cards = self.showcase.cards(&self.settings);
        grid_view::render_grid(&self.document, &cards);
    }
}

pub async fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    log::info!("Portfolio FX starting...");

    let Some(window) = web_sys::window() else {
        log::error!("No window, nothing to do");
        return;
    };
    let Some(document) = window.document() else {
        log::error!("No document, nothing to do");
        return;
    };

    let settings = Settings::load();

    start_background(&window, &document, &settings);
    page::setup_smooth_scroll(&document);
    page::setup_glitch_hover(&document, &settings.glitch_animation);

    let data_url = settings.data_url.clone();
    let app = Rc::new(RefCell::new(App::new(document.clone(), settings)));
    setup_showcase_handlers(&window, &document, app.clone());

    // Grid stays empty on failure; the rest of the page keeps working
    match fetch::fetch_catalog(&data_url).await {
        Ok(catalog) => {
            log::info!("Loaded {} games from {}", catalog.len(), data_url);
            let mut app = app.borrow_mut();
            app.showcase.set_catalog(catalog);
            app.render_grid();
        }
        Err(e) => log::error!("Error loading games from {}: {}", data_url, e),
    }
}

fn start_background(window: &Window, document: &Document, settings: &Settings) {
    let Some(canvas) = dom::by_id(document, CANVAS_ID) else {
        log::warn!("No #{} canvas, particle background disabled", CANVAS_ID);
        return;
    };
    let Some(surface) = CanvasSurface::new(canvas) else {
        log::warn!("2D context unavailable, particle background disabled");
        return;
    };

    let viewport = window_viewport(window);
    surface.resize(viewport);

    let seed = js_sys::Date::now() as u64;
    let mut rng = Pcg32::seed_from_u64(seed);
    let field = ParticleField::new(settings, viewport, &mut rng);
    log::info!("Particle field: {} particles, {}x{}", field.len(), viewport.width, viewport.height);

    let animation = Rc::new(RefCell::new(FieldAnimation::new(field, settings.clone())));
    let surface = Rc::new(RefCell::new(surface));

    // Resize
    {
        let animation = animation.clone();
        let surface = surface.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let viewport = window_viewport(&window);
            surface.borrow().resize(viewport);
            animation.borrow_mut().resize(viewport);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    frame::start(animation, surface);
}

fn setup_showcase_handlers(window: &Window, document: &Document, app: Rc<RefCell<App>>) {
    // Grid cards (delegated, cards are rebuilt on load)
    if let Some(grid) = document.get_element_by_id(grid_view::GRID_ID) {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let selector = format!(".{}", grid_view::CARD_CLASS);
            let Some(card) = dom::closest(event.target(), &selector) else {
                return;
            };
            if let Some(id) = card.get_attribute(grid_view::CARD_ID_ATTR) {
                app.borrow_mut().dispatch(ShowcaseEvent::OpenGame(&id));
            }
        });
        let _ = grid.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Gallery thumbnails (delegated, rebuilt on every open)
    if let Some(strip) = document.get_element_by_id(modal_view::GALLERY_ID) {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let selector = format!(".{}", modal_view::THUMB_CLASS);
            let index = dom::closest(event.target(), &selector)
                .and_then(|thumb| thumb.get_attribute(modal_view::THUMB_INDEX_ATTR))
                .and_then(|attr| attr.parse::<usize>().ok());
            if let Some(index) = index {
                app.borrow_mut().dispatch(ShowcaseEvent::SelectMedia(index));
            }
        });
        let _ = strip.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Prev / next / close buttons
    let buttons = [
        (document.get_element_by_id(modal_view::PREV_ID), ShowcaseEvent::PrevMedia),
        (document.get_element_by_id(modal_view::NEXT_ID), ShowcaseEvent::NextMedia),
        (dom::query(document, modal_view::CLOSE_SELECTOR), ShowcaseEvent::Close),
    ];
    for (button, event) in buttons {
        let Some(button) = button else {
            continue;
        };
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            app.borrow_mut().dispatch(event);
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Click on the overlay outside the content
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let mut app = app.borrow_mut();
            let backdrop = app
                .modal_view
                .as_ref()
                .is_some_and(|view| view.is_backdrop(event.target()));
            if backdrop {
                app.dispatch(ShowcaseEvent::Backdrop);
            }
        });
        let _ = window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
