//! requestAnimationFrame loop for the particle field
//!
//! Re-arms itself after every frame until the animation is cancelled.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::canvas::CanvasSurface;
use crate::renderer::FieldAnimation;

/// Begin drawing on the next display refresh
pub fn start(animation: Rc<RefCell<FieldAnimation>>, surface: Rc<RefCell<CanvasSurface>>) {
    request_animation_frame(animation, surface);
}

fn request_animation_frame(animation: Rc<RefCell<FieldAnimation>>, surface: Rc<RefCell<CanvasSurface>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        frame_loop(animation, surface);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn frame_loop(animation: Rc<RefCell<FieldAnimation>>, surface: Rc<RefCell<CanvasSurface>>) {
    let drawn = {
        let mut anim = animation.borrow_mut();
        let mut surface = surface.borrow_mut();
        anim.frame(&mut *surface).is_some()
    };

    if drawn {
        request_animation_frame(animation, surface);
    } else {
        log::info!("Particle animation stopped");
    }
}
