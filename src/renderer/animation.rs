//! Cancellable frame task driving the particle field
//!
//! The browser re-arms `frame` on every animation callback while it returns
//! `Some`; tests call it directly to single-step.

use super::{FrameStats, Surface, draw_frame};
use crate::settings::Settings;
use crate::sim::{ParticleField, Viewport};

/// Owns the field and the settings it is drawn with
#[derive(Debug, Clone)]
pub struct FieldAnimation {
    field: ParticleField,
    settings: Settings,
    frames: u64,
    running: bool,
}

impl FieldAnimation {
    pub fn new(field: ParticleField, settings: Settings) -> Self {
        Self {
            field,
            settings,
            frames: 0,
            running: true,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop after the current frame; later `frame` calls do nothing
    pub fn cancel(&mut self) {
        self.running = false;
    }

    /// New reflection bounds (the canvas itself is resized by the caller)
    pub fn resize(&mut self, viewport: Viewport) {
        self.field.resize(viewport);
    }

    /// Advance and draw one frame. `None` once cancelled.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<FrameStats> {
        if !self.running {
            return None;
        }
        self.field.step();
        let stats = draw_frame(&self.field, &self.settings, surface);
        self.frames += 1;
        Some(stats)
    }
}
