//! Frame composition for the particle background
//!
//! Drawing goes through the `Surface` trait so the same frame code runs on a
//! 2D canvas in the browser and on recording surfaces in tests.

pub mod animation;

pub use animation::FieldAnimation;

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{ParticleField, Viewport};

/// RGB color with a float alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub fn new([r, g, b]: [u8; 3], a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba()` notation
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Anything the particle field can be drawn onto
pub trait Surface {
    /// Erase the whole drawing area
    fn clear(&mut self, viewport: Viewport);
    /// Filled circle in a CSS color
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    /// Straight line segment
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// What one frame drew
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub particles_drawn: usize,
    pub pairs_considered: usize,
    pub links_drawn: usize,
}

/// Clear the surface, draw every particle, then every proximity link
pub fn draw_frame<S: Surface + ?Sized>(field: &ParticleField, settings: &Settings, surface: &mut S) -> FrameStats {
    surface.clear(field.viewport());

    for p in field.particles() {
        let color = &settings.palette[usize::from(p.color.min(1))];
        surface.fill_circle(p.pos, p.radius, color);
    }

    let particles = field.particles();
    let mut links_drawn = 0;
    for link in field.links(settings.link_distance, settings.link_max_alpha) {
        surface.stroke_line(
            particles[link.a].pos,
            particles[link.b].pos,
            settings.link_width,
            Rgba::new(settings.link_color, link.alpha),
        );
        links_drawn += 1;
    }

    FrameStats {
        particles_drawn: particles.len(),
        pairs_considered: field.pair_count(),
        links_drawn,
    }
}

/// Surface that only tallies draw calls (headless runs and tests)
#[derive(Debug, Clone, Default)]
pub struct CountingSurface {
    pub clears: usize,
    pub circles: usize,
    pub lines: usize,
    /// Faintest and strongest line opacity seen
    pub alpha_range: Option<(f32, f32)>,
}

impl Surface for CountingSurface {
    fn clear(&mut self, _viewport: Viewport) {
        self.clears += 1;
    }

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: &str) {
        self.circles += 1;
    }

    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _width: f32, color: Rgba) {
        self.lines += 1;
        self.alpha_range = Some(match self.alpha_range {
            Some((lo, hi)) => (lo.min(color.a), hi.max(color.a)),
            None => (color.a, color.a),
        });
    }
}
