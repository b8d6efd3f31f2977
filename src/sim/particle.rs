//! Particle and viewport types

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Drawing area in pixels. Updated on window resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size as a float vector
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Inclusive bounds check
    pub fn contains(&self, pos: Vec2) -> bool {
        let size = self.size();
        (0.0..=size.x).contains(&pos.x) && (0.0..=size.y).contains(&pos.y)
    }
}

/// Which axes reflected during one update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
}

impl Bounce {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// A single drifting point of the background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    pub radius: f32,
    /// Palette slot (0 or 1)
    pub color: u8,
}

impl Particle {
    /// Spawn at a uniform position inside `viewport` with a uniform velocity
    /// in [-max_speed, max_speed) per axis.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, max_speed: f32, max_radius: f32) -> Self {
        let size = viewport.size();
        let pos = Vec2::new(rng.random::<f32>() * size.x, rng.random::<f32>() * size.y);
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * 2.0 * max_speed,
            (rng.random::<f32>() - 0.5) * 2.0 * max_speed,
        );
        Self {
            pos,
            vel,
            radius: rng.random::<f32>() * max_radius,
            color: if rng.random_bool(0.5) { 0 } else { 1 },
        }
    }

    /// Advance one frame, then reflect off any edge the particle has crossed
    pub fn update(&mut self, viewport: Viewport) -> Bounce {
        self.pos += self.vel;
        let size = viewport.size();
        Bounce {
            x: reflect_axis(self.pos.x, &mut self.vel.x, size.x),
            y: reflect_axis(self.pos.y, &mut self.vel.y, size.y),
        }
    }
}

/// Flip `vel` when `pos` is past an edge and still heading away from it.
///
/// A particle left outside by a viewport shrink that is already heading back
/// keeps its direction instead of flipping every frame.
#[inline]
fn reflect_axis(pos: f32, vel: &mut f32, max: f32) -> bool {
    let escaping = (pos < 0.0 && *vel < 0.0) || (pos > max && *vel > 0.0);
    if escaping {
        *vel = -*vel;
    }
    escaping
}
