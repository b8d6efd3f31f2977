//! Particle field simulation
//!
//! Pure and platform-free so frames can be stepped from tests:
//! - Seeded RNG only (caller supplies it)
//! - Fixed-size pool, stable iteration order
//! - No rendering or DOM dependencies

pub mod field;
pub mod particle;

pub use field::{Link, ParticleField, link_alpha};
pub use particle::{Bounce, Particle, Viewport};
