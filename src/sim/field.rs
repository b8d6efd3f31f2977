//! Particle field: the fixed pool plus proximity links
//!
//! Links are found by checking every unordered pair, O(N²) per frame. That is
//! fine for the ~100 particles the page uses; a much larger pool would want a
//! spatial grid.

use rand::Rng;

use super::particle::{Particle, Viewport};
use crate::settings::Settings;

/// A connection line between two nearby particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Index of the first particle (always < `b`)
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    /// Line opacity in [0, 1]
    pub alpha: f32,
}

/// Opacity of a link of length `distance`.
///
/// Fades linearly from `max_alpha` at zero length to 0 at `link_distance`
/// (at the defaults: `0.1 - d / 1000`). Clamped so float error at the
/// threshold never yields a negative alpha.
#[inline]
pub fn link_alpha(distance: f32, link_distance: f32, max_alpha: f32) -> f32 {
    if link_distance <= 0.0 {
        return 0.0;
    }
    (max_alpha * (1.0 - distance / link_distance)).clamp(0.0, 1.0)
}

/// Owns every particle. The pool size never changes after construction.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
}

impl ParticleField {
    /// Populate the pool at random positions inside `viewport`
    pub fn new<R: Rng + ?Sized>(settings: &Settings, viewport: Viewport, rng: &mut R) -> Self {
        let particles = (0..settings.particle_count)
            .map(|_| Particle::random(rng, viewport, settings.max_speed, settings.max_radius))
            .collect();
        Self { particles, viewport }
    }

    /// Build a field from explicit particles
    pub fn from_particles(particles: Vec<Particle>, viewport: Viewport) -> Self {
        Self { particles, viewport }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Change the reflection bounds. Positions are left as they are.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Advance every particle one frame. Returns the number of reflections.
    pub fn step(&mut self) -> usize {
        let viewport = self.viewport;
        self.particles
            .iter_mut()
            .map(|p| {
                let bounce = p.update(viewport);
                bounce.x as usize + bounce.y as usize
            })
            .sum()
    }

    /// Number of unordered pairs checked per frame: N(N-1)/2
    pub fn pair_count(&self) -> usize {
        let n = self.particles.len();
        n * n.saturating_sub(1) / 2
    }

    /// Every unordered pair of distinct particles, `a < b`
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.particles.len();
        (0..n).flat_map(move |a| (a + 1..n).map(move |b| (a, b)))
    }

    /// Pairs closer than `link_distance`, with their line opacity
    pub fn links(&self, link_distance: f32, max_alpha: f32) -> impl Iterator<Item = Link> + '_ {
        self.pairs().filter_map(move |(a, b)| {
            let distance = self.particles[a].pos.distance(self.particles[b].pos);
            (distance < link_distance).then(|| Link {
                a,
                b,
                distance,
                alpha: link_alpha(distance, link_distance, max_alpha),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn at(x: f32, y: f32) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius: 1.0,
            color: 0,
        }
    }

    #[test]
    fn test_pool_size_from_settings() {
        let mut rng = Pcg32::seed_from_u64(3);
        let settings = Settings::default();
        let field = ParticleField::new(&settings, Viewport::new(1280, 720), &mut rng);
        assert_eq!(field.len(), 100);
        assert_eq!(field.pair_count(), 4950);
        assert_eq!(field.pairs().count(), 4950);
    }

    #[test]
    fn test_pool_size_survives_resize_and_steps() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = ParticleField::new(&Settings::default(), Viewport::new(1280, 720), &mut rng);
        for i in 0..50 {
            if i == 10 {
                field.resize(Viewport::new(300, 200));
            }
            field.step();
        }
        assert_eq!(field.len(), 100);
        assert_eq!(field.viewport(), Viewport::new(300, 200));
    }

    #[test]
    fn test_resize_keeps_positions() {
        let mut field = ParticleField::from_particles(vec![at(500.0, 400.0)], Viewport::new(800, 600));
        field.resize(Viewport::new(100, 100));
        assert_eq!(field.particles()[0].pos, Vec2::new(500.0, 400.0));
    }

    #[test]
    fn test_small_pools() {
        let empty = ParticleField::from_particles(Vec::new(), Viewport::new(10, 10));
        assert_eq!(empty.pair_count(), 0);
        assert_eq!(empty.pairs().count(), 0);

        let single = ParticleField::from_particles(vec![at(1.0, 1.0)], Viewport::new(10, 10));
        assert_eq!(single.pair_count(), 0);
        assert_eq!(single.links(100.0, 0.1).count(), 0);
    }

    #[test]
    fn test_links_respect_threshold() {
        let field = ParticleField::from_particles(
            vec![at(0.0, 0.0), at(30.0, 40.0), at(100.0, 0.0), at(500.0, 500.0)],
            Viewport::new(1000, 1000),
        );
        let links: Vec<_> = field.links(100.0, 0.1).collect();
        // (0,1) = 50, (1,2) ≈ 80.6, (0,2) = 100 is not strictly below the threshold
        assert_eq!(links.len(), 2);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        assert!((links[0].distance - 50.0).abs() < 1e-4);
        assert!((links[0].alpha - 0.05).abs() < 1e-6);
        assert_eq!((links[1].a, links[1].b), (1, 2));
    }

    #[test]
    fn test_link_alpha() {
        assert!((link_alpha(0.0, 100.0, 0.1) - 0.1).abs() < 1e-7);
        assert!((link_alpha(25.0, 100.0, 0.1) - (0.1 - 25.0 / 1000.0)).abs() < 1e-7);
        assert_eq!(link_alpha(100.0, 100.0, 0.1), 0.0);
        assert_eq!(link_alpha(150.0, 100.0, 0.1), 0.0);
        assert_eq!(link_alpha(10.0, 0.0, 0.1), 0.0);
    }

    #[test]
    fn test_step_counts_reflections() {
        let mut edge = at(0.1, 0.1);
        edge.vel = Vec2::new(-0.2, -0.2);
        let mut field = ParticleField::from_particles(vec![edge, at(5.0, 5.0)], Viewport::new(10, 10));
        assert_eq!(field.step(), 2);
        assert_eq!(field.step(), 0);
    }

    #[test]
    fn test_same_seed_same_field() {
        let settings = Settings::default();
        let a = ParticleField::new(&settings, Viewport::new(640, 480), &mut Pcg32::seed_from_u64(9));
        let b = ParticleField::new(&settings, Viewport::new(640, 480), &mut Pcg32::seed_from_u64(9));
        assert_eq!(a.particles(), b.particles());
    }
}
