//! Star particle trail following the pointer
//!
//! Pointer moves spawn particles once the pointer has travelled far enough
//! from the last spawn point; each frame ages the particles, drops the dead
//! ones and redraws everything plus the cursor marker.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::color::Rgba;
use crate::config::{ConfigError, DecayMode, TrailConfig};
use crate::geometry::{distance, star_vertices};
use crate::particle::Particle;
use crate::surface::Surface;

/// Life below this counts as spent (absorbs rounding in the per-frame step)
const LIFE_EPSILON: f64 = 1e-9;

/// Longest gap a single frame may age particles by in [`DecayMode::Elapsed`]
pub const MAX_ELAPSED_STEP: f64 = 0.25;

const STAR_STROKE_ALPHA: f64 = 0.7;
const STAR_LINE_WIDTH: f64 = 0.8;
const STAR_GLOW: f64 = 8.0;
const MARKER_RING_GAP: f64 = 3.0;
const MARKER_RING_ALPHA: f64 = 0.7;
const MARKER_GLOW: f64 = 12.0;

pub struct ParticleTrail {
    particles: VecDeque<Particle>,
    pointer: (f64, f64),
    last_emit: (f64, f64),
    color: Rgba,
    config: TrailConfig,
    rng: SmallRng,
}

impl ParticleTrail {
    pub fn new(config: TrailConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Deterministic particle sizes, for tests and reproducible demos
    pub fn with_seed(config: TrailConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: TrailConfig, rng: SmallRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let color = config.rgba()?;
        debug!(
            max_particles = config.max_particles,
            lifetime_secs = config.lifetime_secs,
            decay = ?config.decay,
            "particle trail created"
        );
        Ok(Self {
            particles: VecDeque::new(),
            pointer: (0.0, 0.0),
            last_emit: (0.0, 0.0),
            color,
            config,
            rng,
        })
    }

    pub const fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Live particles, oldest first
    pub const fn particles(&self) -> &VecDeque<Particle> {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Current pointer position (where the marker is drawn)
    pub const fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    /// Record a pointer move. Returns `true` if a particle was spawned.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.pointer = (x, y);

        if distance(self.pointer, self.last_emit) <= self.config.emit_threshold {
            return false;
        }

        let (min, max) = (self.config.min_size, self.config.max_size);
        let size = if min < max {
            self.rng.gen_range(min..max)
        } else {
            min
        };
        self.particles.push_back(Particle::new(x, y, size));
        if self.particles.len() > self.config.max_particles {
            self.particles.pop_front();
            trace!("trail full, evicted oldest particle");
        }
        self.last_emit = (x, y);
        true
    }

    /// Age every particle by one frame and drop the spent ones.
    ///
    /// `elapsed_secs` is the time since the previous frame; it only matters
    /// in [`DecayMode::Elapsed`].
    pub fn advance(&mut self, elapsed_secs: f64) {
        let step = match self.config.decay {
            DecayMode::Frames => self.config.frame_decay(),
            DecayMode::Elapsed => {
                elapsed_secs.clamp(0.0, MAX_ELAPSED_STEP) / self.config.lifetime_secs
            }
        };

        for p in &mut self.particles {
            p.life -= step;
            if p.life < LIFE_EPSILON {
                p.life = 0.0;
            }
        }
        self.particles.retain(Particle::is_alive);
    }

    /// Clear the surface and draw the particles and the cursor marker
    pub fn render<S: Surface>(&self, surface: &mut S, width: f64, height: f64) {
        surface.clear(width, height);

        // Newest first; older stars end up on top
        for p in self.particles.iter().rev() {
            self.draw_star(surface, p);
        }

        self.draw_marker(surface);
    }

    /// One display frame: age, prune, redraw
    pub fn frame<S: Surface>(&mut self, surface: &mut S, width: f64, height: f64, elapsed_secs: f64) {
        self.advance(elapsed_secs);
        self.render(surface, width, height);
    }

    fn draw_star<S: Surface>(&self, surface: &mut S, p: &Particle) {
        let opacity = p.opacity();
        let outer = p.render_size();
        let inner = outer / self.config.inner_ratio;

        surface.save();
        surface.set_fill(self.color.with_alpha(opacity));
        surface.set_stroke(self.color.with_alpha(opacity * STAR_STROKE_ALPHA));
        surface.set_line_width(STAR_LINE_WIDTH);
        surface.set_glow(self.color, STAR_GLOW * opacity);

        surface.begin_path();
        let vertices = star_vertices(p.x, p.y, outer, inner, self.config.spikes);
        if let Some((&(x0, y0), rest)) = vertices.split_first() {
            surface.move_to(x0, y0);
            for &(x, y) in rest {
                surface.line_to(x, y);
            }
        }
        surface.close_path();
        surface.fill();
        surface.stroke();
        surface.restore();
    }

    fn draw_marker<S: Surface>(&self, surface: &mut S) {
        let (x, y) = self.pointer;
        let radius = self.config.marker_radius;

        surface.save();
        surface.set_glow(self.color, MARKER_GLOW);

        surface.set_stroke(self.color.with_alpha(MARKER_RING_ALPHA));
        surface.set_line_width(1.0);
        surface.begin_path();
        surface.arc(x, y, radius + MARKER_RING_GAP);
        surface.stroke();

        surface.set_fill(self.color);
        surface.begin_path();
        surface.arc(x, y, radius);
        surface.fill();

        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCmd, Recorder};

    fn trail() -> ParticleTrail {
        ParticleTrail::with_seed(TrailConfig::default(), 7).unwrap()
    }

    #[test]
    fn test_short_moves_do_not_emit() {
        let mut t = trail();
        assert!(!t.on_pointer_move(1.0, 1.0));
        assert!(!t.on_pointer_move(0.5, 0.0));
        assert!(t.is_empty());
        assert_eq!(t.pointer(), (0.5, 0.0));
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut t = trail();
        assert!(!t.on_pointer_move(1.5, 0.0));
        assert!(t.on_pointer_move(3.1, 0.0));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_distance_measured_from_last_emission() {
        let mut t = trail();
        assert!(t.on_pointer_move(10.0, 0.0));
        // Small steps accumulate until they clear the threshold
        assert!(!t.on_pointer_move(11.0, 0.0));
        assert!(t.on_pointer_move(12.0, 0.0));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_new_particle_state() {
        let mut t = trail();
        t.on_pointer_move(40.0, 30.0);
        let p = t.particles()[0];
        assert_eq!((p.x, p.y), (40.0, 30.0));
        assert!((p.life - 1.0).abs() < f64::EPSILON);
        assert!((1.5..4.0).contains(&p.base_size));
    }

    #[test]
    fn test_particle_expires_by_frame_36() {
        let mut t = trail();
        t.on_pointer_move(5.0, 5.0);
        for frame in 1..=35 {
            t.advance(1.0 / 60.0);
            assert_eq!(t.len(), 1, "particle gone early at frame {frame}");
        }
        t.advance(1.0 / 60.0);
        assert!(t.is_empty());
    }

    #[test]
    fn test_elapsed_decay_uses_wall_clock() {
        let config = TrailConfig {
            decay: DecayMode::Elapsed,
            ..TrailConfig::default()
        };
        let mut t = ParticleTrail::with_seed(config, 1).unwrap();
        t.on_pointer_move(5.0, 5.0);
        t.advance(0.15);
        t.advance(0.15);
        assert!((t.particles()[0].life - 0.5).abs() < 1e-9);
        // 0.25 / 0.6 per step: 0.5 -> ~0.083 -> gone
        t.advance(0.25);
        assert_eq!(t.len(), 1);
        t.advance(0.25);
        assert!(t.is_empty());
    }

    #[test]
    fn test_large_capacity_does_not_preallocate() {
        let config = TrailConfig {
            max_particles: crate::config::MAX_PARTICLES_LIMIT,
            ..TrailConfig::default()
        };
        let mut t = ParticleTrail::with_seed(config, 3).unwrap();
        assert!(t.particles().capacity() < crate::config::MAX_PARTICLES_LIMIT);
        assert!(t.on_pointer_move(10.0, 10.0));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_oversized_capacity_rejected() {
        let config = TrailConfig {
            max_particles: usize::MAX,
            ..TrailConfig::default()
        };
        assert!(matches!(
            ParticleTrail::new(config),
            Err(ConfigError::CapacityTooLarge(usize::MAX))
        ));
    }

    #[test]
    fn test_elapsed_decay_clamps_long_gaps() {
        let config = TrailConfig {
            decay: DecayMode::Elapsed,
            ..TrailConfig::default()
        };
        let mut t = ParticleTrail::with_seed(config, 1).unwrap();
        t.on_pointer_move(5.0, 5.0);
        t.advance(30.0);
        assert_eq!(t.len(), 1);
        t.advance(-1.0);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_render_draws_stars_then_marker() {
        let mut t = trail();
        t.on_pointer_move(10.0, 10.0);
        t.on_pointer_move(20.0, 10.0);

        let mut surface = Recorder::new();
        t.render(&mut surface, 800.0, 600.0);

        assert_eq!(surface.cmds[0], DrawCmd::Clear(800.0, 600.0));
        assert_eq!(surface.closed_paths(), 2);

        // Marker: ring at radius 9 then disc at radius 6, both at the pointer
        let arcs: Vec<_> = surface
            .cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Arc(x, y, r) => Some((*x, *y, *r)),
                _ => None,
            })
            .collect();
        assert_eq!(arcs, vec![(20.0, 10.0, 9.0), (20.0, 10.0, 6.0)]);

        let last_close = surface
            .cmds
            .iter()
            .rposition(|c| matches!(c, DrawCmd::ClosePath))
            .unwrap();
        let first_arc = surface
            .cmds
            .iter()
            .position(|c| matches!(c, DrawCmd::Arc(..)))
            .unwrap();
        assert!(last_close < first_arc);
    }

    #[test]
    fn test_star_styles_follow_opacity() {
        let mut t = trail();
        t.on_pointer_move(10.0, 10.0);
        for _ in 0..18 {
            t.advance(0.0);
        }
        let opacity = t.particles()[0].opacity();

        let mut surface = Recorder::new();
        t.render(&mut surface, 100.0, 100.0);

        let cyan = Rgba::rgb(0, 238, 255);
        assert!(surface
            .cmds
            .contains(&DrawCmd::FillStyle(cyan.with_alpha(opacity))));
        assert!(surface
            .cmds
            .contains(&DrawCmd::StrokeStyle(cyan.with_alpha(opacity * 0.7))));
        assert!(surface
            .cmds
            .contains(&DrawCmd::Glow(cyan, 8.0 * opacity)));
        assert!(surface.cmds.contains(&DrawCmd::Glow(cyan, 12.0)));
    }

    #[test]
    fn test_star_outline_starts_at_top() {
        let mut t = trail();
        t.on_pointer_move(50.0, 50.0);
        let size = t.particles()[0].base_size;

        let mut surface = Recorder::new();
        t.render(&mut surface, 100.0, 100.0);

        let first_move = surface
            .cmds
            .iter()
            .find_map(|c| match c {
                DrawCmd::MoveTo(x, y) => Some((*x, *y)),
                _ => None,
            })
            .unwrap();
        assert!((first_move.0 - 50.0).abs() < 1e-9);
        assert!((first_move.1 - (50.0 - size)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_trail_still_draws_marker() {
        let t = trail();
        let mut surface = Recorder::new();
        t.render(&mut surface, 10.0, 10.0);
        assert_eq!(surface.closed_paths(), 0);
        assert!(surface.cmds.contains(&DrawCmd::Arc(0.0, 0.0, 6.0)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = TrailConfig {
            max_particles: 0,
            ..TrailConfig::default()
        };
        assert!(matches!(
            ParticleTrail::new(config),
            Err(ConfigError::ZeroCapacity)
        ));
    }
}
