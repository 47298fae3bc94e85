/// Smallest fraction of the base size a fading particle shrinks to
pub const MIN_SCALE: f64 = 0.3;

/// A single fading star in the trail
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Remaining life, 1.0 at spawn; the particle is dropped once it reaches 0
    pub life: f64,
    pub base_size: f64,
}

impl Particle {
    pub const fn new(x: f64, y: f64, base_size: f64) -> Self {
        Self {
            x,
            y,
            life: 1.0,
            base_size,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    pub fn opacity(&self) -> f64 {
        self.life.max(0.0)
    }

    /// Outer radius to draw at: base size at full life, 30% of it at zero
    pub fn render_size(&self) -> f64 {
        self.base_size * (MIN_SCALE + (1.0 - MIN_SCALE) * self.opacity())
    }
}
