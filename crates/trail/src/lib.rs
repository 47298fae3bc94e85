//! Cursor trail core for portfolio-fx
//!
//! Holds everything about the page effects that does not need a browser:
//! the star particle trail, its drawing-surface abstraction, the touch-device
//! gate, scroll section tracking and the typed-text state machine. The wasm
//! front end binds these to a canvas and DOM events.

pub mod color;
pub mod config;
pub mod device;
pub mod geometry;
pub mod particle;
pub mod sections;
pub mod surface;
pub mod trail;
pub mod typewriter;

pub use color::Rgba;
pub use config::{ConfigError, DecayMode, TrailConfig};
pub use device::{DeviceProfile, TrailGate, Transition};
pub use sections::{active_section, SectionBounds};
pub use particle::Particle;
pub use surface::{DrawCmd, Recorder, Surface};
pub use trail::ParticleTrail;
pub use typewriter::{Tick, Typewriter, TypewriterOptions};
