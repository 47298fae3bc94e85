//! Trail configuration
//!
//! Every field has a default matching the shipped look, so an empty JSON
//! object (or no config at all) gives the stock trail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Rgba;

/// Largest accepted `max_particles`; a trail this long is already unreadable
pub const MAX_PARTICLES_LIMIT: usize = 10_000;

/// How particle life decays between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecayMode {
    /// Fixed step per frame, assuming `nominal_fps`
    #[default]
    Frames,
    /// Step proportional to measured time since the previous frame
    Elapsed,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(String),
    #[error("`{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("`max_particles` must be at least 1")]
    ZeroCapacity,
    #[error("`max_particles` must be at most {MAX_PARTICLES_LIMIT}, got {0}")]
    CapacityTooLarge(usize),
    #[error("`spikes` must be at least 1")]
    ZeroSpikes,
    #[error("size range is empty: min {min} > max {max}")]
    SizeRange { min: f64, max: f64 },
    #[error("`inner_ratio` must be greater than 1, got {0}")]
    InnerRatio(f64),
    #[error("unrecognized color {0:?}, expected #rgb or #rrggbb")]
    Color(String),
}

/// Cursor trail settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Pointer travel that must be exceeded before another particle spawns
    pub emit_threshold: f64,
    pub max_particles: usize,
    pub lifetime_secs: f64,
    /// Frame rate the per-frame decay step is computed for
    pub nominal_fps: f64,
    pub min_size: f64,
    pub max_size: f64,
    pub marker_radius: f64,
    pub color: String,
    pub spikes: u32,
    pub inner_ratio: f64,
    pub decay: DecayMode,
    /// Viewport widths at or below this count as touch-primary
    pub touch_breakpoint: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            emit_threshold: 1.5,
            max_particles: 100,
            lifetime_secs: 0.6,
            nominal_fps: 60.0,
            min_size: 1.5,
            max_size: 4.0,
            marker_radius: 6.0,
            color: "#0ef".to_string(),
            spikes: 5,
            inner_ratio: 2.5,
            decay: DecayMode::Frames,
            touch_breakpoint: 768.0,
        }
    }
}

impl TrailConfig {
    /// Parse and validate a JSON object; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("emit_threshold", self.emit_threshold),
            ("lifetime_secs", self.lifetime_secs),
            ("nominal_fps", self.nominal_fps),
            ("min_size", self.min_size),
            ("marker_radius", self.marker_radius),
            ("touch_breakpoint", self.touch_breakpoint),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.max_particles == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.max_particles > MAX_PARTICLES_LIMIT {
            return Err(ConfigError::CapacityTooLarge(self.max_particles));
        }
        if self.spikes == 0 {
            return Err(ConfigError::ZeroSpikes);
        }
        if self.min_size > self.max_size {
            return Err(ConfigError::SizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        if self.inner_ratio.is_nan() || self.inner_ratio <= 1.0 {
            return Err(ConfigError::InnerRatio(self.inner_ratio));
        }
        self.rgba()?;
        Ok(())
    }

    /// Parsed trail color at full opacity
    pub fn rgba(&self) -> Result<Rgba, ConfigError> {
        Rgba::from_hex(&self.color).ok_or_else(|| ConfigError::Color(self.color.clone()))
    }

    /// Life lost per frame in [`DecayMode::Frames`]
    pub fn frame_decay(&self) -> f64 {
        1.0 / (self.nominal_fps * self.lifetime_secs)
    }
}
