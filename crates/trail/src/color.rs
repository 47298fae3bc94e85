//! RGBA colors for the drawing surface

use std::fmt;

/// Straight (non-premultiplied) RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a different alpha, clamped to [0, 1]
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Parse `#rgb` or `#rrggbb`
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(hex.chars()) {
                    let v = c.to_digit(16)? as u8;
                    // #0ef expands to #00eeff
                    *slot = v * 17;
                }
                Some(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// CSS `rgba(r, g, b, a)` string for canvas style setters
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hex_expands() {
        assert_eq!(Rgba::from_hex("#0ef"), Some(Rgba::rgb(0, 238, 255)));
    }

    #[test]
    fn test_long_hex() {
        assert_eq!(Rgba::from_hex("#ff6600"), Some(Rgba::rgb(255, 102, 0)));
    }

    #[test]
    fn test_invalid_hex() {
        assert!(Rgba::from_hex("0ef").is_none());
        assert!(Rgba::from_hex("#0e").is_none());
        assert!(Rgba::from_hex("#zzzzzz").is_none());
        assert!(Rgba::from_hex("#ééé").is_none());
    }

    #[test]
    fn test_css_format() {
        let c = Rgba::rgb(0, 238, 255).with_alpha(0.5);
        assert_eq!(c.to_css(), "rgba(0, 238, 255, 0.5)");
        assert_eq!(Rgba::rgb(0, 238, 255).to_css(), "rgba(0, 238, 255, 1)");
    }

    #[test]
    fn test_alpha_clamped() {
        assert!((Rgba::rgb(1, 2, 3).with_alpha(-0.2).a - 0.0).abs() < f64::EPSILON);
        assert!((Rgba::rgb(1, 2, 3).with_alpha(3.0).a - 1.0).abs() < f64::EPSILON);
    }
}
