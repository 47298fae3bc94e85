//! Touch-device detection and trail activation
//!
//! The trail only runs on pointer-driven, reasonably wide viewports. The
//! gate is re-evaluated on every resize, so rotating a tablet or narrowing a
//! desktop window switches the trail off and back on.

/// Host capabilities sampled from the browser
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeviceProfile {
    /// `ontouchstart` exists on `window`
    pub has_touch_events: bool,
    /// `navigator.maxTouchPoints`
    pub max_touch_points: u32,
    /// `navigator.msMaxTouchPoints` (legacy Edge/IE)
    pub ms_max_touch_points: u32,
    /// `window.innerWidth` in CSS pixels
    pub viewport_width: f64,
}

impl DeviceProfile {
    pub fn is_touch_primary(&self, breakpoint: f64) -> bool {
        self.has_touch_events
            || self.max_touch_points > 0
            || self.ms_max_touch_points > 0
            || self.viewport_width <= breakpoint
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Create a fresh animator
    Activate,
    /// Tear the running animator down
    Deactivate,
    Stay,
}

/// Decides when the animator should be created or torn down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailGate {
    breakpoint: f64,
}

impl TrailGate {
    pub const fn new(breakpoint: f64) -> Self {
        Self { breakpoint }
    }

    pub fn allows(&self, profile: &DeviceProfile) -> bool {
        !profile.is_touch_primary(self.breakpoint)
    }

    pub fn transition(&self, active: bool, profile: &DeviceProfile) -> Transition {
        match (active, self.allows(profile)) {
            (false, true) => Transition::Activate,
            (true, false) => Transition::Deactivate,
            _ => Transition::Stay,
        }
    }
}
