//! Page configuration
//!
//! Read from an optional `window.PORTFOLIO_CONFIG` object set by the page
//! before the module loads:
//!
//! ```js
//! window.PORTFOLIO_CONFIG = {
//!   trail: { max_particles: 80, decay: "elapsed" },
//!   typed: { strings: ["Web Developer", "UX/UI Designer"] },
//! };
//! ```
//!
//! `?trail=0` (or `off`/`false`) in the URL disables the cursor trail.

use portfolio_trail::{TrailConfig, TypewriterOptions};
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::dom;

const CONFIG_GLOBAL: &str = "PORTFOLIO_CONFIG";

#[derive(Debug, Clone, Default)]
pub struct PageConfig {
    pub trail: TrailConfig,
    pub typed: TypewriterOptions,
    pub trail_disabled: bool,
}

impl PageConfig {
    /// Load from the page, falling back to defaults on anything malformed
    pub fn load(window: &Window) -> Self {
        let mut config = Self::default();

        if let Some(json) = section_json(window, "trail") {
            match TrailConfig::from_json(&json) {
                Ok(trail) => config.trail = trail,
                Err(e) => dom::warn(&format!("[Config] Ignoring trail config: {e}")),
            }
        }

        if let Some(json) = section_json(window, "typed") {
            match serde_json::from_str(&json) {
                Ok(typed) => config.typed = typed,
                Err(e) => dom::warn(&format!("[Config] Ignoring typed config: {e}")),
            }
        }

        let search = window.location().search().unwrap_or_default();
        config.trail_disabled = trail_disabled_by_query(&search);

        config
    }
}

/// `JSON.stringify(window.PORTFOLIO_CONFIG[key])`, if present
fn section_json(window: &Window, key: &str) -> Option<String> {
    let root = js_sys::Reflect::get(window, &CONFIG_GLOBAL.into()).ok()?;
    if root.is_undefined() || root.is_null() {
        return None;
    }
    let section = js_sys::Reflect::get(&root, &JsValue::from_str(key)).ok()?;
    if section.is_undefined() || section.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&section).ok().map(String::from)
}

/// Whether the query string turns the trail off
pub fn trail_disabled_by_query(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.strip_prefix("trail="))
        .any(|v| matches!(v, "0" | "off" | "false"))
}
