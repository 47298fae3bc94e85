//! Full-viewport canvas layered over the page
//!
//! Fixed at the top-left, above everything (z-index 10000) and transparent
//! to input so clicks reach the page underneath. The canvas leaves the DOM
//! when the `Overlay` is dropped.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

const OVERLAY_STYLE: [(&str, &str); 5] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("z-index", "10000"),
    ("pointer-events", "none"),
];

pub struct Overlay {
    canvas: HtmlCanvasElement,
}

impl Overlay {
    /// Create the canvas, size it to the viewport and append it to `<body>`
    pub fn attach(window: &Window, document: &Document) -> Result<Self, JsValue> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;

        let style = canvas.style();
        for (prop, value) in OVERLAY_STYLE {
            style.set_property(prop, value)?;
        }

        let body = document.body().ok_or("document has no body")?;
        body.append_child(&canvas)?;

        let overlay = Self { canvas };
        overlay.fit_viewport(window);
        Ok(overlay)
    }

    pub fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        self.canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(Into::into)
    }

    /// Match the canvas to `innerWidth` x `innerHeight`
    pub fn fit_viewport(&self, window: &Window) {
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    pub fn size(&self) -> (f64, f64) {
        (f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    pub fn detach(&self) {
        self.canvas.remove();
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas_count(document: &Document) -> u32 {
        document
            .query_selector_all("canvas")
            .map(|list| list.length())
            .unwrap_or(0)
    }

    fn attach_then_fail(window: &Window, document: &Document) -> Result<(), JsValue> {
        let overlay = Overlay::attach(window, document)?;
        overlay.context()?;
        Err(JsValue::from_str("listener setup failed"))
    }

    #[wasm_bindgen_test]
    fn test_drop_removes_canvas() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let before = canvas_count(&document);

        let overlay = Overlay::attach(&window, &document).unwrap();
        assert_eq!(canvas_count(&document), before + 1);
        drop(overlay);
        assert_eq!(canvas_count(&document), before);
    }

    #[wasm_bindgen_test]
    fn test_failed_setup_leaves_no_canvas() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let before = canvas_count(&document);

        for _ in 0..3 {
            assert!(attach_then_fail(&window, &document).is_err());
        }
        assert_eq!(canvas_count(&document), before);
    }
}
