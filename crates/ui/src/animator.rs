//! Cursor trail bound to the browser
//!
//! Owns the overlay canvas, the pointer/resize listeners and the frame loop.
//! Dropping the animator tears all three down.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_trail::{ParticleTrail, TrailConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent, Window};

use crate::dom::{self, EventListener};
use crate::frame_loop::FrameLoop;
use crate::overlay::Overlay;
use crate::surface::CanvasSurface;

pub struct TrailAnimator {
    trail: Rc<RefCell<ParticleTrail>>,
    /// Removes the canvas on drop, once the closures sharing it are gone
    _overlay: Rc<Overlay>,
    frame_loop: FrameLoop,
    _listeners: Vec<EventListener>,
}

impl TrailAnimator {
    /// Attach the overlay, start listening and start drawing.
    ///
    /// On any error the partly built pieces are dropped, which removes the
    /// canvas again.
    pub fn start(window: &Window, document: &Document, config: TrailConfig) -> Result<Self, JsValue> {
        let trail = ParticleTrail::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let trail = Rc::new(RefCell::new(trail));

        let overlay = Rc::new(Overlay::attach(window, document)?);
        let mut surface = CanvasSurface::new(overlay.context()?);

        let mut listeners = Vec::with_capacity(2);

        let trail_move = trail.clone();
        listeners.push(EventListener::new(document, "mousemove", move |e| {
            if let Some(e) = e.dyn_ref::<MouseEvent>() {
                trail_move
                    .borrow_mut()
                    .on_pointer_move(f64::from(e.client_x()), f64::from(e.client_y()));
            }
        })?);

        let overlay_resize = overlay.clone();
        let win_resize = window.clone();
        listeners.push(EventListener::new(window, "resize", move |_| {
            overlay_resize.fit_viewport(&win_resize);
        })?);

        let trail_frame = trail.clone();
        let overlay_frame = overlay.clone();
        let frame_loop = FrameLoop::start(window, move |elapsed| {
            let (width, height) = overlay_frame.size();
            trail_frame
                .borrow_mut()
                .frame(&mut surface, width, height, elapsed);
        })?;

        dom::log("[Trail] Cursor trail started");
        Ok(Self {
            trail,
            _overlay: overlay,
            frame_loop,
            _listeners: listeners,
        })
    }

    /// Live particle count
    pub fn particle_count(&self) -> usize {
        self.trail.borrow().len()
    }
}

impl Drop for TrailAnimator {
    fn drop(&mut self) {
        self.frame_loop.stop();
        dom::log("[Trail] Cursor trail stopped");
    }
}
