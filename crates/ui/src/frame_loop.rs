//! Self-rescheduling `requestAnimationFrame` loop with an explicit stop handle

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Assumed gap before the first frame has a previous timestamp to diff
const FIRST_FRAME_SECS: f64 = 1.0 / 60.0;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Handle to a running frame loop.
///
/// The loop runs until [`FrameLoop::stop`] is called or the handle is
/// dropped; the pending frame is cancelled and nothing reschedules after.
pub struct FrameLoop {
    window: Window,
    stopped: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    /// Start calling `on_frame(elapsed_secs)` once per display frame
    pub fn start<F>(window: &Window, mut on_frame: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) + 'static,
    {
        let stopped = Rc::new(Cell::new(false));
        let pending = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let last_ts: Cell<Option<f64>> = Cell::new(None);
        let win = window.clone();
        let stopped_inner = stopped.clone();
        let pending_inner = pending.clone();
        let callback_inner = callback.clone();

        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            pending_inner.set(None);
            if stopped_inner.get() {
                return;
            }

            // RAF timestamps are milliseconds
            let elapsed = last_ts
                .replace(Some(ts))
                .map_or(FIRST_FRAME_SECS, |prev| (ts - prev) / 1000.0);
            on_frame(elapsed);

            if stopped_inner.get() {
                return;
            }
            if let Some(cb) = callback_inner.borrow().as_ref() {
                match win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => pending_inner.set(Some(id)),
                    Err(e) => crate::dom::error(&format!("[FrameLoop] reschedule failed: {e:?}")),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let id = {
            let cb = callback.borrow();
            let cb = cb.as_ref().ok_or("frame callback missing")?;
            window.request_animation_frame(cb.as_ref().unchecked_ref())?
        };
        pending.set(Some(id));

        Ok(Self {
            window: window.clone(),
            stopped,
            pending,
            callback,
        })
    }

    /// Cancel the pending frame and release the callback. Idempotent.
    ///
    /// Must not be called from inside `on_frame`, which would drop the
    /// closure while it runs.
    pub fn stop(&self) {
        if self.stopped.replace(true) {
            return;
        }
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Breaks the closure -> callback cell -> closure cycle
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
