//! Drives the typed-text headline with `setTimeout`

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use portfolio_trail::{Typewriter, TypewriterOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

struct Inner {
    window: Window,
    target: HtmlElement,
    typewriter: RefCell<Typewriter>,
    timeout: Cell<Option<i32>>,
}

/// Running typed-text animation; stops when dropped
pub struct TypedText {
    inner: Rc<Inner>,
}

impl TypedText {
    pub fn start(window: &Window, target: HtmlElement, opts: TypewriterOptions) -> Self {
        target.set_text_content(Some(""));
        let inner = Rc::new(Inner {
            window: window.clone(),
            target,
            typewriter: RefCell::new(Typewriter::new(opts)),
            timeout: Cell::new(None),
        });
        tick(&Rc::downgrade(&inner));
        Self { inner }
    }
}

impl Drop for TypedText {
    fn drop(&mut self) {
        if let Some(id) = self.inner.timeout.take() {
            self.inner.window.clear_timeout_with_handle(id);
        }
    }
}

fn tick(weak: &Weak<Inner>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    inner.timeout.set(None);

    let Some(step) = inner.typewriter.borrow_mut().step() else {
        return;
    };
    inner.target.set_text_content(Some(&step.text));

    let next = weak.clone();
    let callback = Closure::once_into_js(move || tick(&next));
    match inner
        .window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            i32::try_from(step.delay_ms).unwrap_or(i32::MAX),
        ) {
        Ok(id) => inner.timeout.set(Some(id)),
        Err(e) => crate::dom::warn(&format!("[Typed] setTimeout failed: {e:?}")),
    }
}
