//! Fade sections in the first time they scroll into view

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::{add_class, query_all};

const REVEAL_TARGETS: &str =
    "section.about, section.skills, section.portfolio, section.contact, footer.footer";
const PENDING_CLASS: &str = "scroll-animate";
const REVEALED_CLASS: &str = "animate-in";
const THRESHOLD: f64 = 0.15;
const ROOT_MARGIN: &str = "0px 0px -80px 0px";

pub struct ScrollReveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ScrollReveal {
    pub fn attach(document: &Document) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        add_class(&target, REVEALED_CLASS);
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(THRESHOLD));
        init.set_root_margin(ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let targets = query_all(document, REVEAL_TARGETS)?;
        for el in &targets {
            add_class(el, PENDING_CLASS);
            observer.observe(el);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
