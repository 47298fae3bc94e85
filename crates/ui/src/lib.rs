mod animator;
mod config;
mod device;
mod dom;
mod frame_loop;
mod logging;
mod menu;
mod nav;
mod overlay;
mod page;
mod reveal;
mod surface;
mod typed;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use crate::page::PageController;

thread_local! {
    /// The page's single controller, alive for the lifetime of the document
    static PAGE: RefCell<Option<Rc<PageController>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    // Core trail events (creation, evictions) go to the console through this
    let search = dom::get_window()?.location().search().unwrap_or_default();
    logging::init(logging::level_from_query(&search));

    page::mount_when_ready(|page| {
        PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    })
}

/// Tear down every effect (overlay, listeners, timers); mainly for hot reload
#[wasm_bindgen]
pub fn unmount() {
    if PAGE.with(|slot| slot.borrow_mut().take()).is_some() {
        dom::log("[Page] Unmounted");
    }
}
