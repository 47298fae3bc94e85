//! Page controller
//!
//! Built once at startup. Owns every effect on the page and the listeners
//! that drive them; handlers reach it through a `Weak` so dropping the
//! controller tears everything down.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use portfolio_trail::{TrailGate, Transition};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, Window};

use crate::animator::TrailAnimator;
use crate::config::PageConfig;
use crate::device;
use crate::dom::{self, query_one, EventListener};
use crate::menu::MobileMenu;
use crate::nav::{self, NavBar};
use crate::reveal::ScrollReveal;
use crate::typed::TypedText;

pub struct PageController {
    window: Window,
    document: Document,
    config: PageConfig,
    gate: TrailGate,
    trail: RefCell<Option<TrailAnimator>>,
    nav: NavBar,
    menu: Option<MobileMenu>,
    listeners: RefCell<Vec<EventListener>>,
    reveal: RefCell<Option<ScrollReveal>>,
    typed: RefCell<Option<TypedText>>,
}

impl PageController {
    pub fn mount(window: Window, document: Document) -> Result<Rc<Self>, JsValue> {
        let config = PageConfig::load(&window);
        let gate = TrailGate::new(config.trail.touch_breakpoint);

        let page = Rc::new(Self {
            nav: NavBar::find(&document)?,
            menu: MobileMenu::find(&document)?,
            window,
            document,
            config,
            gate,
            trail: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            reveal: RefCell::new(None),
            typed: RefCell::new(None),
        });

        page.wire_window()?;
        page.wire_nav_links()?;
        page.wire_mobile_menu()?;
        page.start_effects();
        page.sync_trail();

        page.window.scroll_to_with_x_and_y(0.0, 0.0);
        page.nav.update_slider();

        dom::log("[Page] Mounted");
        Ok(page)
    }

    /// Create or tear down the cursor trail to match the current device
    fn sync_trail(&self) {
        if self.config.trail_disabled {
            return;
        }

        let profile = device::probe(&self.window);
        let active = self.trail.borrow().is_some();
        match self.gate.transition(active, &profile) {
            Transition::Activate => {
                match TrailAnimator::start(&self.window, &self.document, self.config.trail.clone()) {
                    Ok(animator) => *self.trail.borrow_mut() = Some(animator),
                    Err(e) => dom::error(&format!("[Page] Cursor trail failed to start: {e:?}")),
                }
            }
            Transition::Deactivate => {
                if let Some(animator) = self.trail.borrow_mut().take() {
                    dom::log(&format!(
                        "[Page] Touch layout, dropping trail with {} particles",
                        animator.particle_count()
                    ));
                }
            }
            Transition::Stay => {}
        }
    }

    fn on_scroll(&self) {
        let current = nav::current_section(&self.window, &self.document);
        self.nav.links.highlight(current.as_deref());
        if let Some(menu) = &self.menu {
            menu.links.highlight(current.as_deref());
        }
        self.nav.update_slider();
    }

    fn on_resize(&self) {
        self.sync_trail();
        self.nav.update_slider();
    }

    fn on_nav_click(&self, link: &HtmlElement, event: &Event) {
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        // External links navigate normally
        if !href.starts_with('#') {
            return;
        }
        event.prevent_default();
        if nav::scroll_to_anchor(&self.document, &href) {
            self.nav.links.set_active(link);
            self.nav.update_slider();
        }
    }

    fn on_mobile_link_click(&self, menu: &MobileMenu, link: &HtmlElement, event: &Event) {
        event.prevent_default();
        let href = link.get_attribute("href").unwrap_or_default();
        if nav::scroll_to_anchor(&self.document, &href) {
            menu.close();
            menu.links.set_active(link);
        }
    }

    fn wire_window(self: &Rc<Self>) -> Result<(), JsValue> {
        let mut listeners = self.listeners.borrow_mut();

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.window, "scroll", move |_| {
            with_page(&weak, Self::on_scroll);
        })?);

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.window, "resize", move |_| {
            with_page(&weak, Self::on_resize);
        })?);

        // Fonts and images shift link widths after DOMContentLoaded
        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.window, "load", move |_| {
            with_page(&weak, |page| page.nav.update_slider());
        })?);

        Ok(())
    }

    fn wire_nav_links(self: &Rc<Self>) -> Result<(), JsValue> {
        let mut listeners = self.listeners.borrow_mut();
        for link in self.nav.links.links() {
            let weak = Rc::downgrade(self);
            let link_el = link.clone();
            listeners.push(EventListener::new(link, "click", move |e| {
                with_page(&weak, |page| page.on_nav_click(&link_el, &e));
            })?);
        }
        Ok(())
    }

    fn wire_mobile_menu(self: &Rc<Self>) -> Result<(), JsValue> {
        let Some(menu) = &self.menu else {
            return Ok(());
        };
        let mut listeners = self.listeners.borrow_mut();

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new(&menu.icon, "click", move |_| {
            with_page(&weak, |page| {
                if let Some(menu) = &page.menu {
                    menu.toggle();
                }
            });
        })?);

        for link in menu.links.links() {
            let weak = Rc::downgrade(self);
            let link_el = link.clone();
            listeners.push(EventListener::new(link, "click", move |e| {
                with_page(&weak, |page| {
                    if let Some(menu) = &page.menu {
                        page.on_mobile_link_click(menu, &link_el, &e);
                    }
                });
            })?);
        }
        Ok(())
    }

    fn start_effects(&self) {
        match ScrollReveal::attach(&self.document) {
            Ok(reveal) => *self.reveal.borrow_mut() = Some(reveal),
            Err(e) => dom::warn(&format!("[Page] Scroll reveal unavailable: {e:?}")),
        }

        if let Some(target) = query_one(&self.document, ".multiple-text") {
            let typed = TypedText::start(&self.window, target, self.config.typed.clone());
            *self.typed.borrow_mut() = Some(typed);
        }
    }
}

fn with_page(weak: &Weak<PageController>, f: impl FnOnce(&PageController)) {
    if let Some(page) = weak.upgrade() {
        f(&page);
    }
}

/// Mount once the DOM is parsed; returns immediately if it already is
pub fn mount_when_ready(on_mount: impl FnOnce(Rc<PageController>) + 'static) -> Result<(), JsValue> {
    let window = dom::get_window()?;
    let document = dom::get_document()?;

    if document.ready_state() != "loading" {
        on_mount(PageController::mount(window, document)?);
        return Ok(());
    }

    let doc = document.clone();
    let callback = Closure::once(Box::new(move || {
        match PageController::mount(window, doc) {
            Ok(page) => on_mount(page),
            Err(e) => dom::error(&format!("[Page] Mount failed: {e:?}")),
        }
    }) as Box<dyn FnOnce()>);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
