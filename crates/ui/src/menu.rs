use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::dom::{query_one, remove_class, toggle_class};
use crate::nav::LinkGroup;

const OPEN: &str = "active";

/// Hamburger icon plus the slide-out mobile navbar
pub struct MobileMenu {
    pub icon: HtmlElement,
    navbar: HtmlElement,
    pub links: LinkGroup,
}

impl MobileMenu {
    /// `None` if the page has no mobile menu markup
    pub fn find(document: &Document) -> Result<Option<Self>, JsValue> {
        let (Some(icon), Some(navbar)) = (
            query_one(document, ".mobile-menu-icon"),
            query_one(document, ".mobile-navbar"),
        ) else {
            return Ok(None);
        };
        Ok(Some(Self {
            icon,
            navbar,
            links: LinkGroup::find(document, ".mobile-nav-link")?,
        }))
    }

    pub fn toggle(&self) {
        toggle_class(&self.icon, OPEN);
        toggle_class(&self.navbar, OPEN);
    }

    pub fn close(&self) {
        remove_class(&self.icon, OPEN);
        remove_class(&self.navbar, OPEN);
    }
}
