//! Navigation links, the sliding indicator and section tracking

use portfolio_trail::sections::{active_section, href_targets, SectionBounds};
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::dom::{add_class, query_all, remove_class};

const ACTIVE: &str = "active";

/// A set of anchor links where at most one carries `active`
pub struct LinkGroup {
    links: Vec<HtmlElement>,
}

impl LinkGroup {
    pub fn find(document: &Document, selector: &str) -> Result<Self, JsValue> {
        Ok(Self {
            links: query_all(document, selector)?,
        })
    }

    pub fn links(&self) -> &[HtmlElement] {
        &self.links
    }

    pub fn set_active(&self, active: &HtmlElement) {
        for link in &self.links {
            remove_class(link, ACTIVE);
        }
        add_class(active, ACTIVE);
    }

    /// Mark the links pointing at `section_id`; clear the rest
    pub fn highlight(&self, section_id: Option<&str>) {
        for link in &self.links {
            remove_class(link, ACTIVE);
            let targets = match (link.get_attribute("href"), section_id) {
                (Some(href), Some(id)) => href_targets(&href, id),
                _ => false,
            };
            if targets {
                add_class(link, ACTIVE);
            }
        }
    }

    fn active(&self) -> Option<&HtmlElement> {
        self.links
            .iter()
            .find(|link| link.class_list().contains(ACTIVE))
    }
}

/// Desktop navbar with the bar that slides under the active link
pub struct NavBar {
    pub links: LinkGroup,
    slider: Option<HtmlElement>,
}

impl NavBar {
    pub fn find(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            links: LinkGroup::find(document, ".navbar a")?,
            slider: crate::dom::query_one(document, ".nav-slider"),
        })
    }

    /// Move the slider under the active link
    pub fn update_slider(&self) {
        let (Some(slider), Some(link)) = (&self.slider, self.links.active()) else {
            return;
        };
        let style = slider.style();
        let _ = style.set_property("width", &format!("{}px", link.offset_width()));
        let _ = style.set_property("left", &format!("{}px", link.offset_left()));
    }
}

/// Layout of every `<section>`, in document order
pub fn section_bounds(document: &Document) -> Vec<SectionBounds> {
    query_all(document, "section")
        .unwrap_or_default()
        .into_iter()
        .map(|s| SectionBounds {
            id: s.id(),
            top: f64::from(s.offset_top()),
        })
        .collect()
}

/// Id of the section currently scrolled into
pub fn current_section(window: &Window, document: &Document) -> Option<String> {
    let scroll_y = window.page_y_offset().unwrap_or(0.0);
    active_section(&section_bounds(document), scroll_y).map(ToString::to_string)
}

/// Smooth-scroll to the element an in-page `#id` href names.
/// Returns `false` if the href is not an in-page anchor or the target is missing.
pub fn scroll_to_anchor(document: &Document, href: &str) -> bool {
    let Some(target) = href
        .strip_prefix('#')
        .and_then(|id| document.get_element_by_id(id))
    else {
        return false;
    };

    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}
