//! Scroll position to active section mapping

/// A section counts as current once the page has scrolled to within this
/// many pixels of its top.
pub const ACTIVATION_OFFSET: f64 = 200.0;

/// Page section as laid out in the document
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    /// `offsetTop` in CSS pixels
    pub top: f64,
}

/// Id of the section the reader is in.
///
/// Sections are in document order; the last one whose top (less the
/// activation offset) has been scrolled past wins. `None` above the first.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - ACTIVATION_OFFSET)
        .map(|s| s.id.as_str())
}

/// Whether a nav link `href` points at `section_id`
pub fn href_targets(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        [("home", 0.0), ("about", 700.0), ("skills", 1500.0), ("contact", 2600.0)]
            .into_iter()
            .map(|(id, top)| SectionBounds {
                id: id.to_string(),
                top,
            })
            .collect()
    }

    #[test]
    fn test_top_of_page_is_first_section() {
        assert_eq!(active_section(&page(), 0.0), Some("home"));
    }

    #[test]
    fn test_offset_activates_early() {
        assert_eq!(active_section(&page(), 499.0), Some("home"));
        assert_eq!(active_section(&page(), 500.0), Some("about"));
    }

    #[test]
    fn test_last_section() {
        assert_eq!(active_section(&page(), 10_000.0), Some("contact"));
    }

    #[test]
    fn test_no_sections_reached() {
        let sections = vec![SectionBounds {
            id: "about".into(),
            top: 900.0,
        }];
        assert_eq!(active_section(&sections, 100.0), None);
        assert_eq!(active_section(&[], 100.0), None);
    }

    #[test]
    fn test_href_targets() {
        assert!(href_targets("#about", "about"));
        assert!(!href_targets("about", "about"));
        assert!(!href_targets("#about", "skills"));
        assert!(!href_targets("https://example.com/#about", "about"));
    }
}
