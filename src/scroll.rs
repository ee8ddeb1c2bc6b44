//! Scroll-position predicates, recomputed on every scroll event.

use once_cell::sync::Lazy;
use regex::Regex;

static INLINE_WIDTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"width: (\d+)%").expect("width pattern is valid"));

/// Scroll offset after which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;
/// Look-ahead used when deciding which section is current.
pub const SECTION_OFFSET: f64 = 100.0;
/// Height of the fixed header anchor jumps leave room for.
pub const HEADER_OFFSET: f64 = 80.0;
/// Distance above the viewport bottom at which skill bars start filling.
pub const REVEAL_MARGIN: f64 = 100.0;

/// A page section's layout box.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// The id of the section the navigation should highlight.
///
/// When boxes overlap, the last matching section wins.
pub fn active_section(scroll_y: f64, sections: &[Section]) -> Option<&str> {
    let probe = scroll_y + SECTION_OFFSET;
    sections
        .iter()
        .rev()
        .find(|s| {
            let top = s.top - SECTION_OFFSET;
            probe > top && probe <= top + s.height
        })
        .map(|s| s.id.as_str())
}

/// Whether a nav link's `href` points at `section_id`.
pub fn links_to(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

/// The section id an in-page link jumps to; bare `#` links go nowhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll offset for jumping to an element at `offset_top`.
pub fn anchor_scroll_target(offset_top: f64) -> f64 {
    (offset_top - HEADER_OFFSET).max(0.0)
}

/// Whether an element whose top edge is at `rect_top` should animate in.
pub fn should_reveal(rect_top: f64, viewport_height: f64) -> bool {
    rect_top <= viewport_height - REVEAL_MARGIN
}

/// The percentage a revealed skill bar fills to.
///
/// Taken from a `width: N%` declaration in the bar's inline style, else the
/// parent's `data-width`, else `"0"`. Empty values fall through.
pub fn skill_bar_target_width<'a>(style: Option<&'a str>, data_width: Option<&'a str>) -> &'a str {
    style
        .and_then(|style| INLINE_WIDTH.captures(style))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .or_else(|| data_width.filter(|w| !w.is_empty()))
        .unwrap_or("0")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<Section> {
        vec![
            Section::new("home", 0.0, 700.0),
            Section::new("about", 700.0, 600.0),
            Section::new("contact", 1300.0, 500.0),
        ]
    }

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(500.0));
        assert!(back_to_top_visible(500.5));
    }

    #[test]
    fn test_active_section() {
        let sections = page();
        assert_eq!(active_section(0.0, &sections), Some("home"));
        assert_eq!(active_section(499.0, &sections), Some("home"));
        assert_eq!(active_section(500.0, &sections), Some("home"));
        assert_eq!(active_section(501.0, &sections), Some("about"));
        assert_eq!(active_section(1150.0, &sections), Some("contact"));
        assert_eq!(active_section(5000.0, &sections), None);
    }

    #[test]
    fn test_active_section_last_match_wins() {
        let sections = vec![
            Section::new("outer", 0.0, 2000.0),
            Section::new("inner", 300.0, 200.0),
        ];
        assert_eq!(active_section(250.0, &sections), Some("inner"));
        assert_eq!(active_section(900.0, &sections), Some("outer"));
    }

    #[test]
    fn test_links() {
        assert!(links_to("#about", "about"));
        assert!(!links_to("about", "about"));
        assert_eq!(anchor_target("#skills"), Some("skills"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/blog"), None);
    }

    #[test]
    fn test_anchor_scroll_target() {
        assert_eq!(anchor_scroll_target(700.0), 620.0);
        assert_eq!(anchor_scroll_target(40.0), 0.0);
    }

    #[test]
    fn test_should_reveal() {
        assert!(should_reveal(600.0, 700.0));
        assert!(!should_reveal(601.0, 700.0));
    }

    #[test]
    fn test_skill_bar_width_from_inline_style() {
        assert_eq!(
            skill_bar_target_width(Some("height: 4px; width: 85%;"), Some("40")),
            "85"
        );
    }

    #[test]
    fn test_skill_bar_width_falls_back_to_data_width() {
        assert_eq!(skill_bar_target_width(Some("height: 4px"), Some("70")), "70");
        assert_eq!(skill_bar_target_width(Some("width:85%"), Some("70")), "70");
        assert_eq!(skill_bar_target_width(None, Some("55")), "55");
    }

    #[test]
    fn test_skill_bar_width_defaults_to_zero() {
        assert_eq!(skill_bar_target_width(None, None), "0");
        assert_eq!(skill_bar_target_width(Some(""), Some("")), "0");
    }
}
