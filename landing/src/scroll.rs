//! Viewport scroll helpers: section lookup, smooth scrolling and the
//! scrolled-navbar threshold.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::error::LandingError;

/// `true` once the page has scrolled strictly past `threshold` pixels.
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Viewport top that puts an element just below the fixed navbar.
///
/// Not clamped: the browser clamps negative targets to the page top.
pub fn scroll_target(offset_top: f64, nav_height: f64) -> f64 {
    offset_top - nav_height
}

/// Current vertical scroll offset, `0.0` when there is no window.
pub fn current_scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Resolve a section id to the scroll top that reveals it.
pub fn section_scroll_top(id: &str, nav_height: f64) -> Result<f64, LandingError> {
    let window = web_sys::window().ok_or(LandingError::NoWindow)?;
    let document = window.document().ok_or(LandingError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| LandingError::SectionNotFound(id.to_string()))?;
    let element = element
        .dyn_into::<HtmlElement>()
        .map_err(|_| LandingError::NotHtmlElement(id.to_string()))?;

    Ok(scroll_target(f64::from(element.offset_top()), nav_height))
}

/// Smooth-scroll the viewport to the section with the given id.
///
/// Unknown ids are a no-op. Returns whether a scroll was started.
pub fn scroll_to_section(id: &str, nav_height: f64) -> bool {
    let top = match section_scroll_top(id, nav_height) {
        Ok(top) => top,
        Err(LandingError::SectionNotFound(_)) => {
            tracing::debug!(section = id, "scroll target missing, ignoring");
            return false;
        }
        Err(err) => {
            tracing::warn!(section = id, "cannot scroll: {err}");
            return false;
        }
    };

    let Some(window) = web_sys::window() else {
        return false;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    tracing::debug!(section = id, top, "smooth scroll started");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
        assert!(is_scrolled(1200.0, 50.0));
    }

    #[test]
    fn scrolling_back_clears_the_flag() {
        let offsets = [10.0, 60.0, 300.0, 49.0];
        let flags: Vec<bool> = offsets.iter().map(|&o| is_scrolled(o, 50.0)).collect();
        assert_eq!(flags, vec![false, true, true, false]);
    }

    #[test]
    fn target_subtracts_navbar_height() {
        assert_eq!(scroll_target(640.0, 80.0), 560.0);
        assert_eq!(scroll_target(80.0, 80.0), 0.0);
    }

    #[test]
    fn target_above_page_top_is_left_for_the_browser() {
        assert_eq!(scroll_target(0.0, 80.0), -80.0);
    }
}
