use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Pixels of slack before the carousel counts as scrolled to the end.
const END_SLACK: f64 = 10.0;

/// Horizontal scroll metrics of a carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselScroll {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl CarouselScroll {
    pub fn of(element: &Element) -> Self {
        Self {
            scroll_left: element.scroll_left() as f64,
            scroll_width: element.scroll_width() as f64,
            client_width: element.client_width() as f64,
        }
    }

    pub fn can_scroll_left(&self) -> bool {
        self.scroll_left > 0.0
    }

    pub fn can_scroll_right(&self) -> bool {
        self.scroll_left < self.scroll_width - self.client_width - END_SLACK
    }
}

/// Progress of a section travelling through the viewport: 0 when its top
/// touches the bottom of the viewport, 1 when its bottom leaves the top.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

/// Linear map of progress onto a background offset in percent.
pub fn parallax_offset(progress: f64, max_percent: f64) -> f64 {
    progress.clamp(0.0, 1.0) * max_percent
}

pub fn scroll_progress_of(element: &Element) -> f64 {
    let viewport_height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    scroll_progress(rect.top(), rect.height(), viewport_height)
}

/// Smooth-scroll the page to the element with anchor `id`.
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("No section with id '{}'", id),
    }
}

/// Smooth-scroll `element` horizontally by `pages` client widths.
pub fn scroll_by_pages(element: &Element, pages: f64) {
    let options = ScrollToOptions::new();
    options.set_left(element.client_width() as f64 * pages);
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_by_with_scroll_to_options(&options);
}

/// Background that follows the pointer.
pub fn pointer_glow(x: i32, y: i32) -> String {
    format!(
        "background-image: radial-gradient(circle at {}px {}px, rgba(109, 190, 69, 0.3) 0%, transparent 60%);",
        x, y
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_at_start() {
        let scroll = CarouselScroll {
            scroll_left: 0.0,
            scroll_width: 1400.0,
            client_width: 700.0,
        };
        assert!(!scroll.can_scroll_left());
        assert!(scroll.can_scroll_right());
    }

    #[test]
    fn test_carousel_near_end_within_slack() {
        let scroll = CarouselScroll {
            scroll_left: 695.0,
            scroll_width: 1400.0,
            client_width: 700.0,
        };
        assert!(scroll.can_scroll_left());
        assert!(!scroll.can_scroll_right());
    }

    #[test]
    fn test_carousel_that_fits_cannot_scroll() {
        let scroll = CarouselScroll {
            scroll_left: 0.0,
            scroll_width: 700.0,
            client_width: 700.0,
        };
        assert!(!scroll.can_scroll_left());
        assert!(!scroll.can_scroll_right());
    }

    #[test]
    fn test_scroll_progress_bounds() {
        // Section still below the fold.
        assert_eq!(scroll_progress(900.0, 600.0, 800.0), 0.0);
        // Top at the bottom edge.
        assert_eq!(scroll_progress(800.0, 600.0, 800.0), 0.0);
        // Bottom at the top edge.
        assert_eq!(scroll_progress(-600.0, 600.0, 800.0), 1.0);
        // Halfway.
        assert!((scroll_progress(100.0, 600.0, 800.0) - 0.5).abs() < 1e-9);
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_parallax_offset() {
        assert_eq!(parallax_offset(0.5, 50.0), 25.0);
        assert_eq!(parallax_offset(2.0, 50.0), 50.0);
    }

    #[test]
    fn test_pointer_glow() {
        assert!(pointer_glow(10, 20).contains("circle at 10px 20px"));
    }
}
