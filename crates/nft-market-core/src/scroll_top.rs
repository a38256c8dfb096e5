//! Floating scroll-to-top button

use crate::config::ViewConfig;

/// Vertical offset the button scrolls back to
pub const SCROLL_ORIGIN: f64 = 0.0;

pub fn scroll_button_visible(scroll_y: f64, config: &ViewConfig) -> bool {
    scroll_y > config.scroll_top_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let config = ViewConfig::default();
        assert!(!scroll_button_visible(0.0, &config));
        assert!(!scroll_button_visible(1000.0, &config));
        assert!(scroll_button_visible(1000.5, &config));
        assert!(scroll_button_visible(4000.0, &config));
    }
}
