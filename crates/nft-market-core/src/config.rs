//! Tunable constants for the listing page

use serde::{Deserialize, Serialize};

use crate::error::ListingError;

/// View configuration. Missing fields in an override fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Listings shown before "Show More" is pressed
    pub page_size: usize,
    /// Vertical offset above which the scroll-to-top button appears
    pub scroll_top_threshold: f64,
    /// Viewport width above which the carousel scrolls by the wide step
    pub wide_viewport_breakpoint: f64,
    pub wide_scroll_step: f64,
    pub narrow_scroll_step: f64,
    /// Number of distinct creator avatars available
    pub creator_image_slots: usize,
    pub search_debounce_ms: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            scroll_top_threshold: 1000.0,
            wide_viewport_breakpoint: 1800.0,
            wide_scroll_step: 270.0,
            narrow_scroll_step: 210.0,
            creator_image_slots: 10,
            search_debounce_ms: 1000,
        }
    }
}

impl ViewConfig {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, ListingError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ListingError::Config(e.to_string()))?;
        if config.creator_image_slots == 0 {
            return Err(ListingError::Config("creator_image_slots must be at least 1".to_string()));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ViewConfig::default();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.scroll_top_threshold, 1000.0);
        assert_eq!(config.wide_scroll_step, 270.0);
        assert_eq!(config.narrow_scroll_step, 210.0);
    }

    #[test]
    fn test_partial_override() {
        let config = ViewConfig::from_json(r#"{"page_size": 24}"#).unwrap();
        assert_eq!(config.page_size, 24);
        assert_eq!(config.wide_viewport_breakpoint, 1800.0);
    }

    #[test]
    fn test_rejects_zero_image_slots() {
        let err = ViewConfig::from_json(r#"{"creator_image_slots": 0}"#).unwrap_err();
        assert!(matches!(err, ListingError::Config(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(ViewConfig::from_json("{page_size").is_err());
    }
}
