//! Top-creator carousel scroll affordances

use crate::config::ViewConfig;

/// Measured widths of the scrolling strip and its container. `None` means the
/// element wasn't mounted yet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerGeometry {
    pub content_width: Option<f64>,
    pub container_width: Option<f64>,
}

/// Whether the left/right arrows should be hidden.
///
/// Arrows show while the strip is at least as wide as its container. Missing
/// measurements are treated as "nothing to scroll".
pub fn buttons_hidden(geometry: ContainerGeometry) -> bool {
    match (geometry.content_width, geometry.container_width) {
        (Some(content), Some(container)) => content < container,
        _ => true,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Horizontal distance moved per arrow click
pub fn scroll_step(viewport_width: f64, config: &ViewConfig) -> f64 {
    if viewport_width > config.wide_viewport_breakpoint {
        config.wide_scroll_step
    } else {
        config.narrow_scroll_step
    }
}

/// New `scrollLeft` after one click in `direction`
pub fn next_scroll_left(
    current: f64,
    direction: ScrollDirection,
    viewport_width: f64,
    config: &ViewConfig,
) -> f64 {
    let step = scroll_step(viewport_width, config);
    match direction {
        ScrollDirection::Left => current - step,
        ScrollDirection::Right => current + step,
    }
}
