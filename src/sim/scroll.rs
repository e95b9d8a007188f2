//! Scroll-linked fade and shrink
//!
//! Derived purely from the scroll offset and viewport height, fully
//! independent of the blob geometry. The fade applies to the surface element
//! as styles; the shrink feeds the radius. Both collapse to identity in
//! static mode.

use crate::consts::SCROLL_SHRINK;

/// Overlay applied to the surface element as it scrolls away
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFade {
    /// Blur radius, CSS pixels
    pub blur: f32,
    /// In [0, 1]
    pub opacity: f32,
    /// Parallax translation, CSS pixels
    pub translate_y: f32,
}

impl ScrollFade {
    pub const IDENTITY: Self = Self {
        blur: 0.0,
        opacity: 1.0,
        translate_y: 0.0,
    };

    /// Derive the overlay for the current scroll position. Fully faded by
    /// ~0.8 viewports of scroll; identity in static mode.
    pub fn derive(scroll_y: f32, viewport_h: f32, static_mode: bool) -> Self {
        if static_mode || viewport_h <= 0.0 {
            return Self::IDENTITY;
        }
        let progress = (scroll_y / (viewport_h * 0.8)).clamp(0.0, 1.0);
        Self {
            blur: progress * 8.0,
            opacity: 1.0 - progress * 0.6,
            translate_y: progress * 40.0,
        }
    }
}

/// Radius multiplier shrinking the blob as the page scrolls past it
pub fn scroll_scale(scroll_y: f32, viewport_h: f32, static_mode: bool) -> f32 {
    if static_mode || viewport_h <= 0.0 {
        return 1.0;
    }
    1.0 - (scroll_y / viewport_h).clamp(0.0, 1.0) * SCROLL_SHRINK
}
