//! Per-instance effect state
//!
//! One `EffectState` is exclusively owned by each mounted instance for its
//! whole lifetime. It is mutated in place by the tick and never exposed
//! through any reactive binding; resizing the surface keeps all physics
//! state intact.

use glam::Vec2;

use crate::consts::*;
use crate::options::BlobOptions;
use crate::sim::physics::{MagneticDrift, PointerState, Ripple, SpringState, StretchState};
use crate::sim::scroll::scroll_scale;

/// All mutable state for one running blob instance
#[derive(Debug, Clone)]
pub struct EffectState {
    pub options: BlobOptions,
    /// Resolved decorrelation seed (options seed or a mount-assigned one)
    pub seed: f32,
    /// Simulated time, advanced only on visible ticks
    pub time: f32,

    pub spring: SpringState,
    pub drift: MagneticDrift,
    pub stretch: StretchState,
    pub ripples: Vec<Ripple>,
    pub pointer: PointerState,

    /// Latest observed scroll offset
    pub scroll_y: f32,
    /// Latest observed viewport height
    pub viewport_h: f32,
    /// Logical surface size (CSS pixels)
    pub surface: Vec2,
    /// Effective flag: option OR the prefers-reduced-motion media query
    pub reduced_motion: bool,
}

impl EffectState {
    pub fn new(options: BlobOptions, seed: f32, surface: Vec2) -> Self {
        let base = options.position.fraction() * surface;
        Self {
            reduced_motion: options.reduced_motion,
            options,
            seed,
            // Seed doubles as a time offset so instances never share a phase
            time: seed,
            spring: SpringState::new(base),
            drift: MagneticDrift::default(),
            stretch: StretchState::default(),
            ripples: Vec::new(),
            pointer: PointerState::default(),
            scroll_y: 0.0,
            viewport_h: 0.0,
            surface,
        }
    }

    /// Scroll parallax/fade/shrink disabled?
    #[inline]
    pub fn effective_static(&self) -> bool {
        self.options.static_mode || self.reduced_motion
    }

    /// Noise intensity after accessibility adjustments
    #[inline]
    pub fn effective_intensity(&self) -> f32 {
        if self.reduced_motion {
            self.options.intensity * 0.5
        } else {
            self.options.intensity
        }
    }

    /// Anchor point selected by the position option
    #[inline]
    pub fn base_center(&self) -> Vec2 {
        self.options.position.fraction() * self.surface
    }

    /// Current radius: base size × option scale × scroll shrink
    pub fn radius(&self) -> f32 {
        let shrink = scroll_scale(self.scroll_y, self.viewport_h, self.effective_static());
        self.surface.min_element() * BASE_RADIUS_FACTOR * self.options.scale * shrink
    }

    /// Slow periodic wander of the center, independent of the pointer
    pub fn wander(&self) -> Vec2 {
        let t = self.time;
        let r = self.radius();
        Vec2::new(
            ((t * 0.21 + self.seed).sin() * 0.06 + (t * 0.13 * GOLDEN + self.seed * 0.3).cos() * 0.04)
                * r,
            ((t * 0.17 * SQRT_2 + self.seed).cos() * 0.05 + (t * 0.11 + self.seed * 1.1).sin() * 0.03)
                * r,
        )
    }

    /// Composite center: anchor + wander + magnetic drift + a soft fraction
    /// of the spring's pointer tracking
    pub fn center(&self) -> Vec2 {
        let base = self.base_center();
        base + self.wander() + self.drift.offset + (self.spring.pos - base) * SPRING_FOLLOW
    }

    /// Update the logical surface size. Physics state is deliberately kept.
    pub fn resize(&mut self, surface: Vec2) {
        self.surface = surface;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Position;

    fn state() -> EffectState {
        EffectState::new(BlobOptions::default(), 5.0, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn test_base_center_follows_position_option() {
        let mut opts = BlobOptions::default();
        opts.position = Position::TopLeft;
        let s = EffectState::new(opts, 0.0, Vec2::new(1000.0, 500.0));
        assert!(s.base_center().distance(Vec2::new(300.0, 160.0)) < 1e-3);
    }

    #[test]
    fn test_radius_scales_with_scale_option() {
        let mut s = state();
        let r1 = s.radius();
        s.options.scale = 2.0;
        assert!((s.radius() - r1 * 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_scroll_shrinks_radius_unless_static() {
        let mut s = state();
        s.viewport_h = 900.0;
        let full = s.radius();
        s.scroll_y = 900.0;
        assert!(s.radius() < full);

        s.options.static_mode = true;
        assert_eq!(s.radius(), full);
    }

    #[test]
    fn test_reduced_motion_halves_intensity_and_forces_static() {
        let mut s = state();
        assert_eq!(s.effective_intensity(), 1.0);
        s.reduced_motion = true;
        assert_eq!(s.effective_intensity(), 0.5);
        assert!(s.effective_static());
    }

    #[test]
    fn test_resize_keeps_physics() {
        let mut s = state();
        s.stretch.amount = 0.4;
        s.drift.offset = Vec2::new(3.0, -2.0);
        s.ripples.push(crate::sim::physics::Ripple::spawn(1.0));
        let spring = s.spring;

        s.resize(Vec2::new(1600.0, 1200.0));

        assert_eq!(s.stretch.amount, 0.4);
        assert_eq!(s.drift.offset, Vec2::new(3.0, -2.0));
        assert_eq!(s.ripples.len(), 1);
        assert_eq!(s.spring.pos, spring.pos);
        assert_eq!(s.surface, Vec2::new(1600.0, 1200.0));
    }

    #[test]
    fn test_seeds_decorrelate_time() {
        let a = EffectState::new(BlobOptions::default(), 1.0, Vec2::new(800.0, 600.0));
        let b = EffectState::new(BlobOptions::default(), 42.0, Vec2::new(800.0, 600.0));
        assert_ne!(a.time, b.time);
        assert_ne!(a.wander(), b.wander());
    }
}
