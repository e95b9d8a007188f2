//! Frame planning
//!
//! Builds a backend-independent paint plan for one frame: per layer a smooth
//! closed curve, resolved gradient stops and a blur radius, in back-to-front
//! order. Degenerate layers (too few points, non-finite geometry) are
//! dropped for the frame; the next tick recomputes from current state.

use glam::Vec2;

use crate::sim::geometry::{sample_ring, sample_satellite_ring, RingSpec};
use crate::sim::noise::DirectionalBias;
use crate::sim::state::EffectState;
use crate::renderer::curve::{smooth_closed, ClosedCurve};
use crate::renderer::layers::layer_stack;
use crate::theme::{resolve, Rgba};

/// Strength of the one-sided bulge satellites get along their direction of
/// travel
const SATELLITE_BIAS: f32 = 0.25;

/// Everything needed to paint one layer
#[derive(Debug, Clone)]
pub struct LayerPaint {
    pub curve: ClosedCurve,
    /// Radial gradient center
    pub gradient_center: Vec2,
    /// Radial gradient outer radius (covers the deformed outline)
    pub gradient_radius: f32,
    /// Resolved stops: (offset, color)
    pub stops: Vec<(f32, Rgba)>,
    /// Blur radius in CSS pixels; 0 disables the filter
    pub blur: f32,
}

/// One frame's paint plan, layers in painting order
#[derive(Debug, Clone, Default)]
pub struct FramePlan {
    pub layers: Vec<LayerPaint>,
}

/// Build the paint plan for the current state and theme
pub fn plan_frame(state: &EffectState, dark: bool) -> FramePlan {
    let quality = state.options.quality;
    let center = state.center();
    let radius = state.radius();
    let intensity = state.effective_intensity();

    let mut layers = Vec::new();
    for spec in layer_stack(quality) {
        let layer_time = state.time * spec.time_scale;
        let layer_center = center + spec.drift.offset(state.time, radius);
        let layer_radius = radius * spec.radius_factor;

        let ring_spec = RingSpec {
            center: layer_center,
            radius: layer_radius,
            points: spec.points,
            seed: state.seed + spec.seed_offset,
            intensity: intensity * spec.intensity_factor,
            aspect: spec.aspect,
            ripple_gain: spec.ripple_gain,
        };

        let ring = if spec.satellite {
            // Satellites bulge slightly along their direction of travel
            let bias = DirectionalBias {
                angle: spec.drift.tangent_angle(state.time),
                strength: SATELLITE_BIAS,
            };
            sample_satellite_ring(&ring_spec, layer_time, Some(bias))
        } else {
            sample_ring(&ring_spec, layer_time, &state.stretch, &state.ripples)
        };

        // Degenerate geometry: skip this layer, keep the rest of the frame
        let Some(curve) = smooth_closed(&ring) else {
            continue;
        };

        let blur = if quality.blur_enabled() { spec.blur } else { 0.0 };
        let stops = spec
            .stops
            .iter()
            .map(|s| (s.offset, resolve(s.key, dark).faded(s.alpha)))
            .collect();

        layers.push(LayerPaint {
            curve,
            gradient_center: layer_center,
            // Headroom over the deformed outline so the gradient tail
            // never clips to a hard edge
            gradient_radius: layer_radius * 1.8,
            stops,
            blur,
        });
    }

    FramePlan { layers }
}
