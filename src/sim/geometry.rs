//! Blob outline sampling
//!
//! Produces ordered point rings from the noise field plus the current
//! physics state. Pure: identical inputs always yield identical rings.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::polar_to_cartesian;
use crate::sim::noise::{self, DirectionalBias};
use crate::sim::physics::{Ripple, StretchState};

/// Shape parameters for one ring sample pass
#[derive(Debug, Clone, Copy)]
pub struct RingSpec {
    pub center: Vec2,
    pub radius: f32,
    /// Number of outline samples; floored to 3
    pub points: usize,
    pub seed: f32,
    pub intensity: f32,
    /// Per-axis elliptical stretch (1,1 = circular)
    pub aspect: Vec2,
    /// Multiplier on the ripple contribution (inner core dampens it)
    pub ripple_gain: f32,
}

/// Sample the main blob outline: noise field + slow elongation sweep +
/// stretch bulge/compression, mapped through the elliptical aspect.
pub fn sample_ring(
    spec: &RingSpec,
    time: f32,
    stretch: &StretchState,
    ripples: &[Ripple],
) -> Vec<Vec2> {
    let n = spec.points.max(3);
    (0..n)
        .map(|i| {
            let angle = TAU * i as f32 / n as f32;
            let mut deformation = noise::deform(
                angle,
                time,
                spec.seed,
                spec.intensity,
                ripples,
                spec.ripple_gain,
            );

            // Slow elongation axis sweeping around the shape
            let elongation = (angle - time * 0.025).cos().powi(2) * 0.18;

            if stretch.amount > 0.01 {
                let alignment = (angle - stretch.angle).cos();
                if alignment > 0.0 {
                    // Bulge toward the stretch direction
                    deformation += alignment * alignment * stretch.amount.powf(0.7) * 0.8;
                } else {
                    // Mild compression on the far side
                    deformation += alignment * stretch.amount * 0.15;
                }
            }

            let r = spec.radius * (1.0 + deformation + elongation);
            point_at(spec, angle, r)
        })
        .collect()
}

/// Sample a satellite accent outline: simpler noise, no elongation, no
/// global stretch, optional one-sided directional bias.
pub fn sample_satellite_ring(
    spec: &RingSpec,
    time: f32,
    bias: Option<DirectionalBias>,
) -> Vec<Vec2> {
    let n = spec.points.max(3);
    (0..n)
        .map(|i| {
            let angle = TAU * i as f32 / n as f32;
            let deformation = noise::satellite_deform(angle, time, spec.seed, spec.intensity, bias);
            let r = spec.radius * (1.0 + deformation);
            point_at(spec, angle, r)
        })
        .collect()
}

#[inline]
fn point_at(spec: &RingSpec, angle: f32, r: f32) -> Vec2 {
    spec.center + polar_to_cartesian(r, angle) * spec.aspect
}
