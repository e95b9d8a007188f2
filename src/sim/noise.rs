//! Layered periodic noise for blob outlines
//!
//! Pure functions mapping (angle, time, seed, intensity, ripples) to a scalar
//! radial deformation. The terms are small-amplitude sinusoids whose
//! frequencies sit at irrational ratios (golden ratio, √2) to each other, so
//! the summed signal never settles into a short repeating period.

use crate::consts::{GOLDEN, RIPPLE_AMPLITUDE, SQRT_2};
use crate::sim::physics::Ripple;

/// One-sided bulge applied to satellite shapes.
///
/// Points whose angle aligns with `angle` (positive cosine) bulge outward
/// proportional to alignment²; the far side is untouched.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalBias {
    pub angle: f32,
    pub strength: f32,
}

/// Radial deformation for the main blob layers, roughly in [-1.4, 1.6]
/// before `intensity` scaling.
///
/// `ripple_gain` scales only the ripple contribution; the inner core layer
/// passes a dampened gain so pointer-enter ripples read as an interior echo.
pub fn deform(
    angle: f32,
    time: f32,
    seed: f32,
    intensity: f32,
    ripples: &[Ripple],
    ripple_gain: f32,
) -> f32 {
    let mut d = 0.0;

    // Breathing: uniform in-and-out, phase-shifted by seed
    d += (time * 0.7 + seed).sin() * 0.12;
    d += (time * 0.7 * GOLDEN + seed * 1.7).sin() * 0.08;

    // Flow: waves traveling around the perimeter
    d += (angle * 3.0 - time * 0.9 + seed).sin() * 0.15;
    d += (angle * 5.0 - time * 0.9 * SQRT_2 + seed * 1.3).sin() * 0.09;

    // Morph: non-separable products of slow time and angle terms
    d += (time * 0.23 + seed).sin() * (angle * 2.0).cos() * 0.18;
    d += (time * 0.23 * GOLDEN + seed * 0.6).cos() * (angle * 4.0).cos() * 0.10;

    // Bulge: one half-wave-rectified traveling outward lobe
    let lobe = (angle - time * 0.31 + seed).sin().max(0.0);
    d += lobe.powi(3) * 0.3;

    // Horizontal flow: biases the x axis, drifting in strength over time
    d += angle.cos().powi(2) * (time * 0.17 + seed * 0.4).sin() * 0.08;

    // Slow uniform pulse
    d += (time * 0.11 + seed * 0.5).sin() * 0.05;

    d += ripple_contribution(angle, ripples) * ripple_gain;

    d * intensity
}

/// Simpler deformation for the small satellite accents: breathing, one
/// traveling wave and a slow pulse, plus an optional one-sided bias.
pub fn satellite_deform(
    angle: f32,
    time: f32,
    seed: f32,
    intensity: f32,
    bias: Option<DirectionalBias>,
) -> f32 {
    let mut d = 0.0;

    d += (time * 0.8 + seed).sin() * 0.14;
    d += (angle * 3.0 - time * 1.1 + seed).sin() * 0.12;
    d += (time * 0.19 + seed * 0.7).sin() * 0.06;

    if let Some(bias) = bias {
        let alignment = (angle - bias.angle).cos();
        if alignment > 0.0 {
            d += alignment * alignment * bias.strength;
        }
    }

    d * intensity
}

/// Summed angular perturbation of all active ripples
#[inline]
pub fn ripple_contribution(angle: f32, ripples: &[Ripple]) -> f32 {
    ripples
        .iter()
        .map(|r| (angle * 3.0 - r.phase * 8.0).sin() * r.strength * RIPPLE_AMPLITUDE)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_deterministic() {
        let a = deform(1.2, 34.5, 7.0, 1.0, &[], 1.0);
        let b = deform(1.2, 34.5, 7.0, 1.0, &[], 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_intensity_scales_linearly() {
        let d1 = deform(0.8, 12.0, 3.0, 1.0, &[], 1.0);
        let d2 = deform(0.8, 12.0, 3.0, 2.0, &[], 1.0);
        assert!((d2 - d1 * 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_ripple_gain_only_scales_ripples() {
        let ripples = [Ripple::spawn(0.5)];
        let none = deform(1.0, 5.0, 2.0, 1.0, &[], 1.0);
        let full = deform(1.0, 5.0, 2.0, 1.0, &ripples, 1.0);
        let damped = deform(1.0, 5.0, 2.0, 1.0, &ripples, 0.5);
        assert!((damped - none - (full - none) * 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_satellite_bias_one_sided() {
        let bias = DirectionalBias {
            angle: 0.0,
            strength: 0.4,
        };
        // Aligned sample bulges; the opposite side is identical to unbiased.
        let aligned = satellite_deform(0.0, 3.0, 1.0, 1.0, Some(bias));
        let aligned_plain = satellite_deform(0.0, 3.0, 1.0, 1.0, None);
        assert!(aligned > aligned_plain);

        let opposite = satellite_deform(std::f32::consts::PI, 3.0, 1.0, 1.0, Some(bias));
        let opposite_plain = satellite_deform(std::f32::consts::PI, 3.0, 1.0, 1.0, None);
        assert_eq!(opposite, opposite_plain);
    }

    #[test]
    fn test_rough_output_range() {
        // Sweep a dense grid; the unscaled signal stays within the
        // documented rough envelope.
        for i in 0..64 {
            let angle = TAU * i as f32 / 64.0;
            for t in 0..200 {
                let d = deform(angle, t as f32 * 0.37, 11.3, 1.0, &[], 1.0);
                assert!((-1.4..=1.6).contains(&d), "d={d} out of envelope");
            }
        }
    }

    proptest! {
        #[test]
        fn prop_deform_finite(
            angle in -10.0f32..10.0,
            time in -1.0e3f32..1.0e3,
            seed in -100.0f32..100.0,
            intensity in 0.0f32..3.0,
        ) {
            let d = deform(angle, time, seed, intensity, &[], 1.0);
            prop_assert!(d.is_finite());
            let s = satellite_deform(angle, time, seed, intensity, None);
            prop_assert!(s.is_finite());
        }
    }
}
