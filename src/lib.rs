//! Ambient Blob - a living, pointer-reactive background effect
//!
//! Core modules:
//! - `sim`: Deterministic simulation (noise field, physics state, blob geometry)
//! - `renderer`: Curve smoothing and layered gradient compositing
//! - `options`: Per-instance configuration parsed from markup
//! - `theme`: Explicit light/dark color resolution

pub mod options;
pub mod renderer;
pub mod sim;
pub mod theme;

pub use options::{BlobOptions, Position, QualityPreset};

use glam::Vec2;

/// Effect tuning constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz - the decay rates below are per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Simulated-time advance per tick (noise frequencies are tuned for this)
    pub const TIME_STEP: f32 = 0.012;

    /// Base blob radius as a fraction of the short surface side
    pub const BASE_RADIUS_FACTOR: f32 = 0.3;

    /// Spring follower - heavily overdamped, viscous tracking without oscillation
    pub const SPRING_STIFFNESS: f32 = 0.04;
    pub const SPRING_DAMPING: f32 = 0.88;

    /// Magnetic drift - first-order lag toward a clamped pointer offset
    pub const MAGNET_STRENGTH: f32 = 0.008;
    pub const MAGNET_PULL: f32 = 0.15;
    /// Drift cap as a fraction of the blob radius
    pub const MAX_DRIFT_FACTOR: f32 = 0.22;

    /// Stretch never exceeds this (hard cap keeps the outline from breaking)
    pub const STRETCH_MAX: f32 = 0.6;
    pub const STRETCH_EASE: f32 = 0.03;
    pub const STRETCH_ANGLE_EASE: f32 = 0.1;
    /// Decay while the pointer is still near the blob
    pub const STRETCH_DECAY_NEAR: f32 = 0.97;
    /// Decay once the pointer has fully left
    pub const STRETCH_DECAY_FAR: f32 = 0.95;
    /// Pull distances below this fraction of the radius do not stretch
    pub const STRETCH_DEAD_ZONE: f32 = 0.3;
    /// Pull range (fraction of radius) over which stretch ramps to its cap
    pub const STRETCH_RANGE: f32 = 0.8;
    /// Minimum spring speed (surface units/tick) for motion to count as pulling
    pub const STRETCH_MIN_SPEED: f32 = 0.35;

    /// Ripple decay per tick (fast - in practice caps how many coexist)
    pub const RIPPLE_DECAY: f32 = 0.96;
    /// Ripples below this strength are dropped
    pub const RIPPLE_CUTOFF: f32 = 0.01;
    /// Phase advance per tick
    pub const RIPPLE_SPEED: f32 = 0.15;
    /// Radial amplitude contributed by a full-strength ripple
    pub const RIPPLE_AMPLITUDE: f32 = 0.12;

    /// Pointer distance thresholds relative to the current radius
    pub const POINTER_NEAR_FACTOR: f32 = 1.6;
    pub const POINTER_INSIDE_FACTOR: f32 = 1.0;

    /// Irrational frequency ratios keep the summed noise terms from repeating
    pub const GOLDEN: f32 = 1.618_034;
    pub const SQRT_2: f32 = std::f32::consts::SQRT_2;

    /// Weight of the spring offset in the composite center
    pub const SPRING_FOLLOW: f32 = 0.05;

    /// Scroll-linked shrink - up to this fraction at one viewport of scroll
    pub const SCROLL_SHRINK: f32 = 0.15;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Shortest signed angular delta from `from` to `to`
///
/// Never crosses the ±π discontinuity, so easing an angle by a fraction of
/// this delta can never make it jump to the far side of the circle.
#[inline]
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    normalize_angle(to - from)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
