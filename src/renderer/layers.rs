//! The six-layer blob stack
//!
//! Ordered back-to-front: outer glow, flow accent, main body, inner core,
//! two satellite accents. Every layer carries its own noise seed offset,
//! time scale, drift path, blur and gradient stops so no two layers ever
//! move in lockstep.

use glam::Vec2;

use crate::options::QualityPreset;
use crate::theme::ColorKey;

/// One radial gradient stop: palette slot plus layer-specific alpha
#[derive(Debug, Clone, Copy)]
pub struct GradientStop {
    pub offset: f32,
    pub key: ColorKey,
    pub alpha: f32,
}

const fn stop(offset: f32, key: ColorKey, alpha: f32) -> GradientStop {
    GradientStop { offset, key, alpha }
}

/// Independent periodic drift path for a layer's center
#[derive(Debug, Clone, Copy)]
pub struct DriftPath {
    /// Amplitude as a fraction of the blob radius
    pub amp: Vec2,
    pub freq: Vec2,
    pub phase: Vec2,
}

impl DriftPath {
    pub const STILL: Self = Self {
        amp: Vec2::ZERO,
        freq: Vec2::ZERO,
        phase: Vec2::ZERO,
    };

    /// Offset from the blob center at `time`, scaled by `radius`
    pub fn offset(&self, time: f32, radius: f32) -> Vec2 {
        Vec2::new(
            (time * self.freq.x + self.phase.x).sin() * self.amp.x,
            (time * self.freq.y + self.phase.y).cos() * self.amp.y,
        ) * radius
    }

    /// Direction of travel along the path at `time` (for satellite bias)
    pub fn tangent_angle(&self, time: f32) -> f32 {
        let dx = self.freq.x * (time * self.freq.x + self.phase.x).cos() * self.amp.x;
        let dy = -self.freq.y * (time * self.freq.y + self.phase.y).sin() * self.amp.y;
        dy.atan2(dx)
    }
}

/// Immutable parameters for one composited layer
#[derive(Debug, Clone, Copy)]
pub struct LayerSpec {
    pub name: &'static str,
    /// Fraction of the blob radius
    pub radius_factor: f32,
    /// Outline samples at Medium quality
    pub points: usize,
    /// Added to the instance seed so layers never share noise phase
    pub seed_offset: f32,
    pub intensity_factor: f32,
    /// Multiplier on simulated time (the core breathes faster)
    pub time_scale: f32,
    /// Elliptical aspect (x, y)
    pub aspect: Vec2,
    /// Blur radius, CSS pixels
    pub blur: f32,
    /// Multiplier on ripple influence (dampened inside the core)
    pub ripple_gain: f32,
    /// Satellite layers use the simpler noise variant and skip stretch
    pub satellite: bool,
    pub drift: DriftPath,
    pub stops: &'static [GradientStop],
}

const GLOW_STOPS: &[GradientStop] = &[
    stop(0.0, ColorKey::Halo, 0.35),
    stop(0.7, ColorKey::Halo, 0.12),
    stop(1.0, ColorKey::Halo, 0.0),
];

const FLOW_STOPS: &[GradientStop] = &[
    stop(0.0, ColorKey::Flow, 0.30),
    stop(0.6, ColorKey::Flow, 0.16),
    stop(1.0, ColorKey::Flow, 0.0),
];

const BODY_STOPS: &[GradientStop] = &[
    stop(0.0, ColorKey::Core, 0.55),
    stop(0.45, ColorKey::Body, 0.40),
    stop(1.0, ColorKey::Body, 0.0),
];

const CORE_STOPS: &[GradientStop] = &[
    stop(0.0, ColorKey::Core, 0.85),
    stop(0.6, ColorKey::Core, 0.30),
    stop(1.0, ColorKey::Core, 0.0),
];

const SAT_A_STOPS: &[GradientStop] = &[
    stop(0.0, ColorKey::Accent, 0.50),
    stop(1.0, ColorKey::Accent, 0.0),
];

const SAT_B_STOPS: &[GradientStop] = &[
    stop(0.0, ColorKey::Mist, 0.45),
    stop(1.0, ColorKey::Mist, 0.0),
];

/// Back-to-front layer table at Medium quality
const LAYERS: [LayerSpec; 6] = [
    LayerSpec {
        name: "glow",
        radius_factor: 1.45,
        points: 20,
        seed_offset: 11.3,
        intensity_factor: 0.7,
        time_scale: 0.6,
        aspect: Vec2::new(1.08, 1.0),
        blur: 40.0,
        ripple_gain: 1.0,
        satellite: false,
        drift: DriftPath {
            amp: Vec2::new(0.04, 0.03),
            freq: Vec2::new(0.14, 0.09),
            phase: Vec2::new(0.0, 1.3),
        },
        stops: GLOW_STOPS,
    },
    LayerSpec {
        name: "flow",
        radius_factor: 1.12,
        points: 22,
        seed_offset: 4.7,
        intensity_factor: 1.1,
        time_scale: 0.85,
        aspect: Vec2::new(1.0, 1.05),
        blur: 24.0,
        ripple_gain: 1.0,
        satellite: false,
        drift: DriftPath {
            amp: Vec2::new(0.09, 0.07),
            freq: Vec2::new(0.23, 0.31),
            phase: Vec2::new(2.1, 0.4),
        },
        stops: FLOW_STOPS,
    },
    LayerSpec {
        name: "body",
        radius_factor: 1.0,
        points: 26,
        seed_offset: 0.0,
        intensity_factor: 1.0,
        time_scale: 1.0,
        aspect: Vec2::new(1.05, 1.0),
        blur: 12.0,
        ripple_gain: 1.0,
        satellite: false,
        drift: DriftPath::STILL,
        stops: BODY_STOPS,
    },
    LayerSpec {
        name: "core",
        radius_factor: 0.55,
        points: 18,
        seed_offset: 7.9,
        intensity_factor: 0.8,
        time_scale: 1.6,
        aspect: Vec2::new(1.0, 1.0),
        blur: 8.0,
        ripple_gain: 0.35,
        satellite: false,
        drift: DriftPath {
            amp: Vec2::new(0.10, 0.08),
            freq: Vec2::new(0.33, 0.27),
            phase: Vec2::new(4.0, 2.6),
        },
        stops: CORE_STOPS,
    },
    LayerSpec {
        name: "satellite-a",
        radius_factor: 0.18,
        points: 12,
        seed_offset: 17.2,
        intensity_factor: 0.9,
        time_scale: 1.2,
        aspect: Vec2::new(1.0, 1.0),
        blur: 6.0,
        ripple_gain: 0.0,
        satellite: true,
        drift: DriftPath {
            amp: Vec2::new(1.35, 1.1),
            freq: Vec2::new(0.19, 0.26),
            phase: Vec2::new(0.7, 3.3),
        },
        stops: SAT_A_STOPS,
    },
    LayerSpec {
        name: "satellite-b",
        radius_factor: 0.12,
        points: 10,
        seed_offset: 29.8,
        intensity_factor: 0.9,
        time_scale: 1.4,
        aspect: Vec2::new(1.0, 1.0),
        blur: 5.0,
        ripple_gain: 0.0,
        satellite: true,
        drift: DriftPath {
            amp: Vec2::new(1.6, 1.3),
            freq: Vec2::new(0.12, 0.17),
            phase: Vec2::new(5.1, 1.9),
        },
        stops: SAT_B_STOPS,
    },
];

/// The ordered layer stack for a quality preset: sample counts scaled, and
/// the satellites dropped entirely on Low.
pub fn layer_stack(quality: QualityPreset) -> Vec<LayerSpec> {
    LAYERS
        .iter()
        .filter(|l| !l.satellite || quality.satellites_enabled())
        .map(|l| {
            let mut layer = *l;
            layer.points = ((l.points as f32 * quality.sample_scale()).round() as usize).max(3);
            layer
        })
        .collect()
}
