//! Per-instance effect options
//!
//! Read once at mount time from the `data-blob` attribute of the target
//! canvas, as a JSON object. Absent or malformed JSON falls back to defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "low",
            QualityPreset::Medium => "medium",
            QualityPreset::High => "high",
        }
    }

    /// Multiplier applied to per-layer outline sample counts
    pub fn sample_scale(&self) -> f32 {
        match self {
            QualityPreset::Low => 0.5,
            QualityPreset::Medium => 1.0,
            QualityPreset::High => 1.5,
        }
    }

    /// Whether per-layer blur filters are applied
    pub fn blur_enabled(&self) -> bool {
        !matches!(self, QualityPreset::Low)
    }

    /// Whether the two satellite accent layers are rendered
    pub fn satellites_enabled(&self) -> bool {
        !matches!(self, QualityPreset::Low)
    }
}

/// Anchor for the blob's base center, as a fraction of the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Position {
    #[default]
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
}

impl Position {
    /// Fractional coordinates of the base center in surface space
    pub fn fraction(&self) -> Vec2 {
        match self {
            Position::Center => Vec2::new(0.5, 0.5),
            Position::TopLeft => Vec2::new(0.3, 0.32),
            Position::TopRight => Vec2::new(0.7, 0.32),
            Position::BottomLeft => Vec2::new(0.3, 0.7),
        }
    }
}

/// Construction-time configuration for one blob instance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlobOptions {
    /// Disables scroll-linked scale, parallax and fade
    #[serde(rename = "static")]
    pub static_mode: bool,
    /// Base-center anchor
    pub position: Position,
    /// Radius multiplier
    pub scale: f32,
    /// Noise intensity multiplier
    pub intensity: f32,
    /// Time/noise decorrelation seed; assigned at mount when absent so
    /// multiple instances never synchronize
    pub seed: Option<f32>,
    /// Rendering quality preset
    pub quality: QualityPreset,
    /// Treat as static and halve intensity (also forced by the
    /// prefers-reduced-motion media query)
    pub reduced_motion: bool,
}

impl Default for BlobOptions {
    fn default() -> Self {
        Self {
            static_mode: false,
            position: Position::Center,
            scale: 1.0,
            intensity: 1.0,
            seed: None,
            quality: QualityPreset::Medium,
            reduced_motion: false,
        }
    }
}

impl BlobOptions {
    /// Parse options from the `data-blob` JSON payload.
    ///
    /// Decorative effect: a broken payload is logged and ignored, never an
    /// error the page can observe.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(opts) => opts,
            Err(e) => {
                log::warn!("ignoring malformed data-blob options: {e}");
                Self::default()
            }
        }
    }

    /// The instance seed, or `fallback` when none was configured
    pub fn seed_or(&self, fallback: f32) -> f32 {
        self.seed.unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = BlobOptions::default();
        assert!(!opts.static_mode);
        assert_eq!(opts.position, Position::Center);
        assert_eq!(opts.scale, 1.0);
        assert_eq!(opts.quality, QualityPreset::Medium);
        assert!(opts.seed.is_none());
    }

    #[test]
    fn test_from_json() {
        let opts = BlobOptions::from_json(
            r#"{"static":true,"position":"topRight","scale":1.4,"seed":7.5,"quality":"low"}"#,
        );
        assert!(opts.static_mode);
        assert_eq!(opts.position, Position::TopRight);
        assert_eq!(opts.scale, 1.4);
        assert_eq!(opts.seed, Some(7.5));
        assert_eq!(opts.quality, QualityPreset::Low);
        // Unspecified fields keep their defaults
        assert_eq!(opts.intensity, 1.0);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let opts = BlobOptions::from_json("{not json");
        assert_eq!(opts.scale, 1.0);
        assert_eq!(opts.position, Position::Center);
    }

    #[test]
    fn test_roundtrip() {
        let mut opts = BlobOptions::default();
        opts.position = Position::BottomLeft;
        opts.seed = Some(3.25);
        let json = serde_json::to_string(&opts).unwrap();
        let back = BlobOptions::from_json(&json);
        assert_eq!(back.position, Position::BottomLeft);
        assert_eq!(back.seed, Some(3.25));
    }

    #[test]
    fn test_seed_or() {
        assert_eq!(BlobOptions::default().seed_or(9.0), 9.0);
        let opts = BlobOptions {
            seed: Some(2.0),
            ..Default::default()
        };
        assert_eq!(opts.seed_or(9.0), 2.0);
    }
}
