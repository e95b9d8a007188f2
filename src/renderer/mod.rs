//! Rendering: curve smoothing, layer specs, frame planning and the canvas
//! painter
//!
//! Split so the geometry→paint decision path stays pure and testable; only
//! `canvas` touches the platform.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod compositor;
pub mod curve;
pub mod layers;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
pub use compositor::{plan_frame, FramePlan, LayerPaint};
pub use curve::{smooth_closed, ClosedCurve, CurveSegment};
pub use layers::{layer_stack, DriftPath, GradientStop, LayerSpec};
