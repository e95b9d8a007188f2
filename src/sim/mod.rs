//! Deterministic simulation module
//!
//! All effect behavior lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No rendering or platform dependencies
//! - Identical inputs always produce identical state and geometry

pub mod geometry;
pub mod noise;
pub mod physics;
pub mod scroll;
pub mod state;
pub mod tick;

pub use geometry::{sample_ring, sample_satellite_ring, RingSpec};
pub use noise::{deform, ripple_contribution, satellite_deform, DirectionalBias};
pub use physics::{
    step_ripples, MagneticDrift, PointerState, Ripple, SpringState, StretchState,
};
pub use scroll::{scroll_scale, ScrollFade};
pub use state::EffectState;
pub use tick::{tick, TickInput};
