//! Fixed timestep simulation tick
//!
//! The single consumer of the shared input fields the adapters write into.
//! One call advances time, the physics state machines and the ripple list by
//! exactly one tick; hidden ticks are a no-op so state stays frozen while
//! the surface is off-screen.

use crate::consts::*;
use crate::sim::physics::{step_ripples, Ripple};
use crate::sim::state::EffectState;
use glam::Vec2;

/// Inputs for a single tick, snapshotted from the adapter-written fields
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    /// Pointer position in surface space, if known
    pub pointer: Option<Vec2>,
    /// Vertical page scroll offset
    pub scroll_y: f32,
    /// Viewport height
    pub viewport_h: f32,
    /// Intersection state of the rendering surface
    pub visible: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            pointer: None,
            scroll_y: 0.0,
            viewport_h: 0.0,
            visible: true,
        }
    }
}

/// Advance the effect state by one fixed timestep.
///
/// Invisible ticks return immediately: physics and ripples stay exactly as
/// they were, and simulated time does not advance, so scrolling back into
/// view resumes the motion rather than teleporting it.
pub fn tick(state: &mut EffectState, input: &TickInput) {
    if !input.visible {
        return;
    }

    state.scroll_y = input.scroll_y;
    state.viewport_h = input.viewport_h;
    state.time += TIME_STEP;

    let center = state.center();
    let radius = state.radius();
    let base = state.base_center();

    // Pointer thresholds against the current outline; enter edge spawns a
    // ripple aimed back at the pointer.
    let entered = state.pointer.update(input.pointer, center, radius);
    if entered {
        if let Some(p) = input.pointer {
            let dir = p - center;
            state.ripples.push(Ripple::spawn(dir.y.atan2(dir.x)));
        }
    }

    // Spring chases the pointer, or relaxes home when there is none
    let target = input.pointer.unwrap_or(base);
    state.spring.step(target);

    state
        .drift
        .step(input.pointer, base, radius * MAX_DRIFT_FACTOR);

    state.stretch.step(&state.pointer, &state.spring, center, radius);

    step_ripples(&mut state.ripples);
}
