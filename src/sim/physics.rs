//! Pointer-driven physical state machines
//!
//! Three coupled per-instance state machines (damped spring, magnetic drift,
//! stretch accumulator) plus the transient ripple list. All updates are
//! per-tick and deterministic; the constants live in [`crate::consts`].

use glam::Vec2;

use crate::consts::*;
use crate::{normalize_angle, shortest_angle_delta};

/// Raw pointer position plus thresholds derived from the current blob radius
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    /// Pointer position in surface space, if one is known
    pub pos: Option<Vec2>,
    /// Within [`POINTER_NEAR_FACTOR`] radii of the center
    pub is_near: bool,
    /// Within the blob outline proper
    pub is_inside: bool,
}

impl PointerState {
    /// Update position and derived flags against the current center/radius.
    /// Returns true on the enter edge (outside → inside).
    pub fn update(&mut self, pos: Option<Vec2>, center: Vec2, radius: f32) -> bool {
        let was_inside = self.is_inside;
        self.pos = pos;
        match pos {
            Some(p) => {
                let dist = p.distance(center);
                self.is_near = dist < radius * POINTER_NEAR_FACTOR;
                self.is_inside = dist < radius * POINTER_INSIDE_FACTOR;
            }
            None => {
                self.is_near = false;
                self.is_inside = false;
            }
        }
        self.is_inside && !was_inside
    }
}

/// Heavily damped second-order follower of the pointer
#[derive(Debug, Clone, Copy)]
pub struct SpringState {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl SpringState {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }

    /// One integration step toward `target`. Heavily damped: slow viscous
    /// tracking rather than visible oscillation.
    pub fn step(&mut self, target: Vec2) {
        self.vel += (target - self.pos) * SPRING_STIFFNESS;
        self.vel *= SPRING_DAMPING;
        self.pos += self.vel;
    }

    /// Current speed in surface units per tick
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Lazy, clamped center offset biasing the blob toward the pointer
#[derive(Debug, Clone, Copy, Default)]
pub struct MagneticDrift {
    pub offset: Vec2,
}

impl MagneticDrift {
    /// First-order lag toward a clamped pointer-relative target. Never
    /// overshoots; with no pointer the target is the origin.
    pub fn step(&mut self, pointer: Option<Vec2>, base_center: Vec2, max_drift: f32) {
        let target = match pointer {
            Some(p) => ((p - base_center) * MAGNET_PULL).clamp_length_max(max_drift),
            None => Vec2::ZERO,
        };
        self.offset += (target - self.offset) * MAGNET_STRENGTH;
    }
}

/// Capped directional bulge built up by sustained outward pointer motion
#[derive(Debug, Clone, Copy, Default)]
pub struct StretchState {
    /// In [0, [`STRETCH_MAX`]]
    pub amount: f32,
    /// Bulge direction, radians
    pub angle: f32,
}

impl StretchState {
    /// Per-tick update. Builds up only while the pointer is inside AND the
    /// spring is actually moving outward past the dead zone; otherwise decays
    /// geometrically (slower while the pointer is still near).
    pub fn step(
        &mut self,
        pointer: &PointerState,
        spring: &SpringState,
        center: Vec2,
        radius: f32,
    ) {
        if pointer.is_inside {
            let pull = spring.pos - center;
            let dist = pull.length();
            let dead = radius * STRETCH_DEAD_ZONE;
            if dist > dead && spring.speed() > STRETCH_MIN_SPEED {
                let target = ((dist - dead) / (radius * STRETCH_RANGE)).clamp(0.0, STRETCH_MAX);
                self.amount = (self.amount + (target - self.amount) * STRETCH_EASE).min(STRETCH_MAX);
                let to = pull.y.atan2(pull.x);
                self.angle = normalize_angle(
                    self.angle + shortest_angle_delta(self.angle, to) * STRETCH_ANGLE_EASE,
                );
                return;
            }
        }
        let decay = if pointer.is_near {
            STRETCH_DECAY_NEAR
        } else {
            STRETCH_DECAY_FAR
        };
        self.amount *= decay;
        if self.amount < 1e-4 {
            self.amount = 0.0;
        }
    }
}

/// One transient angular perturbation, spawned on a pointer-enter edge
#[derive(Debug, Clone, Copy)]
pub struct Ripple {
    /// Monotonically increasing wave phase
    pub phase: f32,
    /// In (0, 1], decays geometrically each tick
    pub strength: f32,
    /// Direction of the triggering pointer, fixed at spawn
    pub angle: f32,
    /// Phase advance per tick
    pub speed: f32,
}

impl Ripple {
    pub fn spawn(angle: f32) -> Self {
        Self {
            phase: 0.0,
            strength: 1.0,
            angle,
            speed: RIPPLE_SPEED,
        }
    }
}

/// Advance and cull the ripple list for one tick
pub fn step_ripples(ripples: &mut Vec<Ripple>) {
    for r in ripples.iter_mut() {
        r.phase += r.speed;
        r.strength *= RIPPLE_DECAY;
    }
    ripples.retain(|r| r.strength >= RIPPLE_CUTOFF);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_pointer_enter_edge() {
        let center = Vec2::new(100.0, 100.0);
        let mut pointer = PointerState::default();

        // Far outside: no edge
        assert!(!pointer.update(Some(Vec2::new(500.0, 500.0)), center, 50.0));
        assert!(!pointer.is_inside);

        // Entering fires exactly once
        assert!(pointer.update(Some(center), center, 50.0));
        assert!(pointer.is_inside);
        assert!(!pointer.update(Some(Vec2::new(110.0, 100.0)), center, 50.0));

        // Leave and re-enter fires again
        assert!(!pointer.update(Some(Vec2::new(300.0, 100.0)), center, 50.0));
        assert!(pointer.update(Some(Vec2::new(120.0, 100.0)), center, 50.0));
    }

    #[test]
    fn test_pointer_lost_clears_flags() {
        let center = Vec2::ZERO;
        let mut pointer = PointerState::default();
        pointer.update(Some(center), center, 50.0);
        assert!(pointer.is_inside);
        pointer.update(None, center, 50.0);
        assert!(!pointer.is_inside);
        assert!(!pointer.is_near);
    }

    #[test]
    fn test_spring_converges_toward_stationary_target() {
        let target = Vec2::new(200.0, 150.0);
        let mut spring = SpringState::new(Vec2::ZERO);
        let initial = spring.pos.distance(target);
        let mut max_dist = 0.0f32;
        for _ in 0..600 {
            spring.step(target);
            max_dist = max_dist.max(spring.pos.distance(target));
        }
        assert!(
            spring.pos.distance(target) < 1.0,
            "spring did not converge"
        );
        // Viscous tracking: it may barely overshoot but never swings out
        // further from the target than where it started.
        assert!(max_dist <= initial + 1e-3, "spring diverged: {max_dist}");
    }

    #[test]
    fn test_drift_approaches_but_never_exceeds_cap() {
        let base = Vec2::new(400.0, 300.0);
        let mut drift = MagneticDrift::default();
        // Pointer absurdly far away: the unclamped target would be huge
        let pointer = Some(Vec2::new(1.0e6, -1.0e6));
        for _ in 0..2000 {
            drift.step(pointer, base, 60.0);
            assert!(drift.offset.length() <= 60.0 + 1e-3);
        }
        // It should actually get close to the cap, not stall at zero
        assert!(drift.offset.length() > 55.0);
    }

    #[test]
    fn test_stretch_cap() {
        let center = Vec2::ZERO;
        let pointer = PointerState {
            pos: Some(Vec2::new(90.0, 0.0)),
            is_near: true,
            is_inside: true,
        };
        // A spring flying outward well past the dead zone
        let spring = SpringState {
            pos: Vec2::new(500.0, 0.0),
            vel: Vec2::new(10.0, 0.0),
        };
        let mut stretch = StretchState::default();
        for _ in 0..5000 {
            stretch.step(&pointer, &spring, center, 100.0);
            assert!(stretch.amount >= 0.0);
            assert!(stretch.amount <= STRETCH_MAX);
        }
        assert!(stretch.amount > 0.5, "sustained pull should near the cap");
    }

    #[test]
    fn test_stretch_decays_when_not_pulling() {
        let center = Vec2::ZERO;
        let mut stretch = StretchState {
            amount: 0.5,
            angle: 0.0,
        };
        let outside = PointerState::default();
        let spring = SpringState::new(Vec2::ZERO);
        stretch.step(&outside, &spring, center, 100.0);
        assert!((stretch.amount - 0.5 * STRETCH_DECAY_FAR).abs() < 1e-6);

        let near = PointerState {
            pos: Some(Vec2::new(120.0, 0.0)),
            is_near: true,
            is_inside: false,
        };
        let before = stretch.amount;
        stretch.step(&near, &spring, center, 100.0);
        assert!((stretch.amount - before * STRETCH_DECAY_NEAR).abs() < 1e-6);
    }

    #[test]
    fn test_stretch_angle_takes_shortest_path() {
        let center = Vec2::ZERO;
        let pointer = PointerState {
            pos: Some(Vec2::new(-50.0, 1.0)),
            is_near: true,
            is_inside: true,
        };
        // Pull pointing just above -x: target angle just below +π
        let spring = SpringState {
            pos: Vec2::new(-80.0, 2.0),
            vel: Vec2::new(-10.0, 0.0),
        };
        let mut stretch = StretchState {
            amount: 0.2,
            angle: -PI + 0.05,
        };
        stretch.step(&pointer, &spring, center, 100.0);
        // Shortest path from just-above -π to just-below +π is a small
        // NEGATIVE step (wrapping), not a near-2π positive sweep.
        let angle = stretch.angle;
        assert!(
            angle < -PI + 0.05 || angle > PI - 0.5,
            "angle jumped the long way around: {angle}"
        );
    }

    #[test]
    fn test_ripple_lifecycle() {
        let mut ripples = vec![Ripple::spawn(1.0)];
        let mut last = ripples[0].strength;
        let mut ticks = 0;
        while !ripples.is_empty() {
            step_ripples(&mut ripples);
            if let Some(r) = ripples.first() {
                assert!(r.strength < last, "strength must strictly decrease");
                last = r.strength;
            }
            ticks += 1;
            assert!(ticks < 200, "ripple never culled");
        }
        // 0.96^k < 0.01 at k ≈ 113
        assert!((100..130).contains(&ticks), "culled after {ticks} ticks");
    }

    #[test]
    fn test_ripple_cull_same_tick_as_cutoff() {
        let mut ripples = vec![Ripple {
            phase: 3.0,
            strength: RIPPLE_CUTOFF * 1.01,
            angle: 0.0,
            speed: RIPPLE_SPEED,
        }];
        step_ripples(&mut ripples);
        assert!(ripples.is_empty());
    }

    proptest! {
        #[test]
        fn prop_drift_clamped_for_any_pointer(
            px in -1.0e5f32..1.0e5,
            py in -1.0e5f32..1.0e5,
            steps in 1usize..300,
        ) {
            let base = Vec2::new(500.0, 400.0);
            let mut drift = MagneticDrift::default();
            for _ in 0..steps {
                drift.step(Some(Vec2::new(px, py)), base, 80.0);
                prop_assert!(drift.offset.length() <= 80.0 + 1e-2);
                prop_assert!(drift.offset.is_finite());
            }
        }

        #[test]
        fn prop_stretch_amount_stays_in_range(
            seq in proptest::collection::vec((any::<bool>(), -200.0f32..200.0, -200.0f32..200.0), 1..200),
        ) {
            let center = Vec2::ZERO;
            let mut stretch = StretchState::default();
            for (inside, sx, sy) in seq {
                let pointer = PointerState {
                    pos: Some(Vec2::new(sx, sy)),
                    is_near: inside,
                    is_inside: inside,
                };
                let spring = SpringState {
                    pos: Vec2::new(sx, sy),
                    vel: Vec2::new(sx * 0.05, sy * 0.05),
                };
                stretch.step(&pointer, &spring, center, 100.0);
                prop_assert!((0.0..=STRETCH_MAX).contains(&stretch.amount));
            }
        }
    }
}
