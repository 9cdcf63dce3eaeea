#![forbid(unsafe_code)]

//! Damped spring motion in absolute units.
//!
//! `acceleration = -stiffness × (position - target) - damping × velocity`,
//! integrated with semi-implicit Euler. Large `dt` values are split into
//! 4ms steps so stiff springs stay stable at low frame rates.
//!
//! Unlike [`Tween`](super::Tween) a spring has no fixed duration: it is
//! complete once both displacement and velocity fall below their rest
//! thresholds, at which point it snaps exactly onto the target.
//!
//! # Invariants
//!
//! 1. Stiffness is at least 0.1 and damping at least 0.0.
//! 2. A spring at rest stays at rest until `retarget()` or `reset()`.
//! 3. `value()` is progress from the initial position toward the target,
//!    clamped to `[0.0, 1.0]`.

use std::time::Duration;

use super::Animation;

const MAX_STEP_SECS: f64 = 0.004;
const MIN_STIFFNESS: f64 = 0.1;
const REST_DISPLACEMENT: f64 = 0.001;
const REST_VELOCITY: f64 = 0.01;

#[derive(Debug, Clone)]
pub struct Spring {
    initial: f64,
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    at_rest: bool,
}

impl Spring {
    /// Spring from `initial` toward `target` with stiffness 170 and
    /// damping 26 (a slight overshoot).
    #[must_use]
    pub fn new(initial: f64, target: f64) -> Self {
        Self {
            initial,
            position: initial,
            velocity: 0.0,
            target,
            stiffness: 170.0,
            damping: 26.0,
            at_rest: initial == target,
        }
    }

    #[must_use]
    pub fn with_stiffness(mut self, k: f64) -> Self {
        self.stiffness = k.max(MIN_STIFFNESS);
        self
    }

    #[must_use]
    pub fn with_damping(mut self, c: f64) -> Self {
        self.damping = c.max(0.0);
        self
    }

    /// Critically damped: fastest settle with no overshoot.
    #[must_use]
    pub fn critically_damped(mut self) -> Self {
        self.damping = 2.0 * self.stiffness.sqrt();
        self
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Point the spring at a new target, keeping its current momentum.
    pub fn retarget(&mut self, target: f64) {
        if (self.target - target).abs() > REST_DISPLACEMENT {
            self.initial = self.position;
            self.target = target;
            self.at_rest = false;
        }
    }

    fn step(&mut self, dt: f64) {
        let acceleration =
            -self.stiffness * (self.position - self.target) - self.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }
}

impl Animation for Spring {
    fn tick(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_SECS);
            self.step(step);
            remaining -= step;
        }
        if (self.position - self.target).abs() < REST_DISPLACEMENT
            && self.velocity.abs() < REST_VELOCITY
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }

    fn is_complete(&self) -> bool {
        self.at_rest
    }

    fn value(&self) -> f32 {
        let span = self.target - self.initial;
        if span.abs() < f64::EPSILON {
            return 1.0;
        }
        (((self.position - self.initial) / span) as f32).clamp(0.0, 1.0)
    }

    fn reset(&mut self) {
        self.position = self.initial;
        self.velocity = 0.0;
        self.at_rest = self.initial == self.target;
    }
}
