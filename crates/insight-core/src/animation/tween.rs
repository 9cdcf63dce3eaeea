#![forbid(unsafe_code)]

//! Eased interpolation between two absolute values.
//!
//! A [`Tween`] maps elapsed time onto `from → to` through an easing curve.
//! It is what turns a snapped panel target into visible motion: the caller
//! starts a tween at the pre-snap offset and reads [`Tween::current`] each
//! frame.
//!
//! # Failure Modes
//!
//! - Zero duration: the tween is complete immediately and sits at `to`.
//! - Non-finite endpoints are the caller's problem; they are not sanitized.

use std::time::Duration;

use super::{Animation, EasingFn, ease_in_out};

#[derive(Debug, Clone)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFn,
}

impl Tween {
    /// Tween from `from` to `to` over `duration` with ease-in-out.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing: ease_in_out,
        }
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress through the duration, before easing.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32
    }

    /// The interpolated value at the current time.
    #[must_use]
    pub fn current(&self) -> f64 {
        let eased = f64::from(self.value());
        self.from + (self.to - self.from) * eased
    }

    /// Value at the start of the tween.
    #[inline]
    #[must_use]
    pub fn start_value(&self) -> f64 {
        self.from
    }

    /// Value the tween settles at.
    #[inline]
    #[must_use]
    pub fn end_value(&self) -> f64 {
        self.to
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.progress()).clamp(0.0, 1.0)
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
