#![forbid(unsafe_code)]

//! Animated two-stop gradient behind every screen.
//!
//! The gradient starts at purple over indigo and drifts linearly toward a
//! pair of random colors, then back, forever. The random pair is drawn once
//! when the background is created.

use std::time::Duration;

use insight_core::animation::{Animation, Oscillator};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const PURPLE: Self = Self::new(128, 0, 128);
    pub const INDIGO: Self = Self::new(75, 0, 130);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend, `t` clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| -> u8 {
            let v = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    fn random(rng: &mut SmallRng) -> Self {
        Self::new(rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>())
    }
}

/// Default sweep length.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct GradientBackground {
    start: [Rgb; 2],
    target: [Rgb; 2],
    oscillator: Oscillator,
}

impl GradientBackground {
    /// Seeded background. The same seed always produces the same colors.
    #[must_use]
    pub fn seeded(period: Duration, seed: u64) -> Self {
        Self::with_rng(period, SmallRng::seed_from_u64(seed))
    }

    /// Background seeded from the operating system.
    #[must_use]
    pub fn from_entropy(period: Duration) -> Self {
        Self::with_rng(period, SmallRng::from_os_rng())
    }

    fn with_rng(period: Duration, mut rng: SmallRng) -> Self {
        let target = [Rgb::random(&mut rng), Rgb::random(&mut rng)];
        Self {
            start: [Rgb::PURPLE, Rgb::INDIGO],
            target,
            oscillator: Oscillator::new(period),
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        self.oscillator.tick(dt);
    }

    /// Top and bottom stops for the current frame.
    #[must_use]
    pub fn stops(&self) -> [Rgb; 2] {
        let t = self.oscillator.value();
        [
            self.start[0].lerp(self.target[0], t),
            self.start[1].lerp(self.target[1], t),
        ]
    }

    /// Color at `row` of `rows`, top to bottom.
    #[must_use]
    pub fn color_at(&self, row: u16, rows: u16) -> Rgb {
        let [top, bottom] = self.stops();
        if rows <= 1 {
            return top;
        }
        top.lerp(bottom, f32::from(row) / f32::from(rows - 1))
    }

    #[must_use]
    pub fn targets(&self) -> [Rgb; 2] {
        self.target
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.oscillator.period()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_purple_over_indigo() {
        let bg = GradientBackground::seeded(DEFAULT_PERIOD, 7);
        assert_eq!(bg.stops(), [Rgb::PURPLE, Rgb::INDIGO]);
    }

    #[test]
    fn same_seed_same_targets() {
        let a = GradientBackground::seeded(DEFAULT_PERIOD, 42);
        let b = GradientBackground::seeded(DEFAULT_PERIOD, 42);
        assert_eq!(a.targets(), b.targets());
    }

    #[test]
    fn reaches_targets_then_returns() {
        let mut bg = GradientBackground::seeded(Duration::from_secs(5), 3);
        let targets = bg.targets();

        bg.tick(Duration::from_millis(4999));
        let near = bg.stops();
        assert!(near[0].r.abs_diff(targets[0].r) <= 1);

        bg.tick(Duration::from_millis(1));
        assert_eq!(bg.stops(), targets);

        bg.tick(Duration::from_secs(5));
        assert_eq!(bg.stops(), [Rgb::PURPLE, Rgb::INDIGO]);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert_eq!(black.lerp(white, 0.0), black);
        assert_eq!(black.lerp(white, 1.0), white);
        assert_eq!(black.lerp(white, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(black.lerp(white, 7.0), white);
    }

    #[test]
    fn vertical_blend() {
        let bg = GradientBackground::seeded(DEFAULT_PERIOD, 1);
        assert_eq!(bg.color_at(0, 10), Rgb::PURPLE);
        assert_eq!(bg.color_at(9, 10), Rgb::INDIGO);
        assert_eq!(bg.color_at(0, 1), Rgb::PURPLE);
    }
}
