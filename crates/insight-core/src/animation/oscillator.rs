#![forbid(unsafe_code)]

//! Linear back-and-forth motion that never completes.
//!
//! An [`Oscillator`] sweeps its value `0 → 1` over one period and then
//! `1 → 0` over the next, forever. This is the "repeat forever, auto-reverse"
//! animation used for ambient background motion.

use std::time::Duration;

use super::Animation;

#[derive(Debug, Clone)]
pub struct Oscillator {
    period: Duration,
    /// Position within the current sweep.
    phase: Duration,
    forward: bool,
}

impl Oscillator {
    /// A zero period is clamped to 1ns.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_nanos(1)),
            phase: Duration::ZERO,
            forward: true,
        }
    }

    #[inline]
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether the current sweep runs `0 → 1`.
    #[inline]
    #[must_use]
    pub fn is_forward(&self) -> bool {
        self.forward
    }

    /// Advance by `dt` and return how many times the direction flipped.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        let period = self.period.as_nanos();
        let total = self.phase.as_nanos() + dt.as_nanos();
        let flips = total / period;
        let rest = total % period;
        self.phase = Duration::from_nanos(rest as u64);
        if flips % 2 == 1 {
            self.forward = !self.forward;
        }
        flips.min(u128::from(u32::MAX)) as u32
    }
}

impl Animation for Oscillator {
    fn tick(&mut self, dt: Duration) {
        self.advance(dt);
    }

    fn is_complete(&self) -> bool {
        false
    }

    fn value(&self) -> f32 {
        let t = (self.phase.as_secs_f64() / self.period.as_secs_f64()) as f32;
        let t = t.clamp(0.0, 1.0);
        if self.forward { t } else { 1.0 - t }
    }

    fn reset(&mut self) {
        self.phase = Duration::ZERO;
        self.forward = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC_5: Duration = Duration::from_secs(5);

    #[test]
    fn sweeps_up_then_down() {
        let mut osc = Oscillator::new(SEC_5);
        assert_eq!(osc.value(), 0.0);

        assert_eq!(osc.advance(Duration::from_millis(2500)), 0);
        assert!((osc.value() - 0.5).abs() < 1e-6);

        assert_eq!(osc.advance(Duration::from_millis(3750)), 1);
        assert!(!osc.is_forward());
        assert!((osc.value() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn long_tick_counts_every_flip() {
        let mut osc = Oscillator::new(SEC_5);
        assert_eq!(osc.advance(Duration::from_secs(20)), 4);
        assert!(osc.is_forward());
        assert_eq!(osc.value(), 0.0);
    }

    #[test]
    fn never_completes() {
        let mut osc = Oscillator::new(Duration::ZERO);
        osc.tick(Duration::from_secs(1));
        assert!(!osc.is_complete());
        osc.reset();
        assert_eq!(osc.value(), 0.0);
    }
}
