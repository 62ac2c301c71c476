// src/effects/timing.rs  -  Clocks, progress fractions, easing curves
use std::time::{Duration, Instant};

/// Source of "now" for frame callbacks, relative to page start
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock anchored at construction
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self { Self { start: Instant::now() } }
}

impl Default for MonotonicClock {
    fn default() -> Self { Self::new() }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration { self.start.elapsed() }
}

/// Clock that only moves when told to
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualClock {
    now: std::cell::Cell<Duration>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self { Self::default() }
    pub fn advance(&self, by: Duration) { self.now.set(self.now.get() + by); }
    pub fn set(&self, at: Duration) { self.now.set(at); }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Duration { self.now.get() }
}

/// Fraction of `duration` covered by `elapsed`, clamped to `0.0..=1.0`
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

pub fn ease_out_cubic(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(3)
}

pub fn ease_in_out_cubic(p: f64) -> f64 {
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
    }
}

/// Linear interpolation between `from` and `to`
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps() {
        let d = Duration::from_millis(2000);
        assert_eq!(progress(Duration::ZERO, d), 0.0);
        assert_eq!(progress(Duration::from_millis(1000), d), 0.5);
        assert_eq!(progress(Duration::from_millis(5000), d), 1.0);
        assert_eq!(progress(Duration::from_millis(5), Duration::ZERO), 1.0);
    }

    #[test]
    fn easing_endpoints() {
        for f in [ease_out_cubic, ease_in_out_cubic] {
            assert!(f(0.0).abs() < 1e-12);
            assert!((f(1.0) - 1.0).abs() < 1e-12);
        }
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn manual_clock_moves_on_demand() {
        let c = ManualClock::new();
        assert_eq!(c.now(), Duration::ZERO);
        c.advance(Duration::from_millis(16));
        c.advance(Duration::from_millis(16));
        assert_eq!(c.now(), Duration::from_millis(32));
        c.set(Duration::from_secs(5));
        assert_eq!(c.now(), Duration::from_secs(5));
    }
}
