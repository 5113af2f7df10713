//! Fixed-interval frame clock.
//!
//! Accumulates wall-clock time and releases it in fixed `dt` steps, so the
//! sprites advance at the configured rate no matter how often the window
//! redraws. Overlong frames are clamped rather than caught up.

use std::time::{Duration, Instant};
use tracing::warn;

/// Default tick rate: 30 Hz.
pub const DEFAULT_TICK_HZ: f64 = 30.0;

/// Default clamp on a single frame's elapsed time.
pub const DEFAULT_MAX_FRAME_TIME: f64 = 0.25;

/// Fixed-interval scheduler state.
pub struct FrameClock {
    previous_time: Instant,
    accumulator: f64,
    tick_dt: f64,
    max_frame_time: f64,
    total_time: f64,
    tick_count: u64,
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock ticking `tick_hz` times per second.
    ///
    /// Non-positive rates fall back to [`DEFAULT_TICK_HZ`].
    pub fn new(tick_hz: f64, max_frame_time: f64) -> Self {
        let tick_hz = if tick_hz > 0.0 {
            tick_hz
        } else {
            DEFAULT_TICK_HZ
        };
        Self {
            previous_time: Instant::now(),
            accumulator: 0.0,
            tick_dt: 1.0 / tick_hz,
            max_frame_time: max_frame_time.max(1.0 / tick_hz),
            total_time: 0.0,
            tick_count: 0,
            frame_count: 0,
        }
    }

    /// Measure the time since the last call and run due ticks.
    ///
    /// `update_fn(dt)` is called zero or more times with the fixed `dt`.
    /// Returns how many ticks ran.
    pub fn tick(&mut self, update_fn: impl FnMut(f64)) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;
        self.advance(frame_time, update_fn)
    }

    /// Run due ticks for an explicit `frame_time` in seconds.
    pub fn advance(&mut self, frame_time: f64, mut update_fn: impl FnMut(f64)) -> u32 {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > self.max_frame_time {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                self.max_frame_time * 1000.0
            );
            frame_time = self.max_frame_time;
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= self.tick_dt {
            update_fn(self.tick_dt);
            self.total_time += self.tick_dt;
            self.accumulator -= self.tick_dt;
            self.tick_count += 1;
            ticks += 1;
        }

        self.frame_count += 1;
        ticks
    }

    /// Time left until the next tick is due.
    pub fn until_next_tick(&self) -> Duration {
        Duration::from_secs_f64((self.tick_dt - self.accumulator).max(0.0))
    }

    /// Fixed step passed to `update_fn`.
    pub fn tick_dt(&self) -> f64 {
        self.tick_dt
    }

    /// Total ticks run.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Total calls to [`tick`](Self::tick) or [`advance`](Self::advance).
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Simulated time in seconds.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_HZ, DEFAULT_MAX_FRAME_TIME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / DEFAULT_TICK_HZ;

    #[test]
    fn test_tick_dt_value() {
        let clock = FrameClock::default();
        assert!((clock.tick_dt() - 1.0 / 30.0).abs() < f64::EPSILON * 10.0);
    }

    #[test]
    fn test_single_step() {
        let mut clock = FrameClock::default();
        let mut dts = Vec::new();
        let ticks = clock.advance(DT, |dt| dts.push(dt));
        assert_eq!(ticks, 1);
        assert_eq!(dts, vec![DT]);
        assert!(clock.accumulator.abs() < 1e-12);
    }

    #[test]
    fn test_multiple_steps() {
        let mut clock = FrameClock::default();
        let mut updates = 0u32;
        clock.advance(3.0 * DT + 1e-9, |_| updates += 1);
        assert_eq!(updates, 3);
        assert!((clock.total_time() - 3.0 * DT).abs() < 1e-12);
    }

    #[test]
    fn test_partial_frame_runs_nothing() {
        let mut clock = FrameClock::default();
        let ticks = clock.advance(0.5 * DT, |_| panic!("no tick expected"));
        assert_eq!(ticks, 0);
        assert_eq!(clock.frame_count(), 1);
        let remaining = clock.until_next_tick().as_secs_f64();
        assert!((remaining - 0.5 * DT).abs() < 1e-6);
    }

    #[test]
    fn test_max_frame_time_clamp() {
        let mut clock = FrameClock::default();
        let mut updates = 0u32;
        clock.advance(5.0, |_| updates += 1);
        let max_updates = (DEFAULT_MAX_FRAME_TIME / DT).ceil() as u32;
        assert!(
            updates <= max_updates,
            "Expected at most {max_updates} updates, got {updates}"
        );
        assert!(updates > 0);
    }

    #[test]
    fn test_negative_frame_time_ignored() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance(-1.0, |_| {}), 0);
        assert!(clock.accumulator.abs() < 1e-12);
    }

    #[test]
    fn test_invalid_rate_falls_back() {
        let clock = FrameClock::new(0.0, 0.25);
        assert!((clock.tick_dt() - DT).abs() < 1e-12);
    }

    #[test]
    fn test_total_time_matches_tick_count() {
        let mut clock = FrameClock::default();
        for ft in [0.017, 0.015, 0.040, 0.016, 0.033, 0.008, 0.090] {
            clock.advance(ft, |_| {});
        }
        let expected = clock.tick_count() as f64 * DT;
        assert!((clock.total_time() - expected).abs() < 1e-10);
        assert_eq!(clock.frame_count(), 7);
    }
}
