//! Frame pacing.
//!
//! Headless runs step with the fixed `1 / tick_rate` delta. Real-time runs
//! wait on a tokio interval and feed the measured delta, clamped so a stall
//! never turns into one huge simulation step.

use std::time::Duration;

use duel_core::TimingConfig;
use tokio::time::{Instant, Interval, MissedTickBehavior};

#[derive(Clone, Debug)]
pub struct FrameClock {
    timing: TimingConfig,
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new(timing: TimingConfig) -> Self {
        Self { timing, last: None }
    }

    pub fn fixed_dt(&self) -> f32 {
        self.timing.fixed_dt()
    }

    pub fn period(&self) -> Duration {
        Duration::from_secs_f32(self.fixed_dt())
    }

    /// Clamps a raw delta to `[0, max_frame_dt]`.
    pub fn clamp(&self, raw: f32) -> f32 {
        self.timing.clamp_dt(raw)
    }

    /// Delta since the previous call, clamped. The first call yields the
    /// fixed delta.
    pub fn measure(&mut self, now: Instant) -> f32 {
        let raw = match self.last.replace(now) {
            Some(previous) => now.saturating_duration_since(previous).as_secs_f32(),
            None => self.fixed_dt(),
        };
        self.clamp(raw)
    }

    /// Ticker for real-time runs. Late ticks are delayed rather than burst.
    pub fn interval(&self) -> Interval {
        let mut interval = tokio::time::interval(self.period());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
