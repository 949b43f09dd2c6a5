//! Advisory frame pacing.
//!
//! The event loop polls input continuously and only *attempts* a draw once a
//! target interval has elapsed since the last present. The interval is
//! derived from the active display's refresh rate, minus one millisecond so
//! the present lands just ahead of vsync instead of blocking event handling
//! behind it. This is advisory: a missed interval defers the draw to the next
//! poll and never drops input.

use std::time::{Duration, Instant};

/// Gates draw attempts to roughly one per display refresh.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    last_present: Option<Instant>,
}

impl FramePacer {
    /// Creates a pacer for a display refreshing at `refresh_rate_hz`.
    pub fn new(refresh_rate_hz: u32) -> Self {
        Self {
            interval: Self::interval_for(refresh_rate_hz),
            last_present: None,
        }
    }

    /// Re-derives the interval, e.g. after the window moved to another
    /// display. The refresh rate may change between any two frames.
    pub fn set_refresh_rate(&mut self, refresh_rate_hz: u32) {
        self.interval = Self::interval_for(refresh_rate_hz);
    }

    /// The current target interval between presents.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// `(1000 / refresh_rate - 1)` ms, floored at 0 for 1000hz+ displays.
    fn interval_for(refresh_rate_hz: u32) -> Duration {
        let ms = (1000 / u64::from(refresh_rate_hz.max(1))).saturating_sub(1);
        Duration::from_millis(ms)
    }

    /// Returns true when a draw should be attempted at `now`.
    ///
    /// Always true before the first present.
    pub fn should_draw(&self, now: Instant) -> bool {
        match self.last_present {
            Some(last) => now.duration_since(last) > self.interval,
            None => true,
        }
    }

    /// Records that a present finished at `now`.
    pub fn mark_present(&mut self, now: Instant) {
        self.last_present = Some(now);
    }
}
