//! Time source for playback ticks.

use std::time::Duration;

/// Waits out one playback tick.
pub trait Ticker {
    fn tick(&self, period: Duration);
}

/// Real-time ticker backed by `thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepTicker;

impl Ticker for SleepTicker {
    fn tick(&self, period: Duration) {
        std::thread::sleep(period);
    }
}
