use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval};

/// Fixed-rate pacing for the game loop.
///
/// Wraps a tokio interval so it can sit in a `select!` next to the input
/// stream. `tick` is cancel-safe.
pub struct FrameClock {
    interval: Interval,
    last_tick: Instant,
}

impl FrameClock {
    /// Must be called from within a tokio runtime
    pub fn new(fps: u32) -> Self {
        let period = Duration::from_secs(1) / fps.max(1);
        let mut interval = interval(period);
        // A slow frame pushes the schedule back instead of bursting to catch up
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            interval,
            last_tick: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    /// Wait for the next frame boundary and return the time since the last one
    pub async fn tick(&mut self) -> Duration {
        self.interval.tick().await;
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        elapsed
    }
}
