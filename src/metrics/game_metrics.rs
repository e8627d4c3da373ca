use std::time::{Duration, Instant};

/// Render a duration as `MM:SS`; minutes keep counting past 59
pub fn format_clock(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Play clock and score bookkeeping that outlives a single session.
///
/// The clock runs from `on_game_start` until `on_game_over`, pauses included,
/// and then holds the final time until the next start.
pub struct GameMetrics {
    started_at: Instant,
    pub elapsed_time: Duration,
    frozen: bool,
    pub high_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            elapsed_time: Duration::ZERO,
            frozen: false,
            high_score: 0,
            games_played: 0,
        }
    }

    /// True once the current game is over and the clock holds its final time
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Refresh the play clock; a no-op after game over
    pub fn update(&mut self) {
        if !self.frozen {
            self.elapsed_time = self.started_at.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.started_at = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.frozen = false;
    }

    /// Stop the clock on the final time and record the score
    pub fn on_game_over(&mut self, final_score: u32) {
        if self.frozen {
            return;
        }
        self.update();
        self.frozen = true;
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        format_clock(self.elapsed_time)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
