use std::time::{Duration, Instant};

/// Play time of the current game, frozen while paused
#[derive(Debug, Clone, Copy, Default)]
struct GameClock {
    banked: Duration,
    running_since: Option<Instant>,
}

impl GameClock {
    fn restart(&mut self, now: Instant) {
        self.banked = Duration::ZERO;
        self.running_since = Some(now);
    }

    fn freeze(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.banked += now.saturating_duration_since(since);
        }
    }

    fn thaw(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    fn elapsed(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self.banked + now.saturating_duration_since(since),
            None => self.banked,
        }
    }
}

/// Session-wide statistics, kept in memory for the life of the process
///
/// Only games that end in a collision count towards `games_played` and
/// `high_score`; abandoned games leave both untouched.
#[derive(Debug, Default)]
pub struct GameMetrics {
    pub high_score: u32,
    pub games_played: u32,
    clock: GameClock,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset and start the game clock
    pub fn on_game_start(&mut self) {
        self.clock.restart(Instant::now());
    }

    pub fn on_pause(&mut self) {
        self.clock.freeze(Instant::now());
    }

    pub fn on_resume(&mut self) {
        self.clock.thaw(Instant::now());
    }

    /// Stop the clock without recording a result
    pub fn on_game_abandoned(&mut self) {
        self.clock.freeze(Instant::now());
    }

    /// Record a finished game; returns true if it set a new high score
    pub fn on_game_over(&mut self, final_score: u32) -> bool {
        self.clock.freeze(Instant::now());
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
            return true;
        }
        false
    }

    /// Time spent playing the current (or last) game, pauses excluded
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed(Instant::now())
    }

    pub fn format_time(&self) -> String {
        format_duration(self.elapsed())
    }
}

fn format_duration(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
