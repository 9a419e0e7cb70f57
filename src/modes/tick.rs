use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Periodic tick source that can be started, stopped and re-timed
///
/// A stopped source never fires, so it can sit in a `select!` loop at all
/// times.
pub struct TickSource {
    period: Duration,
    timer: Option<Interval>,
}

impl TickSource {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            timer: None,
        }
    }

    pub fn start(&mut self, period: Duration) {
        self.period = period;
        self.timer = Some(Self::timer(period));
    }

    pub fn stop(&mut self) {
        self.timer = None;
    }

    /// Change the period; a running source fires next one new period from now
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
        if self.timer.is_some() {
            self.timer = Some(Self::timer(period));
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Wait for the next tick; pends forever while stopped
    pub async fn tick(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    fn timer(period: Duration) -> Interval {
        // First tick one period after starting, not immediately
        let mut timer = interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
        timer
    }
}
