use std::time::Duration;

/// Turns variable frame times into fixed-interval simulation ticks.
#[derive(Clone, Debug)]
pub struct Pacer {
    interval: f64,
    accumulated: f64,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f64(),
            accumulated: 0.0,
        }
    }

    /// Feed elapsed seconds; returns true when a tick is due.
    /// Leftover time carries into the next interval. At most one tick per
    /// call: when more than a whole interval is still pending the backlog
    /// is dropped.
    pub fn advance(&mut self, elapsed: f32) -> bool {
        self.accumulated += f64::from(elapsed.max(0.0));
        if self.accumulated < self.interval {
            return false;
        }

        self.accumulated -= self.interval;
        if self.accumulated >= self.interval {
            self.accumulated = 0.0;
        }
        true
    }
}
