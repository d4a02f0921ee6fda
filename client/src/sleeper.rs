use std::time::{Duration, Instant};

/// Paces a loop to one iteration per `target_delta_time`.
pub struct Sleeper {
    pub target_delta_time: Duration,
    last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    /// Sleeps off whatever is left of the current interval. Returns false if we were already late.
    pub fn sleep(&mut self) -> bool {
        let slept = match self.remaining() {
            Some(remaining) => {
                spin_sleep::sleep(remaining);
                true
            }
            None => false,
        };

        self.last_instant = Some(Instant::now());
        slept
    }

    fn remaining(&self) -> Option<Duration> {
        // Assume we're late if we've never slept yet.
        let elapsed = self.last_instant?.elapsed();
        self.target_delta_time
            .checked_sub(elapsed)
            .filter(|remaining| !remaining.is_zero())
    }
}
