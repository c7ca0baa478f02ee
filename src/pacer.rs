use std::{thread, time::Duration};

pub const DEFAULT_INSERT_DELAY: Duration = Duration::from_secs(5);

/// Called after every successful insert to stay under the write quota.
pub trait Pacer {
    fn pause(&mut self);
}

pub struct FixedDelay(pub Duration);

impl Default for FixedDelay {
    fn default() -> Self {
        FixedDelay(DEFAULT_INSERT_DELAY)
    }
}

impl Pacer for FixedDelay {
    fn pause(&mut self) {
        if !self.0.is_zero() {
            thread::sleep(self.0);
        }
    }
}
