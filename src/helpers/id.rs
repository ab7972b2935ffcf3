use parking_lot::Mutex;

use super::timestamp_nanos;

/// Time based account ids.
///
/// Values are wall-clock nanoseconds, bumped past the last issued value so one
/// process never hands out the same id twice. Two instances behind a load
/// balancer, or a clock stepping backwards across a restart, can still collide.
pub struct IdGenerator {
    last: Mutex<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator {
            last: Mutex::new(0),
        }
    }

    pub fn next_id(&self) -> u64 {
        let mut last = self.last.lock();
        let id = timestamp_nanos().max(*last + 1);
        *last = id;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
