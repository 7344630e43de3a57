/// Millisecond timestamps for the driver loop.
///
/// The session only ever sees the numbers a `Clock` hands out, so tests can
/// feed synthetic time instead.

use std::time::Instant;

pub trait Clock {
    /// Monotonically non-decreasing milliseconds.
    fn now_ms(&self) -> u64;
}

/// Milliseconds since the clock was created.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
