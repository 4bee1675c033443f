use std::{
    cell::Cell,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};

/// A monotonic timestamp source, measured from the Unix epoch so that it also tells the
/// time of day.
pub trait Clock {
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Wall-clock time at startup, advanced by a monotonic timer afterwards.
pub struct SystemClock {
    started: Instant,
    epoch_offset: Duration,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            started: Instant::now(),
            // A clock set before 1970 just starts at the epoch
            epoch_offset: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch_offset + self.started.elapsed()
    }
}

/// A clock that only moves when told to, optionally by a fixed amount on every read.
pub struct ManualClock {
    now: Cell<Duration>,
    tick: Duration,
}

impl ManualClock {
    pub fn new(start: Duration) -> Self {
        ManualClock {
            now: Cell::new(start),
            tick: Duration::ZERO,
        }
    }

    /// A clock that advances by `tick` after every read.
    pub fn ticking(start: Duration, tick: Duration) -> Self {
        ManualClock {
            now: Cell::new(start),
            tick,
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        let now = self.now.get();
        self.now.set(now + self.tick);
        now
    }
}
