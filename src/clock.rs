use std::{thread::sleep, time::{Duration, Instant}};

/// Source of monotonic time for the driving loop.
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&mut self, duration: Duration);
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        sleep(duration)
    }
}

/// Fires at most once per `interval`, checked by polling rather than scheduling.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, start: Instant) -> Self {
        Ticker { interval, last: start }
    }

    pub fn ready(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }
}
