//! Fetch scheduling
//!
//! Decides when the next trace fetch is due. The first fetch is due
//! immediately; in watch mode the next one is due `interval` after the
//! previous result was delivered. At most one fetch is ever outstanding.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FetchScheduler {
    watch: bool,
    interval: Duration,
    next_due: Option<Instant>,
    in_flight: bool,
}

impl FetchScheduler {
    pub fn new(watch: bool, interval: Duration, now: Instant) -> Self {
        Self {
            watch,
            interval,
            next_due: Some(now),
            in_flight: false,
        }
    }

    /// Returns true when a fetch should be dispatched now, and marks it in flight
    pub fn should_fetch(&mut self, now: Instant) -> bool {
        if self.in_flight {
            return false;
        }
        match self.next_due {
            Some(due) if now >= due => {
                self.in_flight = true;
                self.next_due = None;
                true
            }
            _ => false,
        }
    }

    /// Record delivery of a fetch result, successful or not
    pub fn complete(&mut self, now: Instant) {
        self.in_flight = false;
        self.next_due = self.watch.then(|| now + self.interval);
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn is_watching(&self) -> bool {
        self.watch
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_fetches_once() {
        let start = Instant::now();
        let mut scheduler = FetchScheduler::new(false, Duration::from_secs(5), start);
        assert!(scheduler.should_fetch(start));
        scheduler.complete(start);
        assert!(!scheduler.should_fetch(start + Duration::from_secs(60)));
        assert_eq!(scheduler.next_due(), None);
    }
}
