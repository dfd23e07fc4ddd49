use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Outcome of one limiter check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
    pub allowed: bool,
    pub wait_seconds: u64,
    /// Free slots left in the window after this decision.
    pub remaining: usize,
}

/// Global sliding-window limiter: at most `quota` admissions in any
/// trailing `window`. Not keyed per client.
///
/// Prune, check and append happen under one lock so concurrent requests
/// can never push the log past the quota.
pub struct SlidingWindowLimiter {
    quota: usize,
    window: Duration,
    log: Mutex<VecDeque<Instant>>,
}

impl SlidingWindowLimiter {
    pub fn new(quota: usize, window: Duration) -> Self {
        Self {
            quota,
            window,
            log: Mutex::new(VecDeque::with_capacity(quota)),
        }
    }

    pub fn quota(&self) -> usize {
        self.quota
    }

    pub fn admit(&self) -> Admission {
        self.admit_at(Instant::now())
    }

    pub fn admit_at(&self, now: Instant) -> Admission {
        // A poisoned log is still a valid log
        let mut log = self.log.lock().unwrap_or_else(|e| e.into_inner());

        while let Some(oldest) = log.front() {
            if now.saturating_duration_since(*oldest) >= self.window {
                log.pop_front();
            } else {
                break;
            }
        }

        if log.len() >= self.quota {
            let wait_seconds = match log.front() {
                Some(oldest) => {
                    let left = self
                        .window
                        .saturating_sub(now.saturating_duration_since(*oldest));
                    left.as_secs_f64().ceil().max(1.0) as u64
                }
                // quota of zero: nothing will ever free up sooner than a full window
                None => self.window.as_secs().max(1),
            };
            return Admission {
                allowed: false,
                wait_seconds,
                remaining: 0,
            };
        }

        log.push_back(now);
        Admission {
            allowed: true,
            wait_seconds: 0,
            remaining: self.quota - log.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter() -> SlidingWindowLimiter {
        SlidingWindowLimiter::new(2, Duration::from_secs(60))
    }

    #[test]
    fn third_request_in_window_is_rejected() {
        let limiter = limiter();
        let start = Instant::now();

        let first = limiter.admit_at(start);
        assert!(first.allowed);
        assert_eq!(first.remaining, 1);

        let second = limiter.admit_at(start + Duration::from_secs(10));
        assert!(second.allowed);
        assert_eq!(second.remaining, 0);

        let third = limiter.admit_at(start + Duration::from_secs(20));
        assert!(!third.allowed);
        assert_eq!(third.wait_seconds, 40);
    }

    #[test]
    fn wait_is_always_between_one_and_window() {
        let limiter = limiter();
        let start = Instant::now();
        limiter.admit_at(start);
        limiter.admit_at(start);

        let late = limiter.admit_at(start + Duration::from_millis(59_900));
        assert!(!late.allowed);
        assert_eq!(late.wait_seconds, 1);

        let early = limiter.admit_at(start);
        assert_eq!(early.wait_seconds, 60);
    }

    #[test]
    fn old_entries_are_pruned() {
        let limiter = limiter();
        let start = Instant::now();
        limiter.admit_at(start);
        limiter.admit_at(start + Duration::from_secs(1));

        let later = limiter.admit_at(start + Duration::from_secs(60));
        assert!(later.allowed);
        // only the t=1s entry survived alongside the new one
        assert_eq!(later.remaining, 0);

        let again = limiter.admit_at(start + Duration::from_secs(61));
        assert!(again.allowed);
    }

    #[test]
    fn rejected_requests_do_not_consume_quota() {
        let limiter = limiter();
        let start = Instant::now();
        limiter.admit_at(start);
        limiter.admit_at(start);
        for s in 1..30 {
            assert!(!limiter.admit_at(start + Duration::from_secs(s)).allowed);
        }
        assert!(limiter.admit_at(start + Duration::from_secs(60)).allowed);
    }

    #[test]
    fn concurrent_admissions_never_exceed_quota() {
        let limiter = std::sync::Arc::new(SlidingWindowLimiter::new(5, Duration::from_secs(60)));
        let handles: Vec<_> = (0..32)
            .map(|_| {
                let limiter = limiter.clone();
                std::thread::spawn(move || limiter.admit().allowed)
            })
            .collect();

        let admitted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|allowed| *allowed)
            .count();
        assert_eq!(admitted, 5);
    }
}
