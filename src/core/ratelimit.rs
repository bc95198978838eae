//! Fixed-window attempt counters keyed by client identity, used to throttle
//! repeated failures (e.g. authentication attempts) elsewhere in the system.
//!
//! Instances are explicit and injectable rather than module-level state, so
//! tests can construct isolated limiters and control the clock.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::time::Clock;

#[derive(Debug, Clone, Copy)]
struct WindowState {
    count: u32,
    window_start: DateTime<Utc>,
}

/// Fixed-window counter store. A single mutex-guarded map is the one
/// authoritative source; every access compares the stored window start
/// against the clock and resets expired windows before counting.
pub struct AttemptLimiter<C: Clock> {
    max_attempts: u32,
    window: Duration,
    clock: C,
    counters: Mutex<HashMap<String, WindowState>>,
}

impl<C: Clock> AttemptLimiter<C> {
    pub fn new(max_attempts: u32, window: Duration, clock: C) -> Self {
        Self {
            max_attempts,
            window,
            clock,
            counters: Mutex::new(HashMap::new()),
        }
    }

    /// Records one failed attempt for `key` and returns the count inside the
    /// current window, including this one.
    pub fn register_failure(&self, key: &str) -> u32 {
        let now = self.clock.now();
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        let state = counters
            .entry(key.to_string())
            .or_insert(WindowState {
                count: 0,
                window_start: now,
            });
        if now - state.window_start >= self.window {
            state.count = 0;
            state.window_start = now;
        }
        state.count += 1;
        state.count
    }

    /// True when `key` has exhausted its attempts inside the current window.
    pub fn is_blocked(&self, key: &str) -> bool {
        let now = self.clock.now();
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        match counters.get(key) {
            Some(state) if now - state.window_start < self.window => {
                state.count >= self.max_attempts
            }
            _ => false,
        }
    }

    /// Drops the counter for `key`, e.g. after a successful attempt.
    pub fn clear(&self, key: &str) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    /// Clock whose current time advances only when told to. Clones share the
    /// same offset.
    #[derive(Clone)]
    struct SteppingClock {
        base: DateTime<Utc>,
        offset_secs: Arc<AtomicI64>,
    }

    impl SteppingClock {
        fn new() -> Self {
            Self {
                base: Utc::now(),
                offset_secs: Arc::new(AtomicI64::new(0)),
            }
        }

        fn advance_secs(&self, secs: i64) {
            self.offset_secs.fetch_add(secs, Ordering::SeqCst);
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            self.base + Duration::seconds(self.offset_secs.load(Ordering::SeqCst))
        }
    }

    #[test]
    fn blocks_after_max_attempts_within_window() {
        let clock = SteppingClock::new();
        let limiter = AttemptLimiter::new(3, Duration::minutes(5), clock.clone());
        assert!(!limiter.is_blocked("client-a"));
        for _ in 0..3 {
            limiter.register_failure("client-a");
        }
        assert!(limiter.is_blocked("client-a"));
        assert!(!limiter.is_blocked("client-b"));
    }

    #[test]
    fn expired_window_resets_the_count() {
        let clock = SteppingClock::new();
        let limiter = AttemptLimiter::new(2, Duration::minutes(5), clock.clone());
        limiter.register_failure("client");
        limiter.register_failure("client");
        assert!(limiter.is_blocked("client"));

        clock.advance_secs(5 * 60);
        assert!(!limiter.is_blocked("client"));
        assert_eq!(limiter.register_failure("client"), 1);
    }

    #[test]
    fn clear_forgets_the_key() {
        let clock = SteppingClock::new();
        let limiter = AttemptLimiter::new(1, Duration::minutes(5), clock.clone());
        limiter.register_failure("client");
        assert!(limiter.is_blocked("client"));
        limiter.clear("client");
        assert!(!limiter.is_blocked("client"));
    }
}
