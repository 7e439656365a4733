use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of "now" in epoch milliseconds.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

const MS_PER_MIN: i64 = 60_000;

/// Wall-clock time, truncated to the start of the current minute so the
/// open segment ending "now" is a whole number of minutes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        ms - ms % MS_PER_MIN
    }
}

/// Deterministic clock that only moves when told to. Clones share the same
/// instant, so a test can hand one copy to a monitor and advance another.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    now_ms: Arc<AtomicI64>,
}

impl VirtualClock {
    pub fn starting_at(now_ms: i64) -> Self {
        Self {
            now_ms: Arc::new(AtomicI64::new(now_ms)),
        }
    }

    pub fn set(&self, now_ms: i64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }

    /// Move forward by `by`; returns the new instant.
    pub fn advance(&self, by: Duration) -> i64 {
        let delta = by.as_millis() as i64;
        self.now_ms.fetch_add(delta, Ordering::SeqCst) + delta
    }

    pub fn advance_minutes(&self, minutes: u64) -> i64 {
        self.advance(Duration::from_secs(minutes * 60))
    }
}

impl Clock for VirtualClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}
