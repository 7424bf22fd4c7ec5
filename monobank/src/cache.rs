//! Per-endpoint response memoization with a time-to-live.
//!
//! Each endpoint family owns one [`CacheSlot`]. Whether a read may be served
//! from the slot is decided by [`evaluate`], a pure function over the slot's
//! last fetch time, the family TTL, the caller's `force` flag and the current
//! time. A stale decision stamps the slot *before* the network call, so a
//! failed refresh still holds off retries until the next TTL expiry.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde_json::Value;

/// Outcome of a freshness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Serve the cached value.
    Fresh,
    /// Refetch; `stamp` becomes the slot's new last fetch time.
    Stale { stamp: u64 },
}

/// Decide whether a slot last fetched at `last_fetch` must be refreshed at `now`.
///
/// A slot that was never fetched (`last_fetch == 0`), a zero TTL, an elapsed
/// time of at least `ttl` seconds, or `force` all yield [`Freshness::Stale`].
pub fn evaluate(last_fetch: u64, ttl: u64, force: bool, now: u64) -> Freshness {
    if force || last_fetch == 0 || ttl == 0 || now.saturating_sub(last_fetch) >= ttl {
        Freshness::Stale { stamp: now }
    } else {
        Freshness::Fresh
    }
}

/// Last fetched value of one endpoint family.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheSlot {
    /// Epoch seconds of the last refresh decision; 0 when never fetched.
    pub last_fetch: u64,
    pub value: Option<Value>,
}

impl CacheSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply [`evaluate`] and stamp the slot when a refresh is due.
    pub fn should_refresh(&mut self, ttl: u64, force: bool, now: u64) -> bool {
        match evaluate(self.last_fetch, ttl, force, now) {
            Freshness::Stale { stamp } => {
                self.last_fetch = stamp;
                true
            }
            Freshness::Fresh => false,
        }
    }

    pub fn store(&mut self, value: Value) {
        self.value = Some(value);
    }

    /// Cached value, or `Value::Null` when nothing was stored yet.
    pub fn current(&self) -> Value {
        self.value.clone().unwrap_or(Value::Null)
    }
}

/// Source of the current Unix time in seconds.
pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0)
    }
}

/// Manually advanced clock, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(now: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(now)),
        }
    }

    pub fn set(&self, now: u64) {
        self.now.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}
