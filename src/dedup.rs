//! Replay protection for webhook updates.
//!
//! Telegram retries deliveries it considers unacknowledged, so the same
//! `update_id` can arrive more than once. The cache keeps a bounded window
//! of recently-seen ids and drops replays inside it. Eviction is
//! insertion-ordered, which tracks arrival order closely enough since
//! update ids are near-monotonic.

use std::collections::{HashSet, VecDeque};

use parking_lot::Mutex;

#[derive(Debug, Default)]
struct Inner {
    seen: HashSet<i64>,
    order: VecDeque<i64>,
}

/// Bounded concurrent set of recently-processed update ids.
#[derive(Debug)]
pub struct UpdateDedup {
    inner: Mutex<Inner>,
    capacity: usize,
}

impl UpdateDedup {
    /// Creates a cache remembering at most `capacity` update ids.
    ///
    /// A zero capacity disables replay protection entirely.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            capacity,
        }
    }

    /// Records an update id. Returns `false` if it was already inside the
    /// window, in which case the caller should drop the update.
    pub fn insert(&self, update_id: i64) -> bool {
        if self.capacity == 0 {
            return true;
        }

        let mut inner = self.inner.lock();
        if !inner.seen.insert(update_id) {
            return false;
        }
        inner.order.push_back(update_id);
        while inner.order.len() > self.capacity {
            if let Some(evicted) = inner.order.pop_front() {
                inner.seen.remove(&evicted);
            }
        }
        true
    }

    /// Number of ids currently remembered.
    pub fn len(&self) -> usize {
        self.inner.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
