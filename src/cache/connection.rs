//! Staleness-aware cache of data-source connection handles

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use crate::cache::clock::{Clock, SystemClock};

/// A cached handle together with the wall-clock time it was stored
struct CacheEntry<H> {
    handle: H,
    cached_at: DateTime<Utc>,
}

/// Process-wide cache of connection handles, keyed by resource identifier.
///
/// Each identifier maps to at most one entry; [`store`](Self::store)
/// unconditionally overwrites. Entries are never removed: a stale entry stays
/// in the map and a later lookup with an older reference timestamp will serve
/// it again. Reads and writes are per-key atomic, so a `store` racing a
/// `lookup` on the same identifier observes either the old or the new entry,
/// never a torn one.
pub struct ConnectionCache<H> {
    entries: DashMap<String, CacheEntry<H>>,
    clock: Arc<dyn Clock>,
}

impl<H: Clone> ConnectionCache<H> {
    /// Create an empty cache using the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty cache with an injected time source
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
        }
    }

    /// Cache `handle` for `resource_id`, replacing any previous entry.
    ///
    /// The entry's timestamp is taken from the clock at call time. Always
    /// succeeds; the cache takes no part in the handle's lifecycle beyond
    /// storage and eviction by overwrite.
    pub fn store(&self, resource_id: &str, handle: H) {
        let cached_at = self.clock.now();
        debug!(resource_id, %cached_at, "caching connection handle");
        self.entries
            .insert(resource_id.to_string(), CacheEntry { handle, cached_at });
    }

    /// Return the cached handle for `resource_id` if it is still fresh.
    ///
    /// `resource_last_modified_at` is the caller's record of when the
    /// underlying resource definition last changed; `None` is treated as the
    /// Unix epoch, so an entry for a never-modified resource is always fresh.
    /// An entry cached strictly before that timestamp is stale and reported
    /// as a miss, but deliberately left in the map.
    ///
    /// Absence is the only signal: callers cannot distinguish "never stored"
    /// from "stale".
    pub fn lookup(
        &self,
        resource_id: &str,
        resource_last_modified_at: Option<DateTime<Utc>>,
    ) -> Option<H> {
        let Some(entry) = self.entries.get(resource_id) else {
            debug!(resource_id, "no cached connection");
            return None;
        };

        let reference = resource_last_modified_at.unwrap_or(DateTime::UNIX_EPOCH);
        if entry.cached_at < reference {
            debug!(
                resource_id,
                cached_at = %entry.cached_at,
                last_modified = %reference,
                "cached connection is stale"
            );
            return None;
        }

        Some(entry.handle.clone())
    }
}

impl<H: Clone> Default for ConnectionCache<H> {
    fn default() -> Self {
        Self::new()
    }
}
