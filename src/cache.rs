use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use serde_json::Value;

/// Entries older than this are treated as absent.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Value,
    stored_at: Instant,
}

/// Keyed, time-expiring store of previously fetched payloads.
///
/// The store is explicitly constructed and injected into the client, so
/// tests and independent clients get isolated instances. There is no
/// eviction beyond TTL-on-read: a stale entry is ignored, not removed, and
/// the next successful fetch for its key overwrites it.
#[derive(Debug)]
pub struct CacheStore {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

#[derive(Debug, Clone)]
pub struct CacheStats {
    pub size: usize,
    pub keys: Vec<String>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the payload for `key` while it is fresh, otherwise `None`.
    pub fn get(&self, key: &str) -> Option<Value> {
        let entries = self.lock();
        let entry = entries.get(key)?;
        if entry.stored_at.elapsed() >= self.ttl {
            return None;
        }
        Some(entry.payload.clone())
    }

    /// Stores `payload` under `key`, overwriting any prior entry.
    pub fn set(&self, key: &str, payload: Value) {
        self.lock().insert(
            key.to_string(),
            CacheEntry {
                payload,
                stored_at: Instant::now(),
            },
        );
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Introspection only; stale entries still count until overwritten.
    pub fn stats(&self) -> CacheStats {
        let entries = self.lock();
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        CacheStats {
            size: entries.len(),
            keys,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn zero_ttl_expires_immediately() {
        let store = CacheStore::with_ttl(Duration::ZERO);
        store.set("k", json!({"a": 1}));
        assert_eq!(store.get("k"), None);
        // The stale entry is ignored, not deleted.
        assert_eq!(store.stats().size, 1);
    }

    #[test]
    fn overwrite_refreshes_timestamp() {
        let store = CacheStore::with_ttl(Duration::from_secs(60));
        store.set("k", json!(1));
        store.set("k", json!(2));
        assert_eq!(store.get("k"), Some(json!(2)));
        assert_eq!(store.stats().size, 1);
    }
}
