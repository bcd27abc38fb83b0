use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

struct Entry<T> {
    value: T,
    expires_at: Instant,
}

/// In-memory TTL cache for computed responses. Expired entries are dropped
/// lazily on the next read of their key.
pub struct TtlCache<T> {
    default_ttl: Duration,
    entries: RwLock<HashMap<String, Entry<T>>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            default_ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, key: &str) -> Option<T> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if Instant::now() <= entry.expires_at => {
                    return Some(entry.value.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        // Entry exists but is stale; evict it under the write lock.
        self.entries.write().await.remove(key);
        None
    }

    pub async fn insert(&self, key: impl Into<String>, value: T) {
        let entry = Entry {
            value,
            expires_at: Instant::now() + self.default_ttl,
        };
        self.entries.write().await.insert(key.into(), entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hit_within_ttl() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("k", vec![1, 2, 3]).await;
        assert_eq!(cache.get("k").await, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_miss_for_unknown_key() {
        let cache: TtlCache<String> = TtlCache::new(Duration::from_secs(60));
        assert!(cache.get("nope").await.is_none());
    }

    #[tokio::test]
    async fn test_expired_entry_is_evicted() {
        let cache = TtlCache::new(Duration::from_millis(10));
        cache.insert("k", 1u32).await;
        tokio::time::sleep(Duration::from_millis(25)).await;
        assert!(cache.get("k").await.is_none());
    }

    #[tokio::test]
    async fn test_insert_overwrites() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("k", 1u32).await;
        cache.insert("k", 2u32).await;
        assert_eq!(cache.get("k").await, Some(2));
    }
}
