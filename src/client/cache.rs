//! Optional memoization of raw response bodies keyed by request URL.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};

/// Storage for raw response bodies, keyed by the exact request URL.
///
/// Implementations must be safe to share between tasks.
pub trait RequestCache: Send + Sync {
    fn get(&self, url: &str) -> Option<String>;

    fn insert(&self, url: &str, body: String);

    fn invalidate(&self, url: &str);

    fn clear(&self);
}

#[derive(Debug, Default)]
struct MemoryCacheState {
    bodies: HashMap<String, String>,
    order: VecDeque<String>,
}

/// Bounded in-memory [`RequestCache`].
///
/// Holds at most `capacity` bodies and evicts the oldest insertion first.
/// A capacity of zero stores nothing.
#[derive(Debug)]
pub struct MemoryCache {
    capacity: usize,
    state: Mutex<MemoryCacheState>,
}

impl MemoryCache {
    pub const DEFAULT_CAPACITY: usize = 128;

    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(MemoryCacheState::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryCacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl RequestCache for MemoryCache {
    fn get(&self, url: &str) -> Option<String> {
        self.lock().bodies.get(url).cloned()
    }

    fn insert(&self, url: &str, body: String) {
        if self.capacity == 0 {
            return;
        }
        let mut state = self.lock();
        if let Some(existing) = state.bodies.get_mut(url) {
            *existing = body;
            return;
        }
        while state.order.len() >= self.capacity {
            let Some(oldest) = state.order.pop_front() else {
                break;
            };
            state.bodies.remove(&oldest);
            tracing::trace!(url = %oldest, "evicted cached response");
        }
        state.order.push_back(url.to_owned());
        state.bodies.insert(url.to_owned(), body);
    }

    fn invalidate(&self, url: &str) {
        let mut state = self.lock();
        if state.bodies.remove(url).is_some() {
            state.order.retain(|it| it != url);
        }
    }

    fn clear(&self) {
        let mut state = self.lock();
        state.bodies.clear();
        state.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_returns_bodies_by_exact_url() {
        let cache = MemoryCache::new(4);
        cache.insert("https://example.invalid/a?q=1", "one".to_owned());
        assert_eq!(cache.get("https://example.invalid/a?q=1").as_deref(), Some("one"));
        assert_eq!(cache.get("https://example.invalid/a?q=2"), None);
    }

    #[test]
    fn evicts_oldest_entry_when_full() {
        let cache = MemoryCache::new(2);
        cache.insert("a", "1".to_owned());
        cache.insert("b", "2".to_owned());
        cache.insert("c", "3".to_owned());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b").as_deref(), Some("2"));
        assert_eq!(cache.get("c").as_deref(), Some("3"));
    }

    #[test]
    fn replacing_an_entry_keeps_its_position() {
        let cache = MemoryCache::new(2);
        cache.insert("a", "1".to_owned());
        cache.insert("b", "2".to_owned());
        cache.insert("a", "1b".to_owned());
        cache.insert("c", "3".to_owned());
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b").as_deref(), Some("2"));
    }

    #[test]
    fn invalidate_and_clear() {
        let cache = MemoryCache::new(4);
        cache.insert("a", "1".to_owned());
        cache.insert("b", "2".to_owned());
        cache.invalidate("a");
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.len(), 1);

        cache.invalidate("missing");
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let cache = MemoryCache::new(0);
        cache.insert("a", "1".to_owned());
        assert!(cache.is_empty());
        assert_eq!(MemoryCache::default().capacity(), MemoryCache::DEFAULT_CAPACITY);
    }
}
