//! Process-wide cache for resolved cross-system references.
//!
//! Values are stored type-erased and read back by type; a key read with a different type than
//! it was written with is a miss. Entries never expire, they are dropped only by `delete`,
//! `delete_prefix`, `clear`, or overwritten by a `skip_cache` resolution.

use std::{
    any::Any,
    collections::HashMap,
    future::Future,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

type CachedValue = Arc<dyn Any + Send + Sync>;

#[derive(Default)]
struct Slot {
    /// Held while the slot's factory runs so concurrent misses wait instead of re-querying
    gate: Arc<tokio::sync::Mutex<()>>,
    value: Option<CachedValue>,
}

/// Key → value cache shared by every resolver
///
/// Create one per process (or per test) and share it behind an `Arc`. Unbounded: every
/// distinct key resolved stays in memory until explicitly removed.
#[derive(Default)]
pub struct ReferenceCache {
    slots: Mutex<HashMap<String, Slot>>,
}

impl ReferenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<String, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get<T>(&self, key: &str) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.slots()
            .get(key)
            .and_then(|slot| slot.value.as_ref())
            .and_then(|value| value.downcast_ref::<T>())
            .cloned()
    }

    pub fn set<T>(&self, key: &str, value: T)
    where
        T: Send + Sync + 'static,
    {
        self.slots().entry(key.to_string()).or_default().value = Some(Arc::new(value));
    }

    /// Returns the cached value for `key`, or runs `factory` and caches whatever it produces
    ///
    /// Not-found & failed outcomes are cached like any other value. With `skip_cache` the
    /// factory always runs and its result replaces the cached entry. Concurrent calls for the
    /// same key run the factory once, later callers receive the stored result.
    pub async fn get_or_set<T, F, Fut>(&self, key: &str, factory: F, skip_cache: bool) -> T
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        if !skip_cache {
            if let Some(value) = self.get::<T>(key) {
                tracing::debug!(key = %key, "Reference cache hit");

                return value;
            }
        }

        let gate = Arc::clone(&self.slots().entry(key.to_string()).or_default().gate);
        let _guard = gate.lock().await;

        // Populated by another caller while this one waited on the gate
        if !skip_cache {
            if let Some(value) = self.get::<T>(key) {
                tracing::debug!(key = %key, "Reference cache hit after wait");

                return value;
            }
        }

        tracing::debug!(key = %key, skip_cache = skip_cache, "Reference cache miss");

        let value = factory().await;
        self.set(key, value.clone());

        value
    }

    /// Removes a single entry, returns whether a value was stored under the key
    pub fn delete(&self, key: &str) -> bool {
        self.slots()
            .remove(key)
            .map(|slot| slot.value.is_some())
            .unwrap_or(false)
    }

    /// Removes every entry whose key starts with `prefix`, returns how many held a value
    pub fn delete_prefix(&self, prefix: &str) -> usize {
        let mut slots = self.slots();
        let before = slots.values().filter(|slot| slot.value.is_some()).count();

        slots.retain(|key, _| !key.starts_with(prefix));

        before - slots.values().filter(|slot| slot.value.is_some()).count()
    }

    /// Empties the cache, returns how many entries held a value
    pub fn clear(&self) -> usize {
        let mut slots = self.slots();
        let cleared = slots.values().filter(|slot| slot.value.is_some()).count();
        slots.clear();

        cleared
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots()
            .get(key)
            .map(|slot| slot.value.is_some())
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.slots()
            .values()
            .filter(|slot| slot.value.is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
