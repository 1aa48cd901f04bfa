//! Keyed async locks.

use std::{
    collections::HashMap,
    hash::Hash,
    sync::{Arc, Mutex},
};

use tokio::sync::OwnedMutexGuard;

/// Registry of async mutexes keyed by `K`.
///
/// Clones share the same registry. Locks for different keys never contend; locks for the
/// same key are handed out in FIFO order by `tokio::sync::Mutex`. Entries are removed once
/// no task holds or waits for them, so the registry only ever holds keys in use.
pub struct KeyedLock<K> {
    locks: Arc<Mutex<HashMap<K, Arc<tokio::sync::Mutex<()>>>>>,
}

/// Lock registry keyed by football-data.org team ID.
pub type TeamLocks = KeyedLock<i64>;

/// Guard returned by [`KeyedLock::lock`], releases the key on drop.
///
/// Also held while waiting for the mutex, so a cancelled `lock` call removes the entry
/// if nobody else holds or waits for the key.
pub struct KeyedLockGuard<K: Eq + Hash + Clone> {
    key: K,
    guard: Option<OwnedMutexGuard<()>>,
    locks: Arc<Mutex<HashMap<K, Arc<tokio::sync::Mutex<()>>>>>,
}

impl<K> Clone for KeyedLock<K> {
    fn clone(&self) -> Self {
        Self {
            locks: Arc::clone(&self.locks),
        }
    }
}

impl<K> Default for KeyedLock<K> {
    fn default() -> Self {
        Self {
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<K: Eq + Hash + Clone> KeyedLock<K> {
    /// Waits until no other task holds the lock for `key` and acquires it
    pub async fn lock(&self, key: K) -> KeyedLockGuard<K> {
        let mutex = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            Arc::clone(locks.entry(key.clone()).or_default())
        };

        let mut pending = KeyedLockGuard {
            key,
            guard: None,
            locks: Arc::clone(&self.locks),
        };

        // The wait future owns `mutex` and is dropped before `pending` on cancellation
        pending.guard = Some(mutex.lock_owned().await);

        pending
    }

    /// Number of keys currently locked or waited on
    pub fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Eq + Hash + Clone> Drop for KeyedLockGuard<K> {
    fn drop(&mut self) {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());

        // Release the mutex first so the strong count reflects waiters only
        drop(self.guard.take());

        if let Some(mutex) = locks.get(&self.key) {
            // One reference held by the map itself
            if Arc::strong_count(mutex) == 1 {
                locks.remove(&self.key);
            }
        }
    }
}
