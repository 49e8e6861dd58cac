//! Single-slot cache keyed by the inputs of a derivation.

use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Caches the last derived value together with the key it was derived from.
///
/// The value is recomputed only when a caller presents a key that differs
/// from the cached one.
#[derive(Debug)]
pub struct Memo<K, V> {
    slot: RwLock<Option<(K, V)>>,
    computations: AtomicUsize,
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
            computations: AtomicUsize::new(0),
        }
    }

    /// Return the cached value for `key`, computing it if the key changed.
    pub fn get_or_compute(&self, key: K, compute: impl FnOnce() -> V) -> V {
        {
            let slot = self.slot.read().unwrap_or_else(|p| p.into_inner());
            if let Some((cached_key, value)) = slot.as_ref() {
                if *cached_key == key {
                    return value.clone();
                }
            }
        }

        let value = compute();
        self.computations.fetch_add(1, Ordering::Relaxed);
        let mut slot = self.slot.write().unwrap_or_else(|p| p.into_inner());
        *slot = Some((key, value.clone()));
        value
    }

    /// How many times a value has been computed.
    pub fn computations(&self) -> usize {
        self.computations.load(Ordering::Relaxed)
    }
}

impl<K: PartialEq, V: Clone> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
