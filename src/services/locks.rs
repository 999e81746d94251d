use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as TokioMutex, OwnedMutexGuard};

/// (user id, product slug)
pub type InteractionKey = (String, String);

/// Async locks handed out per (user, product) pair.
///
/// Requests for the same pair queue behind each other, requests for other
/// pairs never wait. Slots are dropped once nobody holds or waits for them.
#[derive(Default)]
pub struct KeyedLocks {
    slots: Mutex<HashMap<InteractionKey, Arc<TokioMutex<()>>>>,
}

pub struct KeyGuard<'a> {
    locks: &'a KeyedLocks,
    key: InteractionKey,
    guard: Option<OwnedMutexGuard<()>>,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, user_id: &str, slug: &str) -> KeyGuard<'_> {
        let key = (user_id.to_string(), slug.to_string());
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots.entry(key.clone()).or_default().clone()
        };

        let guard = slot.lock_owned().await;
        KeyGuard {
            locks: self,
            key,
            guard: Some(guard),
        }
    }

    fn release(&self, key: &InteractionKey) {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        // the map holds the last reference: no holder, no waiter
        if slots.get(key).map_or(false, |slot| Arc::strong_count(slot) == 1) {
            slots.remove(key);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Drop for KeyGuard<'_> {
    fn drop(&mut self) {
        self.guard.take();
        self.locks.release(&self.key);
    }
}
