//! Durable key/value storage behind a trait seam.
//!
//! The session store persists its token and user id through
//! [`SessionStorage`] rather than touching `localStorage` directly, so the
//! state machine can be driven in plain unit tests. [`BrowserStorage`] is
//! the real implementation; off-browser builds (SSR) get inert no-ops.
//!
//! Writes are best-effort: a full or unavailable storage medium is ignored,
//! the session simply won't survive a reload.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Minimal key/value interface over the durable storage medium.
pub trait SessionStorage {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str);
    /// Remove the entry under `key`; no-op if absent.
    fn remove(&self, key: &str);
}

/// `localStorage`-backed storage. Every operation is a no-op returning
/// `None` outside a browser environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage for driving the session store in unit tests.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStorage {
    /// Pre-populated storage, as if a previous session had persisted state.
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let storage = Self::default();
        for (key, value) in entries {
            storage.set(key, value);
        }
        storage
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

#[cfg(test)]
impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
