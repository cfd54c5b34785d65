//! Write-through mirroring of a [`Writable<String>`] into a storage slot.
//!
//! The store stays the source of truth. Storage failures are logged and
//! otherwise ignored: a failed read seeds the empty string, a failed write or
//! removal leaves the in-memory value untouched.

use std::fmt;
use std::rc::Rc;

use crate::storage::KeyValueStorage;
use crate::store::{Subscription, Writable};

/// One named slot of a persistent key-value storage.
#[derive(Clone)]
pub struct Bridge {
    storage: Rc<dyn KeyValueStorage>,
    key: String,
}

impl fmt::Debug for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bridge").field("key", &self.key).finish()
    }
}

impl Bridge {
    pub fn new(storage: Rc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The persisted value, or the empty string when the slot is unset or
    /// cannot be read.
    pub fn seed(&self) -> String {
        match self.storage.get_item(&self.key) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("could not read `{}` from storage: {}", self.key, e);
                String::new()
            }
        }
    }

    /// Subscribes the slot to `store`. Every notification overwrites the slot,
    /// including with the empty string. The current value is written right
    /// away since subscribing notifies.
    #[must_use = "dropping the subscription stops the write-through"]
    pub fn attach(&self, store: &Writable<String>) -> Subscription {
        let bridge = self.clone();
        store.subscribe(move |value| bridge.write(value))
    }

    /// Deletes the slot, leaving it absent rather than empty.
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove_item(&self.key) {
            tracing::warn!("could not remove `{}` from storage: {}", self.key, e);
        }
    }

    fn write(&self, value: &str) {
        tracing::trace!("persisting `{}`", self.key);
        if let Err(e) = self.storage.set_item(&self.key, value) {
            tracing::warn!("could not write `{}` to storage: {}", self.key, e);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::storage::{self, MemoryStorage};
    use crate::store::tests::with_runtime;
    use std::cell::Cell;

    /// A storage whose every call fails, counting the attempts.
    #[derive(Default)]
    pub(crate) struct BrokenStorage {
        pub(crate) calls: Cell<usize>,
    }

    impl KeyValueStorage for BrokenStorage {
        fn get_item(&self, _: &str) -> storage::Result<Option<String>> {
            self.calls.set(self.calls.get() + 1);
            Err(storage::Error::Js("SecurityError".into()))
        }

        fn set_item(&self, _: &str, _: &str) -> storage::Result<()> {
            self.calls.set(self.calls.get() + 1);
            Err(storage::Error::Js("QuotaExceededError".into()))
        }

        fn remove_item(&self, _: &str) -> storage::Result<()> {
            self.calls.set(self.calls.get() + 1);
            Err(storage::Error::Unavailable)
        }
    }

    #[test]
    fn seed_reads_existing_slot() {
        let storage = MemoryStorage::with_items([("token", "abc123")]);
        let bridge = Bridge::new(Rc::new(storage), "token");
        assert_eq!(bridge.seed(), "abc123");
    }

    #[test]
    fn seed_defaults_to_empty() {
        let bridge = Bridge::new(Rc::new(MemoryStorage::new()), "token");
        assert_eq!(bridge.seed(), "");
    }

    #[test]
    fn attach_writes_through_every_change() {
        with_runtime(|| {
            let storage = MemoryStorage::new();
            let bridge = Bridge::new(Rc::new(storage.clone()), "user");
            let store = Writable::new(String::new());
            let _sub = bridge.attach(&store);
            assert_eq!(storage.get_item("user").unwrap().as_deref(), Some(""));
            store.set("u1@example.com".into());
            assert_eq!(
                storage.get_item("user").unwrap().as_deref(),
                Some("u1@example.com")
            );
            store.set(String::new());
            assert_eq!(storage.get_item("user").unwrap().as_deref(), Some(""));
        });
    }

    #[test]
    fn detached_bridge_stops_writing() {
        with_runtime(|| {
            let storage = MemoryStorage::new();
            let bridge = Bridge::new(Rc::new(storage.clone()), "user");
            let store = Writable::new(String::new());
            bridge.attach(&store).unsubscribe();
            store.set("ignored".into());
            assert_eq!(storage.get_item("user").unwrap().as_deref(), Some(""));
        });
    }

    #[test]
    fn clear_removes_slot() {
        let storage = MemoryStorage::with_items([("token", "abc")]);
        let bridge = Bridge::new(Rc::new(storage.clone()), "token");
        bridge.clear();
        assert!(!storage.contains_key("token"));
    }

    #[test]
    fn failures_are_swallowed() {
        with_runtime(|| {
            let broken = Rc::new(BrokenStorage::default());
            let bridge = Bridge::new(broken.clone(), "token");
            assert_eq!(bridge.seed(), "");
            let store = Writable::new("abc".to_string());
            let _sub = bridge.attach(&store);
            store.set("def".into());
            bridge.clear();
            assert_eq!(store.get(), "def");
            assert_eq!(broken.calls.get(), 4);
        });
    }
}
