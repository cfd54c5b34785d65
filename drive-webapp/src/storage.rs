//! Key-value persistence backends.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum Error {
    #[display("persistent storage is not available")]
    Unavailable,
    #[display("storage access failed: {_0}")]
    Js(String),
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// Synchronous string-to-string storage, shaped after the Web Storage API.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// In-process storage. Clones share the same entries, which makes it usable
/// as a stand-in for `localStorage` across a simulated page reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<K, V>(items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let storage = Self::new();
        storage.items.borrow_mut().extend(
            items
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        storage
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use super::{Error, KeyValueStorage, Result};
    use wasm_bindgen::JsValue;

    impl From<JsValue> for Error {
        fn from(e: JsValue) -> Self {
            Error::Js(e.as_string().unwrap_or_else(|| format!("{e:?}")))
        }
    }

    /// The origin's `window.localStorage`.
    #[derive(Clone, Debug)]
    pub struct BrowserStorage(web_sys::Storage);

    impl BrowserStorage {
        pub fn local() -> Result<Self> {
            let window = web_sys::window().ok_or(Error::Unavailable)?;
            window
                .local_storage()?
                .map(BrowserStorage)
                .ok_or(Error::Unavailable)
        }
    }

    impl KeyValueStorage for BrowserStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            Ok(self.0.get_item(key)?)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<()> {
            Ok(self.0.set_item(key, value)?)
        }

        fn remove_item(&self, key: &str) -> Result<()> {
            Ok(self.0.remove_item(key)?)
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserStorage;

/// Opens the browser's local storage, if this build and page have one.
pub fn local_storage() -> Option<Rc<dyn KeyValueStorage>> {
    #[cfg(feature = "hydrate")]
    {
        match BrowserStorage::local() {
            Ok(storage) => Some(Rc::new(storage)),
            Err(e) => {
                tracing::warn!("local storage unavailable: {}", e);
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_distinguishes_empty_from_absent() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("token").unwrap(), None);
        storage.set_item("token", "").unwrap();
        assert_eq!(storage.get_item("token").unwrap(), Some(String::new()));
        storage.remove_item("token").unwrap();
        assert!(!storage.contains_key("token"));
    }

    #[test]
    fn memory_storage_clones_share_entries() {
        let storage = MemoryStorage::with_items([("user", "u1@example.com")]);
        let other = storage.clone();
        other.set_item("token", "abc").unwrap();
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get_item("token").unwrap().as_deref(), Some("abc"));
    }

    #[test]
    fn removing_missing_key_is_fine() {
        let storage = MemoryStorage::new();
        storage.remove_item("nope").unwrap();
        assert!(storage.is_empty());
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn no_local_storage_outside_the_browser() {
        assert!(local_storage().is_none());
    }

    #[test]
    fn errors_display() {
        assert_eq!(
            Error::Unavailable.to_string(),
            "persistent storage is not available"
        );
        assert_eq!(
            Error::Js("QuotaExceededError".into()).to_string(),
            "storage access failed: QuotaExceededError"
        );
    }
}
