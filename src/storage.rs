//! Preference persistence boundary.
//!
//! Behaviors read and write string preferences through [`PreferenceStore`]
//! instead of touching `window.localStorage` directly, so their logic runs
//! against [`MemoryStore`] in tests and as a fallback when the browser denies
//! storage access.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::BehaviorError;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), BehaviorError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BehaviorError> {
        (**self).set(key, value)
    }
}

/// Process-local store; contents last for the page lifetime.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BehaviorError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// # Errors
    ///
    /// Returns [`BehaviorError::StorageUnavailable`] when the browser has no
    /// local storage or denies access to it.
    pub fn open(window: &web_sys::Window) -> Result<Self, BehaviorError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(BehaviorError::StorageUnavailable),
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key:?} failed: {err:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BehaviorError> {
        self.storage.set_item(key, value)?;
        Ok(())
    }
}

/// Local storage when the browser allows it, memory otherwise.
#[cfg(feature = "hydrate")]
pub fn browser_store(window: &web_sys::Window) -> Box<dyn PreferenceStore> {
    match LocalStore::open(window) {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!("{err}; preferences will not persist");
            Box::new(MemoryStore::new())
        }
    }
}
