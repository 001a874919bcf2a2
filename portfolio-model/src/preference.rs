//! Persisted dark-mode preference.
//!
//! One key, written as a JSON boolean (`"true"` / `"false"`). On read only the
//! exact text `"true"` means dark mode; any other non-empty value means light
//! mode. A slot that is missing, empty or unreadable means "no preference":
//! callers get `None` from [`PreferenceStore::load`] and the failure is only
//! logged.

use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("preference storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read preference '{key}': {message}")]
    Read { key: String, message: String },

    #[error("failed to write preference '{key}': {message}")]
    Write { key: String, message: String },
}

/// Key-value slot backing the store (browser localStorage, or memory in tests).
pub trait PreferenceSlot {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

impl<S: PreferenceSlot + ?Sized> PreferenceSlot for &S {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).write(key, value)
    }
}

#[derive(Debug)]
pub struct PreferenceStore<S> {
    slot: S,
    key: String,
}

impl<S: PreferenceSlot> PreferenceStore<S> {
    pub fn new(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn try_load(&self) -> Result<Option<bool>, PreferenceError> {
        let raw = match self.slot.read(&self.key)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(None),
        };

        let dark_mode = raw == "true";
        if !dark_mode && raw != "false" {
            tracing::warn!(
                key = %self.key,
                value = %raw,
                "Unexpected theme preference, using light mode"
            );
        }
        Ok(Some(dark_mode))
    }

    pub fn load(&self) -> Option<bool> {
        match self.try_load() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Ignoring stored theme preference: {}", e);
                None
            }
        }
    }

    pub fn try_save(&self, dark_mode: bool) -> Result<(), PreferenceError> {
        let encoded = serde_json::Value::Bool(dark_mode).to_string();
        self.slot.write(&self.key, &encoded)
    }

    pub fn save(&self, dark_mode: bool) {
        if let Err(e) = self.try_save(dark_mode) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
    }
}

/// In-memory slot. `unavailable()` builds one that fails every call.
#[derive(Debug, Default)]
pub struct MemorySlot {
    values: RefCell<HashMap<String, String>>,
    unavailable: bool,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            values: RefCell::default(),
            unavailable: true,
        }
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let slot = Self::new();
        slot.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        slot
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        if self.unavailable {
            return Err(PreferenceError::Unavailable("memory slot disabled".into()));
        }
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if self.unavailable {
            return Err(PreferenceError::Unavailable("memory slot disabled".into()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "darkMode";

    #[test]
    fn missing_value_loads_as_none() {
        let store = PreferenceStore::new(MemorySlot::new(), KEY);
        assert_eq!(store.try_load().unwrap(), None);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn saved_value_is_a_json_boolean() {
        let slot = MemorySlot::new();
        let store = PreferenceStore::new(&slot, KEY);

        store.save(false);
        assert_eq!(slot.get(KEY).as_deref(), Some("false"));
        assert_eq!(store.load(), Some(false));

        store.save(true);
        assert_eq!(slot.get(KEY).as_deref(), Some("true"));
        assert_eq!(store.load(), Some(true));
    }

    #[test]
    fn only_exact_true_means_dark() {
        for value in ["yes", "1", "False ", "TRUE", " true", "dark"] {
            let store = PreferenceStore::new(MemorySlot::with_value(KEY, value), KEY);
            assert_eq!(store.try_load().unwrap(), Some(false), "stored {value:?}");
            assert_eq!(store.load(), Some(false), "stored {value:?}");
        }
    }

    #[test]
    fn empty_value_is_no_preference() {
        let store = PreferenceStore::new(MemorySlot::with_value(KEY, ""), KEY);
        assert_eq!(store.try_load().unwrap(), None);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn unavailable_storage_is_not_fatal() {
        let store = PreferenceStore::new(MemorySlot::unavailable(), KEY);
        assert!(store.try_save(true).is_err());
        store.save(true);
        assert_eq!(store.load(), None);
    }
}
