use portfolio_model::{PreferenceError, PreferenceSlot, PreferenceStore};

use crate::config::site_config;

/// `window.localStorage`, looked up on every call so a storage that appears
/// late (or is revoked) is picked up.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSlot;

impl LocalStorageSlot {
    fn storage(&self) -> Result<web_sys::Storage, PreferenceError> {
        let window =
            web_sys::window().ok_or_else(|| PreferenceError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| PreferenceError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| PreferenceError::Unavailable("localStorage is disabled".into()))
    }
}

impl PreferenceSlot for LocalStorageSlot {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| PreferenceError::Read {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| PreferenceError::Write {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }
}

pub fn theme_preference_store() -> PreferenceStore<LocalStorageSlot> {
    PreferenceStore::new(LocalStorageSlot, site_config().preference_key.clone())
}
