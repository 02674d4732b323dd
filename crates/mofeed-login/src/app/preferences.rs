//! Session-scoped language preference.

use crate::core::ports::PreferenceStore;
use crate::error::PreferenceError;
use gloo::console;
use gloo::storage::{SessionStorage, Storage};

pub(crate) struct SessionPreferences {
    key: String,
}

impl SessionPreferences {
    pub(crate) fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

impl PreferenceStore for SessionPreferences {
    fn load_language(&self) -> Option<String> {
        SessionStorage::get::<String>(&self.key)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }

    fn store_language(&self, code: &str) -> Result<(), PreferenceError> {
        SessionStorage::set(&self.key, code).map_err(|err| {
            log_storage_error("set", &self.key, &err.to_string());
            PreferenceError {
                detail: err.to_string(),
            }
        })
    }
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::warn!("session storage operation failed", operation, key, detail);
}
