//! Browser Storage
//!
//! `window.localStorage` behind the core's storage trait.

use dashboard_core::domain::{DomainError, DomainResult};
use dashboard_core::repository::{KeyValueStorage, SnapshotRepository};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> DomainResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| DomainError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::Storage("localStorage unavailable".to_string()))
    }
}

fn js_error(err: JsValue) -> DomainError {
    DomainError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl KeyValueStorage for BrowserStorage {
    fn read(&self, key: &str) -> DomainResult<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn write(&self, key: &str, value: &str) -> DomainResult<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}

/// Repository over the browser's localStorage
pub type BrowserRepository = SnapshotRepository<BrowserStorage>;

/// Repository provided by the root component
pub fn use_repository() -> StoredValue<BrowserRepository> {
    expect_context::<StoredValue<BrowserRepository>>()
}
