//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use dashboard_core::{DomainResult, Snapshot, Theme};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Everything that is persisted under the data key
    pub snapshot: Snapshot,
    /// Theme preference (persisted separately)
    pub theme: Theme,
}

impl AppState {
    pub fn new(snapshot: Snapshot, theme: Theme) -> Self {
        Self { snapshot, theme }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run a command against a copy of the snapshot and publish the copy on success.
///
/// A rejected command is logged and the store is left untouched.
pub fn store_apply<R>(store: &AppStore, command: impl FnOnce(&mut Snapshot) -> DomainResult<R>) -> Option<R> {
    let mut next = store.snapshot().get_untracked();
    match command(&mut next) {
        Ok(result) => {
            store.snapshot().set(next);
            Some(result)
        }
        Err(err) => {
            tracing::warn!(error = %err, "command rejected");
            None
        }
    }
}

/// Like [`store_apply`] for reorders: publishes only when something moved
pub fn store_reorder(store: &AppStore, reorder: impl FnOnce(&mut Snapshot) -> DomainResult<bool>) {
    let mut next = store.snapshot().get_untracked();
    match reorder(&mut next) {
        Ok(true) => store.snapshot().set(next),
        Ok(false) => {}
        Err(err) => tracing::warn!(error = %err, "reorder rejected"),
    }
}

/// Replace the whole snapshot (reset)
pub fn store_replace(store: &AppStore, snapshot: Snapshot) {
    store.snapshot().set(snapshot);
}

pub fn store_set_theme(store: &AppStore, theme: Theme) {
    store.theme().set(theme);
}
