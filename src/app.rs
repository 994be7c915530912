//! Personal Dashboard App
//!
//! Root component: owns state, persistence and the four-panel layout.

use dashboard_core::repository::SnapshotRepository;
use dashboard_core::DashboardConfig;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ContentSidebar, MainPanel, NavigationSidebar, SettingsModal};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::{AppState, AppStateStoreFields};
use crate::theme::apply_theme;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let repo = SnapshotRepository::new(BrowserStorage, &config);
    let snapshot = repo.load_or_seed();
    let theme = repo.load_theme();

    // Provide context to all children
    provide_context(AppContext::new(&snapshot, config));
    let store = Store::new(AppState::new(snapshot, theme));
    provide_context(store);
    let repo = StoredValue::new(repo);
    provide_context(repo);

    // Persist every snapshot change; the first run only subscribes
    Effect::new(move |initialized: Option<()>| {
        store.snapshot().with(|snapshot| {
            if initialized.is_some() {
                repo.with_value(|repo| {
                    if let Err(err) = repo.save(snapshot) {
                        tracing::warn!(error = %err, "could not persist dashboard");
                    }
                });
            }
        });
    });

    Effect::new(move |_| {
        let theme = store.theme().get();
        apply_theme(theme);
        repo.with_value(|repo| {
            if let Err(err) = repo.save_theme(theme) {
                tracing::warn!(error = %err, "could not persist theme");
            }
        });
    });

    view! {
        <div class="app-layout">
            // Left: section switcher
            <NavigationSidebar />

            // Items of the active section
            <ContentSidebar />

            // Editor for the active item
            <MainPanel />

            <SettingsModal />
        </div>
    }
}
