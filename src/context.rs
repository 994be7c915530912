//! Application Context
//!
//! Navigation state shared via Leptos Context API.

use dashboard_core::commands::first_item_id;
use dashboard_core::domain::EntityId;
use dashboard_core::{DashboardConfig, Section, Snapshot};
use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active section - read
    pub section: ReadSignal<Section>,
    set_section: WriteSignal<Section>,
    /// Item open in the main panel - read
    pub active_item: ReadSignal<Option<EntityId>>,
    set_active_item: WriteSignal<Option<EntityId>>,
    /// Sidebar search term - read
    pub search: ReadSignal<String>,
    set_search: WriteSignal<String>,
    /// Settings dialog visibility - read
    pub settings_open: ReadSignal<bool>,
    set_settings_open: WriteSignal<bool>,
    config: StoredValue<DashboardConfig>,
}

impl AppContext {
    /// Start on the to-do section with its first list open
    pub fn new(snapshot: &Snapshot, config: DashboardConfig) -> Self {
        let (section, set_section) = signal(Section::Todos);
        let (active_item, set_active_item) = signal(first_item_id(snapshot, Section::Todos));
        let (search, set_search) = signal(String::new());
        let (settings_open, set_settings_open) = signal(false);
        Self {
            section,
            set_section,
            active_item,
            set_active_item,
            search,
            set_search,
            settings_open,
            set_settings_open,
            config: StoredValue::new(config),
        }
    }

    /// Switch section, open its first item and clear the search
    pub fn select_section(&self, section: Section, snapshot: &Snapshot) {
        tracing::debug!(section = section.as_str(), "section selected");
        self.set_section.set(section);
        self.set_active_item.set(first_item_id(snapshot, section));
        self.set_search.set(String::new());
    }

    pub fn select_item(&self, id: Option<EntityId>) {
        self.set_active_item.set(id);
    }

    pub fn set_search(&self, term: String) {
        self.set_search.set(term);
    }

    pub fn open_settings(&self) {
        self.set_settings_open.set(true);
    }

    pub fn close_settings(&self) {
        self.set_settings_open.set(false);
    }

    pub fn config(&self) -> DashboardConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
