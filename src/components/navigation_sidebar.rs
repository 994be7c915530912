//! Navigation Sidebar Component
//!
//! Narrow icon rail switching between sections, with the settings button
//! at the bottom.

use dashboard_core::Section;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

fn section_icon(section: Section) -> &'static str {
    match section {
        Section::Todos => "☑",
        Section::Notes => "📄",
        Section::Links => "🔗",
    }
}

#[component]
pub fn NavigationSidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <nav class="panel-nav">
            <div class="nav-items">
                {Section::ALL.into_iter().map(|section| {
                    let is_active = move || ctx.section.get() == section;
                    view! {
                        <button
                            class=move || if is_active() { "nav-item active" } else { "nav-item" }
                            title=section.label()
                            on:click=move |_| {
                                store.snapshot().with_untracked(|snapshot| ctx.select_section(section, snapshot));
                            }
                        >
                            {section_icon(section)}
                        </button>
                    }
                }).collect_view()}
            </div>
            <div class="nav-footer">
                <button class="nav-item" title="Settings" on:click=move |_| ctx.open_settings()>
                    "⚙"
                </button>
            </div>
        </nav>
    }
}
