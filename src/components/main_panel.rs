//! Main Panel Component
//!
//! Shows the editor for the active item, or a placeholder.

use dashboard_core::commands::item_exists;
use dashboard_core::Section;
use leptos::prelude::*;

use crate::components::{LinksPanel, NotesPanel, TodoPanel};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MainPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Re-mount the editor only when the open item changes, not on every edit
    let open = Memo::new(move |_| {
        let section = ctx.section.get();
        let id = ctx.active_item.get()?;
        store
            .snapshot()
            .with(|s| item_exists(s, section, &id))
            .then_some((section, id))
    });

    view! {
        <main class="panel-main">
            {move || match open.get() {
                Some((Section::Todos, id)) => view! { <TodoPanel list_id=id /> }.into_any(),
                Some((Section::Notes, id)) => view! { <NotesPanel category_id=id /> }.into_any(),
                Some((Section::Links, id)) => view! { <LinksPanel collection_id=id /> }.into_any(),
                None => view! {
                    <div class="main-placeholder">
                        {move || format!("Select a {} to get started", ctx.section.get().item_noun())}
                    </div>
                }.into_any(),
            }}
        </main>
    }
}
