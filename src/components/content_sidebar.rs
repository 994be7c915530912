//! Content Sidebar Component
//!
//! Lists the items (lists, categories, collections) of the active section
//! with search, inline add, inline rename, drag reorder and delete.

use dashboard_core::commands::{add_item, delete_item, first_item_id, item_summaries, move_item_to, rename_item, reorder_items};
use dashboard_core::domain::{EntityId, SystemClock};
use leptos::html::Input;
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{DeleteConfirmButton, DropZone};
use crate::context::use_app_context;
use crate::store::{store_apply, store_reorder, use_app_store, AppStateStoreFields};

/// Inline input for a new item; Enter adds, Escape or blurring while empty closes
#[component]
fn ItemAddInput(set_adding: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let close = move || {
        set_new_name.set(String::new());
        set_adding.set(false);
    };

    let add = move || {
        let section = ctx.section.get_untracked();
        let name = new_name.get_untracked();
        if name.trim().is_empty() { return; }
        if let Some(id) = store_apply(&store, |s| add_item(s, section, &name, &SystemClock)) {
            ctx.select_item(Some(id));
            close();
        }
    };

    let placeholder = move || {
        let section = ctx.section.get().as_str();
        format!("New {}...", &section[..section.len() - 1])
    };

    view! {
        <div class="sidebar-add">
            <input
                type="text"
                class="dashboard-input"
                node_ref=input_ref
                placeholder=placeholder
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                    "Enter" => add(),
                    "Escape" => close(),
                    _ => {}
                }
                on:blur=move |_| {
                    if new_name.get_untracked().trim().is_empty() {
                        set_adding.set(false);
                    }
                }
            />
        </div>
    }
}

/// One sidebar row; double-click the name to rename
#[component]
fn ItemRow(id: EntityId, name: String, count: usize, dnd: DndSignals<EntityId>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (renaming, set_renaming) = signal(false);
    let (draft, set_draft) = signal(name.clone());

    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let on_mouseenter = make_on_item_mouseenter(dnd, id.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    let row_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("sidebar-item");
            if ctx.active_item.with(|active| active.as_ref() == Some(&id)) { c.push_str(" active"); }
            if dnd.is_dragging(&id) { c.push_str(" dragging"); }
            if dnd.is_item_target(&id) { c.push_str(" drop-target"); }
            c
        }
    };

    let select = {
        let id = id.clone();
        move |_| {
            if dnd.just_ended() { return; }
            ctx.select_item(Some(id.clone()));
        }
    };

    let commit_rename = {
        let id = id.clone();
        move || {
            let section = ctx.section.get_untracked();
            let name = draft.get_untracked();
            store_apply(&store, |s| rename_item(s, section, &id, &name));
            set_renaming.set(false);
        }
    };

    let on_delete = {
        let id = id.clone();
        move |_| {
            let section = ctx.section.get_untracked();
            if store_apply(&store, |s| delete_item(s, section, &id)).is_none() { return; }
            if ctx.active_item.get_untracked().as_ref() == Some(&id) {
                ctx.select_item(store.snapshot().with_untracked(|s| first_item_id(s, section)));
            }
        }
    };

    let original = name.clone();
    view! {
        <div
            class=row_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
            on:click=select
        >
            <Show
                when=move || renaming.get()
                fallback=move || view! {
                    <span class="sidebar-item-name" on:dblclick=move |_| set_renaming.set(true)>
                        {name.clone()}
                    </span>
                }
            >
                <input
                    type="text"
                    class="dashboard-input sidebar-rename"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown={
                        let commit_rename = commit_rename.clone();
                        let original = original.clone();
                        move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                            "Enter" => commit_rename(),
                            "Escape" => {
                                set_draft.set(original.clone());
                                set_renaming.set(false);
                            }
                            _ => {}
                        }
                    }
                    on:blur={
                        let commit_rename = commit_rename.clone();
                        move |_| commit_rename()
                    }
                />
            </Show>
            <span class="sidebar-item-count">{count}</span>
            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
        </div>
    }
}

#[component]
pub fn ContentSidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (adding, set_adding) = signal(false);

    // Create DnD signals
    let dnd = create_dnd_signals::<EntityId>();

    // Bind global mouseup handler for dropping
    bind_global_mouseup(dnd, move |dragged, target| {
        let section = ctx.section.get_untracked();
        tracing::debug!(section = section.as_str(), item = %dragged, ?target, "item dropped");
        store_reorder(&store, |s| match &target {
            DropTarget::Item(over) => reorder_items(s, section, &dragged, over),
            DropTarget::Zone(position) => move_item_to(s, section, &dragged, *position),
        });
    });

    let rows = move || {
        let section = ctx.section.get();
        let search = ctx.search.get();
        store.snapshot().with(|s| item_summaries(s, section, &search))
    };

    // Positions only line up with the stored order while unfiltered
    let can_reorder = move || ctx.search.with(String::is_empty);

    let empty_text = move || {
        if ctx.search.with(String::is_empty) {
            format!("No {} yet", ctx.section.get().as_str())
        } else {
            "No items found".to_string()
        }
    };

    view! {
        <aside class="panel-sidebar">
            <div class="sidebar-header">
                <div class="sidebar-title-row">
                    <h2 class="sidebar-title">{move || ctx.section.get().sidebar_title()}</h2>
                    <button
                        class="sidebar-add-btn"
                        title=move || ctx.section.get().add_label()
                        on:click=move |_| set_adding.set(true)
                    >
                        "+"
                    </button>
                </div>
                <input
                    type="text"
                    class="dashboard-input sidebar-search"
                    placeholder=move || ctx.section.get().search_placeholder()
                    prop:value=move || ctx.search.get()
                    on:input=move |ev| ctx.set_search(event_target_value(&ev))
                />
            </div>

            <div class="sidebar-items">
                <Show when=move || adding.get()>
                    <ItemAddInput set_adding=set_adding />
                </Show>

                <Show when=can_reorder>
                    <DropZone dnd=dnd position=0 />
                </Show>
                <For
                    each=move || rows().into_iter().enumerate()
                    key=|(position, row)| (*position, row.id.clone(), row.name.clone(), row.count)
                    children=move |(position, row)| {
                        view! {
                            <ItemRow id=row.id name=row.name count=row.count dnd=dnd />
                            <Show when=can_reorder>
                                <DropZone dnd=dnd position=position + 1 />
                            </Show>
                        }
                    }
                />

                <Show when=move || rows().is_empty() && !adding.get()>
                    <div class="sidebar-empty">{empty_text}</div>
                </Show>
            </div>
        </aside>
    }
}
