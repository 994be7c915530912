//! Notes Panel Component
//!
//! Notes of one category: list, Markdown viewer and editor with debounced
//! auto-save.

use dashboard_core::commands::{create_note, delete_note, note_excerpt, parse_tags, rename_note, set_note_tags, NoteDraft};
use dashboard_core::domain::{EntityId, Note, NoteCategory, SystemClock};
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::markdown::render_markdown;
use crate::store::{store_apply, use_app_store, AppStateStoreFields, AppStore};

fn commit_draft(store: &AppStore, draft: &NoteDraft) {
    if store_apply(store, |s| draft.commit(s, &SystemClock)).is_some() {
        tracing::debug!(note = %draft.note_id, "note content saved");
    }
}

/// Note card in the list column
#[component]
fn NoteCard(note: Note, selected: RwSignal<Option<EntityId>>, on_select: Callback<EntityId>) -> impl IntoView {
    let id = note.id.clone();
    let is_selected = {
        let id = id.clone();
        move || selected.with(|s| s.as_ref() == Some(&id))
    };
    let tags = (!note.tags.is_empty()).then(|| note.tags.join(", "));

    view! {
        <div
            class=move || if is_selected() { "note-card selected" } else { "note-card" }
            on:click=move |_| on_select.run(id.clone())
        >
            <h3 class="note-card-title">{note.title.clone()}</h3>
            <p class="note-card-excerpt">{format!("{}...", note_excerpt(&note.content))}</p>
            <div class="note-card-meta">
                <span>{format!("📅 {}", note.last_modified)}</span>
                {tags.map(|tags| view! { <span>{format!("# {}", tags)}</span> })}
            </div>
        </div>
    }
}

#[component]
pub fn NotesPanel(category_id: EntityId) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let config = ctx.config();
    let autosave_delay_ms = config.autosave_delay_ms;
    let save_latency_ms = config.save_latency_ms;

    let category = {
        let category_id = category_id.clone();
        Memo::new(move |_| {
            store
                .snapshot()
                .with(|s| s.notes.iter().find(|c| c.id == category_id).cloned())
                .unwrap_or_else(|| NoteCategory::new(category_id.clone(), ""))
        })
    };
    let category_key = StoredValue::new(category_id);

    let selected = RwSignal::new(category.with_untracked(|c| c.notes.first().map(|n| n.id.clone())));
    // Falls back to the first note when the selection disappears
    let current = Memo::new(move |_| {
        category.with(|c| {
            selected
                .with(|id| id.as_ref().and_then(|id| c.notes.iter().find(|n| &n.id == id)))
                .or_else(|| c.notes.first())
                .cloned()
        })
    });
    let current_id = move || current.with_untracked(|n| n.as_ref().map(|n| n.id.clone()));

    // Note the editor was opened on
    let editing = RwSignal::new(None::<EntityId>);
    let (edit_content, set_edit_content) = signal(String::new());
    let (saving, set_saving) = signal(false);

    // Typed content not yet committed, and the timer that will commit it
    let draft = StoredValue::new(None::<NoteDraft>);
    let timer = StoredValue::new_local(None::<Timeout>);

    let flush = move || {
        let _ = timer.try_update_value(|t| *t = None);
        if let Some(pending) = draft.try_update_value(Option::take).flatten() {
            commit_draft(&store, &pending);
        }
    };
    let discard = move || {
        timer.set_value(None);
        draft.set_value(None);
    };

    // Leaving the panel must not lose the last keystrokes
    on_cleanup(flush);

    let select_note = move |id: EntityId| {
        flush();
        editing.set(None);
        selected.set(Some(id));
    };

    let start_editing = move || {
        if let Some(note) = current.get_untracked() {
            set_edit_content.set(note.content);
            editing.set(Some(note.id));
        }
    };

    // Every keystroke replaces the pending draft and restarts the timer
    let on_content_input = move |ev: web_sys::Event| {
        let content = event_target_value(&ev);
        set_edit_content.set(content.clone());
        let Some(note_id) = editing.get_untracked() else { return; };
        draft.set_value(Some(NoteDraft::new(category_key.get_value(), note_id, content)));
        let timeout = Timeout::new(autosave_delay_ms, move || {
            if let Some(pending) = draft.try_update_value(Option::take).flatten() {
                commit_draft(&store, &pending);
            }
        });
        timer.set_value(Some(timeout));
    };

    let on_save = move |_| {
        discard();
        let Some(note_id) = editing.get_untracked() else { return; };
        let pending = NoteDraft::new(category_key.get_value(), note_id, edit_content.get_untracked());
        set_saving.set(true);
        spawn_local(async move {
            TimeoutFuture::new(save_latency_ms).await;
            commit_draft(&store, &pending);
            let _ = set_saving.try_set(false);
            let _ = editing.try_update(|e| {
                if e.as_ref() == Some(&pending.note_id) {
                    *e = None;
                }
            });
        });
    };

    // Content the timer already committed stays saved
    let on_cancel = move |_| {
        discard();
        editing.set(None);
    };

    let on_new_note = move |_| {
        flush();
        let created = category_key.with_value(|category| store_apply(&store, |s| create_note(s, category, &SystemClock)));
        if let Some(id) = created {
            selected.set(Some(id.clone()));
            set_edit_content.set(Note::TEMPLATE.to_string());
            editing.set(Some(id));
        }
    };

    let on_title_change = move |ev: web_sys::Event| {
        let title = event_target_value(&ev);
        let Some(note_id) = editing.get_untracked() else { return; };
        category_key.with_value(|category| store_apply(&store, |s| rename_note(s, category, &note_id, &title, &SystemClock)));
    };

    let on_tags_change = move |ev: web_sys::Event| {
        let tags = parse_tags(&event_target_value(&ev));
        let Some(note_id) = editing.get_untracked() else { return; };
        category_key.with_value(|category| store_apply(&store, |s| set_note_tags(s, category, &note_id, &tags)));
    };

    let on_delete = move |_| {
        let Some(note_id) = current_id() else { return; };
        flush();
        if category_key.with_value(|category| store_apply(&store, |s| delete_note(s, category, &note_id))).is_some() {
            selected.set(None);
            editing.set(None);
        }
    };

    // Re-render the content area only when the note or the mode changes,
    // so auto-saves do not rebuild the editor under the cursor
    let mode = Memo::new(move |_| {
        let id = current.with(|n| n.as_ref().map(|n| n.id.clone()));
        let is_editing = id.is_some() && editing.with(|e| *e == id);
        (id, is_editing)
    });
    let is_editing = move || mode.with(|(_, e)| *e);
    let on_select = Callback::new(select_note);

    let subtitle = move || match current.get() {
        Some(note) => note.title,
        None => format!("{} notes", category.with(|c| c.notes.len())),
    };

    view! {
        <div class="notes-panel">
            <header class="panel-header">
                <div>
                    <h1 class="panel-title">{move || category.with(|c| c.name.clone())}</h1>
                    <p class="panel-subtitle">{subtitle}</p>
                </div>
                <div class="panel-header-actions">
                    <Show when=move || current.with(Option::is_some) && !is_editing()>
                        <button class="secondary-btn" on:click=move |_| start_editing()>"✎ Edit"</button>
                    </Show>
                    <button class="primary-btn" on:click=on_new_note>"+ New Note"</button>
                </div>
            </header>

            <div class="notes-body">
                <Show when=move || category.with(|c| c.notes.len() > 1)>
                    <div class="notes-list">
                        <For
                            each=move || category.with(|c| c.notes.clone())
                            key=|note| (note.id.clone(), note.title.clone(), note.content.clone(), note.tags.clone(), note.last_modified)
                            children=move |note| view! { <NoteCard note=note selected=selected on_select=on_select /> }
                        />
                    </div>
                </Show>

                <div class="note-content">
                    {move || match mode.get() {
                        (None, _) => view! {
                            <div class="empty-state">
                                <div class="empty-icon">"✎"</div>
                                <h3>"No notes yet"</h3>
                                <p>"Create your first note to get started"</p>
                                <button class="primary-btn" on:click=on_new_note>"Create Note"</button>
                            </div>
                        }.into_any(),
                        (Some(_), true) => {
                            let (title, tags) = current.with_untracked(|n| {
                                n.as_ref().map(|n| (n.title.clone(), n.tags.join(", "))).unwrap_or_default()
                            });
                            view! {
                                <div class="note-editor">
                                    <div class="note-editor-toolbar">
                                        <input
                                            type="text"
                                            class="dashboard-input note-title-input"
                                            prop:value=title
                                            on:change=on_title_change
                                        />
                                        <button class="primary-btn" disabled=move || saving.get() on:click=on_save>
                                            {move || if saving.get() { "Saving…" } else { "Save" }}
                                        </button>
                                        <button class="secondary-btn" disabled=move || saving.get() on:click=on_cancel>"Cancel"</button>
                                    </div>
                                    <input
                                        type="text"
                                        class="dashboard-input note-tags-input"
                                        placeholder="Tags, comma separated"
                                        prop:value=tags
                                        on:change=on_tags_change
                                    />
                                    <div class="note-editor-body">
                                        <textarea
                                            class="note-textarea"
                                            placeholder="Write your note in Markdown..."
                                            prop:value=move || edit_content.get()
                                            on:input=on_content_input
                                        ></textarea>
                                        <div class="note-preview markdown-body" inner_html=move || render_markdown(&edit_content.get())></div>
                                    </div>
                                </div>
                            }.into_any()
                        }
                        (Some(_), false) => view! {
                            <div class="note-viewer">
                                <div class="note-viewer-toolbar">
                                    <span class="note-date">
                                        {move || current.with(|n| n.as_ref().map(|n| format!("Last modified {}", n.last_modified)))}
                                    </span>
                                    <DeleteConfirmButton button_class="delete-btn" title="Delete note" on_confirm=on_delete />
                                </div>
                                <div
                                    class="note-preview markdown-body"
                                    inner_html=move || current.with(|n| n.as_ref().map(|n| render_markdown(&n.content)).unwrap_or_default())
                                ></div>
                            </div>
                        }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
