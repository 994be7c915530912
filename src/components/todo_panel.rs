//! Todo Panel Component
//!
//! Tasks of one to-do list: add, toggle, inline edit, priority, due date,
//! notes, delete, drag reorder and clear completed.

use dashboard_core::commands::{
    add_todo, clear_completed, delete_todo, edit_todo_text, move_todo_to, reorder_todos, set_todo_due_date,
    set_todo_notes, set_todo_priority, toggle_todo,
};
use dashboard_core::domain::{date, EntityId, SystemClock, Todo, TodoList};
use leptos::html::Input;
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{DeleteConfirmButton, DropZone};
use crate::store::{store_apply, store_reorder, use_app_store, AppStateStoreFields};

/// Single task row
#[component]
fn TodoRow(list_id: EntityId, todo: Todo, dnd: DndSignals<EntityId>) -> impl IntoView {
    let store = use_app_store();
    let id = todo.id.clone();
    let completed = todo.completed;
    let priority = todo.priority;

    let (editing, set_editing) = signal(false);
    let (edit_text, set_edit_text) = signal(todo.text.clone());
    let (expanded, set_expanded) = signal(false);
    let edit_ref = NodeRef::<Input>::new();

    Effect::new(move |_| {
        if let Some(input) = edit_ref.get() {
            let _ = input.focus();
        }
    });

    // One handle for every command on this row
    let ids = StoredValue::new((list_id, id.clone()));

    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let on_mouseenter = make_on_item_mouseenter(dnd, id.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    let row_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("todo-item");
            if completed { c.push_str(" completed"); }
            if dnd.is_dragging(&id) { c.push_str(" dragging"); }
            if dnd.is_item_target(&id) { c.push_str(" drop-target"); }
            c
        }
    };

    let toggle = move |_| {
        ids.with_value(|(list, todo)| store_apply(&store, |s| toggle_todo(s, list, todo)));
    };

    // Blank text keeps the old title
    let save_edit = move || {
        if !editing.get_untracked() { return; }
        let text = edit_text.get_untracked();
        if !text.trim().is_empty() {
            ids.with_value(|(list, todo)| store_apply(&store, |s| edit_todo_text(s, list, todo, &text)));
        }
        set_editing.set(false);
    };

    let original_text = todo.text.clone();
    let cancel_edit = move || {
        set_edit_text.set(original_text.clone());
        set_editing.set(false);
    };

    let cycle_priority = move |_| {
        ids.with_value(|(list, todo)| store_apply(&store, |s| set_todo_priority(s, list, todo, priority.cycle())));
    };

    let on_due_change = move |ev: web_sys::Event| {
        let due = date::parse_lenient(&event_target_value(&ev));
        ids.with_value(|(list, todo)| store_apply(&store, |s| set_todo_due_date(s, list, todo, due)));
    };

    let on_notes_blur = move |ev: web_sys::FocusEvent| {
        let notes = event_target_value(&ev);
        ids.with_value(|(list, todo)| store_apply(&store, |s| set_todo_notes(s, list, todo, &notes)));
    };

    let on_delete = move |_| {
        ids.with_value(|(list, todo)| store_apply(&store, |s| delete_todo(s, list, todo)));
    };

    let text = todo.text.clone();
    let due_value = todo.due_date.map(|d| d.to_string()).unwrap_or_default();
    let notes_value = todo.notes.clone().unwrap_or_default();

    view! {
        <div
            class=row_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <span class="drag-handle" title="Drag to reorder">"⋮⋮"</span>
            <button
                class=if completed { "todo-check checked" } else { "todo-check" }
                title=if completed { "Mark as open" } else { "Mark as done" }
                on:click=toggle
            >
                {if completed { "✓" } else { "" }}
            </button>

            <div class="todo-body">
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <span class="todo-text" on:dblclick=move |_| set_editing.set(true)>{text.clone()}</span>
                    }
                >
                    <input
                        type="text"
                        class="dashboard-input todo-edit"
                        node_ref=edit_ref
                        prop:value=move || edit_text.get()
                        on:input=move |ev| set_edit_text.set(event_target_value(&ev))
                        on:keydown={
                            let cancel_edit = cancel_edit.clone();
                            move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                                "Enter" => save_edit(),
                                "Escape" => cancel_edit(),
                                _ => {}
                            }
                        }
                        on:blur=move |_| save_edit()
                    />
                </Show>

                {todo.due_date.map(|due| view! { <div class="todo-due">{format!("Due {}", due)}</div> })}
                {todo.notes.clone().map(|notes| view! { <p class="todo-notes">{notes}</p> })}

                <Show when=move || expanded.get()>
                    <div class="todo-details">
                        <label>
                            "Due date"
                            <input type="date" class="dashboard-input" prop:value=due_value.clone() on:change=on_due_change />
                        </label>
                        <label>
                            "Notes"
                            <textarea class="dashboard-input" prop:value=notes_value.clone() on:blur=on_notes_blur></textarea>
                        </label>
                    </div>
                </Show>
            </div>

            <div class="todo-actions">
                <button
                    class=format!("priority-btn priority-{}", priority.as_str())
                    title=format!("Priority: {} (click to change)", priority.as_str())
                    on:click=cycle_priority
                >
                    "⚑"
                </button>
                <button class="icon-btn" title="Edit" on:click=move |_| set_editing.set(true)>"✎"</button>
                <button class="icon-btn" title="Details" on:click=move |_| set_expanded.update(|v| *v = !*v)>"⋯"</button>
                <DeleteConfirmButton button_class="delete-btn" title="Delete task" on_confirm=on_delete />
            </div>
        </div>
    }
}

/// Input for a new task; Enter adds, Escape or blurring while empty closes
#[component]
fn TodoAddInput(list_id: EntityId, set_adding: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let (new_todo, set_new_todo) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();
    let list_id = StoredValue::new(list_id);

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let close = move || {
        set_new_todo.set(String::new());
        set_adding.set(false);
    };

    let add = move || {
        let text = new_todo.get_untracked();
        if text.trim().is_empty() { return; }
        let added = list_id.with_value(|list| store_apply(&store, |s| add_todo(s, list, &text, &SystemClock)));
        if added.is_some() {
            close();
        }
    };

    view! {
        <div class="todo-add">
            <input
                type="text"
                class="dashboard-input"
                node_ref=input_ref
                placeholder="What needs to be done?"
                prop:value=move || new_todo.get()
                on:input=move |ev| set_new_todo.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                    "Enter" => add(),
                    "Escape" => close(),
                    _ => {}
                }
                on:blur=move |_| {
                    if new_todo.get_untracked().trim().is_empty() {
                        set_adding.set(false);
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn TodoPanel(list_id: EntityId) -> impl IntoView {
    let store = use_app_store();
    let (adding, set_adding) = signal(false);

    let list = {
        let list_id = list_id.clone();
        Memo::new(move |_| {
            store
                .snapshot()
                .with(|s| s.todos.iter().find(|l| l.id == list_id).cloned())
                .unwrap_or_else(|| TodoList::new(list_id.clone(), ""))
        })
    };
    let list_key = StoredValue::new(list_id.clone());

    let dnd = create_dnd_signals::<EntityId>();
    bind_global_mouseup(dnd, move |dragged, target| {
        tracing::debug!(todo = %dragged, ?target, "todo dropped");
        list_key.with_value(|list| {
            store_reorder(&store, |s| match &target {
                DropTarget::Item(over) => reorder_todos(s, list, &dragged, over),
                DropTarget::Zone(position) => move_todo_to(s, list, &dragged, *position),
            })
        });
    });

    let on_clear_completed = move |_| {
        let removed = list_key.with_value(|list| store_apply(&store, |s| clear_completed(s, list)));
        if let Some(removed) = removed {
            tracing::info!(removed, "completed tasks cleared");
        }
    };

    let summary = move || {
        let (open, total) = list.with(|l| l.remaining());
        format!("{} of {} tasks remaining", open, total)
    };
    let has_completed = move || list.with(|l| l.todos.iter().any(|t| t.completed));
    let is_empty = move || list.with(|l| l.todos.is_empty());

    view! {
        <div class="todo-panel">
            <header class="panel-header">
                <div>
                    <h1 class="panel-title">{move || list.with(|l| l.name.clone())}</h1>
                    <p class="panel-subtitle">{summary}</p>
                </div>
                <div class="panel-header-actions">
                    <Show when=has_completed>
                        <button class="secondary-btn" on:click=on_clear_completed>"Clear completed"</button>
                    </Show>
                    <button class="primary-btn" on:click=move |_| set_adding.set(true)>"+ Add new task"</button>
                </div>
            </header>

            <div class="panel-content">
                <Show when=move || adding.get()>
                    <TodoAddInput list_id=list_key.get_value() set_adding=set_adding />
                </Show>

                <DropZone dnd=dnd position=0 />
                <For
                    each=move || list.with(|l| l.todos.clone()).into_iter().enumerate()
                    key=|(position, todo)| {
                        // Every editable field, so an edit re-renders the row
                        (
                            *position,
                            todo.id.clone(),
                            todo.text.clone(),
                            todo.completed,
                            todo.priority,
                            todo.due_date,
                            todo.notes.clone(),
                        )
                    }
                    children=move |(position, todo)| {
                        view! {
                            <TodoRow list_id=list_key.get_value() todo=todo dnd=dnd />
                            <DropZone dnd=dnd position=position + 1 />
                        }
                    }
                />

                <Show when=move || is_empty() && !adding.get()>
                    <div class="empty-state">
                        <div class="empty-icon">"☑"</div>
                        <h3>"No tasks yet"</h3>
                        <p>"Add your first task to get started"</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
