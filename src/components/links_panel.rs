//! Links Panel Component
//!
//! Bookmark cards of one collection with add/edit form, delete and drag
//! reorder.

use dashboard_core::commands::{add_link, delete_link, parse_tags, reorder_links, set_link_tags, update_link, LinkDraft};
use dashboard_core::domain::{EntityId, Link, LinkCollection, SystemClock};
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::DeleteConfirmButton;
use crate::store::{store_apply, store_reorder, use_app_store, AppStateStoreFields};

/// Title/url/description form shared by "Add Link" and card editing.
///
/// `on_submit` returns whether the draft was accepted; the form stays
/// open when it was not.
#[component]
fn LinkForm(
    initial: LinkDraft,
    #[prop(optional)] initial_tags: Option<String>,
    #[prop(into)] submit_label: String,
    on_submit: impl Fn(LinkDraft, Option<String>) -> bool + Copy + 'static,
    on_cancel: impl Fn() + Copy + 'static,
) -> impl IntoView {
    let with_tags = initial_tags.is_some();
    let (title, set_title) = signal(initial.title);
    let (url, set_url) = signal(initial.url);
    let (description, set_description) = signal(initial.description);
    let (tags, set_tags) = signal(initial_tags.unwrap_or_default());

    let draft = move || LinkDraft {
        title: title.get(),
        url: url.get(),
        description: description.get(),
    };

    let submit = move |_| {
        let tags = with_tags.then(|| tags.get_untracked());
        if on_submit(draft(), tags) {
            set_title.set(String::new());
            set_url.set(String::new());
            set_description.set(String::new());
        }
    };

    view! {
        <div class="link-form">
            <input
                type="text"
                class="dashboard-input"
                placeholder="Link title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="url"
                class="dashboard-input"
                placeholder="https://example.com"
                prop:value=move || url.get()
                on:input=move |ev| set_url.set(event_target_value(&ev))
            />
            <textarea
                class="dashboard-input"
                placeholder="Optional description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <Show when=move || with_tags>
                <input
                    type="text"
                    class="dashboard-input"
                    placeholder="Tags, comma separated"
                    prop:value=move || tags.get()
                    on:input=move |ev| set_tags.set(event_target_value(&ev))
                />
            </Show>
            <div class="link-form-actions">
                <button class="primary-btn" disabled=move || !draft().is_complete() on:click=submit>
                    {submit_label}
                </button>
                <button class="secondary-btn" on:click=move |_| on_cancel()>"Cancel"</button>
            </div>
        </div>
    }
}

/// Favicon, or a globe when there is none or it fails to load
#[component]
fn Favicon(favicon: Option<String>) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let has_icon = favicon.is_some();

    view! {
        {favicon.map(|src| view! {
            <img
                class="link-favicon"
                src=src
                alt=""
                style:display=move || if failed.get() { "none" } else { "block" }
                on:error=move |_| set_failed.set(true)
            />
        })}
        <Show when=move || !has_icon || failed.get()>
            <span class="link-favicon-fallback">"🌐"</span>
        </Show>
    }
}

#[component]
fn LinkCard(collection_id: EntityId, link: Link, dnd: DndSignals<EntityId>) -> impl IntoView {
    let store = use_app_store();
    let id = link.id.clone();
    let ids = StoredValue::new((collection_id, id.clone()));
    let (editing, set_editing) = signal(false);

    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let on_mouseenter = make_on_item_mouseenter(dnd, id.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    let card_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("link-card");
            if dnd.is_dragging(&id) { c.push_str(" dragging"); }
            if dnd.is_item_target(&id) { c.push_str(" drop-target"); }
            c
        }
    };

    let on_delete = move |_| {
        ids.with_value(|(collection, link)| store_apply(&store, |s| delete_link(s, collection, link)));
    };

    let on_save = move |draft: LinkDraft, tags: Option<String>| {
        let saved = ids.with_value(|(collection, link)| {
            store_apply(&store, |s| {
                update_link(s, collection, link, &draft)?;
                set_link_tags(s, collection, link, &parse_tags(tags.as_deref().unwrap_or_default()))
            })
        });
        if saved.is_some() {
            set_editing.set(false);
        }
        saved.is_some()
    };

    // Unparseable urls are shown verbatim
    let host = link.hostname().unwrap_or_else(|| link.url.clone());
    let draft = LinkDraft {
        title: link.title.clone(),
        url: link.url.clone(),
        description: link.description.clone(),
    };
    let tags_text = link.tags.join(", ");
    let description = (!link.description.is_empty()).then(|| link.description.clone());
    let tags = (!link.tags.is_empty()).then(|| tags_text.clone());

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <div class="link-card-body">
                        <div class="link-icon">
                            <Favicon favicon=link.favicon() />
                        </div>
                        <div class="link-info">
                            <div class="link-title-row">
                                <h3 class="link-title">{link.title.clone()}</h3>
                                <a class="link-open" href=link.url.clone() target="_blank" rel="noopener noreferrer" title="Open link">
                                    "↗"
                                </a>
                            </div>
                            <p class="link-host">{host.clone()}</p>
                            {description.clone().map(|d| view! { <p class="link-description">{d}</p> })}
                            <div class="link-meta">
                                <span>{link.added_date.to_string()}</span>
                                {tags.clone().map(|t| view! { <span class="link-tags">{format!("🏷 {}", t)}</span> })}
                            </div>
                        </div>
                        <div class="link-actions">
                            <button class="icon-btn" title="Edit" on:click=move |_| set_editing.set(true)>"✎"</button>
                            <DeleteConfirmButton button_class="delete-btn" title="Delete link" on_confirm=on_delete />
                        </div>
                    </div>
                }
            >
                <LinkForm
                    initial=draft.clone()
                    initial_tags=tags_text.clone()
                    submit_label="Save"
                    on_submit=on_save
                    on_cancel=move || set_editing.set(false)
                />
            </Show>
        </div>
    }
}

#[component]
pub fn LinksPanel(collection_id: EntityId) -> impl IntoView {
    let store = use_app_store();
    let (adding, set_adding) = signal(false);

    let collection = {
        let collection_id = collection_id.clone();
        Memo::new(move |_| {
            store
                .snapshot()
                .with(|s| s.links.iter().find(|c| c.id == collection_id).cloned())
                .unwrap_or_else(|| LinkCollection::new(collection_id.clone(), ""))
        })
    };
    let collection_key = StoredValue::new(collection_id);

    // Cards sit in a grid, so drops only land on other cards
    let dnd = create_dnd_signals::<EntityId>();
    bind_global_mouseup(dnd, move |dragged, target| {
        if let DropTarget::Item(over) = target {
            collection_key.with_value(|collection| {
                store_reorder(&store, |s| reorder_links(s, collection, &dragged, &over))
            });
        }
    });

    let on_add = move |draft: LinkDraft, _tags: Option<String>| {
        let added = collection_key.with_value(|collection| store_apply(&store, |s| add_link(s, collection, &draft, &SystemClock)));
        if added.is_some() {
            set_adding.set(false);
        }
        added.is_some()
    };

    view! {
        <div class="links-panel">
            <header class="panel-header">
                <div>
                    <h1 class="panel-title">{move || collection.with(|c| c.name.clone())}</h1>
                    <p class="panel-subtitle">{move || format!("{} saved links", collection.with(|c| c.links.len()))}</p>
                </div>
                <button class="primary-btn" on:click=move |_| set_adding.set(true)>"+ Add Link"</button>
            </header>

            <div class="panel-content">
                <Show when=move || adding.get()>
                    <LinkForm
                        initial=LinkDraft::default()
                        submit_label="Add Link"
                        on_submit=on_add
                        on_cancel=move || set_adding.set(false)
                    />
                </Show>

                <div class="links-grid">
                    <For
                        each=move || collection.with(|c| c.links.clone())
                        key=|link| {
                            (
                                link.id.clone(),
                                link.title.clone(),
                                link.url.clone(),
                                link.description.clone(),
                                link.tags.clone(),
                            )
                        }
                        children=move |link| view! { <LinkCard collection_id=collection_key.get_value() link=link dnd=dnd /> }
                    />
                </div>

                <Show when=move || collection.with(|c| c.links.is_empty()) && !adding.get()>
                    <div class="empty-state">
                        <div class="empty-icon">"🌐"</div>
                        <h3>"No links saved yet"</h3>
                        <p>"Add your first link to get started"</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
