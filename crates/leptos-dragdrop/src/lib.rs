//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for sortable Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Entries are identified by a key `K` (any cloneable id). A drop lands
//! either on another entry (take its place) or on a gap between entries.

use std::cell::Cell;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Debug, PartialEq)]
pub enum DropTarget<K> {
    /// Drop on an entry (move into its slot)
    Item(K),
    /// Drop on the gap before position `n` (`n == len` is the end)
    Zone(usize),
}

/// Key bound for draggable entries
pub trait DragKey: Clone + PartialEq + Send + Sync + 'static {}

impl<K: Clone + PartialEq + Send + Sync + 'static> DragKey for K {}

/// DnD state signals
pub struct DndSignals<K: DragKey> {
    pub dragging_id_read: ReadSignal<Option<K>>,
    pub dragging_id_write: WriteSignal<Option<K>>,
    pub drop_target_read: ReadSignal<Option<DropTarget<K>>>,
    pub drop_target_write: WriteSignal<Option<DropTarget<K>>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending entry (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<K>>,
    pub pending_id_write: WriteSignal<Option<K>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl<K: DragKey> Clone for DndSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: DragKey> Copy for DndSignals<K> {}

impl<K: DragKey> DndSignals<K> {
    pub fn is_dragging(&self, key: &K) -> bool {
        self.dragging_id_read.with(|d| d.as_ref() == Some(key))
    }

    pub fn any_dragging(&self) -> bool {
        self.dragging_id_read.with(Option::is_some)
    }

    pub fn is_item_target(&self, key: &K) -> bool {
        self.drop_target_read
            .with(|t| matches!(t, Some(DropTarget::Item(k)) if k == key))
    }

    pub fn is_zone_target(&self, position: usize) -> bool {
        self.drop_target_read
            .with(|t| matches!(t, Some(DropTarget::Zone(p)) if *p == position))
    }

    /// True for a short moment after a drop, so the trailing click can be ignored
    pub fn just_ended(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long `drag_just_ended` stays set after a drop
const CLICK_SUPPRESS_MS: i32 = 100;

pub fn create_dnd_signals<K: DragKey>() -> DndSignals<K> {
    let (dragging_id_read, dragging_id_write) = signal(None::<K>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget<K>>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<K>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag<K: DragKey>(dnd: &DndSignals<K>) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = Closure::once_into_js(move || {
            let _ = clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), CLICK_SUPPRESS_MS);
    }
}

/// Create mousedown handler for draggable entries
/// Records pending drag with start position
pub fn make_on_mousedown<K: DragKey>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is a form control
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(key.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mouseenter handler for entries (take their slot)
pub fn make_on_item_mouseenter<K: DragKey>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != key {
                dnd.drop_target_write.set(Some(DropTarget::Item(key.clone())));
            }
        }
    }
}

/// Create mouseenter handler for gaps
pub fn make_on_zone_mouseenter<K: DragKey>(dnd: DndSignals<K>, position: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.any_dragging() {
            dnd.drop_target_write.set(Some(DropTarget::Zone(position)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K: DragKey>(dnd: DndSignals<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.any_dragging() {
            dnd.drop_target_write.set(None);
        }
    }
}

thread_local! {
    static LIVE_BINDINGS: Cell<usize> = const { Cell::new(0) };
}

/// Number of [`bind_global_mouseup`] bindings whose owner is still alive
pub fn live_bindings() -> usize {
    LIVE_BINDINGS.with(Cell::get)
}

#[cfg(target_arch = "wasm32")]
fn current_document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|win| win.document())
}

#[cfg(not(target_arch = "wasm32"))]
fn current_document() -> Option<web_sys::Document> {
    None
}

type MouseHandler = Closure<dyn FnMut(web_sys::MouseEvent)>;

/// Document listeners of one sortable list, removed again on drop
struct DocumentListeners {
    document: Option<web_sys::Document>,
    handlers: Vec<(&'static str, MouseHandler)>,
}

impl DocumentListeners {
    fn new() -> Self {
        LIVE_BINDINGS.with(|n| n.set(n.get() + 1));
        Self { document: current_document(), handlers: Vec::new() }
    }

    fn listen(&mut self, event: &'static str, handler: impl FnMut(web_sys::MouseEvent) + 'static) {
        let Some(document) = &self.document else { return; };
        let handler = MouseHandler::new(handler);
        let _ = document.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
        self.handlers.push((event, handler));
    }
}

impl Drop for DocumentListeners {
    fn drop(&mut self) {
        if let Some(document) = &self.document {
            for (event, handler) in &self.handlers {
                let _ = document.remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
            }
        }
        LIVE_BINDINGS.with(|n| n.set(n.get().saturating_sub(1)));
    }
}

/// Bind document mousemove (drag start) and mouseup (drop) handlers.
///
/// The listeners belong to the calling component and are removed when it
/// unmounts.
pub fn bind_global_mouseup<K, F>(dnd: DndSignals<K>, on_drop: F)
where
    K: DragKey,
    F: Fn(K, DropTarget<K>) + 'static,
{
    let mut listeners = DocumentListeners::new();

    listeners.listen("mousemove", move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_id_read.try_get_untracked() else { return; };
        let Some(dragging) = dnd.dragging_id_read.try_get_untracked() else { return; };

        if pending.is_some() && dragging.is_none() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_id_write.set(pending);
            }
        }
    });

    listeners.listen("mouseup", move |_ev: web_sys::MouseEvent| {
        let Some(dragging_id) = dnd.dragging_id_read.try_get_untracked() else { return; };
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_id_write.set(None);

        if dragging_id.is_none() && drop_target.is_none() {
            // Plain click: nothing was dragged
            return;
        }
        end_drag(&dnd);
        if let (Some(dragged), Some(target)) = (dragging_id, drop_target) {
            on_drop(dragged, target);
        }
    });

    StoredValue::new_local(listeners);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_are_released_with_their_owner() {
        let before = live_bindings();
        let owner = Owner::new();
        owner.with(|| {
            let dnd = create_dnd_signals::<u32>();
            bind_global_mouseup(dnd, |_, _| {});
        });
        assert_eq!(live_bindings(), before + 1);

        drop(owner);
        assert_eq!(live_bindings(), before);
    }

    #[test]
    fn test_target_queries() {
        let owner = Owner::new();
        owner.with(|| {
            let dnd = create_dnd_signals::<u32>();
            assert!(!dnd.any_dragging());

            dnd.dragging_id_write.set(Some(1));
            dnd.drop_target_write.set(Some(DropTarget::Zone(2)));
            assert!(dnd.is_dragging(&1));
            assert!(dnd.is_zone_target(2));
            assert!(!dnd.is_item_target(&2));
        });
    }
}
