//! Drop Zone Component
//!
//! A horizontal line between rows marking the gap a dragged row lands in.

use dashboard_core::domain::EntityId;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_zone_mouseenter, DndSignals};

/// Drop zone before row `position` (`position == len` is the end of the list)
#[component]
pub fn DropZone(dnd: DndSignals<EntityId>, position: usize) -> impl IntoView {
    let on_mouseenter = make_on_zone_mouseenter(dnd, position);
    let on_mouseleave = make_on_mouseleave(dnd);

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        // Only show when dragging
        if !dnd.any_dragging() { c.push_str(" hidden"); }
        if dnd.is_zone_target(position) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
