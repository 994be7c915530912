//! Delete Confirm Button Component
//!
//! Two-step delete used by sidebar rows, tasks, notes, links and the data
//! reset. The first click arms the button, the second one runs the action.
//! Moving the pointer away or pressing Escape disarms it again.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "Delete".to_string())] title: String,
    #[prop(into, default = "Delete?".to_string())] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let disarm = move || armed.set(false);

    // Clicks must not reach the row underneath (selection, drag start)
    let arm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        armed.set(true);
    };
    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        disarm();
        on_confirm.run(());
    };
    let cancel = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        disarm();
    };

    move || {
        if armed.get() {
            view! {
                <span
                    class="delete-confirm"
                    on:mouseleave=move |_| disarm()
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" { disarm(); }
                    }
                >
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button class="confirm-btn" title="Confirm" on:click=confirm>"✓"</button>
                    <button class="cancel-btn" title="Keep" on:click=cancel>"✗"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button class=button_class.clone() title=title.clone() on:click=arm>"×"</button>
            }
            .into_any()
        }
    }
}
