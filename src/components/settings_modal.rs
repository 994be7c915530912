//! Settings Modal Component
//!
//! Theme choice, about text, recent activity from the log buffer and a data
//! reset.

use dashboard_core::Theme;
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::storage::use_repository;
use crate::store::{store_replace, store_set_theme, use_app_store, AppStateStoreFields};

const RECENT_LINES: usize = 20;

fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::System => "🖥",
        Theme::Light => "☀",
        Theme::Dark => "☾",
    }
}

#[component]
pub fn SettingsModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let repo = use_repository();

    let on_reset = move |_| {
        match repo.with_value(|repo| repo.reset()) {
            Ok(seed) => {
                tracing::info!("dashboard data reset");
                ctx.select_section(ctx.section.get_untracked(), &seed);
                store_replace(&store, seed);
            }
            Err(err) => tracing::warn!(error = %err, "could not reset dashboard data"),
        }
    };

    view! {
        <Show when=move || ctx.settings_open.get()>
            <div class="modal-backdrop" on:click=move |_| ctx.close_settings()>
                <div
                    class="modal"
                    tabindex="0"
                    on:click=|ev| ev.stop_propagation()
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" { ctx.close_settings(); }
                    }
                >
                    <div class="modal-header">
                        <h2>"Settings"</h2>
                        <button class="close-btn" on:click=move |_| ctx.close_settings()>"×"</button>
                    </div>

                    <section class="modal-section">
                        <h3>"Appearance"</h3>
                        <div class="theme-options">
                            {Theme::ALL.into_iter().map(|theme| {
                                let is_active = move || store.theme().get() == theme;
                                view! {
                                    <button
                                        class=move || if is_active() { "theme-option active" } else { "theme-option" }
                                        on:click=move |_| store_set_theme(&store, theme)
                                    >
                                        <span class="theme-icon">{theme_icon(theme)}</span>
                                        <span class="theme-label">{theme.label()}</span>
                                        <Show when=is_active>
                                            <span class="theme-active-dot"></span>
                                        </Show>
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    </section>

                    <section class="modal-section">
                        <h3>"About"</h3>
                        <p>{format!("Personal Dashboard v{}", env!("CARGO_PKG_VERSION"))}</p>
                        <p>"Built with Rust & Leptos"</p>
                    </section>

                    <section class="modal-section">
                        <h3>"Recent activity"</h3>
                        <ul class="activity-log">
                            {move || {
                                let lines = ring_logger::recent();
                                let skip = lines.len().saturating_sub(RECENT_LINES);
                                lines
                                    .into_iter()
                                    .skip(skip)
                                    .rev()
                                    .map(|line| view! {
                                        <li class=format!("log-line log-{}", line.level.as_str().to_lowercase())>
                                            {line.to_string()}
                                        </li>
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </section>

                    <section class="modal-section">
                        <h3>"Data"</h3>
                        <div class="reset-row">
                            <span>"Replace everything with the sample dashboard"</span>
                            <DeleteConfirmButton button_class="danger-btn" title="Reset data" prompt="Reset everything?" on_confirm=on_reset />
                        </div>
                    </section>
                </div>
            </div>
        </Show>
    }
}
