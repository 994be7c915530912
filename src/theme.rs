//! Theme application
//!
//! Puts `light` or `dark` on the document root element.

use dashboard_core::Theme;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|win| win.match_media(DARK_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn apply_theme(theme: Theme) {
    let class = theme.resolve(system_prefers_dark());
    let Some(root) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = classes.remove_2("light", "dark");
    if let Err(err) = classes.add_1(class) {
        tracing::warn!(?err, "could not apply theme class");
    }
}
