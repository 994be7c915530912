//! UI Components
//!
//! Reusable Leptos components.

mod content_sidebar;
mod delete_confirm_button;
mod drop_zone;
mod links_panel;
mod main_panel;
mod navigation_sidebar;
mod notes_panel;
mod settings_modal;
mod todo_panel;

pub use content_sidebar::ContentSidebar;
pub use delete_confirm_button::DeleteConfirmButton;
pub use drop_zone::DropZone;
pub use links_panel::LinksPanel;
pub use main_panel::MainPanel;
pub use navigation_sidebar::NavigationSidebar;
pub use notes_panel::NotesPanel;
pub use settings_modal::SettingsModal;
pub use todo_panel::TodoPanel;
