pub mod app;
pub mod components;
pub mod format;
pub mod layout;
pub mod modal;
pub mod notifications;
pub mod terminal;
pub mod text_editor;
pub mod theme;
pub mod views;

pub use app::{App, Focus};
pub use modal::ModalState;
pub use terminal::Tui;
