pub mod modal_frame;
pub mod statusbar;

pub use modal_frame::{render_modal_background, render_modal_overlay};
pub use statusbar::render_statusbar;
