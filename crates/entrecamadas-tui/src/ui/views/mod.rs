pub mod composer;
pub mod confirm;
pub mod cosmos;
pub mod help;
pub mod message_list;
pub mod visible_card;

pub use composer::render_composer;
pub use confirm::render_confirm_delete;
pub use cosmos::CosmosWidget;
pub use help::render_help;
pub use message_list::render_message_list;
pub use visible_card::render_visible_card;
