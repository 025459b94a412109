pub mod message;
pub mod tone;

pub use message::{Message, NewMessage};
pub use tone::Tone;
