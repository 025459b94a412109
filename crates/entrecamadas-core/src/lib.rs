pub mod config;
pub mod constants;
pub mod cosmos;
pub mod models;
pub mod narration;
pub mod pulse;
pub mod store;
pub mod tracing_setup;
pub mod visible;

pub use config::{AppConfig, ConfigError, CoreConfig};
pub use cosmos::Cosmos;
pub use models::{Message, NewMessage, Tone};
pub use narration::{NarrationError, NarrationState, Narrator, SpeechBackend, SpeechRequest};
pub use pulse::Pulse;
pub use store::{FileSlot, MemorySlot, MessageStore, SnapshotSlot, StoreError};
pub use visible::{Visibility, VisibleController};
