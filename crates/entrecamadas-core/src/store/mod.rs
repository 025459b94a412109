pub mod errors;
pub mod message_store;
pub mod slot;

pub use errors::StoreError;
pub use message_store::MessageStore;
pub use slot::{FileSlot, MemorySlot, SnapshotSlot};
