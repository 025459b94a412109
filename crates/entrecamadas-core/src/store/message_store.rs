use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{SnapshotSlot, StoreError};
use crate::constants::demo;
use crate::models::{Message, NewMessage, Tone};

/// The journal: a flat bag of messages persisted as one JSON array.
///
/// Stored order is insertion order. Callers wanting display order use
/// [`MessageStore::list`], which sorts freshest first without touching the
/// stored order.
pub struct MessageStore {
    slot: Box<dyn SnapshotSlot>,
    messages: Vec<Message>,
}

impl MessageStore {
    /// Restore from the slot. Missing or invalid data yields an empty store;
    /// problems are logged, never returned.
    pub fn restore(slot: Box<dyn SnapshotSlot>) -> Self {
        let messages = match slot.read() {
            Ok(Some(contents)) => parse_snapshot(&contents),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read message snapshot: {}", e);
                Vec::new()
            }
        };
        tracing::debug!(count = messages.len(), "restored message store");
        Self { slot, messages }
    }

    /// Restore, then seed the demo record if nothing was restored.
    pub fn open(slot: Box<dyn SnapshotSlot>) -> Self {
        let mut store = Self::restore(slot);
        store.seed_if_empty();
        store
    }

    /// Insert the fixed demo record into an empty store and persist it.
    /// Returns true when a record was seeded.
    pub fn seed_if_empty(&mut self) -> bool {
        if !self.messages.is_empty() {
            return false;
        }
        let seed = NewMessage::new(demo::TEXT)
            .title(demo::TITLE)
            .key(demo::KEY)
            .tone(Tone::from(demo::TONE));
        self.messages.push(Message::from_input(&seed, Utc::now()));
        // The seed stays in memory even if the write fails; the next mutation retries it
        if let Err(e) = self.persist() {
            tracing::warn!("Failed to persist demo message: {}", e);
        }
        true
    }

    /// Create a message stamped with the current time
    pub fn create(&mut self, input: &NewMessage) -> Result<Message, StoreError> {
        self.create_at(input, Utc::now())
    }

    /// Create a message with an explicit creation time.
    /// Transactional: on write failure the new record is dropped again.
    pub fn create_at(
        &mut self,
        input: &NewMessage,
        created: DateTime<Utc>,
    ) -> Result<Message, StoreError> {
        if input.is_blank() {
            return Err(StoreError::EmptyText);
        }

        let message = Message::from_input(input, created);
        self.messages.push(message.clone());

        if let Err(e) = self.persist() {
            self.messages.pop();
            return Err(e);
        }

        tracing::info!(id = %message.id, carpe = message.carpe, "message created");
        Ok(message)
    }

    /// Rewrite title, text, key and tone of an existing message.
    /// `id`, `created` and `carpe` are kept. Transactional like `create_at`.
    pub fn update(&mut self, id: &str, input: &NewMessage) -> Result<Message, StoreError> {
        if input.is_blank() {
            return Err(StoreError::EmptyText);
        }

        let idx = self
            .messages
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let original = self.messages[idx].clone();
        {
            let message = &mut self.messages[idx];
            message.title = input.title.trim().to_string();
            message.text = input.text.trim().to_string();
            message.key = input.key.trim().to_string();
            message.tone = input.tone.clone();
        }

        if let Err(e) = self.persist() {
            self.messages[idx] = original;
            return Err(e);
        }

        tracing::info!(id, "message updated");
        Ok(self.messages[idx].clone())
    }

    /// Delete a message by id. Unknown ids are a no-op and return `Ok(None)`.
    /// Transactional: on write failure the record is put back in place.
    pub fn delete(&mut self, id: &str) -> Result<Option<Message>, StoreError> {
        let Some(idx) = self.messages.iter().position(|m| m.id == id) else {
            return Ok(None);
        };

        let removed = self.messages.remove(idx);
        if let Err(e) = self.persist() {
            self.messages.insert(idx, removed);
            return Err(e);
        }

        tracing::info!(id, "message deleted");
        Ok(Some(removed))
    }

    /// All messages, newest `created` first
    pub fn list(&self) -> Vec<&Message> {
        let mut messages: Vec<_> = self.messages.iter().collect();
        messages.sort_by(|a, b| b.created.cmp(&a.created));
        messages
    }

    pub fn get(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The snapshot exactly as it is written to the slot
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(&self.messages)?)
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let json = self.to_json()?;
        self.slot.write(&json)?;
        Ok(())
    }
}

/// Parse a snapshot, dropping individual records that are malformed,
/// have blank text, or repeat an id already seen.
fn parse_snapshot(contents: &str) -> Vec<Message> {
    let values: Vec<Value> = match serde_json::from_str(contents) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!("Message snapshot is not a JSON array, starting empty: {}", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut messages = Vec::with_capacity(values.len());
    for (idx, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<Message>(value) {
            Ok(message) if message.text.trim().is_empty() => {
                tracing::warn!(idx, "dropping stored message with empty text");
            }
            Ok(message) if !seen.insert(message.id.clone()) => {
                tracing::warn!(idx, id = %message.id, "dropping stored message with duplicate id");
            }
            Ok(message) => messages.push(message),
            Err(e) => {
                tracing::warn!(idx, "dropping malformed stored message: {}", e);
            }
        }
    }
    messages
}
