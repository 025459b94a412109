use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::Tone;
use crate::constants::{EMPTY_FIELD, NO_SYMBOL_LABEL, UNTITLED_LABEL, VISIBLE_DEFAULT_TITLE};

/// A single journal entry ("invisible message")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    pub text: String,
    /// Free-text symbolic key
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tone: Tone,
    pub created: DateTime<Utc>,
    /// "Today, not tomorrow" decision
    #[serde(default, deserialize_with = "null_as_default")]
    pub carpe: bool,
}

/// Optional fields may be missing or `null` in stored records
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Form input for creating or updating a message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewMessage {
    pub title: String,
    pub text: String,
    pub key: String,
    pub tone: Tone,
    pub carpe: bool,
}

impl NewMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn tone(mut self, tone: impl Into<Tone>) -> Self {
        self.tone = tone.into();
        self
    }

    pub fn carpe(mut self, carpe: bool) -> Self {
        self.carpe = carpe;
        self
    }

    /// True when the text is blank after trimming
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl Message {
    /// Build a record with a fresh id from trimmed form input.
    /// Does not validate; the store rejects blank text.
    pub fn from_input(input: &NewMessage, created: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: input.title.trim().to_string(),
            text: input.text.trim().to_string(),
            key: input.key.trim().to_string(),
            tone: input.tone.clone(),
            created,
            carpe: input.carpe,
        }
    }

    /// Title as shown in the message list
    pub fn list_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED_LABEL
        } else {
            &self.title
        }
    }

    /// Title as shown on the visible card
    pub fn visible_title(&self) -> &str {
        if self.title.is_empty() {
            VISIBLE_DEFAULT_TITLE
        } else {
            &self.title
        }
    }

    /// Key as shown in the message list
    pub fn list_key(&self) -> &str {
        if self.key.is_empty() {
            NO_SYMBOL_LABEL
        } else {
            &self.key
        }
    }

    /// Key as shown on the visible card
    pub fn visible_key(&self) -> &str {
        if self.key.is_empty() {
            EMPTY_FIELD
        } else {
            &self.key
        }
    }

    /// Tone as shown on the visible card
    pub fn visible_tone(&self) -> &str {
        match self.tone.as_str() {
            "" => EMPTY_FIELD,
            tone => tone,
        }
    }

    /// Text length as used by the pulse formula
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_input_trims_fields() {
        let input = NewMessage::new("  hello  ").title(" t ").key(" k ").tone("mystical");
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let msg = Message::from_input(&input, created);

        assert_eq!(msg.text, "hello");
        assert_eq!(msg.title, "t");
        assert_eq!(msg.key, "k");
        assert_eq!(msg.tone, Tone::Mystical);
        assert_eq!(msg.created, created);
        assert!(!msg.carpe);
        assert!(!msg.id.is_empty());
    }

    #[test]
    fn test_display_fallbacks() {
        let msg = Message::from_input(&NewMessage::new("x"), Utc::now());
        assert_eq!(msg.list_title(), "(untitled)");
        assert_eq!(msg.visible_title(), "Message");
        assert_eq!(msg.list_key(), "no symbol");
        assert_eq!(msg.visible_key(), "—");
        assert_eq!(msg.visible_tone(), "purpose");
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let json = r#"{"id":"a","text":"hi","created":"2024-05-01T12:00:00Z"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.title, "");
        assert_eq!(msg.key, "");
        assert_eq!(msg.tone, Tone::Purpose);
        assert!(!msg.carpe);
    }

    #[test]
    fn test_null_optional_fields_use_defaults() {
        let json = r#"{"id":"a","title":null,"key":null,"tone":null,"carpe":null,
            "text":"kept words","created":"2024-05-01T12:00:00Z"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.title, "");
        assert_eq!(msg.key, "");
        assert_eq!(msg.tone, Tone::Purpose);
        assert!(!msg.carpe);
        assert_eq!(msg.text, "kept words");
    }

    #[test]
    fn test_text_len_counts_chars() {
        let msg = Message::from_input(&NewMessage::new("olá"), Utc::now());
        assert_eq!(msg.text_len(), 3);
    }
}
