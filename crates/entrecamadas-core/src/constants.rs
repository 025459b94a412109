//! Application-wide constants
//!
//! Centralized location for fixed strings and tuning values
//! that are used across multiple modules.

use std::time::Duration;

/// Fixed key of the storage slot holding the message snapshot
pub const STORAGE_KEY: &str = "entrecamadas_messages";

/// Name of the optional JSON config file inside the data directory
pub const CONFIG_FILE: &str = "config.json";

/// Default log file name inside the data directory
pub const LOG_FILE: &str = "entrecamadas.log";

// Display fallbacks
pub const UNTITLED_LABEL: &str = "(untitled)";
pub const VISIBLE_DEFAULT_TITLE: &str = "Message";
pub const MANIFEST_DEFAULT_TITLE: &str = "Manifesto";
pub const CARPE_DEFAULT_TITLE: &str = "Today's decision";
pub const EMPTY_FIELD: &str = "—";
pub const NO_SYMBOL_LABEL: &str = "no symbol";

/// How long a toast stays on screen
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

// Pulse tuning
/// Time after which a pulse falls back to zero
pub const PULSE_DECAY: Duration = Duration::from_millis(2200);
/// Text length at which the length component reaches 1.0
pub const PULSE_LENGTH_DIVISOR: f64 = 250.0;
/// Cap on the length component of a pulse
pub const PULSE_LENGTH_CAP: f64 = 1.2;

// Narration defaults
pub const NARRATION_LANGUAGE: &str = "en-US";
pub const NARRATION_RATE: f32 = 0.9;

/// Frames per second of the cosmos animation
pub const DEFAULT_FPS: u32 = 20;

// Cosmos scene
pub const STAR_COUNT: usize = 400;
pub const RING_COUNT: usize = 8;

/// Seed record written on first run so the list is never empty
pub mod demo {
    pub const TITLE: &str = "Telepathic network — memory of the future";
    pub const TEXT: &str = "Some dialogues live in silence. When time repeats its signals, \
it is not pain: it is purpose. Today, not tomorrow.";
    pub const KEY: &str = "flower";
    pub const TONE: &str = "purpose";
}
