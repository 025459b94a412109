//! Narration of the visible message.
//!
//! `Idle --toggle--> Speaking --toggle--> Paused --toggle--> Speaking`,
//! and back to `Idle` when the backend reports completion or an error.
//! The speech capability itself sits behind [`SpeechBackend`].

use thiserror::Error;

use crate::constants::{NARRATION_LANGUAGE, NARRATION_RATE};
use crate::models::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrationState {
    Idle,
    Speaking,
    Paused,
}

impl NarrationState {
    /// Label of the narration control in this state
    pub fn button_label(&self) -> &'static str {
        match self {
            NarrationState::Idle => "Narrate",
            NarrationState::Speaking => "Pause",
            NarrationState::Paused => "Resume",
        }
    }
}

/// One utterance handed to the backend
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub language: String,
    pub rate: f32,
    pub pitch: f32,
}

/// What the backend observed since the last poll
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechEvent {
    Finished,
    Failed(String),
}

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("narration is not supported here")]
    Unavailable,
    #[error("failed to start narration: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("failed to control narration: {0}")]
    Signal(#[source] std::io::Error),
}

/// Platform text-to-speech capability
pub trait SpeechBackend {
    fn is_available(&self) -> bool;

    fn start(&mut self, request: &SpeechRequest) -> Result<(), SpeechError>;

    fn pause(&mut self) -> Result<(), SpeechError>;

    fn resume(&mut self) -> Result<(), SpeechError>;

    /// Stop the current utterance, if any. Never fails.
    fn cancel(&mut self);

    /// Report completion or failure of the current utterance
    fn poll(&mut self) -> Option<SpeechEvent>;
}

#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("No visible message.")]
    NothingVisible,
    #[error("Narration is not supported in this environment.")]
    Unavailable,
    #[error("Narration error: {0}")]
    Speech(#[from] SpeechError),
    #[error("Narration error: {0}")]
    Failed(String),
}

pub struct Narrator {
    backend: Box<dyn SpeechBackend>,
    state: NarrationState,
    language: String,
    rate: f32,
}

impl Narrator {
    pub fn new(backend: Box<dyn SpeechBackend>) -> Self {
        Self::with_voice(backend, NARRATION_LANGUAGE, NARRATION_RATE)
    }

    pub fn with_voice(backend: Box<dyn SpeechBackend>, language: &str, rate: f32) -> Self {
        Self {
            backend,
            state: NarrationState::Idle,
            language: language.to_string(),
            rate,
        }
    }

    pub fn state(&self) -> NarrationState {
        self.state
    }

    /// Build the utterance for `message`
    pub fn request_for(&self, message: &Message) -> SpeechRequest {
        SpeechRequest {
            text: message.text.clone(),
            language: self.language.clone(),
            rate: self.rate,
            pitch: message.tone.pitch(),
        }
    }

    /// The narration control: start, pause or resume depending on state.
    /// Any failure leaves the narrator `Idle`.
    pub fn toggle(&mut self, visible: Option<&Message>) -> Result<NarrationState, NarrationError> {
        let Some(message) = visible else {
            return Err(NarrationError::NothingVisible);
        };
        if !self.backend.is_available() {
            return Err(NarrationError::Unavailable);
        }

        let result = match self.state {
            NarrationState::Idle => {
                self.backend.cancel();
                let request = self.request_for(message);
                tracing::info!(
                    language = %request.language,
                    rate = request.rate,
                    pitch = request.pitch,
                    chars = request.text.chars().count(),
                    "starting narration"
                );
                self.backend.start(&request).map(|_| NarrationState::Speaking)
            }
            NarrationState::Speaking => self.backend.pause().map(|_| NarrationState::Paused),
            NarrationState::Paused => self.backend.resume().map(|_| NarrationState::Speaking),
        };

        match result {
            Ok(next) => {
                self.state = next;
                Ok(next)
            }
            Err(e) => {
                tracing::warn!("Narration failed: {}", e);
                self.backend.cancel();
                self.state = NarrationState::Idle;
                Err(e.into())
            }
        }
    }

    /// Observe the backend (call each tick). Returns an error once when the
    /// utterance failed; completion silently returns to `Idle`.
    pub fn poll(&mut self) -> Option<NarrationError> {
        if self.state == NarrationState::Idle {
            return None;
        }
        match self.backend.poll()? {
            SpeechEvent::Finished => {
                tracing::debug!("narration finished");
                self.state = NarrationState::Idle;
                None
            }
            SpeechEvent::Failed(reason) => {
                tracing::warn!("Narration failed: {}", reason);
                self.state = NarrationState::Idle;
                Some(NarrationError::Failed(reason))
            }
        }
    }

    /// Stop speaking and return to `Idle`
    pub fn stop(&mut self) {
        self.backend.cancel();
        self.state = NarrationState::Idle;
    }
}
