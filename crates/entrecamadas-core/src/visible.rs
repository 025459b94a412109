use std::time::Instant;

use crate::models::Message;
use crate::pulse::Pulse;

/// What covers the cosmos
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visibility<'a> {
    Hidden,
    Help,
    Showing(&'a Message),
}

/// Owns the single "currently visible" message, the help panel flag
/// and the pulse the cosmos reads every frame.
#[derive(Debug, Default)]
pub struct VisibleController {
    current: Option<Message>,
    help_open: bool,
    pulse: Pulse,
}

impl VisibleController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, replacing whatever was visible. Closes help and
    /// pulses the cosmos. Returns the pulse intensity that was set.
    pub fn show(&mut self, message: Message, now: Instant) -> f64 {
        self.pulse.enhance(&message, now);
        tracing::debug!(id = %message.id, tone = %message.tone, pulse = self.pulse.value(), "showing message");
        self.current = Some(message);
        self.help_open = false;
        self.pulse.value()
    }

    /// Hide the card. Narration is left alone.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    /// Help wins over the card
    pub fn visibility(&self) -> Visibility<'_> {
        if self.help_open {
            return Visibility::Help;
        }
        match &self.current {
            Some(message) => Visibility::Showing(message),
            None => Visibility::Hidden,
        }
    }

    /// Opening help hides the visible card
    pub fn open_help(&mut self) {
        self.help_open = true;
        self.dismiss();
    }

    pub fn close_help(&mut self) {
        self.help_open = false;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn pulse(&self) -> &Pulse {
        &self.pulse
    }

    /// Advance pulse decay (call each frame)
    pub fn tick(&mut self, now: Instant) {
        self.pulse.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewMessage;
    use chrono::Utc;

    fn message(text: &str, tone: &str) -> Message {
        Message::from_input(&NewMessage::new(text).tone(tone), Utc::now())
    }

    #[test]
    fn test_starts_hidden() {
        let controller = VisibleController::new();
        assert!(controller.current().is_none());
        assert_eq!(controller.visibility(), Visibility::Hidden);
        assert_eq!(controller.pulse().value(), 0.0);
    }

    #[test]
    fn test_show_replaces_current() {
        let mut controller = VisibleController::new();
        let now = Instant::now();
        let a = message("a", "purpose");
        let b = message(&"b".repeat(500), "mystical");

        controller.show(a, now);
        let intensity = controller.show(b.clone(), now);

        assert_eq!(controller.current(), Some(&b));
        assert_eq!(controller.visibility(), Visibility::Showing(&b));
        assert!((intensity - 1.7).abs() < 1e-9);
    }

    #[test]
    fn test_show_closes_help() {
        let mut controller = VisibleController::new();
        controller.open_help();
        assert!(controller.help_open());
        controller.show(message("x", "purpose"), Instant::now());
        assert!(!controller.help_open());
    }

    #[test]
    fn test_open_help_hides_card() {
        let mut controller = VisibleController::new();
        controller.show(message("x", "purpose"), Instant::now());
        controller.open_help();
        assert!(controller.current().is_none());
        assert_eq!(controller.visibility(), Visibility::Help);
    }

    #[test]
    fn test_dismiss_hides() {
        let mut controller = VisibleController::new();
        controller.show(message("x", "purpose"), Instant::now());
        controller.dismiss();
        assert_eq!(controller.visibility(), Visibility::Hidden);
    }
}
