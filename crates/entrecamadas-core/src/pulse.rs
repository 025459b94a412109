//! Pulse intensity driving the cosmos' central glow.
//!
//! Every trigger bumps a generation token. The decay deadline belongs to
//! that token, so an older pulse can never zero out a newer one.

use std::time::{Duration, Instant};

use crate::constants::{PULSE_DECAY, PULSE_LENGTH_CAP, PULSE_LENGTH_DIVISOR};
use crate::models::{Message, Tone};

/// Intensity for a message: `min(1.2, len / 250) + tone bonus`
pub fn pulse_intensity(text_len: usize, tone: &Tone) -> f64 {
    (text_len as f64 / PULSE_LENGTH_DIVISOR).min(PULSE_LENGTH_CAP) + tone.pulse_bonus()
}

/// Identifies one trigger of the pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PulseToken(u64);

#[derive(Debug, Clone)]
pub struct Pulse {
    value: f64,
    token: u64,
    deadline: Option<Instant>,
    decay: Duration,
}

impl Pulse {
    pub fn new() -> Self {
        Self::with_decay(PULSE_DECAY)
    }

    pub fn with_decay(decay: Duration) -> Self {
        Self {
            value: 0.0,
            token: 0,
            deadline: None,
            decay,
        }
    }

    /// Set the pulse for a message and schedule its decay
    pub fn enhance(&mut self, message: &Message, now: Instant) -> PulseToken {
        self.trigger(pulse_intensity(message.text_len(), &message.tone), now)
    }

    /// Set the pulse to `intensity`, replacing any pulse in flight
    pub fn trigger(&mut self, intensity: f64, now: Instant) -> PulseToken {
        self.token += 1;
        self.value = intensity;
        self.deadline = Some(now + self.decay);
        PulseToken(self.token)
    }

    /// Zero the pulse if `token` is still the latest trigger.
    /// Returns false for stale tokens, which leave the pulse alone.
    pub fn expire(&mut self, token: PulseToken) -> bool {
        if token.0 != self.token {
            return false;
        }
        self.value = 0.0;
        self.deadline = None;
        true
    }

    /// Apply the pending decay once its deadline has passed (call each frame)
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.deadline {
            if now >= deadline {
                self.expire(PulseToken(self.token));
            }
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Default for Pulse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_intensity_caps_length_component() {
        assert!(close(pulse_intensity(500, &Tone::Mystical), 1.7));
        assert!(close(pulse_intensity(100, &Tone::Scientific), 0.65));
        assert!(close(pulse_intensity(0, &Tone::Contemplative), 0.35));
        assert!(close(pulse_intensity(250, &Tone::Purpose), 1.3));
        assert!(close(pulse_intensity(10_000, &Tone::from("other")), 1.5));
    }

    #[test]
    fn test_pulse_decays_after_deadline() {
        let start = Instant::now();
        let mut pulse = Pulse::new();
        pulse.trigger(1.0, start);

        pulse.tick(start + Duration::from_millis(2199));
        assert!(close(pulse.value(), 1.0));

        pulse.tick(start + Duration::from_millis(2200));
        assert!(close(pulse.value(), 0.0));
        assert!(!pulse.is_active());
    }

    #[test]
    fn test_newer_pulse_not_truncated_by_older_deadline() {
        let start = Instant::now();
        let mut pulse = Pulse::new();
        let first = pulse.trigger(1.0, start);
        pulse.trigger(0.5, start + Duration::from_millis(1500));

        // The first pulse's deadline passes: second pulse survives
        pulse.tick(start + Duration::from_millis(2300));
        assert!(close(pulse.value(), 0.5));
        assert!(!pulse.expire(first));
        assert!(close(pulse.value(), 0.5));

        // The second pulse decays on its own deadline
        pulse.tick(start + Duration::from_millis(3700));
        assert!(close(pulse.value(), 0.0));
    }

    #[test]
    fn test_expire_with_current_token() {
        let mut pulse = Pulse::new();
        let token = pulse.trigger(0.8, Instant::now());
        assert!(pulse.expire(token));
        assert!(close(pulse.value(), 0.0));
    }
}
