// Toast queue for short user-facing notices shown in the status bar.
// Every notice auto-dismisses; higher levels pre-empt lower ones.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use entrecamadas_core::constants::NOTICE_DURATION;

/// Notification priority levels (higher = more important)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl NotificationLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "ℹ",
            NotificationLevel::Success => "✓",
            NotificationLevel::Error => "✗",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration: Duration,
    pub shown_at: Option<Instant>,
}

impl Notification {
    fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            duration: NOTICE_DURATION,
            shown_at: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error)
    }

    /// Set a custom duration for this notification
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.shown_at
            .map(|shown| now.saturating_duration_since(shown) >= self.duration)
            .unwrap_or(false)
    }

    fn mark_shown(&mut self, now: Instant) {
        if self.shown_at.is_none() {
            self.shown_at = Some(now);
        }
    }
}

/// Queue of notifications with priority handling
#[derive(Debug, Default)]
pub struct NotificationQueue {
    /// Pending notifications (front = next to show)
    queue: VecDeque<Notification>,
    current: Option<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    /// Add a notification. A higher level replaces the current one (which
    /// is dropped); an identical message already on screen is skipped.
    pub fn push_at(&mut self, mut notification: Notification, now: Instant) {
        if let Some(ref current) = self.current {
            if current.message == notification.message {
                return;
            }
            if notification.level > current.level {
                notification.mark_shown(now);
                self.current = Some(notification);
                return;
            }
            // Higher priority at front
            let pos = self
                .queue
                .iter()
                .position(|n| n.level < notification.level)
                .unwrap_or(self.queue.len());
            self.queue.insert(pos, notification);
            return;
        }

        notification.mark_shown(now);
        self.current = Some(notification);
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
        self.advance(Instant::now());
    }

    /// Expire the current notification and advance (call each tick)
    pub fn tick(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.current = None;
            self.advance(now);
        }
    }

    fn advance(&mut self, now: Instant) {
        if self.current.is_none() {
            if let Some(mut next) = self.queue.pop_front() {
                next.mark_shown(now);
                self.current = Some(next);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::info("test");
        assert_eq!(n.level, NotificationLevel::Info);
        assert_eq!(n.duration, Duration::from_secs(3));

        let n = Notification::error("error").duration(Duration::from_secs(10));
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(n.duration, Duration::from_secs(10));
    }

    #[test]
    fn test_auto_dismiss_after_three_seconds() {
        let start = Instant::now();
        let mut q = NotificationQueue::new();
        q.push_at(Notification::success("saved"), start);

        q.tick(start + Duration::from_millis(2999));
        assert_eq!(q.current().unwrap().message, "saved");

        q.tick(start + Duration::from_secs(3));
        assert!(q.is_empty());
    }

    #[test]
    fn test_priority_replaces_current() {
        let mut q = NotificationQueue::new();
        q.push(Notification::info("low priority"));
        q.push(Notification::error("high priority"));
        assert_eq!(q.current().unwrap().message, "high priority");

        // The replaced notice was dropped, not re-queued
        q.dismiss();
        assert!(q.current().is_none());
    }

    #[test]
    fn test_queued_notice_follows_current() {
        let start = Instant::now();
        let mut q = NotificationQueue::new();
        q.push_at(Notification::success("first"), start);
        q.push_at(Notification::info("second"), start);

        q.tick(start + Duration::from_secs(3));
        assert_eq!(q.current().unwrap().message, "second");
    }

    #[test]
    fn test_duplicate_on_screen_is_skipped() {
        let mut q = NotificationQueue::new();
        q.push(Notification::info("same"));
        q.push(Notification::info("same"));
        q.dismiss();
        assert!(q.is_empty());
    }

    #[test]
    fn test_level_ordering() {
        assert!(NotificationLevel::Error > NotificationLevel::Success);
        assert!(NotificationLevel::Success > NotificationLevel::Info);
    }
}
