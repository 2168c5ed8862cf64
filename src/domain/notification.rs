use std::time::{Duration, Instant};

/// Severity of a toast. Picks its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Neutral information.
    Info,
    /// An operation succeeded.
    Success,
    /// Something degraded but usable.
    Warn,
    /// An operation failed.
    Error,
}

/// A toast shown on top of the translator view.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Short heading.
    pub title: String,
    /// Body text.
    pub message: String,
    /// When the toast was queued.
    pub created_at: Instant,
    /// Set when the toast is first shown. Expiry counts from here.
    pub displayed_at: Option<Instant>,
    /// How long the toast stays once shown.
    pub duration: Duration,
}

impl Notification {
    /// Creates a toast with the default duration.
    #[must_use]
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            created_at: Instant::now(),
            displayed_at: None,
            duration: Duration::from_secs(5),
        }
    }

    /// Overrides the display duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// `true` once shown for longer than its duration.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.displayed_at
            .is_some_and(|start| start.elapsed() > self.duration)
    }

    /// Starts the expiry clock. Later calls keep the first instant.
    pub fn mark_displayed(&mut self) {
        if self.displayed_at.is_none() {
            self.displayed_at = Some(Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::new(NotificationLevel::Success, "Translated", "en → zh");
        assert_eq!(n.level, NotificationLevel::Success);
        assert_eq!(n.title, "Translated");
        assert_eq!(n.message, "en → zh");
        assert_eq!(n.duration, Duration::from_secs(5));
        assert!(n.displayed_at.is_none());
    }

    #[test]
    fn test_not_expired_before_display() {
        let n = Notification::new(NotificationLevel::Info, "Title", "Message")
            .with_duration(Duration::ZERO);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_notification_expiry() {
        let mut n = Notification::new(NotificationLevel::Error, "Title", "Message")
            .with_duration(Duration::from_nanos(1));
        n.mark_displayed();
        std::thread::sleep(Duration::from_millis(1));
        assert!(n.is_expired());
    }
}
