//! Transient notifications.
//!
//! Every notification carries its own [`NotificationId`]. The browser
//! layer runs one timer task per id that walks it through
//! [`Phase::Entering`] -> [`Phase::Visible`] -> [`Phase::Leaving`] ->
//! removed. Each transition targets a single id, so overlapping
//! notifications never affect one another.

use crate::types::NotificationId;

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Green banner.
    Success,
    /// Red banner.
    Error,
}

impl Severity {
    /// CSS class for the banner.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notify-success",
            Self::Error => "notify-error",
        }
    }
}

/// Display phase of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Inserted but still transparent.
    Entering,
    /// Faded in.
    Visible,
    /// Fading out, about to be removed.
    Leaving,
}

/// One transient banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Identity of this banner.
    pub id: NotificationId,
    /// Text shown to the user.
    pub message: String,
    /// Styling severity.
    pub severity: Severity,
    /// Current display phase.
    pub phase: Phase,
}

impl Notification {
    /// Whether the banner should currently be opaque.
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        matches!(self.phase, Phase::Visible)
    }
}

/// Ordered set of live notifications, oldest first.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    /// An empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            items: Vec::new(),
        }
    }

    /// Insert a new notification in the [`Phase::Entering`] phase.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId::new(self.next_id);
        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
            phase: Phase::Entering,
        });
        id
    }

    /// Fade the notification in. Returns `false` if `id` is gone.
    pub fn reveal(&mut self, id: NotificationId) -> bool {
        self.set_phase(id, Phase::Visible)
    }

    /// Start fading the notification out. Returns `false` if `id` is gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.set_phase(id, Phase::Leaving)
    }

    /// Remove the notification. Returns `false` if `id` is gone.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Look up a live notification.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    /// Live notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Number of live notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is displayed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn set_phase(&mut self, id: NotificationId, phase: Phase) -> bool {
        self.items
            .iter_mut()
            .find(|n| n.id == id)
            .map(|n| n.phase = phase)
            .is_some()
    }
}

/// Message for a file whose extension is not allowed.
#[must_use]
pub fn rejected_message(name: &str) -> String {
    format!("File \"{name}\" have wrong extension!")
}

/// Message for a file whose preview could not be produced.
#[must_use]
pub fn unreadable_message(name: &str, reason: &dyn std::fmt::Display) -> String {
    format!("File \"{name}\" could not be read: {reason}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_starts_entering() {
        let mut queue = NotificationQueue::new();
        let id = queue.push("hello", Severity::Success);
        let n = queue.get(id);
        assert_eq!(n.map(|n| n.phase), Some(Phase::Entering));
        assert_eq!(n.map(Notification::is_shown), Some(false));
    }

    #[test]
    fn full_lifecycle() {
        let mut queue = NotificationQueue::new();
        let id = queue.push("hello", Severity::Error);
        assert!(queue.reveal(id));
        assert_eq!(queue.get(id).map(Notification::is_shown), Some(true));
        assert!(queue.dismiss(id));
        assert_eq!(queue.get(id).map(|n| n.phase), Some(Phase::Leaving));
        assert!(queue.remove(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn overlapping_notifications_are_independent() {
        let mut queue = NotificationQueue::new();
        let first = queue.push("first", Severity::Error);
        let second = queue.push("second", Severity::Success);
        assert_ne!(first, second);

        // The first timer finishing must not touch the second banner.
        assert!(queue.reveal(second));
        assert!(queue.remove(first));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.get(second).map(|n| n.phase), Some(Phase::Visible));
        assert_eq!(
            queue.get(second).map(|n| n.message.as_str()),
            Some("second")
        );
    }

    #[test]
    fn transitions_on_removed_id_are_noops() {
        let mut queue = NotificationQueue::new();
        let id = queue.push("gone", Severity::Success);
        assert!(queue.remove(id));
        assert!(!queue.reveal(id));
        assert!(!queue.dismiss(id));
        assert!(!queue.remove(id));
    }

    #[test]
    fn ids_are_not_reused() {
        let mut queue = NotificationQueue::new();
        let a = queue.push("a", Severity::Success);
        queue.remove(a);
        let b = queue.push("b", Severity::Success);
        assert_ne!(a, b);
    }

    #[test]
    fn message_texts() {
        assert_eq!(
            rejected_message("malware.exe"),
            "File \"malware.exe\" have wrong extension!"
        );
        assert_eq!(
            unreadable_message("a.png", &"file is empty"),
            "File \"a.png\" could not be read: file is empty"
        );
    }

    #[test]
    fn severity_classes() {
        assert_eq!(Severity::Success.css_class(), "notify-success");
        assert_eq!(Severity::Error.css_class(), "notify-error");
    }
}
