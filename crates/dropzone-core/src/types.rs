//! Shared identifier and geometry types.

use std::fmt;

/// Identity key of one accepted file.
///
/// Allocated by [`WidgetState::admit`](crate::WidgetState::admit) from a
/// per-widget counter. Never derived from file metadata, so two copies
/// of the same file (same name, same timestamp) still get distinct
/// keys. Keys are never reused within one widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u64);

impl EntryId {
    /// Wrap a raw key value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw key value, as written to the card's `data-id` attribute.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of one transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Wrap a raw id value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_id_displays_raw_value() {
        assert_eq!(EntryId::new(42).to_string(), "42");
        assert_eq!(EntryId::new(42).get(), 42);
    }

    #[test]
    fn ids_order_by_allocation() {
        assert!(EntryId::new(1) < EntryId::new(2));
        assert!(NotificationId::new(7) > NotificationId::new(3));
    }
}
