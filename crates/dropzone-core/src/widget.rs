//! Upload widget state: thumbnail cards, pending set, submission
//! control and notifications.
//!
//! [`WidgetState`] is the single owner of all mutable widget state. The
//! browser layer keeps one instance in a reactive signal and calls into
//! it from event handlers and completed async tasks; the component tree
//! is rendered from it.
//!
//! # Card and entry lifecycle
//!
//! ```text
//! admit(name) ──► card Loading ──complete_decode──► card Ready + pending entry
//!      │                │                                   │
//!      └─► Rejected     └─fail_decode / remove / reset──►   └─remove / reset / submit──► gone
//! ```
//!
//! A decode completing for a card that is no longer present (removed,
//! reset or submitted in the meantime) is discarded: the id of the
//! loading card is the decode's cancellation token.

use std::fmt;

use crate::config::WidgetConfig;
use crate::extension::FileKind;
use crate::notify::{self, NotificationQueue, Severity};
use crate::types::{Dimensions, EntryId, NotificationId};
use crate::upload::{UploadJob, UploadReport};

/// What a card displays once its file is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// An `<img>` source (a Blob URL in the browser).
    Image {
        /// Image source URL.
        src: String,
        /// Display size, when known ahead of the browser's decode.
        size: Option<Dimensions>,
    },
    /// A document icon.
    Document,
}

/// Display state of one thumbnail card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardState {
    /// Decode in progress; shows a loading indicator.
    Loading,
    /// Decoded; shows the preview and a removal control.
    Ready(Preview),
}

/// The visual representation of one accepted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailCard {
    /// Identity key, rendered as the card's `data-id`.
    pub id: EntryId,
    /// File name, used as alt text.
    pub name: String,
    /// Loading or ready.
    pub state: CardState,
}

impl ThumbnailCard {
    /// Whether the card still waits for its decode.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, CardState::Loading)
    }
}

/// An accepted, decoded file awaiting submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEntry<F> {
    /// Identity key shared with the file's card.
    pub id: EntryId,
    /// Original file name.
    pub name: String,
    /// Payload to upload.
    pub file: F,
}

/// Result of [`WidgetState::admit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The name passed validation; a loading card was inserted and the
    /// caller should start decoding.
    Accepted {
        /// Key of the new card.
        id: EntryId,
        /// Kind derived from the extension.
        kind: FileKind,
    },
    /// The extension is not allowed; an error notification was queued.
    Rejected(NotificationId),
}

/// Result of [`WidgetState::complete_decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The file joined the pending set.
    Committed,
    /// The card was removed while decoding; the result was dropped.
    Discarded,
}

/// All mutable state of one upload widget.
///
/// `F` is the upload payload attached at decode completion (the file
/// bytes in the browser, anything cheap in tests).
#[derive(Debug, Clone)]
pub struct WidgetState<F> {
    config: WidgetConfig,
    next_entry: u64,
    cards: Vec<ThumbnailCard>,
    pending: Vec<PendingEntry<F>>,
    submission_visible: bool,
    drop_zone_padding: u32,
    notifications: NotificationQueue,
}

impl<F> WidgetState<F> {
    /// Create an empty widget.
    #[must_use]
    pub const fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            next_entry: 0,
            cards: Vec::new(),
            pending: Vec::new(),
            submission_visible: false,
            drop_zone_padding: 0,
            notifications: NotificationQueue::new(),
        }
    }

    /// The configuration the widget was built with.
    #[must_use]
    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Validate a candidate file name.
    ///
    /// Accepted names get a fresh [`EntryId`] and a loading card (phase
    /// one of rendering). Rejected names get an error notification and
    /// leave cards and pending set untouched.
    pub fn admit(&mut self, name: &str) -> Admission {
        let Some(kind) = FileKind::from_name(name) else {
            let id = self
                .notifications
                .push(notify::rejected_message(name), Severity::Error);
            return Admission::Rejected(id);
        };

        self.next_entry += 1;
        let id = EntryId::new(self.next_entry);
        self.cards.push(ThumbnailCard {
            id,
            name: name.to_owned(),
            state: CardState::Loading,
        });
        Admission::Accepted { id, kind }
    }

    /// Finish phase two of rendering: show the preview and add the file
    /// to the pending set.
    ///
    /// Only commits while the card for `id` is still present and still
    /// loading; otherwise returns [`DecodeOutcome::Discarded`] and the
    /// caller should release whatever `preview` holds.
    pub fn complete_decode(&mut self, id: EntryId, file: F, preview: Preview) -> DecodeOutcome {
        let Some(card) = self
            .cards
            .iter_mut()
            .find(|c| c.id == id && c.is_loading())
        else {
            return DecodeOutcome::Discarded;
        };

        card.state = CardState::Ready(preview);
        let name = card.name.clone();
        self.add(PendingEntry { id, name, file });
        DecodeOutcome::Committed
    }

    /// Drop the placeholder of a failed decode and tell the user.
    ///
    /// Returns `None` (and queues nothing) when the card was already
    /// removed.
    pub fn fail_decode(&mut self, id: EntryId, reason: &dyn fmt::Display) -> Option<NotificationId> {
        let index = self
            .cards
            .iter()
            .position(|c| c.id == id && c.is_loading())?;
        let card = self.cards.remove(index);
        Some(
            self.notifications
                .push(notify::unreadable_message(&card.name, reason), Severity::Error),
        )
    }

    /// Remove one file by key: its card (loading or ready) and its
    /// pending entry, if any.
    ///
    /// Returns `false` and changes nothing when no card has that key.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        if self.cards.len() == before {
            return false;
        }
        self.pending.retain(|e| e.id != id);
        self.refresh();
        true
    }

    /// Empty the pending set and remove every card, loading ones
    /// included.
    pub fn reset_all(&mut self) {
        self.pending.clear();
        self.cards.clear();
        self.refresh();
    }

    /// Take every pending file out for upload and reset the widget.
    ///
    /// The widget is empty when this returns, before any transmission
    /// has even started.
    pub fn submit(&mut self) -> Vec<UploadJob<F>> {
        let jobs = self
            .pending
            .drain(..)
            .map(|entry| UploadJob {
                id: entry.id,
                name: entry.name,
                file: entry.file,
            })
            .collect();
        self.reset_all();
        jobs
    }

    /// Queue the notification for one finished upload.
    pub fn record_upload(&mut self, report: &UploadReport) -> NotificationId {
        self.notifications.push(report.message(), report.severity())
    }

    /// Reconcile the submission control and drop-zone padding with the
    /// pending set. Idempotent; every mutation calls it.
    pub fn refresh(&mut self) {
        self.submission_visible = !self.pending.is_empty();
        self.drop_zone_padding = if self.submission_visible {
            self.config.reserved_padding_px
        } else {
            0
        };
    }

    /// Thumbnail cards in insertion order.
    #[must_use]
    pub fn cards(&self) -> &[ThumbnailCard] {
        &self.cards
    }

    /// Pending entries in decode-completion order.
    #[must_use]
    pub fn pending(&self) -> &[PendingEntry<F>] {
        &self.pending
    }

    /// Number of pending entries.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the submission control is attached.
    #[must_use]
    pub const fn submission_visible(&self) -> bool {
        self.submission_visible
    }

    /// Bottom padding of the drop zone, in pixels.
    #[must_use]
    pub const fn drop_zone_padding(&self) -> u32 {
        self.drop_zone_padding
    }

    /// Live notifications.
    #[must_use]
    pub const fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Live notifications, for the timer tasks driving their phases.
    pub const fn notifications_mut(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    fn add(&mut self, entry: PendingEntry<F>) {
        self.pending.push(entry);
        self.refresh();
    }
}
