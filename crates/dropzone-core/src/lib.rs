//! dropzone-core: Pure upload widget state machine (sans-IO).
//!
//! Models everything the upload widget decides on its own:
//! extension validation -> thumbnail decoding -> pending set and
//! thumbnail cards -> submission -> per-file upload outcome ->
//! transient notifications.
//!
//! This crate has **no I/O dependencies** -- it operates on file names,
//! in-memory byte slices and HTTP status codes, and returns structured
//! data. All browser interaction (events, `fetch`, Blob URLs, timers)
//! lives in `dropzone-io`.

pub mod config;
pub mod extension;
pub mod notify;
pub mod thumbnail;
pub mod types;
pub mod upload;
pub mod widget;

pub use config::{ConfigError, NotifyTimings, WidgetConfig};
pub use extension::{ALLOWED_EXTENSIONS, FileKind, is_accepted};
pub use notify::{Notification, NotificationQueue, Phase, Severity};
pub use thumbnail::{Thumbnail, ThumbnailError};
pub use types::{Dimensions, EntryId, NotificationId};
pub use upload::{UploadError, UploadJob, UploadReport};
pub use widget::{Admission, CardState, DecodeOutcome, PendingEntry, Preview, ThumbnailCard, WidgetState};
