//! Dioxus UI components for dropzone.
//!
//! Provides the drop zone with its file picker, thumbnail cards,
//! notification banners, and the assembled upload widget.

mod drop_zone;
mod notifications;
mod thumbnails;
mod widget;

pub use drop_zone::DropZone;
pub use notifications::Notifications;
pub use thumbnails::Thumbnails;
pub use widget::{State, UploadWidget};
