//! dropzone-io: Browser I/O and Dioxus component library.
//!
//! Handles file reading, thumbnail Blob URLs, multipart uploads via
//! `fetch`, host-page configuration, and provides the UI components
//! for the dropzone web application.

pub mod components;
pub mod host;
pub mod preview;
pub mod transport;

pub use components::{DropZone, Notifications, Thumbnails, UploadWidget};
pub use transport::LoadedFile;
