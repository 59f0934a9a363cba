//! Upload jobs and outcome classification.
//!
//! The browser layer performs the actual `POST`; this module decides
//! what counts as success and what the user is told.

use crate::notify::Severity;
use crate::types::EntryId;

/// The only HTTP status treated as a successful upload.
pub const SUCCESS_STATUS: u16 = 200;

/// Why one upload failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// The server answered with a status other than 200.
    #[error("server responded with status {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
}

/// Classify a response status.
///
/// # Errors
///
/// Returns [`UploadError::Status`] for anything but [`SUCCESS_STATUS`].
pub const fn classify_status(status: u16) -> Result<(), UploadError> {
    if status == SUCCESS_STATUS {
        Ok(())
    } else {
        Err(UploadError::Status(status))
    }
}

/// One file taken out of the pending set for transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadJob<F> {
    /// Key the file had while pending.
    pub id: EntryId,
    /// Original file name, sent as the multipart filename.
    pub name: String,
    /// Payload handed over at decode completion.
    pub file: F,
}

/// The outcome of one transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReport {
    /// File name the outcome belongs to.
    pub name: String,
    /// `Ok` on HTTP 200.
    pub result: Result<(), UploadError>,
}

impl UploadReport {
    /// Build a report from a response status.
    #[must_use]
    pub fn from_status(name: impl Into<String>, status: u16) -> Self {
        Self {
            name: name.into(),
            result: classify_status(status),
        }
    }

    /// Build a report for a request that failed before any response.
    #[must_use]
    pub fn transport_failure(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            result: Err(UploadError::Transport(reason.into())),
        }
    }

    /// Severity of the resulting notification.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        if self.result.is_ok() {
            Severity::Success
        } else {
            Severity::Error
        }
    }

    /// Text of the resulting notification.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.result {
            Ok(()) => format!("File \"{}\" was uploaded successfully!", self.name),
            Err(e) => format!("File \"{}\" was not uploaded: {e}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_200_is_success() {
        assert_eq!(classify_status(200), Ok(()));
        assert_eq!(classify_status(201), Err(UploadError::Status(201)));
        assert_eq!(classify_status(204), Err(UploadError::Status(204)));
        assert_eq!(classify_status(404), Err(UploadError::Status(404)));
        assert_eq!(classify_status(500), Err(UploadError::Status(500)));
        assert_eq!(classify_status(0), Err(UploadError::Status(0)));
    }

    #[test]
    fn success_report() {
        let report = UploadReport::from_status("photo.jpg", 200);
        assert_eq!(report.severity(), Severity::Success);
        assert_eq!(report.message(), "File \"photo.jpg\" was uploaded successfully!");
    }

    #[test]
    fn status_failure_report() {
        let report = UploadReport::from_status("photo.jpg", 413);
        assert_eq!(report.severity(), Severity::Error);
        assert_eq!(
            report.message(),
            "File \"photo.jpg\" was not uploaded: server responded with status 413"
        );
    }

    #[test]
    fn transport_failure_report() {
        let report = UploadReport::transport_failure("doc.pdf", "network unreachable");
        assert_eq!(report.severity(), Severity::Error);
        assert_eq!(
            report.message(),
            "File \"doc.pdf\" was not uploaded: network unreachable"
        );
    }
}
