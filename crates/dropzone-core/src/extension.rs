//! File extension validation against the fixed allow-list.
//!
//! Validation is a pure string comparison on the part of the filename
//! after its last `.`. No content or MIME sniffing happens here.

/// Allowed file extensions, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "pdf"];

/// The extension of `name`: everything after the last `.`.
///
/// A name without any `.` yields the whole name, mirroring a
/// split-and-take-last. A trailing `.` yields an empty extension.
#[must_use]
pub fn extension(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, ext)| ext)
}

/// Check whether a filename has an allowed extension.
#[must_use]
pub fn is_accepted(name: &str) -> bool {
    let ext = extension(name);
    ALLOWED_EXTENSIONS
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(ext))
}

/// Value for the file picker's `accept` attribute, e.g. `".jpg,.jpeg,..."`.
#[must_use]
pub fn accept_attribute() -> String {
    ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// The kind of an accepted file, derived from its extension.
///
/// Determines how the thumbnail is produced and which MIME type the
/// file is uploaded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// `.jpg` / `.jpeg`
    Jpeg,
    /// `.png`
    Png,
    /// `.gif`
    Gif,
    /// `.pdf`
    Pdf,
}

impl FileKind {
    /// Classify `name` by its extension. `None` for rejected names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if !is_accepted(name) {
            return None;
        }
        match extension(name).to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "gif" => Some(Self::Gif),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// MIME type used for the multipart upload and preview Blobs.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Pdf => "application/pdf",
        }
    }

    /// Whether the file decodes to a raster image preview.
    #[must_use]
    pub const fn is_raster(self) -> bool {
        !matches!(self, Self::Pdf)
    }

    /// The matching `image` crate decoder, for raster kinds.
    #[must_use]
    pub const fn image_format(self) -> Option<image::ImageFormat> {
        match self {
            Self::Jpeg => Some(image::ImageFormat::Jpeg),
            Self::Png => Some(image::ImageFormat::Png),
            Self::Gif => Some(image::ImageFormat::Gif),
            Self::Pdf => None,
        }
    }
}
