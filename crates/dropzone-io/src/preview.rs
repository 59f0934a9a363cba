//! Thumbnail display via Blob URLs.
//!
//! Wraps the original file bytes in a `Blob` typed after the file's
//! extension and hands out an object URL usable as an `<img src>`. The
//! browser decodes the image itself, so nothing heavy runs in WASM.

use dropzone_core::{Preview, Thumbnail};
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur while turning a thumbnail into a preview.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for PreviewError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Turn a prepared thumbnail of `bytes` into something a card can
/// display.
///
/// Raster thumbnails become a Blob URL that must be released with
/// [`release`] once the card no longer shows it.
///
/// # Errors
///
/// Returns [`PreviewError::JsError`] if Blob or URL creation fails.
pub fn to_preview(bytes: &[u8], thumbnail: Thumbnail) -> Result<Preview, PreviewError> {
    match thumbnail {
        Thumbnail::Raster { mime, display } => Ok(Preview::Image {
            src: bytes_to_blob_url(bytes, mime)?,
            size: display,
        }),
        Thumbnail::Document => Ok(Preview::Document),
    }
}

/// Release the browser resources held by a preview, if any.
pub fn release(preview: &Preview) {
    if let Preview::Image { src, .. } = preview {
        revoke_blob_url(src);
    }
}

/// Create a Blob URL of type `mime` over `bytes`.
fn bytes_to_blob_url(bytes: &[u8], mime: &str) -> Result<String, PreviewError> {
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(url)
}

/// Revoke a Blob URL created by [`to_preview`].
///
/// Best-effort: failures are silently ignored since the URL may have
/// already been revoked.
pub fn revoke_blob_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
