//! Multipart file upload via `fetch`.
//!
//! Each file goes out as its own `POST` with a `multipart/form-data`
//! body built from a `FormData` holding one Blob field. The response
//! body is never read; only the status matters.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use dropzone_core::{FileKind, UploadJob, UploadReport};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{BlobPropertyBag, FormData, Request, RequestInit, Response};

/// Upload payload stored in the pending set: the file as read at
/// decode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    /// Raw file content.
    pub bytes: Vec<u8>,
    /// Kind derived from the file name.
    pub kind: FileKind,
}

/// Errors that prevent a request from producing a response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// A browser API call returned an error or a required object was missing.
    #[error("request failed: {0}")]
    JsError(String),
}

impl From<JsValue> for TransportError {
    fn from(value: JsValue) -> Self {
        Self::JsError(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Upload one job and classify the outcome.
///
/// Never fails: transport errors become a failed [`UploadReport`].
#[allow(clippy::future_not_send)] // WASM is single-threaded; JsFuture is !Send
pub async fn send(endpoint: &str, field_name: &str, job: &UploadJob<LoadedFile>) -> UploadReport {
    match post_file(endpoint, field_name, &job.name, &job.file).await {
        Ok(status) => UploadReport::from_status(job.name.as_str(), status),
        Err(e) => UploadReport::transport_failure(job.name.as_str(), e.to_string()),
    }
}

/// `POST` one file as `multipart/form-data` and return the HTTP status.
///
/// # Errors
///
/// Returns [`TransportError::JsError`] if the body cannot be built or
/// the request fails before a response arrives (network error, CORS,
/// aborted page).
#[allow(clippy::future_not_send)] // WASM is single-threaded; JsFuture is !Send
pub async fn post_file(
    endpoint: &str,
    field_name: &str,
    file_name: &str,
    file: &LoadedFile,
) -> Result<u16, TransportError> {
    let window =
        web_sys::window().ok_or_else(|| TransportError::JsError("no global window".into()))?;

    // Wrap the bytes in a Blob so FormData sends them as a file part.
    let uint8_array = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);
    let opts = BlobPropertyBag::new();
    opts.set_type(file.kind.mime_type());
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename(field_name, &blob, file_name)?;

    // The browser sets the multipart Content-Type with its boundary.
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&form);
    let request = Request::new_with_str_and_init(endpoint, &init)?;

    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| TransportError::JsError(format!("fetch did not return a Response: {e:?}")))?;

    Ok(response.status())
}
