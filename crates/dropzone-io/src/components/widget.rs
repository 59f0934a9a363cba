//! The assembled upload widget.
//!
//! Owns one [`WidgetState`] signal and wires the drop zone, thumbnail
//! cards, submission control and notifications to it. Async work
//! (reading and decoding files, uploads, notification timers) runs in
//! spawned tasks that write their results back into the signal.

use dioxus::html::FileData;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use dropzone_core::thumbnail::{self, ThumbnailError};
use dropzone_core::{
    Admission, DecodeOutcome, EntryId, FileKind, Notification, Thumbnail, WidgetConfig,
    WidgetState,
};

use super::drop_zone::DropZone;
use super::notifications::{self, Notifications};
use super::thumbnails::Thumbnails;
use crate::preview;
use crate::transport::{self, LoadedFile};

/// Widget state as held by the browser layer.
pub type State = WidgetState<LoadedFile>;

/// Props for the [`UploadWidget`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadWidgetProps {
    /// Configuration, read once when the widget mounts.
    config: WidgetConfig,
}

/// Drag-and-drop upload widget with thumbnails and per-file uploads.
#[component]
pub fn UploadWidget(props: UploadWidgetProps) -> Element {
    let mut state = use_signal(|| State::new(props.config.clone()));

    let on_files = move |files: Vec<FileData>| {
        for file in files {
            admit_file(state, file);
        }
    };

    let on_remove = move |id: EntryId| {
        if state.write().remove(id) {
            debug!(%id, "removed pending file");
        }
    };

    let on_submit = move |evt: MouseEvent| {
        evt.prevent_default();
        submit_all(state);
    };

    let snapshot = state.read();
    let cards = snapshot.cards().to_vec();
    let notes: Vec<Notification> = snapshot.notifications().iter().cloned().collect();
    let padding = snapshot.drop_zone_padding();
    let show_submit = snapshot.submission_visible();
    drop(snapshot);

    rsx! {
        div { class: "upload-widget",
            form {
                class: "upload-form",
                onsubmit: move |evt| evt.prevent_default(),

                DropZone {
                    padding: padding,
                    on_files: on_files,

                    if show_submit {
                        button {
                            id: "form_btn",
                            class: "submit-button",
                            r#type: "button",
                            onclick: on_submit,
                            "Upload"
                        }
                    }
                }
            }

            Thumbnails {
                cards: cards,
                on_remove: on_remove,
            }

            Notifications { notifications: notes }
        }
    }
}

/// Validate one candidate and, if accepted, start decoding it.
fn admit_file(mut state: Signal<State>, file: FileData) {
    let name = file.name();
    let admission = state.write().admit(&name);
    match admission {
        Admission::Rejected(note) => {
            warn!(%name, "rejected file with disallowed extension");
            notifications::schedule(state, note);
        }
        Admission::Accepted { id, kind } => {
            debug!(%id, %name, "accepted file, decoding preview");
            spawn(async move {
                decode_file(state, id, name, kind, file).await;
            });
        }
    }
}

/// Read and decode one accepted file, then commit or fail its card.
#[allow(clippy::future_not_send)] // WASM is single-threaded; FileData is !Send
async fn decode_file(
    mut state: Signal<State>,
    id: EntryId,
    name: String,
    kind: FileKind,
    file: FileData,
) {
    let bytes = match file.read_bytes().await {
        Ok(bytes) => bytes.to_vec(),
        Err(e) => {
            fail(state, id, &name, &ThumbnailError::Read(e.to_string()));
            return;
        }
    };

    let edge = state.peek().config().thumbnail_edge;
    let thumb = match thumbnail::render(&bytes, kind, edge) {
        Ok(thumb) => thumb,
        Err(e) => {
            fail(state, id, &name, &e);
            return;
        }
    };
    if matches!(thumb, Thumbnail::Raster { display: None, .. }) {
        debug!(%id, %name, "image header unreadable, showing file as is");
    }
    let shown = match preview::to_preview(&bytes, thumb) {
        Ok(shown) => shown,
        Err(e) => {
            fail(state, id, &name, &e);
            return;
        }
    };

    let outcome = state
        .write()
        .complete_decode(id, LoadedFile { bytes, kind }, shown.clone());
    match outcome {
        DecodeOutcome::Committed => debug!(%id, %name, "file added to pending set"),
        DecodeOutcome::Discarded => {
            debug!(%id, %name, "card removed while decoding, dropping preview");
            preview::release(&shown);
        }
    }
}

/// Replace a failed decode's placeholder with an error notification.
fn fail(mut state: Signal<State>, id: EntryId, name: &str, reason: &dyn std::fmt::Display) {
    warn!(%id, %name, "could not produce preview: {reason}");
    let note = state.write().fail_decode(id, reason);
    if let Some(note) = note {
        notifications::schedule(state, note);
    }
}

/// Hand every pending file to its own upload task and reset the widget.
///
/// The reset happens synchronously, before any response arrives.
fn submit_all(mut state: Signal<State>) {
    let (jobs, endpoint, field_name) = {
        let mut guard = state.write();
        let jobs = guard.submit();
        let config = guard.config();
        (jobs, config.endpoint.clone(), config.field_name.clone())
    };
    debug!(count = jobs.len(), %endpoint, "submitting pending files");

    for job in jobs {
        let endpoint = endpoint.clone();
        let field_name = field_name.clone();
        spawn(async move {
            debug!(id = %job.id, name = %job.name, "uploading file");
            let report = transport::send(&endpoint, &field_name, &job).await;
            if let Err(ref e) = report.result {
                warn!(id = %job.id, name = %report.name, "upload failed: {e}");
            }
            let note = state.write().record_upload(&report);
            notifications::schedule(state, note);
        });
    }
}
