//! Drop zone with drag-and-drop and a multi-file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dropzone_core::extension;

/// Props for the [`DropZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DropZoneProps {
    /// Bottom padding in pixels, reserving room for the submission control.
    padding: u32,
    /// Called with every file from one drop or picker change, in order.
    on_files: EventHandler<Vec<FileData>>,
    /// Content rendered inside the zone below the picker (the
    /// submission control).
    children: Element,
}

/// Nesting depth of a drag over the zone.
///
/// `dragenter`/`dragleave` also fire when the pointer crosses the
/// zone's own children, so a plain flag would flicker off on every
/// inner boundary. Each enter is matched by a leave; the drag is over
/// the zone while the depth is non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DragDepth(u32);

impl DragDepth {
    const fn enter(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    const fn leave(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    const fn is_over(self) -> bool {
        self.0 > 0
    }
}

/// A drag-and-drop zone with a file picker button.
///
/// Candidate files are forwarded unfiltered; validation happens in the
/// widget state. While a drag hovers the zone it carries the
/// `dragged-over` class.
#[component]
pub fn DropZone(props: DropZoneProps) -> Element {
    let mut depth = use_signal(DragDepth::default);
    let accept = extension::accept_attribute();

    let handle_files = move |evt: FormEvent| {
        props.on_files.call(evt.files());
    };

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        depth.set(DragDepth::default());
        props.on_files.call(evt.files());
    };

    let state_class = if depth().is_over() { "dragged-over" } else { "" };
    let padding = props.padding;

    rsx! {
        div {
            class: "drop-zone {state_class}",
            style: "padding-bottom: {padding}px;",
            ondragenter: move |evt| {
                evt.prevent_default();
                depth.with_mut(|d| *d = d.enter());
            },
            ondragover: move |evt| {
                evt.prevent_default();
            },
            ondragleave: move |evt| {
                evt.prevent_default();
                depth.with_mut(|d| *d = d.leave());
            },
            ondrop: handle_drop,

            p { class: "drop-zone-hint",
                "Drop files here or "
            }

            label { class: "picker-button",
                input {
                    r#type: "file",
                    multiple: true,
                    accept: "{accept}",
                    class: "hidden",
                    onchange: handle_files,
                }
                "Choose Files"
            }

            p { class: "drop-zone-formats",
                "JPG, JPEG, PNG, GIF, PDF"
            }

            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_inner_elements_keeps_the_zone_highlighted() {
        // zone -> hint paragraph -> back to zone -> out.
        let over_zone = DragDepth::default().enter();
        let over_hint = over_zone.enter();
        let left_zone_for_hint = over_hint.leave();
        assert!(left_zone_for_hint.is_over());

        let back_on_zone = left_zone_for_hint.enter().leave();
        assert!(back_on_zone.is_over());
        assert!(!back_on_zone.leave().is_over());
    }

    #[test]
    fn unmatched_leave_does_not_underflow() {
        let depth = DragDepth::default().leave();
        assert!(!depth.is_over());
        assert!(depth.enter().is_over());
    }
}
