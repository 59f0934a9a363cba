//! Thumbnail cards for accepted files.
//!
//! A card shows a loading indicator while its file decodes, then the
//! preview plus a removal control. Every card carries its entry key in
//! `data-id`.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdLoader, LdX};
use dropzone_core::{CardState, EntryId, Preview, ThumbnailCard};

use crate::preview;

/// Props for the [`Thumbnails`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ThumbnailsProps {
    /// Cards in insertion order.
    cards: Vec<ThumbnailCard>,
    /// Fired with the key of a card whose removal control was clicked.
    on_remove: EventHandler<EntryId>,
}

/// Grid of thumbnail cards.
#[component]
pub fn Thumbnails(props: ThumbnailsProps) -> Element {
    rsx! {
        div { class: "thumbnails",
            for card in props.cards {
                ThumbnailTile {
                    key: "{card.id}",
                    card: card.clone(),
                    on_remove: props.on_remove,
                }
            }
        }
    }
}

/// Props for the [`ThumbnailTile`] component.
#[derive(Props, Clone, PartialEq)]
struct ThumbnailTileProps {
    card: ThumbnailCard,
    on_remove: EventHandler<EntryId>,
}

/// A single card.
#[component]
fn ThumbnailTile(props: ThumbnailTileProps) -> Element {
    let id = props.card.id;
    let name = props.card.name.clone();

    // The Blob URL is normally revoked once the image loads; cover
    // cards that unmount before that happens.
    let current_src = use_hook(|| Rc::new(RefCell::new(None::<String>)));
    if let CardState::Ready(Preview::Image { ref src, .. }) = props.card.state {
        *current_src.borrow_mut() = Some(src.clone());
    }
    {
        let current_src = Rc::clone(&current_src);
        use_drop(move || {
            if let Some(url) = current_src.borrow().as_deref() {
                preview::revoke_blob_url(url);
            }
        });
    }

    let content = match props.card.state {
        CardState::Loading => rsx! {
            Icon { class: "loader-icon", width: 48, height: 48, icon: LdLoader }
        },
        CardState::Ready(ref ready) => {
            let on_remove = props.on_remove;
            rsx! {
                {render_preview(id, &name, ready)}
                button {
                    class: "close-button",
                    r#type: "button",
                    aria_label: "Remove {name}",
                    onclick: move |_| on_remove.call(id),
                    Icon { class: "close-icon", width: 24, height: 24, icon: LdX }
                }
            }
        }
    };

    rsx! {
        div {
            class: "thumbnail-card",
            "data-id": "{id}",
            {content}
        }
    }
}

/// Render the preview part of a ready card.
fn render_preview(id: EntryId, name: &str, ready: &Preview) -> Element {
    match ready {
        Preview::Image { src, size } => {
            let url = src.clone();
            let url_for_error = src.clone();
            let width = size.map(|s| s.width);
            let height = size.map(|s| s.height);
            rsx! {
                img {
                    src: "{src}",
                    alt: "{name}",
                    "data-id": "{id}",
                    decoding: "async",
                    width: width,
                    height: height,
                    onload: move |_| preview::revoke_blob_url(&url),
                    onerror: move |_| preview::revoke_blob_url(&url_for_error),
                }
            }
        }
        Preview::Document => rsx! {
            div { class: "document-preview", "data-id": "{id}",
                Icon { class: "document-icon", width: 48, height: 48, icon: LdFileText }
                span { class: "document-name", "{name}" }
            }
        },
    }
}
