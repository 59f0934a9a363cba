use dioxus::prelude::*;
use dropzone_io::UploadWidget;

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Reads the host page's configuration once and mounts the upload
/// widget with it.
fn app() -> Element {
    let config = use_hook(dropzone_io::host::load_config);

    rsx! {
        // Widget styles: drop zone states, thumbnail cards, banner fades.
        style { dangerous_inner_html: include_str!("../assets/dropzone.css") }

        div { class: "page",
            header { class: "page-header",
                h1 { "Upload files" }
                p { class: "page-subtitle",
                    "Images and PDFs are previewed here before they are sent."
                }
            }

            UploadWidget { config: config }
        }
    }
}
