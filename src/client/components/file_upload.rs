use dioxus::prelude::*;
use dioxus::html::{FileData, HasFileData};
use dioxus_logger::tracing;

use crate::model::document::SelectedFile;

/// Drag-and-drop / picker file selector.
///
/// Holds only the drag-active flag; the selected file belongs to the
/// parent, and the upload itself only happens when the user asks for it.
#[component]
pub fn FileUpload(
    file_name: Option<String>,
    on_select: EventHandler<SelectedFile>,
    on_upload: EventHandler<()>,
) -> Element {
    let mut dragging = use_signal(|| false);

    let zone_class = if dragging() {
        "border-primary bg-primary/10"
    } else {
        "border-base-300 bg-base-100"
    };

    rsx! {
        div { class: "p-4 bg-base-200 rounded-lg",
            h3 { class: "text-lg font-semibold mb-3", "Anexar Documento" }
            label {
                class: format!("flex flex-col items-center justify-center border-2 border-dashed p-6 rounded-md text-center cursor-pointer transition {zone_class}"),
                ondragover: move |evt| {
                    evt.prevent_default();
                    dragging.set(true);
                },
                ondragleave: move |_| dragging.set(false),
                ondrop: move |evt| {
                    evt.prevent_default();
                    dragging.set(false);
                    read_selection(evt.files(), on_select);
                },
                p { class: "opacity-70", "Arraste um arquivo aqui ou clique para selecionar" }
                input {
                    r#type: "file",
                    class: "hidden",
                    onchange: move |evt| read_selection(evt.files(), on_select),
                }
            }
            if let Some(name) = file_name {
                p { class: "mt-2 font-medium", "{name}" }
            }
            button {
                class: "btn btn-primary mt-4",
                onclick: move |_| on_upload.call(()),
                "Enviar Documento"
            }
        }
    }
}

/// Reads the first file of a selection into memory and hands it up.
fn read_selection(files: Vec<FileData>, on_select: EventHandler<SelectedFile>) {
    let Some(file) = files.into_iter().next() else {
        return;
    };
    spawn(async move {
        match file.read_bytes().await {
            Ok(contents) => on_select.call(SelectedFile {
                name: file.name(),
                contents: contents.to_vec(),
            }),
            Err(_) => tracing::error!("failed to read the selected file"),
        }
    });
}
