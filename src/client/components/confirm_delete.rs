use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;

use crate::client::components::Modal;

/// Asks for explicit confirmation before a destructive call. Cancelling is
/// a no-op: nothing was mutated before the server confirms.
#[component]
pub fn ConfirmDeleteModal(
    name: String,
    on_confirm: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        Modal { title: "Confirmar exclusão", on_close,
            div { class: "flex justify-center mb-4",
                span { class: "text-error",
                    Icon { width: 48, height: 48, icon: FaTrash }
                }
            }
            p { class: "text-center text-lg",
                "Tem certeza que deseja excluir "
                span { class: "font-bold text-error", "{name}" }
                "?"
            }
            p { class: "text-center text-sm opacity-70 mt-2",
                "Essa ação não pode ser desfeita. O registro será removido permanentemente."
            }
            div { class: "modal-action justify-center",
                button { class: "btn", onclick: move |_| on_close.call(()), "Cancelar" }
                button { class: "btn btn-error", onclick: move |_| on_confirm.call(()), "Deletar" }
            }
        }
    }
}
