use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPencil, FaPlus, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::contractor::ContractorFormModal;
use crate::client::components::{ConfirmDeleteModal, Page, Toasts};
use crate::client::config::ApiConfig;
use crate::client::util::format::{format_phone, format_tax_id, strip_digits};
use crate::model::contractor::ContractorDto;

/// Which contractor modal is open, if any.
#[derive(Clone, PartialEq)]
enum ContractorModal {
    /// Add (`None`) or edit (`Some`) through the combined form.
    Form(Option<ContractorDto>),
    Delete(ContractorDto),
}

/// Case-insensitive substring filter over name, email and phone digits.
fn matches_search(contractor: &ContractorDto, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    contractor.name.to_lowercase().contains(term)
        || contractor.email.to_lowercase().contains(term)
        || contractor.phone.contains(term)
}

#[component]
pub fn Contractors() -> Element {
    let config = use_context::<ApiConfig>();
    let mut toasts = use_context::<Toasts>();
    let mut modal = use_signal(|| None::<ContractorModal>);
    let mut search = use_signal(String::new);

    let mut contractors = use_resource({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move { api::contractors::list_contractors(&config).await }
        }
    });

    let confirm_delete = move |contractor: ContractorDto| {
        let config = config.clone();
        spawn(async move {
            let tax_id = strip_digits(&contractor.tax_id);
            match api::contractors::delete_contractor(&config, &tax_id).await {
                Ok(()) => {
                    toasts.success("Contratante removido com sucesso!");
                    modal.set(None);
                    contractors.restart();
                }
                Err(error) => {
                    tracing::error!("failed to delete contractor {tax_id}: {error}");
                    toasts.error("Erro ao remover contratante.");
                }
            }
        });
    };

    rsx! {
        Title { "Contratantes | Canteiro" }
        Meta {
            name: "description",
            content: "Lista de contratantes do gerenciador de projetos."
        }
        Page { class: "flex flex-col items-center",
            h1 { class: "text-3xl font-bold mb-6", "Lista de Contratantes" }

            div { class: "flex justify-between w-full max-w-4xl mb-4 gap-2",
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    placeholder: "Pesquisar contratante...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| modal.set(Some(ContractorModal::Form(None))),
                    Icon { width: 18, height: 18, icon: FaPlus }
                    "Novo"
                }
            }

            div { class: "w-full max-w-4xl bg-base-100 p-4 rounded-lg shadow",
                match &*contractors.read_unchecked() {
                    None => rsx!(div { class: "flex justify-center py-6",
                        span { class: "loading loading-spinner" }
                    }),
                    Some(Err(error)) => {
                        tracing::error!("failed to fetch contractors: {error}");
                        rsx!(p { class: "text-error text-center",
                            "Não foi possível carregar os contratantes."
                        })
                    }
                    Some(Ok(list)) => {
                        let term = search.read().to_lowercase();
                        let filtered: Vec<ContractorDto> = list
                            .iter()
                            .filter(|contractor| matches_search(contractor, &term))
                            .cloned()
                            .collect();

                        if filtered.is_empty() {
                            rsx!(p { class: "opacity-70 text-center", "Nenhum contratante encontrado." })
                        } else {
                            rsx! {
                                ul { class: "divide-y divide-base-300",
                                    for contractor in filtered {
                                        li {
                                            key: "{contractor.tax_id}",
                                            class: "p-4 flex justify-between items-center",
                                            div {
                                                p { class: "text-lg font-semibold", "{contractor.name}" }
                                                p { class: "text-sm opacity-70", {format_tax_id(&contractor.tax_id)} }
                                                p { class: "text-sm opacity-70", "{contractor.email}" }
                                                p { class: "text-sm opacity-70", {format_phone(&contractor.phone)} }
                                                p { class: "text-sm opacity-60", "{contractor.address}" }
                                            }
                                            div { class: "flex items-center gap-3",
                                                button {
                                                    class: "btn btn-ghost btn-sm text-primary",
                                                    onclick: {
                                                        let contractor = contractor.clone();
                                                        move |_| modal.set(Some(ContractorModal::Form(Some(contractor.clone()))))
                                                    },
                                                    Icon { width: 18, height: 18, icon: FaPencil }
                                                }
                                                button {
                                                    class: "btn btn-ghost btn-sm text-error",
                                                    onclick: {
                                                        let contractor = contractor.clone();
                                                        move |_| modal.set(Some(ContractorModal::Delete(contractor.clone())))
                                                    },
                                                    Icon { width: 18, height: 18, icon: FaTrash }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            match modal() {
                Some(ContractorModal::Form(existing)) => rsx!(ContractorFormModal {
                    existing,
                    on_save: move |_| contractors.restart(),
                    on_close: move |_| modal.set(None),
                }),
                Some(ContractorModal::Delete(contractor)) => rsx!(ConfirmDeleteModal {
                    name: contractor.name.clone(),
                    on_confirm: move |_| confirm_delete(contractor.clone()),
                    on_close: move |_| modal.set(None),
                }),
                None => rsx!(),
            }
        }
    }
}
