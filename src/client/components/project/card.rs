use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPencil, FaTrash};
use dioxus_free_icons::Icon;

use crate::client::components::ProjectStatusBadge;
use crate::client::router::Route;
use crate::client::util::format::{display_currency, display_date, PLACEHOLDER};
use crate::model::project::ProjectDto;

fn or_placeholder(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// One project card in the home grid. The title links to the detail page;
/// edit/delete hand control back to the list's modal state.
#[component]
pub fn ProjectCard(
    project: ProjectDto,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "card bg-base-100 shadow hover:shadow-lg transition",
            div { class: "card-body gap-3",
                div { class: "flex justify-between items-center",
                    Link {
                        to: Route::ProjectDetail { id: project.id },
                        class: "card-title link-hover cursor-pointer",
                        "{project.name}"
                    }
                    div { class: "flex gap-2",
                        button {
                            class: "btn btn-ghost btn-xs",
                            onclick: move |_| on_edit.call(()),
                            Icon { width: 16, height: 16, icon: FaPencil }
                        }
                        button {
                            class: "btn btn-ghost btn-xs text-error",
                            onclick: move |_| on_delete.call(()),
                            Icon { width: 16, height: 16, icon: FaTrash }
                        }
                    }
                }
                p { strong { "Descrição: " } "{project.description}" }
                p { strong { "Data Início: " } {display_date(&project.start_date)} }
                p { strong { "Data Fim Previsto: " } {display_date(&project.expected_end_date)} }
                p { class: "flex items-center gap-2",
                    strong { "Status: " }
                    ProjectStatusBadge { status: project.status }
                }
                p { strong { "Orçamento Previsto: " } {display_currency(project.planned_budget)} }
                p { strong { "Contratante: " } {or_placeholder(&project.client_name)} }
                p { strong { "Equipe: " } {or_placeholder(&project.team_name)} }
                p { strong { "Supervisor: " } {or_placeholder(&project.supervisor_name)} }
            }
        }
    }
}
