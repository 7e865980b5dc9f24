use dioxus::prelude::*;

use crate::client::components::{Modal, TaskStatusBadge};
use crate::client::util::format::display_date;
use crate::model::task::TaskDto;

/// Read-only task view with formatted dates and the status badge.
#[component]
pub fn TaskDetailsModal(task: TaskDto, on_close: EventHandler<()>) -> Element {
    rsx! {
        Modal { title: "Detalhes da Tarefa", on_close,
            div { class: "space-y-3",
                p { class: "text-lg font-semibold", "{task.name}" }
                p { strong { "Descrição: " } "{task.description}" }
                p { strong { "Data de Início: " } {display_date(&task.start_date)} }
                p { strong { "Data Fim Previsto: " } {display_date(&task.expected_end_date)} }
                p { class: "flex items-center gap-2",
                    strong { "Status: " }
                    TaskStatusBadge { status: task.status }
                }
            }
        }
    }
}
