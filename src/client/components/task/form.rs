use dioxus::prelude::*;

use crate::client::util::format::input_date;
use crate::model::task::{TaskDto, TaskPayload, TaskStatus};

pub const REQUIRED_FIELDS_WARNING: &str = "Preencha todos os campos obrigatórios.";

/// Local draft behind the add/edit task forms.
#[derive(Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub expected_end_date: String,
    pub status: TaskStatus,
}

impl TaskDraft {
    pub fn from_task(task: &TaskDto) -> Self {
        Self {
            name: task.name.clone(),
            description: task.description.clone(),
            start_date: input_date(&task.start_date),
            expected_end_date: input_date(&task.expected_end_date),
            status: task.status,
        }
    }

    /// Builds the wire payload, or reports the failed light validation.
    pub fn payload(&self) -> Result<TaskPayload, &'static str> {
        if self.name.trim().is_empty()
            || self.description.trim().is_empty()
            || self.start_date.is_empty()
            || self.expected_end_date.is_empty()
        {
            return Err(REQUIRED_FIELDS_WARNING);
        }
        Ok(TaskPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            start_date: self.start_date.clone(),
            expected_end_date: self.expected_end_date.clone(),
            status: self.status,
        })
    }
}

/// Field set shared by the add and edit task modals.
#[component]
pub fn TaskForm(
    mut draft: Signal<TaskDraft>,
    submitting: bool,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            class: "space-y-4",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_submit.call(());
            },
            div {
                label { class: "label font-medium", "Nome" }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    value: draft.read().name.clone(),
                    oninput: move |evt| draft.write().name = evt.value(),
                }
            }
            div {
                label { class: "label font-medium", "Descrição" }
                textarea {
                    class: "textarea textarea-bordered w-full resize-none",
                    rows: "3",
                    value: draft.read().description.clone(),
                    oninput: move |evt| draft.write().description = evt.value(),
                }
            }
            div { class: "grid grid-cols-2 gap-4",
                div {
                    label { class: "label font-medium", "Data de Início" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "date",
                        value: draft.read().start_date.clone(),
                        oninput: move |evt| draft.write().start_date = evt.value(),
                    }
                }
                div {
                    label { class: "label font-medium", "Data de Fim Prevista" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "date",
                        value: draft.read().expected_end_date.clone(),
                        oninput: move |evt| draft.write().expected_end_date = evt.value(),
                    }
                }
            }
            div {
                label { class: "label font-medium", "Status" }
                select {
                    class: "select select-bordered w-full",
                    onchange: move |evt| {
                        if let Some(status) = TaskStatus::from_label(&evt.value()) {
                            draft.write().status = status;
                        }
                    },
                    for status in TaskStatus::ALL {
                        option {
                            value: "{status}",
                            selected: draft.read().status == status,
                            "{status}"
                        }
                    }
                }
            }
            div { class: "flex justify-end gap-2",
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancelar"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting {
                        span { class: "loading loading-spinner loading-xs" }
                    }
                    "Salvar"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn complete_draft_builds_the_exact_wire_body() {
        let draft = TaskDraft {
            name: "Survey".into(),
            description: "Site survey".into(),
            start_date: "2025-01-01".into(),
            expected_end_date: "2025-01-10".into(),
            status: TaskStatus::Pending,
        };

        assert_eq!(
            serde_json::to_value(draft.payload().unwrap()).unwrap(),
            json!({
                "Nome": "Survey",
                "Descricao": "Site survey",
                "Data_Inicio": "2025-01-01",
                "Data_Fim_Prev": "2025-01-10",
                "Status": "Pendente"
            })
        );
    }

    #[test]
    fn missing_required_fields_abort_the_submission() {
        let draft = TaskDraft {
            name: "Survey".into(),
            ..TaskDraft::default()
        };
        assert_eq!(draft.payload().unwrap_err(), REQUIRED_FIELDS_WARNING);
    }

    #[test]
    fn draft_is_seeded_from_the_fetched_task() {
        let task = TaskDto {
            id: 9,
            name: "Fundação".into(),
            description: "Escavação e fundação".into(),
            start_date: "2025-01-01T00:00:00.000Z".into(),
            expected_end_date: "2025-01-20T00:00:00.000Z".into(),
            status: TaskStatus::InProgress,
        };

        let draft = TaskDraft::from_task(&task);
        assert_eq!(draft.start_date, "2025-01-01");
        assert_eq!(draft.expected_end_date, "2025-01-20");
        assert_eq!(draft.status, TaskStatus::InProgress);
    }
}
