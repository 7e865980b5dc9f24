use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::task::form::{TaskDraft, TaskForm};
use crate::client::components::{Modal, Toasts};
use crate::client::config::ApiConfig;

/// Add-task modal, scoped to the owning project.
#[component]
pub fn AddTaskModal(
    project_id: i32,
    on_save: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let config = use_context::<ApiConfig>();
    let mut toasts = use_context::<Toasts>();
    let draft = use_signal(TaskDraft::default);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        let payload = match draft.read().payload() {
            Ok(payload) => payload,
            Err(message) => {
                toasts.warning(message);
                return;
            }
        };
        let config = config.clone();
        submitting.set(true);
        spawn(async move {
            match api::tasks::create_task(&config, project_id, &payload).await {
                Ok(()) => {
                    toasts.success("Tarefa adicionada com sucesso!");
                    on_save.call(());
                    on_close.call(());
                }
                Err(error) => {
                    tracing::error!("failed to create task under project {project_id}: {error}");
                    toasts.error("Erro ao adicionar a tarefa.");
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        Modal { title: "Adicionar Nova Tarefa", on_close,
            TaskForm {
                draft,
                submitting: submitting(),
                on_submit: submit,
                on_cancel: move |_| on_close.call(()),
            }
        }
    }
}
