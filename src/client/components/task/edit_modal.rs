use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::task::form::{TaskDraft, TaskForm};
use crate::client::components::{Modal, Toasts};
use crate::client::config::ApiConfig;
use crate::model::task::TaskDto;

/// Edit-task modal. Loads the record first; a fetch failure is a terminal
/// in-modal error, never a silent close.
#[component]
pub fn EditTaskModal(id: i32, on_save: EventHandler<()>, on_close: EventHandler<()>) -> Element {
    let config = use_context::<ApiConfig>();

    let load = use_resource({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move { api::tasks::get_task(&config, id).await }
        }
    });

    rsx! {
        Modal { title: "Editar Tarefa", on_close,
            match &*load.read_unchecked() {
                None => rsx!(p { class: "text-center py-6", "Carregando..." }),
                Some(Err(error)) => {
                    tracing::error!("failed to load task {id}: {error}");
                    rsx!(p { class: "text-center text-error py-6",
                        "Não foi possível carregar os dados da tarefa."
                    })
                }
                Some(Ok(task)) => rsx!(EditTaskForm {
                    id,
                    task: task.clone(),
                    on_save,
                    on_close,
                }),
            }
        }
    }
}

#[component]
fn EditTaskForm(
    id: i32,
    task: TaskDto,
    on_save: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let config = use_context::<ApiConfig>();
    let mut toasts = use_context::<Toasts>();
    let draft = use_signal(|| TaskDraft::from_task(&task));
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
            match api::tasks::update_task(&config, id, &payload).await {
                Ok(()) => {
                    toasts.success("Tarefa atualizada com sucesso!");
                    on_save.call(());
                    on_close.call(());
                }
                Err(error) => {
                    tracing::error!("failed to update task {id}: {error}");
                    toasts.error("Erro ao salvar a tarefa.");
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        TaskForm {
            draft,
            submitting: submitting(),
            on_submit: submit,
            on_cancel: move |_| on_close.call(()),
        }
    }
}
