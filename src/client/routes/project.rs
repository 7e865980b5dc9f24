use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowLeft, FaEye, FaPencil, FaPlus, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::task::{AddTaskModal, EditTaskModal, TaskDetailsModal};
use crate::client::components::{
    ConfirmDeleteModal, FileUpload, Page, ProjectStatusBadge, TaskStatusBadge, Toasts,
};
use crate::client::config::ApiConfig;
use crate::client::router::Route;
use crate::client::util::format::{display_currency, display_date, format_phone, PLACEHOLDER};
use crate::model::document::{DocumentDto, SelectedFile};
use crate::model::project::ProjectDetailDto;
use crate::model::task::TaskDto;

/// Which modal is open over the detail page, if any. One optional value for
/// the whole page keeps every task/document dialog mutually exclusive.
#[derive(Clone, PartialEq)]
enum DetailModal {
    AddTask,
    EditTask(i32),
    ViewTask(TaskDto),
    DeleteTask(TaskDto),
    DeleteDocument(DocumentDto),
}

#[component]
pub fn ProjectDetail(id: i32) -> Element {
    let config = use_context::<ApiConfig>();
    let mut toasts = use_context::<Toasts>();
    let mut modal = use_signal(|| None::<DetailModal>);
    let mut selected_file = use_signal(|| None::<SelectedFile>);

    // Three independent fetches: the aggregate record is a hard requirement,
    // the task list fails inline, and the document list soft-fails to empty.
    let project = use_resource({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move { api::projects::get_project(&config, id).await }
        }
    });
    let mut tasks = use_resource({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move { api::tasks::list_tasks(&config, id).await }
        }
    });
    let mut documents = use_resource({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move { api::documents::list_documents(&config, id).await }
        }
    });

    let upload = {
        let config = config.clone();
        move |_| {
            let Some(file) = selected_file() else {
                toasts.info("Selecione ou arraste um arquivo antes de enviar.");
                return;
            };
            let config = config.clone();
            spawn(async move {
                match api::documents::upload_document(&config, id, &file).await {
                    Ok(()) => {
                        toasts.success("Documento enviado com sucesso!");
                        selected_file.set(None);
                        documents.restart();
                    }
                    Err(error) => {
                        tracing::error!("failed to upload document to project {id}: {error}");
                        toasts.error("Erro ao enviar o documento.");
                    }
                }
            });
        }
    };

    let delete_task = {
        let config = config.clone();
        move |task: TaskDto| {
            let config = config.clone();
            spawn(async move {
                match api::tasks::delete_task(&config, task.id).await {
                    Ok(()) => {
                        toasts.success("Tarefa removida com sucesso!");
                        modal.set(None);
                        tasks.restart();
                    }
                    Err(error) => {
                        tracing::error!("failed to delete task {}: {error}", task.id);
                        toasts.error("Erro ao remover a tarefa.");
                    }
                }
            });
        }
    };

    let delete_document = {
        let config = config.clone();
        move |document: DocumentDto| {
            let config = config.clone();
            spawn(async move {
                match api::documents::delete_document(&config, id, document.id).await {
                    Ok(()) => {
                        toasts.success("Documento removido com sucesso!");
                        modal.set(None);
                        documents.restart();
                    }
                    Err(error) => {
                        tracing::error!("failed to delete document {}: {error}", document.id);
                        toasts.error("Erro ao remover o documento.");
                    }
                }
            });
        }
    };

    // A failed document fetch reads as an empty list; the rest of the page
    // must not be blocked by it.
    let document_list = match &*documents.read_unchecked() {
        Some(Ok(documents)) => documents.clone(),
        Some(Err(error)) => {
            tracing::info!("treating document fetch failure as empty: {error}");
            Vec::new()
        }
        None => Vec::new(),
    };

    rsx! {
        Title { "Detalhes do Projeto | Canteiro" }
        Meta {
            name: "description",
            content: "Detalhes do projeto, suas tarefas e documentos anexados."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-xl flex items-center gap-8 mb-6",
                Link {
                    to: Route::Home {},
                    class: "btn btn-ghost btn-sm flex items-center gap-2 text-primary",
                    Icon { width: 18, height: 18, icon: FaArrowLeft }
                    "Voltar"
                }
                h1 { class: "text-3xl font-bold", "Detalhes do Projeto" }
            }

            match &*project.read_unchecked() {
                None => rsx!(div { class: "text-lg opacity-70", "Carregando dados do projeto..." }),
                Some(Err(error)) => {
                    tracing::error!("failed to fetch project {id}: {error}");
                    rsx!(div { class: "alert alert-error w-full max-w-xl",
                        "Não foi possível carregar os dados do projeto."
                    })
                }
                Some(Ok(detail)) => rsx! {
                    div { class: "card bg-base-100 shadow w-full max-w-xl",
                        div { class: "card-body gap-4",
                            ProjectSummary { project: detail.clone() }

                            // Task sub-list, with its own inline failure state.
                            div { class: "p-4 bg-base-200 rounded-lg",
                                div { class: "flex justify-between items-center mb-3",
                                    h3 { class: "text-lg font-semibold", "Tarefas do Projeto" }
                                    button {
                                        class: "btn btn-primary btn-sm",
                                        onclick: move |_| modal.set(Some(DetailModal::AddTask)),
                                        Icon { width: 14, height: 14, icon: FaPlus }
                                        "Nova Tarefa"
                                    }
                                }
                                match &*tasks.read_unchecked() {
                                    None => rsx!(span { class: "loading loading-spinner" }),
                                    Some(Err(error)) => {
                                        tracing::error!("failed to fetch tasks of project {id}: {error}");
                                        rsx!(p { class: "text-error",
                                            "Não foi possível carregar as tarefas do projeto."
                                        })
                                    }
                                    Some(Ok(task_list)) if task_list.is_empty() => {
                                        rsx!(p { class: "opacity-70",
                                            "Nenhuma tarefa encontrada para este projeto."
                                        })
                                    }
                                    Some(Ok(task_list)) => rsx! {
                                        ul { class: "space-y-3",
                                            for task in task_list.clone() {
                                                li {
                                                    key: "{task.id}",
                                                    class: "bg-base-100 p-3 rounded shadow flex justify-between items-center",
                                                    div {
                                                        p { class: "font-medium", "{task.name}" }
                                                        p { class: "text-sm opacity-70", "{task.description}" }
                                                    }
                                                    div { class: "flex items-center gap-2",
                                                        TaskStatusBadge { status: task.status }
                                                        button {
                                                            class: "btn btn-ghost btn-xs",
                                                            onclick: {
                                                                let task = task.clone();
                                                                move |_| modal.set(Some(DetailModal::ViewTask(task.clone())))
                                                            },
                                                            Icon { width: 14, height: 14, icon: FaEye }
                                                        }
                                                        button {
                                                            class: "btn btn-ghost btn-xs",
                                                            onclick: {
                                                                let task_id = task.id;
                                                                move |_| modal.set(Some(DetailModal::EditTask(task_id)))
                                                            },
                                                            Icon { width: 14, height: 14, icon: FaPencil }
                                                        }
                                                        button {
                                                            class: "btn btn-ghost btn-xs text-error",
                                                            onclick: {
                                                                let task = task.clone();
                                                                move |_| modal.set(Some(DetailModal::DeleteTask(task.clone())))
                                                            },
                                                            Icon { width: 14, height: 14, icon: FaTrash }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    },
                                }
                            }

                            FileUpload {
                                file_name: selected_file.read().as_ref().map(|file| file.name.clone()),
                                on_select: move |file| selected_file.set(Some(file)),
                                on_upload: upload.clone(),
                            }

                            // Attached documents: download straight from the
                            // API, delete behind the shared confirmation.
                            div { class: "p-4 bg-base-200 rounded-lg",
                                h3 { class: "text-lg font-semibold mb-3", "Documentos Anexados" }
                                if document_list.is_empty() {
                                    p { class: "opacity-70", "Nenhum documento anexado." }
                                } else {
                                    ul { class: "space-y-3",
                                        for document in document_list.clone() {
                                            li {
                                                key: "{document.id}",
                                                class: "bg-base-100 p-3 rounded shadow flex justify-between items-center",
                                                span { "{document.filename}" }
                                                div { class: "flex items-center gap-3",
                                                    a {
                                                        class: "link link-primary",
                                                        href: api::documents::download_url(&config, id, document.id),
                                                        download: "{document.filename}",
                                                        "Baixar"
                                                    }
                                                    button {
                                                        class: "btn btn-ghost btn-xs text-error",
                                                        onclick: {
                                                            let document = document.clone();
                                                            move |_| modal.set(Some(DetailModal::DeleteDocument(document.clone())))
                                                        },
                                                        Icon { width: 14, height: 14, icon: FaTrash }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }

            match modal() {
                Some(DetailModal::AddTask) => rsx!(AddTaskModal {
                    project_id: id,
                    on_save: move |_| tasks.restart(),
                    on_close: move |_| modal.set(None),
                }),
                Some(DetailModal::EditTask(task_id)) => rsx!(EditTaskModal {
                    id: task_id,
                    on_save: move |_| tasks.restart(),
                    on_close: move |_| modal.set(None),
                }),
                Some(DetailModal::ViewTask(task)) => rsx!(TaskDetailsModal {
                    task,
                    on_close: move |_| modal.set(None),
                }),
                Some(DetailModal::DeleteTask(task)) => rsx!(ConfirmDeleteModal {
                    name: task.name.clone(),
                    on_confirm: move |_| delete_task(task.clone()),
                    on_close: move |_| modal.set(None),
                }),
                Some(DetailModal::DeleteDocument(document)) => rsx!(ConfirmDeleteModal {
                    name: document.filename.clone(),
                    on_confirm: move |_| delete_document(document.clone()),
                    on_close: move |_| modal.set(None),
                }),
                None => rsx!(),
            }
        }
    }
}

/// Read-only header block of the detail card: scalar fields plus the nested
/// contractor and team records.
#[component]
fn ProjectSummary(project: ProjectDetailDto) -> Element {
    rsx! {
        h2 { class: "text-2xl font-semibold", "{project.name}" }
        p { strong { "Descrição: " } "{project.description}" }
        p { strong { "Data Início: " } {display_date(&project.start_date)} }
        p { strong { "Data Fim Previsto: " } {display_date(&project.expected_end_date)} }
        p { class: "flex items-center gap-2",
            strong { "Status: " }
            ProjectStatusBadge { status: project.status }
        }
        p { strong { "Orçamento Previsto: " } {display_currency(project.planned_budget)} }

        div { class: "p-4 bg-base-200 rounded-lg",
            h3 { class: "text-lg font-semibold mb-2", "Contratante" }
            if let Some(contractor) = project.contractor.as_ref() {
                p { strong { "Nome: " } "{contractor.name}" }
                p { strong { "Email: " } "{contractor.email}" }
                p { strong { "Telefone: " } {format_phone(&contractor.phone)} }
            } else {
                p { class: "opacity-70", "Sem contratante vinculado." }
            }
        }
        div { class: "p-4 bg-base-200 rounded-lg",
            h3 { class: "text-lg font-semibold mb-2", "Equipe Responsável" }
            if let Some(team) = project.team.as_ref() {
                p { strong { "Nome: " } "{team.name}" }
                p { strong { "Supervisor: " }
                    {team.supervisor_name.clone().unwrap_or_else(|| PLACEHOLDER.to_string())}
                }
            } else {
                p { class: "opacity-70", "Sem equipe vinculada." }
            }
        }
    }
}
