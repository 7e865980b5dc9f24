use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::project::{AddProjectModal, EditProjectModal, ProjectCard};
use crate::client::components::{ConfirmDeleteModal, Page, Toasts};
use crate::client::config::ApiConfig;
use crate::model::project::ProjectDto;

/// Which project modal is open, if any. A single optional value means two
/// modals can never be open at once.
#[derive(Clone, PartialEq)]
enum ProjectModal {
    Add,
    Edit(i32),
    Delete(ProjectDto),
}

#[component]
pub fn Home() -> Element {
    let config = use_context::<ApiConfig>();
    let mut toasts = use_context::<Toasts>();
    let mut modal = use_signal(|| None::<ProjectModal>);

    let mut projects = use_resource({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move { api::projects::list_projects(&config).await }
        }
    });

    let confirm_delete = move |project: ProjectDto| {
        let config = config.clone();
        spawn(async move {
            match api::projects::delete_project(&config, project.id).await {
                Ok(()) => {
                    toasts.success("Projeto removido com sucesso!");
                    modal.set(None);
                    projects.restart();
                }
                Err(error) => {
                    tracing::error!("failed to delete project {}: {error}", project.id);
                    toasts.error("Erro ao deletar o projeto.");
                }
            }
        });
    };

    rsx! {
        Title { "Projetos | Canteiro" }
        Meta {
            name: "description",
            content: "Lista de projetos do gerenciador de projetos."
        }
        Page {
            div { class: "flex flex-col md:flex-row justify-between items-center mb-6 gap-4",
                h1 { class: "text-3xl font-bold", "Projetos" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| modal.set(Some(ProjectModal::Add)),
                    Icon { width: 18, height: 18, icon: FaPlus }
                    "Adicionar Projeto"
                }
            }

            match &*projects.read_unchecked() {
                None => rsx!(div { class: "flex justify-center py-12",
                    span { class: "loading loading-spinner loading-lg" }
                }),
                Some(Err(error)) => {
                    tracing::error!("failed to fetch projects: {error}");
                    rsx!(div { class: "alert alert-error",
                        "Não foi possível carregar os projetos."
                    })
                }
                Some(Ok(project_list)) => rsx! {
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for project in project_list.clone() {
                            ProjectCard {
                                key: "{project.id}",
                                project: project.clone(),
                                on_edit: {
                                    let id = project.id;
                                    move |_| modal.set(Some(ProjectModal::Edit(id)))
                                },
                                on_delete: {
                                    let project = project.clone();
                                    move |_| modal.set(Some(ProjectModal::Delete(project.clone())))
                                },
                            }
                        }
                    }
                },
            }

            match modal() {
                Some(ProjectModal::Add) => rsx!(AddProjectModal {
                    on_save: move |_| projects.restart(),
                    on_close: move |_| modal.set(None),
                }),
                Some(ProjectModal::Edit(id)) => rsx!(EditProjectModal {
                    id,
                    on_save: move |_| projects.restart(),
                    on_close: move |_| modal.set(None),
                }),
                Some(ProjectModal::Delete(project)) => rsx!(ConfirmDeleteModal {
                    name: project.name.clone(),
                    on_confirm: move |_| confirm_delete(project.clone()),
                    on_close: move |_| modal.set(None),
                }),
                None => rsx!(),
            }
        }
    }
}
