use dioxus::prelude::*;
use dioxus_logger::tracing;
use futures::join;

use crate::client::api::{self, ApiError};
use crate::client::components::project::form::{ProjectDraft, ProjectForm};
use crate::client::components::{Modal, Toasts};
use crate::client::config::ApiConfig;
use crate::model::contractor::ContractorDto;
use crate::model::project::ProjectDetailDto;
use crate::model::team::TeamDto;

/// Edit-project modal. Opens in a loading state while the record and the
/// dropdown reference lists are fetched in parallel; a failure is a
/// terminal in-modal error, never a silent close.
#[component]
pub fn EditProjectModal(id: i32, on_save: EventHandler<()>, on_close: EventHandler<()>) -> Element {
    let config = use_context::<ApiConfig>();

    let load = use_resource({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move {
                let (project, contractors, teams) = join!(
                    api::projects::get_project(&config, id),
                    api::contractors::list_contractors(&config),
                    api::teams::list_teams(&config),
                );
                Ok::<_, ApiError>((project?, contractors?, teams?))
            }
        }
    });

    rsx! {
        Modal { title: "Editar Projeto", on_close,
            match &*load.read_unchecked() {
                None => rsx!(p { class: "text-center py-6", "Carregando..." }),
                Some(Err(error)) => {
                    tracing::error!("failed to load project {id}: {error}");
                    rsx!(p { class: "text-center text-error py-6",
                        "Não foi possível carregar os dados do projeto."
                    })
                }
                Some(Ok((project, contractors, teams))) => rsx!(EditProjectForm {
                    id,
                    project: project.clone(),
                    contractors: contractors.clone(),
                    teams: teams.clone(),
                    on_save,
                    on_close,
                }),
            }
        }
    }
}

/// Inner form, mounted once the record is available so the draft can be
/// seeded from it.
#[component]
fn EditProjectForm(
    id: i32,
    project: ProjectDetailDto,
    contractors: Vec<ContractorDto>,
    teams: Vec<TeamDto>,
    on_save: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let config = use_context::<ApiConfig>();
    let mut toasts = use_context::<Toasts>();
    let draft = use_signal(|| ProjectDraft::from_detail(&project));
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
            match api::projects::update_project(&config, id, &payload).await {
                Ok(()) => {
                    toasts.success("Projeto atualizado com sucesso!");
                    on_save.call(());
                    on_close.call(());
                }
                Err(error) => {
                    tracing::error!("failed to update project {id}: {error}");
                    toasts.error("Erro ao salvar o projeto.");
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        ProjectForm {
            draft,
            contractors,
            teams,
            submitting: submitting(),
            submit_label: "Salvar",
            on_submit: submit,
        }
    }
}
