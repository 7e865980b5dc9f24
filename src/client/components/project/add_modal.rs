use dioxus::prelude::*;
use dioxus_logger::tracing;
use futures::join;

use crate::client::api;
use crate::client::components::project::form::{ProjectDraft, ProjectForm};
use crate::client::components::{Modal, Toasts};
use crate::client::config::ApiConfig;

/// Add-project modal. The draft starts empty so there is no loading phase;
/// the contractor and team dropdowns fill in as their fetches land.
#[component]
pub fn AddProjectModal(on_save: EventHandler<()>, on_close: EventHandler<()>) -> Element {
    let config = use_context::<ApiConfig>();
    let mut toasts = use_context::<Toasts>();
    let draft = use_signal(ProjectDraft::default);
    let mut submitting = use_signal(|| false);

    let references = use_resource({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move {
                join!(
                    api::contractors::list_contractors(&config),
                    api::teams::list_teams(&config),
                )
            }
        }
    });

    let (contractors, teams) = match &*references.read_unchecked() {
        Some((Ok(contractors), Ok(teams))) => (contractors.clone(), teams.clone()),
        Some((contractors, teams)) => {
            if let Err(error) = contractors {
                tracing::error!("failed to fetch contractors: {error}");
            }
            if let Err(error) = teams {
                tracing::error!("failed to fetch teams: {error}");
            }
            (Vec::new(), Vec::new())
        }
        None => (Vec::new(), Vec::new()),
    };

    let submit_config = config.clone();
    let submit = move |_| {
        let payload = match draft.read().payload() {
            Ok(payload) => payload,
            Err(message) => {
                toasts.warning(message);
                return;
            }
        };
        let config = submit_config.clone();
        submitting.set(true);
        spawn(async move {
            match api::projects::create_project(&config, &payload).await {
                Ok(()) => {
                    toasts.success("Projeto adicionado com sucesso!");
                    on_save.call(());
                    on_close.call(());
                }
                Err(error) => {
                    tracing::error!("failed to create project: {error}");
                    toasts.error("Erro ao adicionar o projeto.");
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        Modal { title: "Adicionar Novo Projeto", on_close,
            ProjectForm {
                draft,
                contractors,
                teams,
                submitting: submitting(),
                submit_label: "Salvar Projeto",
                on_submit: submit,
            }
        }
    }
}
