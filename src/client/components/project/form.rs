use dioxus::prelude::*;

use crate::client::util::format::{currency_input_value, input_date, parse_currency};
use crate::model::contractor::ContractorDto;
use crate::model::project::{ProjectDetailDto, ProjectPayload, ProjectStatus};
use crate::model::team::TeamDto;

pub const REQUIRED_FIELDS_WARNING: &str = "Preencha todos os campos obrigatórios.";

/// Local draft behind the add/edit project forms.
///
/// Masked fields hold the normalized value (major-unit amount, reference
/// ids); the display string is re-derived on every render.
#[derive(Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub expected_end_date: String,
    pub status: ProjectStatus,
    pub planned_budget: Option<f64>,
    pub contractor_id: Option<String>,
    pub team_id: Option<i32>,
}

impl ProjectDraft {
    pub fn from_detail(detail: &ProjectDetailDto) -> Self {
        Self {
            name: detail.name.clone(),
            description: detail.description.clone(),
            start_date: input_date(&detail.start_date),
            expected_end_date: input_date(&detail.expected_end_date),
            status: detail.status,
            planned_budget: detail.planned_budget,
            contractor_id: detail.contractor.as_ref().map(|c| c.id.clone()),
            team_id: detail.team.as_ref().map(|t| t.id),
        }
    }

    /// Builds the wire payload, or reports the failed light validation.
    /// The server stays the authority for every other constraint.
    pub fn payload(&self) -> Result<ProjectPayload, &'static str> {
        if self.name.trim().is_empty()
            || self.description.trim().is_empty()
            || self.start_date.is_empty()
            || self.expected_end_date.is_empty()
        {
            return Err(REQUIRED_FIELDS_WARNING);
        }
        let planned_budget = self.planned_budget.ok_or(REQUIRED_FIELDS_WARNING)?;
        let contractor_id = self.contractor_id.clone().ok_or(REQUIRED_FIELDS_WARNING)?;
        let team_id = self.team_id.ok_or(REQUIRED_FIELDS_WARNING)?;

        Ok(ProjectPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            start_date: self.start_date.clone(),
            expected_end_date: self.expected_end_date.clone(),
            status: self.status,
            planned_budget,
            contractor_id,
            team_id,
        })
    }
}

/// Field set shared by the add and edit project modals.
#[component]
pub fn ProjectForm(
    mut draft: Signal<ProjectDraft>,
    contractors: Vec<ContractorDto>,
    teams: Vec<TeamDto>,
    submitting: bool,
    submit_label: String,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            class: "space-y-4",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_submit.call(());
            },
            div {
                label { class: "label font-medium", "Nome do Projeto" }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    value: draft.read().name.clone(),
                    oninput: move |evt| draft.write().name = evt.value(),
                }
            }
            div {
                label { class: "label font-medium", "Descrição" }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
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
                    label { class: "label font-medium", "Data de Fim Previsto" }
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
                        if let Some(status) = ProjectStatus::from_label(&evt.value()) {
                            draft.write().status = status;
                        }
                    },
                    for status in ProjectStatus::ALL {
                        option {
                            value: "{status}",
                            selected: draft.read().status == status,
                            "{status}"
                        }
                    }
                }
            }
            div {
                label { class: "label font-medium", "Contratante" }
                select {
                    class: "select select-bordered w-full",
                    onchange: move |evt| {
                        let value = evt.value();
                        draft.write().contractor_id = (!value.is_empty()).then_some(value);
                    },
                    option {
                        value: "",
                        selected: draft.read().contractor_id.is_none(),
                        "Selecione um cliente"
                    }
                    for contractor in contractors.iter() {
                        option {
                            value: "{contractor.tax_id}",
                            selected: draft.read().contractor_id.as_deref() == Some(contractor.tax_id.as_str()),
                            "{contractor.name}"
                        }
                    }
                }
            }
            div {
                label { class: "label font-medium", "Orçamento Previsto" }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    inputmode: "numeric",
                    value: currency_input_value(draft.read().planned_budget),
                    oninput: move |evt| draft.write().planned_budget = parse_currency(&evt.value()),
                }
            }
            div {
                label { class: "label font-medium", "Equipe Responsável" }
                select {
                    class: "select select-bordered w-full",
                    onchange: move |evt| draft.write().team_id = evt.value().parse().ok(),
                    option {
                        value: "",
                        selected: draft.read().team_id.is_none(),
                        "Selecione uma equipe"
                    }
                    for team in teams.iter() {
                        option {
                            value: "{team.id}",
                            selected: draft.read().team_id == Some(team.id),
                            "{team.name}"
                        }
                    }
                }
            }
            div { class: "flex justify-end",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting {
                        span { class: "loading loading-spinner loading-xs" }
                    }
                    "{submit_label}"
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
    use crate::model::project::{ProjectContractorDto, ProjectTeamDto};

    fn filled_draft() -> ProjectDraft {
        ProjectDraft {
            name: "Reforma da sede".into(),
            description: "Reforma completa".into(),
            start_date: "2025-03-05".into(),
            expected_end_date: "2025-06-01".into(),
            status: ProjectStatus::Planned,
            planned_budget: Some(150000.5),
            contractor_id: Some("12345678901".into()),
            team_id: Some(2),
        }
    }

    #[test]
    fn complete_draft_builds_the_wire_payload() {
        let payload = filled_draft().payload().unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "Nome": "Reforma da sede",
                "Descricao": "Reforma completa",
                "Data_Inicio": "2025-03-05",
                "Data_Fim_Prev": "2025-06-01",
                "Status": "Planejado",
                "Orcamento_previsto": 150000.5,
                "Contratante": "12345678901",
                "Equipe_Resp": 2
            })
        );
    }

    #[test]
    fn missing_required_fields_abort_before_any_network_call() {
        for draft in [
            ProjectDraft {
                name: "   ".into(),
                ..filled_draft()
            },
            ProjectDraft {
                description: String::new(),
                ..filled_draft()
            },
            ProjectDraft {
                start_date: String::new(),
                ..filled_draft()
            },
            ProjectDraft {
                planned_budget: None,
                ..filled_draft()
            },
            ProjectDraft {
                contractor_id: None,
                ..filled_draft()
            },
            ProjectDraft {
                team_id: None,
                ..filled_draft()
            },
        ] {
            assert_eq!(draft.payload().unwrap_err(), REQUIRED_FIELDS_WARNING);
        }
    }

    #[test]
    fn draft_is_seeded_from_the_fetched_record() {
        let detail = ProjectDetailDto {
            name: "Reforma da sede".into(),
            description: "Reforma completa".into(),
            start_date: "2025-03-05T00:00:00.000Z".into(),
            expected_end_date: "2025-06-01T00:00:00.000Z".into(),
            status: ProjectStatus::InProgress,
            planned_budget: Some(150000.5),
            contractor: Some(ProjectContractorDto {
                id: "12345678901".into(),
                name: "Construtora Azul".into(),
                phone: "1133334444".into(),
                email: "contato@azul.com.br".into(),
                address: "Av. Paulista, 1000".into(),
            }),
            team: Some(ProjectTeamDto {
                id: 2,
                name: "Equipe Norte".into(),
                supervisor_name: Some("Ana".into()),
            }),
        };

        let draft = ProjectDraft::from_detail(&detail);
        assert_eq!(draft.start_date, "2025-03-05");
        assert_eq!(draft.expected_end_date, "2025-06-01");
        assert_eq!(draft.contractor_id.as_deref(), Some("12345678901"));
        assert_eq!(draft.team_id, Some(2));
    }
}
