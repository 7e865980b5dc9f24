use serde::{Deserialize, Serialize};

/// Project status enumeration as stored by the API.
///
/// Anything outside these values is rejected at the deserialization
/// boundary and surfaces as a fetch decode error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "Planejado")]
    Planned,
    #[serde(rename = "Em andamento")]
    InProgress,
    #[serde(rename = "Concluído")]
    Done,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Planned,
        ProjectStatus::InProgress,
        ProjectStatus::Done,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planned => "Planejado",
            ProjectStatus::InProgress => "Em andamento",
            ProjectStatus::Done => "Concluído",
        }
    }

    pub fn from_label(label: &str) -> Option<ProjectStatus> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Denormalized project row returned by `GET /projetos`.
#[derive(Clone, PartialEq, Deserialize)]
pub struct ProjectDto {
    #[serde(rename = "ID_Projeto")]
    pub id: i32,
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Descricao", default)]
    pub description: String,
    #[serde(rename = "Data_Inicio", default)]
    pub start_date: String,
    #[serde(rename = "Data_Fim_Prev", default)]
    pub expected_end_date: String,
    #[serde(rename = "Status")]
    pub status: ProjectStatus,
    #[serde(
        rename = "Orcamento_previsto",
        deserialize_with = "super::lenient_decimal",
        default
    )]
    pub planned_budget: Option<f64>,
    #[serde(rename = "Cliente_Nome", default)]
    pub client_name: Option<String>,
    #[serde(rename = "Equipe_Nome", default)]
    pub team_name: Option<String>,
    #[serde(rename = "Supervisor_Nome", default)]
    pub supervisor_name: Option<String>,
}

/// Contracting-client fields nested in a project detail record.
#[derive(Clone, PartialEq, Deserialize)]
pub struct ProjectContractorDto {
    #[serde(rename = "Cliente_ID", deserialize_with = "super::lenient_string", default)]
    pub id: String,
    #[serde(rename = "Cliente_Nome", default)]
    pub name: String,
    #[serde(
        rename = "Cliente_Telefone",
        deserialize_with = "super::lenient_string",
        default
    )]
    pub phone: String,
    #[serde(rename = "Cliente_Email", default)]
    pub email: String,
    #[serde(rename = "Cliente_Endereco", default)]
    pub address: String,
}

/// Responsible-team fields nested in a project detail record.
#[derive(Clone, PartialEq, Deserialize)]
pub struct ProjectTeamDto {
    #[serde(rename = "ID_Equipe")]
    pub id: i32,
    #[serde(rename = "Nome", default)]
    pub name: String,
    #[serde(rename = "Supervisor_Nome", default)]
    pub supervisor_name: Option<String>,
}

/// Aggregate record returned by `GET /projetos/{id}`.
///
/// The nested contractor/team objects are optional so the view tolerates
/// records that are still being assembled server-side.
#[derive(Clone, PartialEq, Deserialize)]
pub struct ProjectDetailDto {
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Descricao", default)]
    pub description: String,
    #[serde(rename = "Data_Inicio", default)]
    pub start_date: String,
    #[serde(rename = "Data_Fim_Prev", default)]
    pub expected_end_date: String,
    #[serde(rename = "Status")]
    pub status: ProjectStatus,
    #[serde(
        rename = "Orcamento_previsto",
        deserialize_with = "super::lenient_decimal",
        default
    )]
    pub planned_budget: Option<f64>,
    #[serde(rename = "Contratante", default)]
    pub contractor: Option<ProjectContractorDto>,
    #[serde(rename = "Equipe_Resp", default)]
    pub team: Option<ProjectTeamDto>,
}

/// Body sent on `POST /projetos` and `PUT /projetos/edit/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectPayload {
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Descricao")]
    pub description: String,
    #[serde(rename = "Data_Inicio")]
    pub start_date: String,
    #[serde(rename = "Data_Fim_Prev")]
    pub expected_end_date: String,
    #[serde(rename = "Status")]
    pub status: ProjectStatus,
    #[serde(rename = "Orcamento_previsto")]
    pub planned_budget: f64,
    #[serde(rename = "Contratante")]
    pub contractor_id: String,
    #[serde(rename = "Equipe_Resp")]
    pub team_id: i32,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn list_row_deserializes_wire_names() {
        let row: ProjectDto = serde_json::from_value(json!({
            "ID_Projeto": 3,
            "Nome": "Reforma da sede",
            "Descricao": "Reforma completa",
            "Data_Inicio": "2025-03-05T00:00:00.000Z",
            "Data_Fim_Prev": "2025-06-01T00:00:00.000Z",
            "Status": "Em andamento",
            "Orcamento_previsto": 150000.5,
            "Cliente_Nome": "Construtora Azul",
            "Equipe_Nome": "Equipe Norte",
            "Supervisor_Nome": "Ana"
        }))
        .unwrap();

        assert_eq!(row.id, 3);
        assert_eq!(row.status, ProjectStatus::InProgress);
        assert_eq!(row.planned_budget, Some(150000.5));
        assert_eq!(row.client_name.as_deref(), Some("Construtora Azul"));
    }

    #[test]
    fn detail_tolerates_missing_nested_records() {
        let detail: ProjectDetailDto = serde_json::from_value(json!({
            "Nome": "Reforma da sede",
            "Status": "Planejado",
            "Contratante": null
        }))
        .unwrap();

        assert!(detail.contractor.is_none());
        assert!(detail.team.is_none());
        assert_eq!(detail.planned_budget, None);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result: Result<ProjectDto, _> = serde_json::from_value(json!({
            "ID_Projeto": 1,
            "Nome": "x",
            "Status": "Cancelado"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn payload_serializes_wire_names() {
        let payload = ProjectPayload {
            name: "Reforma da sede".into(),
            description: "Reforma completa".into(),
            start_date: "2025-03-05".into(),
            expected_end_date: "2025-06-01".into(),
            status: ProjectStatus::Planned,
            planned_budget: 150000.5,
            contractor_id: "12345678901".into(),
            team_id: 2,
        };

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
}
