use serde::{Deserialize, Serialize};

/// Task status enumeration as stored by the API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Pendente")]
    Pending,
    #[serde(rename = "Em andamento")]
    InProgress,
    #[serde(rename = "Concluído")]
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Done,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pendente",
            TaskStatus::InProgress => "Em andamento",
            TaskStatus::Done => "Concluído",
        }
    }

    pub fn from_label(label: &str) -> Option<TaskStatus> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Task record returned by `GET /projetos/{id}/tarefas` and `GET /tarefas/{id}`.
///
/// The owning project id never travels in the body: creation and listing are
/// addressed through the parent path, edit and delete directly by task id.
#[derive(Clone, PartialEq, Deserialize)]
pub struct TaskDto {
    #[serde(rename = "ID_Tarefa")]
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
    pub status: TaskStatus,
}

/// Body sent on `POST /projetos/{id}/tarefas` and `PUT /tarefas/edit/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaskPayload {
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Descricao")]
    pub description: String,
    #[serde(rename = "Data_Inicio")]
    pub start_date: String,
    #[serde(rename = "Data_Fim_Prev")]
    pub expected_end_date: String,
    #[serde(rename = "Status")]
    pub status: TaskStatus,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn task_deserializes_wire_names() {
        let task: TaskDto = serde_json::from_value(json!({
            "ID_Tarefa": 12,
            "Nome": "Fundação",
            "Descricao": "Escavação e fundação",
            "Data_Inicio": "2025-01-01T00:00:00.000Z",
            "Data_Fim_Prev": "2025-01-20T00:00:00.000Z",
            "Status": "Pendente"
        }))
        .unwrap();

        assert_eq!(task.id, 12);
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn payload_matches_the_wire_format() {
        let payload = TaskPayload {
            name: "Survey".into(),
            description: "Site survey".into(),
            start_date: "2025-01-01".into(),
            expected_end_date: "2025-01-10".into(),
            status: TaskStatus::Pending,
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
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
    fn unknown_status_is_rejected() {
        let result: Result<TaskDto, _> = serde_json::from_value(json!({
            "ID_Tarefa": 1,
            "Nome": "x",
            "Status": "Arquivado"
        }));
        assert!(result.is_err());
    }
}
