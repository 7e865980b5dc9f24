use serde::Deserialize;

/// Team row returned by `GET /equipes`. Read-only in this client; teams are
/// only offered as a dropdown source when assigning a project.
#[derive(Clone, PartialEq, Deserialize)]
pub struct TeamDto {
    #[serde(rename = "ID_Equipe")]
    pub id: i32,
    #[serde(rename = "Nome")]
    pub name: String,
}
