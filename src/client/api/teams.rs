use reqwasm::http::Request;

use crate::client::api::{into_json, ApiError};
use crate::client::config::ApiConfig;
use crate::model::team::TeamDto;

/// Lists the teams available as a project's responsible party. Read-only in
/// this client; teams are managed elsewhere.
pub async fn list_teams(config: &ApiConfig) -> Result<Vec<TeamDto>, ApiError> {
    let response = Request::get(&config.url("/equipes")).send().await?;
    into_json(response).await
}
