use reqwasm::http::Request;

use crate::client::api::{into_json, into_ok, to_body, ApiError};
use crate::client::config::ApiConfig;
use crate::model::project::{ProjectDetailDto, ProjectDto, ProjectPayload};

/// Fetches the denormalized project collection.
pub async fn list_projects(config: &ApiConfig) -> Result<Vec<ProjectDto>, ApiError> {
    let response = Request::get(&config.url("/projetos")).send().await?;
    into_json(response).await
}

/// Fetches one aggregate project record with its nested contractor and team.
pub async fn get_project(config: &ApiConfig, id: i32) -> Result<ProjectDetailDto, ApiError> {
    let response = Request::get(&config.url(&format!("/projetos/{id}")))
        .send()
        .await?;
    into_json(response).await
}

pub async fn create_project(config: &ApiConfig, payload: &ProjectPayload) -> Result<(), ApiError> {
    let response = Request::post(&config.url("/projetos"))
        .header("Content-Type", "application/json")
        .body(to_body(payload)?)
        .send()
        .await?;
    into_ok(response).await
}

pub async fn update_project(
    config: &ApiConfig,
    id: i32,
    payload: &ProjectPayload,
) -> Result<(), ApiError> {
    let response = Request::put(&config.url(&format!("/projetos/edit/{id}")))
        .header("Content-Type", "application/json")
        .body(to_body(payload)?)
        .send()
        .await?;
    into_ok(response).await
}

pub async fn delete_project(config: &ApiConfig, id: i32) -> Result<(), ApiError> {
    let response = Request::delete(&config.url(&format!("/projetos/{id}")))
        .send()
        .await?;
    into_ok(response).await
}
