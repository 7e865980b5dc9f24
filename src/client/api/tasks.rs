use reqwasm::http::Request;

use crate::client::api::{into_json, into_ok, to_body, ApiError};
use crate::client::config::ApiConfig;
use crate::model::task::{TaskDto, TaskPayload};

/// Lists the tasks belonging to a project. Tasks are always listed and
/// created through the owning project's path.
pub async fn list_tasks(config: &ApiConfig, project_id: i32) -> Result<Vec<TaskDto>, ApiError> {
    let response = Request::get(&config.url(&format!("/projetos/{project_id}/tarefas")))
        .send()
        .await?;
    into_json(response).await
}

pub async fn get_task(config: &ApiConfig, id: i32) -> Result<TaskDto, ApiError> {
    let response = Request::get(&config.url(&format!("/tarefas/{id}")))
        .send()
        .await?;
    into_json(response).await
}

pub async fn create_task(
    config: &ApiConfig,
    project_id: i32,
    payload: &TaskPayload,
) -> Result<(), ApiError> {
    let response = Request::post(&config.url(&format!("/projetos/{project_id}/tarefas")))
        .header("Content-Type", "application/json")
        .body(to_body(payload)?)
        .send()
        .await?;
    into_ok(response).await
}

pub async fn update_task(config: &ApiConfig, id: i32, payload: &TaskPayload) -> Result<(), ApiError> {
    let response = Request::put(&config.url(&format!("/tarefas/edit/{id}")))
        .header("Content-Type", "application/json")
        .body(to_body(payload)?)
        .send()
        .await?;
    into_ok(response).await
}

pub async fn delete_task(config: &ApiConfig, id: i32) -> Result<(), ApiError> {
    let response = Request::delete(&config.url(&format!("/tarefas/{id}")))
        .send()
        .await?;
    into_ok(response).await
}
