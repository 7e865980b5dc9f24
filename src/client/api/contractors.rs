use reqwasm::http::Request;

use crate::client::api::{into_json, into_ok, to_body, ApiError};
use crate::client::config::ApiConfig;
use crate::model::contractor::ContractorDto;

pub async fn list_contractors(config: &ApiConfig) -> Result<Vec<ContractorDto>, ApiError> {
    let response = Request::get(&config.url("/clientes")).send().await?;
    into_json(response).await
}

pub async fn create_contractor(
    config: &ApiConfig,
    contractor: &ContractorDto,
) -> Result<(), ApiError> {
    let response = Request::post(&config.url("/clientes"))
        .header("Content-Type", "application/json")
        .body(to_body(contractor)?)
        .send()
        .await?;
    into_ok(response).await
}

/// Updates a contracting client. The tax id is the immutable lookup key, so
/// the caller passes the digits it loaded the record with.
pub async fn update_contractor(
    config: &ApiConfig,
    tax_id: &str,
    contractor: &ContractorDto,
) -> Result<(), ApiError> {
    let response = Request::put(&config.url(&format!("/clientes/{tax_id}")))
        .header("Content-Type", "application/json")
        .body(to_body(contractor)?)
        .send()
        .await?;
    into_ok(response).await
}

pub async fn delete_contractor(config: &ApiConfig, tax_id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&config.url(&format!("/clientes/{tax_id}")))
        .send()
        .await?;
    into_ok(response).await
}
