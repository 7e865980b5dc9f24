//! Thin HTTP client over the project-management API.
//!
//! One free function per (resource, verb) pair. Every operation is a single
//! fetch with no retry, no timeout override, and no caching; the caller owns
//! surfacing failures to the user.

pub mod contractors;
pub mod documents;
pub mod projects;
pub mod tasks;
pub mod teams;

use reqwasm::http::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Error returned by every API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (network failure, CORS, aborted fetch).
    #[error("falha de rede: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("o servidor respondeu {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body could not be decoded into the expected shape.
    #[error("resposta inesperada do servidor: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("não foi possível montar a requisição: {0}")]
    Encode(String),
}

impl From<reqwasm::Error> for ApiError {
    fn from(error: reqwasm::Error) -> Self {
        ApiError::Network(error.to_string())
    }
}

/// Serializes a JSON request body.
pub(crate) fn to_body(payload: &impl Serialize) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|error| ApiError::Encode(error.to_string()))
}

/// Decodes a JSON body on 2xx; anything else becomes an [`ApiError`].
pub(crate) async fn into_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|error| ApiError::Decode(error.to_string()))
    } else {
        Err(error_response(response).await)
    }
}

/// Discards the body on 2xx; anything else becomes an [`ApiError`].
pub(crate) async fn into_ok(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(error_response(response).await)
    }
}

/// Extracts the server's error message, falling back to the raw body.
async fn error_response(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorDto>().await {
        Ok(dto) => dto.error,
        Err(_) => response
            .text()
            .await
            .unwrap_or_else(|_| "erro desconhecido".to_string()),
    };
    ApiError::Status { status, message }
}
