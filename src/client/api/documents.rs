use reqwasm::http::Request;

use crate::client::api::{into_json, into_ok, ApiError};
use crate::client::config::ApiConfig;
use crate::model::document::{DocumentDto, SelectedFile};

/// Lists a project's attached documents. A project with none yet answers
/// 404, which is an empty collection rather than an error.
pub async fn list_documents(
    config: &ApiConfig,
    project_id: i32,
) -> Result<Vec<DocumentDto>, ApiError> {
    let response = Request::get(&config.url(&format!("/projetos/{project_id}/documentos")))
        .send()
        .await?;
    if response.status() == 404 {
        return Ok(Vec::new());
    }
    into_json(response).await
}

/// Uploads one file as the API's multipart `file` field. The browser picks
/// the multipart boundary, so no Content-Type header is set here.
pub async fn upload_document(
    config: &ApiConfig,
    project_id: i32,
    file: &SelectedFile,
) -> Result<(), ApiError> {
    let form = multipart_body(file)
        .map_err(|_| ApiError::Encode("não foi possível montar o corpo multipart".to_string()))?;
    let response = Request::post(&config.url(&format!("/projetos/{project_id}/documentos")))
        .body(form)
        .send()
        .await?;
    into_ok(response).await
}

pub async fn delete_document(
    config: &ApiConfig,
    project_id: i32,
    document_id: i32,
) -> Result<(), ApiError> {
    let response = Request::delete(&config.url(&format!(
        "/projetos/{project_id}/documentos/{document_id}"
    )))
    .send()
    .await?;
    into_ok(response).await
}

/// Direct download address for a stored document, used as a plain anchor
/// href so the browser honors the content-disposition filename.
pub fn download_url(config: &ApiConfig, project_id: i32, document_id: i32) -> String {
    config.url(&format!("/projetos/{project_id}/documentos/{document_id}"))
}

fn multipart_body(file: &SelectedFile) -> Result<web_sys::FormData, wasm_bindgen::JsValue> {
    let bytes = js_sys::Uint8Array::new_with_length(file.contents.len() as u32);
    bytes.copy_from(&file.contents);
    let parts = js_sys::Array::new();
    parts.push(&bytes);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)?;
    let form = web_sys::FormData::new()?;
    form.append_with_blob_and_filename("file", &blob, &file.name)?;
    Ok(form)
}
