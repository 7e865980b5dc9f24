use serde::Deserialize;

/// Document row returned by `GET /projetos/{id}/documentos`. The binary
/// content is never held client-side; downloads link straight to the API.
#[derive(Clone, PartialEq, Deserialize)]
pub struct DocumentDto {
    #[serde(rename = "ID_Documento")]
    pub id: i32,
    #[serde(rename = "Nome_Arquivo")]
    pub filename: String,
    #[serde(rename = "Tipo_Arquivo", default)]
    pub file_type: Option<String>,
}

/// A file picked (or dropped) by the user, read into memory and waiting for
/// an explicit upload.
#[derive(Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub contents: Vec<u8>,
}
