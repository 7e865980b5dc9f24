use serde::{Deserialize, Serialize};

/// Body returned by the API when a request fails.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    /// Human-readable error message.
    pub error: String,
}
