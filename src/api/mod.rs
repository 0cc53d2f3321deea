pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: String,
}

impl TextRequest {
    /// Anything that is not a JSON object with a string `text` field reads as
    /// empty text: no body, `null`, invalid JSON or a wrongly typed field.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Option<TextRequest>>(body) {
            Ok(request) => request.unwrap_or_default(),
            Err(e) => {
                tracing::debug!("Treating unreadable body as empty text: {}", e);
                Self::default()
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
