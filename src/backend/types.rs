use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Response shape shared by all three upload endpoints.
///
/// The backend is lenient about which fields it populates: full OCR puts
/// extracted text in `documents[n].content`, the text-only endpoint may put
/// it in `message`, and the diagnostic endpoint only fills `message`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub documents: Vec<DocumentInfo>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub total_documents: u32,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_true")]
    pub success: bool,
}

impl Default for UploadResponse {
    fn default() -> Self {
        Self {
            documents: vec![],
            message: String::new(),
            total_documents: 0,
            text: String::new(),
            success: true,
        }
    }
}

/// One processed document inside an upload response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentInfo {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub upload_time: String,
    #[serde(default)]
    pub id: String,
}

/// Request body for the AI narrative endpoint (`POST /ask`).
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest {
    pub query: String,
    pub context: String,
}

/// Response from the AI narrative endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AskResponse {
    pub response: String,
    #[serde(default)]
    pub reasoning: Vec<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default = "default_true")]
    pub success: bool,
}

/// Response from `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: i64,
}
