use std::time::Duration;

use super::types::{AskRequest, AskResponse, HealthResponse, UploadResponse};
use super::BackendError;
use crate::config::BackendConfig;
use crate::pipeline::staging::StagedDocument;

/// Remote extraction service abstraction (allows mocking for tests).
///
/// Pure request/response: no fallback logic lives here, only the wire
/// contract with the backend.
pub trait PrescriptionBackend {
    /// `POST /upload`: full OCR processing.
    fn upload_ocr(&self, document: &StagedDocument) -> Result<UploadResponse, BackendError>;

    /// `POST /extract-text`: text-layer extraction without OCR.
    fn upload_text_only(&self, document: &StagedDocument) -> Result<UploadResponse, BackendError>;

    /// `POST /test-upload`: connectivity check, no extraction.
    fn upload_diagnostic(&self, document: &StagedDocument)
        -> Result<UploadResponse, BackendError>;

    /// `POST /ask`: AI narrative over previously extracted text.
    fn ask(&self, request: &AskRequest) -> Result<AskResponse, BackendError>;

    /// `GET /health`.
    fn health(&self) -> Result<HealthResponse, BackendError>;
}

/// HTTP client for the extraction backend.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::blocking::Client,
    request_timeout_secs: u64,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            request_timeout_secs: config.request_timeout_secs,
        }
    }

    /// Backend at the default local address.
    pub fn default_local() -> Self {
        Self::new(&BackendConfig::default())
    }

    fn upload(&self, path: &str, document: &StagedDocument) -> Result<UploadResponse, BackendError> {
        let url = format!("{}/{}", self.base_url, path);
        let bytes = document.read_bytes()?;

        let part = reqwest::blocking::multipart::Part::bytes(bytes)
            .file_name(document.name().to_string())
            .mime_str(document.mime().as_str())
            .map_err(|e| BackendError::Http(e.to_string()))?;
        let form = reqwest::blocking::multipart::Form::new().part("files", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| self.map_transport_error(e))?;

        self.parse_response(response)
    }

    fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::blocking::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .map_err(|e| BackendError::ResponseParsing(e.to_string()))
    }

    fn map_transport_error(&self, error: reqwest::Error) -> BackendError {
        if error.is_connect() {
            BackendError::Connection(self.base_url.clone())
        } else if error.is_timeout() {
            BackendError::Timeout(self.request_timeout_secs)
        } else {
            BackendError::Http(error.to_string())
        }
    }
}

impl PrescriptionBackend for HttpBackend {
    fn upload_ocr(&self, document: &StagedDocument) -> Result<UploadResponse, BackendError> {
        self.upload("upload", document)
    }

    fn upload_text_only(&self, document: &StagedDocument) -> Result<UploadResponse, BackendError> {
        self.upload("extract-text", document)
    }

    fn upload_diagnostic(
        &self,
        document: &StagedDocument,
    ) -> Result<UploadResponse, BackendError> {
        self.upload("test-upload", document)
    }

    fn ask(&self, request: &AskRequest) -> Result<AskResponse, BackendError> {
        let url = format!("{}/ask", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| self.map_transport_error(e))?;
        self.parse_response(response)
    }

    fn health(&self) -> Result<HealthResponse, BackendError> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| self.map_transport_error(e))?;
        self.parse_response(response)
    }
}

/// Scripted result for one upload endpoint of [`MockBackend`].
#[derive(Debug, Clone)]
pub enum MockUpload {
    Response(UploadResponse),
    Status(u16, String),
    ConnectionRefused,
}

impl MockUpload {
    /// A 2xx response carrying one document with the given content.
    pub fn with_document(content: &str) -> Self {
        Self::Response(UploadResponse {
            documents: vec![super::types::DocumentInfo {
                filename: "mock.pdf".into(),
                content: content.to_string(),
                ..Default::default()
            }],
            total_documents: 1,
            ..Default::default()
        })
    }

    /// A 2xx response with no documents, only a message.
    pub fn with_message(message: &str) -> Self {
        Self::Response(UploadResponse {
            message: message.to_string(),
            ..Default::default()
        })
    }

    fn produce(&self) -> Result<UploadResponse, BackendError> {
        match self {
            Self::Response(response) => Ok(response.clone()),
            Self::Status(status, body) => Err(BackendError::Status {
                status: *status,
                body: body.clone(),
            }),
            Self::ConnectionRefused => {
                Err(BackendError::Connection("http://localhost:8000".into()))
            }
        }
    }
}

/// Mock backend for tests; each endpoint returns a configured result.
/// Starts fully unreachable; builders script individual endpoints.
pub struct MockBackend {
    ocr: MockUpload,
    text_only: MockUpload,
    diagnostic: MockUpload,
    ask_response: Option<AskResponse>,
    health_status: Option<String>,
}

impl MockBackend {
    pub fn unreachable() -> Self {
        Self {
            ocr: MockUpload::ConnectionRefused,
            text_only: MockUpload::ConnectionRefused,
            diagnostic: MockUpload::ConnectionRefused,
            ask_response: None,
            health_status: None,
        }
    }

    pub fn with_ocr(mut self, result: MockUpload) -> Self {
        self.ocr = result;
        self
    }

    pub fn with_text_only(mut self, result: MockUpload) -> Self {
        self.text_only = result;
        self
    }

    pub fn with_diagnostic(mut self, result: MockUpload) -> Self {
        self.diagnostic = result;
        self
    }

    pub fn with_narrative(mut self, narrative: &str) -> Self {
        self.ask_response = Some(AskResponse {
            response: narrative.to_string(),
            reasoning: vec![],
            context: None,
            success: true,
        });
        self
    }

    pub fn with_health(mut self, status: &str) -> Self {
        self.health_status = Some(status.to_string());
        self
    }
}

impl PrescriptionBackend for MockBackend {
    fn upload_ocr(&self, _document: &StagedDocument) -> Result<UploadResponse, BackendError> {
        self.ocr.produce()
    }

    fn upload_text_only(&self, _document: &StagedDocument) -> Result<UploadResponse, BackendError> {
        self.text_only.produce()
    }

    fn upload_diagnostic(
        &self,
        _document: &StagedDocument,
    ) -> Result<UploadResponse, BackendError> {
        self.diagnostic.produce()
    }

    fn ask(&self, _request: &AskRequest) -> Result<AskResponse, BackendError> {
        match &self.ask_response {
            Some(response) => Ok(response.clone()),
            None => Err(BackendError::Connection("http://localhost:8000".into())),
        }
    }

    fn health(&self) -> Result<HealthResponse, BackendError> {
        match &self.health_status {
            Some(status) => Ok(HealthResponse {
                status: status.clone(),
                message: None,
                timestamp: 0,
            }),
            None => Err(BackendError::Connection("http://localhost:8000".into())),
        }
    }
}
