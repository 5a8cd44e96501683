use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use labnote::ProcessError;
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// This enum encapsulates different kinds of errors that can occur within the
/// server, allowing them to be converted into appropriate HTTP responses.
pub enum AppError {
    /// Errors originating from the `labnote` pipeline.
    Process(ProcessError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

/// Conversion from `ProcessError` to `AppError`.
impl From<ProcessError> for AppError {
    fn from(err: ProcessError) -> Self {
        AppError::Process(err)
    }
}

/// Conversion from `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Process(err) => {
                // Log the original error for debugging purposes
                error!("ProcessError: {:?}", err);
                match err {
                    ProcessError::MissingApiKey | ProcessError::MissingAiProvider(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Server is not configured correctly.".to_string(),
                    ),
                    ProcessError::DocumentRead(e) => (
                        StatusCode::BAD_REQUEST,
                        format!("Failed to read the uploaded PDF: {e}"),
                    ),
                    ProcessError::AiRequest(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Request to AI provider failed: {e}"),
                    ),
                    ProcessError::AiDeserialization(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Failed to deserialize AI provider response: {e}"),
                    ),
                    ProcessError::AiApi(e) => {
                        (StatusCode::BAD_GATEWAY, format!("AI provider error: {e}"))
                    }
                    ProcessError::ReqwestClientBuild(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Failed to build HTTP client: {e}"),
                    ),
                }
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
