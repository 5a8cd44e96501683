use thiserror::Error;

/// Custom error types for the lab-report pipeline.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("No AI provider is configured: {0}")]
    MissingAiProvider(String),
    #[error("AI API key is missing")]
    MissingApiKey,
    #[error("Failed to open or parse the PDF document: {0}")]
    DocumentRead(String),
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Request to the AI provider failed: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
}
