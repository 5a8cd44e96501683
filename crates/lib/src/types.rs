use crate::errors::ProcessError;
use crate::providers::ai::AiProvider;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A client that turns a lab-report PDF into a formatted consultation note.
///
/// Each call builds its own request and result record, so one client can be
/// shared across concurrent callers.
pub struct LabReportClient {
    pub(crate) ai_provider: Box<dyn AiProvider>,
}

impl fmt::Debug for LabReportClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabReportClient").finish_non_exhaustive()
    }
}

/// The output record for one processed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingResult {
    /// The text extracted from the PDF, in page order.
    pub raw_text: String,
    /// The model-formatted note, trimmed of surrounding whitespace. Always
    /// derived from the `raw_text` in the same record.
    pub formatted_results: String,
    /// Local time the record was assembled, as `%Y-%m-%d %H:%M:%S`.
    pub processed_at: String,
}

/// A builder for creating `LabReportClient` instances.
///
/// The AI provider is injected here, at construction time, so the client can
/// be exercised with substituted credentials and backends.
#[derive(Default)]
pub struct LabReportClientBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
}

impl LabReportClientBuilder {
    /// Creates a new `LabReportClientBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider used for formatting calls.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// Builds the `LabReportClient`.
    ///
    /// Fails with `ProcessError::MissingAiProvider` when no provider was
    /// injected.
    pub fn build(self) -> Result<LabReportClient, ProcessError> {
        let ai_provider = self.ai_provider.ok_or_else(|| {
            ProcessError::MissingAiProvider(
                "an AI provider must be set before build".to_string(),
            )
        })?;
        Ok(LabReportClient { ai_provider })
    }
}
