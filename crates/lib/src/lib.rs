//! # labnote: Lab Report to Consultation Note
//!
//! This crate extracts the text of a medical lab-report PDF and reformats it
//! into the shape used in Russian medical consultation notes, using a
//! configurable AI provider for the reformatting step. The pipeline is two
//! stages, strictly ordered per document: text extraction, then one
//! formatting call against a pinned instruction template.

pub mod errors;
pub mod extract;
pub mod prompts;
pub mod providers;
pub mod types;

pub use errors::ProcessError;
pub use types::{LabReportClient, LabReportClientBuilder, ProcessingResult};

use chrono::Local;
use std::path::Path;
use tracing::{info, warn};

impl LabReportClient {
    /// Reformats raw lab-report text into a consultation note.
    ///
    /// Builds the pinned instruction prompt around `raw_text`, sends one
    /// request to the AI provider, and returns the first completion trimmed
    /// of surrounding whitespace. The model output is opaque to this crate;
    /// nothing beyond the trim is done to it, and no retry is attempted.
    pub async fn format_results(&self, raw_text: &str) -> Result<String, ProcessError> {
        let user_prompt = prompts::build_user_prompt(raw_text);
        let response = self
            .ai_provider
            .generate(prompts::FORMATTING_SYSTEM_PROMPT, &user_prompt)
            .await?;
        Ok(response.trim().to_string())
    }

    /// Runs the full pipeline over a PDF already in memory.
    ///
    /// Strictly ordered: extract text, format it, stamp the current time,
    /// assemble the record. If extraction fails the formatter is never
    /// called; if formatting fails no partial record is returned.
    pub async fn process_report_bytes(
        &self,
        pdf_data: &[u8],
    ) -> Result<ProcessingResult, ProcessError> {
        let raw_text = extract::extract_text(pdf_data)?;
        self.format_and_assemble(raw_text).await
    }

    /// Runs the full pipeline over a PDF on disk.
    pub async fn process_report(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<ProcessingResult, ProcessError> {
        let raw_text = extract::extract_text_from_path(path)?;
        self.format_and_assemble(raw_text).await
    }

    async fn format_and_assemble(
        &self,
        raw_text: String,
    ) -> Result<ProcessingResult, ProcessError> {
        if raw_text.trim().is_empty() {
            warn!("PDF yielded no extractable text; formatting an empty report.");
        } else {
            info!(
                "Extracted {} characters of lab-report text.",
                raw_text.len()
            );
        }

        let formatted_results = self.format_results(&raw_text).await?;

        Ok(ProcessingResult {
            raw_text,
            formatted_results,
            processed_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }
}
