//! # AI Provider Factory
//!
//! This module centralizes the logic for creating AI provider instances from
//! configuration. By placing it in the library we let every entry surface
//! (server, cli) share the same construction path instead of each carrying
//! its own copy.

use crate::{
    errors::ProcessError,
    providers::ai::{gemini::GeminiProvider, openai::OpenAiProvider, AiProvider},
};
use serde::Deserialize;
use std::env;
use tracing::info;

/// The default endpoint for the hosted OpenAI chat completions API.
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// The model used for formatting calls unless configuration says otherwise.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// A reusable configuration for a specific AI provider instance.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// The type of provider ("openai" or "gemini").
    pub provider: String,
    /// The API URL. Optional for providers where it can be derived.
    pub api_url: Option<String>,
    /// The API key. Required for hosted providers.
    pub api_key: Option<String>,
    pub model_name: String,
}

impl ProviderConfig {
    /// Reads the provider configuration from the environment.
    ///
    /// Variables: `AI_PROVIDER` (default "openai"), `AI_API_KEY` (required),
    /// `AI_API_URL` (optional), `AI_MODEL` (default "gpt-4o").
    ///
    /// The absence of a credential is a configuration error and is reported
    /// here, before any document is touched.
    pub fn from_env() -> Result<Self, ProcessError> {
        let api_key = env::var("AI_API_KEY").ok().filter(|k| !k.is_empty());
        if api_key.is_none() {
            return Err(ProcessError::MissingApiKey);
        }

        Ok(Self {
            provider: env::var("AI_PROVIDER").unwrap_or_else(|_| "openai".to_string()),
            api_url: env::var("AI_API_URL").ok().filter(|u| !u.is_empty()),
            api_key,
            model_name: env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}

/// Creates an AI provider instance from a `ProviderConfig`.
///
/// Hosted providers without an API key fail fast with
/// `ProcessError::MissingApiKey`.
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn AiProvider>, ProcessError> {
    let provider: Box<dyn AiProvider> = match config.provider.as_str() {
        "openai" => {
            let api_key = config.api_key.clone().ok_or(ProcessError::MissingApiKey)?;
            let api_url = config
                .api_url
                .clone()
                .unwrap_or_else(|| OPENAI_API_URL.to_string());
            info!(
                "Configuring OpenAI provider for model '{}' at {}",
                config.model_name, api_url
            );
            Box::new(OpenAiProvider::new(
                api_url,
                Some(api_key),
                Some(config.model_name.clone()),
            )?)
        }
        "gemini" => {
            let api_key = config.api_key.clone().ok_or(ProcessError::MissingApiKey)?;
            let api_url = config.api_url.clone().unwrap_or_else(|| {
                format!(
                    "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
                    config.model_name
                )
            });
            info!("Configuring Gemini provider with URL: {}", api_url);
            Box::new(GeminiProvider::new(api_url, api_key)?)
        }
        other => {
            return Err(ProcessError::MissingAiProvider(format!(
                "Unsupported AI provider: {other}"
            )))
        }
    };

    Ok(provider)
}
