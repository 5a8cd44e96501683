pub mod gemini;
pub mod openai;

use crate::errors::ProcessError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface for generating a completion from a
/// system and a user message, so the formatting stage can run against
/// different backends (OpenAI-compatible endpoints, Gemini, test mocks).
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    ///
    /// The result is the first completion's text content, untrimmed.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, ProcessError>;
}

dyn_clone::clone_trait_object!(AiProvider);
