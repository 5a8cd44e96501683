//! # Server Configuration
//!
//! Configuration is environment-driven and resolved once at startup. The AI
//! credential is checked here, before the server accepts any upload.

use labnote::providers::factory::ProviderConfig;
use labnote::ProcessError;
use std::env;

/// Provides a default value for the `port` field if not set in the environment.
fn default_port() -> u16 {
    9090
}

/// Runtime configuration for the server.
#[derive(Debug, Clone)]
pub struct Config {
    /// The port for the server to listen on. Loaded from `PORT`.
    pub port: u16,
    /// The AI provider configuration, loaded from the `AI_*` variables.
    pub provider: ProviderConfig,
}

/// Loads the server configuration from environment variables.
///
/// A missing AI credential fails here, before any document processing is
/// attempted.
pub fn get_config() -> Result<Config, ProcessError> {
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let provider = ProviderConfig::from_env()?;

    Ok(Config { port, provider })
}
