//! Shared types used across the TransitGuard assistant crates.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Simulated response latency when no config overrides it, in milliseconds.
pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 1000;

/// Transport-level reply shape for one chat exchange.
///
/// `success` is always `true` in the current behavior: internal failures are
/// translated into a degraded but valid `message` rather than surfaced as
/// failures, so the chat UI never has to render a raw error state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    pub message: String,
}

impl ChatResponse {
    /// A successful reply carrying `message`.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Assistant configuration. Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Application identity (e.g. "TransitGuard Assistant").
    pub app_name: String,
    /// Simulated latency added before every reply, in milliseconds.
    pub response_delay_ms: u64,
}

impl AssistantConfig {
    /// Load config from file and environment. Precedence: env `TRANSITGUARD_CONFIG` path
    /// > `config/assistant.toml` > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("TRANSITGUARD_CONFIG").unwrap_or_else(|_| "config/assistant".to_string());
        let builder = config::Config::builder()
            .set_default("app_name", "TransitGuard Assistant")?
            .set_default("response_delay_ms", DEFAULT_RESPONSE_DELAY_MS as i64)?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("TRANSITGUARD").separator("__"))
            .build()?;

        built.try_deserialize()
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            app_name: "TransitGuard Assistant".to_string(),
            response_delay_ms: DEFAULT_RESPONSE_DELAY_MS,
        }
    }
}
