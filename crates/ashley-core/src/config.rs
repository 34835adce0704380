use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AshleyError, Result};

/// Top-level configuration for the Ashley application.
///
/// Loaded from `~/.ashley/config.toml` by default. Each section corresponds
/// to a bounded context or cross-cutting concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AshleyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

impl AshleyConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AshleyConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AshleyError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Display name of the assistant.
    pub assistant_name: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            assistant_name: "Ashley".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Chat session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Maximum accepted message length in characters.
    pub max_message_length: usize,
    /// Advisory budget for the running conversation token estimate. A
    /// warning is logged once the estimate crosses it; turns are never
    /// rejected for exceeding it.
    pub max_conversation_tokens: u64,
    /// Preset questions offered to the user at session start.
    pub quick_start_prompts: Vec<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_message_length: 2000,
            max_conversation_tokens: 4000,
            quick_start_prompts: vec![
                "What cloud services does IONOS offer?".to_string(),
                "Can you help me set up a bidirectional firewall?".to_string(),
                "What are the benefits of cloud computing?".to_string(),
            ],
        }
    }
}

/// Inference endpoint configuration.
///
/// The API key is deliberately absent: it is read from the environment
/// variable named by `api_key_env` so that secrets never land in the
/// config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum completion tokens requested from the endpoint.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// System prompt prepended to every request.
    pub system_prompt: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openai.inference.de-txl.ionos.com/v1".to_string(),
            model: "meta-llama/Meta-Llama-3.1-8B-Instruct".to_string(),
            api_key_env: "IONOS_API_TOKEN".to_string(),
            timeout_secs: 60,
            max_tokens: 1024,
            temperature: 0.7,
            system_prompt: "You are Ashley, an AI assistant specialized in cloud \
                            consulting and technical problem solving. Answer concisely."
                .to_string(),
        }
    }
}
