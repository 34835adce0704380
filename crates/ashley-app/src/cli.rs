//! CLI argument definitions for the Ashley application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Ashley - an AI cloud assistant chatting against a remote inference endpoint.
#[derive(Parser, Debug)]
#[command(name = "ashley", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Override the inference endpoint base URL.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Override the model identifier.
    #[arg(short = 'm', long = "model")]
    pub model: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > ASHLEY_CONFIG env var > platform default
    /// (~/.ashley/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("ASHLEY_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".ashley").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".ashley").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            config: None,
            log_level: None,
            base_url: None,
            model: None,
        }
    }

    #[test]
    fn test_config_flag_wins() {
        let mut a = args();
        a.config = Some(PathBuf::from("/tmp/custom.toml"));
        assert_eq!(a.resolve_config_path(), PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn test_default_config_path_is_nonempty() {
        let path = args().resolve_config_path();
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn test_log_level_flag_wins_over_config() {
        let mut a = args();
        a.log_level = Some("debug".to_string());
        assert_eq!(a.resolve_log_level("info"), "debug");
    }

    #[test]
    fn test_log_level_falls_back_to_config() {
        assert_eq!(args().resolve_log_level("warn"), "warn");
    }
}
