use std::env;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "vocadia";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{APP_NAME}=info")
}

const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "deepseek-r1-distill-llama-70b";
const DEFAULT_DB_PATH: &str = "vocadia.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub db_path: String,
    pub bind_addr: String,
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup function.
    /// Lets tests supply values without touching process-global env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GROQ_API_KEY")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar("GROQ_API_KEY"))?;

        let get_or = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            api_key,
            api_url: get_or("GROQ_API_URL", DEFAULT_API_URL),
            model: get_or("GROQ_MODEL", DEFAULT_MODEL),
            db_path: get_or("VOCADIA_DB", DEFAULT_DB_PATH),
            bind_addr: get_or("VOCADIA_ADDR", DEFAULT_BIND_ADDR),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_an_error() {
        let result = Config::from_lookup(|_| None);
        assert!(matches!(result, Err(ConfigError::MissingVar("GROQ_API_KEY"))));
    }

    #[test]
    fn empty_api_key_is_an_error() {
        let result = Config::from_lookup(|key| {
            (key == "GROQ_API_KEY").then(String::new)
        });
        assert!(result.is_err());
    }

    #[test]
    fn defaults_applied_when_only_key_present() {
        let cfg = Config::from_lookup(|key| {
            (key == "GROQ_API_KEY").then(|| "sk-test".to_string())
        })
        .unwrap();

        assert_eq!(cfg.api_key, "sk-test");
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.db_path, "vocadia.db");
        assert_eq!(cfg.bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn overrides_take_precedence() {
        let cfg = Config::from_lookup(|key| match key {
            "GROQ_API_KEY" => Some("sk-test".into()),
            "GROQ_API_URL" => Some("http://localhost:9999/v1/chat".into()),
            "GROQ_MODEL" => Some("llama-3.3-70b".into()),
            "VOCADIA_DB" => Some("/tmp/test.db".into()),
            "VOCADIA_ADDR" => Some("0.0.0.0:3000".into()),
            _ => None,
        })
        .unwrap();

        assert_eq!(cfg.api_url, "http://localhost:9999/v1/chat");
        assert_eq!(cfg.model, "llama-3.3-70b");
        assert_eq!(cfg.db_path, "/tmp/test.db");
        assert_eq!(cfg.bind_addr, "0.0.0.0:3000");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.2.0");
    }
}
