use std::env;

use crate::completion::CompletionConfig;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_COMPLETION_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-4-turbo-preview";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub api_key: String,
    pub completion_url: String,
    pub completion_model: String,
    pub timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Missing or
    /// unparseable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_key = lookup("OPENAI_API_KEY")
            .map(|value| value.trim().to_string())
            .unwrap_or_default();

        let completion_url =
            lookup("COMPLETION_URL").unwrap_or_else(|| DEFAULT_COMPLETION_URL.to_string());

        let completion_model =
            lookup("COMPLETION_MODEL").unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string());

        let timeout_ms = lookup("COMPLETION_TIMEOUT_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            port,
            api_key,
            completion_url,
            completion_model,
            timeout_ms,
        }
    }

    pub fn completion(&self) -> CompletionConfig {
        CompletionConfig::new(&self.completion_url, &self.api_key)
            .with_model(&self.completion_model)
            .with_timeout_ms(self.timeout_ms)
    }
}
