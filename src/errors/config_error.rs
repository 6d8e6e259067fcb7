use super::tool_error::ToolError;
use thiserror::Error;

/// Startup configuration problems. Any of these stops the server before it
/// reads its first request.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("unsupported base URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("{name} must be greater than zero")]
    NonPositive { name: &'static str },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl From<ConfigError> for ToolError {
    fn from(err: ConfigError) -> Self {
        let hint = match &err {
            ConfigError::InvalidBaseUrl { .. } | ConfigError::UnsupportedScheme(_) => {
                Some("Set API_BASE_URL (or --base-url) to an http(s) URL such as http://localhost:8000")
            }
            ConfigError::NonPositive { .. } => Some("Use a positive integer value"),
            ConfigError::HttpClient(_) => None,
        };
        let out = ToolError::config(err.to_string());
        match hint {
            Some(hint) => out.with_hint(hint),
            None => out,
        }
    }
}
