//! Process configuration.
//!
//! Everything here is resolved once at startup (flag, then environment, then
//! default) and shared read-only for the lifetime of the server.

use crate::constants::{env, limits, network, protocols::ALLOWED_HTTP};
use crate::errors::ConfigError;
use clap::builder::FalseyValueParser;
use clap::Parser;
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "schema-api-mcp", version)]
#[command(about = "MCP server exposing the schema, user and workspace REST API as tools")]
pub struct CliArgs {
    /// Backend API base URL
    #[arg(long, env = env::BASE_URL, default_value = network::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Bearer token sent as `Authorization: Bearer <token>`
    #[arg(long, env = env::API_KEY, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long, env = env::TIMEOUT_MS, default_value_t = network::TIMEOUT_API_REQUEST_MS)]
    pub timeout_ms: u64,

    /// Largest response body read from the backend
    #[arg(long, env = env::MAX_BODY_BYTES, default_value_t = limits::MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// Fail calls whose 2xx body is not JSON instead of returning the raw text
    #[arg(long, env = env::STRICT_JSON, value_parser = FalseyValueParser::new())]
    pub strict_json: bool,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: Url,
    api_key: Option<String>,
    pub timeout_ms: u64,
    pub max_body_bytes: usize,
    pub strict_json: bool,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            api_key: None,
            timeout_ms: network::TIMEOUT_API_REQUEST_MS,
            max_body_bytes: limits::MAX_BODY_BYTES,
            strict_json: false,
        })
    }

    pub fn from_args(args: &CliArgs) -> Result<Self, ConfigError> {
        if args.timeout_ms == 0 {
            return Err(ConfigError::NonPositive { name: "timeout_ms" });
        }
        if args.max_body_bytes == 0 {
            return Err(ConfigError::NonPositive {
                name: "max_body_bytes",
            });
        }
        Ok(Self::new(&args.base_url)?
            .with_api_key(args.api_key.clone())
            .with_timeout_ms(args.timeout_ms)
            .with_max_body_bytes(args.max_body_bytes)
            .with_strict_json(args.strict_json))
    }

    /// Blank tokens count as unset so an exported-but-empty `API_KEY` does not
    /// produce a bare `Bearer ` header.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn with_strict_json(mut self, strict_json: bool) -> Self {
        self.strict_json = strict_json;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Values to mask wherever backend text or log lines are echoed.
    pub fn secrets(&self) -> Vec<String> {
        self.api_key.iter().cloned().collect()
    }

    /// Appends an endpoint path to the base URL as plain text, so a base URL
    /// with its own path prefix (`https://host/backend`) keeps that prefix.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, url::ParseError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}{}", base, path))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|err| ConfigError::InvalidBaseUrl {
        value: trimmed.to_string(),
        reason: err.to_string(),
    })?;
    if !scheme_allowed(parsed.scheme()) {
        return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
    }
    if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
        return Err(ConfigError::InvalidBaseUrl {
            value: trimmed.to_string(),
            reason: "missing host".to_string(),
        });
    }
    Ok(parsed)
}

fn scheme_allowed(scheme: &str) -> bool {
    ALLOWED_HTTP
        .iter()
        .any(|allowed| allowed.trim_end_matches(':') == scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(base_url: &str) -> CliArgs {
        CliArgs::parse_from(["schema-api-mcp", "--base-url", base_url])
    }

    #[test]
    fn endpoint_url_keeps_base_prefix_and_trailing_slash() {
        let config = ApiConfig::new("https://api.example.com/backend/").expect("config");
        let url = config.endpoint_url("/api/v1/schema/42/").expect("url");
        assert_eq!(url.as_str(), "https://api.example.com/backend/api/v1/schema/42/");
    }

    #[test]
    fn endpoint_url_does_not_add_trailing_slash() {
        let config = ApiConfig::new("http://localhost:8000").expect("config");
        let url = config
            .endpoint_url("/api/v1/user/workspaces/7")
            .expect("url");
        assert_eq!(url.as_str(), "http://localhost:8000/api/v1/user/workspaces/7");
    }

    #[test]
    fn rejects_non_http_schemes_and_garbage() {
        assert!(matches!(
            ApiConfig::new("ftp://files.example.com"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            ApiConfig::new("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn blank_api_key_is_treated_as_unset() {
        let config = ApiConfig::new("http://localhost:8000")
            .expect("config")
            .with_api_key(Some("   ".to_string()));
        assert!(config.api_key().is_none());
    }

    #[test]
    fn secrets_follow_the_api_key() {
        let config = ApiConfig::new("http://localhost:8000").expect("config");
        assert!(config.secrets().is_empty());
        let config = config.with_api_key(Some(" tok-abcdef123 ".to_string()));
        assert_eq!(config.secrets(), vec!["tok-abcdef123".to_string()]);
    }

    #[test]
    fn from_args_rejects_zero_timeout() {
        let mut cli = args("http://localhost:8000");
        cli.timeout_ms = 0;
        assert!(matches!(
            ApiConfig::from_args(&cli),
            Err(ConfigError::NonPositive { name: "timeout_ms" })
        ));
    }

    #[test]
    fn from_args_carries_flags() {
        let cli = CliArgs::parse_from([
            "schema-api-mcp",
            "--base-url",
            "http://backend:9000",
            "--api-key",
            "secret-token",
            "--timeout-ms",
            "1500",
            "--strict-json",
        ]);
        let config = ApiConfig::from_args(&cli).expect("config");
        assert_eq!(config.base_url().as_str(), "http://backend:9000/");
        assert_eq!(config.api_key(), Some("secret-token"));
        assert_eq!(config.timeout_ms, 1500);
        assert!(config.strict_json);
    }
}
