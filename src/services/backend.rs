use crate::config::ApiConfig;
use crate::constants::{limits::ERROR_BODY_PREVIEW_BYTES, network};
use crate::errors::{ConfigError, ToolError};
use crate::registry::{HttpMethod, PreparedRequest};
use crate::services::logger::Logger;
use crate::utils::redact::redact_text;
use futures::StreamExt;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Decoded response body. Which variant came back is part of the result, so a
/// caller can tell a JSON payload from the raw-text fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
    Empty,
}

impl ResponseBody {
    pub fn format(&self) -> &'static str {
        match self {
            ResponseBody::Json(_) => "json",
            ResponseBody::Text(_) => "text",
            ResponseBody::Empty => "empty",
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            ResponseBody::Json(value) => value,
            ResponseBody::Text(text) => Value::String(text),
            ResponseBody::Empty => Value::Null,
        }
    }

    fn preview(&self, secrets: &[String]) -> Value {
        match self {
            ResponseBody::Json(value) => value.clone(),
            ResponseBody::Text(text) => {
                Value::String(redact_text(text, ERROR_BODY_PREVIEW_BYTES, Some(secrets)))
            }
            ResponseBody::Empty => Value::Null,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub method: HttpMethod,
    pub url: String,
    pub status: u16,
    pub duration_ms: u128,
    pub body: ResponseBody,
    pub body_truncated: bool,
}

impl ApiResponse {
    pub fn meta(&self) -> Value {
        serde_json::json!({
            "method": self.method.as_str(),
            "url": self.url,
            "status": self.status,
            "duration_ms": self.duration_ms,
            "body_format": self.body.format(),
            "body_truncated": self.body_truncated,
        })
    }
}

#[derive(Debug)]
struct BodyCapture {
    buffer: Vec<u8>,
    truncated: bool,
}

/// The one HTTP client shared by every tool. Each [`BackendClient::send`] is
/// exactly one request with no retry.
#[derive(Clone)]
pub struct BackendClient {
    logger: Logger,
    config: Arc<ApiConfig>,
    client: Client,
    secrets: Vec<String>,
}

impl BackendClient {
    pub fn new(logger: Logger, config: Arc<ApiConfig>) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(
                network::TIMEOUT_CONNECTION_MS.min(config.timeout_ms),
            ))
            .user_agent(network::USER_AGENT)
            .build()?;
        Ok(Self {
            logger: logger.child("backend"),
            secrets: config.secrets(),
            config,
            client,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn send(&self, request: &PreparedRequest) -> Result<ApiResponse, ToolError> {
        let mut url = self.config.endpoint_url(&request.path).map_err(|err| {
            ToolError::invalid_params(format!("Invalid request path '{}': {}", request.path, err))
        })?;
        url.set_query(request.query_string()?.as_deref());

        let mut req = self
            .client
            .request(request.method.to_reqwest(), url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = self.config.api_key() {
            req = req.bearer_auth(token);
        }
        if let Some(body) = request.body.as_ref() {
            req = req.json(body);
        }

        self.logger.debug(
            "request",
            Some(&serde_json::json!({
                "method": request.method.as_str(),
                "path": request.path,
                "query": request.query.len(),
            })),
        );

        let started = Instant::now();
        let response = req.send().await.map_err(|err| {
            let mapped = map_reqwest_error(err, self.config.timeout_ms, &self.secrets);
            self.logger.warn(
                "request failed",
                Some(&serde_json::json!({
                    "method": request.method.as_str(),
                    "path": request.path,
                    "kind": mapped.kind.as_str(),
                })),
            );
            mapped
        })?;
        let status = response.status();
        let capture = read_response_body(
            response,
            self.config.max_body_bytes,
            self.config.timeout_ms,
            &self.secrets,
        )
        .await?;
        let body = decode_body(&capture);

        let out = ApiResponse {
            method: request.method,
            url: url.to_string(),
            status: status.as_u16(),
            duration_ms: started.elapsed().as_millis(),
            body,
            body_truncated: capture.truncated,
        };

        self.logger.debug(
            "response",
            Some(&serde_json::json!({
                "method": request.method.as_str(),
                "path": request.path,
                "status": out.status,
                "duration_ms": out.duration_ms,
                "body_format": out.body.format(),
            })),
        );

        if !status.is_success() {
            self.logger.warn(
                "non-success status",
                Some(&serde_json::json!({
                    "method": request.method.as_str(),
                    "path": request.path,
                    "status": out.status,
                })),
            );
            return Err(ToolError::http_status(
                out.status,
                format!(
                    "{} {} returned {} {}",
                    request.method.as_str(),
                    request.path,
                    out.status,
                    status.canonical_reason().unwrap_or("")
                )
                .trim_end()
                .to_string(),
            )
            .with_details(serde_json::json!({
                "url": out.url,
                "body": out.body.preview(&self.secrets),
                "body_truncated": out.body_truncated,
            })));
        }

        if self.config.strict_json && matches!(out.body, ResponseBody::Text(_)) {
            return Err(ToolError::decode(format!(
                "{} {} returned a body that is not valid JSON",
                request.method.as_str(),
                request.path
            ))
            .with_hint("Unset API_STRICT_JSON to receive non-JSON bodies as raw text")
            .with_details(serde_json::json!({
                "status": out.status,
                "body": out.body.preview(&self.secrets),
                "body_truncated": out.body_truncated,
            })));
        }

        Ok(out)
    }
}

async fn read_response_body(
    response: reqwest::Response,
    max_bytes: usize,
    timeout_ms: u64,
    secrets: &[String],
) -> Result<BodyCapture, ToolError> {
    let mut buffer = Vec::new();
    let mut truncated = false;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|err| map_reqwest_error(err, timeout_ms, secrets))?;
        let remaining = max_bytes.saturating_sub(buffer.len());
        if chunk.len() > remaining {
            buffer.extend_from_slice(&chunk[..remaining]);
            truncated = true;
            break;
        }
        buffer.extend_from_slice(&chunk);
    }
    Ok(BodyCapture { buffer, truncated })
}

/// JSON when the whole body parses, otherwise the text as received. A
/// truncated body is never parsed.
fn decode_body(capture: &BodyCapture) -> ResponseBody {
    if capture.buffer.iter().all(|b| b.is_ascii_whitespace()) {
        return ResponseBody::Empty;
    }
    if !capture.truncated {
        if let Ok(value) = serde_json::from_slice::<Value>(&capture.buffer) {
            return ResponseBody::Json(value);
        }
    }
    ResponseBody::Text(String::from_utf8_lossy(&capture.buffer).into_owned())
}

pub(crate) fn map_reqwest_error(
    err: reqwest::Error,
    timeout_ms: u64,
    secrets: &[String],
) -> ToolError {
    if err.is_timeout() {
        return ToolError::timeout(format!("HTTP request timed out after {} ms", timeout_ms))
            .with_hint("Raise API_TIMEOUT_MS if the backend is slow");
    }
    let message = redact_text(&err.to_string(), usize::MAX, Some(secrets));
    if err.is_connect() {
        return ToolError::transport(message)
            .with_hint("Check that API_BASE_URL points at a running backend");
    }
    ToolError::transport(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(bytes: &[u8], truncated: bool) -> BodyCapture {
        BodyCapture {
            buffer: bytes.to_vec(),
            truncated,
        }
    }

    #[test]
    fn decode_body_prefers_json() {
        let body = decode_body(&capture(br#"{"id": 1}"#, false));
        assert_eq!(body, ResponseBody::Json(serde_json::json!({"id": 1})));
        assert_eq!(body.format(), "json");
    }

    #[test]
    fn decode_body_falls_back_to_text() {
        let body = decode_body(&capture(b"<html>oops</html>", false));
        assert_eq!(body.clone().into_value(), Value::String("<html>oops</html>".into()));
        assert_eq!(body.format(), "text");
    }

    #[test]
    fn decode_body_never_parses_truncated_input() {
        let body = decode_body(&capture(br#"{"id": 1}"#, true));
        assert!(matches!(body, ResponseBody::Text(_)));
    }

    #[test]
    fn text_preview_masks_configured_secrets() {
        let secrets = vec!["tok-abcdef123".to_string()];
        let body = ResponseBody::Text("credential tok-abcdef123 rejected".to_string());
        assert_eq!(
            body.preview(&secrets),
            Value::String("credential ***REDACTED*** rejected".to_string())
        );
        assert_eq!(
            ResponseBody::Text("plain".to_string()).preview(&[]),
            Value::String("plain".to_string())
        );
    }

    #[test]
    fn decode_body_maps_blank_to_null() {
        assert_eq!(decode_body(&capture(b"", false)).into_value(), Value::Null);
        assert_eq!(decode_body(&capture(b" \n", false)), ResponseBody::Empty);
    }
}
