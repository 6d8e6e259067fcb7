use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolErrorKind {
    InvalidParams,
    Config,
    ClientError,
    ServerError,
    UnexpectedStatus,
    Transport,
    Timeout,
    Decode,
    Internal,
}

impl ToolErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToolErrorKind::InvalidParams => "invalid_params",
            ToolErrorKind::Config => "config",
            ToolErrorKind::ClientError => "client_error",
            ToolErrorKind::ServerError => "server_error",
            ToolErrorKind::UnexpectedStatus => "unexpected_status",
            ToolErrorKind::Transport => "transport",
            ToolErrorKind::Timeout => "timeout",
            ToolErrorKind::Decode => "decode",
            ToolErrorKind::Internal => "internal",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Informational only. Nothing in this crate retries.
    pub retryable: bool,
}

impl ToolError {
    pub fn new(kind: ToolErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            status: None,
            hint: None,
            details: None,
            retryable: matches!(
                kind,
                ToolErrorKind::Timeout | ToolErrorKind::Transport | ToolErrorKind::ServerError
            ),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::InvalidParams, "INVALID_PARAMS", message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Config, "CONFIG", message)
    }

    /// Non-2xx response. 4xx and 5xx land in different kinds so callers can tell
    /// their own mistakes from backend failures; 1xx and unfollowed 3xx get
    /// their own kind.
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        let mut err = match status {
            400..=499 => Self::new(ToolErrorKind::ClientError, "HTTP_CLIENT_ERROR", message),
            500..=599 => Self::new(ToolErrorKind::ServerError, "HTTP_SERVER_ERROR", message),
            _ => Self::new(
                ToolErrorKind::UnexpectedStatus,
                "HTTP_UNEXPECTED_STATUS",
                message,
            ),
        };
        err.status = Some(status);
        err
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Transport, "TRANSPORT", message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Timeout, "TIMEOUT", message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Decode, "DECODE", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Internal, "INTERNAL", message)
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ToolError {}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        ToolError::internal(err.to_string())
    }
}
