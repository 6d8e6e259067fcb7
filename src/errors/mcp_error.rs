use super::tool_error::{ToolError, ToolErrorKind};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    RequestTimeout = -32001,
    ParseError = -32700,
    InvalidRequest = -32600,
    MethodNotFound = -32601,
    InvalidParams = -32602,
    InternalError = -32603,
}

impl ErrorCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct McpError {
    pub code: ErrorCode,
    pub message: String,
}

impl McpError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Renders a tool failure as a JSON-RPC error. The message is a flat
    /// `key: value` listing so agents can read kind and status without parsing.
    pub fn from_tool_error(tool: &str, error: &ToolError) -> Self {
        let mut lines = vec![
            "ApiToolError".to_string(),
            format!("tool: {}", tool),
            format!("kind: {}", error.kind.as_str()),
            format!("code: {}", error.code),
        ];
        if let Some(status) = error.status {
            lines.push(format!("status: {}", status));
        }
        lines.push(format!("retryable: {}", error.retryable));
        lines.push(format!("message: {}", error.message));
        if let Some(hint) = &error.hint {
            lines.push(format!("hint: {}", hint));
        }
        if let Some(details) = &error.details {
            lines.push(format!("details: {}", details));
        }
        let message = lines.join("\n");

        let code = match error.kind {
            ToolErrorKind::InvalidParams => ErrorCode::InvalidParams,
            ToolErrorKind::Timeout => ErrorCode::RequestTimeout,
            ToolErrorKind::ClientError => ErrorCode::InvalidRequest,
            _ => ErrorCode::InternalError,
        };
        McpError::new(code, message)
    }
}

impl fmt::Display for McpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for McpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_error_maps_to_invalid_request_with_status_line() {
        let err = ToolError::http_status(404, "Not Found");
        let mapped = McpError::from_tool_error("get_schema_by_id", &err);
        assert_eq!(mapped.code, ErrorCode::InvalidRequest);
        assert!(mapped.message.contains("tool: get_schema_by_id"));
        assert!(mapped.message.contains("kind: client_error"));
        assert!(mapped.message.contains("status: 404"));
    }

    #[test]
    fn timeout_and_transport_map_to_distinct_codes() {
        let timeout = McpError::from_tool_error("list_schemas", &ToolError::timeout("slow"));
        assert_eq!(timeout.code, ErrorCode::RequestTimeout);
        let transport =
            McpError::from_tool_error("list_schemas", &ToolError::transport("refused"));
        assert_eq!(transport.code, ErrorCode::InternalError);
        assert!(transport.message.contains("kind: transport"));
    }
}
