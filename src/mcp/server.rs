use crate::app::App;
use crate::config::ApiConfig;
use crate::constants::server::{NAME as SERVER_NAME, PROTOCOL_VERSION, VERSION as SERVER_VERSION};
use crate::errors::{ErrorCode, McpError, ToolError};
use crate::mcp::catalog::{tool_catalog, validate_tool_args};
use crate::mcp::protocol::{JsonRpcRequest, JsonRpcResponse, ToolCallParams};
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Text block handed to the agent: JSON bodies as compact JSON, raw-text
/// fallbacks as the text itself.
fn render_result_text(result: &Value) -> String {
    match result {
        Value::String(text) => text.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| "null".to_string()),
    }
}

pub struct McpServer {
    app: Arc<App>,
}

impl McpServer {
    pub fn new(config: ApiConfig) -> Result<Self, ToolError> {
        let app = App::initialize(config)?;
        Ok(Self { app: Arc::new(app) })
    }

    fn handle_initialize(&self) -> Value {
        serde_json::json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {"tools": {"listChanged": false}},
            "serverInfo": {"name": SERVER_NAME, "version": SERVER_VERSION},
        })
    }

    fn handle_tools_list(&self) -> Value {
        serde_json::json!({ "tools": tool_catalog() })
    }

    async fn handle_tools_call(&self, params: Value) -> Result<Value, McpError> {
        let params: ToolCallParams = serde_json::from_value(params)
            .map_err(|err| McpError::new(ErrorCode::InvalidParams, err.to_string()))?;
        if params.name.trim().is_empty() {
            return Err(McpError::new(ErrorCode::InvalidParams, "Missing tool name"));
        }
        let name = params.name.as_str();
        let args = match params.arguments {
            None | Some(Value::Null) => Value::Object(Default::default()),
            Some(args) => args,
        };

        validate_tool_args(name, &args)?;

        let output = self
            .app
            .tool_executor
            .execute(name, args)
            .await
            .map_err(|err| McpError::from_tool_error(name, &err))?;

        Ok(serde_json::json!({
            "content": [ { "type": "text", "text": render_result_text(&output.result) } ],
            "isError": false,
            "_meta": output.meta,
        }))
    }

    /// Handles one line of input. `None` means nothing is written back
    /// (notifications and blank lines).
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let parsed: Value = match serde_json::from_str(trimmed) {
            Ok(value) => value,
            Err(_) => {
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    ErrorCode::ParseError.as_i32(),
                    "Parse error",
                ))
            }
        };

        let request: JsonRpcRequest = match serde_json::from_value(parsed) {
            Ok(req) => req,
            Err(_) => {
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    ErrorCode::InvalidRequest.as_i32(),
                    "Invalid request",
                ))
            }
        };

        if request.is_notification() {
            if !request.method.starts_with("notifications/") {
                self.app
                    .logger
                    .debug("ignoring request without id", Some(&Value::String(request.method)));
            }
            return None;
        }
        let id = request.id.clone().unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, self.handle_initialize()),
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => JsonRpcResponse::success(id, self.handle_tools_list()),
            "tools/call" => match self.handle_tools_call(request.params).await {
                Ok(result) => JsonRpcResponse::success(id, result),
                Err(err) => JsonRpcResponse::failure(id, err.code.as_i32(), err.message),
            },
            _ => JsonRpcResponse::failure(
                id,
                ErrorCode::MethodNotFound.as_i32(),
                "Method not found",
            ),
        };
        Some(response)
    }

    /// Newline-delimited JSON-RPC loop until `reader` hits EOF.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<(), ToolError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|err| ToolError::internal(err.to_string()))?
        {
            if let Some(response) = self.handle_line(&line).await {
                let payload = serde_json::to_string(&response)
                    .map_err(|err| ToolError::internal(err.to_string()))?;
                writer.write_all(payload.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }
        Ok(())
    }

    pub async fn run_stdio(&self) -> Result<(), ToolError> {
        self.app.logger.info(
            "listening on stdio",
            Some(&serde_json::json!({
                "base_url": self.app.config.base_url().as_str(),
                "auth": self.app.config.api_key().is_some(),
                "tools": tool_catalog().len(),
            })),
        );
        let reader = BufReader::new(tokio::io::stdin());
        self.serve(reader, tokio::io::stdout()).await
    }
}

pub async fn run_stdio(config: ApiConfig) -> Result<(), ToolError> {
    let server = McpServer::new(config)?;
    server.run_stdio().await
}
