use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crate::errors::ToolError;
use crate::services::logger::{LogLevel, Logger};
use crate::utils::redact::redact_object;
use crate::utils::suggest::suggest;

/// What a handler hands back: the value for the caller plus call metadata
/// that travels next to it (never mixed into it).
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub result: Value,
    pub meta: Value,
}

impl ToolOutput {
    pub fn new(result: Value) -> Self {
        Self {
            result,
            meta: Value::Object(Map::new()),
        }
    }

    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = meta;
        self
    }
}

#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn handle(&self, args: Value) -> Result<ToolOutput, ToolError>;
}

/// Dispatches a tool call by name. Holds no mutable state, so one executor can
/// serve any number of concurrent calls.
#[derive(Clone)]
pub struct ToolExecutor {
    logger: Logger,
    handlers: Arc<HashMap<String, Arc<dyn ToolHandler>>>,
}

impl ToolExecutor {
    pub fn new(logger: Logger, handlers: HashMap<String, Arc<dyn ToolHandler>>) -> Self {
        Self {
            logger: logger.child("executor"),
            handlers: Arc::new(handlers),
        }
    }

    pub fn has_handler(&self, tool: &str) -> bool {
        self.handlers.contains_key(tool)
    }

    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }

    fn unknown_tool(&self, tool: &str) -> ToolError {
        let candidates = self.tool_names();
        let suggestions = suggest(tool, &candidates, 5);
        let hint = if suggestions.is_empty() {
            "Call tools/list to see available tools".to_string()
        } else {
            format!("Did you mean: {}?", suggestions.join(", "))
        };
        ToolError::invalid_params(format!("Unknown tool: {}", tool))
            .with_hint(hint)
            .with_details(serde_json::json!({ "did_you_mean": suggestions }))
    }

    /// Runs one tool call. The returned meta always carries `tool`, `trace_id`
    /// and `duration_ms`, merged over whatever the handler reported.
    pub async fn execute(&self, tool: &str, args: Value) -> Result<ToolOutput, ToolError> {
        let Some(handler) = self.handlers.get(tool) else {
            return Err(self.unknown_tool(tool));
        };
        let trace_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();

        if self.logger.enabled(LogLevel::Debug) {
            self.logger.debug(
                tool,
                Some(&serde_json::json!({
                    "trace_id": trace_id,
                    "args": redact_object(&args, 256),
                })),
            );
        }

        let outcome = handler.handle(args).await;
        let duration_ms = started.elapsed().as_millis();

        match outcome {
            Ok(output) => {
                let mut meta = match output.meta {
                    Value::Object(map) => map,
                    Value::Null => Map::new(),
                    other => {
                        let mut map = Map::new();
                        map.insert("handler".to_string(), other);
                        map
                    }
                };
                meta.insert("tool".to_string(), Value::String(tool.to_string()));
                meta.insert("trace_id".to_string(), Value::String(trace_id));
                meta.insert("duration_ms".to_string(), serde_json::json!(duration_ms));
                Ok(ToolOutput {
                    result: output.result,
                    meta: Value::Object(meta),
                })
            }
            Err(err) => {
                self.logger.info(
                    "tool failed",
                    Some(&serde_json::json!({
                        "tool": tool,
                        "trace_id": trace_id,
                        "kind": err.kind.as_str(),
                        "status": err.status,
                        "duration_ms": duration_ms,
                    })),
                );
                Err(err)
            }
        }
    }
}
