use crate::errors::ToolError;
use crate::registry::{build_request, EndpointDef};
use crate::services::backend::BackendClient;
use crate::services::tool_executor::{ToolHandler, ToolOutput};
use serde_json::Value;
use std::sync::Arc;

/// Tool handler for a single registry endpoint: arguments in, one backend
/// request out, decoded body back.
#[derive(Clone)]
pub struct EndpointHandler {
    endpoint: &'static EndpointDef,
    backend: Arc<BackendClient>,
}

impl EndpointHandler {
    pub fn new(endpoint: &'static EndpointDef, backend: Arc<BackendClient>) -> Self {
        Self { endpoint, backend }
    }

    pub async fn call(&self, args: &Value) -> Result<ToolOutput, ToolError> {
        let request = build_request(self.endpoint, args)?;
        let response = self.backend.send(&request).await?;
        let meta = response.meta();
        Ok(ToolOutput::new(response.body.into_value()).with_meta(meta))
    }
}

#[async_trait::async_trait]
impl ToolHandler for EndpointHandler {
    async fn handle(&self, args: Value) -> Result<ToolOutput, ToolError> {
        self.call(&args).await
    }
}
