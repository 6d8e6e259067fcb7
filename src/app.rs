use crate::config::ApiConfig;
use crate::errors::ToolError;
use crate::managers::endpoint::EndpointHandler;
use crate::mcp::catalog::tool_catalog;
use crate::registry::endpoints;
use crate::services::backend::BackendClient;
use crate::services::logger::Logger;
use crate::services::tool_executor::{ToolExecutor, ToolHandler};
use std::collections::HashMap;
use std::sync::Arc;

pub struct App {
    pub logger: Logger,
    pub config: Arc<ApiConfig>,
    pub tool_executor: Arc<ToolExecutor>,
}

impl App {
    fn validate_tool_wiring(
        handlers: &HashMap<String, Arc<dyn ToolHandler>>,
    ) -> Result<(), ToolError> {
        let mut missing: Vec<String> = tool_catalog()
            .iter()
            .filter(|tool| !handlers.contains_key(&tool.name))
            .map(|tool| tool.name.clone())
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        missing.sort();
        Err(ToolError::internal("Tool wiring is incomplete")
            .with_hint("Every catalog tool needs a registered handler")
            .with_details(serde_json::json!({ "missing_tools": missing })))
    }

    pub fn initialize(config: ApiConfig) -> Result<Self, ToolError> {
        let logger = Logger::new("schema-api-mcp").with_secrets(config.secrets());
        let config = Arc::new(config);
        let backend = Arc::new(BackendClient::new(logger.clone(), config.clone())?);

        let mut handlers: HashMap<String, Arc<dyn ToolHandler>> = HashMap::new();
        for endpoint in endpoints() {
            handlers.insert(
                endpoint.name.to_string(),
                Arc::new(EndpointHandler::new(*endpoint, backend.clone())),
            );
        }

        Self::validate_tool_wiring(&handlers)?;

        let tool_executor = Arc::new(ToolExecutor::new(logger.clone(), handlers));

        Ok(Self {
            logger,
            config,
            tool_executor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_wires_every_catalog_tool() {
        let config = ApiConfig::new("http://localhost:8000").expect("config");
        let app = App::initialize(config).expect("app");
        for tool in tool_catalog() {
            assert!(app.tool_executor.has_handler(&tool.name), "{}", tool.name);
        }
    }

    #[test]
    fn wiring_check_names_missing_tools() {
        let err = App::validate_tool_wiring(&HashMap::new()).expect_err("nothing wired");
        let details = err.details.expect("details");
        let missing = details["missing_tools"].as_array().expect("array");
        assert_eq!(missing.len(), tool_catalog().len());
    }
}
