use clap::Parser;
use schema_api_mcp::config::{ApiConfig, CliArgs};
use schema_api_mcp::errors::ToolError;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    let result = match ApiConfig::from_args(&args) {
        Ok(config) => schema_api_mcp::mcp::server::run_stdio(config).await,
        Err(err) => Err(ToolError::from(err)),
    };
    if let Err(err) = result {
        match &err.hint {
            Some(hint) => eprintln!("schema-api-mcp: {} ({})", err, hint),
            None => eprintln!("schema-api-mcp: {}", err),
        }
        std::process::exit(1);
    }
}
