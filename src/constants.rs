pub mod server {
    pub const NAME: &str = "schema-api-mcp";
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PROTOCOL_VERSION: &str = "2025-06-18";
}

pub mod network {
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
    pub const TIMEOUT_API_REQUEST_MS: u64 = 30_000;
    pub const TIMEOUT_CONNECTION_MS: u64 = 5_000;
    pub const USER_AGENT: &str = concat!("schema-api-mcp/", env!("CARGO_PKG_VERSION"));
}

pub mod limits {
    pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;
    pub const ERROR_BODY_PREVIEW_BYTES: usize = 2_048;
    pub const LOG_SUBSTRING_LENGTH: usize = 200;
}

pub mod env {
    pub const BASE_URL: &str = "API_BASE_URL";
    pub const API_KEY: &str = "API_KEY";
    pub const TIMEOUT_MS: &str = "API_TIMEOUT_MS";
    pub const MAX_BODY_BYTES: &str = "API_MAX_BODY_BYTES";
    pub const STRICT_JSON: &str = "API_STRICT_JSON";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

pub mod protocols {
    pub const ALLOWED_HTTP: &[&str] = &["http:", "https:"];
}
