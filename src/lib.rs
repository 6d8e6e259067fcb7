//! MCP server that exposes the schema, draft Postman collection, user and
//! workspace endpoints of a REST backend as tools.
//!
//! Every tool call turns into exactly one HTTP request; see [`registry`] for
//! the endpoint table and [`mcp::server`] for the stdio JSON-RPC loop.

pub mod app;
pub mod config;
pub mod constants;
pub mod errors;
pub mod managers;
pub mod mcp;
pub mod registry;
pub mod services;
pub mod utils;
