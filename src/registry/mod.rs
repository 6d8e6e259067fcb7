//! Static table of backend endpoints exposed as tools.
//!
//! Each [`EndpointDef`] is a complete description of one tool: its name and
//! description for discovery, the HTTP method and path template, and where each
//! call parameter goes in the outgoing request.

mod draft_collection;
mod request;
mod schema;
mod user;
mod workspace;

pub use request::{build_request, PreparedRequest};

use once_cell::sync::Lazy;
use reqwest::Method;
use serde_json::{json, Map, Value};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
        }
    }

    pub fn to_reqwest(self) -> Method {
        match self {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Integer,
    String,
    Object,
}

impl ParamKind {
    fn json_type(self) -> &'static str {
        match self {
            ParamKind::Integer => "integer",
            ParamKind::String => "string",
            ParamKind::Object => "object",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Substituted into `{name}` in the path template.
    Path,
    Query,
    Body,
}

#[derive(Debug, Clone, Copy)]
pub struct ParamDef {
    pub name: &'static str,
    pub kind: ParamKind,
    pub placement: Placement,
    pub required: bool,
    pub description: &'static str,
}

impl ParamDef {
    pub const fn path(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            placement: Placement::Path,
            required: true,
            description,
        }
    }

    pub const fn query(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            placement: Placement::Query,
            required: false,
            description,
        }
    }

    pub const fn body(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            placement: Placement::Body,
            required: false,
            description,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[derive(Debug)]
pub struct EndpointDef {
    pub name: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub params: &'static [ParamDef],
}

impl EndpointDef {
    pub fn param(&self, name: &str) -> Option<&ParamDef> {
        self.params.iter().find(|param| param.name == name)
    }

    pub fn has_body(&self) -> bool {
        self.params
            .iter()
            .any(|param| param.placement == Placement::Body)
    }

    /// JSON Schema advertised in `tools/list` and enforced on `tools/call`.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for param in self.params {
            // Optional params also accept null, which means "leave it out".
            let kind = if param.required {
                json!(param.kind.json_type())
            } else {
                json!([param.kind.json_type(), "null"])
            };
            properties.insert(
                param.name.to_string(),
                json!({
                    "type": kind,
                    "description": param.description,
                }),
            );
            if param.required {
                required.push(Value::String(param.name.to_string()));
            }
        }
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        })
    }
}

static ENDPOINTS: Lazy<Vec<&'static EndpointDef>> = Lazy::new(|| {
    schema::ENDPOINTS
        .iter()
        .chain(draft_collection::ENDPOINTS)
        .chain(user::ENDPOINTS)
        .chain(workspace::ENDPOINTS)
        .collect()
});

static ENDPOINT_MAP: Lazy<HashMap<&'static str, &'static EndpointDef>> = Lazy::new(|| {
    ENDPOINTS
        .iter()
        .map(|endpoint| (endpoint.name, *endpoint))
        .collect()
});

/// All endpoints in registration order.
pub fn endpoints() -> &'static [&'static EndpointDef] {
    &ENDPOINTS
}

pub fn endpoint_by_name(name: &str) -> Option<&'static EndpointDef> {
    ENDPOINT_MAP.get(name).copied()
}
