use super::{EndpointDef, HttpMethod, ParamDef, ParamKind, Placement};
use crate::errors::ToolError;
use serde_json::{Map, Value};

/// Fully resolved outbound request, independent of any HTTP client.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    /// `Some` for every endpoint that declares body params, even when no body
    /// param was supplied (an empty PATCH still sends `{}`).
    pub body: Option<Map<String, Value>>,
}

impl PreparedRequest {
    pub fn query_string(&self) -> Result<Option<String>, ToolError> {
        if self.query.is_empty() {
            return Ok(None);
        }
        serde_urlencoded::to_string(&self.query)
            .map(Some)
            .map_err(|err| ToolError::internal(format!("Failed to encode query: {}", err)))
    }

    pub fn path_and_query(&self) -> Result<String, ToolError> {
        Ok(match self.query_string()? {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        })
    }
}

/// Optional values that are `null`, `""` or `{}` count as not supplied. Integers
/// are always real values, `0` included.
fn supplied<'a>(args: &'a Map<String, Value>, param: &ParamDef) -> Option<&'a Value> {
    let value = args.get(param.name)?;
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() && !param.required => None,
        Value::Object(map) if map.is_empty() && !param.required => None,
        _ => Some(value),
    }
}

fn check_kind(endpoint: &EndpointDef, param: &ParamDef, value: &Value) -> Result<(), ToolError> {
    let ok = match param.kind {
        ParamKind::Integer => value.is_i64() || value.is_u64(),
        ParamKind::String => value.is_string(),
        ParamKind::Object => value.is_object(),
    };
    if ok {
        return Ok(());
    }
    let expected = match param.kind {
        ParamKind::Integer => "an integer",
        ParamKind::String => "a string",
        ParamKind::Object => "a JSON object",
    };
    Err(ToolError::invalid_params(format!(
        "{}: '{}' must be {}",
        endpoint.name, param.name, expected
    )))
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Translates call arguments into a [`PreparedRequest`] for `endpoint`.
///
/// Keys that `endpoint` does not declare are ignored here; the catalog rejects
/// them before a call reaches this point.
pub fn build_request(endpoint: &EndpointDef, args: &Value) -> Result<PreparedRequest, ToolError> {
    let empty = Map::new();
    let args = match args {
        Value::Object(map) => map,
        Value::Null => &empty,
        _ => {
            return Err(ToolError::invalid_params(format!(
                "{}: arguments must be an object",
                endpoint.name
            )))
        }
    };

    let mut path = endpoint.path.to_string();
    let mut query = Vec::new();
    let mut body = endpoint.has_body().then(Map::new);

    for param in endpoint.params {
        let Some(value) = supplied(args, param) else {
            if param.required {
                return Err(ToolError::invalid_params(format!(
                    "{}: missing required parameter '{}'",
                    endpoint.name, param.name
                ))
                .with_details(serde_json::json!({ "parameter": param.name })));
            }
            continue;
        };
        check_kind(endpoint, param, value)?;

        match param.placement {
            Placement::Path => {
                let rendered = render_scalar(value);
                if rendered.is_empty() {
                    return Err(ToolError::invalid_params(format!(
                        "{}: '{}' must not be empty",
                        endpoint.name, param.name
                    )));
                }
                if rendered.contains(['/', '?', '#']) {
                    return Err(ToolError::invalid_params(format!(
                        "{}: '{}' must be a single path segment without '/', '?' or '#'",
                        endpoint.name, param.name
                    ))
                    .with_details(serde_json::json!({
                        "parameter": param.name,
                        "value": rendered,
                    })));
                }
                path = path.replace(&format!("{{{}}}", param.name), &rendered);
            }
            Placement::Query => query.push((param.name.to_string(), render_scalar(value))),
            Placement::Body => {
                if let Some(body) = body.as_mut() {
                    body.insert(param.name.to_string(), value.clone());
                }
            }
        }
    }

    Ok(PreparedRequest {
        method: endpoint.method,
        path,
        query,
        body,
    })
}
