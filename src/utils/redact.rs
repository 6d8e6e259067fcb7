use crate::utils::text::truncate_utf8_prefix;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;

const DEFAULT_REDACTION: &str = "[REDACTED]";
const INLINE_REDACTION: &str = "***REDACTED***";

static SENSITIVE_KEYS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "password",
        "secret",
        "token",
        "api_key",
        "access_token",
        "refresh_token",
        "authorization",
    ]
    .into_iter()
    .collect()
});

static INLINE_REDACTION_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"\b(Bearer)\s+([A-Za-z0-9._~+/=-]{6,})").expect("inline redaction regex"),
            "$1 ***REDACTED***",
        ),
        (
            Regex::new(r"\beyJ[a-zA-Z0-9_-]{10,}\.[a-zA-Z0-9_-]{10,}\.[a-zA-Z0-9_-]{10,}\b")
                .expect("inline redaction regex"),
            INLINE_REDACTION,
        ),
        (
            Regex::new(r#"\b(password|token|api[_-]?key|secret|access[_-]?token)\b("?\s*[:=]\s*"?)([^\s"',}]+)"#)
                .expect("inline redaction regex"),
            "$1$2***REDACTED***",
        ),
    ]
});

pub fn is_sensitive_key(key: &str) -> bool {
    let normalized = key.trim().to_lowercase();
    if normalized.is_empty() {
        return false;
    }
    SENSITIVE_KEYS.contains(normalized.as_str())
        || normalized.contains("secret")
        || normalized.contains("token")
}

/// Masks credentials embedded in free text and caps the result at `max_string`
/// bytes (an ellipsis marks the cut).
pub fn redact_text(value: &str, max_string: usize, extra_secrets: Option<&[String]>) -> String {
    let mut out = value.to_string();
    for (re, replacement) in INLINE_REDACTION_PATTERNS.iter() {
        if re.is_match(&out) {
            out = re.replace_all(&out, *replacement).to_string();
        }
    }
    if let Some(values) = extra_secrets {
        for raw in values {
            let needle = raw.trim();
            if needle.len() < 6 {
                continue;
            }
            out = out.replace(needle, INLINE_REDACTION);
        }
    }
    if max_string == usize::MAX || out.len() <= max_string {
        return out;
    }
    format!("{}...", truncate_utf8_prefix(&out, max_string))
}

/// Copy of `value` with sensitive keys masked. Used before call arguments are logged.
pub fn redact_object(value: &Value, max_string: usize) -> Value {
    match value {
        Value::String(text) => Value::String(redact_text(text, max_string, None)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| redact_object(item, max_string))
                .collect(),
        ),
        Value::Object(map) => {
            let mut out = serde_json::Map::new();
            for (key, entry) in map.iter() {
                if is_sensitive_key(key) {
                    out.insert(key.clone(), Value::String(DEFAULT_REDACTION.to_string()));
                } else {
                    out.insert(key.clone(), redact_object(entry, max_string));
                }
            }
            Value::Object(out)
        }
        _ => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_text_masks_bearer_tokens() {
        let out = redact_text("Authorization: Bearer abcdef123456", usize::MAX, None);
        assert_eq!(out, "Authorization: Bearer ***REDACTED***");
    }

    #[test]
    fn redact_text_masks_configured_secret_and_truncates() {
        let secrets = vec!["s3cr3t-value".to_string()];
        let out = redact_text("key is s3cr3t-value here", usize::MAX, Some(&secrets));
        assert_eq!(out, "key is ***REDACTED*** here");

        let long = "x".repeat(20);
        assert_eq!(redact_text(&long, 5, None), "xxxxx...");
    }

    #[test]
    fn redact_object_masks_sensitive_keys_only() {
        let input = serde_json::json!({"name": "Orders", "api_token": "abc", "nested": {"password": "p"}});
        let out = redact_object(&input, usize::MAX);
        assert_eq!(out["name"], "Orders");
        assert_eq!(out["api_token"], DEFAULT_REDACTION);
        assert_eq!(out["nested"]["password"], DEFAULT_REDACTION);
    }
}
