//! Shared request plumbing for OpenAI-compatible endpoints

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use docrag_core::{Error, Result};

pub(crate) fn build_client(api_key: &str, timeout: Duration) -> Result<Client> {
    if api_key.trim().is_empty() {
        return Err(Error::InvalidArgument(
            "An API key must be supplied (set DOCRAG_API_KEY or EURI_API_KEY)".to_string(),
        ));
    }

    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::Network(format!("Failed to build HTTP client: {}", e)))
}

/// POST `body` and return the parsed JSON object of a successful response
pub(crate) async fn post_json<T: Serialize + ?Sized>(
    client: &Client,
    endpoint: &str,
    api_key: &str,
    body: &T,
) -> Result<serde_json::Map<String, Value>> {
    let response = client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .bearer_auth(api_key.trim())
        .json(body)
        .send()
        .await
        .map_err(|e| Error::Network(format!("Failed to reach {}: {}", endpoint, e)))?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<body unavailable>".to_string());
        return Err(Error::RemoteService {
            status: status.as_u16(),
            body,
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| Error::Network(format!("Failed to read response from {}: {}", endpoint, e)))?;

    parse_object(&text)
}

pub(crate) fn parse_object(text: &str) -> Result<serde_json::Map<String, Value>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| Error::MalformedResponse(format!("Failed to parse JSON response: {}", e)))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::MalformedResponse(format!(
            "Invalid JSON response object, got: {}",
            json_type(&other)
        ))),
    }
}

/// First element of a non-empty array field, or a malformed-response error
pub(crate) fn first_entry<'a>(
    object: &'a serde_json::Map<String, Value>,
    field: &str,
) -> Result<&'a Value> {
    object
        .get(field)
        .and_then(Value::as_array)
        .and_then(|entries| entries.first())
        .ok_or_else(|| {
            Error::MalformedResponse(format!("Response does not contain any {}", field))
        })
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_rejects_blank_key() {
        let result = build_client("   ", Duration::from_secs(1));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_parse_object_rejects_non_object() {
        let err = parse_object("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(ref msg) if msg.contains("array")));

        let err = parse_object("not json").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_first_entry_requires_non_empty_array() {
        let object = parse_object(r#"{"data": []}"#).unwrap();
        assert!(matches!(first_entry(&object, "data"), Err(Error::MalformedResponse(_))));

        let object = parse_object(r#"{"data": "nope"}"#).unwrap();
        assert!(matches!(first_entry(&object, "data"), Err(Error::MalformedResponse(_))));

        let object = parse_object(r#"{"data": [{"x": 1}]}"#).unwrap();
        assert!(first_entry(&object, "data").is_ok());
    }
}
