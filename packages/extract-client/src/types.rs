use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body sent to the extraction endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractRequest {
    pub url: String,
    pub prompt: String,
}

/// Body returned by the extraction endpoint: the JSON schema the backend
/// derived from the prompt, and the data it extracted with that schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub schema_used: Value,
    pub data: Value,
}

impl ExtractResponse {
    /// Pretty-printed schema for display.
    pub fn schema_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.schema_used).unwrap_or_default()
    }

    /// Extracted data for display. String payloads render verbatim,
    /// everything else as pretty-printed JSON.
    pub fn data_pretty(&self) -> String {
        match &self.data {
            Value::String(text) => text.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_decodes_schema_and_data() {
        let body = r#"{"schema_used": {"type":"object"}, "data": {"name":"Acme"}}"#;
        let resp: ExtractResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.schema_used, json!({"type": "object"}));
        assert_eq!(resp.data, json!({"name": "Acme"}));
    }

    #[test]
    fn test_string_data_renders_verbatim() {
        let resp = ExtractResponse {
            schema_used: json!({}),
            data: json!("raw text"),
        };
        assert_eq!(resp.data_pretty(), "raw text");
    }

    #[test]
    fn test_structured_data_pretty_prints() {
        let resp = ExtractResponse {
            schema_used: json!({"type": "object"}),
            data: json!([{"name": "Acme"}]),
        };
        assert_eq!(resp.data_pretty(), "[\n  {\n    \"name\": \"Acme\"\n  }\n]");
        assert!(resp.schema_pretty().contains("\"type\": \"object\""));
    }

    #[test]
    fn test_request_serializes_with_wire_field_names() {
        let req = ExtractRequest {
            url: "https://example.com".into(),
            prompt: "get all product names".into(),
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            json!({"url": "https://example.com", "prompt": "get all product names"})
        );
    }
}
