//! Pure REST client for the ParseBot extraction backend.
//!
//! The backend takes a website URL and a natural-language prompt, derives a
//! JSON schema, and returns the extracted data. This crate only speaks the
//! wire protocol; all crawling and AI work lives behind the endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use extract_client::{ExtractClient, ExtractRequest, RetryPolicy};
//!
//! let client = ExtractClient::new("http://localhost:8000/extract/");
//! let request = ExtractRequest {
//!     url: "https://example.com".into(),
//!     prompt: "get all product names and prices".into(),
//! };
//!
//! let response = RetryPolicy::default()
//!     .run(|| client.extract(&request))
//!     .await?;
//! println!("{}", response.data_pretty());
//! ```

pub mod error;
pub mod retry;
pub mod types;

pub use error::{ExtractError, Result};
pub use retry::RetryPolicy;
pub use types::{ExtractRequest, ExtractResponse};

/// Client for the extraction endpoint.
#[derive(Debug, Clone)]
pub struct ExtractClient {
    client: reqwest::Client,
    base_url: String,
}

impl ExtractClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Submit one extraction request. Exactly one attempt; wrap the call in a
    /// [`RetryPolicy`] for retry behavior.
    pub async fn extract(&self, request: &ExtractRequest) -> Result<ExtractResponse> {
        tracing::debug!(url = %request.url, "Submitting extraction request");

        let resp = self
            .client
            .post(&self.base_url)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ExtractError::Api {
                status: status.as_u16(),
                message: api_error_message(status, &body),
            });
        }

        let response: ExtractResponse = resp.json().await.map_err(ExtractError::Decode)?;
        Ok(response)
    }
}

/// Pull a human-readable message out of a failure body. The backend is a
/// FastAPI service, so errors usually arrive as `{"detail": "..."}`; fall
/// back to the raw body, then to the status line for empty bodies.
fn api_error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_detail_field_is_extracted() {
        let message = api_error_message(
            StatusCode::BAD_REQUEST,
            r#"{"detail": "Failed to scrape website"}"#,
        );
        assert_eq!(message, "Failed to scrape website");
    }

    #[test]
    fn test_non_json_body_passes_through() {
        let message = api_error_message(StatusCode::BAD_GATEWAY, "upstream timed out");
        assert_eq!(message, "upstream timed out");
    }

    #[test]
    fn test_empty_body_falls_back_to_status_text() {
        let message = api_error_message(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(message, "Internal Server Error");
    }

    #[test]
    fn test_json_without_detail_passes_through() {
        let message = api_error_message(StatusCode::BAD_REQUEST, r#"{"error": "nope"}"#);
        assert_eq!(message, r#"{"error": "nope"}"#);
    }
}
