/// AI Client — the single point of entry for all Gemini API calls in the
/// analyzer.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All model interactions MUST go through this module.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all AI calls in the analyzer.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-1.5-pro-latest";
const MAX_RETRIES: u32 = 3;

/// AI service failure: network, auth, quota, or an unusable response body.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Model returned empty content")]
    EmptyContent,
}

/// The generative-AI seam. The ranking and analysis pipelines hold a
/// `&dyn AiClient`, so tests script responses without touching the network.
///
/// The three arguments mirror the upstream content payload: a primary text
/// (job description or combined prompt), auxiliary content (resume text,
/// possibly empty), and the fixed instruction template for the mode.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn generate(
        &self,
        primary_text: &str,
        auxiliary_content: &str,
        instruction_template: &str,
    ) -> Result<String, ServiceError>;
}

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
}

impl GeminiResponse {
    /// Concatenates the text parts of the first candidate, if any.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The production AI client. Wraps the Gemini `generateContent` REST API
/// with retry logic, sending the three content parts in a single request.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a raw call to the Gemini API with the given content parts.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    async fn call(&self, parts: &[&str]) -> Result<GeminiResponse, ServiceError> {
        let request_body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: parts.iter().map(|&text| GeminiPart { text }).collect(),
            }],
        };

        let url = format!(
            "{GEMINI_API_BASE}/{MODEL}:generateContent?key={}",
            self.api_key
        );

        let mut last_error: Option<ServiceError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "AI call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self.client.post(&url).json(&request_body).send().await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(ServiceError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Gemini API returned {}: {}", status, body);
                last_error = Some(ServiceError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                // Try to parse the structured error message
                let message = serde_json::from_str::<GeminiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(ServiceError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let gemini_response: GeminiResponse = response.json().await?;

            if let Some(usage) = &gemini_response.usage_metadata {
                debug!(
                    "AI call succeeded: prompt_tokens={:?}, candidate_tokens={:?}",
                    usage.prompt_token_count, usage.candidates_token_count
                );
            }

            return Ok(gemini_response);
        }

        Err(last_error.unwrap_or(ServiceError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl AiClient for GeminiClient {
    async fn generate(
        &self,
        primary_text: &str,
        auxiliary_content: &str,
        instruction_template: &str,
    ) -> Result<String, ServiceError> {
        let response = self
            .call(&[primary_text, auxiliary_content, instruction_template])
            .await?;

        response.text().ok_or(ServiceError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_json(text: &str) -> String {
        format!(
            r#"{{"candidates": [{{"content": {{"parts": [{{"text": {}}}], "role": "model"}}}}],
                "usageMetadata": {{"promptTokenCount": 10, "candidatesTokenCount": 20}}}}"#,
            serde_json::to_string(text).unwrap()
        )
    }

    #[test]
    fn test_response_text_extracts_first_candidate() {
        let response: GeminiResponse =
            serde_json::from_str(&response_json("ranked output")).unwrap();
        assert_eq!(response.text().as_deref(), Some("ranked output"));
        let usage = response.usage_metadata.unwrap();
        assert_eq!(usage.prompt_token_count, Some(10));
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let json = r#"{"candidates": [{"content": {"parts": [
            {"text": "part one "}, {"text": "part two"}
        ]}}]}"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("part one part two"));
    }

    #[test]
    fn test_response_without_candidates_yields_none() {
        let response: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_error_body_parses_message() {
        let body = r#"{"error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}}"#;
        let parsed: GeminiError = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "API key not valid");
    }
}
