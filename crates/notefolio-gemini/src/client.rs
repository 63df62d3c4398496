//! Async Gemini client and the end-to-end batch generation flow.

use tracing::info;

use notefolio_core::models::block::ContentBlock;

use crate::batch::{batch_prompt, blocks_from_answers, parse_topics, reconcile, split_answers};
use crate::error::GeminiError;
use crate::types::{upstream_error_message, GenerateRequest, GenerateResponse};

/// Default upstream endpoint. The API key travels as a query parameter.
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self::with_endpoint(http, api_key, DEFAULT_ENDPOINT)
    }

    /// Override the upstream endpoint (tests point this at a local server).
    pub fn with_endpoint(
        http: reqwest::Client,
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one `generateContent` request and return the response text.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<String, GeminiError> {
        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| GeminiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GeminiError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(GeminiError::Upstream {
                status: status.as_u16(),
                message: upstream_error_message(&body),
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        parsed
            .text()
            .ok_or_else(|| GeminiError::ResponseParse("no candidates in response".to_string()))
    }

    /// The full batch flow: parse topics, send one prompt carrying all of
    /// them, split the delimiter-separated reply, reconcile by index, and
    /// emit one block per topic.
    ///
    /// Empty input produces no request and no blocks. Any upstream failure
    /// produces no blocks.
    pub async fn generate_batch(&self, input: &str) -> Result<Vec<ContentBlock>, GeminiError> {
        let topics = parse_topics(input);
        if topics.is_empty() {
            return Ok(Vec::new());
        }

        let request = GenerateRequest::from_prompt(batch_prompt(&topics));
        let text = self.generate(&request).await?;

        let answers = split_answers(&text);
        let notes = reconcile(&topics, &answers);

        info!(
            topics = topics.len(),
            answers = answers.len(),
            "batch generation reconciled"
        );

        Ok(blocks_from_answers(&topics, &notes)?)
    }
}
