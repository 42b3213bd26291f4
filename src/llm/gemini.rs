//! Gemini `generateContent` API client.
//!
//! Thin HTTP wrapper for `models/{model}:generateContent` with a JSON
//! response schema. Pure parsing in `parse_response` for testability.

use std::time::Duration;

use super::config::LlmConfig;
use super::types::{LlmError, TextModel, TextResponse};

const RESPONSE_MIME_TYPE: &str = "application/json";

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] when the HTTP client cannot be
    /// constructed.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key: config.api_key, model: config.model, base_url: config.base_url })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl TextModel for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
        temperature: f32,
    ) -> Result<TextResponse, LlmError> {
        let body = ApiRequest {
            contents: vec![Content { parts: vec![RequestPart { text: prompt }] }],
            generation_config: GenerationConfig {
                response_mime_type: RESPONSE_MIME_TYPE,
                response_schema: schema,
                temperature,
            },
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text, &self.model)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig<'a>,
}

#[derive(serde::Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(serde::Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(serde::Serialize)]
struct GenerationConfig<'a> {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'a str,
    #[serde(rename = "responseSchema")]
    response_schema: &'a serde_json::Value,
    temperature: f32,
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "modelVersion")]
    model_version: Option<String>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(serde::Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Default, serde::Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u64,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u64,
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract the first candidate's text from a `generateContent` response.
/// `modelVersion` is optional on the wire; `requested_model` fills the gap.
fn parse_response(json: &str, requested_model: &str) -> Result<TextResponse, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let Some(candidate) = api.candidates.into_iter().next() else {
        return Err(LlmError::ApiParse("response contains no candidates".into()));
    };

    let text: String = candidate
        .content
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();
    if text.is_empty() {
        return Err(LlmError::ApiParse("candidate contains no text parts".into()));
    }

    let usage = api.usage_metadata.unwrap_or_default();
    Ok(TextResponse {
        text,
        model: api.model_version.unwrap_or_else(|| requested_model.to_string()),
        finish_reason: candidate.finish_reason.unwrap_or_default(),
        input_tokens: usage.prompt_token_count,
        output_tokens: usage.candidates_token_count,
    })
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
