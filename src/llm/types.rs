//! LLM types — provider-neutral response type and errors.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the LLM provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The LLM provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The LLM provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl LlmError {
    /// `true` for transient failures worth retrying: transport errors,
    /// rate limiting, and provider 5xx responses.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::ApiRequest(_) | Self::ApiResponse { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Response from a structured-output generation call.
#[derive(Debug, Clone)]
pub struct TextResponse {
    /// Concatenated text of the model's reply. With a JSON response schema
    /// in effect this is a JSON document.
    pub text: String,
    pub model: String,
    pub finish_reason: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

// =============================================================================
// TEXT MODEL TRAIT
// =============================================================================

/// Provider-neutral async trait for structured text generation. Enables
/// mocking in tests.
#[async_trait::async_trait]
pub trait TextModel: Send + Sync {
    /// Send a prompt and a JSON response schema to the model.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails or the response is
    /// malformed.
    async fn generate(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
        temperature: f32,
    ) -> Result<TextResponse, LlmError>;
}
