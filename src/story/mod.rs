//! Story generation — request → prompt → model → validated response.
//!
//! DESIGN
//! ======
//! `generate` is the one entry point: it assembles the Russian prompt,
//! calls the model with a JSON response schema, and sanitizes the payload.
//! It takes `&dyn TextModel`, so tests drive it with a mock and assert on
//! the exact prompt that would go over the wire. Logging records lengths,
//! ids and token counts, never story content.

pub mod catalog;
pub mod prompt;
pub mod response;

use tracing::info;

use crate::diagram::DiagramData;
use crate::llm::{LlmError, TextModel};
use catalog::{Genre, StoryLength};

/// Sampling temperature for story generation.
const TEMPERATURE: f32 = 0.7;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    #[error("topic must not be blank")]
    BlankTopic,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("story payload parse failed: {0}")]
    Payload(#[from] serde_json::Error),
}

/// What to generate: the topic plus presentation knobs.
#[derive(Debug, Clone)]
pub struct StoryRequest {
    pub topic: String,
    pub genre: &'static Genre,
    pub length: &'static StoryLength,
    pub include_diagram: bool,
    pub include_examples: bool,
}

/// A generated story with its optional extras.
#[derive(Debug, Clone)]
pub struct StoryResponse {
    /// Paragraphs separated by `\n\n`, no markup.
    pub story: String,
    pub diagram: Option<DiagramData>,
    pub examples: Option<String>,
}

// =============================================================================
// GENERATION
// =============================================================================

/// Generate a story for `request` via `model`.
///
/// # Errors
///
/// Returns [`StoryError::BlankTopic`] before touching the model when the
/// topic is empty or whitespace; [`StoryError::Llm`] on transport or
/// provider failures; [`StoryError::Payload`] when the reply is not JSON.
pub async fn generate(model: &dyn TextModel, request: &StoryRequest) -> Result<StoryResponse, StoryError> {
    if request.topic.trim().is_empty() {
        return Err(StoryError::BlankTopic);
    }

    let prompt = prompt::build_prompt(request);
    let schema = prompt::response_schema();
    info!(
        topic_len = request.topic.len(),
        genre = request.genre.id,
        length = request.length.id,
        diagram = request.include_diagram,
        examples = request.include_examples,
        "story: generating"
    );

    let reply = model.generate(&prompt, &schema, TEMPERATURE).await?;
    info!(
        model = %reply.model,
        finish_reason = %reply.finish_reason,
        input_tokens = reply.input_tokens,
        output_tokens = reply.output_tokens,
        "story: model replied"
    );

    let parsed = response::parse(&reply.text)?;
    info!(
        story_len = parsed.story.len(),
        diagram_nodes = parsed.diagram.as_ref().map_or(0, |diagram| diagram.nodes.len()),
        has_examples = parsed.examples.is_some(),
        "story: complete"
    );
    Ok(parsed)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
