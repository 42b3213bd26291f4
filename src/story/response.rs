//! Parsing and sanitizing of the model's JSON story payload.
//!
//! The schema nudges the model toward well-formed output but does not
//! guarantee it. Every field is optional on the wire; anything unusable is
//! repaired or dropped here so the rest of the pipeline can trust its input.

use std::collections::HashSet;

use serde::Deserialize;

use crate::diagram::{DiagramData, DiagramEdge, DiagramNode};

use super::StoryResponse;

/// Shown in place of the story when the model returned none.
pub const STORY_FALLBACK: &str = "Не удалось сгенерировать рассказ.";

#[derive(Deserialize)]
struct StoryPayload {
    story: Option<String>,
    diagram: Option<DiagramPayload>,
    practical_examples: Option<String>,
}

#[derive(Deserialize)]
struct DiagramPayload {
    #[serde(default)]
    nodes: Vec<NodePayload>,
    #[serde(default)]
    edges: Vec<EdgePayload>,
}

#[derive(Deserialize)]
struct NodePayload {
    id: Option<String>,
    label: Option<String>,
}

#[derive(Deserialize)]
struct EdgePayload {
    from: Option<String>,
    to: Option<String>,
    label: Option<String>,
}

/// Parse the model's reply into a [`StoryResponse`].
///
/// # Errors
///
/// Fails only when the reply is not a JSON object at all. A parseable object
/// with missing or damaged fields degrades instead: absent story text becomes
/// [`STORY_FALLBACK`], and a diagram with no usable nodes becomes `None`.
pub fn parse(json: &str) -> Result<StoryResponse, serde_json::Error> {
    let payload: StoryPayload = serde_json::from_str(json.trim())?;
    Ok(StoryResponse {
        story: payload
            .story
            .filter(|story| !story.is_empty())
            .unwrap_or_else(|| STORY_FALLBACK.to_string()),
        diagram: payload.diagram.and_then(sanitize_diagram),
        examples: payload.practical_examples.filter(|examples| !examples.is_empty()),
    })
}

/// Drop nodes without an id (first occurrence wins on duplicates) and edges
/// without both endpoints. A diagram left with no nodes is no diagram.
fn sanitize_diagram(payload: DiagramPayload) -> Option<DiagramData> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut nodes = Vec::with_capacity(payload.nodes.len());
    for node in payload.nodes {
        let Some(id) = node.id.filter(|id| !id.is_empty()) else { continue };
        if !seen.insert(id.clone()) {
            continue;
        }
        nodes.push(DiagramNode { id, label: node.label.unwrap_or_default() });
    }
    if nodes.is_empty() {
        return None;
    }

    let edges = payload
        .edges
        .into_iter()
        .filter_map(|edge| {
            let from = edge.from.filter(|from| !from.is_empty())?;
            let to = edge.to.filter(|to| !to.is_empty())?;
            Some(DiagramEdge { from, to, label: edge.label.filter(|label| !label.is_empty()) })
        })
        .collect();

    Some(DiagramData { nodes, edges })
}

#[cfg(test)]
#[path = "response_test.rs"]
mod tests;
