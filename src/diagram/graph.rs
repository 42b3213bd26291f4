//! Data model for AI-produced flow diagrams.

/// A labeled box in the diagram. Identity is `id`; `label` is display text only.
#[derive(Debug, Clone)]
pub struct DiagramNode {
    pub id: String,
    pub label: String,
}

/// A directed connection between two nodes, with an optional label drawn at
/// its midpoint. Endpoints reference node ids; an edge naming an unknown id
/// is carried here but ignored by layout and rendering.
#[derive(Debug, Clone)]
pub struct DiagramEdge {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
}

/// A directed graph as the model emits it: not guaranteed acyclic, not
/// guaranteed connected. Node order is the model's order and determines
/// layout tie-breaking.
#[derive(Debug, Clone)]
pub struct DiagramData {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}
