//! Layout engine: assigns each diagram node a deterministic canvas position.
//!
//! DESIGN
//! ======
//! Kahn-style topological layering over an index-addressed node table.
//! Level 0 holds every node with no incoming edge; each later level holds
//! the nodes released when the previous level's edges were consumed. Levels
//! are centered horizontally as a group and stacked vertically. Nodes on a
//! cycle, or downstream of one, never reach in-degree zero and receive no
//! position; the renderer skips them.

use std::collections::{HashMap, VecDeque};

use tracing::warn;

use super::graph::DiagramData;

// Layout constants (in pixels).
pub const NODE_WIDTH: f64 = 150.0;
pub const NODE_HEIGHT: f64 = 60.0;
pub const V_SPACING: f64 = 70.0;
pub const H_SPACING: f64 = 50.0;
pub const PADDING: f64 = 20.0;

/// Top-left corner of a node's box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Positions for every layered node plus the canvas size containing them.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Node id → top-left corner. Nodes dropped by layering are absent.
    pub positions: HashMap<String, Point>,
    pub width: f64,
    pub height: f64,
}

impl Layout {
    fn empty() -> Self {
        Self { positions: HashMap::new(), width: 0.0, height: 0.0 }
    }

    /// Position of a node's box, if the node was layered.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<Point> {
        self.positions.get(id).copied()
    }
}

/// Compute the layered layout for a diagram.
///
/// Pure and deterministic: the same nodes and edges in the same order always
/// yield bit-identical positions. Never fails — malformed input degrades by
/// omission. Edges naming an unknown node id are excluded from in-degree and
/// adjacency entirely; nodes that never reach in-degree zero (cycles and
/// their dependents) are left out of the result.
#[must_use]
pub fn layout(data: &DiagramData) -> Layout {
    if data.nodes.is_empty() {
        return Layout::empty();
    }

    let index_of: HashMap<&str, usize> = data
        .nodes
        .iter()
        .enumerate()
        .map(|(index, node)| (node.id.as_str(), index))
        .collect();

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); data.nodes.len()];
    let mut in_degree: Vec<usize> = vec![0; data.nodes.len()];
    for edge in &data.edges {
        let (Some(&from), Some(&to)) = (index_of.get(edge.from.as_str()), index_of.get(edge.to.as_str()))
        else {
            continue;
        };
        adjacency[from].push(to);
        in_degree[to] += 1;
    }

    // Breadth-first by level: the queue's entire content at each step is one
    // level, in the order nodes entered the queue.
    let mut queue: VecDeque<usize> = (0..data.nodes.len()).filter(|&i| in_degree[i] == 0).collect();
    let mut levels: Vec<Vec<usize>> = Vec::new();
    while !queue.is_empty() {
        let size = queue.len();
        let mut level = Vec::with_capacity(size);
        for _ in 0..size {
            let Some(node) = queue.pop_front() else { break };
            level.push(node);
            for &target in &adjacency[node] {
                in_degree[target] -= 1;
                if in_degree[target] == 0 {
                    queue.push_back(target);
                }
            }
        }
        levels.push(level);
    }

    let placed: usize = levels.iter().map(Vec::len).sum();
    if placed < data.nodes.len() {
        warn!(dropped = data.nodes.len() - placed, "layout: cyclic nodes dropped");
    }
    if placed == 0 {
        return Layout::empty();
    }

    let max_per_level = levels.iter().map(Vec::len).max().unwrap_or(0);
    #[allow(clippy::cast_precision_loss)]
    let width = max_per_level as f64 * (NODE_WIDTH + H_SPACING) - H_SPACING + 2.0 * PADDING;
    #[allow(clippy::cast_precision_loss)]
    let height = levels.len() as f64 * (NODE_HEIGHT + V_SPACING) - V_SPACING + 2.0 * PADDING;

    let mut positions = HashMap::with_capacity(placed);
    for (level_index, level) in levels.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let y = PADDING + level_index as f64 * (NODE_HEIGHT + V_SPACING);
        #[allow(clippy::cast_precision_loss)]
        let level_width = level.len() as f64 * (NODE_WIDTH + H_SPACING) - H_SPACING;
        let start_x = (width - level_width) / 2.0;
        for (slot, &node) in level.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let x = start_x + slot as f64 * (NODE_WIDTH + H_SPACING);
            positions.insert(data.nodes[node].id.clone(), Point { x, y });
        }
    }

    Layout { positions, width, height }
}
