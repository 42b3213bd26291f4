//! SVG rendering of a laid-out diagram.
//!
//! Draws edges first so node boxes overdraw the connector ends, then one
//! rounded rectangle with a centered, word-wrapped label per positioned node.
//! Edges with an unpositioned endpoint (dangling or dropped by layering) are
//! not drawn.

use std::fmt::Write;

use super::graph::DiagramData;
use super::layout::{Layout, NODE_HEIGHT, NODE_WIDTH};

// Dark palette, matching the story output surface of the web UI.
const EDGE_STROKE: &str = "#4b5563";
const EDGE_LABEL_FILL: &str = "#9ca3af";
const ARROW_FILL: &str = "#60a5fa";
const NODE_FILL: &str = "#1f2937";
const NODE_STROKE: &str = "#3b82f6";
const LABEL_FILL: &str = "#e5e7eb";
const FONT_FAMILY: &str = "sans-serif";
const LABEL_FONT_SIZE: f64 = 14.0;
const EDGE_LABEL_FONT_SIZE: f64 = 12.0;
const LABEL_LINE_HEIGHT: f64 = 16.0;
/// Approximate glyph width at the label font size, for word wrapping.
const APPROX_CHAR_WIDTH: f64 = 7.5;
/// Horizontal text padding inside a node box.
const LABEL_INSET: f64 = 8.0;
const MAX_LABEL_LINES: usize = 3;

/// Render a laid-out diagram as a standalone SVG document.
///
/// Returns `None` when the layout positioned nothing (empty or fully cyclic
/// input) — callers skip rendering in that case.
#[must_use]
pub fn render_svg(data: &DiagramData, layout: &Layout) -> Option<String> {
    if layout.positions.is_empty() {
        return None;
    }

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{FONT_FAMILY}">"#,
        w = layout.width,
        h = layout.height,
    );
    let _ = write!(
        svg,
        r##"<defs><marker id="arrowhead" markerWidth="10" markerHeight="7" refX="9" refY="3.5" orient="auto"><polygon points="0 0, 10 3.5, 0 7" fill="{ARROW_FILL}"/></marker></defs>"##,
    );

    for edge in &data.edges {
        let (Some(from), Some(to)) = (layout.position(&edge.from), layout.position(&edge.to)) else {
            continue;
        };
        // Bottom-center of the source box to top-center of the target box.
        let x1 = from.x + NODE_WIDTH / 2.0;
        let y1 = from.y + NODE_HEIGHT;
        let x2 = to.x + NODE_WIDTH / 2.0;
        let y2 = to.y;
        let _ = write!(
            svg,
            r##"<path d="M{x1},{y1} L{x2},{y2}" stroke="{EDGE_STROKE}" stroke-width="2" fill="none" marker-end="url(#arrowhead)"/>"##,
        );
        if let Some(label) = &edge.label {
            let mid_x = f64::midpoint(x1, x2);
            let mid_y = f64::midpoint(y1, y2);
            let _ = write!(
                svg,
                r#"<text x="{mid_x}" y="{mid_y}" dy="-5" fill="{EDGE_LABEL_FILL}" font-size="{EDGE_LABEL_FONT_SIZE}" text-anchor="middle">{}</text>"#,
                escape_xml(label),
            );
        }
    }

    for node in &data.nodes {
        let Some(pos) = layout.position(&node.id) else {
            continue;
        };
        let _ = write!(
            svg,
            r#"<g transform="translate({x}, {y})"><rect width="{NODE_WIDTH}" height="{NODE_HEIGHT}" rx="8" fill="{NODE_FILL}" stroke="{NODE_STROKE}" stroke-width="2"/>"#,
            x = pos.x,
            y = pos.y,
        );
        write_node_label(&mut svg, &node.label);
        svg.push_str("</g>");
    }

    svg.push_str("</svg>");
    Some(svg)
}

/// Write the node label centered in the box, one `<text>` element per
/// wrapped line.
fn write_node_label(svg: &mut String, label: &str) {
    if label.trim().is_empty() {
        return;
    }
    let lines = wrap_label(label);
    let center_x = NODE_WIDTH / 2.0;
    #[allow(clippy::cast_precision_loss)]
    let block_top = (NODE_HEIGHT - lines.len() as f64 * LABEL_LINE_HEIGHT) / 2.0;
    for (index, line) in lines.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let y = block_top + (index as f64 + 0.5) * LABEL_LINE_HEIGHT;
        let _ = write!(
            svg,
            r#"<text x="{center_x}" y="{y}" fill="{LABEL_FILL}" font-size="{LABEL_FONT_SIZE}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            escape_xml(line),
        );
    }
}

/// Split a label on whitespace into at most [`MAX_LABEL_LINES`] lines fitting
/// the node width. A word longer than a line stands alone and overflows; when
/// lines run out, the last line gets an ellipsis.
fn wrap_label(label: &str) -> Vec<String> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let max_chars = ((NODE_WIDTH - 2.0 * LABEL_INSET) / APPROX_CHAR_WIDTH) as usize;

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in label.split_whitespace() {
        if current.is_empty() || current.chars().count() + 1 + word.chars().count() <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else if lines.len() + 1 < MAX_LABEL_LINES {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current.push('…');
            break;
        }
    }
    lines.push(current);
    lines
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
