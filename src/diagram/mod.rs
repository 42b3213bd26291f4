//! Diagram pipeline: graph data → layered layout → SVG.
//!
//! DESIGN
//! ======
//! The pipeline is three pure stages. `graph` holds the node/edge data as it
//! arrives from the model response, `layout` assigns pixel positions with a
//! breadth-first layering pass, and `svg` serializes the result. Layout never
//! fails: nodes it cannot place (members of cycles, or nodes only reachable
//! through one) are omitted from the result, and rendering skips anything
//! without a position.

pub mod graph;
pub mod layout;
pub mod svg;

pub use graph::{DiagramData, DiagramEdge, DiagramNode};
pub use layout::{Layout, layout};
pub use svg::render_svg;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
