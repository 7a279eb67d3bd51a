//! Deterministic layered layout for rule flow graphs.
//!
//! The same input always produces the same placement: ordering decisions are
//! driven by branch ranks and array order, never by hash-map iteration or
//! internal heuristics. The pipeline filters ghost edges, estimates node
//! sizes, layers the graph along the flow direction, orders nodes within
//! each layer by weighted barycenter sweeps, re-stacks sibling subtrees in
//! edge-array order and finally converts center anchors to the renderer's
//! top-left convention while restyling edges by branch rank.

mod engine;
mod size;
mod stack;

pub use size::{BASE_NODE_HEIGHT, BASE_NODE_WIDTH, estimated_size};

use crate::graph::{Edge, Node, Position};
use crate::traverse;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Primary flow direction of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Ranks advance left to right; siblings stack vertically.
    #[default]
    #[serde(rename = "LR")]
    LeftRight,
    /// Ranks advance top to bottom; siblings stack horizontally.
    #[serde(rename = "TB")]
    TopBottom,
}

impl Direction {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::LeftRight)
    }

    /// Gap between consecutive ranks along the primary axis.
    pub(crate) fn rank_separation(&self) -> f64 {
        if self.is_horizontal() { 150.0 } else { 120.0 }
    }

    /// Gap between neighboring nodes across the primary axis.
    pub(crate) fn node_separation(&self) -> f64 {
        if self.is_horizontal() { 60.0 } else { 100.0 }
    }
}

/// Lays out the graph and restyles its edges.
///
/// Returns nodes and edges in their input order: only positions and edge
/// styling change. Ghost edges are ignored for placement but kept in the
/// returned list. An empty node set yields an empty placement without error.
pub fn layout(nodes: &[Node], edges: &[Edge], direction: Direction) -> (Vec<Node>, Vec<Edge>) {
    let live = traverse::live_edges(nodes, edges);

    let mut sizes: AHashMap<&str, (f64, f64)> = AHashMap::with_capacity(nodes.len());
    for node in nodes {
        sizes.insert(node.id.as_str(), size::estimated_size(node));
    }

    let mut centers = engine::place(nodes, &live, &sizes, direction);
    stack::restack_siblings(nodes, edges, &sizes, direction, &mut centers);

    let placed_nodes = nodes
        .iter()
        .map(|node| {
            let mut node = node.clone();
            if let (Some(&(cx, cy)), Some(&(width, height))) = (
                centers.get(node.id.as_str()),
                sizes.get(node.id.as_str()),
            ) {
                // Shift the center-anchored placement to the top-left anchor
                // used by the rendering layer.
                node.position = Position::new(cx - width / 2.0, cy - height / 2.0);
            }
            node
        })
        .collect();

    let styled_edges = edges
        .iter()
        .map(|edge| {
            let mut edge = edge.clone();
            edge.restyle_by_rank();
            edge
        })
        .collect();

    (placed_nodes, styled_edges)
}
