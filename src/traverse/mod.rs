//! Pure graph traversal: ghost-edge filtering, cycle detection and
//! descendant extraction. Nothing in this module mutates the graph.

mod cycle;
mod descend;

pub use cycle::would_create_cycle;
pub use descend::descendants;

use crate::graph::{Edge, Node};
use ahash::AHashSet;

/// Filters out ghost edges: edges whose source or target no longer exists.
///
/// Every traversal and layout entry point goes through this. Dangling
/// references are repaired silently, never reported.
pub fn live_edges<'a>(nodes: &[Node], edges: &'a [Edge]) -> Vec<&'a Edge> {
    let node_ids: AHashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    edges
        .iter()
        .filter(|e| node_ids.contains(e.source.as_str()) && node_ids.contains(e.target.as_str()))
        .collect()
}
