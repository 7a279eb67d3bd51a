use crate::graph::{Node, NodeKind};
use serde_json::Value;

/// Fallback node width used when no measured size is available.
pub const BASE_NODE_WIDTH: f64 = 220.0;
/// Fallback node height used when no measured size is available.
pub const BASE_NODE_HEIGHT: f64 = 80.0;

// Per-row growth of list-style node bodies (conditions, actions, cases).
const ROW_HEIGHT: f64 = 28.0;
// Decision tables render a wide grid body.
const TABLE_NODE_WIDTH: f64 = 400.0;

/// Estimates the on-canvas size of a node.
///
/// A measured size reported by the rendering layer wins. Otherwise the
/// estimate grows with the node's row count: conditions for decisions,
/// action rows for actions, cases for switches and branches for decision
/// tables. Unknown kinds fall back to the base size.
pub fn estimated_size(node: &Node) -> (f64, f64) {
    if let (Some(width), Some(height)) = (node.width, node.height) {
        return (width, height);
    }

    let rows = |key: &str| -> f64 {
        node.data
            .extra
            .get(key)
            .and_then(Value::as_array)
            .map_or(0, Vec::len) as f64
    };

    match node.kind {
        NodeKind::Decision => (
            BASE_NODE_WIDTH,
            BASE_NODE_HEIGHT + ROW_HEIGHT * rows("conditions"),
        ),
        NodeKind::Action => (
            BASE_NODE_WIDTH,
            BASE_NODE_HEIGHT + ROW_HEIGHT * rows("actions"),
        ),
        NodeKind::Switch => (
            BASE_NODE_WIDTH,
            BASE_NODE_HEIGHT + ROW_HEIGHT * rows("cases"),
        ),
        NodeKind::DecisionTable => (
            TABLE_NODE_WIDTH,
            BASE_NODE_HEIGHT + ROW_HEIGHT * rows("branches"),
        ),
        _ => (BASE_NODE_WIDTH, BASE_NODE_HEIGHT),
    }
}
