//! Common test utilities for building flow graphs and documents.
use ruleflow::prelude::*;

/// Creates a bare node of `kind` at the origin.
#[allow(dead_code)]
pub fn node(id: &str, kind: NodeKind, label: &str) -> Node {
    Node::new(id, kind, label, Position::default())
}

/// Creates a node at an explicit position.
#[allow(dead_code)]
pub fn node_at(id: &str, kind: NodeKind, label: &str, x: f64, y: f64) -> Node {
    Node::new(id, kind, label, Position::new(x, y))
}

/// Creates a plain, unlabeled edge (branch rank 1).
#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str) -> Edge {
    Edge::new(id, source, target)
}

/// Creates an edge with a display label, which also drives its branch rank.
#[allow(dead_code)]
pub fn labeled_edge(id: &str, source: &str, target: &str, label: &str) -> Edge {
    let mut edge = Edge::new(id, source, target);
    edge.label = Some(label.to_string());
    edge
}

/// Creates an edge with a source handle and no label.
#[allow(dead_code)]
pub fn handled_edge(id: &str, source: &str, target: &str, handle: &str) -> Edge {
    let mut edge = Edge::new(id, source, target);
    edge.source_handle = Some(handle.to_string());
    edge
}

/// A switch node whose payload carries `(id, value)` cases, so edge-label
/// derivation has data to pick from.
#[allow(dead_code)]
pub fn switch_node(id: &str, label: &str, cases: &[(&str, &str)]) -> Node {
    let mut node = node(id, NodeKind::Switch, label);
    let cases: Vec<serde_json::Value> = cases
        .iter()
        .map(|(case_id, value)| serde_json::json!({ "id": case_id, "value": value }))
        .collect();
    node.data
        .extra
        .insert("cases".to_string(), serde_json::Value::Array(cases));
    node
}

/// A decision flow:
/// `START -> DECISION`, with a true branch to an approve action and a
/// false branch to a reject action.
///
/// Ids: "1" (start), "d" (decision), "a" (approve), "b" (reject).
#[allow(dead_code)]
pub fn create_decision_flow() -> GraphDocument {
    GraphDocument {
        nodes: vec![
            node("1", NodeKind::Start, "Start"),
            node("d", NodeKind::Decision, "Age Check"),
            node("a", NodeKind::Action, "Approve"),
            node("b", NodeKind::Action, "Reject"),
        ],
        edges: vec![
            edge("e1-d", "1", "d"),
            labeled_edge("ed-a", "d", "a", "True"),
            labeled_edge("ed-b", "d", "b", "False"),
        ],
    }
}

/// A diamond: the decision flow plus a merge action fed by both branches.
///
/// Ids as in [`create_decision_flow`] plus "m" (merge).
#[allow(dead_code)]
pub fn create_diamond_flow() -> GraphDocument {
    let mut document = create_decision_flow();
    document.nodes.push(node("m", NodeKind::Action, "Notify"));
    document.edges.push(edge("ea-m", "a", "m"));
    document.edges.push(edge("eb-m", "b", "m"));
    document
}

/// A start node with three unlabeled (same-rank) children in edge-array
/// order x, y, z. Used for sibling reordering tests.
#[allow(dead_code)]
pub fn create_sibling_flow() -> GraphDocument {
    GraphDocument {
        nodes: vec![
            node("1", NodeKind::Start, "Start"),
            node("x", NodeKind::Action, "First"),
            node("y", NodeKind::Action, "Second"),
            node("z", NodeKind::Action, "Third"),
        ],
        edges: vec![
            edge("e1-x", "1", "x"),
            edge("e1-y", "1", "y"),
            edge("e1-z", "1", "z"),
        ],
    }
}

/// Id list of a node slice, for order-sensitive comparisons.
#[allow(dead_code)]
pub fn ids(nodes: &[Node]) -> Vec<&str> {
    nodes.iter().map(|node| node.id.as_str()).collect()
}

/// A per-test, per-process scratch file under the system temp directory.
#[allow(dead_code)]
pub fn temp_file_path(name: &str, extension: &str) -> String {
    std::env::temp_dir()
        .join(format!(
            "ruleflow_{}_{}.{}",
            name,
            std::process::id(),
            extension
        ))
        .to_string_lossy()
        .into_owned()
}
