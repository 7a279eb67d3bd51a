use crate::graph::model::{Edge, Node, NodeKind, Position};
use serde::{Deserialize, Serialize};

/// The id given to the seed start node of a fresh flow.
pub const START_NODE_ID: &str = "1";

/// The persisted and exchanged form of a flow graph.
///
/// Nodes carry `{id, type, data, position}` and edges
/// `{id, source, target, sourceHandle?, label?, data?}`; editor-session
/// state (measured sizes, selection, edge styling) is stripped on capture.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphDocument {
    /// A fresh document holding only the start node.
    pub fn seed() -> Self {
        Self {
            nodes: vec![Node::new(
                START_NODE_ID,
                NodeKind::Start,
                "Start",
                Position::default(),
            )],
            edges: vec![],
        }
    }

    /// Captures the live editor state as a persistable document.
    ///
    /// Edges are ordered by source id and then by the target node's vertical
    /// position so that persisted sibling order matches what the user sees;
    /// edges whose target vanished keep their relative order.
    pub fn capture(nodes: &[Node], edges: &[Edge]) -> Self {
        let target_y = |edge: &Edge| -> Option<f64> {
            nodes
                .iter()
                .find(|n| n.id == edge.target)
                .map(|n| n.position.y)
        };

        let mut ordered: Vec<Edge> = edges.to_vec();
        ordered.sort_by(|a, b| {
            if a.source != b.source {
                return a.source.cmp(&b.source);
            }
            match (target_y(a), target_y(b)) {
                (Some(ya), Some(yb)) => ya.total_cmp(&yb),
                _ => std::cmp::Ordering::Equal,
            }
        });

        Self {
            nodes: nodes.iter().map(strip_node).collect(),
            edges: ordered.iter().map(strip_edge).collect(),
        }
    }

    /// Parses a document from its JSON text. Strict: used where the caller
    /// wants to know about malformed input (the lenient path for version
    /// snapshots lives in the diff module).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

fn strip_node(node: &Node) -> Node {
    let mut node = node.clone();
    node.width = None;
    node.height = None;
    node.selected = false;
    node
}

fn strip_edge(edge: &Edge) -> Edge {
    let mut edge = edge.clone();
    edge.style = None;
    edge.marker_end = None;
    edge.selected = false;
    edge
}
