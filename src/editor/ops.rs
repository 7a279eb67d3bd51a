//! Pure mutation operations over `(nodes, edges)` state.
//!
//! Every function here takes the current graph explicitly and either
//! mutates it in place or returns the pieces to append. Nothing reaches
//! into ambient state, so the editor session (and the tests) stay in full
//! control of when history snapshots and re-layouts happen.

use crate::editor::ids::IdGenerator;
use crate::editor::naming;
use crate::error::EditError;
use crate::graph::{Edge, Node, NodeKind, Position, Subgraph};
use crate::traverse;
use ahash::{AHashMap, AHashSet};
use serde_json::Value;
use std::fmt;

/// Offset applied to a pasted subgraph when no drop position is supplied.
const PASTE_DEFAULT_OFFSET: f64 = 50.0;

/// Direction of a sibling reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

impl fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveDirection::Up => write!(f, "up"),
            MoveDirection::Down => write!(f, "down"),
        }
    }
}

/// Fallback position for a node added without an explicit point, cascading
/// with the node count so repeated adds stay visible.
pub(crate) fn cascade_position(existing: usize) -> Position {
    let offset = 100.0 + existing as f64 * 20.0;
    Position::new(offset, offset)
}

/// Builds a fresh node of `kind` with a generated id, a generated display
/// name and the kind's default payload.
pub(crate) fn spawn_node(
    ids: &mut IdGenerator,
    nodes: &[Node],
    kind: NodeKind,
    position: Option<Position>,
) -> Node {
    let id = ids.next_node_id();
    let label = naming::generate_node_label(kind, nodes);
    let position = position.unwrap_or_else(|| cascade_position(nodes.len()));
    Node::new(id, kind, label, position)
}

/// Removes the node and every edge touching it. Descendants stay in the
/// graph until they are deleted separately.
pub(crate) fn delete_node(nodes: &mut Vec<Node>, edges: &mut Vec<Edge>, node_id: &str) {
    nodes.retain(|node| node.id != node_id);
    edges.retain(|edge| edge.source != node_id && edge.target != node_id);
}

/// Materializes the clipboard subgraph under fresh ids.
///
/// Internal topology is preserved through an id map, positions shift by
/// the drop offset (or a fixed fallback), the root label gains a `" Copy"`
/// suffix and pasted nodes come in deselected. Returns the nodes and edges
/// to append.
pub(crate) fn paste_subgraph(
    clipboard: &Subgraph,
    ids: &mut IdGenerator,
    drop_position: Option<Position>,
) -> (Vec<Node>, Vec<Edge>) {
    let Some(root) = clipboard.root() else {
        return (Vec::new(), Vec::new());
    };

    let (dx, dy) = match drop_position {
        Some(drop) => (drop.x - root.position.x, drop.y - root.position.y),
        None => (PASTE_DEFAULT_OFFSET, PASTE_DEFAULT_OFFSET),
    };

    let mut id_map: AHashMap<&str, String> = AHashMap::with_capacity(clipboard.nodes.len());
    for node in &clipboard.nodes {
        id_map.insert(node.id.as_str(), ids.next_node_id());
    }

    let root_id = root.id.clone();
    let nodes = clipboard
        .nodes
        .iter()
        .map(|node| {
            let mut pasted = node.clone();
            if let Some(fresh) = id_map.get(node.id.as_str()) {
                pasted.id = fresh.clone();
            }
            pasted.position = Position::new(node.position.x + dx, node.position.y + dy);
            pasted.selected = false;
            if node.id == root_id {
                pasted.data.label = format!("{} Copy", node.data.label);
            }
            pasted
        })
        .collect();

    let edges = clipboard
        .edges
        .iter()
        .filter_map(|edge| {
            let source = id_map.get(edge.source.as_str())?;
            let target = id_map.get(edge.target.as_str())?;
            let mut pasted = edge.clone();
            pasted.id = format!("e{}-{}", source, target);
            pasted.source = source.clone();
            pasted.target = target.clone();
            pasted.selected = false;
            Some(pasted)
        })
        .collect();

    (nodes, edges)
}

/// Validates and builds a new connection.
///
/// The cycle check runs first (it also rejects an unset target and a
/// self-loop), then both endpoints must exist. The edge label comes from
/// the source node's kind and the chosen port, and the edge is styled by
/// its branch rank before it is handed back for appending.
pub(crate) fn connect(
    nodes: &[Node],
    edges: &[Edge],
    source: &str,
    target: &str,
    handle: Option<&str>,
) -> Result<Edge, EditError> {
    if traverse::would_create_cycle(source, target, nodes, edges) {
        return Err(EditError::CycleDetected {
            source: source.to_string(),
            target: target.to_string(),
        });
    }
    let source_node = nodes
        .iter()
        .find(|node| node.id == source)
        .ok_or_else(|| EditError::NodeNotFound {
            node_id: source.to_string(),
        })?;
    if !nodes.iter().any(|node| node.id == target) {
        return Err(EditError::NodeNotFound {
            node_id: target.to_string(),
        });
    }

    let id = match handle {
        Some(handle) => format!("e{}:{}-{}", source, handle, target),
        None => format!("e{}-{}", source, target),
    };
    let mut edge = Edge::new(id, source, target);
    edge.source_handle = handle.map(str::to_string);
    edge.label = derive_edge_label(source_node, edges, handle);
    edge.restyle_by_rank();
    Ok(edge)
}

/// Derives the display label for a new edge from the source kind and port.
fn derive_edge_label(source: &Node, edges: &[Edge], handle: Option<&str>) -> Option<String> {
    match source.kind {
        NodeKind::Decision => match handle {
            Some("true") => Some("True".to_string()),
            Some("false") => Some("False".to_string()),
            // Without a recognizable port the first outgoing edge is the
            // true branch, the next one the false branch.
            _ => {
                let outgoing = edges.iter().filter(|edge| edge.source == source.id).count();
                if outgoing == 0 {
                    Some("True".to_string())
                } else {
                    Some("False".to_string())
                }
            }
        },
        NodeKind::Switch => {
            let handle = handle?;
            let cases = source.data.extra.get("cases")?.as_array()?;
            cases
                .iter()
                .find(|case| value_text(case.get("id")).as_deref() == Some(handle))
                .and_then(|case| value_text(case.get("value")))
        }
        NodeKind::DecisionTable => {
            let handle = handle?;
            let branches = source.data.extra.get("branches")?.as_array()?;
            let branch = branches
                .iter()
                .find(|branch| value_text(branch.get("id")).as_deref() == Some(handle))?;
            if value_text(branch.get("type")).as_deref() == Some("EXPRESSION") {
                value_text(branch.get("expression"))
            } else {
                Some(format!(
                    "{} {} {}",
                    value_text(branch.get("parameter")).unwrap_or_default(),
                    value_text(branch.get("operator")).unwrap_or_default(),
                    value_text(branch.get("value")).unwrap_or_default(),
                ))
            }
        }
        _ => None,
    }
}

/// Text form of a payload value, for handle matching and label building.
fn value_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Swaps a node's sibling edge with its neighbor in the requested
/// direction.
///
/// The parent edge is the first edge in array order targeting the node.
/// Siblings share the parent's source and branch rank, deduplicated by
/// target and filtered to targets that still exist. The swap happens in
/// the main edge array so a following re-layout reflects the new order.
pub(crate) fn move_sibling(
    nodes: &[Node],
    edges: &mut Vec<Edge>,
    node_id: &str,
    direction: MoveDirection,
) -> Result<(), EditError> {
    if !nodes.iter().any(|node| node.id == node_id) {
        return Err(EditError::NodeNotFound {
            node_id: node_id.to_string(),
        });
    }
    let parent = edges
        .iter()
        .find(|edge| edge.target == node_id)
        .ok_or_else(|| EditError::MoveWithoutParent {
            node_id: node_id.to_string(),
        })?;
    let parent_source = parent.source.clone();
    let parent_rank = parent.branch_rank();

    let node_ids: AHashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
    let mut seen: AHashSet<&str> = AHashSet::new();
    let mut siblings: Vec<(usize, &str)> = Vec::new();
    for (index, edge) in edges.iter().enumerate() {
        if edge.source == parent_source
            && edge.branch_rank() == parent_rank
            && node_ids.contains(edge.target.as_str())
            && seen.insert(edge.target.as_str())
        {
            siblings.push((index, edge.target.as_str()));
        }
    }

    let position = siblings
        .iter()
        .position(|&(_, target)| target == node_id)
        .ok_or_else(|| EditError::MoveWithoutParent {
            node_id: node_id.to_string(),
        })?;
    let neighbor = match direction {
        MoveDirection::Up if position > 0 => position - 1,
        MoveDirection::Down if position + 1 < siblings.len() => position + 1,
        _ => {
            return Err(EditError::MoveAtBoundary {
                node_id: node_id.to_string(),
                direction,
            });
        }
    };

    let (a, b) = (siblings[position].0, siblings[neighbor].0);
    edges.swap(a, b);
    Ok(())
}

/// Marks a node and its descendants (plus the edges used to reach them)
/// selected and clears the flag everywhere else. Positions stay untouched,
/// so a drag gesture carries the subtree's selection without re-parenting
/// its geometry.
pub(crate) fn select_descendants(nodes: &mut [Node], edges: &mut [Edge], root_id: &str) {
    let subtree = traverse::descendants(root_id, nodes, edges);
    let node_ids: AHashSet<String> = subtree.nodes.into_iter().map(|node| node.id).collect();
    let edge_ids: AHashSet<String> = subtree.edges.into_iter().map(|edge| edge.id).collect();
    for node in nodes.iter_mut() {
        node.selected = node_ids.contains(&node.id);
    }
    for edge in edges.iter_mut() {
        edge.selected = edge_ids.contains(&edge.id);
    }
}
