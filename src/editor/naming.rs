use crate::error::EditError;
use crate::graph::{Node, NodeKind};

/// Checks a candidate display name for a node against the rest of the
/// graph.
///
/// The start node keeps its fixed label, names must survive trimming, and
/// no two nodes may share a label.
pub fn validate_node_label(nodes: &[Node], node_id: &str, candidate: &str) -> Result<(), EditError> {
    let node = nodes
        .iter()
        .find(|node| node.id == node_id)
        .ok_or_else(|| EditError::NodeNotFound {
            node_id: node_id.to_string(),
        })?;
    if node.kind == NodeKind::Start {
        return Err(EditError::StartNodeRename);
    }
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Err(EditError::EmptyName);
    }
    if let Some(other) = nodes
        .iter()
        .find(|other| other.id != node_id && other.data.label == trimmed)
    {
        return Err(EditError::DuplicateName {
            label: trimmed.to_string(),
            other_node_id: other.id.clone(),
        });
    }
    Ok(())
}

/// Returns the first free `"{prefix} {n}"` display name for a new node of
/// `kind`, counting from 1.
pub fn generate_node_label(kind: NodeKind, nodes: &[Node]) -> String {
    let prefix = kind.display_prefix();
    let mut counter = 1usize;
    loop {
        let candidate = format!("{} {}", prefix, counter);
        if nodes.iter().all(|node| node.data.label != candidate) {
            return candidate;
        }
        counter += 1;
    }
}
