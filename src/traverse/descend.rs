use crate::graph::{Edge, Node, Subgraph};
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

/// Collects the subgraph reachable from `root_id` via outgoing edges.
///
/// The visited set is seeded with the root itself, so the root is always a
/// member. The returned node list starts with the root followed by the other
/// members in node-list order; the edge list keeps edge-list order and holds
/// exactly the edges used to reach members. A root that does not exist
/// yields an empty subgraph.
pub fn descendants(root_id: &str, nodes: &[Node], edges: &[Edge]) -> Subgraph {
    let live = super::live_edges(nodes, edges);

    let mut outgoing: AHashMap<&str, Vec<&Edge>> = AHashMap::new();
    for edge in &live {
        outgoing.entry(edge.source.as_str()).or_default().push(edge);
    }

    let mut member_ids: AHashSet<&str> = AHashSet::new();
    let mut used_edge_ids: AHashSet<&str> = AHashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    member_ids.insert(root_id);
    queue.push_back(root_id);

    while let Some(current) = queue.pop_front() {
        if let Some(edges_out) = outgoing.get(current) {
            for edge in edges_out {
                used_edge_ids.insert(edge.id.as_str());
                let target = edge.target.as_str();
                if member_ids.insert(target) {
                    queue.push_back(target);
                }
            }
        }
    }

    let mut member_nodes: Vec<Node> = Vec::with_capacity(member_ids.len());
    if let Some(root) = nodes.iter().find(|n| n.id == root_id) {
        member_nodes.push(root.clone());
    }
    member_nodes.extend(
        nodes
            .iter()
            .filter(|n| n.id != root_id && member_ids.contains(n.id.as_str()))
            .cloned(),
    );

    Subgraph {
        nodes: member_nodes,
        edges: edges
            .iter()
            .filter(|e| used_edge_ids.contains(e.id.as_str()))
            .cloned()
            .collect(),
    }
}
