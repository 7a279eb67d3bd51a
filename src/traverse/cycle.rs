use crate::graph::{Edge, Node};
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

/// Returns true when adding `source -> target` would close a cycle.
///
/// Rejects a self loop, an unset target, and any pair where `target` can
/// already reach `source` over the existing edges. Runs a breadth-first
/// search from `target` in O(V + E). Callers must re-run this before every
/// edge acceptance; the result is never cached.
pub fn would_create_cycle(source: &str, target: &str, nodes: &[Node], edges: &[Edge]) -> bool {
    if target.is_empty() || source == target {
        return true;
    }

    let mut outgoing: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for edge in super::live_edges(nodes, edges) {
        outgoing
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    visited.insert(target);
    queue.push_back(target);

    while let Some(current) = queue.pop_front() {
        if current == source {
            return true;
        }
        if let Some(targets) = outgoing.get(current) {
            for &next in targets {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }

    false
}
