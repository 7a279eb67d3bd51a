//! Structural comparison of two graph documents, plus the lenient parsing
//! of persisted version snapshots and the textual rule listing used for
//! side-by-side display.

mod listing;
mod snapshot;

pub use listing::render_rule_listing;
pub use snapshot::VersionSnapshot;

use crate::graph::{GraphDocument, Node};
use ahash::{AHashMap, AHashSet};
use serde_json::Value;

/// Payload keys injected at render time by the hosting layer; they are
/// never part of the persisted semantics and are stripped before any
/// comparison.
const TRANSIENT_KEYS: [&str; 4] = ["onChange", "onMenuClick", "validateNodeName", "packageId"];

/// The four disjoint node partitions of a base/target comparison.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffResult {
    pub added: Vec<Node>,
    pub modified: Vec<Node>,
    pub removed: Vec<Node>,
    pub unchanged: Vec<Node>,
}

impl DiffResult {
    /// True when the two documents carry the same node set with the same
    /// payloads.
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.removed.is_empty()
    }
}

/// Classifies every target node against `base` (added, modified or
/// unchanged by payload) and every base node missing from `target` as
/// removed.
///
/// Partitions hold the target's copy of a node, except `removed`, which
/// only exists in the base. Order within each partition follows the owning
/// document's node order.
pub fn diff(base: &GraphDocument, target: &GraphDocument) -> DiffResult {
    let base_by_id: AHashMap<&str, &Node> = base
        .nodes
        .iter()
        .map(|node| (node.id.as_str(), node))
        .collect();
    let target_ids: AHashSet<&str> = target.nodes.iter().map(|node| node.id.as_str()).collect();

    let mut result = DiffResult::default();
    for node in &target.nodes {
        match base_by_id.get(node.id.as_str()) {
            None => result.added.push(node.clone()),
            Some(counterpart) => {
                if sanitized_payload(node) == sanitized_payload(counterpart) {
                    result.unchanged.push(node.clone());
                } else {
                    result.modified.push(node.clone());
                }
            }
        }
    }
    for node in &base.nodes {
        if !target_ids.contains(node.id.as_str()) {
            result.removed.push(node.clone());
        }
    }
    result
}

/// A node's payload with transient keys stripped.
///
/// `serde_json` objects iterate in sorted key order, so plain `Value`
/// equality over the stripped payloads already compares in canonical form;
/// two payloads differing only in key order or injected callbacks come out
/// equal.
fn sanitized_payload(node: &Node) -> Value {
    let mut payload = serde_json::to_value(&node.data).unwrap_or(Value::Null);
    if let Value::Object(map) = &mut payload {
        for key in TRANSIENT_KEYS {
            map.remove(key);
        }
    }
    payload
}
