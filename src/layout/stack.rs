use super::Direction;
use crate::graph::{Edge, Node};
use crate::traverse;
use ahash::{AHashMap, AHashSet};

/// Re-stacks the subtrees hanging off every parent with two or more
/// children so sibling branches never overlap.
///
/// Children are visited in edge-array order. The first sibling keeps the
/// position the layering gave it and anchors the stack; every following
/// subtree is translated along the cross axis to sit directly below (or
/// right of) the previous one. A node that already moved with an earlier
/// sibling of the same parent stays put, so shared descendants are only
/// translated once per group.
pub(crate) fn restack_siblings(
    nodes: &[Node],
    edges: &[Edge],
    sizes: &AHashMap<&str, (f64, f64)>,
    direction: Direction,
    centers: &mut AHashMap<String, (f64, f64)>,
) {
    let node_ids: AHashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
    let gap = direction.node_separation();

    for parent in nodes {
        let mut seen: AHashSet<&str> = AHashSet::new();
        let mut children: Vec<&str> = Vec::new();
        for edge in edges {
            if edge.source == parent.id
                && node_ids.contains(edge.target.as_str())
                && seen.insert(edge.target.as_str())
            {
                children.push(edge.target.as_str());
            }
        }
        if children.len() < 2 {
            continue;
        }

        let mut moved: AHashSet<String> = AHashSet::new();
        let mut cursor: Option<f64> = None;
        for child in children {
            let subtree = traverse::descendants(child, nodes, edges);
            let movable: Vec<String> = subtree
                .nodes
                .iter()
                .map(|node| node.id.clone())
                .filter(|id| !moved.contains(id))
                .collect();
            if movable.is_empty() {
                continue;
            }

            let mut top = f64::INFINITY;
            let mut bottom = f64::NEG_INFINITY;
            for id in &movable {
                if let Some(&(x, y)) = centers.get(id) {
                    let (width, height) = sizes
                        .get(id.as_str())
                        .copied()
                        .unwrap_or((super::BASE_NODE_WIDTH, super::BASE_NODE_HEIGHT));
                    let (center, extent) = if direction.is_horizontal() {
                        (y, height)
                    } else {
                        (x, width)
                    };
                    top = top.min(center - extent / 2.0);
                    bottom = bottom.max(center + extent / 2.0);
                }
            }
            if !top.is_finite() {
                continue;
            }

            // The first sibling anchors the stack where the layering put it.
            let target_top = *cursor.get_or_insert(top);
            let delta = target_top - top;
            if delta != 0.0 {
                for id in &movable {
                    if let Some(entry) = centers.get_mut(id) {
                        if direction.is_horizontal() {
                            entry.1 += delta;
                        } else {
                            entry.0 += delta;
                        }
                    }
                }
            }
            cursor = Some(bottom + delta + gap);
            moved.extend(movable);
        }
    }
}
