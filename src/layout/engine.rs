use super::Direction;
use crate::graph::{Edge, Node};
use ahash::AHashMap;
use std::collections::VecDeque;

#[cfg(feature = "debug-tools")]
use std::fs;

// Rank 1 edges pull harder during ordering so the main path stays straight.
const MAIN_PATH_WEIGHT: f64 = 10.0;
const DEFAULT_WEIGHT: f64 = 1.0;
const ORDERING_SWEEPS: usize = 4;

/// Computes a center-anchored placement for every node.
///
/// Layering is longest-path from the sources; the order within a layer
/// starts from the rank-biased node presort and is refined by stable
/// weighted barycenter sweeps. All tie-breaking falls back to array order,
/// which keeps the result identical across runs.
pub(crate) fn place(
    nodes: &[Node],
    live: &[&Edge],
    sizes: &AHashMap<&str, (f64, f64)>,
    direction: Direction,
) -> AHashMap<String, (f64, f64)> {
    let mut centers = AHashMap::with_capacity(nodes.len());
    if nodes.is_empty() {
        return centers;
    }

    let mut index_of: AHashMap<&str, usize> = AHashMap::with_capacity(nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        index_of.entry(node.id.as_str()).or_insert(index);
    }

    // Bias tie-breaking toward the edit-time order: each node sorts by the
    // rank and array position of its lowest-ranked incoming edge, nodes
    // without incoming edges last.
    let mut incoming_key: AHashMap<&str, (u8, usize)> = AHashMap::new();
    for (index, edge) in live.iter().enumerate() {
        let key = (edge.branch_rank(), index);
        incoming_key
            .entry(edge.target.as_str())
            .and_modify(|current| {
                if key < *current {
                    *current = key;
                }
            })
            .or_insert(key);
    }

    let mut presorted: Vec<usize> = (0..nodes.len()).collect();
    presorted.sort_by_key(|&index| {
        incoming_key
            .get(nodes[index].id.as_str())
            .copied()
            .unwrap_or((u8::MAX, usize::MAX))
    });

    // Edges feed the adjacency lists grouped by source, then rank, then
    // target, so sibling branches enter in their visual order.
    let mut edge_order: Vec<usize> = (0..live.len()).collect();
    edge_order.sort_by(|&a, &b| {
        live[a]
            .source
            .cmp(&live[b].source)
            .then(live[a].branch_rank().cmp(&live[b].branch_rank()))
            .then(live[a].target.cmp(&live[b].target))
    });

    let mut preds: Vec<Vec<(usize, f64)>> = vec![Vec::new(); nodes.len()];
    let mut succs: Vec<Vec<(usize, f64)>> = vec![Vec::new(); nodes.len()];
    let mut indegree: Vec<usize> = vec![0; nodes.len()];
    for &edge_index in &edge_order {
        let edge = live[edge_index];
        if let (Some(&source), Some(&target)) = (
            index_of.get(edge.source.as_str()),
            index_of.get(edge.target.as_str()),
        ) {
            let weight = if edge.branch_rank() == 1 {
                MAIN_PATH_WEIGHT
            } else {
                DEFAULT_WEIGHT
            };
            succs[source].push((target, weight));
            preds[target].push((source, weight));
            indegree[target] += 1;
        }
    }

    // Longest-path layering over a Kahn traversal seeded in presort order.
    let mut layer: Vec<Option<usize>> = vec![None; nodes.len()];
    let mut remaining = indegree.clone();
    let mut queue: VecDeque<usize> = VecDeque::new();
    for &index in &presorted {
        if remaining[index] == 0 {
            layer[index] = Some(0);
            queue.push_back(index);
        }
    }
    while let Some(current) = queue.pop_front() {
        let current_layer = layer[current].unwrap_or(0);
        for &(succ, _) in &succs[current] {
            let proposed = current_layer + 1;
            if layer[succ].is_none_or(|existing| existing < proposed) {
                layer[succ] = Some(proposed);
            }
            remaining[succ] -= 1;
            if remaining[succ] == 0 {
                queue.push_back(succ);
            }
        }
    }
    // Documents loaded from elsewhere may carry a cycle the editor would
    // have rejected; park those nodes one past their deepest placed
    // predecessor instead of failing.
    for &index in &presorted {
        if layer[index].is_none() {
            let fallback = preds[index]
                .iter()
                .filter_map(|&(pred, _)| layer[pred])
                .max()
                .map_or(0, |deepest| deepest + 1);
            layer[index] = Some(fallback);
        }
    }

    let layer_count = layer.iter().flatten().copied().max().unwrap_or(0) + 1;
    let mut layers: Vec<Vec<usize>> = vec![Vec::new(); layer_count];
    for &index in &presorted {
        layers[layer[index].unwrap_or(0)].push(index);
    }

    // In-layer position of every node, updated after each reordering pass.
    let mut position: Vec<usize> = vec![0; nodes.len()];
    for members in &layers {
        for (in_layer, &index) in members.iter().enumerate() {
            position[index] = in_layer;
        }
    }

    for sweep in 0..ORDERING_SWEEPS {
        if sweep % 2 == 0 {
            for depth in 1..layers.len() {
                reorder_layer(&mut layers[depth], &preds, &mut position);
            }
        } else {
            for depth in (0..layers.len().saturating_sub(1)).rev() {
                reorder_layer(&mut layers[depth], &succs, &mut position);
            }
        }
    }

    // Coordinate assignment: every layer is one column (or row) whose
    // extent is its widest node; nodes stack from the top-left corner.
    let node_extents = |index: usize| -> (f64, f64) {
        let (width, height) = sizes
            .get(nodes[index].id.as_str())
            .copied()
            .unwrap_or((super::BASE_NODE_WIDTH, super::BASE_NODE_HEIGHT));
        if direction.is_horizontal() {
            (width, height)
        } else {
            (height, width)
        }
    };

    let mut primary_offset = 0.0;
    for members in &layers {
        let extent = members
            .iter()
            .map(|&index| node_extents(index).0)
            .fold(0.0, f64::max);
        let mut cross_cursor = 0.0;
        for &index in members {
            let (_, cross_extent) = node_extents(index);
            let center_primary = primary_offset + extent / 2.0;
            let center_cross = cross_cursor + cross_extent / 2.0;
            let (x, y) = if direction.is_horizontal() {
                (center_primary, center_cross)
            } else {
                (center_cross, center_primary)
            };
            centers.insert(nodes[index].id.clone(), (x, y));
            cross_cursor += cross_extent + direction.node_separation();
        }
        primary_offset += extent + direction.rank_separation();
    }

    #[cfg(feature = "debug-tools")]
    {
        let mut table = String::new();
        for (depth, members) in layers.iter().enumerate() {
            let row = members
                .iter()
                .map(|&index| nodes[index].id.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            table.push_str(&format!("rank {}: {}\n", depth, row));
        }
        if let Err(e) = fs::create_dir_all("tmp").and_then(|_| fs::write("tmp/layout_ranks.txt", &table))
        {
            eprintln!("Warning: Could not write layout debug file: {}", e);
        }
    }

    centers
}

/// Stable-sorts one layer by the weighted barycenter of each node's
/// neighbors; nodes without neighbors keep their current slot.
fn reorder_layer(members: &mut Vec<usize>, neighbors: &[Vec<(usize, f64)>], position: &mut [usize]) {
    if members.len() < 2 {
        return;
    }

    let mut scored: Vec<(f64, usize)> = members
        .iter()
        .map(|&index| {
            let mut weight_sum = 0.0;
            let mut weighted = 0.0;
            for &(neighbor, weight) in &neighbors[index] {
                weighted += position[neighbor] as f64 * weight;
                weight_sum += weight;
            }
            let barycenter = if weight_sum == 0.0 {
                position[index] as f64
            } else {
                weighted / weight_sum
            };
            (barycenter, index)
        })
        .collect();

    scored.sort_by(|a, b| a.0.total_cmp(&b.0));

    members.clear();
    for (in_layer, &(_, index)) in scored.iter().enumerate() {
        members.push(index);
        position[index] = in_layer;
    }
}
