//! Tests for size estimation and the deterministic layered layout.
mod common;
use common::*;
use ruleflow::graph::{RANK_FAILURE_COLOR, RANK_SUCCESS_COLOR};
use ruleflow::layout::{estimated_size, BASE_NODE_HEIGHT, BASE_NODE_WIDTH};
use ruleflow::prelude::*;

/// Top-left position of a node in a laid-out list.
fn placed(nodes: &[Node], id: &str) -> (f64, f64) {
    let node = nodes.iter().find(|n| n.id == id).unwrap();
    (node.position.x, node.position.y)
}

#[test]
fn test_estimated_size_grows_with_rows() {
    let mut decision = node("d", NodeKind::Decision, "D");
    decision.data.extra.insert(
        "conditions".to_string(),
        serde_json::json!([{ "id": 1 }, { "id": 2 }]),
    );
    assert_eq!(estimated_size(&decision), (220.0, 136.0));

    let switch = switch_node("s", "S", &[("c1", "Gold"), ("c2", "Silver")]);
    assert_eq!(estimated_size(&switch), (220.0, 136.0));

    let mut table = node("t", NodeKind::DecisionTable, "T");
    table
        .data
        .extra
        .insert("branches".to_string(), serde_json::json!([{}]));
    assert_eq!(estimated_size(&table), (400.0, 108.0));
}

#[test]
fn test_estimated_size_prefers_measured_dimensions() {
    let mut table = node("t", NodeKind::DecisionTable, "T");
    table.width = Some(320.0);
    table.height = Some(64.0);
    assert_eq!(estimated_size(&table), (320.0, 64.0));

    // A half-measured node falls back to the estimate.
    table.height = None;
    assert_eq!(estimated_size(&table), (400.0, 80.0));
}

#[test]
fn test_estimated_size_base_for_plain_kinds() {
    let start = node("1", NodeKind::Start, "Start");
    assert_eq!(estimated_size(&start), (BASE_NODE_WIDTH, BASE_NODE_HEIGHT));

    let looped = node("l", NodeKind::Loop, "Each Item");
    assert_eq!(estimated_size(&looped), (220.0, 80.0));
}

#[test]
fn test_chain_positions_left_right() {
    let nodes = vec![
        node("1", NodeKind::Start, "Start"),
        node("a", NodeKind::Action, "A"),
        node("b", NodeKind::Action, "B"),
    ];
    let edges = vec![edge("e1-a", "1", "a"), edge("ea-b", "a", "b")];
    let (placed_nodes, _) = layout(&nodes, &edges, Direction::LeftRight);

    // Each rank advances by node width 220 plus the 150 rank gap.
    assert_eq!(placed(&placed_nodes, "1"), (0.0, 0.0));
    assert_eq!(placed(&placed_nodes, "a"), (370.0, 0.0));
    assert_eq!(placed(&placed_nodes, "b"), (740.0, 0.0));
}

#[test]
fn test_chain_positions_top_bottom() {
    let nodes = vec![
        node("1", NodeKind::Start, "Start"),
        node("a", NodeKind::Action, "A"),
        node("b", NodeKind::Action, "B"),
    ];
    let edges = vec![edge("e1-a", "1", "a"), edge("ea-b", "a", "b")];
    let (placed_nodes, _) = layout(&nodes, &edges, Direction::TopBottom);

    // Each rank advances by node height 80 plus the 120 rank gap.
    assert_eq!(placed(&placed_nodes, "1"), (0.0, 0.0));
    assert_eq!(placed(&placed_nodes, "a"), (0.0, 200.0));
    assert_eq!(placed(&placed_nodes, "b"), (0.0, 400.0));
}

#[test]
fn test_decision_branches_stack_true_above_false() {
    let document = create_decision_flow();
    let (placed_nodes, _) = layout(&document.nodes, &document.edges, Direction::LeftRight);

    assert_eq!(placed(&placed_nodes, "d"), (370.0, 0.0));
    assert_eq!(placed(&placed_nodes, "a"), (740.0, 0.0));
    // The false branch sits one node height plus the 60 sibling gap lower.
    assert_eq!(placed(&placed_nodes, "b"), (740.0, 140.0));
}

#[test]
fn test_top_bottom_stacks_siblings_horizontally() {
    let document = create_decision_flow();
    let (placed_nodes, _) = layout(&document.nodes, &document.edges, Direction::TopBottom);

    assert_eq!(placed(&placed_nodes, "d"), (0.0, 200.0));
    assert_eq!(placed(&placed_nodes, "a"), (0.0, 400.0));
    // Siblings spread across x: node width 220 plus the 100 sibling gap.
    assert_eq!(placed(&placed_nodes, "b"), (320.0, 400.0));
}

#[test]
fn test_wide_node_expands_its_rank() {
    let nodes = vec![
        node("1", NodeKind::Start, "Start"),
        node("t", NodeKind::DecisionTable, "Rates"),
        node("c", NodeKind::Action, "Collect"),
    ];
    let edges = vec![edge("e1-t", "1", "t"), edge("et-c", "t", "c")];
    let (placed_nodes, _) = layout(&nodes, &edges, Direction::LeftRight);

    assert_eq!(placed(&placed_nodes, "t"), (370.0, 0.0));
    // The 400 wide table pushes the following rank further right.
    assert_eq!(placed(&placed_nodes, "c"), (920.0, 0.0));
}

#[test]
fn test_sibling_subtrees_do_not_overlap() {
    let nodes = vec![
        node("1", NodeKind::Start, "Start"),
        node("d", NodeKind::Decision, "Check"),
        node("a", NodeKind::Action, "A"),
        node("a1", NodeKind::Action, "A1"),
        node("a2", NodeKind::Action, "A2"),
        node("b", NodeKind::Action, "B"),
        node("b1", NodeKind::Action, "B1"),
    ];
    let edges = vec![
        edge("e1-d", "1", "d"),
        labeled_edge("ed-a", "d", "a", "True"),
        labeled_edge("ed-b", "d", "b", "False"),
        edge("ea-a1", "a", "a1"),
        edge("ea-a2", "a", "a2"),
        edge("eb-b1", "b", "b1"),
    ];
    let (placed_nodes, _) = layout(&nodes, &edges, Direction::LeftRight);

    assert_eq!(placed(&placed_nodes, "a"), (740.0, 0.0));
    assert_eq!(placed(&placed_nodes, "a1"), (1110.0, 0.0));
    assert_eq!(placed(&placed_nodes, "a2"), (1110.0, 140.0));

    // The b subtree clears the whole a subtree, not just the a node.
    let (_, a2_y) = placed(&placed_nodes, "a2");
    let (b_x, b_y) = placed(&placed_nodes, "b");
    assert_eq!(b_x, 740.0);
    assert_eq!(b_y, a2_y + BASE_NODE_HEIGHT + 60.0);
    assert_eq!(b_y, 280.0);

    // Translation keeps the subtree's internal shape.
    let (_, b1_y) = placed(&placed_nodes, "b1");
    assert_eq!(b1_y - b_y, 140.0);
}

#[test]
fn test_edge_array_order_drives_sibling_stacking() {
    let nodes = vec![
        node("1", NodeKind::Start, "Start"),
        node("d", NodeKind::Decision, "Check"),
        node("a", NodeKind::Action, "A"),
        node("b", NodeKind::Action, "B"),
    ];
    // The false edge comes first in the array, so b stacks above a.
    let edges = vec![
        edge("e1-d", "1", "d"),
        labeled_edge("ed-b", "d", "b", "False"),
        labeled_edge("ed-a", "d", "a", "True"),
    ];
    let (placed_nodes, _) = layout(&nodes, &edges, Direction::LeftRight);

    let (_, b_y) = placed(&placed_nodes, "b");
    let (_, a_y) = placed(&placed_nodes, "a");
    assert!(b_y < a_y);
    assert_eq!(a_y - b_y, 140.0);
}

#[test]
fn test_barycenter_sweep_uncrosses_branches() {
    let nodes = vec![
        node("p1", NodeKind::Action, "P1"),
        node("p2", NodeKind::Action, "P2"),
        node("c1", NodeKind::Action, "C1"),
        node("c2", NodeKind::Action, "C2"),
    ];
    // Insertion order pairs the children against the parent order; the
    // ordering sweeps line each child up with its own parent.
    let edges = vec![edge("e-p2-c1", "p2", "c1"), edge("e-p1-c2", "p1", "c2")];
    let (placed_nodes, _) = layout(&nodes, &edges, Direction::LeftRight);

    let (_, p1_y) = placed(&placed_nodes, "p1");
    let (_, p2_y) = placed(&placed_nodes, "p2");
    assert_eq!(placed(&placed_nodes, "c2").1, p1_y);
    assert_eq!(placed(&placed_nodes, "c1").1, p2_y);
}

#[test]
fn test_layout_is_deterministic() {
    let document = create_diamond_flow();
    let first = layout(&document.nodes, &document.edges, Direction::LeftRight);
    let second = layout(&document.nodes, &document.edges, Direction::LeftRight);
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
}

#[test]
fn test_layout_preserves_input_order_and_keeps_ghost_edges() {
    let nodes = vec![
        node("1", NodeKind::Start, "Start"),
        node("a", NodeKind::Action, "A"),
    ];
    let edges = vec![edge("eg", "1", "ghost"), edge("e1-a", "1", "a")];
    let (placed_nodes, styled_edges) = layout(&nodes, &edges, Direction::LeftRight);

    assert_eq!(ids(&placed_nodes), vec!["1", "a"]);
    let edge_ids: Vec<&str> = styled_edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(edge_ids, vec!["eg", "e1-a"]);
    assert!(styled_edges.iter().all(|e| e.style.is_some()));

    // The dangling edge never influences placement.
    assert_eq!(placed(&placed_nodes, "a"), (370.0, 0.0));
}

#[test]
fn test_layout_restyles_edges_by_branch_rank() {
    let document = create_decision_flow();
    let (_, styled_edges) = layout(&document.nodes, &document.edges, Direction::LeftRight);

    let stroke = |id: &str| -> &str {
        styled_edges
            .iter()
            .find(|e| e.id == id)
            .and_then(|e| e.style.as_ref())
            .map(|style| style.stroke.as_str())
            .unwrap()
    };
    assert_eq!(stroke("e1-d"), RANK_SUCCESS_COLOR);
    assert_eq!(stroke("ed-a"), RANK_SUCCESS_COLOR);
    assert_eq!(stroke("ed-b"), RANK_FAILURE_COLOR);

    let marker = styled_edges
        .iter()
        .find(|e| e.id == "ed-b")
        .and_then(|e| e.marker_end.as_ref())
        .unwrap();
    assert_eq!(marker.color, RANK_FAILURE_COLOR);
}

#[test]
fn test_empty_graph_yields_empty_layout() {
    let (placed_nodes, styled_edges) = layout(&[], &[], Direction::LeftRight);
    assert!(placed_nodes.is_empty());
    assert!(styled_edges.is_empty());
}

#[test]
fn test_disconnected_roots_share_the_first_rank() {
    let nodes = vec![
        node("r1", NodeKind::Action, "One"),
        node("r2", NodeKind::Action, "Two"),
    ];
    let (placed_nodes, _) = layout(&nodes, &[], Direction::LeftRight);

    assert_eq!(placed(&placed_nodes, "r1"), (0.0, 0.0));
    assert_eq!(placed(&placed_nodes, "r2"), (0.0, 140.0));
}

#[test]
fn test_cycle_in_loaded_document_still_places_every_node() {
    let nodes = vec![
        node("a", NodeKind::Action, "A"),
        node("b", NodeKind::Action, "B"),
    ];
    // The editor rejects cycles, but foreign documents may carry one.
    let edges = vec![edge("ea-b", "a", "b"), edge("eb-a", "b", "a")];
    let (placed_nodes, _) = layout(&nodes, &edges, Direction::LeftRight);

    assert_eq!(placed(&placed_nodes, "b"), (0.0, 0.0));
    assert_eq!(placed(&placed_nodes, "a"), (370.0, 0.0));
}
