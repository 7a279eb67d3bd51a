use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ruleflow::prelude::*;
use std::fs;

/// A CLI tool to generate random rule-flow documents for exercising the
/// layout engine and diff
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The number of nodes to add on top of the start node
    #[arg(long, default_value_t = 12)]
    nodes: usize,

    /// Seed for the random generator; omit for a fresh flow every run
    #[arg(long)]
    seed: Option<u64>,

    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,
}

/// A node that can still take more outgoing branches.
struct OpenSlot {
    id: String,
    kind: NodeKind,
    children: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.nodes == 0 {
        eprintln!("Error: --nodes must be at least 1");
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("Generating a rule flow with {} nodes...", cli.nodes);

    let mut editor = GraphEditor::new();
    let mut open = vec![OpenSlot {
        id: START_NODE_ID.to_string(),
        kind: NodeKind::Start,
        children: 0,
    }];

    for _ in 0..cli.nodes {
        if open.is_empty() {
            println!("-> Every branch point is saturated, stopping early.");
            break;
        }

        let kind = random_kind(&mut rng);
        let document = editor.add_node(kind, None);
        let Some(added) = document.nodes.last() else {
            break;
        };
        let added_id = added.id.clone();
        let added_label = added.data.label.clone();

        // Attaching every new node under an existing one keeps the flow
        // acyclic by construction.
        let slot_index = rng.random_range(0..open.len());
        let port = port_for(open[slot_index].kind, open[slot_index].children);
        editor.connect(&open[slot_index].id, &added_id, port.as_deref())?;

        println!(
            "-> Added '{}' under '{}' (port {}).",
            added_label,
            open[slot_index].id,
            port.as_deref().unwrap_or("-")
        );

        open[slot_index].children += 1;
        if open[slot_index].children >= branch_capacity(open[slot_index].kind) {
            open.swap_remove(slot_index);
        }
        open.push(OpenSlot {
            id: added_id,
            kind,
            children: 0,
        });
    }

    let document = editor.relayout(Direction::LeftRight);

    let json_output = serde_json::to_string_pretty(&document)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved a flow with {} nodes and {} edges to '{}'",
        document.nodes.len(),
        document.edges.len(),
        cli.output
    );

    Ok(())
}

/// Picks a node kind with action and decision nodes dominating, the way
/// real flows tend to look.
fn random_kind(rng: &mut StdRng) -> NodeKind {
    match rng.random_range(0..8) {
        0 | 1 | 2 => NodeKind::Action,
        3 | 4 => NodeKind::Decision,
        5 => NodeKind::Script,
        6 => NodeKind::Switch,
        _ => NodeKind::Loop,
    }
}

/// How many outgoing branches a node of this kind may take.
fn branch_capacity(kind: NodeKind) -> usize {
    match kind {
        NodeKind::Decision => 2,
        NodeKind::Switch => 4,
        NodeKind::DecisionTable => 3,
        _ => 1,
    }
}

/// The output port for the next branch of a node, which also drives the
/// generated edge's branch rank.
fn port_for(kind: NodeKind, children: usize) -> Option<String> {
    match kind {
        NodeKind::Decision => Some(if children == 0 { "true" } else { "false" }.to_string()),
        NodeKind::Switch | NodeKind::DecisionTable => Some(format!("case-{}", children + 1)),
        _ => None,
    }
}
