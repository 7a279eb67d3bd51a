use clap::{Parser, ValueEnum};
use ruleflow::prelude::*;
use std::fs;
use std::time::Instant;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionCli {
    Lr,
    Tb,
}

/// A layout and diff inspector for rule-flow graph documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the graph document JSON file
    graph_path: String,

    /// The primary flow direction for layout
    #[arg(short, long, value_enum, default_value = "lr")]
    direction: DirectionCli,

    /// Optional second document (or version snapshot) to diff against
    #[arg(long)]
    diff_against: Option<String>,

    /// Print per-edge styling rows in addition to the summary
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let direction = match cli.direction {
        DirectionCli::Lr => Direction::LeftRight,
        DirectionCli::Tb => Direction::TopBottom,
    };

    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let document = load_document(&cli.graph_path);
    let base = cli.diff_against.as_deref().map(load_document);
    let load_duration = load_start.elapsed();

    println!(
        "Loaded '{}': {} nodes, {} edges",
        cli.graph_path,
        document.nodes.len(),
        document.edges.len()
    );

    // --- 2. Layout ---
    let layout_start = Instant::now();
    let (nodes, edges) = layout(&document.nodes, &document.edges, direction);
    let layout_duration = layout_start.elapsed();

    println!("\n--- Placement ({:?}) ---", direction);
    for node in &nodes {
        println!(
            "{:<28} {:<14} x {:>8.1}  y {:>8.1}",
            node.id,
            format!("{:?}", node.kind),
            node.position.x,
            node.position.y
        );
    }

    // --- 3. Edge Styling ---
    let mut per_rank = [0usize; 3];
    for edge in &edges {
        per_rank[(edge.branch_rank() - 1) as usize] += 1;
    }
    println!("\n--- Edge Styling ---");
    println!("rank 1 (true/default): {}", per_rank[0]);
    println!("rank 2 (false):        {}", per_rank[1]);
    println!("rank 3 (cases/other):  {}", per_rank[2]);
    if cli.verbose {
        for edge in &edges {
            let color = edge
                .style
                .as_ref()
                .map(|style| style.stroke.as_str())
                .unwrap_or("-");
            println!(
                "{:<40} rank {}  {}  label '{}'",
                edge.id,
                edge.branch_rank(),
                color,
                edge.label.as_deref().unwrap_or("")
            );
        }
    }

    // --- 4. Diff ---
    let mut diff_duration = None;
    if let Some(base) = &base {
        let diff_start = Instant::now();
        let changes = diff(base, &document);
        diff_duration = Some(diff_start.elapsed());

        println!(
            "\n--- Diff (base: {}) ---",
            cli.diff_against.as_deref().unwrap_or("")
        );
        print_partition("added", &changes.added);
        print_partition("modified", &changes.modified);
        print_partition("removed", &changes.removed);
        print_partition("unchanged", &changes.unchanged);
    }

    // --- 5. Summary ---
    let total_duration = total_start.elapsed();
    println!("\n--- Performance Summary ---");
    println!("File Loading:  {:?}", load_duration);
    println!("Layout:        {:?}", layout_duration);
    if let Some(diff_duration) = diff_duration {
        println!("Diff:          {:?}", diff_duration);
    }
    println!("---------------------------");
    println!("Total:         {:?}", total_duration);
}

fn print_partition(name: &str, nodes: &[Node]) {
    let labels = nodes
        .iter()
        .map(|node| node.data.label.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    println!("{:<10} {:>3}  [{}]", name, nodes.len(), labels);
}

/// Loads a graph document, accepting either the plain document form or a
/// version-snapshot wrapper carrying an encoded `contentJson`.
fn load_document(path: &str) -> GraphDocument {
    let json = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read '{}': {}", path, e)));
    if let Ok(snapshot) = serde_json::from_str::<VersionSnapshot>(&json) {
        if !snapshot.content_json.is_null() {
            return snapshot.graph();
        }
    }
    GraphDocument::from_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse '{}': {}", path, e)))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
