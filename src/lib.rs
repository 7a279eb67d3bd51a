//! # Ruleflow - Visual Rule-Flow Graph Engine
//!
//! **Ruleflow** is the graph-editing engine behind a visual rule-flow designer. It
//! maintains a directed graph of typed nodes and labeled edges representing a
//! business-rule flow, lays the graph out deterministically for display, supports
//! structural editing (add/copy/paste/move/delete/connect) with bounded undo/redo,
//! rejects illegal cycles before they happen, and computes structural diffs between
//! flow versions.
//!
//! ## Core Workflow
//!
//! The engine stays independent of any rendering framework. It operates on a plain
//! `GraphDocument` wire form and threads all state explicitly. The primary workflow is:
//!
//! 1.  **Load or Seed**: Parse a persisted `GraphDocument` from JSON, or start from the
//!     seed document holding a single start node.
//! 2.  **Edit**: Drive a `GraphEditor` session through its command surface. Every command
//!     validates first, snapshots the pre-mutation state for undo, and returns the updated
//!     document instead of mutating hidden globals.
//! 3.  **Lay Out**: Call `relayout` (or the free `layout` function) to compute
//!     deterministic positions and rank-colored edge styling for the rendering layer.
//! 4.  **Compare and Draft**: Diff two documents into added/modified/removed/unchanged
//!     partitions, and capture debounced local drafts through the `draft` layer.
//!
//! ## Quick Start
//!
//! The following example builds a small decision flow end to end.
//!
//! ```rust,no_run
//! use ruleflow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Start from the seed document (a single start node with id "1").
//!     let mut editor = GraphEditor::new();
//!
//!     // Build a decision with a true and a false branch.
//!     let doc = editor.add_node(NodeKind::Decision, None);
//!     let decision = doc.nodes[1].id.clone();
//!     editor.add_node(NodeKind::Action, None);
//!     let doc = editor.add_node(NodeKind::Action, None);
//!     let approve = doc.nodes[2].id.clone();
//!     let reject = doc.nodes[3].id.clone();
//!
//!     editor.connect("1", &decision, None)?;
//!     editor.connect(&decision, &approve, Some("true"))?;
//!     editor.connect(&decision, &reject, Some("false"))?;
//!
//!     // Lay the flow out for display.
//!     let laid_out = editor.relayout(Direction::LeftRight);
//!     for node in &laid_out.nodes {
//!         println!("{} -> ({}, {})", node.id, node.position.x, node.position.y);
//!     }
//!
//!     // Compare against a previously saved version.
//!     let saved = GraphDocument::from_json(&std::fs::read_to_string("flow.json")?)?;
//!     let changes = diff(&saved, &laid_out);
//!     println!(
//!         "added {}, modified {}, removed {}",
//!         changes.added.len(),
//!         changes.modified.len(),
//!         changes.removed.len()
//!     );
//!
//!     Ok(())
//! }
//! ```

pub mod diff;
pub mod draft;
pub mod editor;
pub mod error;
pub mod graph;
pub mod layout;
pub mod prelude;
pub mod traverse;
