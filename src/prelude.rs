//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the ruleflow
//! crate. Import this module to get access to the core functionality without having to
//! import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use ruleflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a saved flow and lay it out for display
//! let json = std::fs::read_to_string("path/to/flow.json")?;
//! let document = GraphDocument::from_json(&json)?;
//!
//! let mut editor = GraphEditor::from_document(document);
//! let laid_out = editor.relayout(Direction::LeftRight);
//!
//! // Edit, then compare against the laid-out baseline
//! let updated = editor.add_node(NodeKind::Action, None);
//! let changes = diff(&laid_out, &updated);
//!
//! println!("{} nodes added", changes.added.len());
//! # Ok(())
//! # }
//! ```

// Editing session and commands
pub use crate::editor::{GraphEditor, MoveDirection};

// Graph model and documents
pub use crate::graph::{Edge, GraphDocument, Node, NodeKind, Position, START_NODE_ID, Subgraph};

// Layout
pub use crate::layout::{Direction, layout};

// Traversal
pub use crate::traverse::{descendants, would_create_cycle};

// Version comparison
pub use crate::diff::{DiffResult, VersionSnapshot, diff, render_rule_listing};

// Local drafts
pub use crate::draft::{DraftCache, DraftScheduler};

// Error types
pub use crate::error::{DraftError, EditError};

// Standard library re-exports commonly used with this crate
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
