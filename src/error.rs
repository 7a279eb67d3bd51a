use crate::editor::MoveDirection;
use thiserror::Error;

/// Errors that can occur while editing a flow graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("Node '{node_id}' was not found in the current graph")]
    NodeNotFound { node_id: String },

    #[error("Node name cannot be empty")]
    EmptyName,

    #[error("Node name '{label}' is already used by node '{other_node_id}'")]
    DuplicateName {
        label: String,
        other_node_id: String,
    },

    #[error("The start node cannot be renamed")]
    StartNodeRename,

    #[error(
        "Connecting '{source}' to '{target}' would create a cycle, which is not allowed in a rule flow"
    )]
    CycleDetected { r#source: String, target: String },

    #[error("Node '{node_id}' has no parent branch and cannot be moved")]
    MoveWithoutParent { node_id: String },

    #[error("Node '{node_id}' is already at the {direction} end of its sibling group")]
    MoveAtBoundary {
        node_id: String,
        direction: MoveDirection,
    },
}

/// Errors that can occur when persisting or restoring the local draft cache.
#[derive(Error, Debug, Clone)]
pub enum DraftError {
    #[error("Failed to encode draft cache: {0}")]
    Encode(String),

    #[error("Failed to decode draft cache: {0}")]
    Decode(String),

    #[error("Draft cache file '{path}': {message}")]
    Io { path: String, message: String },
}
