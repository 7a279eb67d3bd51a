//! Passive data structures shared by every other component: nodes, edges,
//! subgraphs and the persisted graph document.

pub mod document;
pub mod model;

pub use document::{GraphDocument, START_NODE_ID};
pub use model::{
    Edge, EdgeMarker, EdgeStyle, GraphSnapshot, Node, NodeData, NodeKind, Position, Subgraph,
    RANK_FAILURE_COLOR, RANK_NEUTRAL_COLOR, RANK_SUCCESS_COLOR,
};
