//! The editing session: live graph state, bounded history, clipboard and
//! id allocation behind one command surface.
//!
//! Every command threads state explicitly: it validates, snapshots the
//! pre-mutation graph, mutates, and hands back the updated document. A
//! rejected command leaves graph and history untouched. The hosting layer
//! never reaches into ambient state; it applies what the commands return
//! (or reads the live [`nodes`](GraphEditor::nodes) /
//! [`edges`](GraphEditor::edges) when it needs transient flags such as
//! selection).

mod history;
mod ids;
mod naming;
mod ops;

pub use history::{HISTORY_LIMIT, History};
pub use ids::IdGenerator;
pub use naming::{generate_node_label, validate_node_label};
pub use ops::MoveDirection;

use crate::error::EditError;
use crate::graph::{Edge, GraphDocument, GraphSnapshot, Node, NodeKind, Position, Subgraph};
use crate::layout::{self, Direction};
use crate::traverse;

/// One interactive editing session over a rule-flow graph.
#[derive(Debug)]
pub struct GraphEditor {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    direction: Direction,
    history: History,
    clipboard: Option<Subgraph>,
    ids: IdGenerator,
}

impl GraphEditor {
    /// Starts a session on the seed document: a single start node.
    pub fn new() -> Self {
        Self::from_document(GraphDocument::seed())
    }

    /// Starts a session over an existing document.
    ///
    /// The graph is taken as-is; call [`relayout`](Self::relayout) to
    /// recompute positions for display.
    pub fn from_document(document: GraphDocument) -> Self {
        Self {
            nodes: document.nodes,
            edges: document.edges,
            direction: Direction::default(),
            history: History::new(),
            clipboard: None,
            ids: IdGenerator::new(),
        }
    }

    /// Live node state, including transient flags the document strips.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Live edge state, including styling and selection.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn has_clipboard(&self) -> bool {
        self.clipboard.is_some()
    }

    /// The current graph in its persisted wire form.
    pub fn document(&self) -> GraphDocument {
        GraphDocument::capture(&self.nodes, &self.edges)
    }

    fn snapshot(&mut self) {
        self.history
            .take_snapshot(GraphSnapshot::capture(&self.nodes, &self.edges));
    }

    fn apply_layout(&mut self) {
        let (nodes, edges) = layout::layout(&self.nodes, &self.edges, self.direction);
        self.nodes = nodes;
        self.edges = edges;
    }

    /// Adds a node of `kind` with a fresh id, a generated display name and
    /// the kind's default payload, at `position` or cascaded from the
    /// current node count.
    pub fn add_node(&mut self, kind: NodeKind, position: Option<Position>) -> GraphDocument {
        self.snapshot();
        let node = ops::spawn_node(&mut self.ids, &self.nodes, kind, position);
        self.nodes.push(node);
        self.document()
    }

    /// Removes a node and every edge touching it. Descendants stay until
    /// deleted separately; an unknown id leaves graph and history alone.
    pub fn delete_node(&mut self, node_id: &str) -> GraphDocument {
        if self.nodes.iter().any(|node| node.id == node_id) {
            self.snapshot();
            ops::delete_node(&mut self.nodes, &mut self.edges, node_id);
        }
        self.document()
    }

    /// Validates and appends a new connection from `source` to `target`.
    ///
    /// The cycle detector runs before anything is touched; on acceptance
    /// the edge gets a kind-derived label and rank styling.
    pub fn connect(
        &mut self,
        source: &str,
        target: &str,
        handle: Option<&str>,
    ) -> Result<GraphDocument, EditError> {
        let edge = ops::connect(&self.nodes, &self.edges, source, target, handle)?;
        self.snapshot();
        self.edges.push(edge);
        Ok(self.document())
    }

    /// Copies the subtree rooted at `node_id` to the clipboard. Returns
    /// whether anything was copied.
    pub fn copy(&mut self, node_id: &str) -> bool {
        let subtree = traverse::descendants(node_id, &self.nodes, &self.edges);
        if subtree.is_empty() {
            return false;
        }
        self.clipboard = Some(subtree);
        true
    }

    /// Pastes the clipboard with fresh ids, offset to `position` when the
    /// host supplies a drop point. Without a prior copy this is a no-op.
    pub fn paste(&mut self, position: Option<Position>) -> GraphDocument {
        let Some(clipboard) = self.clipboard.clone() else {
            return self.document();
        };
        self.snapshot();
        let (nodes, edges) = ops::paste_subgraph(&clipboard, &mut self.ids, position);
        self.nodes.extend(nodes);
        self.edges.extend(edges);
        self.document()
    }

    /// Swaps a node with its neighboring sibling branch and re-lays the
    /// graph out so the visual order follows the new edge order.
    pub fn move_sibling(
        &mut self,
        node_id: &str,
        direction: MoveDirection,
    ) -> Result<GraphDocument, EditError> {
        let before = GraphSnapshot::capture(&self.nodes, &self.edges);
        ops::move_sibling(&self.nodes, &mut self.edges, node_id, direction)?;
        self.history.take_snapshot(before);
        self.apply_layout();
        Ok(self.document())
    }

    /// Renames a node after validating the candidate label.
    pub fn rename_node(&mut self, node_id: &str, label: &str) -> Result<GraphDocument, EditError> {
        naming::validate_node_label(&self.nodes, node_id, label)?;
        self.snapshot();
        let trimmed = label.trim().to_string();
        if let Some(node) = self.nodes.iter_mut().find(|node| node.id == node_id) {
            node.data.label = trimmed;
        }
        Ok(self.document())
    }

    /// Steps back to the previous snapshot; `None` when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> Option<GraphDocument> {
        let current = GraphSnapshot::capture(&self.nodes, &self.edges);
        let previous = self.history.undo(current)?;
        self.nodes = previous.nodes;
        self.edges = previous.edges;
        Some(self.document())
    }

    /// Steps forward again after an undo; `None` when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> Option<GraphDocument> {
        let current = GraphSnapshot::capture(&self.nodes, &self.edges);
        let next = self.history.redo(current)?;
        self.nodes = next.nodes;
        self.edges = next.edges;
        Some(self.document())
    }

    /// Recomputes every position in `direction`. Layout is derived state,
    /// so this does not touch history.
    pub fn relayout(&mut self, direction: Direction) -> GraphDocument {
        self.direction = direction;
        self.apply_layout();
        self.document()
    }

    /// Marks `root_id` and its descendants selected (and the edges used to
    /// reach them), clearing the flag elsewhere. Read the result from
    /// [`nodes`](Self::nodes) / [`edges`](Self::edges); the persisted
    /// document never carries selection.
    pub fn select_descendants(&mut self, root_id: &str) {
        ops::select_descendants(&mut self.nodes, &mut self.edges, root_id);
    }
}

impl Default for GraphEditor {
    fn default() -> Self {
        Self::new()
    }
}
