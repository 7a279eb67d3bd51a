use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stroke color applied to rank 1 (true / main path) edges.
pub const RANK_SUCCESS_COLOR: &str = "#52c41a";
/// Stroke color applied to rank 2 (false) edges.
pub const RANK_FAILURE_COLOR: &str = "#ff4d4f";
/// Stroke color applied to rank 3 (named cases, continuations) edges.
pub const RANK_NEUTRAL_COLOR: &str = "#b1b1b7";

const EDGE_STROKE_WIDTH: f64 = 2.0;
const ARROW_CLOSED: &str = "arrowclosed";

/// The kind of a flow node, matching the designer's wire tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Start,
    Decision,
    Action,
    Script,
    Loop,
    Switch,
    DecisionTable,
    Subflow,
    /// Tag carried by documents written by a newer or foreign editor.
    #[serde(other)]
    Unknown,
}

impl NodeKind {
    /// Human-readable prefix used when generating default node labels.
    pub fn display_prefix(&self) -> &'static str {
        match self {
            NodeKind::Start => "Start",
            NodeKind::Decision => "Decision",
            NodeKind::Action => "Action",
            NodeKind::Script => "Script",
            NodeKind::Loop => "Loop",
            NodeKind::Switch => "Switch",
            NodeKind::DecisionTable => "Decision Table",
            NodeKind::Subflow => "Subflow",
            NodeKind::Unknown => "Node",
        }
    }

    /// Default payload fields for a freshly created node of this kind.
    pub fn default_payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        match self {
            NodeKind::Decision => {
                payload.insert("conditions".to_string(), Value::Array(vec![]));
            }
            NodeKind::Action => {
                payload.insert("actions".to_string(), Value::Array(vec![]));
            }
            NodeKind::Script => {
                payload.insert("scriptType".to_string(), Value::String("GROOVY".into()));
                payload.insert("scriptContent".to_string(), Value::String(String::new()));
            }
            NodeKind::Loop => {
                payload.insert(
                    "collectionVariable".to_string(),
                    Value::String(String::new()),
                );
            }
            NodeKind::Switch => {
                payload.insert("parameter".to_string(), Value::String(String::new()));
                payload.insert("cases".to_string(), Value::Array(vec![]));
            }
            NodeKind::DecisionTable => {
                payload.insert("branches".to_string(), Value::Array(vec![]));
            }
            NodeKind::Subflow => {
                payload.insert("packageCode".to_string(), Value::String(String::new()));
            }
            NodeKind::Start | NodeKind::Unknown => {}
        }
        payload
    }
}

/// A point in canvas coordinates (top-left anchored).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Node payload: a display label plus kind-specific fields.
///
/// The extra fields are opaque to the engine beyond size estimation for
/// layout and transient-field stripping for diffing. They never contain
/// executable callbacks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default)]
    pub label: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NodeData {
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            extra: Map::new(),
        }
    }
}

/// A single node of the rule flow graph.
///
/// `width`, `height` and `selected` are editor-session state: the measured
/// size reported by the rendering layer and the drag-selection flag. They are
/// stripped from persisted documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub selected: bool,
}

impl Node {
    /// Creates a node with the kind's default payload and the given label.
    pub fn new(
        id: impl Into<String>,
        kind: NodeKind,
        label: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            data: NodeData {
                label: label.into(),
                extra: kind.default_payload(),
            },
            position,
            width: None,
            height: None,
            selected: false,
        }
    }
}

/// Stroke styling attached to an edge by the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub stroke: String,
    #[serde(rename = "strokeWidth")]
    pub stroke_width: f64,
}

/// Arrow terminator drawn at the target end of an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeMarker {
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
}

impl EdgeMarker {
    pub fn arrow(color: impl Into<String>) -> Self {
        Self {
            kind: ARROW_CLOSED.to_string(),
            color: color.into(),
        }
    }
}

/// A directed, optionally labeled edge between two nodes.
///
/// `style`, `marker_end` and `selected` are display state and are stripped
/// from persisted documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(
        rename = "sourceHandle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<EdgeStyle>,
    #[serde(rename = "markerEnd", default, skip_serializing_if = "Option::is_none")]
    pub marker_end: Option<EdgeMarker>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub selected: bool,
}

impl Edge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            source_handle: None,
            label: None,
            data: None,
            style: None,
            marker_end: None,
            selected: false,
        }
    }

    /// The branch rank of this edge: 1 for true/unlabeled, 2 for false,
    /// 3 for everything else (named cases, continuations).
    ///
    /// The label wins over the source handle; empty strings count as absent.
    pub fn branch_rank(&self) -> u8 {
        let discriminator = self
            .label
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.source_handle.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("");
        match discriminator.trim().to_lowercase().as_str() {
            "" | "true" => 1,
            "false" => 2,
            _ => 3,
        }
    }

    /// Stroke color for a branch rank.
    pub fn rank_color(rank: u8) -> &'static str {
        match rank {
            1 => RANK_SUCCESS_COLOR,
            2 => RANK_FAILURE_COLOR,
            _ => RANK_NEUTRAL_COLOR,
        }
    }

    /// Applies the rank-derived stroke color and arrow terminator.
    pub fn restyle_by_rank(&mut self) {
        let color = Self::rank_color(self.branch_rank());
        self.style = Some(EdgeStyle {
            stroke: color.to_string(),
            stroke_width: EDGE_STROKE_WIDTH,
        });
        self.marker_end = Some(EdgeMarker::arrow(color));
    }
}

/// A rooted slice of the graph: the unit of copy/paste and selection
/// propagation. The root is always the first node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subgraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Subgraph {
    pub fn root(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// An immutable copy of the full node/edge state, used as the unit of
/// undo/redo history.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    pub fn capture(nodes: &[Node], edges: &[Edge]) -> Self {
        Self {
            nodes: nodes.to_vec(),
            edges: edges.to_vec(),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
