use serde::{Deserialize, Serialize};

/// Canvas width the upstream generator is instructed to target.
pub const CANVAS_WIDTH: f64 = 1200.0;
/// Canvas height the upstream generator is instructed to target.
pub const CANVAS_HEIGHT: f64 = 800.0;

/// The closed set of node kinds.
///
/// Shape and color rules are keyed off this enum with exhaustive matches; a fifth
/// kind cannot reach the renderer because it is unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Start,
    End,
    Process,
    Decision,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    /// Unique within one [`WorkflowData`].
    pub id: String,
    pub label: String,
    /// Center position in canvas units.
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowEdge {
    pub id: String,
    /// May dangle; a dangling endpoint drops the edge from the scene, it is not an error.
    pub source_id: String,
    pub target_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// One immutable workflow snapshot: the renderer's entire input.
///
/// Produced whole by the upstream generation collaborator and replaced whole on the
/// next request; nothing mutates it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowData {
    pub nodes: Vec<WorkflowNode>,
    pub edges: Vec<WorkflowEdge>,
    pub width: f64,
    pub height: f64,
}

impl WorkflowData {
    pub fn empty(width: f64, height: f64) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            width,
            height,
        }
    }
}
