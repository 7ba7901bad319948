use remora_core::NodeType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Closed outline geometry for one node, in node-relative coordinates
/// (origin at the node center).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Shape {
    /// Rounded rectangle; `rx == height / 2` makes it a pill.
    RoundedRect {
        width: f64,
        height: f64,
        rx: f64,
    },
    /// Four points: top, right, bottom, left.
    Diamond { points: [Point; 4] },
}

/// Fill/stroke/text color triple tied to a [`NodeType`]; purely visual
/// classification, never consulted by layout logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub text: &'static str,
}

/// One wrapped label line with its vertical offset from the node center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub dy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub node_type: NodeType,
    pub shape: Shape,
    pub lines: Vec<TextLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// A routed edge: a straight segment between two node centers, arrowhead at
/// the target end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSegment {
    pub id: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<EdgeLabel>,
}

/// The fully composed, render-ready scene for one workflow snapshot.
///
/// `edges` is composed before `nodes` and stays visually beneath it; both keep
/// the input order. Node and edge ids are stable across re-compositions of the
/// same logical graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub edges: Vec<EdgeSegment>,
    pub nodes: Vec<SceneNode>,
}
