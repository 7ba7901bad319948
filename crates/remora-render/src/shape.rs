//! Per-node outline geometry and style classification.

use remora_core::{NodeType, WorkflowNode};

use crate::model::{NodeStyle, Point, Shape};

const PROCESS_CORNER_RADIUS: f64 = 8.0;

/// Horizontal padding subtracted from the node width before wrapping its label.
pub const LABEL_PADDING_PX: f64 = 20.0;

/// Builds the closed outline for one node kind, in node-relative coordinates.
///
/// The match is exhaustive over [`NodeType`]; there is deliberately no fallback
/// arm, an unknown kind cannot exist past the data-model boundary.
pub fn node_shape(node_type: NodeType, width: f64, height: f64) -> Shape {
    match node_type {
        NodeType::Start | NodeType::End => Shape::RoundedRect {
            width,
            height,
            rx: height / 2.0,
        },
        NodeType::Process => Shape::RoundedRect {
            width,
            height,
            rx: PROCESS_CORNER_RADIUS,
        },
        NodeType::Decision => Shape::Diamond {
            points: diamond_points(width, height),
        },
    }
}

/// Top, right, bottom, left corners of the decision diamond. The upstream
/// generator keeps `width == height` so the diamond reads as symmetric.
fn diamond_points(width: f64, height: f64) -> [Point; 4] {
    [
        Point {
            x: 0.0,
            y: -height / 2.0,
        },
        Point {
            x: width / 2.0,
            y: 0.0,
        },
        Point {
            x: 0.0,
            y: height / 2.0,
        },
        Point {
            x: -width / 2.0,
            y: 0.0,
        },
    ]
}

/// Fixed fill/stroke/text triple per node kind (Tailwind 100/500/800 values).
pub fn node_style(node_type: NodeType) -> NodeStyle {
    match node_type {
        NodeType::Start => NodeStyle {
            fill: "#dcfce7",
            stroke: "#22c55e",
            text: "#166534",
        },
        NodeType::End => NodeStyle {
            fill: "#fee2e2",
            stroke: "#ef4444",
            text: "#991b1b",
        },
        NodeType::Process => NodeStyle {
            fill: "#dbeafe",
            stroke: "#3b82f6",
            text: "#1e40af",
        },
        NodeType::Decision => NodeStyle {
            fill: "#fef9c3",
            stroke: "#eab308",
            text: "#854d0e",
        },
    }
}

/// Usable wrap width inside a node's outline.
pub fn label_wrap_width(node: &WorkflowNode) -> f64 {
    node.width - LABEL_PADDING_PX
}
