//! Scene composition.

use remora_core::WorkflowData;

use crate::edge::{nodes_by_id, route_edge};
use crate::model::{Scene, SceneNode};
use crate::shape::{label_wrap_width, node_shape};
use crate::text::{TextMeasurer, stack_lines, wrap_label};

/// Composes the render-ready scene for one workflow snapshot.
///
/// Edges are routed first and stay beneath the nodes layer; both layers keep the
/// input order. Dangling edges contribute nothing. The composition is a pure
/// function of its input: equal snapshots yield equal scenes.
pub fn compose_scene(data: &WorkflowData, measurer: &dyn TextMeasurer) -> Scene {
    let lookup = nodes_by_id(&data.nodes);

    let edges = data
        .edges
        .iter()
        .filter_map(|edge| route_edge(edge, &lookup))
        .collect();

    let nodes = data
        .nodes
        .iter()
        .map(|node| SceneNode {
            id: node.id.clone(),
            x: node.x,
            y: node.y,
            node_type: node.node_type,
            shape: node_shape(node.node_type, node.width, node.height),
            lines: stack_lines(wrap_label(&node.label, label_wrap_width(node), measurer)),
        })
        .collect();

    Scene {
        width: data.width,
        height: data.height,
        edges,
        nodes,
    }
}
