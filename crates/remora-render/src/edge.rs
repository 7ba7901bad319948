//! Straight-line edge routing.

use remora_core::{WorkflowEdge, WorkflowNode};
use rustc_hash::FxHashMap;

use crate::model::{EdgeLabel, EdgeSegment};

/// Vertical lift of an edge label off the segment midpoint.
const LABEL_OFFSET_PX: f64 = 8.0;

/// Routes one edge against the resolved node set.
///
/// Returns `None` when either endpoint id is unresolved; a dangling reference is
/// an expected inconsistency from the upstream generator and drops the edge from
/// the scene silently. Routing is pure center-to-center; no clipping to the node
/// outline and no avoidance of other nodes or edges.
pub fn route_edge(
    edge: &WorkflowEdge,
    nodes_by_id: &FxHashMap<&str, &WorkflowNode>,
) -> Option<EdgeSegment> {
    let Some(source) = nodes_by_id.get(edge.source_id.as_str()) else {
        tracing::debug!(edge = %edge.id, source = %edge.source_id, "dropping edge with dangling source");
        return None;
    };
    let Some(target) = nodes_by_id.get(edge.target_id.as_str()) else {
        tracing::debug!(edge = %edge.id, target = %edge.target_id, "dropping edge with dangling target");
        return None;
    };

    let label = edge.label.as_ref().map(|text| EdgeLabel {
        text: text.clone(),
        x: (source.x + target.x) / 2.0,
        y: (source.y + target.y) / 2.0 - LABEL_OFFSET_PX,
    });

    Some(EdgeSegment {
        id: edge.id.clone(),
        x1: source.x,
        y1: source.y,
        x2: target.x,
        y2: target.y,
        label,
    })
}

pub fn nodes_by_id<'a>(nodes: &'a [WorkflowNode]) -> FxHashMap<&'a str, &'a WorkflowNode> {
    nodes.iter().map(|n| (n.id.as_str(), n)).collect()
}
