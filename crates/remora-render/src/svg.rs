//! SVG emission for a composed [`Scene`].

use remora_core::NodeType;
use std::fmt::Write as _;

use crate::model::{EdgeSegment, Scene, SceneNode, Shape};
use crate::shape::node_style;

const EDGE_STROKE: &str = "#6b7280";
const EDGE_LABEL_FILL: &str = "#374151";

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Optional id used to prefix internal marker ids so several rendered
    /// diagrams can be inlined into the same document without collisions.
    pub diagram_id: Option<String>,
    /// When true, emit edge label text elements.
    pub include_edge_labels: bool,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            diagram_id: None,
            include_edge_labels: true,
        }
    }
}

/// Renders a scene to a standalone SVG document.
///
/// Layer order is fixed: the arrowhead marker defs, then the edges group, then
/// the nodes group, so connectors never occlude node shapes. Every node and edge
/// carries its id in a `data-id` attribute for rendering-surface reconciliation.
pub fn render_scene_svg(scene: &Scene, options: &SvgRenderOptions) -> String {
    let marker_id = match options.diagram_id.as_deref() {
        Some(id) => format!("{id}-arrowhead"),
        None => "arrowhead".to_string(),
    };

    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid meet">"#,
        fmt(scene.width.max(1.0)),
        fmt(scene.height.max(1.0))
    );

    out.push_str("<style>\n");
    let _ = writeln!(
        &mut out,
        ".edge {{ fill: none; stroke: {EDGE_STROKE}; stroke-width: 2; }}"
    );
    let _ = writeln!(
        &mut out,
        ".edge-label {{ fill: {EDGE_LABEL_FILL}; font-family: ui-sans-serif, system-ui, sans-serif; font-size: 12px; font-weight: 600; text-anchor: middle; }}"
    );
    out.push_str(
        ".node-label { font-family: ui-sans-serif, system-ui, sans-serif; font-size: 14px; font-weight: 500; text-anchor: middle; dominant-baseline: middle; }\n",
    );
    for kind in [
        NodeType::Start,
        NodeType::End,
        NodeType::Process,
        NodeType::Decision,
    ] {
        let style = node_style(kind);
        let class = type_class(kind);
        let _ = writeln!(
            &mut out,
            ".{class} .node-shape {{ fill: {}; stroke: {}; stroke-width: 2; }}",
            style.fill, style.stroke
        );
        let _ = writeln!(
            &mut out,
            ".{class} .node-label {{ fill: {}; }}",
            style.text
        );
    }
    out.push_str("</style>\n");

    let _ = writeln!(
        &mut out,
        r#"<defs><marker id="{}" viewBox="0 0 10 10" refX="9" refY="5" markerWidth="6" markerHeight="6" orient="auto-start-reverse"><path d="M 0 0 L 10 5 L 0 10 z" fill="{EDGE_STROKE}"/></marker></defs>"#,
        escape_attr(&marker_id)
    );

    out.push_str(r#"<g class="edges">"#);
    out.push('\n');
    for edge in &scene.edges {
        render_edge(&mut out, edge, &marker_id, options.include_edge_labels);
    }
    out.push_str("</g>\n");

    out.push_str(r#"<g class="nodes">"#);
    out.push('\n');
    for node in &scene.nodes {
        render_node(&mut out, node);
    }
    out.push_str("</g>\n");

    out.push_str("</svg>\n");
    out
}

fn render_edge(out: &mut String, edge: &EdgeSegment, marker_id: &str, include_labels: bool) {
    let _ = write!(
        out,
        r#"<g data-id="{}"><path class="edge" d="M{},{} L{},{}" marker-end="url(#{})"/>"#,
        escape_attr(&edge.id),
        fmt(edge.x1),
        fmt(edge.y1),
        fmt(edge.x2),
        fmt(edge.y2),
        escape_attr(marker_id)
    );
    if include_labels {
        if let Some(label) = &edge.label {
            let _ = write!(
                out,
                r#"<text class="edge-label" x="{}" y="{}">{}</text>"#,
                fmt(label.x),
                fmt(label.y),
                escape_xml(&label.text)
            );
        }
    }
    out.push_str("</g>\n");
}

fn render_node(out: &mut String, node: &SceneNode) {
    let _ = write!(
        out,
        r#"<g class="node {}" data-id="{}" transform="translate({}, {})">"#,
        type_class(node.node_type),
        escape_attr(&node.id),
        fmt(node.x),
        fmt(node.y)
    );

    match &node.shape {
        Shape::RoundedRect { width, height, rx } => {
            let _ = write!(
                out,
                r#"<rect class="node-shape" x="{}" y="{}" width="{}" height="{}" rx="{}"/>"#,
                fmt(-width / 2.0),
                fmt(-height / 2.0),
                fmt(*width),
                fmt(*height),
                fmt(*rx)
            );
        }
        Shape::Diamond { points } => {
            let mut d = String::new();
            for (idx, p) in points.iter().enumerate() {
                let cmd = if idx == 0 { 'M' } else { 'L' };
                let _ = write!(&mut d, "{cmd} {} {} ", fmt(p.x), fmt(p.y));
            }
            d.push('Z');
            let _ = write!(out, r#"<path class="node-shape" d="{}"/>"#, escape_attr(&d));
        }
    }

    out.push_str(r#"<text class="node-label">"#);
    for line in &node.lines {
        let _ = write!(
            out,
            r#"<tspan x="0" y="{}">{}</tspan>"#,
            fmt(line.dy),
            escape_xml(&line.text)
        );
    }
    out.push_str("</text></g>\n");
}

fn type_class(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Start => "node-start",
        NodeType::End => "node-end",
        NodeType::Process => "node-process",
        NodeType::Decision => "node-decision",
    }
}

/// Stringifies a coordinate the way browsers generally print SVG attribute
/// numbers: round-trippable decimal form, avoiding `-0` and tiny float noise.
pub(crate) fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let bytes = text.as_bytes();
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        let esc = match b {
            b'&' => Some("&amp;"),
            b'<' => Some("&lt;"),
            b'"' => Some("&quot;"),
            b'\'' => Some("&#39;"),
            _ => None,
        };
        let Some(esc) = esc else {
            continue;
        };
        if start < i {
            out.push_str(&text[start..i]);
        }
        out.push_str(esc);
        start = i + 1;
    }
    if start < text.len() {
        out.push_str(&text[start..]);
    }
    out
}

pub(crate) fn escape_attr(text: &str) -> String {
    // Attributes only need escaped XML here; no URL encoding.
    escape_xml(text)
}
