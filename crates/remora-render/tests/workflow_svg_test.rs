use remora_core::parse_workflow;
use remora_render::{HeuristicTextMeasurer, SvgRenderOptions, compose_scene, render_scene_svg};

const WORKFLOW_JSON: &str = r#"{
    "width": 1200, "height": 800,
    "nodes": [
        {"id": "start", "label": "Start", "x": 600, "y": 60,
         "type": "start", "width": 140, "height": 50},
        {"id": "check", "label": "Budget approved?", "x": 600, "y": 300,
         "type": "decision", "width": 150, "height": 150},
        {"id": "done", "label": "Done", "x": 600, "y": 560,
         "type": "end", "width": 140, "height": 50}
    ],
    "edges": [
        {"id": "e1", "sourceId": "start", "targetId": "check"},
        {"id": "e2", "sourceId": "check", "targetId": "done", "label": "Yes"},
        {"id": "e3", "sourceId": "check", "targetId": "missing", "label": "No"}
    ]
}"#;

fn render(options: &SvgRenderOptions) -> String {
    let data = parse_workflow(WORKFLOW_JSON).expect("parse ok");
    let scene = compose_scene(&data, &HeuristicTextMeasurer::default());
    render_scene_svg(&scene, options)
}

#[test]
fn edges_group_precedes_nodes_group() {
    let svg = render(&SvgRenderOptions::default());
    let edges_at = svg.find(r#"<g class="edges">"#).expect("edges group");
    let nodes_at = svg.find(r#"<g class="nodes">"#).expect("nodes group");
    assert!(edges_at < nodes_at, "edges must stay beneath nodes");
}

#[test]
fn viewbox_matches_the_declared_canvas() {
    let svg = render(&SvgRenderOptions::default());
    assert!(svg.contains(r#"viewBox="0 0 1200 800""#));
}

#[test]
fn dangling_edge_is_absent_and_labels_are_lifted() {
    let svg = render(&SvgRenderOptions::default());
    assert!(svg.contains(r#"data-id="e1""#));
    assert!(svg.contains(r#"data-id="e2""#));
    assert!(!svg.contains(r#"data-id="e3""#));
    // e2 midpoint is (600, 430); the label sits 8px above it.
    assert!(svg.contains(r#"<text class="edge-label" x="600" y="422">Yes</text>"#));
}

#[test]
fn decision_diamond_path_is_symmetric() {
    let svg = render(&SvgRenderOptions::default());
    assert!(svg.contains(r#"d="M 0 -75 L 75 0 L 0 75 L -75 0 Z""#));
}

#[test]
fn diagram_id_prefixes_the_marker() {
    let svg = render(&SvgRenderOptions {
        diagram_id: Some("wf-1".to_string()),
        ..SvgRenderOptions::default()
    });
    assert!(svg.contains(r#"<marker id="wf-1-arrowhead""#));
    assert!(svg.contains(r#"marker-end="url(#wf-1-arrowhead)""#));
}

#[test]
fn edge_labels_can_be_suppressed() {
    let svg = render(&SvgRenderOptions {
        include_edge_labels: false,
        ..SvgRenderOptions::default()
    });
    assert!(!svg.contains("edge-label\" x="));
    assert!(svg.contains(r#"data-id="e2""#));
}

#[test]
fn node_labels_are_escaped() {
    let data = parse_workflow(
        r#"{
            "width": 400, "height": 200,
            "nodes": [
                {"id": "q", "label": "a<b & c", "x": 200, "y": 100,
                 "type": "process", "width": 160, "height": 70}
            ],
            "edges": []
        }"#,
    )
    .expect("parse ok");
    let scene = compose_scene(&data, &HeuristicTextMeasurer::default());
    let svg = render_scene_svg(&scene, &SvgRenderOptions::default());
    assert!(svg.contains("a&lt;b &amp; c"));
}

#[test]
fn rendering_is_deterministic() {
    let options = SvgRenderOptions::default();
    assert_eq!(render(&options), render(&options));
}
