use remora_core::{NodeType, WorkflowData, WorkflowEdge, WorkflowNode, parse_workflow};
use remora_render::model::Shape;
use remora_render::{HeuristicTextMeasurer, compose_scene};

fn node(id: &str, node_type: NodeType, x: f64, y: f64) -> WorkflowNode {
    WorkflowNode {
        id: id.to_string(),
        label: format!("{id} step"),
        x,
        y,
        node_type,
        width: 160.0,
        height: 70.0,
    }
}

fn edge(id: &str, source: &str, target: &str) -> WorkflowEdge {
    WorkflowEdge {
        id: id.to_string(),
        source_id: source.to_string(),
        target_id: target.to_string(),
        label: None,
    }
}

fn sample() -> WorkflowData {
    WorkflowData {
        nodes: vec![
            node("start", NodeType::Start, 600.0, 60.0),
            node("review", NodeType::Process, 600.0, 240.0),
            node("approve", NodeType::Decision, 600.0, 440.0),
            node("done", NodeType::End, 600.0, 680.0),
        ],
        edges: vec![
            edge("e1", "start", "review"),
            edge("e2", "review", "approve"),
            edge("e3", "approve", "done"),
        ],
        width: 1200.0,
        height: 800.0,
    }
}

#[test]
fn dangling_edges_are_omitted_from_the_scene() {
    let mut data = sample();
    data.edges[1].target_id = "nowhere".to_string();

    let scene = compose_scene(&data, &HeuristicTextMeasurer::default());
    assert_eq!(scene.edges.len(), 2);
    assert_eq!(scene.nodes.len(), 4);
    let ids: Vec<&str> = scene.edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["e1", "e3"]);
}

#[test]
fn composition_is_idempotent() {
    let data = sample();
    let measurer = HeuristicTextMeasurer::default();
    assert_eq!(compose_scene(&data, &measurer), compose_scene(&data, &measurer));
}

#[test]
fn empty_graph_composes_an_empty_scene() {
    let data = WorkflowData::empty(1200.0, 800.0);
    let scene = compose_scene(&data, &HeuristicTextMeasurer::default());
    assert!(scene.nodes.is_empty());
    assert!(scene.edges.is_empty());
    assert_eq!((scene.width, scene.height), (1200.0, 800.0));
}

#[test]
fn layers_keep_the_input_order() {
    let scene = compose_scene(&sample(), &HeuristicTextMeasurer::default());
    let node_ids: Vec<&str> = scene.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(node_ids, ["start", "review", "approve", "done"]);
    let edge_ids: Vec<&str> = scene.edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(edge_ids, ["e1", "e2", "e3"]);
}

#[test]
fn each_node_kind_gets_its_shape() {
    let scene = compose_scene(&sample(), &HeuristicTextMeasurer::default());
    assert!(matches!(
        scene.nodes[0].shape,
        Shape::RoundedRect { rx, height, .. } if rx == height / 2.0
    ));
    assert!(matches!(
        scene.nodes[1].shape,
        Shape::RoundedRect { rx, .. } if rx == 8.0
    ));
    assert!(matches!(scene.nodes[2].shape, Shape::Diamond { .. }));
}

#[test]
fn parsed_json_round_trips_into_a_scene() {
    let data = parse_workflow(
        r#"{
            "width": 1200, "height": 800,
            "nodes": [
                {"id": "kickoff", "label": "Client Kick-off", "x": 600, "y": 70,
                 "type": "start", "width": 140, "height": 50}
            ],
            "edges": []
        }"#,
    )
    .expect("parse ok");

    let scene = compose_scene(&data, &HeuristicTextMeasurer::default());
    // 140 - 20 of padding leaves a 120px wrap width; the 15-char label stays on one line.
    assert_eq!(scene.nodes[0].lines.len(), 1);
    assert_eq!(scene.nodes[0].lines[0].text, "Client Kick-off");
    assert_eq!(scene.nodes[0].lines[0].dy, 0.0);
}
