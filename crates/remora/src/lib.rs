#![forbid(unsafe_code)]

//! `remora` renders workflow-chart JSON (nodes with positions/types/labels,
//! edges with endpoints/labels) into a laid-out SVG diagram, headlessly.
//!
//! The graph itself comes from an upstream collaborator (typically a generative
//! model); this crate owns everything after that hand-off: validation into a
//! typed snapshot, text wrapping, per-node shapes, edge routing and scene
//! composition.

pub use remora_core::*;

pub mod render {
    pub use remora_render::model::{EdgeSegment, Scene, SceneNode, Shape, TextLine};
    pub use remora_render::text::{HeuristicTextMeasurer, TextMeasurer};
    pub use remora_render::{SvgRenderOptions, compose_scene, render_scene_svg};
}

pub use render::SvgRenderOptions;

/// Parses, composes and renders one workflow snapshot in a single call.
///
/// Fails only at the JSON boundary; a valid snapshot always renders (dangling
/// edges are dropped, never fatal).
pub fn render_workflow_svg(json: &str, options: &SvgRenderOptions) -> Result<String> {
    let data = parse_workflow(json)?;
    Ok(remora_render::render_workflow_svg(&data, options))
}

/// Converts an arbitrary string into a conservative SVG `id` token suitable for
/// embedding multiple rendered diagrams in the same document.
///
/// The root id is used as a prefix for marker ids under `<defs>`; inlining two
/// SVGs with the same id makes those internal ids collide.
///
/// This helper:
/// - trims whitespace
/// - replaces unsupported characters with `-`
/// - ensures the id starts with an ASCII letter by prefixing `wf-` when needed
pub fn sanitize_svg_id(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "wf-untitled".to_string();
    }

    let mut out = String::with_capacity(raw.len() + 4);
    for ch in raw.chars() {
        let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':' || ch == '.';
        out.push(if ok { ch } else { '-' });
    }

    let starts_ok = out.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_ok {
        out.insert_str(0, "wf-");
    }

    while out.contains("--") {
        out = out.replace("--", "-");
    }
    let out = out.trim_matches('-');
    if out.is_empty() || out == "wf" {
        return "wf-untitled".to_string();
    }
    out.to_string()
}
