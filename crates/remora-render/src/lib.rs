#![forbid(unsafe_code)]

//! Headless scene composition + SVG renderer for workflow charts.
//!
//! The render path is a pure transform: one [`remora_core::WorkflowData`]
//! snapshot in, one [`model::Scene`] (and optionally its SVG text) out. No I/O,
//! no shared state, nothing retained between calls.

pub mod edge;
pub mod model;
pub mod scene;
pub mod shape;
pub mod svg;
pub mod text;

pub use model::Scene;
pub use scene::compose_scene;
pub use svg::{SvgRenderOptions, render_scene_svg};
pub use text::{HeuristicTextMeasurer, TextMeasurer};

/// Composes and renders in one call using the default heuristic text measurer.
pub fn render_workflow_svg(
    data: &remora_core::WorkflowData,
    options: &SvgRenderOptions,
) -> String {
    let scene = compose_scene(data, &HeuristicTextMeasurer::default());
    render_scene_svg(&scene, options)
}
