#![forbid(unsafe_code)]

//! Workflow-chart data model + JSON boundary (headless).
//!
//! Design goals:
//! - one immutable [`WorkflowData`] snapshot per generation request, never mutated
//! - a typed, closed data model (no out-of-enum node kinds past this boundary)
//! - boundary validation that is deliberately shallow: presence of `nodes` and
//!   `edges` only, matching what the upstream generator is contracted to produce

use serde::Deserialize as _;

pub mod error;
pub mod model;
pub mod session;

pub use error::{Error, Result};
pub use model::{CANVAS_HEIGHT, CANVAS_WIDTH, NodeType, WorkflowData, WorkflowEdge, WorkflowNode};
pub use session::{GenerationSession, RequestToken};

/// Parses one workflow snapshot from its JSON interchange form.
///
/// Failures are logged with their underlying cause; callers are expected to show a
/// generic failure state, never a partial scene.
pub fn parse_workflow(text: &str) -> Result<WorkflowData> {
    let value: serde_json::Value = serde_json::from_str(text).inspect_err(|err| {
        tracing::warn!(error = %err, "workflow JSON did not parse");
    })?;
    workflow_from_value(&value)
}

/// Validates and deserializes an already-parsed JSON value.
///
/// Structural validation checks only that `nodes` and `edges` are present; malformed
/// individual entries surface through typed deserialization instead (the closed
/// [`model::NodeType`] enum is the real data-model boundary).
pub fn workflow_from_value(value: &serde_json::Value) -> Result<WorkflowData> {
    if !value.is_object() {
        tracing::warn!("workflow JSON is not an object");
        return Err(Error::NotAnObject);
    }
    for field in ["nodes", "edges"] {
        let present = value.get(field).is_some_and(|v| !v.is_null());
        if !present {
            tracing::warn!(field, "workflow JSON is missing a required collection");
            return Err(Error::MissingCollection { field });
        }
    }

    WorkflowData::deserialize(value).map_err(|err| {
        tracing::warn!(error = %err, "workflow JSON did not match the data model");
        Error::Json(err)
    })
}
