//! Label wrapping.
//!
//! Widths are decided by a [`TextMeasurer`] so the fixed pixels-per-character
//! heuristic can later be swapped for real glyph measurement without touching
//! scene composition.

use crate::model::TextLine;

/// Fixed per-line advance used for block-centering wrapped labels.
pub const LINE_HEIGHT_PX: f64 = 16.0;

pub trait TextMeasurer {
    /// True when `line` fits within `width_px` of horizontal space.
    fn line_fits(&self, line: &str, width_px: f64) -> bool;
}

/// Approximates glyph advances with a fixed average character width. Not a real
/// measurement; the chosen font averages out near 7px per glyph.
#[derive(Debug, Clone)]
pub struct HeuristicTextMeasurer {
    pub px_per_char: f64,
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self { px_per_char: 7.0 }
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn line_fits(&self, line: &str, width_px: f64) -> bool {
        line.chars().count() as f64 <= width_px / self.px_per_char
    }
}

/// Greedy word wrap of `label` into the horizontal space `width_px`.
///
/// Joining the output with single spaces reproduces the whitespace-delimited
/// token sequence of `label`. A single token wider than the available space is
/// emitted whole on its own line; letting it overflow is an accepted visual
/// limitation, not an error.
pub fn wrap_label(label: &str, width_px: f64, measurer: &dyn TextMeasurer) -> Vec<String> {
    let mut words = label.split_whitespace();
    let Some(first) = words.next() else {
        return vec![String::new()];
    };

    let mut lines: Vec<String> = Vec::new();
    let mut cur = first.to_string();
    for word in words {
        let candidate = format!("{cur} {word}");
        if measurer.line_fits(&candidate, width_px) {
            cur = candidate;
        } else {
            lines.push(std::mem::replace(&mut cur, word.to_string()));
        }
    }
    lines.push(cur);
    lines
}

/// Centers `lines` as a block around the node's vertical center, assigning each
/// line its offset at the fixed [`LINE_HEIGHT_PX`] advance.
pub fn stack_lines(lines: Vec<String>) -> Vec<TextLine> {
    let total = lines.len() as f64 * LINE_HEIGHT_PX;
    let start = -total / 2.0 + LINE_HEIGHT_PX / 2.0;
    lines
        .into_iter()
        .enumerate()
        .map(|(idx, text)| TextLine {
            text,
            dy: start + idx as f64 * LINE_HEIGHT_PX,
        })
        .collect()
}
