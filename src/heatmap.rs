// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Text heatmaps and JSON reports for [`ExecutionTimeGrid`]s.
//!
//! # Text layout
//!
//! ```text
//! Execution Time of merge_sort Algorithm (ms)
//! Array size
//! 2001 | +     6.00 @    12.00
//!    1 |       0.00          -
//!      +----------------------
//!                 1         11
//!           Mixing Factor
//! ```
//!
//! Rows run from the largest size at the top down to the smallest, so the
//! origin sits in the lower-left corner. Each cell carries a shade glyph
//! scaled to the grid maximum followed by the time in milliseconds with two
//! decimals. Unmeasured cells print `-`.

use serde::Serialize;

use crate::algorithm::SortAlgorithm;
use crate::common::timing::{duration_to_millis, format_millis, fraction_of};
use crate::error::Result;
use crate::generator::ChunkLayout;
use crate::measure::ExecutionTimeGrid;

/// Shade glyphs from coolest to hottest.
const SHADES: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Width of the numeric part of a cell.
const VALUE_WIDTH: usize = 9;

/// Width of a full cell: glyph plus value.
const CELL_WIDTH: usize = VALUE_WIDTH + 1;

const Y_LABEL: &str = "Array size";
const X_LABEL: &str = "Mixing Factor";

fn shade_for(fraction: f64) -> char {
    let last = SHADES.len() - 1;
    let idx = (fraction * last as f64).round() as usize;
    SHADES[idx.min(last)]
}

/// Renders one grid as a text heatmap.
#[must_use]
pub fn render_heatmap(grid: &ExecutionTimeGrid) -> String {
    let mut out = format!("Execution Time of {} Algorithm (ms)\n", grid.algorithm());
    if grid.rows() == 0 || grid.cols() == 0 {
        out.push_str("(no cells)\n");
        return out;
    }

    let label_width = grid
        .sizes()
        .iter()
        .map(|s| s.to_string().len())
        .max()
        .unwrap_or(1);
    let max = grid.max().unwrap_or_default();

    out.push_str(Y_LABEL);
    out.push('\n');
    for row in (0..grid.rows()).rev() {
        out.push_str(&format!("{:>label_width$} |", grid.sizes()[row]));
        for cell in grid.row(row) {
            match cell {
                Some(elapsed) => {
                    let shade = shade_for(fraction_of(*elapsed, max));
                    out.push_str(&format!(
                        " {shade}{:>VALUE_WIDTH$}",
                        format_millis(*elapsed)
                    ));
                }
                None => out.push_str(&format!(" {:>CELL_WIDTH$}", "-")),
            }
        }
        out.push('\n');
    }

    let plot_width = grid.cols() * (CELL_WIDTH + 1);
    out.push_str(&format!(
        "{:label_width$} +{}\n",
        "",
        "-".repeat(plot_width)
    ));
    out.push_str(&format!("{:label_width$}  ", ""));
    for mf in grid.mixing_factors() {
        out.push_str(&format!(" {mf:>CELL_WIDTH$}"));
    }
    out.push('\n');
    let pad = label_width + 2 + plot_width.saturating_sub(X_LABEL.len()) / 2;
    out.push_str(&format!("{:pad$}{X_LABEL}\n", ""));
    out
}

/// Renders one panel per grid, separated by blank lines.
#[must_use]
pub fn render_panels(grids: &[ExecutionTimeGrid]) -> String {
    grids
        .iter()
        .map(render_heatmap)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serializable form of one [`ExecutionTimeGrid`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridReport {
    /// Algorithm that was timed.
    pub algorithm: SortAlgorithm,
    /// Row labels.
    pub sizes: Vec<usize>,
    /// Column labels.
    pub mixing_factors: Vec<usize>,
    /// `times_ms[row][col]` in milliseconds; `null` for unmeasured cells.
    pub times_ms: Vec<Vec<Option<f64>>>,
}

impl From<&ExecutionTimeGrid> for GridReport {
    fn from(grid: &ExecutionTimeGrid) -> Self {
        let times_ms = (0..grid.rows())
            .map(|row| {
                grid.row(row)
                    .iter()
                    .map(|cell| cell.map(duration_to_millis))
                    .collect()
            })
            .collect();
        Self {
            algorithm: grid.algorithm(),
            sizes: grid.sizes().to_vec(),
            mixing_factors: grid.mixing_factors().to_vec(),
            times_ms,
        }
    }
}

/// Everything needed to reproduce and read back a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepReport {
    /// Seed of the random source, if one was fixed.
    pub seed: Option<u64>,
    /// Generator chunking used for every cell.
    pub layout: ChunkLayout,
    /// One entry per algorithm, in sweep order.
    pub grids: Vec<GridReport>,
}

impl SweepReport {
    /// Builds a report from finished grids.
    #[must_use]
    pub fn new(seed: Option<u64>, layout: ChunkLayout, grids: &[ExecutionTimeGrid]) -> Self {
        Self {
            seed,
            layout,
            grids: grids.iter().map(GridReport::from).collect(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
