// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Run-length reduction and bar geometry.
//
// Modules are grouped into maximal bar/space runs, then scaled so the whole
// sequence spans the requested width. Spaces draw nothing but still move the
// cursor.

use serde::Serialize;
use tagwerk_core::error::{Result, TagwerkError};

use crate::encoder::ModuleBits;

/// A maximal span of identical modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Run {
    /// `true` for a bar, `false` for a space.
    pub fill: bool,
    /// Length in modules, at least 1.
    pub width: usize,
}

/// Split `bits` into alternating bar/space runs, left to right.
pub fn runs(bits: &ModuleBits) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for bar in bits.iter() {
        match runs.last_mut() {
            Some(run) if run.fill == bar => run.width += 1,
            _ => runs.push(Run {
                fill: bar,
                width: 1,
            }),
        }
    }
    runs
}

/// Axis-aligned rectangle in canvas units, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bars of a barcode laid out on a canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geometry {
    /// `width + 2 * padding`.
    pub canvas_width: f64,
    /// `height + 2 * padding`.
    pub canvas_height: f64,
    /// One rectangle per bar run, left to right.
    pub bars: Vec<Rect>,
}

impl Geometry {
    /// Scale `runs` so they span `width`, offset by `padding` on every side.
    ///
    /// Rejects non-positive or non-finite `width`/`height`, negative or
    /// non-finite `padding`, and an empty run list.
    pub fn layout(runs: &[Run], width: f64, height: f64, padding: f64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(TagwerkError::InvalidGeometryRequest(format!(
                "width must be positive, got {width}"
            )));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(TagwerkError::InvalidGeometryRequest(format!(
                "height must be positive, got {height}"
            )));
        }
        if !(padding.is_finite() && padding >= 0.0) {
            return Err(TagwerkError::InvalidGeometryRequest(format!(
                "padding must be zero or positive, got {padding}"
            )));
        }

        let total_modules: usize = runs.iter().map(|run| run.width).sum();
        if total_modules == 0 {
            return Err(TagwerkError::InvalidGeometryRequest(
                "nothing to lay out".into(),
            ));
        }

        let module_width = width / total_modules as f64;
        let mut x = padding;
        let mut bars = Vec::with_capacity(runs.len() / 2 + 1);
        for run in runs {
            let run_width = run.width as f64 * module_width;
            if run.fill {
                bars.push(Rect {
                    x,
                    y: padding,
                    width: run_width,
                    height,
                });
            }
            x += run_width;
        }

        Ok(Self {
            canvas_width: width + 2.0 * padding,
            canvas_height: height + 2.0 * padding,
            bars,
        })
    }
}
