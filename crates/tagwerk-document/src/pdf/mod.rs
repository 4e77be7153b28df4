// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — label sheets as vector PDF.

pub mod color;
pub mod writer;

pub use writer::LabelSheetWriter;
