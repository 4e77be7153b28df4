// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// tagwerk-document — Printable price-tag sheets.
//
// Expands tag groups into labels, paginates them onto a label template, and
// writes the result as a PDF ready for the printer.

pub mod pdf;
pub mod sheet;

// Re-export the primary structs so callers can use `tagwerk_document::LabelSheet` etc.
pub use pdf::writer::LabelSheetWriter;
pub use sheet::layout::{LabelSheet, SheetLabel, SheetSummary};
