// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sheet module — expanding tag groups and paginating labels.

pub mod layout;

pub use layout::{LabelSheet, SheetLabel, SheetSummary};
