// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Services backing the CLI: settings persistence and data directory lookup.

pub mod data_dir;
pub mod settings;
