// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Tagwerk.

use thiserror::Error;

/// Top-level error type for all Tagwerk operations.
#[derive(Debug, Error)]
pub enum TagwerkError {
    // -- Barcode errors --
    #[error("empty input: a barcode needs at least one character")]
    EmptyInput,

    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("unknown Code93 symbol: {0}")]
    UnknownSymbol(String),

    #[error("invalid geometry request: {0}")]
    InvalidGeometryRequest(String),

    #[error("invalid colour {0:?}: expected #rgb or #rrggbb")]
    InvalidColor(String),

    // -- Label sheet errors --
    #[error("unknown label template: {0}")]
    UnknownTemplate(String),

    #[error("invalid tag group: {0}")]
    InvalidTagGroup(String),

    #[error("no consigner ID set")]
    MissingConsigner,

    #[error("PDF operation failed: {0}")]
    PdfError(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TagwerkError>;
