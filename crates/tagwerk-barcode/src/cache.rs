// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Memoised barcodes, keyed by exact input text.
//
// A sheet of price tags repeats the same few payloads many times; each is
// encoded once and shared.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tagwerk_core::error::Result;
use tracing::trace;

use crate::encoder::Code93Barcode;

/// Thread-safe cache of encoded barcodes.
///
/// Cloning is cheap and clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct BarcodeCache {
    entries: Arc<RwLock<HashMap<String, Arc<Code93Barcode>>>>,
}

impl BarcodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached barcode for `text`, encoding it on first use.
    ///
    /// Encoding errors are returned and nothing is cached for that text.
    pub fn get_or_encode(&self, text: &str) -> Result<Arc<Code93Barcode>> {
        // The map only ever holds finished, immutable barcodes, so a panic
        // in another holder cannot leave it half-updated.
        if let Some(hit) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(text)
        {
            trace!(text, "barcode cache hit");
            return Ok(Arc::clone(hit));
        }

        let barcode = Arc::new(Code93Barcode::encode(text)?);
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another caller may have encoded the same text meanwhile; keep theirs.
        let stored = entries
            .entry(text.to_owned())
            .or_insert_with(|| Arc::clone(&barcode));
        trace!(text, "barcode cache miss");
        Ok(Arc::clone(stored))
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
