// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Code93 pattern encoder.
//
// Layout: start, text symbols, C, K, stop, then a single termination bar.

use tagwerk_core::RenderOptions;
use tagwerk_core::error::{Result, TagwerkError};
use tracing::{debug, instrument};

use crate::checksum;
use crate::geometry::{self, Geometry, Run};
use crate::symbols::{self, START_STOP, SYMBOL_MODULES, Symbol};

/// Symbols framing the text: start, C, K, stop.
const FRAME_SYMBOLS: usize = 4;

/// The full module sequence of an encoded barcode. `true` is a bar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleBits(Vec<bool>);

impl ModuleBits {
    /// Total modules, `(text_len + 4) * 9 + 1`.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }
}

impl std::fmt::Display for ModuleBits {
    /// `1`/`0` string, one character per module.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &bar in &self.0 {
            f.write_str(if bar { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// An encoded Code93 barcode.
///
/// Immutable once built; rendering only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code93Barcode {
    text: String,
    check_c: &'static Symbol,
    check_k: &'static Symbol,
    bits: ModuleBits,
}

impl Code93Barcode {
    /// Encode `text`.
    ///
    /// Accepts only `[0-9A-Z\-. $/+%]+`. The first character outside that
    /// alphabet is reported with its 0-based position; nothing is produced.
    #[instrument(skip_all, fields(text_len = text.len()))]
    pub fn encode(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(TagwerkError::EmptyInput);
        }

        let symbols = parse_text(text)?;
        let (check_c, check_k) = checksum::check_pair(&symbols)?;

        let capacity = (symbols.len() + FRAME_SYMBOLS) * SYMBOL_MODULES + 1;
        let mut bits = Vec::with_capacity(capacity);
        bits.extend(START_STOP.modules());
        for symbol in &symbols {
            bits.extend(symbol.modules());
        }
        bits.extend(check_c.modules());
        bits.extend(check_k.modules());
        bits.extend(START_STOP.modules());
        bits.push(true);

        debug!(
            check_c = check_c.name,
            check_k = check_k.name,
            modules = bits.len(),
            "Encoded Code93 barcode"
        );

        Ok(Self {
            text: text.to_owned(),
            check_c,
            check_k,
            bits: ModuleBits(bits),
        })
    }

    /// The encoded text, without check characters.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The check characters `(C, K)`.
    pub fn check_symbols(&self) -> (&'static Symbol, &'static Symbol) {
        (self.check_c, self.check_k)
    }

    pub fn bits(&self) -> &ModuleBits {
        &self.bits
    }

    /// Bar/space runs of the module sequence.
    pub fn runs(&self) -> Vec<Run> {
        geometry::runs(&self.bits)
    }

    /// Rectangles for every bar, scaled to `options`.
    pub fn geometry(&self, options: &RenderOptions) -> Result<Geometry> {
        Geometry::layout(
            &self.runs(),
            options.width,
            options.height,
            options.padding,
        )
    }
}

/// Resolve every character of user text, rejecting shift symbols and
/// anything outside the table.
fn parse_text(text: &str) -> Result<Vec<&'static Symbol>> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| match symbols::lookup_char(ch) {
            Ok(symbol) if symbol.is_user_encodable() => Ok(symbol),
            _ => Err(TagwerkError::InvalidCharacter { ch, position }),
        })
        .collect()
}
