// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Code93 symbol table.
//
// Each symbol is 9 modules wide: three bars and three spaces. Values 0-42 are
// the user-encodable characters, 43-46 are the shift symbols that only ever
// appear as check characters (Code93 Extended is not supported), and the
// start/stop sentinel carries no value at all.

use std::collections::HashMap;
use std::sync::LazyLock;

use tagwerk_core::error::{Result, TagwerkError};

/// Width of every symbol in modules.
pub const SYMBOL_MODULES: usize = 9;

/// Number of valued symbols; the modulus of both check characters.
pub const CHECKSUM_MODULUS: usize = 47;

/// Highest value a user-supplied character may have.
const MAX_USER_VALUE: u8 = 42;

/// One entry of the Code93 alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    /// Printable name: a single character, or `($)`-style for shift symbols.
    pub name: &'static str,
    /// Checksum value; `None` only for the start/stop sentinel.
    pub value: Option<u8>,
    /// Module pattern, most significant of the 9 bits first. 1 = bar.
    pub pattern: u16,
}

impl Symbol {
    const fn data(name: &'static str, value: u8, pattern: u16) -> Self {
        Self {
            name,
            value: Some(value),
            pattern,
        }
    }

    /// Whether this symbol may appear in text supplied by a user.
    pub fn is_user_encodable(&self) -> bool {
        matches!(self.value, Some(v) if v <= MAX_USER_VALUE)
    }

    /// The pattern's modules, leftmost first.
    pub fn modules(&self) -> impl Iterator<Item = bool> + '_ {
        (0..SYMBOL_MODULES)
            .rev()
            .map(move |shift| (self.pattern >> shift) & 1 == 1)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Valued symbols, indexed by value.
pub static SYMBOLS: [Symbol; CHECKSUM_MODULUS] = [
    Symbol::data("0", 0, 0b100010100),
    Symbol::data("1", 1, 0b101001000),
    Symbol::data("2", 2, 0b101000100),
    Symbol::data("3", 3, 0b101000010),
    Symbol::data("4", 4, 0b100101000),
    Symbol::data("5", 5, 0b100100100),
    Symbol::data("6", 6, 0b100100010),
    Symbol::data("7", 7, 0b101010000),
    Symbol::data("8", 8, 0b100010010),
    Symbol::data("9", 9, 0b100001010),
    Symbol::data("A", 10, 0b110101000),
    Symbol::data("B", 11, 0b110100100),
    Symbol::data("C", 12, 0b110100010),
    Symbol::data("D", 13, 0b110010100),
    Symbol::data("E", 14, 0b110010010),
    Symbol::data("F", 15, 0b110001010),
    Symbol::data("G", 16, 0b101101000),
    Symbol::data("H", 17, 0b101100100),
    Symbol::data("I", 18, 0b101100010),
    Symbol::data("J", 19, 0b100110100),
    Symbol::data("K", 20, 0b100011010),
    Symbol::data("L", 21, 0b101011000),
    Symbol::data("M", 22, 0b101001100),
    Symbol::data("N", 23, 0b101000110),
    Symbol::data("O", 24, 0b100101100),
    Symbol::data("P", 25, 0b100010110),
    Symbol::data("Q", 26, 0b110110100),
    Symbol::data("R", 27, 0b110110010),
    Symbol::data("S", 28, 0b110101100),
    Symbol::data("T", 29, 0b110100110),
    Symbol::data("U", 30, 0b110010110),
    Symbol::data("V", 31, 0b110011010),
    Symbol::data("W", 32, 0b101101100),
    Symbol::data("X", 33, 0b101100110),
    Symbol::data("Y", 34, 0b100110110),
    Symbol::data("Z", 35, 0b100111010),
    Symbol::data("-", 36, 0b100101110),
    Symbol::data(".", 37, 0b111010100),
    Symbol::data(" ", 38, 0b111010010),
    Symbol::data("$", 39, 0b111001010),
    Symbol::data("/", 40, 0b101101110),
    Symbol::data("+", 41, 0b101110110),
    Symbol::data("%", 42, 0b110101110),
    // Shift symbols: check characters only.
    Symbol::data("($)", 43, 0b100100110),
    Symbol::data("(%)", 44, 0b111011010),
    Symbol::data("(/)", 45, 0b111010110),
    Symbol::data("(+)", 46, 0b100110010),
];

/// Start/stop delimiter.
pub const START_STOP: Symbol = Symbol {
    name: "*",
    value: None,
    pattern: 0b101011110,
};

static BY_NAME: LazyLock<HashMap<&'static str, &'static Symbol>> =
    LazyLock::new(|| SYMBOLS.iter().map(|symbol| (symbol.name, symbol)).collect());

/// Look a symbol up by its printable name.
///
/// Covers all 47 valued symbols, including the shift symbols. The sentinel is
/// not addressable by name.
pub fn lookup(name: &str) -> Result<&'static Symbol> {
    BY_NAME
        .get(name)
        .copied()
        .ok_or_else(|| TagwerkError::UnknownSymbol(name.to_owned()))
}

/// Look up the symbol for a single character of user text.
pub fn lookup_char(ch: char) -> Result<&'static Symbol> {
    let mut buf = [0u8; 4];
    lookup(ch.encode_utf8(&mut buf))
}

/// Symbol carrying `value`. Every value below 47 exists.
pub fn by_value(value: usize) -> Result<&'static Symbol> {
    SYMBOLS
        .get(value)
        .ok_or_else(|| TagwerkError::UnknownSymbol(format!("value {value}")))
}
