// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Code93 check characters.
//
// Both check characters are a weighted sum modulo 47, walking the symbols
// right to left. C cycles its weights 1..=20 over the text; K cycles 1..=15
// over the text followed by C.

use std::num::NonZeroUsize;

use tagwerk_core::error::{Result, TagwerkError};

use crate::symbols::{self, CHECKSUM_MODULUS, Symbol};

/// Weight cycle of the first check character.
pub const C_MAX_WEIGHT: NonZeroUsize = weight_cycle(20);
/// Weight cycle of the second check character.
pub const K_MAX_WEIGHT: NonZeroUsize = weight_cycle(15);

const fn weight_cycle(max: usize) -> NonZeroUsize {
    match NonZeroUsize::new(max) {
        Some(max) => max,
        None => panic!("weight cycle must be at least 1"),
    }
}

/// Weighted modulo-47 check symbol over `symbols`.
///
/// The rightmost symbol gets weight 1; weights wrap back to 1 after
/// `max_weight`.
pub fn checksum(symbols: &[&Symbol], max_weight: NonZeroUsize) -> Result<&'static Symbol> {
    let mut sum = 0usize;
    for (index, symbol) in symbols.iter().rev().enumerate() {
        let value = symbol
            .value
            .ok_or_else(|| TagwerkError::UnknownSymbol(symbol.name.to_owned()))?;
        sum += usize::from(value) * ((index % max_weight.get()) + 1);
    }
    symbols::by_value(sum % CHECKSUM_MODULUS)
}

/// Both check characters for `text`: `(C, K)`.
pub fn check_pair(text: &[&Symbol]) -> Result<(&'static Symbol, &'static Symbol)> {
    let c = checksum(text, C_MAX_WEIGHT)?;
    let mut with_c = Vec::with_capacity(text.len() + 1);
    with_c.extend_from_slice(text);
    with_c.push(c);
    let k = checksum(&with_c, K_MAX_WEIGHT)?;
    Ok((c, k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{START_STOP, lookup, lookup_char};

    fn text(s: &str) -> Vec<&'static Symbol> {
        s.chars().map(|ch| lookup_char(ch).unwrap()).collect()
    }

    fn names(pair: (&Symbol, &Symbol)) -> (&'static str, &'static str) {
        (pair.0.name, pair.1.name)
    }

    #[test]
    fn single_symbol() {
        // C: 10*1 = 10 -> A. K: 10*1 + 10*2 = 30 -> U.
        assert_eq!(names(check_pair(&text("A")).unwrap()), ("A", "U"));
    }

    #[test]
    fn two_symbols() {
        // C: 11*1 + 10*2 = 31 -> V. K: 31*1 + 11*2 + 10*3 = 83 % 47 = 36 -> '-'.
        assert_eq!(names(check_pair(&text("AB")).unwrap()), ("V", "-"));
    }

    #[test]
    fn reference_example() {
        assert_eq!(names(check_pair(&text("TEST93")).unwrap()), ("+", "6"));
    }

    #[test]
    fn check_character_can_be_a_shift_symbol() {
        assert_eq!(names(check_pair(&text("AB12$2.00")).unwrap()), ("+", "($)"));
    }

    #[test]
    fn weights_wrap_after_the_cycle() {
        // 21 ones: C weights run 1..=20 then 1 again, so sum = 210 + 1.
        let ones = text(&"1".repeat(21));
        let c = checksum(&ones, C_MAX_WEIGHT).unwrap();
        assert_eq!(usize::from(c.value.unwrap()), 211 % 47);
        // The same input with the K cycle: 1..=15 then 1..=6.
        let k = checksum(&ones, K_MAX_WEIGHT).unwrap();
        assert_eq!(usize::from(k.value.unwrap()), (120 + 21) % 47);
    }

    #[test]
    fn cycle_of_one_weighs_every_symbol_equally() {
        // 11 + 10 + 12 = 33 -> X.
        let c = checksum(&text("BAC"), NonZeroUsize::MIN).unwrap();
        assert_eq!(c.name, "X");
    }

    #[test]
    fn k_covers_c() {
        let input = text("PRICE");
        let (c, k) = check_pair(&input).unwrap();
        let mut with_c = input.clone();
        with_c.push(c);
        assert_eq!(checksum(&with_c, K_MAX_WEIGHT).unwrap(), k);
        assert_ne!(checksum(&input, K_MAX_WEIGHT).unwrap(), k);
    }

    #[test]
    fn sentinel_has_no_checksum_value() {
        let input = [lookup("A").unwrap(), &START_STOP];
        assert!(matches!(
            checksum(&input, C_MAX_WEIGHT),
            Err(TagwerkError::UnknownSymbol(_))
        ));
    }
}
