// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Hex colour parsing for PDF fills.

use printpdf::{Color, Rgb};
use tagwerk_core::error::{Result, TagwerkError};

/// Parse `#rgb` or `#rrggbb` into a PDF RGB colour.
pub fn parse_hex(input: &str) -> Result<Color> {
    let invalid = || TagwerkError::InvalidColor(input.to_owned());

    let hex = input.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
    let (r, g, b) = match hex.len() {
        3 => {
            // #abc is shorthand for #aabbcc.
            let nibble = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
            (nibble(0)?, nibble(1)?, nibble(2)?)
        }
        6 => (channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?),
        _ => return Err(invalid()),
    };

    Ok(Color::Rgb(Rgb {
        r: f32::from(r) / 255.0,
        g: f32::from(g) / 255.0,
        b: f32::from(b) / 255.0,
        icc_profile: None,
    }))
}
