// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// tagwerk-barcode — Code93 barcodes for price tags.
//
// Encodes restricted-alphabet text into a checksum-protected module pattern,
// reduces it to bar/space runs, and scales those runs into rectangles for
// vector output (SVG here, PDF in `tagwerk-document`).

pub mod cache;
pub mod checksum;
pub mod encoder;
pub mod geometry;
pub mod svg;
pub mod symbols;

pub use cache::BarcodeCache;
pub use encoder::{Code93Barcode, ModuleBits};
pub use geometry::{Geometry, Rect, Run, runs};
pub use svg::render_svg;
pub use symbols::Symbol;
