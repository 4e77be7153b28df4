// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Tagwerk price tags and label sheets.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TagwerkError};

const MM_PER_INCH: f32 = 25.4;

/// US Letter, the only stock the supported label sheets come on.
pub const LETTER_MM: (f32, f32) = (8.5 * MM_PER_INCH, 11.0 * MM_PER_INCH);

/// A physical label sheet product: how many labels it holds and where they sit.
///
/// Offsets and pitches are measured from the top-left corner of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelTemplate {
    /// Product number printed on the label box (e.g. `5260`).
    pub id: &'static str,
    pub description: &'static str,
    /// Labels per sheet (`columns * rows`).
    pub per_sheet: usize,
    pub columns: usize,
    pub rows: usize,
    /// Sheet width and height.
    pub page_mm: (f32, f32),
    pub label_width_mm: f32,
    pub label_height_mm: f32,
    pub top_margin_mm: f32,
    pub left_margin_mm: f32,
    /// Distance between the left edges of neighbouring columns.
    pub horizontal_pitch_mm: f32,
    /// Distance between the top edges of neighbouring rows.
    pub vertical_pitch_mm: f32,
}

/// Every label sheet Tagwerk knows how to fill.
pub const LABEL_TEMPLATES: &[LabelTemplate] = &[
    LabelTemplate {
        id: "5260",
        description: "1\" x 2-5/8\" Address Labels",
        per_sheet: 30,
        columns: 3,
        rows: 10,
        page_mm: LETTER_MM,
        label_width_mm: 2.625 * MM_PER_INCH,
        label_height_mm: MM_PER_INCH,
        top_margin_mm: 0.5 * MM_PER_INCH,
        left_margin_mm: 0.1875 * MM_PER_INCH,
        horizontal_pitch_mm: 2.75 * MM_PER_INCH,
        vertical_pitch_mm: MM_PER_INCH,
    },
    LabelTemplate {
        id: "S-20133",
        description: "1\" x 2\" Labels",
        per_sheet: 40,
        columns: 4,
        rows: 10,
        page_mm: LETTER_MM,
        label_width_mm: 2.0 * MM_PER_INCH,
        label_height_mm: MM_PER_INCH,
        top_margin_mm: 0.5 * MM_PER_INCH,
        left_margin_mm: 0.1875 * MM_PER_INCH,
        horizontal_pitch_mm: 2.0625 * MM_PER_INCH,
        vertical_pitch_mm: MM_PER_INCH,
    },
];

/// The template selected when the user has not chosen one.
pub const DEFAULT_TEMPLATE_ID: &str = "5260";

impl LabelTemplate {
    /// Look a template up by its product number.
    pub fn find(id: &str) -> Result<&'static LabelTemplate> {
        LABEL_TEMPLATES
            .iter()
            .find(|template| template.id == id)
            .ok_or_else(|| TagwerkError::UnknownTemplate(id.to_owned()))
    }

    /// Top-left corner (in mm from the sheet's top-left) of the label at
    /// `slot`, filling rows left to right.
    pub fn slot_origin_mm(&self, slot: usize) -> (f32, f32) {
        let column = slot % self.columns;
        let row = slot / self.columns;
        (
            self.left_margin_mm + column as f32 * self.horizontal_pitch_mm,
            self.top_margin_mm + row as f32 * self.vertical_pitch_mm,
        )
    }
}

impl std::fmt::Display for LabelTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.description)
    }
}

/// A price with the number of tags to print for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagGroup {
    /// Whole dollars; printed as `<price>.00`.
    pub price: u32,
    pub count: u32,
}

impl TagGroup {
    /// Create a tag group, rejecting zero prices and zero counts.
    pub fn new(price: u32, count: u32) -> Result<Self> {
        if price == 0 {
            return Err(TagwerkError::InvalidTagGroup(
                "price must be greater than zero".into(),
            ));
        }
        if count == 0 {
            return Err(TagwerkError::InvalidTagGroup(
                "count must be greater than zero".into(),
            ));
        }
        Ok(Self { price, count })
    }

    /// Price as printed on the tag and inside the barcode.
    pub fn price_text(&self) -> String {
        format!("{}.00", self.price)
    }
}

impl std::str::FromStr for TagGroup {
    type Err = TagwerkError;

    /// Parse `PRICE:COUNT`, e.g. `2:10` for ten two-dollar tags.
    fn from_str(s: &str) -> Result<Self> {
        let (price, count) = s.split_once(':').ok_or_else(|| {
            TagwerkError::InvalidTagGroup(format!("expected PRICE:COUNT, got {s:?}"))
        })?;
        let price = price
            .trim()
            .parse()
            .map_err(|e| TagwerkError::InvalidTagGroup(format!("price {price:?}: {e}")))?;
        let count = count
            .trim()
            .parse()
            .map_err(|e| TagwerkError::InvalidTagGroup(format!("count {count:?}: {e}")))?;
        Self::new(price, count)
    }
}

/// One printed price tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub consigner: String,
    /// Price text, e.g. `2.00`.
    pub price: String,
}

impl Label {
    pub fn new(consigner: impl Into<String>, group: &TagGroup) -> Self {
        Self {
            consigner: consigner.into(),
            price: group.price_text(),
        }
    }

    /// Text encoded in the barcode: `<consigner>$<price>`.
    pub fn payload(&self) -> String {
        format!("{}${}", self.consigner, self.price)
    }
}
