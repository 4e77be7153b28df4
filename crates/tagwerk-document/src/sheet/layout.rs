// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Label sheet layout.
//
// Tag groups expand in the order given, `count` copies each, and fill the
// template's slots row by row. A new page starts every `per_sheet` labels.

use std::sync::Arc;

use serde::Serialize;
use tagwerk_barcode::{BarcodeCache, Code93Barcode};
use tagwerk_core::error::{Result, TagwerkError};
use tagwerk_core::{Label, LabelTemplate, TagGroup};
use tracing::{debug, info, instrument};

/// A label together with its encoded barcode.
#[derive(Debug, Clone)]
pub struct SheetLabel {
    pub label: Label,
    pub barcode: Arc<Code93Barcode>,
}

/// Counts shown to the user after layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SheetSummary {
    pub total_tags: usize,
    pub pages: usize,
    /// Empty slots left on the final page.
    pub unused_on_last_page: usize,
}

impl SheetSummary {
    pub fn new(total_tags: usize, per_sheet: usize) -> Self {
        let remainder = total_tags % per_sheet;
        Self {
            total_tags,
            pages: total_tags.div_ceil(per_sheet),
            unused_on_last_page: if remainder == 0 {
                0
            } else {
                per_sheet - remainder
            },
        }
    }
}

/// Labels paginated onto a template.
#[derive(Debug, Clone)]
pub struct LabelSheet {
    template: &'static LabelTemplate,
    pages: Vec<Vec<SheetLabel>>,
}

impl LabelSheet {
    /// Lay out `groups` for `consigner` on `template`.
    ///
    /// Every distinct payload is encoded once through `cache`; an empty
    /// consigner or a payload outside the Code93 alphabet is rejected before
    /// any page is built.
    #[instrument(skip(groups, template, cache), fields(template = template.id, groups = groups.len()))]
    pub fn build(
        consigner: &str,
        groups: &[TagGroup],
        template: &'static LabelTemplate,
        cache: &BarcodeCache,
    ) -> Result<Self> {
        if consigner.is_empty() {
            return Err(TagwerkError::MissingConsigner);
        }

        let mut labels: Vec<SheetLabel> = Vec::new();
        for group in groups {
            if group.price == 0 || group.count == 0 {
                return Err(TagwerkError::InvalidTagGroup(format!(
                    "price and count must be greater than zero, got {}:{}",
                    group.price, group.count
                )));
            }
            let label = Label::new(consigner, group);
            let barcode = cache.get_or_encode(&label.payload())?;
            for _ in 0..group.count {
                labels.push(SheetLabel {
                    label: label.clone(),
                    barcode: Arc::clone(&barcode),
                });
            }
        }

        let pages: Vec<Vec<SheetLabel>> = labels
            .chunks(template.per_sheet)
            .map(<[SheetLabel]>::to_vec)
            .collect();

        let sheet = Self { template, pages };
        let summary = sheet.summary();
        info!(
            total_tags = summary.total_tags,
            pages = summary.pages,
            unused = summary.unused_on_last_page,
            "Label sheet laid out"
        );
        debug!(distinct_barcodes = cache.len(), "Barcode cache size");
        Ok(sheet)
    }

    pub fn template(&self) -> &'static LabelTemplate {
        self.template
    }

    /// Pages in print order; each holds at most `template.per_sheet` labels.
    pub fn pages(&self) -> &[Vec<SheetLabel>] {
        &self.pages
    }

    pub fn summary(&self) -> SheetSummary {
        let total = self.pages.iter().map(Vec::len).sum();
        SheetSummary::new(total, self.template.per_sheet)
    }
}
