// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — price-tag sheets using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`. Barcodes are drawn as vector polygons, one ring per
// bar, so they stay sharp at any printer resolution.

use std::collections::HashMap;
use std::path::Path;

use printpdf::{
    BuiltinFont, Color, LinePoint, Mm, Op, PaintMode, PdfDocument, PdfPage, PdfSaveOptions,
    PdfWarnMsg, Point, Polygon, PolygonRing, Pt, Rgb, TextItem, WindingOrder,
};
use tagwerk_barcode::Geometry;
use tagwerk_core::error::Result;
use tagwerk_core::{AppConfig, LabelTemplate, RenderOptions};
use tracing::{debug, info, instrument, warn};

use crate::pdf::color;
use crate::sheet::{LabelSheet, SheetLabel};

const HEADER_FONT_PT: f32 = 6.0;
const FOOTER_FONT_PT: f32 = 7.0;
/// Gap between the label edge and its contents.
const INSET_MM: f32 = 1.5;
/// Vertical space reserved for each text line.
const TEXT_BAND_MM: f32 = 3.5;

/// Writes label sheets as print-ready PDF documents.
pub struct LabelSheetWriter {
    /// Line printed above every barcode.
    header: String,
    /// Barcode size and colours, in label units.
    barcode: RenderOptions,
    /// Title metadata embedded in the PDF /Info dictionary.
    title: Option<String>,
}

/// A rectangle on the page in points, origin bottom-left as PDF expects.
#[derive(Debug, Clone, Copy)]
struct BoxPt {
    left: f32,
    bottom: f32,
    width: f32,
    height: f32,
}

impl LabelSheetWriter {
    /// Create a writer with the given header line and barcode options.
    pub fn new(header: impl Into<String>, barcode: RenderOptions) -> Self {
        Self {
            header: header.into(),
            barcode,
            title: None,
        }
    }

    /// Create a writer from the persisted settings.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.header.clone(), config.barcode.clone())
    }

    /// Set a title for the PDF metadata.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Render every page of `sheet`.
    #[instrument(skip_all, fields(template = sheet.template().id, pages = sheet.pages().len()))]
    pub fn render(&self, sheet: &LabelSheet) -> Result<Vec<u8>> {
        let template = sheet.template();
        let title = self.title.as_deref().unwrap_or("Tagwerk Price Tags");
        let fill = color::parse_hex(&self.barcode.fill_color)?;
        let background = self
            .barcode
            .background_color
            .as_deref()
            .map(color::parse_hex)
            .transpose()?;

        info!(template = template.id, title, "Creating label sheet PDF");

        let (w_mm, h_mm) = template.page_mm;
        let (page_w, page_h) = (Mm(w_mm), Mm(h_mm));
        let page_h_pt = page_h.into_pt().0;

        // Geometry depends only on the payload; lay each one out once.
        let mut layouts: HashMap<&str, Geometry> = HashMap::new();
        let mut pages: Vec<PdfPage> = Vec::with_capacity(sheet.pages().len());

        for labels in sheet.pages() {
            let mut ops: Vec<Op> = Vec::new();
            for (slot, entry) in labels.iter().enumerate() {
                let text = entry.barcode.text();
                if !layouts.contains_key(text) {
                    layouts.insert(text, entry.barcode.geometry(&self.barcode)?);
                }
                let geometry = &layouts[text];
                let cell = label_cell(template, slot, page_h_pt);
                self.draw_label(&mut ops, cell, entry, geometry, &fill, background.as_ref());
            }
            pages.push(PdfPage::new(page_w, page_h, ops));
        }

        // An empty order still prints as one blank sheet.
        if pages.is_empty() {
            warn!("No labels to print; writing a blank sheet");
            pages.push(PdfPage::new(page_w, page_h, Vec::new()));
        }

        let mut doc = PdfDocument::new(title);
        doc.with_pages(pages);

        debug!(
            pages = doc.pages.len(),
            distinct_barcodes = layouts.len(),
            "Label layout complete"
        );

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            debug!(count = warnings.len(), "printpdf reported warnings");
        }

        Ok(output)
    }

    /// Render `sheet` and write it directly to a file.
    pub fn write_to_file(&self, sheet: &LabelSheet, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render(sheet)?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!("Wrote label sheet PDF to {}", path.as_ref().display());
        Ok(())
    }

    // -- Label drawing --------------------------------------------------------

    /// Header, barcode, then a footer with consigner and price.
    fn draw_label(
        &self,
        ops: &mut Vec<Op>,
        cell: BoxPt,
        entry: &SheetLabel,
        geometry: &Geometry,
        fill: &Color,
        background: Option<&Color>,
    ) {
        let inset = mm_to_pt(INSET_MM);
        let band = mm_to_pt(TEXT_BAND_MM);
        let top = cell.bottom + cell.height;

        // Header hugs the top edge.
        let header_baseline = top - inset - HEADER_FONT_PT;
        push_centered_text(
            ops,
            &self.header,
            BuiltinFont::Helvetica,
            HEADER_FONT_PT,
            cell.left + cell.width / 2.0,
            header_baseline,
        );

        // Footer hugs the bottom edge.
        let footer = format!("{}    ${}", entry.label.consigner, entry.label.price);
        push_centered_text(
            ops,
            &footer,
            BuiltinFont::HelveticaBold,
            FOOTER_FONT_PT,
            cell.left + cell.width / 2.0,
            cell.bottom + inset,
        );

        // Barcode fills what is left between the two text bands.
        let area = BoxPt {
            left: cell.left + 2.0 * inset,
            bottom: cell.bottom + inset + band,
            width: cell.width - 4.0 * inset,
            height: cell.height - 2.0 * (inset + band),
        };
        self.draw_barcode(ops, area, geometry, fill, background);
    }

    /// Map the barcode canvas into `area` and paint it.
    fn draw_barcode(
        &self,
        ops: &mut Vec<Op>,
        area: BoxPt,
        geometry: &Geometry,
        fill: &Color,
        background: Option<&Color>,
    ) {
        let canvas_w = geometry.canvas_width as f32;
        let canvas_h = geometry.canvas_height as f32;
        let (mut scale_x, mut scale_y) = (area.width / canvas_w, area.height / canvas_h);
        if !self.barcode.stretch {
            let scale = scale_x.min(scale_y);
            scale_x = scale;
            scale_y = scale;
        }

        // Centre the canvas in the area; canvas y grows downward.
        let origin_x = area.left + (area.width - canvas_w * scale_x) / 2.0;
        let origin_top = area.bottom + area.height - (area.height - canvas_h * scale_y) / 2.0;
        let to_page = |x: f64, y: f64| Point {
            x: Pt(origin_x + x as f32 * scale_x),
            y: Pt(origin_top - y as f32 * scale_y),
        };

        ops.push(Op::SaveGraphicsState);

        if let Some(background) = background {
            ops.push(Op::SetFillColor {
                col: background.clone(),
            });
            ops.push(Op::DrawPolygon {
                polygon: filled(vec![rect_ring(
                    to_page(0.0, 0.0),
                    to_page(geometry.canvas_width, geometry.canvas_height),
                )]),
            });
        }

        let rings: Vec<PolygonRing> = geometry
            .bars
            .iter()
            .map(|bar| {
                rect_ring(
                    to_page(bar.x, bar.y),
                    to_page(bar.x + bar.width, bar.y + bar.height),
                )
            })
            .collect();
        ops.push(Op::SetFillColor { col: fill.clone() });
        ops.push(Op::DrawPolygon {
            polygon: filled(rings),
        });

        ops.push(Op::RestoreGraphicsState);
    }
}

/// Bounding box of the label at `slot`, in page points.
fn label_cell(template: &LabelTemplate, slot: usize, page_h_pt: f32) -> BoxPt {
    let (left_mm, top_mm) = template.slot_origin_mm(slot);
    let height = mm_to_pt(template.label_height_mm);
    BoxPt {
        left: mm_to_pt(left_mm),
        bottom: page_h_pt - mm_to_pt(top_mm) - height,
        width: mm_to_pt(template.label_width_mm),
        height,
    }
}

fn mm_to_pt(mm: f32) -> f32 {
    Mm(mm).into_pt().0
}

/// Closed ring through the four corners spanned by two opposite points.
fn rect_ring(a: Point, b: Point) -> PolygonRing {
    let corners = [
        Point { x: a.x, y: a.y },
        Point { x: b.x, y: a.y },
        Point { x: b.x, y: b.y },
        Point { x: a.x, y: b.y },
    ];
    PolygonRing {
        points: corners
            .into_iter()
            .map(|p| LinePoint { p, bezier: false })
            .collect(),
    }
}

fn filled(rings: Vec<PolygonRing>) -> Polygon {
    Polygon {
        rings,
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    }
}

/// Write one line of text centred on `center_x`.
///
/// Width is estimated from the average Helvetica glyph (about half the font
/// size); built-in fonts carry no metrics we can query.
fn push_centered_text(
    ops: &mut Vec<Op>,
    text: &str,
    font: BuiltinFont,
    size_pt: f32,
    center_x: f32,
    baseline: f32,
) {
    let estimated_width = 0.5 * size_pt * text.chars().count() as f32;

    ops.push(Op::SetFillColor {
        col: Color::Rgb(Rgb {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            icc_profile: None,
        }),
    });
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point {
            x: Pt(center_x - estimated_width / 2.0),
            y: Pt(baseline),
        },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        size: Pt(size_pt),
        font,
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(text.to_owned())],
        font,
    });
    ops.push(Op::EndTextSection);
}
