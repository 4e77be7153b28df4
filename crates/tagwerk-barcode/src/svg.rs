// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// SVG output. All bars go into one compound path.

use tagwerk_core::RenderOptions;
use tagwerk_core::error::Result;
use tracing::{debug, instrument};

use crate::encoder::Code93Barcode;
use crate::geometry::Geometry;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Render `barcode` as a standalone `<svg>` document.
#[instrument(skip_all, fields(text = barcode.text()))]
pub fn render_svg(barcode: &Code93Barcode, options: &RenderOptions) -> Result<String> {
    let geometry = barcode.geometry(options)?;
    let svg = svg_from_geometry(&geometry, options);
    debug!(bars = geometry.bars.len(), bytes = svg.len(), "Rendered SVG");
    Ok(svg)
}

/// Serialise already laid-out bars. `options` supplies only the colours.
pub fn svg_from_geometry(geometry: &Geometry, options: &RenderOptions) -> String {
    let (width, height) = (geometry.canvas_width, geometry.canvas_height);
    let mut svg = format!(
        "<svg xmlns=\"{SVG_NS}\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\""
    );
    if options.stretch {
        svg.push_str(" preserveAspectRatio=\"none\"");
    }
    svg.push('>');

    if let Some(background) = &options.background_color {
        svg.push_str(&format!(
            "<rect width=\"{width}\" height=\"{height}\" fill=\"{}\"/>",
            escape_attr(background)
        ));
    }

    let commands: Vec<String> = geometry
        .bars
        .iter()
        .map(|bar| {
            format!(
                "M{} {} v {} h {} V {} Z",
                bar.x, bar.y, bar.height, bar.width, bar.y
            )
        })
        .collect();
    svg.push_str(&format!(
        "<path d=\"{}\" fill=\"{}\"/>",
        commands.join(" "),
        escape_attr(&options.fill_color)
    ));

    svg.push_str("</svg>");
    svg
}

/// Escape a value for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagwerk_core::TagwerkError;

    fn options(width: f64, height: f64, padding: f64) -> RenderOptions {
        RenderOptions {
            width,
            height,
            padding,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn canvas_attributes_include_padding() {
        let barcode = Code93Barcode::encode("AB").unwrap();
        let svg = render_svg(&barcode, &options(120.0, 35.0, 5.0)).unwrap();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"130\" height=\"45\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn one_path_command_per_bar() {
        let barcode = Code93Barcode::encode("TEST93").unwrap();
        let bars = barcode.runs().iter().filter(|r| r.fill).count();
        let svg = render_svg(&barcode, &RenderOptions::default()).unwrap();
        assert_eq!(svg.matches(" Z").count(), bars);
        assert_eq!(svg.matches("<path").count(), 1);
        assert!(svg.contains("fill=\"#000\""));
    }

    #[test]
    fn first_bar_starts_at_padding() {
        // "A" has 46 modules; at width 46 each module is one unit wide.
        let barcode = Code93Barcode::encode("A").unwrap();
        let svg = render_svg(&barcode, &options(46.0, 10.0, 2.0)).unwrap();
        assert!(svg.contains("d=\"M2 2 v 10 h 1 V 2 Z M4 2 v 10 h 1 V 2 Z M6 2 v 10 h 4 V 2 Z"));
    }

    #[test]
    fn background_only_when_requested() {
        let barcode = Code93Barcode::encode("A").unwrap();
        let plain = render_svg(&barcode, &RenderOptions::default()).unwrap();
        assert!(!plain.contains("<rect"));

        let opts = RenderOptions {
            background_color: Some("#fff".into()),
            ..RenderOptions::default()
        };
        let filled = render_svg(&barcode, &opts).unwrap();
        assert!(filled.contains("<rect width=\"200\" height=\"50\" fill=\"#fff\"/>"));
        assert!(filled.find("<rect").unwrap() < filled.find("<path").unwrap());
    }

    #[test]
    fn stretch_disables_aspect_ratio() {
        let barcode = Code93Barcode::encode("A").unwrap();
        let svg = render_svg(&barcode, &RenderOptions::label()).unwrap();
        assert!(svg.contains("preserveAspectRatio=\"none\""));
    }

    #[test]
    fn colours_are_escaped() {
        let barcode = Code93Barcode::encode("A").unwrap();
        let opts = RenderOptions {
            fill_color: "red\" onload=\"x".into(),
            ..RenderOptions::default()
        };
        let svg = render_svg(&barcode, &opts).unwrap();
        assert!(svg.contains("fill=\"red&quot; onload=&quot;x\""));
    }

    #[test]
    fn invalid_size_is_rejected() {
        let barcode = Code93Barcode::encode("A").unwrap();
        assert!(matches!(
            render_svg(&barcode, &options(0.0, 50.0, 0.0)),
            Err(TagwerkError::InvalidGeometryRequest(_))
        ));
    }
}
