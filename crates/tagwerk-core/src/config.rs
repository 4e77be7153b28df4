// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration and barcode rendering options.

use serde::{Deserialize, Serialize};

/// How a barcode is scaled and painted.
///
/// All lengths share one arbitrary unit (SVG user units, or label units that
/// the sheet writer maps onto millimetres).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Width of the bar area, excluding padding.
    pub width: f64,
    /// Height of every bar, excluding padding.
    pub height: f64,
    /// Blank margin added on all four sides.
    pub padding: f64,
    /// Colour of the bars.
    pub fill_color: String,
    /// Colour of a full-canvas rectangle drawn beneath the bars. `None`
    /// leaves the canvas transparent.
    pub background_color: Option<String>,
    /// Let the SVG stretch to whatever box it is placed in.
    pub stretch: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 50.0,
            padding: 0.0,
            fill_color: "#000".into(),
            background_color: None,
            stretch: false,
        }
    }
}

impl RenderOptions {
    /// Barcode size used on printed price tags.
    pub fn label() -> Self {
        Self {
            width: 120.0,
            height: 35.0,
            stretch: true,
            ..Self::default()
        }
    }
}

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seller ID prefixed to every price tag. Empty until the user sets it.
    pub consigner: String,
    /// Product number of the label sheet to fill.
    pub template: String,
    /// Line printed above each barcode.
    pub header: String,
    /// Barcode rendering on labels.
    pub barcode: RenderOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            consigner: String::new(),
            template: crate::DEFAULT_TEMPLATE_ID.into(),
            header: "halfpintresale.com".into(),
            barcode: RenderOptions::label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_defaults() {
        let opts = RenderOptions::default();
        assert_eq!(opts.width, 200.0);
        assert_eq!(opts.height, 50.0);
        assert_eq!(opts.padding, 0.0);
        assert_eq!(opts.fill_color, "#000");
        assert!(opts.background_color.is_none());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"consigner":"AB12"}"#).unwrap();
        assert_eq!(config.consigner, "AB12");
        assert_eq!(config.template, crate::DEFAULT_TEMPLATE_ID);
        assert_eq!(config.barcode, RenderOptions::label());
    }

    #[test]
    fn config_round_trips_through_json() {
        let mut config = AppConfig::default();
        config.barcode.background_color = Some("#fff".into());
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
