// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command implementations. Each returns the text to print on stdout.

use std::path::Path;

use serde::Serialize;
use tagwerk_barcode::{BarcodeCache, Code93Barcode, Run, render_svg};
use tagwerk_core::error::{Result, TagwerkError};
use tagwerk_core::{AppConfig, LABEL_TEMPLATES, LabelTemplate, RenderOptions, TagGroup};
use tagwerk_document::{LabelSheet, LabelSheetWriter, SheetSummary};
use tracing::info;

use crate::cli::{Commands, ConfigCommands};
use crate::services::settings;

#[derive(Serialize)]
struct EncodeReport<'a> {
    text: &'a str,
    check_c: &'a str,
    check_k: &'a str,
    modules: usize,
    bits: String,
    runs: Vec<Run>,
}

#[derive(Serialize)]
struct SheetReport<'a> {
    consigner: &'a str,
    template: &'a str,
    output: String,
    #[serde(flatten)]
    summary: SheetSummary,
}

/// Run one command against the settings stored in `data_dir`.
pub fn run(command: Commands, json: bool, data_dir: &Path) -> Result<String> {
    match command {
        Commands::Encode { text } => encode(&text, json),
        Commands::Svg {
            text,
            width,
            height,
            padding,
            fill,
            background,
            output,
        } => {
            let options = RenderOptions {
                width,
                height,
                padding,
                fill_color: fill,
                background_color: background,
                stretch: false,
            };
            let svg = render_svg(&Code93Barcode::encode(&text)?, &options)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &svg)?;
                    info!("Wrote SVG to {}", path.display());
                    Ok(format!("Wrote {}", path.display()))
                }
                None => Ok(svg),
            }
        }
        Commands::Sheet {
            tags,
            consigner,
            template,
            header,
            output,
        } => {
            let mut config = settings::load_config(data_dir);
            if let Some(header) = header {
                config.header = header;
            }
            let consigner = consigner.unwrap_or_else(|| config.consigner.clone());
            let template = template.unwrap_or_else(|| config.template.clone());
            sheet(&config, &consigner, &template, &tags, &output, json)
        }
        Commands::Templates => templates(json),
        Commands::Config { command } => config(command, json, data_dir),
    }
}

fn encode(text: &str, json: bool) -> Result<String> {
    let barcode = Code93Barcode::encode(text)?;
    let (c, k) = barcode.check_symbols();
    let bits = barcode.bits().to_string();

    if json {
        let report = EncodeReport {
            text,
            check_c: c.name,
            check_k: k.name,
            modules: barcode.bits().len(),
            bits,
            runs: barcode.runs(),
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    Ok(format!(
        "text:    {text}\ncheck:   {c} {k}\nmodules: {}\nbits:    {bits}",
        barcode.bits().len()
    ))
}

fn sheet(
    config: &AppConfig,
    consigner: &str,
    template_id: &str,
    groups: &[TagGroup],
    output: &Path,
    json: bool,
) -> Result<String> {
    let template = LabelTemplate::find(template_id)?;
    let sheet = LabelSheet::build(consigner, groups, template, &BarcodeCache::new())?;
    let mut writer = LabelSheetWriter::from_config(config);
    writer.set_title(format!("{consigner} price tags"));
    writer.write_to_file(&sheet, output)?;

    let summary = sheet.summary();
    if json {
        let report = SheetReport {
            consigner,
            template: template.id,
            output: output.display().to_string(),
            summary,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let unused = match summary.unused_on_last_page {
        0 => "No unused labels on last page.".to_owned(),
        n => format!("{n} unused labels on last page."),
    };
    Ok(format!(
        "Wrote {} tags on {} page(s) to {}\n{unused}",
        summary.total_tags,
        summary.pages,
        output.display()
    ))
}

fn templates(json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(LABEL_TEMPLATES)?);
    }
    Ok(LABEL_TEMPLATES
        .iter()
        .map(|t| format!("{t} ({} per sheet)", t.per_sheet))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn config(command: ConfigCommands, json: bool, data_dir: &Path) -> Result<String> {
    let mut config = settings::load_config(data_dir);
    match command {
        ConfigCommands::Show => {
            if json {
                return Ok(serde_json::to_string_pretty(&config)?);
            }
            let consigner = if config.consigner.is_empty() {
                "(not set)"
            } else {
                config.consigner.as_str()
            };
            Ok(format!(
                "consigner: {consigner}\ntemplate:  {}\nheader:    {}\nfile:      {}",
                config.template,
                config.header,
                settings::config_path(data_dir).display()
            ))
        }
        ConfigCommands::SetConsigner { consigner } => {
            if consigner.is_empty() {
                return Err(TagwerkError::MissingConsigner);
            }
            // Catch characters a barcode can't hold now, not at print time.
            Code93Barcode::encode(&consigner)?;
            config.consigner = consigner;
            settings::persist_config(data_dir, &config)?;
            Ok(format!("Consigner set to {}", config.consigner))
        }
        ConfigCommands::SetTemplate { template } => {
            let template = LabelTemplate::find(&template)?;
            config.template = template.id.to_owned();
            settings::persist_config(data_dir, &config)?;
            Ok(format!("Template set to {template}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_reports_check_characters() {
        let out = encode("AB", false).unwrap();
        assert!(out.contains("check:   V -"));
        assert!(out.contains("modules: 55"));
    }

    #[test]
    fn encode_json_includes_runs() {
        let out = encode("A", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["check_k"], "U");
        assert_eq!(value["modules"], 46);
        assert_eq!(value["runs"].as_array().unwrap().len(), 31);
    }

    #[test]
    fn set_consigner_validates_alphabet() {
        let dir = tempfile::tempdir().unwrap();
        let err = config(
            ConfigCommands::SetConsigner {
                consigner: "ab".into(),
            },
            false,
            dir.path(),
        )
        .unwrap_err();
        assert!(matches!(err, TagwerkError::InvalidCharacter { position: 0, .. }));
        assert_eq!(settings::load_config(dir.path()).consigner, "");
    }

    #[test]
    fn saved_consigner_is_used_for_sheets() {
        let dir = tempfile::tempdir().unwrap();
        config(
            ConfigCommands::SetConsigner {
                consigner: "AB12".into(),
            },
            false,
            dir.path(),
        )
        .unwrap();

        let output = dir.path().join("tags.pdf");
        let out = run(
            Commands::Sheet {
                tags: vec![TagGroup { price: 2, count: 10 }],
                consigner: None,
                template: None,
                header: None,
                output: output.clone(),
            },
            false,
            dir.path(),
        )
        .unwrap();
        assert!(out.contains("Wrote 10 tags on 1 page(s)"));
        assert!(out.contains("20 unused labels on last page."));
        assert!(output.exists());
    }
}
