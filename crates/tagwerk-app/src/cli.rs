// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tagwerk_core::TagGroup;

#[derive(Parser, Debug)]
#[command(name = "tagwerk", version, about = "Code93 price tags and label sheets")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the check characters and module pattern for TEXT.
    Encode { text: String },
    /// Render TEXT as an SVG barcode.
    Svg {
        text: String,
        #[arg(long, default_value_t = 200.0)]
        width: f64,
        #[arg(long, default_value_t = 50.0)]
        height: f64,
        #[arg(long, default_value_t = 0.0)]
        padding: f64,
        #[arg(long, default_value = "#000", help = "Bar colour")]
        fill: String,
        #[arg(long, help = "Background colour (transparent when omitted)")]
        background: Option<String>,
        #[arg(short, long, help = "Write to FILE instead of stdout")]
        output: Option<PathBuf>,
    },
    /// Lay out price tags on label sheets and write a PDF.
    Sheet {
        #[arg(
            long = "tags",
            required = true,
            num_args = 1..,
            value_parser = parse_tag_group,
            help = "Tag groups as PRICE:COUNT, e.g. 2:10"
        )]
        tags: Vec<TagGroup>,
        #[arg(long, help = "Consigner ID (defaults to the saved one)")]
        consigner: Option<String>,
        #[arg(long, help = "Label sheet product number (defaults to the saved one)")]
        template: Option<String>,
        #[arg(long, help = "Line printed above each barcode")]
        header: Option<String>,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// List the supported label sheets.
    Templates,
    /// Show or change saved settings.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    Show,
    SetConsigner { consigner: String },
    SetTemplate { template: String },
}

fn parse_tag_group(s: &str) -> Result<TagGroup, String> {
    s.parse().map_err(|err: tagwerk_core::TagwerkError| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_multiple_tag_groups() {
        let cli = Cli::try_parse_from([
            "tagwerk", "sheet", "--tags", "2:10", "5:3", "-o", "out.pdf",
        ])
        .unwrap();
        match cli.command {
            Commands::Sheet { tags, output, .. } => {
                assert_eq!(tags, vec![TagGroup { price: 2, count: 10 }, TagGroup { price: 5, count: 3 }]);
                assert_eq!(output, PathBuf::from("out.pdf"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_count() {
        assert!(Cli::try_parse_from(["tagwerk", "sheet", "--tags", "2:0", "-o", "x.pdf"]).is_err());
    }
}
