// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tagwerk — Code93 price tags and label sheets.
//
// Entry point. Initialises logging, parses the command line, and reports
// failures in plain English.

mod cli;
mod commands;
mod services;

use std::process::ExitCode;

use clap::Parser;
use tagwerk_core::human_errors::humanize_error;

use cli::Cli;
use services::data_dir::data_dir;

/// Exit status for failures worth retrying (`EX_TEMPFAIL` in sysexits.h).
const EXIT_RETRY: u8 = 75;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "Tagwerk starting");

    match commands::run(cli.command, cli.json, &data_dir()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(%err, "command failed");
            let human = humanize_error(&err);
            eprintln!("{human}");
            if human.retriable {
                ExitCode::from(EXIT_RETRY)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
