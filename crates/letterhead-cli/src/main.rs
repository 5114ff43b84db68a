// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Letterhead — one-page PDF report with the company logo
//
// Entry point. Initialises logging, resolves the report configuration from
// flags and an optional JSON file, then composes the PDF and reports the
// outcome on the console.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use letterhead_core::ReportConfig;
use letterhead_core::error::Result;
use letterhead_core::human_errors::humanize_error;
use letterhead_document::compose_and_report;

#[derive(Parser, Debug)]
#[command(name = "letterhead", version, about = "Generate a one-page PDF with the company logo")]
struct Cli {
    /// Logo image placed in the top-right corner.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Output PDF path. An existing file is overwritten.
    #[arg(long)]
    out: Option<PathBuf>,

    /// JSON config file; flags take precedence over its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Title stored in the PDF metadata.
    #[arg(long)]
    title: Option<String>,

    /// Write the effective configuration to this path and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

impl Cli {
    /// Flags over config file over defaults.
    fn resolve_config(&self) -> Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => ReportConfig::load(path)?,
            None => ReportConfig::default(),
        };
        if let Some(logo) = &self.logo {
            config.logo_path = logo.clone();
        }
        if let Some(out) = &self.out {
            config.output_path = out.clone();
        }
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "letterhead starting");

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", humanize_error(&e));
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = &cli.write_config {
        return match config.persist(path) {
            Ok(()) => {
                println!("Configuration written to {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", humanize_error(&e));
                ExitCode::FAILURE
            }
        };
    }

    let mut stdout = std::io::stdout().lock();
    match compose_and_report(&config, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(human) => {
            tracing::debug!(stage = ?human.stage, "report failed");
            ExitCode::FAILURE
        }
    }
}
