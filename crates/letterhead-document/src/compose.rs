// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The end-to-end run: check the logo exists, normalize it, compose the page,
// write the PDF, and report the outcome on the console.

use std::io::Write;
use std::path::{Path, PathBuf};

use letterhead_core::ReportConfig;
use letterhead_core::error::{LetterheadError, Result};
use letterhead_core::human_errors::{HumanError, humanize_error};
use tracing::{info, instrument, warn};

use crate::image::normalizer;
use crate::pdf::LogoCompositor;

/// Compose the Letter-sized logo report from `logo_path` into `output_path`.
///
/// Returns the resolved output path. Nothing is written when the logo is
/// missing or cannot be decoded.
pub fn compose(logo_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<PathBuf> {
    compose_with(&LogoCompositor::letter(), logo_path, output_path)
}

/// Same as [`compose`] but with a caller-configured compositor.
#[instrument(skip_all, fields(logo = %logo_path.as_ref().display(), out = %output_path.as_ref().display()))]
pub fn compose_with(
    compositor: &LogoCompositor,
    logo_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<PathBuf> {
    let logo_path = logo_path.as_ref();
    let output_path = output_path.as_ref();

    if !logo_path.exists() {
        warn!("Logo not found");
        return Err(LetterheadError::MissingAsset {
            path: logo_path.to_path_buf(),
        });
    }

    let logo = normalizer::normalize(logo_path)?;
    compositor.write_to_file(&logo, output_path)?;

    let resolved = std::fs::canonicalize(output_path).unwrap_or_else(|_| output_path.to_path_buf());
    info!(path = %resolved.display(), "Report composed");
    Ok(resolved)
}

/// Run the report described by `config` and print the outcome to `console`.
///
/// Success prints the resolved output path; failure prints a message naming
/// the failing stage. The outcome is also returned for callers that need an
/// exit status.
pub fn compose_and_report<W: Write>(
    config: &ReportConfig,
    console: &mut W,
) -> std::result::Result<PathBuf, HumanError> {
    let result = config.validate().and_then(|()| {
        let mut compositor = LogoCompositor::new(config.paper_size);
        compositor.set_title(config.title.as_str());
        compose_with(&compositor, &config.logo_path, &config.output_path)
    });

    match result {
        Ok(path) => {
            if let Err(io) = writeln!(console, "PDF generated successfully at: {}", path.display()) {
                warn!(error = %io, "Could not print success line");
            }
            Ok(path)
        }
        Err(err) => {
            let human = humanize_error(&err);
            if let Err(io) = writeln!(console, "{human}") {
                warn!(error = %io, stage = ?human.stage, "Could not print error report");
            }
            Err(human)
        }
    }
}
