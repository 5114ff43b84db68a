// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Console-ready error messages.
//
// The console is the only surface the person running the tool sees, so every
// error is mapped to a one-line message naming the failing stage plus a
// suggestion of what to check.

use crate::error::{LetterheadError, Stage};

/// A human-readable error with a message and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// One-line summary naming the stage that failed.
    pub message: String,
    /// What to check before running again.
    pub suggestion: String,
    /// Stage the error came from.
    pub stage: Stage,
}

impl std::fmt::Display for HumanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: {}\n  {}", self.message, self.suggestion)
    }
}

/// Convert a `LetterheadError` into a `HumanError`.
pub fn humanize_error(err: &LetterheadError) -> HumanError {
    let stage = err.stage();
    match err {
        LetterheadError::MissingAsset { path } => HumanError {
            message: format!("the logo image was not found at {}", path.display()),
            suggestion: "Check the --logo path (or logo_path in the config file).".into(),
            stage,
        },

        LetterheadError::ImageError(detail) => HumanError {
            message: format!("could not process the logo image: {detail}"),
            suggestion: "Make sure the file is a PNG, JPEG, GIF, BMP, TIFF or WebP image that opens in an image viewer.".into(),
            stage,
        },

        LetterheadError::PdfError(detail) => HumanError {
            message: format!("could not generate the PDF: {detail}"),
            suggestion: "This is unexpected; please report it with the logo file attached.".into(),
            stage,
        },

        LetterheadError::Io(io) => humanize_io_error(io, stage),

        LetterheadError::Config(detail) if detail.starts_with("cannot write") => HumanError {
            message: format!("could not save the configuration: {detail}"),
            suggestion: "Choose a --write-config location in an existing, writable folder.".into(),
            stage,
        },

        LetterheadError::Config(detail) => HumanError {
            message: format!("the configuration is not usable: {detail}"),
            suggestion: "Fix the config file, or run with --write-config to start from the defaults.".into(),
            stage,
        },

        LetterheadError::Serialization(detail) => HumanError {
            message: format!("the configuration file is not valid JSON: {detail}"),
            suggestion: "Fix the config file, or run with --write-config to start from the defaults.".into(),
            stage,
        },
    }
}

fn humanize_io_error(io: &std::io::Error, stage: Stage) -> HumanError {
    use std::io::ErrorKind;

    let suggestion = match io.kind() {
        ErrorKind::PermissionDenied => {
            "You don't have permission to write there. Choose another --out location."
        }
        ErrorKind::NotFound => "The output folder does not exist. Create it or choose another --out location.",
        _ => "Check that the output location is writable and has free space.",
    };
    HumanError {
        message: format!("could not write the PDF: {io}"),
        suggestion: suggestion.into(),
        stage,
    }
}
