// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Letterhead.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all Letterhead operations.
#[derive(Debug, Error)]
pub enum LetterheadError {
    // -- Source asset --
    #[error("logo image not found at {}", path.display())]
    MissingAsset { path: PathBuf },

    // -- Image processing --
    #[error("image processing failed: {0}")]
    ImageError(String),

    // -- Document generation --
    #[error("PDF generation failed: {0}")]
    PdfError(String),

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The point in the run at which an error surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The source logo could not be located.
    SourceAsset,
    /// Loading, flattening or re-encoding the logo.
    ImageProcessing,
    /// Drawing or writing the PDF.
    DocumentGeneration,
    /// Reading or writing the JSON configuration.
    Configuration,
}

impl LetterheadError {
    /// Classify the error by the stage that produced it.
    ///
    /// Plain I/O errors are attributed to document generation: the only
    /// file the compositor writes is the output PDF.
    pub fn stage(&self) -> Stage {
        match self {
            Self::MissingAsset { .. } => Stage::SourceAsset,
            Self::ImageError(_) => Stage::ImageProcessing,
            Self::PdfError(_) | Self::Io(_) => Stage::DocumentGeneration,
            Self::Config(_) | Self::Serialization(_) => Stage::Configuration,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LetterheadError>;
