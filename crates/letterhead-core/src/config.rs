// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Report configuration: where the logo lives and where the PDF goes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::PaperSize;
use crate::error::{LetterheadError, Result};

/// Settings for one report run.
///
/// Missing fields in a JSON file fall back to [`ReportConfig::default`], so a
/// config containing only `{"logo_path": "..."}` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Raster image placed in the top-right corner.
    pub logo_path: PathBuf,
    /// Destination of the generated PDF. Overwritten if it exists.
    pub output_path: PathBuf,
    /// Title written to the PDF /Info dictionary.
    pub title: String,
    /// Page size of the single output page.
    pub paper_size: PaperSize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            logo_path: PathBuf::from("assets/images/logo.png"),
            output_path: PathBuf::from("reporte_con_logo.pdf"),
            title: "Reporte con Logo".into(),
            paper_size: PaperSize::Letter,
        }
    }
}

impl ReportConfig {
    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|err| {
            LetterheadError::Config(format!("cannot read {}: {}", path.display(), err))
        })?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Write this config as pretty-printed JSON.
    pub fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|err| {
            LetterheadError::Config(format!("cannot write {}: {}", path.display(), err))
        })
    }

    /// Reject settings that cannot produce a document.
    pub fn validate(&self) -> Result<()> {
        if self.logo_path.as_os_str().is_empty() {
            return Err(LetterheadError::Config("logo_path is empty".into()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(LetterheadError::Config("output_path is empty".into()));
        }
        let (w, h) = self.paper_size.dimensions_pt();
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(LetterheadError::Config(format!(
                "paper size {w}x{h} pt is not a usable page"
            )));
        }
        Ok(())
    }
}
