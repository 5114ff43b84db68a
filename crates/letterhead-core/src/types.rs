// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: paper sizes and the derived page geometry that places
// the logo and the two text lines.

use serde::{Deserialize, Serialize};

use crate::error::{LetterheadError, Result};

/// Rendered width of the logo, in points. The height follows the image's
/// natural aspect ratio.
pub const LOGO_WIDTH_PT: f32 = 120.0;

/// Distance between the logo and the top/right page edges, in points.
pub const MARGIN_PT: f32 = 50.0;

/// Left edge of both text lines, in points (one inch).
pub const TEXT_LEFT_PT: f32 = 72.0;

/// Vertical gap between the bottom of the logo and the heading baseline.
pub const HEADING_GAP_PT: f32 = 30.0;

/// Baseline of the footer line, measured from the bottom edge.
pub const FOOTER_BASELINE_PT: f32 = 72.0;

/// Font size for both text lines.
pub const FONT_SIZE_PT: f32 = 12.0;

const MM_PER_INCH: f32 = 25.4;
const PT_PER_INCH: f32 = 72.0;

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    #[default]
    Letter,
    Legal,
    Custom { width_pt: f32, height_pt: f32 },
}

impl PaperSize {
    /// Dimensions in PostScript points (width, height).
    ///
    /// US sizes are exact multiples of 72; ISO sizes are converted from
    /// their millimetre definition.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            Self::Letter => (612.0, 792.0),
            Self::Legal => (612.0, 1008.0),
            Self::A4 => (mm_to_pt(210.0), mm_to_pt(297.0)),
            Self::Custom {
                width_pt,
                height_pt,
            } => (*width_pt, *height_pt),
        }
    }
}

fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_INCH * PT_PER_INCH
}

/// A point on the page in PDF user space (origin bottom-left, y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Everything derived from the paper size and the logo's pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub logo_width: f32,
    pub logo_height: f32,
    /// Bottom-left corner of the logo, as PDF image placement expects.
    pub logo: Position,
    /// Baseline start of the heading line below the logo.
    pub heading: Position,
    /// Baseline start of the footer line near the bottom-left corner.
    pub footer: Position,
}

impl PageGeometry {
    /// Compute the placement for an image of `image_width` x `image_height`
    /// pixels on `paper`.
    ///
    /// The logo is always exactly [`LOGO_WIDTH_PT`] wide; its height keeps
    /// the source aspect ratio so the image is never distorted.
    pub fn compute(paper: PaperSize, image_width: u32, image_height: u32) -> Result<Self> {
        if image_width == 0 || image_height == 0 {
            return Err(LetterheadError::ImageError(format!(
                "logo has no area ({image_width}x{image_height} px)"
            )));
        }

        let (page_width, page_height) = paper.dimensions_pt();
        let aspect_ratio = image_height as f32 / image_width as f32;
        let logo_width = LOGO_WIDTH_PT;
        let logo_height = logo_width * aspect_ratio;

        let logo = Position {
            x: page_width - logo_width - MARGIN_PT,
            y: page_height - logo_height - MARGIN_PT,
        };
        let heading = Position {
            x: TEXT_LEFT_PT,
            y: logo.y - HEADING_GAP_PT,
        };
        let footer = Position {
            x: TEXT_LEFT_PT,
            y: FOOTER_BASELINE_PT,
        };

        Ok(Self {
            page_width,
            page_height,
            logo_width,
            logo_height,
            logo,
            heading,
            footer,
        })
    }
}
