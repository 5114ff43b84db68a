// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// letterhead-document — Logo compositing for Letterhead.
//
// Normalizes a raster logo (alpha flattened onto white, re-encoded as PNG in
// memory) and places it in the top-right corner of a single PDF page together
// with a heading and a footer line.

pub mod compose;
pub mod image;
pub mod pdf;

// Re-export the primary items so callers can use `letterhead_document::compose` etc.
pub use compose::{compose, compose_and_report, compose_with};
pub use crate::image::normalizer::{LogoNormalizer, NormalizedImage};
pub use crate::pdf::compositor::LogoCompositor;
