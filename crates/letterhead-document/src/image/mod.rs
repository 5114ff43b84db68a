// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — load the logo and flatten it into an alpha-free PNG buffer.

pub mod normalizer;

pub use normalizer::{LogoNormalizer, NormalizedImage};
