// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — draw the normalized logo and the two text lines on one page.

pub mod compositor;

pub use compositor::LogoCompositor;
