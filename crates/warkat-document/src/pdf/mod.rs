// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module: drawing letters into PDFs and reading them back.

pub mod inspect;
pub mod surface;

pub use inspect::PdfInspector;
pub use surface::PdfSurface;
