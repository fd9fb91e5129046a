// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// warkat-document: PDF output for Warkat letters.
//
// Provides the printpdf-backed drawing surface, a lopdf inspector for checking
// what was produced, letterhead logo decoding, and the export conventions
// (filename, SHA-256 fingerprint).

pub mod export;
pub mod image;
pub mod pdf;

pub use export::{RenderedPdf, document_filename, render_pdf, write_pdf};
pub use self::image::logo::{decode_logo, load_logo};
pub use pdf::inspect::PdfInspector;
pub use pdf::surface::PdfSurface;
