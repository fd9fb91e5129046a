// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Export: render a letter to PDF bytes, fingerprint them, and name the file.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{info, instrument, warn};
use warkat_core::Result;
use warkat_layout::{LetterEngine, RenderAssets};
use warkat_letters::{LetterModel, render_letter};

use crate::pdf::surface::PdfSurface;

/// A finished letter ready to be written out.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    /// Lowercase hex SHA-256 of `bytes`.
    pub sha256: String,
    pub filename: String,
    pub scale: f32,
    pub pages: usize,
    /// False when the letter overflowed even at the smallest scale.
    pub fits: bool,
    pub attempts: usize,
}

/// Lay out `model` with auto-scaling onto PDF pages and serialise it.
#[instrument(skip_all, fields(kind = model.kind(), reference = model.reference_number()))]
pub fn render_pdf<M: LetterModel + ?Sized>(
    engine: &LetterEngine,
    model: &M,
    assets: &RenderAssets,
) -> Result<RenderedPdf> {
    let page = engine.page();
    let title = model.reference_number().to_owned();
    let doc = render_letter(engine, model, assets, || PdfSurface::new(page, &title));

    if !doc.fits {
        warn!(scale = doc.scale, "Letter overflows its page, printing anyway");
    }

    let pages = doc.page_count();
    let bytes = doc.surface.export_bytes()?;
    let sha256 = fingerprint(&bytes);
    let filename = document_filename(model.reference_number(), model.subject_name());

    info!(
        filename,
        pages,
        scale = doc.scale,
        bytes = bytes.len(),
        "Letter rendered"
    );

    Ok(RenderedPdf {
        bytes,
        sha256,
        filename,
        scale: doc.scale,
        pages,
        fits: doc.fits,
        attempts: doc.attempts,
    })
}

/// Lowercase hex SHA-256 digest.
pub fn fingerprint(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// `{reference}-{subject}.pdf`, both parts made filesystem-safe.
pub fn document_filename(reference: &str, subject: &str) -> String {
    format!(
        "{}-{}.pdf",
        sanitize_filename(reference, "SURAT"),
        sanitize_filename(subject, "TANPA-NAMA")
    )
}

/// Keep ASCII letters, digits, `-` and `_`. Runs of whitespace become one
/// `_`, path separators and dots become `-`, everything else is dropped.
/// Returns `fallback` when nothing survives.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.trim().chars() {
        let mapped = match c {
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' => Some(c),
            '/' | '\\' | '.' => Some('-'),
            c if c.is_whitespace() => Some('_'),
            _ => None,
        };
        if let Some(m) = mapped {
            let repeat = matches!(m, '_' | '-') && out.ends_with(m);
            if !repeat {
                out.push(m);
            }
        }
    }

    let trimmed = out.trim_matches(|c| c == '-' || c == '_');
    if trimmed.is_empty() {
        fallback.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Write `pdf` into `dir` under its own filename.
#[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
pub fn write_pdf(pdf: &RenderedPdf, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    let path = dir.join(&pdf.filename);
    std::fs::write(&path, &pdf.bytes)?;
    info!(path = %path.display(), sha256 = %pdf.sha256, "Wrote PDF");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use warkat_core::config::OfficeProfile;
    use warkat_core::{EngineConfig, LossReportRecord, Official, Parties, PermitRecord};
    use warkat_letters::{LossReportFields, PermitFields};

    use super::*;
    use crate::pdf::inspect::PdfInspector;

    fn engine() -> LetterEngine {
        LetterEngine::from_config(&EngineConfig::default()).unwrap()
    }

    fn parties() -> Parties {
        Parties {
            signer: Official {
                name: Some("Hendra Siregar".into()),
                rank: Some("AKP".into()),
                nrp: Some("78050123".into()),
                title: None,
            },
            receiver: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn filenames_are_safe() {
        assert_eq!(
            document_filename("SI/42/X/2026/MB", "Budi  Santoso"),
            "SI-42-X-2026-MB-Budi_Santoso.pdf"
        );
        assert_eq!(
            document_filename("STPLK/.../X/2026/MB", "R. Siti: Aminah"),
            "STPLK-X-2026-MB-R-_Siti_Aminah.pdf"
        );
        assert_eq!(sanitize_filename("../..", "x"), "x");
        assert_eq!(sanitize_filename("-", "TANPA-NAMA"), "TANPA-NAMA");
    }

    #[test]
    fn fingerprint_is_sha256_hex() {
        assert_eq!(
            fingerprint(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn permit_exports_two_a4_pages() {
        let record = PermitRecord {
            sequence: Some(42),
            applicant_name: Some("Budi Santoso".into()),
            event_name: Some("Pesta Pernikahan".into()),
            event_date: Some("2026-10-24".into()),
            created_at: Some("2026-10-15".into()),
            ..PermitRecord::default()
        };
        let fields = PermitFields::build(&record, &parties(), &OfficeProfile::default(), today());
        let pdf = render_pdf(&engine(), &fields, &RenderAssets::default()).unwrap();

        assert_eq!(pdf.pages, 2);
        assert_eq!(pdf.filename, "SI-42-X-2026-MB-Budi_Santoso.pdf");
        assert_eq!(pdf.sha256, fingerprint(&pdf.bytes));

        let inspector = PdfInspector::from_bytes(&pdf.bytes).unwrap();
        assert_eq!(inspector.page_count(), 2);
        let (w, h) = inspector.page_size_mm(1).unwrap();
        assert!((w - 210.0).abs() < 0.5, "width {w}");
        assert!((h - 297.0).abs() < 0.5, "height {h}");
    }

    #[test]
    fn loss_report_exports_one_page() {
        let record = LossReportRecord {
            sequence: Some(118),
            reporter_name: Some("Siti Aminah".into()),
            lost_items: vec!["KTP".into(), "SIM C".into()],
            reported_at: Some("2026-10-19 10:20".into()),
            ..LossReportRecord::default()
        };
        let fields =
            LossReportFields::build(&record, &parties(), &OfficeProfile::default(), today());
        let pdf = render_pdf(&engine(), &fields, &RenderAssets::default()).unwrap();
        assert_eq!(pdf.pages, 1);
        assert!(pdf.fits);

        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(&pdf, dir.path().join("out")).unwrap();
        assert_eq!(path.file_name().unwrap(), "STPLK-118-X-2026-MB-Siti_Aminah.pdf");
        assert_eq!(PdfInspector::open(&path).unwrap().page_count(), 1);
    }

    #[test]
    fn rendering_is_deterministic_in_layout() {
        let record = LossReportRecord {
            sequence: Some(1),
            reporter_name: Some("Rudi".into()),
            ..LossReportRecord::default()
        };
        let fields =
            LossReportFields::build(&record, &parties(), &OfficeProfile::default(), today());
        let engine = engine();
        let a = render_pdf(&engine, &fields, &RenderAssets::default()).unwrap();
        let b = render_pdf(&engine, &fields, &RenderAssets::default()).unwrap();
        assert_eq!(a.scale, b.scale);
        assert_eq!(a.pages, b.pages);
        assert_eq!(a.filename, b.filename);
    }
}
