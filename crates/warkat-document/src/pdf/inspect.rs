// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF inspector: re-read a produced letter with `lopdf` to confirm its page
// count and paper size before it is handed out.

use std::path::Path;

use lopdf::{Document, Object, ObjectId};
use tracing::{debug, instrument};
use warkat_core::Result;
use warkat_core::error::WarkatError;
use warkat_layout::metrics::MM_PER_PT;

/// Inherited attributes are looked up at most this many levels up the page
/// tree.
const MAX_TREE_DEPTH: usize = 16;

/// Read-only view of an existing PDF.
pub struct PdfInspector {
    document: Document,
}

impl PdfInspector {
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path_ref = path.as_ref();
        let document = Document::load(path_ref).map_err(|err| {
            WarkatError::Pdf(format!("failed to open {}: {}", path_ref.display(), err))
        })?;
        debug!(pages = document.get_pages().len(), "PDF loaded");
        Ok(Self { document })
    }

    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let document = Document::load_mem(data).map_err(|err| {
            WarkatError::Pdf(format!("failed to load PDF from memory: {}", err))
        })?;
        debug!(pages = document.get_pages().len(), "PDF loaded from bytes");
        Ok(Self { document })
    }

    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Width and height of a 1-indexed page in millimetres, from its
    /// (possibly inherited) `/MediaBox`.
    pub fn page_size_mm(&self, page_number: u32) -> Result<(f32, f32)> {
        let pages = self.document.get_pages();
        let page_id = *pages.get(&page_number).ok_or_else(|| {
            WarkatError::Pdf(format!(
                "page {} not found (document has {} pages)",
                page_number,
                pages.len()
            ))
        })?;

        let bounds = self
            .media_box(page_id)
            .ok_or_else(|| WarkatError::Pdf(format!("page {page_number} has no MediaBox")))?;
        let [x0, y0, x1, y1] = bounds;
        Ok(((x1 - x0).abs() * MM_PER_PT, (y1 - y0).abs() * MM_PER_PT))
    }

    fn media_box(&self, mut node: ObjectId) -> Option<[f32; 4]> {
        for _ in 0..MAX_TREE_DEPTH {
            let dict = match self.document.get_object(node).ok()? {
                Object::Dictionary(dict) => dict,
                _ => return None,
            };
            if let Ok(Object::Array(values)) = dict.get(b"MediaBox") {
                let numbers: Vec<f32> = values.iter().filter_map(|v| v.as_float().ok()).collect();
                return numbers.try_into().ok();
            }
            node = dict.get(b"Parent").ok()?.as_reference().ok()?;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_garbage() {
        let err = PdfInspector::from_bytes(b"not a pdf").err().unwrap();
        assert!(matches!(err, WarkatError::Pdf(_)));
    }

    #[test]
    fn missing_file_is_a_pdf_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PdfInspector::open(dir.path().join("missing.pdf")).err().unwrap();
        assert!(err.to_string().contains("missing.pdf"));
    }
}
