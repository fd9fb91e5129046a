// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF drawing surface: the layout engine's backend over `printpdf` 0.8.
//
// printpdf 0.8 is data-oriented: each page is a `Vec<Op>`, collected into
// `PdfPage`s and serialised once by `PdfDocument::save()`. The engine works in
// millimetres from the top-left; PDF user space is points from the
// bottom-left, so every y coordinate is flipped against the page height.

use std::sync::Arc;

use printpdf::graphics::{LinePoint, PaintMode, Polygon, PolygonRing, WindingOrder};
use printpdf::{
    BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt, RawImage,
    RawImageData, RawImageFormat, TextItem, XObjectId, XObjectTransform,
};
use tracing::{debug, instrument};
use warkat_core::error::WarkatError;
use warkat_core::{PageGeometry, RasterImage, Result};
use warkat_layout::{Align, DrawingSurface, FontWeight, metrics};

/// Native resolution images are placed at; the transform scales from there.
const IMAGE_DPI: f32 = 72.0;

fn builtin(weight: FontWeight) -> BuiltinFont {
    match weight {
        FontWeight::Normal => BuiltinFont::TimesRoman,
        FontWeight::Bold => BuiltinFont::TimesBold,
    }
}

/// A letter being drawn into a PDF document.
///
/// Text is set in the built-in Times faces and measured with the same width
/// tables the layout engine wraps against, so what was measured is what gets
/// printed.
pub struct PdfSurface {
    doc: PdfDocument,
    page: PageGeometry,
    finished: Vec<PdfPage>,
    ops: Vec<Op>,
    weight: FontWeight,
    size_pt: f32,
    /// XObjects already embedded, keyed by the address of the shared image.
    images: Vec<(usize, XObjectId)>,
}

impl PdfSurface {
    /// Start an empty document with one blank page.
    pub fn new(page: PageGeometry, title: &str) -> Self {
        Self {
            doc: PdfDocument::new(title),
            page,
            finished: Vec::new(),
            ops: Vec::new(),
            weight: FontWeight::Normal,
            size_pt: 12.0,
            images: Vec::new(),
        }
    }

    fn page_size(&self) -> (Mm, Mm) {
        (Mm(self.page.width), Mm(self.page.height))
    }

    /// Engine coordinates to a PDF point.
    fn point(&self, x: f32, y: f32) -> Point {
        Point {
            x: Mm(x).into_pt(),
            y: Mm(self.page.height - y).into_pt(),
        }
    }

    fn xobject_for(&mut self, image: &Arc<RasterImage>) -> XObjectId {
        let key = Arc::as_ptr(image) as usize;
        if let Some((_, id)) = self.images.iter().find(|(k, _)| *k == key) {
            return id.clone();
        }

        let raw = RawImage {
            pixels: RawImageData::U8(image.rgb.clone()),
            width: image.width as usize,
            height: image.height as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let id = self.doc.add_image(&raw);
        debug!(width = image.width, height = image.height, "Image embedded");
        self.images.push((key, id.clone()));
        id
    }

    /// Close the last page and serialise the document.
    #[instrument(skip_all, fields(pages = self.page_count()))]
    pub fn export_bytes(mut self) -> Result<Vec<u8>> {
        let (w, h) = self.page_size();
        let last = std::mem::take(&mut self.ops);
        self.finished.push(PdfPage::new(w, h, last));
        self.doc.with_pages(self.finished);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let bytes = self.doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            debug!(count = warnings.len(), "printpdf reported warnings");
        }
        if bytes.is_empty() {
            return Err(WarkatError::Pdf("serialiser produced no output".into()));
        }

        debug!(bytes = bytes.len(), "PDF serialised");
        Ok(bytes)
    }
}

impl DrawingSurface for PdfSurface {
    fn set_font(&mut self, weight: FontWeight, size_pt: f32) {
        self.weight = weight;
        self.size_pt = size_pt;
    }

    fn measure(&self, text: &str) -> f32 {
        metrics::text_width(text, self.weight, self.size_pt)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: Align) {
        if text.is_empty() {
            return;
        }
        let left = align.left_edge(x, self.measure(text));
        let pos = self.point(left, y);
        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor { pos });
        self.ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(self.size_pt),
            font: builtin(self.weight),
        });
        self.ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.to_owned())],
            font: builtin(self.weight),
        });
        self.ops.push(Op::EndTextSection);
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32) {
        let line = Polygon {
            rings: vec![PolygonRing {
                points: vec![
                    LinePoint { p: self.point(x1, y1), bezier: false },
                    LinePoint { p: self.point(x2, y2), bezier: false },
                ],
            }],
            mode: PaintMode::Stroke,
            winding_order: WindingOrder::NonZero,
        };
        self.ops.push(Op::SetOutlineThickness { pt: Mm(width).into_pt() });
        self.ops.push(Op::DrawPolygon { polygon: line });
    }

    fn draw_image(&mut self, image: &Arc<RasterImage>, x: f32, y: f32, w: f32, h: f32) {
        if image.width == 0 || image.height == 0 || image.rgb.is_empty() {
            debug!("Skipping empty image");
            return;
        }
        let id = self.xobject_for(image);
        let bottom_left = self.point(x, y + h);
        let transform = XObjectTransform {
            translate_x: Some(bottom_left.x),
            translate_y: Some(bottom_left.y),
            scale_x: Some(Mm(w).into_pt().0 / image.width as f32),
            scale_y: Some(Mm(h).into_pt().0 / image.height as f32),
            dpi: Some(IMAGE_DPI),
            rotate: None,
        };
        self.ops.push(Op::UseXobject { id, transform });
    }

    fn new_page(&mut self) {
        let (w, h) = self.page_size();
        let ops = std::mem::take(&mut self.ops);
        self.finished.push(PdfPage::new(w, h, ops));
    }

    fn page_count(&self) -> usize {
        self.finished.len() + 1
    }
}
