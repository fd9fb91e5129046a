// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The letter engine: walks a template block by block onto a drawing surface
// and hands whole passes to the auto-scale controller.

use tracing::{debug, info, instrument};
use warkat_core::config::{Typography, UnderlinePhrase};
use warkat_core::{EngineConfig, PageGeometry, Result};

use crate::autoscale::{AutoScaler, RenderedDocument};
use crate::blocks::Typesetter;
use crate::context::{RenderAssets, RenderContext, ScaleAttempt};
use crate::rich::LineStyle;
use crate::surface::DrawingSurface;
use crate::template::{Block, LetterTemplate};

/// Where each page of one pass ended.
#[derive(Debug, Clone, PartialEq)]
pub struct PassReport {
    pub scale: f32,
    /// Cursor position at the end of each page, top to bottom.
    pub page_ends: Vec<f32>,
}

impl PassReport {
    pub fn fits(&self, page: &PageGeometry, safety_margin: f32) -> bool {
        self.page_ends
            .iter()
            .all(|end| end + safety_margin <= page.safe_bottom())
    }
}

#[derive(Debug)]
pub struct LetterEngine {
    typesetter: Typesetter,
    typography: Typography,
    underline: UnderlinePhrase,
    page: PageGeometry,
    scaler: AutoScaler,
}

impl LetterEngine {
    /// Compile the configured phrases and patterns. Fails on an invalid
    /// pattern.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let page = config.page_geometry();
        Ok(Self {
            typesetter: Typesetter::from_config(config)?,
            typography: config.typography.clone(),
            underline: config.phrases.underline.clone(),
            page,
            scaler: AutoScaler::new(config.autoscale.clone(), page),
        })
    }

    pub fn page(&self) -> PageGeometry {
        self.page
    }

    pub fn scaler(&self) -> &AutoScaler {
        &self.scaler
    }

    /// Render the template once at `scale`.
    pub fn render_pass<S: DrawingSurface + ?Sized>(
        &self,
        template: &LetterTemplate,
        scale: f32,
        surface: &mut S,
        assets: &RenderAssets,
    ) -> PassReport {
        let attempt = ScaleAttempt::new(scale, &self.typography);
        let mut ctx = RenderContext::new(
            attempt,
            self.page,
            &self.underline,
            self.typography.underline_offset_mm,
        );
        let ts = &self.typesetter;

        for block in &template.blocks {
            match block {
                Block::Letterhead { lines, address } => {
                    ts.letterhead(surface, &mut ctx, assets.logo.as_ref(), lines, address.as_deref());
                }
                Block::Title {
                    text,
                    subtitle,
                    underline,
                } => ts.title(surface, &mut ctx, text, subtitle.as_deref(), *underline),
                Block::Paragraph {
                    text,
                    justify,
                    indent_mm,
                } => ts.paragraph(surface, &mut ctx, text, *justify, *indent_mm),
                Block::Labeled {
                    label,
                    items,
                    numbered,
                } => ts.labeled(surface, &mut ctx, label, items, *numbered),
                Block::KeyValues {
                    rows,
                    fill,
                    indent_mm,
                } => ts.key_values(surface, &mut ctx, rows, *fill, *indent_mm),
                Block::DashFill { text, indent_mm } => {
                    ts.dash_fill_paragraph(surface, &mut ctx, text, *indent_mm);
                }
                Block::Centered {
                    text,
                    bold,
                    underline,
                } => {
                    let size = attempt.body_pt;
                    let style = if *bold {
                        LineStyle::bold(size)
                    } else {
                        LineStyle::regular(size)
                    };
                    ts.centered(surface, &mut ctx, text, style, *underline);
                    ctx.gap();
                }
                Block::Spacer { lines } => {
                    ctx.advance(lines * attempt.line_height(attempt.body_pt));
                }
                Block::Signature(signature) => ts.signature(surface, &mut ctx, signature),
                Block::PageBreak => {
                    ctx.finish_page();
                    surface.new_page();
                }
            }
        }
        ctx.finish_page();

        let report = PassReport {
            scale,
            page_ends: ctx.into_page_ends(),
        };
        debug!(template = %template.name, scale, ends = ?report.page_ends, "Rendered pass");
        report
    }

    /// Render with automatic scaling. `make_surface` is called once per
    /// attempt so no state leaks between passes.
    #[instrument(skip_all, fields(template = %template.name, weight = weight))]
    pub fn render<S, F>(
        &self,
        template: &LetterTemplate,
        weight: f32,
        assets: &RenderAssets,
        mut make_surface: F,
    ) -> RenderedDocument<S>
    where
        S: DrawingSurface,
        F: FnMut() -> S,
    {
        let doc = self.scaler.render(weight, |scale| {
            let mut surface = make_surface();
            let report = self.render_pass(template, scale, &mut surface, assets);
            (surface, report)
        });
        info!(
            scale = doc.scale,
            fits = doc.fits,
            attempts = doc.attempts,
            pages = doc.page_count(),
            "Letter laid out"
        );
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingSurface;
    use crate::template::{SignatureBlock, SignatureColumn};

    fn engine() -> LetterEngine {
        LetterEngine::from_config(&EngineConfig::default()).unwrap()
    }

    fn short_letter() -> LetterTemplate {
        LetterTemplate::new("test")
            .with(Block::Letterhead {
                lines: vec!["KEPOLISIAN NEGARA REPUBLIK INDONESIA".into()],
                address: None,
            })
            .with(Block::Title {
                text: "SURAT IZIN".into(),
                subtitle: Some("Nomor : SI/1/X/2026/MB".into()),
                underline: true,
            })
            .with(Block::paragraph(
                "Dilarang memutar musik REMIX / HOUSE MUSIK selama kegiatan berlangsung.",
            ))
            .with(Block::Signature(SignatureBlock {
                right: SignatureColumn {
                    heading: vec!["KAPOLSEK".into()],
                    name: "BUDI".into(),
                    ..SignatureColumn::default()
                },
                ..SignatureBlock::default()
            }))
    }

    #[test]
    fn short_letter_fits_first_try() {
        let doc = engine().render(&short_letter(), 0.0, &RenderAssets::default(), RecordingSurface::new);
        assert!(doc.fits);
        assert_eq!(doc.scale, 1.0);
        assert_eq!(doc.attempts, 1);
        assert_eq!(doc.surface.page_count(), 1);
    }

    #[test]
    fn page_break_starts_second_page() {
        let template = short_letter()
            .with(Block::PageBreak)
            .with(Block::paragraph("PERNYATAAN"));
        let doc = engine().render(&template, 0.0, &RenderAssets::default(), RecordingSurface::new);
        assert_eq!(doc.surface.page_count(), 2);
        assert_eq!(doc.page_count(), 2);
        assert_eq!(template.page_count(), 2);
    }

    #[test]
    fn rendering_is_deterministic() {
        let engine = engine();
        let a = engine.render(&short_letter(), 700.0, &RenderAssets::default(), RecordingSurface::new);
        let b = engine.render(&short_letter(), 700.0, &RenderAssets::default(), RecordingSurface::new);
        assert_eq!(a.scale, b.scale);
        assert_eq!(a.surface.pages(), b.surface.pages());
    }

    #[test]
    fn underline_phrase_is_drawn() {
        let engine = engine();
        let mut surface = RecordingSurface::new();
        engine.render_pass(&short_letter(), 1.0, &mut surface, &RenderAssets::default());
        // Title underline, double rule, phrase underline, signer name.
        assert_eq!(surface.lines().len(), 5);
    }

    #[test]
    fn overlong_letter_settles_on_smallest_scale() {
        let mut template = short_letter();
        for _ in 0..60 {
            template.push(Block::paragraph("Baris pengisi yang cukup panjang untuk memenuhi halaman."));
        }
        let doc = engine().render(&template, 0.0, &RenderAssets::default(), RecordingSurface::new);
        assert!(!doc.fits);
        assert_eq!(doc.scale, 0.8);
        assert_eq!(doc.attempts, 5);
        assert_eq!(doc.surface.page_count(), 1);
    }

    #[test]
    fn smaller_scale_ends_higher() {
        let engine = engine();
        let template = short_letter();
        let assets = RenderAssets::default();
        let big = engine.render_pass(&template, 1.0, &mut RecordingSurface::new(), &assets);
        let small = engine.render_pass(&template, 0.8, &mut RecordingSurface::new(), &assets);
        assert!(small.page_ends[0] < big.page_ends[0]);
    }

    #[test]
    fn engine_and_assets_cross_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LetterEngine>();
        assert_send_sync::<RenderAssets>();
        assert_send_sync::<LetterTemplate>();
    }
}
