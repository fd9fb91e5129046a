// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Block renderers: letterhead, titles, paragraphs, labelled lists, key-value
// rows with dash-fill, centred lines and signature columns. Each one draws at
// the context cursor and leaves the cursor below what it drew.

use std::sync::Arc;

use warkat_core::{EngineConfig, RasterImage, Result};

use crate::bold::BoldRangeDetector;
use crate::context::RenderContext;
use crate::fill::DashFill;
use crate::metrics::FontWeight;
use crate::protect::PhraseProtector;
use crate::rich::{LineStyle, RichText};
use crate::surface::{Align, DrawingSurface};
use crate::template::{SignatureBlock, SignatureColumn};
use crate::wrap::{Line, wrap};

/// Width of the letterhead column at the top left.
const LETTERHEAD_WIDTH_MM: f32 = 85.0;
/// Logo height at scale 1.0.
const LOGO_HEIGHT_MM: f32 = 20.0;
/// Distance from the label start to the colon in labelled rows.
const LABEL_WIDTH_MM: f32 = 38.0;
/// Space after the colon.
const COLON_GAP_MM: f32 = 3.0;
/// Room reserved for `1.` in numbered lists.
const NUMBER_WIDTH_MM: f32 = 6.0;
/// Vertical distance between the two letterhead rules.
const DOUBLE_RULE_GAP_MM: f32 = 0.8;
/// Space kept clear between side-by-side signature columns.
const COLUMN_GUTTER_MM: f32 = 6.0;

/// Where the last wrapped line ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEnd {
    pub x: f32,
    pub baseline: f32,
}

/// Draws blocks. Holds the compiled phrase machinery; per-pass state lives in
/// the [`RenderContext`].
#[derive(Debug)]
pub struct Typesetter {
    protector: PhraseProtector,
    rich: RichText,
    fill: DashFill,
    rule_width: f32,
    underline_offset: f32,
}

impl Typesetter {
    pub fn new(
        protector: PhraseProtector,
        rich: RichText,
        fill: DashFill,
        rule_width: f32,
        underline_offset: f32,
    ) -> Self {
        Self {
            protector,
            rich,
            fill,
            rule_width,
            underline_offset,
        }
    }

    /// Compile phrases and patterns from the configuration.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let typo = &config.typography;
        let detector = BoldRangeDetector::from_patterns(&config.phrases.bold_patterns)?;
        Ok(Self::new(
            PhraseProtector::new(&config.phrases.protected)?,
            RichText::new(detector, typo.min_word_gap_mm, typo.rule_width_mm),
            DashFill::new(&config.fill),
            typo.rule_width_mm,
            typo.underline_offset_mm,
        ))
    }

    /// Protect phrases, then wrap with the bold-aware line measure.
    pub fn wrapped_lines<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        text: &str,
        width: f32,
        style: LineStyle,
    ) -> Vec<Line> {
        let protected = self.protector.protect(text);
        wrap(&protected, width, |candidate| {
            self.rich.measure_line(surface, candidate, style)
        })
    }

    /// Draw wrapped lines from the cursor down. Lines that end a paragraph
    /// are always plain.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_lines<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        ctx: &mut RenderContext,
        lines: &[Line],
        x: f32,
        width: f32,
        style: LineStyle,
        justify: bool,
    ) -> Option<LineEnd> {
        let mut end = None;
        for line in lines {
            let y = ctx.baseline(style.size_pt);
            let drawn = if justify && !line.ends_paragraph {
                self.rich
                    .draw_justified(surface, &mut ctx.underline, &line.text, x, y, width, style)
            } else {
                self.rich
                    .draw_plain(surface, &mut ctx.underline, &line.text, x, y, style)
            };
            end = Some(LineEnd {
                x: x + drawn,
                baseline: y,
            });
            ctx.advance_line(style.size_pt);
        }
        end
    }

    pub fn paragraph<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        ctx: &mut RenderContext,
        text: &str,
        justify: bool,
        indent: f32,
    ) {
        let style = LineStyle::regular(ctx.attempt.body_pt);
        let x = ctx.page.left + indent;
        let width = ctx.page.right_edge() - x;
        let lines = self.wrapped_lines(surface, text, width, style);
        self.draw_lines(surface, ctx, &lines, x, width, style, justify);
        ctx.gap();
    }

    /// Label and colon, then items with a hanging indent. An empty label
    /// starts the items at the margin; an empty list prints `-`.
    pub fn labeled<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        ctx: &mut RenderContext,
        label: &str,
        items: &[String],
        numbered: bool,
    ) {
        let style = LineStyle::regular(ctx.attempt.body_pt);
        let label_x = ctx.page.left;
        let colon_x = label_x + LABEL_WIDTH_MM;
        let number_x = if label.is_empty() {
            label_x
        } else {
            colon_x + COLON_GAP_MM
        };
        let text_x = if numbered {
            number_x + NUMBER_WIDTH_MM
        } else {
            number_x
        };
        let width = ctx.page.right_edge() - text_x;

        let y = ctx.baseline(style.size_pt);
        surface.set_font(FontWeight::Normal, style.size_pt);
        if !label.is_empty() {
            surface.draw_text(label, label_x, y, Align::Left);
            surface.draw_text(":", colon_x, y, Align::Left);
        }

        if items.is_empty() {
            surface.draw_text("-", number_x, y, Align::Left);
            ctx.advance_line(style.size_pt);
        }

        for (i, item) in items.iter().enumerate() {
            if numbered {
                let y = ctx.baseline(style.size_pt);
                surface.set_font(FontWeight::Normal, style.size_pt);
                surface.draw_text(&format!("{}.", i + 1), number_x, y, Align::Left);
            }
            let lines = self.wrapped_lines(surface, item, width, style);
            self.draw_lines(surface, ctx, &lines, text_x, width, style, true);
        }
        ctx.gap();
    }

    /// `label : value` rows. With `fill` the final line of every value is
    /// padded to the right margin.
    pub fn key_values<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        ctx: &mut RenderContext,
        rows: &[(String, String)],
        fill: bool,
        indent: f32,
    ) {
        let style = LineStyle::regular(ctx.attempt.body_pt);
        let label_x = ctx.page.left + indent;
        let colon_x = label_x + LABEL_WIDTH_MM;
        let value_x = colon_x + COLON_GAP_MM;
        let right = ctx.page.right_edge();
        let width = right - value_x;

        for (label, value) in rows {
            let y = ctx.baseline(style.size_pt);
            surface.set_font(FontWeight::Normal, style.size_pt);
            surface.draw_text(label, label_x, y, Align::Left);
            surface.draw_text(":", colon_x, y, Align::Left);

            let value = if value.trim().is_empty() { "-" } else { value.as_str() };
            let lines = self.wrapped_lines(surface, value, width, style);
            let end = self.draw_lines(surface, ctx, &lines, value_x, width, style, false);
            if let (true, Some(end)) = (fill, end) {
                self.fill
                    .fill_after(surface, end.x, end.baseline, right, style.size_pt);
            }
        }
        ctx.gap();
    }

    /// Justified paragraph whose final line is padded to the margin.
    pub fn dash_fill_paragraph<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        ctx: &mut RenderContext,
        text: &str,
        indent: f32,
    ) {
        let style = LineStyle::regular(ctx.attempt.body_pt);
        let x = ctx.page.left + indent;
        let right = ctx.page.right_edge();
        let width = right - x;
        let lines = self.wrapped_lines(surface, text, width, style);
        if let Some(end) = self.draw_lines(surface, ctx, &lines, x, width, style, true) {
            self.fill
                .fill_after(surface, end.x, end.baseline, right, style.size_pt);
        }
        ctx.gap();
    }

    /// Lines centred on the page, optionally underlined one by one.
    pub fn centered<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        ctx: &mut RenderContext,
        text: &str,
        style: LineStyle,
        underline: bool,
    ) {
        let lines = self.wrapped_lines(surface, text, ctx.page.content_width(), style);
        for line in &lines {
            let width = self.rich.measure_line(surface, &line.text, style);
            let x = ctx.page.center_x() - width / 2.0;
            let y = ctx.baseline(style.size_pt);
            self.rich
                .draw_plain(surface, &mut ctx.underline, &line.text, x, y, style);
            if underline && width > 0.0 {
                let uy = y + self.underline_offset;
                surface.draw_line(x, uy, x + width, uy, self.rule_width);
            }
            ctx.advance_line(style.size_pt);
        }
    }

    /// Office header lines centred in the top-left column, a double rule under
    /// them and the emblem centred below. The column slides right when its
    /// widest line would cross the left margin.
    pub fn letterhead<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        ctx: &mut RenderContext,
        logo: Option<&Arc<RasterImage>>,
        lines: &[String],
        address: Option<&str>,
    ) {
        let size = ctx.attempt.heading_pt;
        let small = ctx.attempt.small_pt;
        let span = ColumnSpan::new(ctx.page.left, ctx.page.right_edge());
        let lines = fit_lines(surface, lines, FontWeight::Bold, size, span.width());
        let address = address
            .map(|a| fit_lines(surface, &[a.to_owned()], FontWeight::Normal, small, span.width()))
            .unwrap_or_default();

        let widest = widest_line(surface, &lines, FontWeight::Bold, size)
            .max(widest_line(surface, &address, FontWeight::Normal, small));
        let cx = span.center_for(ctx.page.left + LETTERHEAD_WIDTH_MM / 2.0, widest);

        surface.set_font(FontWeight::Bold, size);
        for line in &lines {
            let y = ctx.baseline(size);
            surface.draw_text(line, cx, y, Align::Center);
            ctx.advance_line(size);
        }

        surface.set_font(FontWeight::Normal, small);
        for line in &address {
            let y = ctx.baseline(small);
            surface.draw_text(line, cx, y, Align::Center);
            ctx.advance_line(small);
        }

        if widest > 0.0 {
            let (x1, x2) = (cx - widest / 2.0, cx + widest / 2.0);
            let y = ctx.cursor_y;
            surface.draw_line(x1, y, x2, y, self.rule_width * 2.0);
            surface.draw_line(x1, y + DOUBLE_RULE_GAP_MM, x2, y + DOUBLE_RULE_GAP_MM, self.rule_width);
            ctx.advance(DOUBLE_RULE_GAP_MM);
        }
        ctx.gap();

        if let Some(logo) = logo.filter(|l| l.aspect() > 0.0) {
            let h = LOGO_HEIGHT_MM * ctx.attempt.scale;
            let w = h / logo.aspect();
            surface.draw_image(logo, ctx.page.center_x() - w / 2.0, ctx.cursor_y, w, h);
            ctx.advance(h);
            ctx.gap();
        }
    }

    /// Bold centred heading with an optional subtitle line under it.
    pub fn title<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        ctx: &mut RenderContext,
        text: &str,
        subtitle: Option<&str>,
        underline: bool,
    ) {
        let heading = LineStyle::bold(ctx.attempt.title_pt);
        let body = LineStyle::regular(ctx.attempt.body_pt);
        self.centered(surface, ctx, text, heading, underline);
        if let Some(subtitle) = subtitle {
            self.centered(surface, ctx, subtitle, body, false);
        }
        ctx.gap();
    }

    /// One or two columns side by side, then an optional centred signer
    /// underneath. The cursor ends below the tallest column.
    ///
    /// A lone right column may spread left across the page; side-by-side
    /// columns wrap within their own half.
    pub fn signature<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        ctx: &mut RenderContext,
        block: &SignatureBlock,
    ) {
        let size = ctx.attempt.body_pt;
        let (left, right) = (ctx.page.left, ctx.page.right_edge());
        let center = ctx.page.center_x();
        let quarter = ctx.page.content_width() / 4.0;
        let half_gutter = COLUMN_GUTTER_MM / 2.0;

        let left_column = block.left.as_ref().map(|column| {
            let span = ColumnSpan::new(left, center - half_gutter);
            PlacedColumn::fit(surface, column, span, left + quarter, size)
        });
        let right_span = if left_column.is_some() {
            ColumnSpan::new(center + half_gutter, right)
        } else {
            ColumnSpan::new(left, right)
        };
        let right_column = PlacedColumn::fit(surface, &block.right, right_span, center + quarter, size);

        // Side-by-side headings and names line up.
        let rows = left_column
            .iter()
            .chain([&right_column])
            .fold(ColumnRows::default(), |rows, c| rows.max(c.rows()));

        let start = ctx.cursor_y;
        let mut bottom = start;
        if let Some(column) = &left_column {
            self.signature_column(surface, ctx, column, rows);
            bottom = bottom.max(ctx.cursor_y);
            ctx.cursor_y = start;
        }
        self.signature_column(surface, ctx, &right_column, rows);
        ctx.cursor_y = ctx.cursor_y.max(bottom);

        if let Some(below) = &block.below {
            ctx.gap();
            let column = PlacedColumn::fit(surface, below, ColumnSpan::new(left, right), center, size);
            let rows = column.rows();
            self.signature_column(surface, ctx, &column, rows);
        }
        ctx.gap();
    }

    fn signature_column<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        ctx: &mut RenderContext,
        placed: &PlacedColumn,
        rows: ColumnRows,
    ) {
        let size = ctx.attempt.body_pt;
        let column = &placed.column;
        let cx = placed.cx;

        surface.set_font(FontWeight::Normal, size);
        for line in &column.preamble {
            surface.draw_text(line, cx, ctx.baseline(size), Align::Center);
            ctx.advance_line(size);
        }
        for _ in column.preamble.len()..rows.preamble {
            ctx.advance_line(size);
        }

        surface.set_font(FontWeight::Bold, size);
        for line in &column.heading {
            surface.draw_text(line, cx, ctx.baseline(size), Align::Center);
            ctx.advance_line(size);
        }
        for _ in column.heading.len()..rows.heading {
            ctx.advance_line(size);
        }

        ctx.advance(ctx.attempt.signature_space);

        for line in placed.name_lines.iter() {
            let y = ctx.baseline(size);
            surface.draw_text(line, cx, y, Align::Center);
            let width = surface.measure(line);
            if width > 0.0 {
                let uy = y + self.underline_offset;
                surface.draw_line(cx - width / 2.0, uy, cx + width / 2.0, uy, self.rule_width);
            }
            ctx.advance_line(size);
        }

        surface.set_font(FontWeight::Normal, size);
        for line in &column.detail {
            surface.draw_text(line, cx, ctx.baseline(size), Align::Center);
            ctx.advance_line(size);
        }
    }
}

/// Horizontal room a centred column may use.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ColumnSpan {
    lo: f32,
    hi: f32,
}

impl ColumnSpan {
    fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    fn width(&self) -> f32 {
        (self.hi - self.lo).max(0.0)
    }

    /// Centre nearest to `preferred` that keeps something `width` wide inside
    /// the span. Content wider than the span starts at `lo`.
    fn center_for(&self, preferred: f32, width: f32) -> f32 {
        let half = width / 2.0;
        preferred.min(self.hi - half).max(self.lo + half)
    }
}

/// Rows each part of a signature column occupies.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct ColumnRows {
    preamble: usize,
    heading: usize,
}

impl ColumnRows {
    fn max(self, other: Self) -> Self {
        Self {
            preamble: self.preamble.max(other.preamble),
            heading: self.heading.max(other.heading),
        }
    }
}

/// A signature column wrapped to its span, with the centre it is drawn on.
#[derive(Debug, Clone)]
struct PlacedColumn {
    column: SignatureColumn,
    name_lines: Vec<String>,
    cx: f32,
}

impl PlacedColumn {
    fn fit<S: DrawingSurface + ?Sized>(
        surface: &mut S,
        column: &SignatureColumn,
        span: ColumnSpan,
        preferred: f32,
        size: f32,
    ) -> Self {
        let width = span.width();
        let preamble = fit_lines(surface, &column.preamble, FontWeight::Normal, size, width);
        let heading = fit_lines(surface, &column.heading, FontWeight::Bold, size, width);
        let name_lines = fit_lines(surface, &[column.name.clone()], FontWeight::Bold, size, width);
        let detail = fit_lines(surface, &column.detail, FontWeight::Normal, size, width);

        let widest = widest_line(surface, &preamble, FontWeight::Normal, size)
            .max(widest_line(surface, &detail, FontWeight::Normal, size))
            .max(widest_line(surface, &heading, FontWeight::Bold, size))
            .max(widest_line(surface, &name_lines, FontWeight::Bold, size));

        Self {
            column: SignatureColumn {
                preamble,
                heading,
                name: column.name.clone(),
                detail,
            },
            name_lines,
            cx: span.center_for(preferred, widest),
        }
    }

    fn rows(&self) -> ColumnRows {
        ColumnRows {
            preamble: self.column.preamble.len(),
            heading: self.column.heading.len(),
        }
    }
}

/// Wrap each line to `width` in the given face.
fn fit_lines<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    lines: &[String],
    weight: FontWeight,
    size: f32,
    width: f32,
) -> Vec<String> {
    surface.set_font(weight, size);
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        out.extend(
            wrap(line, width, |candidate| surface.measure(candidate))
                .into_iter()
                .map(|l| l.text),
        );
    }
    out
}

fn widest_line<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    lines: &[String],
    weight: FontWeight,
    size: f32,
) -> f32 {
    surface.set_font(weight, size);
    lines.iter().map(|l| surface.measure(l)).fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ScaleAttempt;
    use crate::recording::{DrawCommand, RecordingSurface};
    use warkat_core::config::Typography;

    fn setup() -> (Typesetter, RenderContext, RecordingSurface) {
        let config = EngineConfig::default();
        let typesetter = Typesetter::from_config(&config).unwrap();
        let attempt = ScaleAttempt::new(1.0, &Typography::default());
        let ctx = RenderContext::new(
            attempt,
            config.page_geometry(),
            &config.phrases.underline,
            config.typography.underline_offset_mm,
        );
        (typesetter, ctx, RecordingSurface::new())
    }

    fn texts_with_y(surface: &RecordingSurface) -> Vec<(String, f32, f32)> {
        surface
            .commands()
            .filter_map(|c| match c {
                DrawCommand::Text { text, x, y, .. } => Some((text.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    const ADDRESS: &str = "Jalan Jenderal Gatot Subroto Gang Keluarga Nomor 17 B, Kelurahan \
                           Sei Sikambing B, Kecamatan Medan Sunggal, Kota Medan, Provinsi \
                           Sumatera Utara 20122, Indonesia";

    #[test]
    fn wrapped_value_gets_filler_on_last_line_only() {
        let (ts, mut ctx, mut surface) = setup();
        let rows = vec![("Alamat".to_owned(), ADDRESS.to_owned())];
        ts.key_values(&mut surface, &mut ctx, &rows, true, 0.0);

        let texts = texts_with_y(&surface);
        let fillers: Vec<_> = texts.iter().filter(|t| t.0.starts_with('-')).collect();
        assert_eq!(fillers.len(), 1);

        let mut baselines: Vec<f32> = texts
            .iter()
            .filter(|t| !t.0.starts_with('-'))
            .map(|t| t.2)
            .collect();
        baselines.dedup();
        assert!(baselines.len() >= 3, "address wrapped to {} lines", baselines.len());
        assert_eq!(fillers[0].2, *baselines.last().unwrap());
        assert!(fillers[0].1 + surface.measure_as(&fillers[0].0, FontWeight::Normal, 12.0)
            <= ctx.page.right_edge() + 1e-3);
    }

    #[test]
    fn empty_value_prints_dash() {
        let (ts, mut ctx, mut surface) = setup();
        let rows = vec![("Pekerjaan".to_owned(), "  ".to_owned())];
        ts.key_values(&mut surface, &mut ctx, &rows, false, 0.0);
        assert_eq!(surface.texts(), vec!["Pekerjaan", ":", "-"]);
    }

    #[test]
    fn numbered_items_hang_from_number() {
        let (ts, mut ctx, mut surface) = setup();
        let items = vec![
            "Undang-Undang Nomor 2 Tahun 2002 tentang Kepolisian Negara Republik Indonesia".into(),
            "Peraturan Kepolisian tentang tata cara perizinan keramaian umum".into(),
        ];
        ts.labeled(&mut surface, &mut ctx, "Dasar", &items, true);

        let texts = texts_with_y(&surface);
        let one = texts.iter().find(|t| t.0 == "1.").unwrap();
        let two = texts.iter().find(|t| t.0 == "2.").unwrap();
        assert_eq!(one.1, two.1);
        assert!(two.2 > one.2);
        let first_word = texts.iter().find(|t| t.0 == "Undang-Undang").unwrap();
        assert!(first_word.1 > one.1);
    }

    #[test]
    fn justified_paragraph_lines_reach_margin() {
        let (ts, mut ctx, mut surface) = setup();
        let text = "Pada hari ini telah datang ke Kantor Kepolisian Sektor Medan Baru seorang \
                    pelapor yang melaporkan kehilangan barang miliknya di sekitar pasar pada \
                    sore hari ketika sedang berbelanja kebutuhan sehari-hari";
        ts.paragraph(&mut surface, &mut ctx, text, true, 0.0);

        let right = ctx.page.right_edge();
        let texts = texts_with_y(&surface);
        let first_y = texts[0].2;
        let last_on_first_line = surface
            .commands()
            .filter(|c| matches!(c, DrawCommand::Text { y, .. } if *y == first_y))
            .last()
            .unwrap();
        assert!((last_on_first_line.right_edge() - right).abs() < 1e-2);
    }

    #[test]
    fn signature_columns_share_top() {
        let (ts, mut ctx, mut surface) = setup();
        let column = |name: &str| SignatureColumn {
            preamble: vec![],
            heading: vec!["PELAPOR".into()],
            name: name.into(),
            detail: vec![],
        };
        let block = SignatureBlock {
            left: Some(column("Budi")),
            right: SignatureColumn {
                preamble: vec!["Medan, 19 Oktober 2026".into()],
                detail: vec!["IPTU NRP 12345678".into()],
                ..column("Andi")
            },
            below: None,
        };
        let start = ctx.cursor_y;
        ts.signature(&mut surface, &mut ctx, &block);

        let texts = texts_with_y(&surface);
        let headings: Vec<_> = texts.iter().filter(|t| t.0 == "PELAPOR").collect();
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].2, headings[1].2);
        assert!(ctx.cursor_y > start);
        // Name underlines.
        assert_eq!(surface.lines().len(), 2);
    }

    fn assert_inside_margins(surface: &RecordingSurface, ctx: &RenderContext) {
        let (left, right) = (ctx.page.left, ctx.page.right_edge());
        for cmd in surface.commands() {
            assert!(cmd.left_edge() >= left - 1e-3, "{cmd:?} starts left of {left}");
            assert!(cmd.right_edge() <= right + 1e-3, "{cmd:?} ends right of {right}");
        }
    }

    #[test]
    fn letterhead_stays_inside_left_margin() {
        let (ts, mut ctx, mut surface) = setup();
        let office = EngineConfig::default().office;
        ts.letterhead(
            &mut surface,
            &mut ctx,
            None,
            &office.header_lines,
            office.address.as_deref(),
        );
        assert_inside_margins(&surface, &ctx);

        // The rules span the widest line exactly.
        let texts = texts_with_y(&surface);
        let first_x = texts.iter().map(|t| t.1).fold(f32::MAX, f32::min);
        let rule = surface.lines()[0];
        assert!((rule.0 - first_x).abs() < 1e-3);
    }

    #[test]
    fn short_letterhead_keeps_its_column() {
        let (ts, mut ctx, mut surface) = setup();
        ts.letterhead(&mut surface, &mut ctx, None, &["POLSEK".to_owned()], None);
        let width = surface.measure_as("POLSEK", FontWeight::Bold, ctx.attempt.heading_pt);
        let x = texts_with_y(&surface)[0].1;
        let expected = ctx.page.left + LETTERHEAD_WIDTH_MM / 2.0 - width / 2.0;
        assert!((x - expected).abs() < 1e-3);
    }

    #[test]
    fn lone_signature_column_moves_in_from_right_margin() {
        let (ts, mut ctx, mut surface) = setup();
        let block = SignatureBlock {
            left: None,
            right: SignatureColumn {
                preamble: vec!["Dikeluarkan di : Medan".into()],
                heading: vec!["KEPALA KEPOLISIAN SEKTOR MEDAN BARU".into()],
                name: "Dedi Kurniawan".into(),
                detail: vec!["KOMPOL NRP 78050123".into()],
            },
            below: None,
        };
        ts.signature(&mut surface, &mut ctx, &block);
        assert_inside_margins(&surface, &ctx);
        // Moved, not wrapped.
        assert!(surface.texts().contains(&"KEPALA KEPOLISIAN SEKTOR MEDAN BARU"));
    }

    #[test]
    fn side_by_side_columns_wrap_within_their_half() {
        let (ts, mut ctx, mut surface) = setup();
        let column = |heading: &str, name: &str| SignatureColumn {
            preamble: vec![],
            heading: vec![heading.into()],
            name: name.into(),
            detail: vec![],
        };
        let block = SignatureBlock {
            left: Some(column("PELAPOR", "Siti Aminah")),
            right: column("KEPALA KEPOLISIAN SEKTOR MEDAN BARU", "Hendra Siregar"),
            below: None,
        };
        ts.signature(&mut surface, &mut ctx, &block);
        assert_inside_margins(&surface, &ctx);

        let center = ctx.page.center_x();
        let texts = texts_with_y(&surface);
        let right_heading: Vec<_> = texts
            .iter()
            .filter(|t| t.0.starts_with("KEPALA") || t.0.contains("BARU"))
            .collect();
        assert!(right_heading.len() >= 2, "heading wrapped: {right_heading:?}");
        assert!(right_heading.iter().all(|t| t.1 >= center));

        // Names share a baseline even though the headings differ in height.
        let left_name = texts.iter().find(|t| t.0 == "Siti Aminah").unwrap();
        let right_name = texts.iter().find(|t| t.0 == "Hendra Siregar").unwrap();
        assert_eq!(left_name.2, right_name.2);
        assert!(left_name.1 + surface.measure_as("Siti Aminah", FontWeight::Bold, 12.0) <= center);
    }

    #[test]
    fn protected_phrase_is_never_split_by_wrapping() {
        let (ts, _ctx, mut surface) = setup();
        let style = LineStyle::regular(12.0);
        let text = "dilarang keras memutar lagu REMIX / HOUSE MUSIK selama acara berlangsung";
        // Room for everything up to REMIX and not a word more.
        let width = ts
            .rich
            .measure_line(&mut surface, "dilarang keras memutar lagu REMIX", style)
            + 0.01;

        let unprotected = wrap(text, width, |c| ts.rich.measure_line(&mut surface, c, style));
        assert!(
            unprotected
                .iter()
                .all(|l| !(l.text.contains("REMIX") && l.text.contains("MUSIK"))),
            "plain wrapping should break inside the phrase"
        );

        let lines = ts.wrapped_lines(&mut surface, text, width, style);
        let holders: Vec<_> = lines.iter().filter(|l| l.text.contains("REMIX")).collect();
        assert_eq!(holders.len(), 1);
        assert!(holders[0].text.contains("MUSIK"));
        assert!(lines.iter().all(|l| !l.text.starts_with('/')));
    }
}
