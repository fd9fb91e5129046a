// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rich line renderer: draws one wrapped line word by word, switching weight per
// bold token, either at natural spacing or fully justified, and reports every
// word to the underline sequencer.

use crate::bold::{BoldRangeDetector, Word};
use crate::metrics::FontWeight;
use crate::surface::{Align, DrawingSurface};
use crate::underline::{TokenPlacement, UnderlineSequencer, strip_trailing_punctuation};

/// Justification is abandoned when the computed gap falls below this share
/// of the minimum gap.
const JUSTIFY_FLOOR: f32 = 0.4;

/// Size and base weight of a line. `bold` forces every token bold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub size_pt: f32,
    pub bold: bool,
}

impl LineStyle {
    pub fn regular(size_pt: f32) -> Self {
        Self {
            size_pt,
            bold: false,
        }
    }

    pub fn bold(size_pt: f32) -> Self {
        Self {
            size_pt,
            bold: true,
        }
    }
}

#[derive(Debug)]
pub struct RichText {
    detector: BoldRangeDetector,
    min_gap: f32,
    rule_width: f32,
}

impl RichText {
    /// `min_gap` is the smallest inter-word gap; `rule_width` the stroke of
    /// underlines drawn by the sequencer.
    pub fn new(detector: BoldRangeDetector, min_gap: f32, rule_width: f32) -> Self {
        Self {
            detector,
            min_gap,
            rule_width,
        }
    }

    pub fn words(&self, line: &str) -> Vec<Word> {
        self.detector.tokenize(line)
    }

    /// Natural inter-word gap: the normal-weight space, floored at the minimum.
    pub fn gap<S: DrawingSurface + ?Sized>(&self, surface: &mut S, style: LineStyle) -> f32 {
        surface
            .measure_as(" ", FontWeight::Normal, style.size_pt)
            .max(self.min_gap)
    }

    /// Width of the line as `draw_plain` would lay it out.
    pub fn measure_line<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        line: &str,
        style: LineStyle,
    ) -> f32 {
        let words = self.words(line);
        if words.is_empty() {
            return 0.0;
        }
        let gap = self.gap(surface, style);
        let total: f32 = words
            .iter()
            .map(|w| word_width(surface, w, style))
            .sum();
        total + gap * (words.len() - 1) as f32
    }

    /// Draw at natural spacing from `x`. Returns the drawn width.
    pub fn draw_plain<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        underline: &mut UnderlineSequencer,
        line: &str,
        x: f32,
        y: f32,
        style: LineStyle,
    ) -> f32 {
        let words = self.words(line);
        let gap = self.gap(surface, style);
        self.draw_words(surface, underline, &words, x, y, gap, style)
    }

    /// Draw spread across `target` width. Falls back to plain for single-word
    /// lines and when the gap would be implausibly tight. Returns the drawn
    /// width.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_justified<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        underline: &mut UnderlineSequencer,
        line: &str,
        x: f32,
        y: f32,
        target: f32,
        style: LineStyle,
    ) -> f32 {
        let words = self.words(line);
        if words.len() <= 1 {
            let gap = self.gap(surface, style);
            return self.draw_words(surface, underline, &words, x, y, gap, style);
        }

        let total: f32 = words
            .iter()
            .map(|w| word_width(surface, w, style))
            .sum();
        let gap = (target - total) / (words.len() - 1) as f32;
        if gap < JUSTIFY_FLOOR * self.min_gap {
            let gap = self.gap(surface, style);
            return self.draw_words(surface, underline, &words, x, y, gap, style);
        }

        self.draw_words(surface, underline, &words, x, y, gap.max(self.min_gap), style)
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_words<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        underline: &mut UnderlineSequencer,
        words: &[Word],
        x: f32,
        y: f32,
        gap: f32,
        style: LineStyle,
    ) -> f32 {
        let mut cursor = x;
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                cursor += gap;
            }
            let start = cursor;
            for token in &word.tokens {
                surface.set_font(FontWeight::from_bold(token.bold || style.bold), style.size_pt);
                surface.draw_text(&token.text, cursor, y, Align::Left);
                cursor += surface.measure(&token.text);
            }

            let text = word.text();
            let placement = TokenPlacement {
                text: &text,
                x: start,
                y,
                core_width: core_width(surface, word, style),
            };
            if let Some(cmd) = underline.observe(&placement) {
                surface.draw_line(cmd.x1, cmd.y, cmd.x2, cmd.y, self.rule_width);
            }
        }
        cursor - x
    }
}

/// Width of a word with each token in its own weight.
pub fn word_width<S: DrawingSurface + ?Sized>(surface: &mut S, word: &Word, style: LineStyle) -> f32 {
    word.tokens
        .iter()
        .map(|t| surface.measure_as(&t.text, FontWeight::from_bold(t.bold || style.bold), style.size_pt))
        .sum()
}

/// Width of a word up to its trailing punctuation.
fn core_width<S: DrawingSurface + ?Sized>(surface: &mut S, word: &Word, style: LineStyle) -> f32 {
    let full = word.text();
    let mut remaining = strip_trailing_punctuation(&full).len();
    let mut width = 0.0;
    for token in &word.tokens {
        if remaining == 0 {
            break;
        }
        let take = remaining.min(token.text.len());
        let weight = FontWeight::from_bold(token.bold || style.bold);
        width += surface.measure_as(&token.text[..take], weight, style.size_pt);
        remaining -= take;
    }
    width
}
