// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-pass render state: the scale attempt, the vertical cursor and the
// underline sequencer.

use std::sync::Arc;

use warkat_core::config::{Typography, UnderlinePhrase};
use warkat_core::{PageGeometry, RasterImage};

use crate::metrics::{self, MM_PER_PT};
use crate::underline::UnderlineSequencer;

/// Font sizes and vertical rhythm for one scale candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleAttempt {
    pub scale: f32,
    pub body_pt: f32,
    pub heading_pt: f32,
    pub title_pt: f32,
    pub small_pt: f32,
    pub line_spacing: f32,
    pub block_gap: f32,
    pub signature_space: f32,
}

impl ScaleAttempt {
    pub fn new(scale: f32, typography: &Typography) -> Self {
        Self {
            scale,
            body_pt: typography.body_pt * scale,
            heading_pt: typography.heading_pt * scale,
            title_pt: typography.title_pt * scale,
            small_pt: typography.small_pt * scale,
            line_spacing: typography.line_spacing,
            block_gap: typography.block_gap_mm * scale,
            signature_space: typography.signature_space_mm * scale,
        }
    }

    /// Baseline-to-baseline distance for `size_pt`.
    pub fn line_height(&self, size_pt: f32) -> f32 {
        metrics::line_height(size_pt, self.line_spacing)
    }
}

/// Read-only resources injected into every render.
#[derive(Debug, Clone, Default)]
pub struct RenderAssets {
    /// Emblem placed in the letterhead; absent when it failed to load.
    pub logo: Option<Arc<RasterImage>>,
}

/// Mutable state of one render pass. Never shared between passes.
#[derive(Debug)]
pub struct RenderContext {
    /// Top of the next line box, millimetres from the page top.
    pub cursor_y: f32,
    pub attempt: ScaleAttempt,
    pub page: PageGeometry,
    pub underline: UnderlineSequencer,
    page_ends: Vec<f32>,
}

impl RenderContext {
    pub fn new(
        attempt: ScaleAttempt,
        page: PageGeometry,
        phrase: &UnderlinePhrase,
        underline_offset: f32,
    ) -> Self {
        Self {
            cursor_y: page.top,
            attempt,
            page,
            underline: UnderlineSequencer::new(phrase, underline_offset),
            page_ends: Vec::new(),
        }
    }

    /// Baseline for a line of `size_pt` text starting at the cursor.
    pub fn baseline(&self, size_pt: f32) -> f32 {
        self.cursor_y + size_pt * MM_PER_PT * metrics::ASCENT
    }

    pub fn advance(&mut self, dy: f32) {
        self.cursor_y += dy;
    }

    /// Advance past one line of `size_pt` text.
    pub fn advance_line(&mut self, size_pt: f32) {
        self.cursor_y += self.attempt.line_height(size_pt);
    }

    /// Space between blocks.
    pub fn gap(&mut self) {
        self.cursor_y += self.attempt.block_gap;
    }

    /// Record where the current page ended and reset the cursor.
    pub fn finish_page(&mut self) {
        self.page_ends.push(self.cursor_y);
        self.cursor_y = self.page.top;
    }

    pub fn page_ends(&self) -> &[f32] {
        &self.page_ends
    }

    pub fn into_page_ends(self) -> Vec<f32> {
        self.page_ends
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_scales_sizes_not_spacing() {
        let typo = Typography::default();
        let attempt = ScaleAttempt::new(0.8, &typo);
        assert!((attempt.body_pt - typo.body_pt * 0.8).abs() < 1e-5);
        assert_eq!(attempt.line_spacing, typo.line_spacing);
        assert!(attempt.line_height(attempt.body_pt) < attempt.line_height(typo.body_pt));
    }

    #[test]
    fn finishing_a_page_resets_cursor() {
        let page = PageGeometry::default();
        let attempt = ScaleAttempt::new(1.0, &Typography::default());
        let mut ctx = RenderContext::new(attempt, page, &UnderlinePhrase::default(), 1.0);
        ctx.advance(100.0);
        ctx.finish_page();
        assert_eq!(ctx.page_ends(), &[page.top + 100.0]);
        assert_eq!(ctx.cursor_y, page.top);
    }
}
