// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The drawing-surface boundary: everything the engine needs from a backend.

use std::sync::Arc;

use warkat_core::RasterImage;

use crate::metrics::FontWeight;

/// Horizontal anchoring of `draw_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// `x` is the left edge.
    #[default]
    Left,
    /// `x` is the centre.
    Center,
    /// `x` is the right edge.
    Right,
}

impl Align {
    /// Left edge of a run of `width` anchored at `x`.
    pub fn left_edge(self, x: f32, width: f32) -> f32 {
        match self {
            Self::Left => x,
            Self::Center => x - width / 2.0,
            Self::Right => x - width,
        }
    }
}

/// Text measurement and placement primitives.
///
/// Coordinates are millimetres from the top-left of the current page; `y` is
/// the text baseline. Calls must be issued in program order on one surface;
/// independent documents each get their own surface.
pub trait DrawingSurface {
    /// Select the weight and size used by subsequent `measure`/`draw_text`.
    fn set_font(&mut self, weight: FontWeight, size_pt: f32);

    /// Width in millimetres of `text` in the current font.
    fn measure(&self, text: &str) -> f32;

    /// Draw `text` in the current font.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: Align);

    /// Stroke a straight line `width` millimetres thick.
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32);

    /// Place a raster image with its top-left corner at `(x, y)`.
    fn draw_image(&mut self, image: &Arc<RasterImage>, x: f32, y: f32, w: f32, h: f32);

    /// Finish the current page and continue on a fresh one.
    fn new_page(&mut self);

    /// Number of pages started so far (at least one).
    fn page_count(&self) -> usize;

    /// Set the font and measure in one call.
    fn measure_as(&mut self, text: &str, weight: FontWeight, size_pt: f32) -> f32 {
        self.set_font(weight, size_pt);
        self.measure(text)
    }
}
