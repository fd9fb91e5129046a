// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dash-fill: pad the rest of a row with a repeated glyph up to a right
// boundary so nothing can be written in after printing.

use warkat_core::config::FillConfig;

use crate::metrics::FontWeight;
use crate::surface::{Align, DrawingSurface};

/// Upper bound on glyph repetitions, in case a glyph measures as zero.
const MAX_REPEAT: usize = 512;

#[derive(Debug, Clone, PartialEq)]
pub struct DashFill {
    glyph: String,
    gap: f32,
    epsilon: f32,
}

impl DashFill {
    pub fn new(config: &FillConfig) -> Self {
        Self {
            glyph: config.glyph.clone(),
            gap: config.gap_mm,
            epsilon: config.epsilon_mm,
        }
    }

    /// The longest run of the glyph no wider than `available`, in the current
    /// font. `None` when not even one character fits.
    pub fn filler<S: DrawingSurface + ?Sized>(&self, surface: &S, available: f32) -> Option<String> {
        if self.glyph.is_empty() || available <= 0.0 {
            return None;
        }

        let mut run = String::new();
        let mut repeats = 0;
        while surface.measure(&run) < available && repeats < MAX_REPEAT {
            run.push_str(&self.glyph);
            repeats += 1;
        }
        while !run.is_empty() && surface.measure(&run) > available {
            run.pop();
        }
        (!run.is_empty()).then_some(run)
    }

    /// Pad from `end_x` (where the text stopped) to `right` on baseline `y`.
    /// Returns the x where the filler ends, or `None` when the span was too
    /// short to bother.
    pub fn fill_after<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        end_x: f32,
        y: f32,
        right: f32,
        size_pt: f32,
    ) -> Option<f32> {
        let start = end_x + self.gap;
        if start >= right - self.epsilon {
            return None;
        }
        surface.set_font(FontWeight::Normal, size_pt);
        let run = self.filler(surface, right - start)?;
        let width = surface.measure(&run);
        surface.draw_text(&run, start, y, Align::Left);
        Some(start + width)
    }

    /// Draw `text` at normal weight from `x`, then pad to `right`.
    pub fn draw_with_trailing_fill<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        text: &str,
        x: f32,
        y: f32,
        right: f32,
        size_pt: f32,
    ) -> Option<f32> {
        surface.set_font(FontWeight::Normal, size_pt);
        surface.draw_text(text, x, y, Align::Left);
        let end = x + surface.measure(text);
        self.fill_after(surface, end, y, right, size_pt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingSurface};

    fn fill() -> DashFill {
        DashFill::new(&FillConfig::default())
    }

    #[test]
    fn filler_never_crosses_boundary() {
        let mut surface = RecordingSurface::new();
        for right in [60.0, 61.3, 97.7, 185.0] {
            fill().draw_with_trailing_fill(&mut surface, "Budi Santoso", 55.0, 80.0, right, 12.0);
        }
        let rights = [60.0, 61.3, 97.7, 185.0];
        let fillers: Vec<&DrawCommand> = surface
            .commands()
            .filter(|c| matches!(c, DrawCommand::Text { text, .. } if text.starts_with('-')))
            .collect();
        assert!(!fillers.is_empty());
        for cmd in fillers {
            assert!(rights.iter().any(|r| cmd.right_edge() <= *r + 1e-4));
        }
    }

    #[test]
    fn filler_reaches_close_to_boundary() {
        let mut surface = RecordingSurface::new();
        let end = fill()
            .draw_with_trailing_fill(&mut surface, "Medan", 30.0, 50.0, 185.0, 12.0)
            .unwrap();
        let dash = surface.measure_as("-", FontWeight::Normal, 12.0);
        assert!(end <= 185.0);
        assert!(185.0 - end < dash);
    }

    #[test]
    fn no_filler_when_text_reaches_margin() {
        let mut surface = RecordingSurface::new();
        let right = 30.0 + surface.measure_as("Medan", FontWeight::Normal, 12.0) + 1.5;
        let end = fill().draw_with_trailing_fill(&mut surface, "Medan", 30.0, 50.0, right, 12.0);
        assert!(end.is_none());
        assert_eq!(surface.texts(), vec!["Medan"]);
    }

    #[test]
    fn empty_glyph_yields_nothing() {
        let config = FillConfig {
            glyph: String::new(),
            ..FillConfig::default()
        };
        let surface = RecordingSurface::new();
        assert!(DashFill::new(&config).filler(&surface, 50.0).is_none());
    }
}
