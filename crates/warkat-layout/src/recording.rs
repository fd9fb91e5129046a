// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory drawing surface. Records every primitive with resolved positions
// so layouts can be inspected without producing a PDF (tests, dry runs,
// benchmarks).

use std::sync::Arc;

use warkat_core::RasterImage;

use crate::metrics::{self, FontWeight};
use crate::surface::{Align, DrawingSurface};

/// One recorded primitive. Text `x` is always the resolved left edge.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        text: String,
        x: f32,
        y: f32,
        width: f32,
        weight: FontWeight,
        size_pt: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
    },
    Image {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
}

impl DrawCommand {
    /// Leftmost x touched by this command.
    pub fn left_edge(&self) -> f32 {
        match self {
            Self::Text { x, .. } | Self::Image { x, .. } => *x,
            Self::Line { x1, x2, .. } => x1.min(*x2),
        }
    }

    /// Rightmost x touched by this command.
    pub fn right_edge(&self) -> f32 {
        match self {
            Self::Text { x, width, .. } => x + width,
            Self::Line { x1, x2, .. } => x1.max(*x2),
            Self::Image { x, w, .. } => x + w,
        }
    }
}

/// Surface that measures with the built-in Times metrics and keeps a log of
/// everything drawn, page by page.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pages: Vec<Vec<DrawCommand>>,
    weight: FontWeight,
    size_pt: f32,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            weight: FontWeight::Normal,
            size_pt: 12.0,
        }
    }

    pub fn pages(&self) -> &[Vec<DrawCommand>] {
        &self.pages
    }

    /// Every command on every page, in drawing order.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.pages.iter().flatten()
    }

    /// The text of every text command, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every line command as `(x1, y1, x2, y2)`.
    pub fn lines(&self) -> Vec<(f32, f32, f32, f32)> {
        self.commands()
            .filter_map(|cmd| match cmd {
                DrawCommand::Line { x1, y1, x2, y2, .. } => Some((*x1, *y1, *x2, *y2)),
                _ => None,
            })
            .collect()
    }

    fn current_page(&mut self) -> &mut Vec<DrawCommand> {
        // `new()` seeds one page and pages are never removed.
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_font(&mut self, weight: FontWeight, size_pt: f32) {
        self.weight = weight;
        self.size_pt = size_pt;
    }

    fn measure(&self, text: &str) -> f32 {
        metrics::text_width(text, self.weight, self.size_pt)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: Align) {
        let width = self.measure(text);
        let cmd = DrawCommand::Text {
            text: text.to_owned(),
            x: align.left_edge(x, width),
            y,
            width,
            weight: self.weight,
            size_pt: self.size_pt,
        };
        self.current_page().push(cmd);
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32) {
        self.current_page().push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            width,
        });
    }

    fn draw_image(&mut self, _image: &Arc<RasterImage>, x: f32, y: f32, w: f32, h: f32) {
        self.current_page().push(DrawCommand::Image { x, y, w, h });
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_text_records_left_edge() {
        let mut surface = RecordingSurface::new();
        surface.set_font(FontWeight::Bold, 12.0);
        let width = surface.measure("SURAT IZIN");
        surface.draw_text("SURAT IZIN", 100.0, 50.0, Align::Center);

        match &surface.pages()[0][0] {
            DrawCommand::Text { x, weight, .. } => {
                assert!((x - (100.0 - width / 2.0)).abs() < 1e-4);
                assert_eq!(*weight, FontWeight::Bold);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn new_page_separates_commands() {
        let mut surface = RecordingSurface::new();
        surface.draw_text("satu", 10.0, 10.0, Align::Left);
        surface.new_page();
        surface.draw_text("dua", 10.0, 10.0, Align::Left);
        assert_eq!(surface.page_count(), 2);
        assert_eq!(surface.pages()[1].len(), 1);
        assert_eq!(surface.texts(), vec!["satu", "dua"]);
    }
}
