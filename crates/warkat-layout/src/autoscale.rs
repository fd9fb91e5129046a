// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Auto-scale controller: pick a starting scale from the content weight, then
// re-render at each smaller candidate until the document fits its pages.

use tracing::{debug, warn};
use warkat_core::PageGeometry;
use warkat_core::config::AutoScaleConfig;

use crate::engine::PassReport;

/// Two scales closer than this are the same candidate.
const SCALE_EPSILON: f32 = 1e-4;

/// Weighted character count of variable-length fields.
pub fn content_weight(fields: &[(&str, f32)]) -> f32 {
    fields
        .iter()
        .map(|(text, factor)| text.chars().count() as f32 * factor)
        .sum()
}

/// Outcome of an auto-scaled render.
#[derive(Debug)]
pub struct RenderedDocument<S> {
    pub surface: S,
    /// Scale of the returned attempt.
    pub scale: f32,
    /// False when even the smallest candidate overflowed.
    pub fits: bool,
    /// Passes rendered, including the returned one.
    pub attempts: usize,
    /// Cursor position where each page ended.
    pub page_ends: Vec<f32>,
}

impl<S> RenderedDocument<S> {
    pub fn page_count(&self) -> usize {
        self.page_ends.len()
    }
}

#[derive(Debug, Clone)]
pub struct AutoScaler {
    config: AutoScaleConfig,
    page: PageGeometry,
}

impl AutoScaler {
    pub fn new(config: AutoScaleConfig, page: PageGeometry) -> Self {
        Self { config, page }
    }

    fn smallest(&self) -> f32 {
        self.config
            .candidates
            .iter()
            .copied()
            .reduce(f32::min)
            .unwrap_or(1.0)
    }

    /// First threshold the weight falls under; heavier content starts at
    /// the smallest candidate.
    pub fn starting_scale(&self, weight: f32) -> f32 {
        self.config
            .thresholds
            .iter()
            .find(|t| weight <= t.max_weight)
            .map(|t| t.scale)
            .unwrap_or_else(|| self.smallest())
    }

    /// The starting scale followed by every configured candidate below it,
    /// descending and without duplicates.
    pub fn candidates(&self, weight: f32) -> Vec<f32> {
        let start = self.starting_scale(weight);
        let mut below: Vec<f32> = self
            .config
            .candidates
            .iter()
            .copied()
            .filter(|c| *c < start - SCALE_EPSILON)
            .collect();
        below.sort_by(|a, b| b.total_cmp(a));
        below.dedup_by(|a, b| (*a - *b).abs() < SCALE_EPSILON);

        let mut list = Vec::with_capacity(below.len() + 1);
        list.push(start);
        list.extend(below);
        list
    }

    /// Whether every page ended above the bottom margin with room to spare.
    pub fn fits(&self, report: &PassReport) -> bool {
        report.fits(&self.page, self.config.safety_margin_mm)
    }

    /// Run `attempt` once per candidate, each on a fresh surface, and return
    /// the first pass that fits, or the smallest one.
    pub fn render<S, F>(&self, weight: f32, mut attempt: F) -> RenderedDocument<S>
    where
        F: FnMut(f32) -> (S, PassReport),
    {
        let mut scales = self.candidates(weight).into_iter();
        let mut scale = scales.next().unwrap_or(1.0);
        let mut attempts = 0;

        loop {
            let (surface, report) = attempt(scale);
            attempts += 1;
            let fits = self.fits(&report);

            match scales.next() {
                Some(next) if !fits => {
                    debug!(scale, next, ends = ?report.page_ends, "Overflow, retrying smaller");
                    scale = next;
                }
                _ => {
                    if !fits {
                        warn!(
                            scale,
                            attempts,
                            ends = ?report.page_ends,
                            "Content overflows at the smallest scale"
                        );
                    }
                    return RenderedDocument {
                        surface,
                        scale,
                        fits,
                        attempts,
                        page_ends: report.page_ends,
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler() -> AutoScaler {
        AutoScaler::new(AutoScaleConfig::default(), PageGeometry::default())
    }

    /// Pretend the content needs `need` mm per unit of scale.
    fn fake_pass(need: f32) -> impl FnMut(f32) -> (Vec<f32>, PassReport) {
        let page = PageGeometry::default();
        move |scale| {
            let end = page.top + need * scale;
            (
                vec![scale],
                PassReport {
                    scale,
                    page_ends: vec![end],
                },
            )
        }
    }

    #[test]
    fn weight_thresholds_pick_start() {
        let s = scaler();
        assert_eq!(s.starting_scale(0.0), 1.0);
        assert_eq!(s.starting_scale(500.0), 0.95);
        assert_eq!(s.starting_scale(1000.0), 0.85);
        assert_eq!(s.starting_scale(5000.0), 0.8);
    }

    #[test]
    fn starting_scale_is_monotonic() {
        let s = scaler();
        let mut previous = f32::MAX;
        for weight in (0..3000).step_by(50) {
            let scale = s.starting_scale(weight as f32);
            assert!(scale <= previous);
            previous = scale;
        }
    }

    #[test]
    fn candidates_descend_from_start() {
        let s = scaler();
        assert_eq!(s.candidates(500.0), vec![0.95, 0.9, 0.85, 0.8]);
        assert_eq!(s.candidates(5000.0), vec![0.8]);
    }

    #[test]
    fn duplicate_candidates_collapse() {
        let config = AutoScaleConfig {
            candidates: vec![0.9, 1.0, 0.9, 0.8, 0.8],
            ..AutoScaleConfig::default()
        };
        let s = AutoScaler::new(config, PageGeometry::default());
        assert_eq!(s.candidates(0.0), vec![1.0, 0.9, 0.8]);
    }

    #[test]
    fn first_fitting_attempt_wins() {
        let page = PageGeometry::default();
        let room = page.safe_bottom() - page.top - 4.0;
        let doc = scaler().render(0.0, fake_pass(room / 0.9 - 0.5));
        assert!(doc.fits);
        assert!((doc.scale - 0.9).abs() < 1e-6);
        assert_eq!(doc.attempts, 3);
        assert_eq!(doc.surface, vec![doc.scale]);
    }

    #[test]
    fn overflow_returns_smallest() {
        let doc = scaler().render(0.0, fake_pass(10_000.0));
        assert!(!doc.fits);
        assert_eq!(doc.scale, 0.8);
        assert_eq!(doc.attempts, 5);
    }

    #[test]
    fn weight_sums_characters() {
        assert_eq!(content_weight(&[("abcd", 1.0), ("xy", 2.0)]), 8.0);
    }
}
