// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Greedy line wrapping over protected text.

use tracing::debug;

use crate::protect::BREAK;

/// One wrapped line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Words joined by single spaces; protected phrases keep their markers.
    pub text: String,
    /// Last line of its paragraph. Such lines are never justified.
    pub ends_paragraph: bool,
}

impl Line {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Words of one paragraph. Only ordinary spaces and tabs separate words; the
/// non-breaking marker does not.
fn words(paragraph: &str) -> impl Iterator<Item = &str> {
    paragraph
        .split(|c: char| c == ' ' || c == '\t' || c == '\n')
        .filter(|w| !w.is_empty())
}

/// Split `text` into lines no wider than `max_width`, as reported by
/// `measure`.
///
/// Paragraphs are separated by [`BREAK`]; an empty paragraph yields one empty
/// line. A word wider than `max_width` on its own is emitted alone and
/// overflows.
pub fn wrap<F>(text: &str, max_width: f32, mut measure: F) -> Vec<Line>
where
    F: FnMut(&str) -> f32,
{
    let mut lines = Vec::new();

    for paragraph in text.split(BREAK) {
        let mut current = String::new();

        for word in words(paragraph) {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate = format!("{current} {word}");
            if measure(&candidate) <= max_width {
                current = candidate;
            } else {
                if measure(&current) > max_width {
                    debug!(word = %current, max_width, "word wider than the line, overflowing");
                }
                lines.push(Line {
                    text: std::mem::take(&mut current),
                    ends_paragraph: false,
                });
                current.push_str(word);
            }
        }

        if !current.is_empty() && measure(&current) > max_width {
            debug!(word = %current, max_width, "word wider than the line, overflowing");
        }
        lines.push(Line {
            text: current,
            ends_paragraph: true,
        });
    }

    lines
}
