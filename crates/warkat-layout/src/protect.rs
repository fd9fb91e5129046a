// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Phrase protection: glue the words of designated phrases together so the
// wrapper can never split them, and normalise hard line breaks.

use std::ops::Range;

use regex::{Regex, RegexBuilder};
use warkat_core::{Result, WarkatError};

/// Non-breaking marker placed between the words of a protected phrase.
pub const NBSP: char = '\u{00A0}';

/// Distinguished paragraph break marker.
pub const BREAK: char = '\u{2029}';

/// Rewrites text so configured phrases survive wrapping intact.
#[derive(Debug, Clone)]
pub struct PhraseProtector {
    phrases: Vec<Regex>,
}

impl PhraseProtector {
    /// Compile the phrase list. Matching is case-insensitive and tolerates
    /// runs of spaces or tabs between the words of a phrase.
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(phrases.len());
        for phrase in phrases {
            let phrase = phrase.as_ref();
            let words: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
            if words.len() < 2 {
                continue;
            }
            let regex = RegexBuilder::new(&words.join("[ \t]+"))
                .case_insensitive(true)
                .build()
                .map_err(|err| WarkatError::Pattern {
                    pattern: phrase.to_owned(),
                    detail: err.to_string(),
                })?;
            compiled.push(regex);
        }
        Ok(Self { phrases: compiled })
    }

    /// Protector that only normalises breaks.
    pub fn none() -> Self {
        Self {
            phrases: Vec::new(),
        }
    }

    /// Normalise breaks, then replace the spaces inside every phrase match with
    /// [`NBSP`]. Phrases are scanned in configuration order and a match that
    /// overlaps an earlier accepted match is dropped.
    pub fn protect(&self, text: &str) -> String {
        let base = normalize_breaks(text);

        let mut spans: Vec<Range<usize>> = Vec::new();
        for phrase in &self.phrases {
            for found in phrase.find_iter(&base) {
                let range = found.range();
                if spans
                    .iter()
                    .all(|s| range.end <= s.start || range.start >= s.end)
                {
                    spans.push(range);
                }
            }
        }
        if spans.is_empty() {
            return base;
        }
        spans.sort_by_key(|s| s.start);

        let mut out = String::with_capacity(base.len());
        let mut pos = 0;
        for span in spans {
            out.push_str(&base[pos..span.start]);
            out.extend(base[span.clone()].chars().map(|c| match c {
                ' ' | '\t' => NBSP,
                other => other,
            }));
            pos = span.end;
        }
        out.push_str(&base[pos..]);
        out
    }
}

/// Map `\r\n`, `\r` and `\n` to [`BREAK`].
pub fn normalize_breaks(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', "\u{2029}")
}
