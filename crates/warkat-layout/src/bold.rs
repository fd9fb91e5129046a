// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bold-range detection for legally significant wording, and tokenisation of a
// wrapped line into words made of uniformly weighted tokens.

use std::ops::Range;

use regex::{Regex, RegexBuilder};
use warkat_core::{Result, WarkatError};

use crate::protect::NBSP;

/// Byte range `[start, end)` into a line's normalized text.
pub type BoldRange = Range<usize>;

/// Anything that can point out ranges of interest in a line.
pub trait PatternMatcher: Send + Sync {
    /// Ranges matched in `text`, in any order, possibly overlapping.
    fn matches(&self, text: &str) -> Vec<Range<usize>>;
}

/// Ordered list of case-insensitive regular expressions.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    patterns: Vec<Regex>,
}

impl RegexMatcher {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p.as_ref())
                    .case_insensitive(true)
                    .build()
                    .map_err(|err| WarkatError::Pattern {
                        pattern: p.as_ref().to_owned(),
                        detail: err.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }
}

impl PatternMatcher for RegexMatcher {
    fn matches(&self, text: &str) -> Vec<Range<usize>> {
        self.patterns
            .iter()
            .flat_map(|p| p.find_iter(text).map(|m| m.range()))
            .collect()
    }
}

/// A run of text drawn in one weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub bold: bool,
}

/// A space-delimited word. Most words are a single token; a word straddling a
/// bold range boundary (`KUHP,`) splits into several that are drawn abutting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub tokens: Vec<Token>,
}

impl Word {
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// Collapse every whitespace run (non-breaking markers included) to one space
/// and trim the ends.
pub fn normalize(line: &str) -> String {
    line.split(|c: char| c.is_whitespace() || c == NBSP)
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sort ranges and merge the ones that overlap or touch.
pub fn merge_ranges(mut ranges: Vec<BoldRange>) -> Vec<BoldRange> {
    ranges.retain(|r| r.start < r.end);
    ranges.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<BoldRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

/// Finds the parts of a line that must be bold.
pub struct BoldRangeDetector {
    matcher: Box<dyn PatternMatcher>,
}

impl std::fmt::Debug for BoldRangeDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoldRangeDetector").finish_non_exhaustive()
    }
}

impl BoldRangeDetector {
    pub fn new(matcher: impl PatternMatcher + 'static) -> Self {
        Self {
            matcher: Box::new(matcher),
        }
    }

    /// Detector over configured regular expressions.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        Ok(Self::new(RegexMatcher::new(patterns)?))
    }

    /// Detector that never marks anything bold.
    pub fn none() -> Self {
        Self::new(NoMatches)
    }

    /// Sorted, non-overlapping ranges into `normalize(line)`.
    pub fn detect(&self, line: &str) -> Vec<BoldRange> {
        merge_ranges(self.matcher.matches(&normalize(line)))
    }

    /// Split a line into words, each word into tokens of uniform weight.
    pub fn tokenize(&self, line: &str) -> Vec<Word> {
        let text = normalize(line);
        let ranges = merge_ranges(self.matcher.matches(&text));

        let mut words = Vec::new();
        let mut offset = 0;
        for raw in text.split(' ') {
            let start = offset;
            let end = start + raw.len();
            offset = end + 1;
            if raw.is_empty() {
                continue;
            }
            words.push(Word {
                tokens: split_word(&text, start..end, &ranges),
            });
        }
        words
    }
}

struct NoMatches;

impl PatternMatcher for NoMatches {
    fn matches(&self, _text: &str) -> Vec<Range<usize>> {
        Vec::new()
    }
}

fn split_word(text: &str, word: Range<usize>, ranges: &[BoldRange]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = word.start;
    while pos < word.end {
        let bold = ranges.iter().any(|r| r.start <= pos && pos < r.end);
        let next = ranges
            .iter()
            .flat_map(|r| [r.start, r.end])
            .filter(|&b| b > pos && b < word.end)
            .min()
            .unwrap_or(word.end);
        tokens.push(Token {
            text: text[pos..next].to_owned(),
            bold,
        });
        pos = next;
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> BoldRangeDetector {
        BoldRangeDetector::from_patterns(&[r"pasal\s+\d+\s+kuhp", r"\bdilarang\b", r"kuhp"])
            .unwrap()
    }

    #[test]
    fn ranges_are_sorted_and_merged() {
        let line = "dilarang  melanggar Pasal 220 KUHP sebagaimana";
        let ranges = detector().detect(line);
        let text = normalize(line);
        assert_eq!(ranges.len(), 2);
        assert_eq!(&text[ranges[0].clone()], "dilarang");
        assert_eq!(&text[ranges[1].clone()], "Pasal 220 KUHP");
    }

    #[test]
    fn detection_is_deterministic() {
        let line = "KUHP dilarang pasal 1 kuhp dilarang";
        let first = detector().detect(line);
        let second = detector().detect(line);
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0].end < w[1].start));
    }

    #[test]
    fn touching_ranges_merge() {
        assert_eq!(merge_ranges(vec![5..9, 0..5, 12..14, 13..20]), vec![0..9, 12..20]);
    }

    #[test]
    fn punctuation_outside_range_is_its_own_token() {
        let words = detector().tokenize("menurut Pasal 220 KUHP, pelapor");
        let kuhp = &words[3];
        assert_eq!(kuhp.text(), "KUHP,");
        assert_eq!(
            kuhp.tokens,
            vec![
                Token { text: "KUHP".into(), bold: true },
                Token { text: ",".into(), bold: false },
            ]
        );
        assert!(!words[0].tokens[0].bold);
    }

    #[test]
    fn protected_markers_become_word_breaks() {
        let words = BoldRangeDetector::none().tokenize("REMIX\u{a0}/\u{a0}HOUSE\u{a0}MUSIK");
        let texts: Vec<String> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["REMIX", "/", "HOUSE", "MUSIK"]);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = BoldRangeDetector::from_patterns(&["(unclosed"]).unwrap_err();
        assert!(matches!(err, WarkatError::Pattern { .. }));
    }
}
