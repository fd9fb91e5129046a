// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Underline sequencer: watches every word the renderer draws and, when the
// configured four-word phrase completes, emits one continuous underline from
// the first word's start to the last word's end.

use warkat_core::config::UnderlinePhrase;

/// Progress through the phrase. The anchor is the baseline position of the
/// first word, captured per word so the phrase may span wrapped lines.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum UnderlineState {
    #[default]
    Idle,
    Saw1 { anchor_x: f32, anchor_y: f32 },
    Saw2 { anchor_x: f32, anchor_y: f32 },
    Saw3 { anchor_x: f32, anchor_y: f32 },
}

/// A word as it was placed on the page.
#[derive(Debug, Clone, Copy)]
pub struct TokenPlacement<'a> {
    pub text: &'a str,
    pub x: f32,
    /// Baseline.
    pub y: f32,
    /// Width of the word without trailing punctuation.
    pub core_width: f32,
}

/// Horizontal line to stroke once the phrase completes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnderlineCommand {
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
}

/// The phrase, uppercased once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnderlineWords {
    first: String,
    separator: String,
    second: String,
    last: String,
}

impl UnderlineWords {
    pub fn new(phrase: &UnderlinePhrase) -> Self {
        Self {
            first: phrase.first.to_uppercase(),
            separator: phrase.separator.to_uppercase(),
            second: phrase.second.to_uppercase(),
            last: phrase.last.to_uppercase(),
        }
    }
}

/// Strip trailing ASCII punctuation (`MUSIK.` → `MUSIK`).
pub fn strip_trailing_punctuation(word: &str) -> &str {
    word.trim_end_matches(|c: char| c.is_ascii_punctuation())
}

/// Pure transition function.
///
/// `offset` is the distance of the underline below the anchor baseline.
pub fn step(
    state: UnderlineState,
    token: &TokenPlacement<'_>,
    words: &UnderlineWords,
    offset: f32,
) -> (UnderlineState, Option<UnderlineCommand>) {
    use UnderlineState::*;

    let upper = token.text.to_uppercase();
    let restart = Saw1 {
        anchor_x: token.x,
        anchor_y: token.y,
    };

    match state {
        Idle if upper == words.first => (restart, None),
        Idle => (Idle, None),

        Saw1 { anchor_x, anchor_y } if upper == words.separator => {
            (Saw2 { anchor_x, anchor_y }, None)
        }
        Saw1 { .. } | Saw2 { .. } if upper == words.first => (restart, None),
        Saw1 { .. } => (Idle, None),

        Saw2 { anchor_x, anchor_y } if upper == words.second => {
            (Saw3 { anchor_x, anchor_y }, None)
        }
        Saw2 { .. } => (Idle, None),

        Saw3 { anchor_x, anchor_y } if strip_trailing_punctuation(&upper) == words.last => {
            let line = UnderlineCommand {
                x1: anchor_x,
                x2: token.x + token.core_width,
                y: anchor_y + offset,
            };
            (Idle, Some(line))
        }
        Saw3 { .. } => (Idle, None),
    }
}

/// Stateful wrapper around [`step`], one per document render.
#[derive(Debug, Clone)]
pub struct UnderlineSequencer {
    words: UnderlineWords,
    offset: f32,
    state: UnderlineState,
}

impl UnderlineSequencer {
    pub fn new(phrase: &UnderlinePhrase, offset: f32) -> Self {
        Self {
            words: UnderlineWords::new(phrase),
            offset,
            state: UnderlineState::Idle,
        }
    }

    /// Feed one drawn word; returns the underline to draw, if any.
    pub fn observe(&mut self, token: &TokenPlacement<'_>) -> Option<UnderlineCommand> {
        let (next, command) = step(self.state, token, &self.words, self.offset);
        self.state = next;
        command
    }

    pub fn state(&self) -> UnderlineState {
        self.state
    }
}
