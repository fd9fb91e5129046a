// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Letter templates: an ordered list of blocks the engine walks top to bottom.

/// A complete letter, page breaks included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LetterTemplate {
    /// Short name used in log output (`permit`, `loss-report`).
    pub name: String,
    pub blocks: Vec<Block>,
}

impl LetterTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: Vec::new(),
        }
    }

    /// Append a block, builder style.
    pub fn with(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Pages the template produces.
    pub fn page_count(&self) -> usize {
        1 + self
            .blocks
            .iter()
            .filter(|b| matches!(b, Block::PageBreak))
            .count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Office header lines, optional address, double rule and the logo.
    Letterhead {
        lines: Vec<String>,
        address: Option<String>,
    },
    /// Centred bold heading with an optional subtitle (the reference number).
    Title {
        text: String,
        subtitle: Option<String>,
        underline: bool,
    },
    /// Free text, indented `indent_mm` from the left margin.
    Paragraph {
        text: String,
        justify: bool,
        indent_mm: f32,
    },
    /// `Dasar : 1. ...` style list with a hanging indent.
    Labeled {
        label: String,
        items: Vec<String>,
        numbered: bool,
    },
    /// `Nama : value` rows, optionally padded with dash-fill.
    KeyValues {
        rows: Vec<(String, String)>,
        fill: bool,
        indent_mm: f32,
    },
    /// Paragraph whose last line is padded to the margin.
    DashFill { text: String, indent_mm: f32 },
    Centered {
        text: String,
        bold: bool,
        underline: bool,
    },
    /// Vertical space measured in body lines.
    Spacer { lines: f32 },
    Signature(SignatureBlock),
    PageBreak,
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph {
            text: text.into(),
            justify: true,
            indent_mm: 0.0,
        }
    }

    pub fn key_values<K: Into<String>, V: Into<String>>(
        rows: impl IntoIterator<Item = (K, V)>,
        fill: bool,
    ) -> Self {
        Self::KeyValues {
            rows: rows.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            fill,
            indent_mm: 0.0,
        }
    }

    pub fn numbered(label: impl Into<String>, items: Vec<String>) -> Self {
        Self::Labeled {
            label: label.into(),
            items,
            numbered: true,
        }
    }
}

/// Signing area. `right` is always present; `left` makes it two columns and
/// `below` adds a centred acknowledging signer underneath.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureBlock {
    pub left: Option<SignatureColumn>,
    pub right: SignatureColumn,
    pub below: Option<SignatureColumn>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureColumn {
    /// Lines above the heading (`Dikeluarkan di : Medan`, date).
    pub preamble: Vec<String>,
    /// Bold title lines (`KEPALA KEPOLISIAN SEKTOR ...`).
    pub heading: Vec<String>,
    /// Printed under the signature space, bold and underlined.
    pub name: String,
    /// Rank/NRP lines under the name.
    pub detail: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_follows_breaks() {
        let template = LetterTemplate::new("permit")
            .with(Block::paragraph("halaman satu"))
            .with(Block::PageBreak)
            .with(Block::paragraph("halaman dua"));
        assert_eq!(template.page_count(), 2);
        assert_eq!(LetterTemplate::new("kosong").page_count(), 1);
    }
}
