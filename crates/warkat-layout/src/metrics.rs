// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Advance widths for the two serif weights the engine uses: the PDF base-14
// Times-Roman and Times-Bold faces, in 1/1000 em, for printable ASCII.

/// The two weights of the single serif face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn from_bold(bold: bool) -> Self {
        if bold { Self::Bold } else { Self::Normal }
    }
}

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Ascent of Times as a fraction of the font size.
pub const ASCENT: f32 = 0.683;

/// Width used for anything outside printable ASCII.
const FALLBACK_WIDTH: u16 = 500;

#[rustfmt::skip]
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

/// Advance width of one character in 1/1000 em.
pub fn char_units(c: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Normal => &TIMES_ROMAN,
        FontWeight::Bold => &TIMES_BOLD,
    };
    match c {
        ' '..='~' => table[c as usize - 32],
        // Non-breaking space is drawn as a space.
        '\u{00A0}' => table[0],
        '\u{2029}' | '\n' | '\r' => 0,
        _ => FALLBACK_WIDTH,
    }
}

/// Width of `text` in millimetres at `size_pt`.
pub fn text_width(text: &str, weight: FontWeight, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_units(c, weight) as u32).sum();
    units as f32 / 1000.0 * size_pt * MM_PER_PT
}

/// Line height in millimetres for a font size and spacing multiplier.
pub fn line_height(size_pt: f32, spacing: f32) -> f32 {
    size_pt * MM_PER_PT * spacing
}
