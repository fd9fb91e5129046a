// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Roman numerals, used for the month segment of reference numbers.

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Standard subtractive form. Zero yields an empty string.
pub fn to_roman(mut n: u32) -> String {
    let mut out = String::new();
    for (value, glyphs) in NUMERALS {
        while n >= value {
            out.push_str(glyphs);
            n -= value;
        }
    }
    out
}

/// Roman month (`10` → `X`); `None` outside 1..=12.
pub fn month_roman(month: u32) -> Option<String> {
    (1..=12).contains(&month).then(|| to_roman(month))
}

/// Whether `word` is written entirely in upper-case roman digits.
pub fn is_roman(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| "IVXLCDM".contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months() {
        let all: Vec<String> = (1..=12).filter_map(month_roman).collect();
        assert_eq!(
            all,
            vec!["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII"]
        );
        assert_eq!(month_roman(0), None);
        assert_eq!(month_roman(13), None);
    }

    #[test]
    fn larger_numbers() {
        assert_eq!(to_roman(2026), "MMXXVI");
        assert_eq!(to_roman(49), "XLIX");
        assert_eq!(to_roman(0), "");
    }

    #[test]
    fn roman_detection() {
        assert!(is_roman("II"));
        assert!(is_roman("XIV"));
        assert!(!is_roman("ii"));
        assert!(!is_roman("Area"));
        assert!(!is_roman(""));
    }
}
