// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Short unit codes derived from place names (`Medan Area II` → `MA-II`).

use crate::roman::is_roman;

/// Administrative and police-unit words that carry no identity.
const SKIP_WORDS: [&str; 14] = [
    "kota",
    "kabupaten",
    "kab",
    "kecamatan",
    "kec",
    "kelurahan",
    "desa",
    "polsek",
    "polres",
    "polresta",
    "polrestabes",
    "sektor",
    "resor",
    "polda",
];

/// Initials of the significant words, or the first three letters of a lone
/// word, upper-cased. A trailing roman numeral is kept as a `-` suffix.
/// Returns `-` when nothing significant remains.
pub fn place_code(name: &str) -> String {
    let mut words: Vec<&str> = name
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .filter(|w| !SKIP_WORDS.contains(&w.to_lowercase().as_str()))
        .collect();

    let has_suffix = words.len() > 1 && words.last().is_some_and(|w| is_roman(w));
    let suffix = if has_suffix { words.pop() } else { None };

    let code: String = match words.as_slice() {
        [] => return "-".to_owned(),
        [single] => single.chars().take(3).collect::<String>().to_uppercase(),
        many => many
            .iter()
            .filter_map(|w| w.chars().next())
            .collect::<String>()
            .to_uppercase(),
    };

    match suffix {
        Some(roman) => format!("{code}-{roman}"),
        None => code,
    }
}
