// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Indonesian number spelling ("terbilang"), as written beside figures in
// official letters: `30 (tiga puluh)`.

const UNITS: [&str; 12] = [
    "", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan", "sepuluh",
    "sebelas",
];

const SCALES: [(u64, &str); 4] = [
    (1_000_000_000_000, "triliun"),
    (1_000_000_000, "miliar"),
    (1_000_000, "juta"),
    (1_000, "ribu"),
];

fn below_thousand(n: u64) -> String {
    match n {
        0..=11 => UNITS[n as usize].to_owned(),
        12..=19 => format!("{} belas", UNITS[n as usize - 10]),
        20..=99 => join_nonempty(
            format!("{} puluh", UNITS[(n / 10) as usize]),
            below_thousand(n % 10),
        ),
        100..=199 => join_nonempty("seratus".to_owned(), below_thousand(n % 100)),
        _ => join_nonempty(
            format!("{} ratus", UNITS[(n / 100) as usize]),
            below_thousand(n % 100),
        ),
    }
}

/// Spell `n` in Indonesian words.
pub fn terbilang(n: u64) -> String {
    if n == 0 {
        return "nol".to_owned();
    }

    let mut rest = n;
    let mut words = String::new();
    for (value, name) in SCALES {
        let chunk = rest / value;
        if chunk == 0 {
            continue;
        }
        rest %= value;
        let part = if value == 1_000 && chunk == 1 {
            "seribu".to_owned()
        } else {
            format!("{} {name}", terbilang(chunk))
        };
        words = join_nonempty(words, part);
    }
    join_nonempty(words, below_thousand(rest))
}

fn join_nonempty(head: String, tail: String) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail,
        (_, true) => head,
        _ => format!("{head} {tail}"),
    }
}

/// Figure followed by its spelling in brackets.
pub fn with_words(n: u64) -> String {
    format!("{n} ({})", terbilang(n))
}
