// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Placeholder handling for optional record fields.

/// Printed wherever a value is missing.
pub const DASH: &str = "-";

/// Trimmed value, or `-` when absent or blank.
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => DASH.to_owned(),
    }
}

/// Trimmed non-blank value.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Join the present parts with `sep`; `-` when none are present.
pub fn join_present(parts: &[Option<&str>], sep: &str) -> String {
    let kept: Vec<&str> = parts.iter().filter_map(|p| present(*p)).collect();
    if kept.is_empty() {
        DASH.to_owned()
    } else {
        kept.join(sep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blanks_become_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("   ")), "-");
        assert_eq!(or_dash(Some(" Medan ")), "Medan");
    }

    #[test]
    fn join_skips_missing_parts() {
        assert_eq!(
            join_present(&[Some("Medan"), None, Some("05 Mei 1990")], ", "),
            "Medan, 05 Mei 1990"
        );
        assert_eq!(join_present(&[None, Some(" ")], ", "), "-");
    }
}
