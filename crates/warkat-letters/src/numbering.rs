// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Letter reference numbers: `PREFIX/SEQ/ROMAN_MONTH/YEAR/UNIT`.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::abbrev::place_code;
use crate::roman::month_roman;

/// Printed in place of a sequence number the registry has not assigned yet.
pub const UNASSIGNED: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceNumber {
    pub prefix: String,
    pub sequence: Option<u32>,
    pub month: u32,
    pub year: i32,
    pub unit: String,
}

impl ReferenceNumber {
    /// Number for a letter issued on `date` by the unit named `unit_name`.
    pub fn new(prefix: &str, sequence: Option<u32>, date: NaiveDate, unit_name: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            sequence,
            month: date.month(),
            year: date.year(),
            unit: place_code(unit_name),
        }
    }
}

impl fmt::Display for ReferenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/", self.prefix)?;
        match self.sequence {
            Some(seq) => write!(f, "{seq}")?,
            None => f.write_str(UNASSIGNED)?,
        }
        let month = month_roman(self.month).unwrap_or_else(|| self.month.to_string());
        write!(f, "/{month}/{}/{}", self.year, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn formats_all_segments() {
        let number = ReferenceNumber::new("SI", Some(27), date(), "Medan Area II");
        assert_eq!(number.to_string(), "SI/27/X/2026/MA-II");
    }

    #[test]
    fn missing_sequence_leaves_placeholder() {
        let number = ReferenceNumber::new("STPLK", None, date(), "Medan Baru");
        assert_eq!(number.to_string(), "STPLK/.../X/2026/MB");
    }
}
