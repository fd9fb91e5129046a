// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Indonesian calendar formatting and lenient date/time parsing.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::text::DASH;

/// Day names, Monday first.
pub const DAYS: [&str; 7] = [
    "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
];

pub const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Local time zone suffix printed after times.
pub const ZONE: &str = "WIB";

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];
const TIME_FORMATS: [&str; 3] = ["%H:%M", "%H:%M:%S", "%H.%M"];

pub fn day_name(date: NaiveDate) -> &'static str {
    DAYS[date.weekday().num_days_from_monday() as usize]
}

/// Month name for 1-based `month`; `-` outside 1..=12.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTHS[month as usize - 1],
        _ => DASH,
    }
}

/// `05 Oktober 2026`
pub fn long_date(date: NaiveDate) -> String {
    format!("{:02} {} {}", date.day(), month_name(date.month()), date.year())
}

/// `Senin, 19 Oktober 2026`
pub fn day_and_date(date: NaiveDate) -> String {
    format!("{}, {}", day_name(date), long_date(date))
}

/// `19-10-2026`
pub fn numeric_date(date: NaiveDate) -> String {
    format!("{:02}-{:02}-{}", date.day(), date.month(), date.year())
}

/// Parse a date-time in any of the accepted layouts, RFC 3339 included.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
}

/// Parse `YYYY-MM-DD`, `DD-MM-YYYY`, `DD/MM/YYYY` or any date-time layout.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
        .or_else(|| parse_datetime(raw).map(|dt| dt.date()))
}

/// Parse `19:30`, `19:30:00`, `19.30` or the time part of a date-time.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    TIME_FORMATS
        .iter()
        .find_map(|f| NaiveTime::parse_from_str(raw, f).ok())
        .or_else(|| parse_datetime(raw).map(|dt| dt.time()))
}

/// `19.30 WIB`
pub fn clock(time: NaiveTime) -> String {
    format!("{:02}.{:02} {ZONE}", time.hour(), time.minute())
}

/// Long date of an optional raw value; `-` when absent or unparseable.
pub fn date_or_dash(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(long_date)
        .unwrap_or_else(|| DASH.to_owned())
}

/// Day and long date of an optional raw value; `-` when absent or
/// unparseable.
pub fn day_date_or_dash(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(day_and_date)
        .unwrap_or_else(|| DASH.to_owned())
}

/// Clock time of an optional raw value; `-` when absent or unparseable.
pub fn time_or_dash(raw: Option<&str>) -> String {
    raw.and_then(parse_time)
        .map(clock)
        .unwrap_or_else(|| DASH.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_names_follow_weekday() {
        assert_eq!(day_name(date(2026, 10, 19)), "Senin");
        assert_eq!(day_name(date(2026, 10, 24)), "Sabtu");
        assert_eq!(day_name(date(2024, 2, 29)), "Kamis");
    }

    #[test]
    fn month_names_and_bounds() {
        assert_eq!(month_name(1), "Januari");
        assert_eq!(month_name(8), "Agustus");
        assert_eq!(month_name(12), "Desember");
        assert_eq!(month_name(0), "-");
        assert_eq!(month_name(13), "-");
    }

    #[test]
    fn long_forms_are_padded() {
        assert_eq!(long_date(date(2026, 8, 5)), "05 Agustus 2026");
        assert_eq!(day_and_date(date(2026, 8, 17)), "Senin, 17 Agustus 2026");
        assert_eq!(numeric_date(date(2026, 3, 7)), "07-03-2026");
    }

    #[test]
    fn accepts_every_layout() {
        let expected = date(2026, 10, 19);
        for raw in [
            "2026-10-19",
            "2026-10-19T08:15:00+07:00",
            "2026-10-19 08:15",
            "2026-10-19 08:15:30",
            "19-10-2026",
            "19/10/2026",
            " 2026-10-19 ",
        ] {
            assert_eq!(parse_date(raw), Some(expected), "{raw}");
        }
    }

    #[test]
    fn rfc3339_keeps_local_wall_clock() {
        let dt = parse_datetime("2026-10-19T23:30:00+07:00").unwrap();
        assert_eq!(dt.date(), date(2026, 10, 19));
        assert_eq!(clock(dt.time()), "23.30 WIB");
    }

    #[test]
    fn times_format_with_zone() {
        assert_eq!(time_or_dash(Some("19:30")), "19.30 WIB");
        assert_eq!(time_or_dash(Some("07.05")), "07.05 WIB");
        assert_eq!(time_or_dash(Some("2026-10-19 21:00:00")), "21.00 WIB");
    }

    #[test]
    fn bad_values_degrade_to_dash() {
        assert_eq!(date_or_dash(None), "-");
        assert_eq!(date_or_dash(Some("kemarin")), "-");
        assert_eq!(date_or_dash(Some("2026-02-30")), "-");
        assert_eq!(day_date_or_dash(Some("")), "-");
        assert_eq!(time_or_dash(Some("25:99")), "-");
    }
}
