//! Submission timestamp parsing.
//!
//! The store hands back timestamps either as serial day numbers (days since
//! 1899-12-30, fraction = time of day) or as text. Naive values are read in
//! the reporting offset.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

use super::cell::CellValue;

/// Largest serial number the store can produce (9999-12-31).
const MAX_SERIAL_DAYS: f64 = 2_958_465.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

/// Parses a timestamp cell. Returns `None` for empty or unparsable cells.
pub fn parse_timestamp(cell: &CellValue, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    match cell {
        CellValue::Number(serial) => from_serial(*serial, offset),
        CellValue::Text(text) => parse_text(text.trim(), offset),
        CellValue::Empty | CellValue::Bool(_) => None,
    }
}

fn serial_epoch() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)
}

fn from_serial(serial: f64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    if !serial.is_finite() || serial.abs() > MAX_SERIAL_DAYS {
        return None;
    }
    let millis = (serial * MILLIS_PER_DAY).round() as i64;
    let naive = serial_epoch()?.checked_add_signed(Duration::milliseconds(millis))?;
    offset.from_local_datetime(&naive).single()
}

fn parse_text(text: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    if text.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&offset));
    }

    let naive = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    offset.from_local_datetime(&naive).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn parses_rfc3339_text() {
        let parsed = parse_timestamp(&CellValue::text("2026-10-19T08:30:00Z"), utc()).unwrap();
        assert_eq!(parsed.day(), 19);
        assert_eq!(parsed.hour(), 8);
    }

    #[test]
    fn rfc3339_is_converted_into_reporting_offset() {
        let eastern = FixedOffset::west_opt(4 * 3600).unwrap();
        let parsed = parse_timestamp(&CellValue::text("2026-11-01T02:00:00Z"), eastern).unwrap();
        assert_eq!(parsed.month(), 10);
        assert_eq!(parsed.day(), 31);
    }

    #[test]
    fn parses_sheet_style_text() {
        let parsed = parse_timestamp(&CellValue::text("10/19/2026 14:05:09"), utc()).unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2026, 10, 19));
        assert_eq!((parsed.hour(), parsed.minute(), parsed.second()), (14, 5, 9));

        let date_only = parse_timestamp(&CellValue::text("2026-10-19"), utc()).unwrap();
        assert_eq!(date_only.hour(), 0);
    }

    #[test]
    fn parses_serial_numbers() {
        // 45000.5 = 2023-03-15 12:00
        let parsed = parse_timestamp(&CellValue::Number(45000.5), utc()).unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2023, 3, 15));
        assert_eq!(parsed.hour(), 12);
    }

    #[test]
    fn naive_values_use_reporting_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let parsed = parse_timestamp(&CellValue::text("2026-10-19 00:30:00"), offset).unwrap();
        assert_eq!(parsed.offset(), &offset);
        assert_eq!(parsed.naive_utc().day(), 18);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp(&CellValue::text("yesterday"), utc()).is_none());
        assert!(parse_timestamp(&CellValue::text(""), utc()).is_none());
        assert!(parse_timestamp(&CellValue::Empty, utc()).is_none());
        assert!(parse_timestamp(&CellValue::Bool(true), utc()).is_none());
        assert!(parse_timestamp(&CellValue::Number(f64::NAN), utc()).is_none());
        assert!(parse_timestamp(&CellValue::Number(1e12), utc()).is_none());
    }
}
