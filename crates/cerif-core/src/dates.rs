//! Date normalization to the CERIF `xs:dateTime` form.

use chrono::{NaiveDate, NaiveDateTime};

const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d", "%d.%m.%Y"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Normalize a date cell to `YYYY-MM-DDThh:mm:ss`.
///
/// Accepts ISO dates and date-times, day-first dates with `/`, `-` or `.`
/// separators, and a bare four-digit year (1 January). Returns `None` when
/// the value cannot be read as a calendar date.
pub fn normalize_date(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    parse(value).map(|datetime| datetime.format(OUTPUT_FORMAT).to_string())
}

fn parse(value: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        let year: i32 = value.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_common_layouts() {
        assert_eq!(
            normalize_date("2001-05-04").as_deref(),
            Some("2001-05-04T00:00:00")
        );
        assert_eq!(
            normalize_date("04/05/2001").as_deref(),
            Some("2001-05-04T00:00:00")
        );
        assert_eq!(
            normalize_date("2001-05-04 13:45:10").as_deref(),
            Some("2001-05-04T13:45:10")
        );
        assert_eq!(normalize_date(" 1998 ").as_deref(), Some("1998-01-01T00:00:00"));
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert_eq!(normalize_date("soon"), None);
        assert_eq!(normalize_date("2001-02-30"), None);
        assert_eq!(normalize_date(""), None);
    }
}
