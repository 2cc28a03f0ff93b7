//! Lenient date-string parsing.
//!
//! Turns an arbitrary date-bearing string into a calendar timestamp, or
//! fails. Accepts RFC 3339 / RFC 2822, month-name dates, and numeric
//! `YYYY[./-]M[./-]D` dates with an optional time (24h, AM/PM or 오전/오후)
//! and UTC offset, found anywhere in the input.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone,
};
use regex::Captures;

use crate::patterns::DATE_SPAN;

/// Month-name layouts tried against the whole (trimmed) input.
const MONTH_NAME_FORMATS: &[&str] = &[
    "%B %d, %Y", // January 05, 2024
    "%B %e, %Y", // January 5, 2024
    "%b %d, %Y", // Jan 05, 2024
    "%b %e, %Y", // Jan 5, 2024
    "%d %B %Y",  // 05 January 2024
    "%e %B %Y",  // 5 January 2024
    "%d %b %Y",  // 05 Jan 2024
    "%e %b %Y",  // 5 Jan 2024
];

/// A parsed timestamp, with or without a known UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDate {
    /// The source carried an offset.
    Zoned(DateTime<FixedOffset>),

    /// No offset in the source; rendered without one.
    Naive(NaiveDateTime),
}

impl ParsedDate {
    /// Calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        match self {
            Self::Zoned(dt) => dt.year(),
            Self::Naive(dt) => dt.year(),
        }
    }

    /// ISO-8601 with seconds precision, e.g. `2024-01-05T10:00:00+09:00`
    /// or `2023-11-02T00:00:00`.
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        match self {
            Self::Zoned(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, false),
            Self::Naive(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

/// Parses arbitrary strings into dates.
pub trait DateParser: Send + Sync {
    /// Parse `input`, or `None` when it holds no plausible date.
    fn parse(&self, input: &str) -> Option<ParsedDate>;
}

/// Default [`DateParser`] built on `chrono`.
///
/// Results outside `[min_year, max_year]` are rejected.
#[derive(Debug, Clone, Copy)]
pub struct LenientDateParser {
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for LenientDateParser {
    fn default() -> Self {
        Self {
            min_year: 1900,
            max_year: 2100,
        }
    }
}

impl DateParser for LenientDateParser {
    fn parse(&self, input: &str) -> Option<ParsedDate> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let parsed = parse_whole(input).or_else(|| parse_span(input))?;
        (self.min_year..=self.max_year)
            .contains(&parsed.year())
            .then_some(parsed)
    }
}

/// Formats that must cover the entire input.
fn parse_whole(input: &str) -> Option<ParsedDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(ParsedDate::Zoned(dt));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(ParsedDate::Zoned(dt));
    }

    MONTH_NAME_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(input, fmt)
            .ok()
            .map(|date| ParsedDate::Naive(date.and_time(NaiveTime::MIN)))
    })
}

/// First numeric date span anywhere in the input.
fn parse_span(input: &str) -> Option<ParsedDate> {
    let caps = DATE_SPAN.captures(input)?;

    let year: i32 = caps.name("year")?.as_str().parse().ok()?;
    let month: u32 = caps.name("month")?.as_str().parse().ok()?;
    let day: u32 = caps.name("day")?.as_str().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    let time = if caps.name("hour").is_some() {
        span_time(&caps)?
    } else {
        NaiveTime::MIN
    };
    let naive = date.and_time(time);

    match caps.name("offset") {
        Some(offset) => {
            let offset = parse_offset(offset.as_str())?;
            let zoned = offset.from_local_datetime(&naive).single()?;
            Some(ParsedDate::Zoned(zoned))
        }
        None => Some(ParsedDate::Naive(naive)),
    }
}

fn span_time(caps: &Captures<'_>) -> Option<NaiveTime> {
    let hour: u32 = caps.name("hour")?.as_str().parse().ok()?;
    let minute: u32 = caps.name("minute")?.as_str().parse().ok()?;
    let second: u32 = match caps.name("second") {
        Some(s) => s.as_str().parse().ok()?,
        None => 0,
    };

    let meridiem = caps
        .name("pre")
        .or_else(|| caps.name("post"))
        .map(|m| m.as_str().to_lowercase());
    let hour = apply_meridiem(hour, meridiem.as_deref())?;

    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Convert a 12-hour clock reading to 24-hour.
fn apply_meridiem(hour: u32, meridiem: Option<&str>) -> Option<u32> {
    let Some(meridiem) = meridiem else {
        return Some(hour);
    };
    if !(1..=12).contains(&hour) {
        return None;
    }
    let afternoon = matches!(meridiem, "pm" | "오후");
    Some(match (afternoon, hour) {
        (false, 12) => 0,
        (true, 12) => 12,
        (true, h) => h + 12,
        (false, h) => h,
    })
}

/// Parse `Z`, `+09:00` or `-0500`.
fn parse_offset(raw: &str) -> Option<FixedOffset> {
    if raw.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }

    let sign = match raw.chars().next()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let digits: String = raw[1..].chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 4 {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iso(input: &str) -> Option<String> {
        LenientDateParser::default()
            .parse(input)
            .map(|d| d.to_iso8601())
    }

    #[test]
    fn test_rfc3339_keeps_offset() {
        assert_eq!(
            iso("2024-01-05T10:00:00+09:00").as_deref(),
            Some("2024-01-05T10:00:00+09:00")
        );
        assert_eq!(
            iso("2024-01-05T10:00:00.527Z").as_deref(),
            Some("2024-01-05T10:00:00+00:00")
        );
    }

    #[test]
    fn test_rfc2822() {
        assert_eq!(
            iso("Fri, 05 Jan 2024 10:00:00 +0900").as_deref(),
            Some("2024-01-05T10:00:00+09:00")
        );
    }

    #[test]
    fn test_date_only_is_midnight_without_offset() {
        assert_eq!(iso("2023/11/02").as_deref(), Some("2023-11-02T00:00:00"));
        assert_eq!(iso("2023.11.02").as_deref(), Some("2023-11-02T00:00:00"));
        assert_eq!(iso("2023-11-02").as_deref(), Some("2023-11-02T00:00:00"));
    }

    #[test]
    fn test_space_separated_datetime() {
        assert_eq!(
            iso("2024-01-05 10:00:00").as_deref(),
            Some("2024-01-05T10:00:00")
        );
    }

    #[test]
    fn test_korean_meridiem() {
        assert_eq!(
            iso("2024.01.05. 오후 3:07").as_deref(),
            Some("2024-01-05T15:07:00")
        );
        assert_eq!(
            iso("입력 2024.01.05. 오전 12:30").as_deref(),
            Some("2024-01-05T00:30:00")
        );
    }

    #[test]
    fn test_english_meridiem() {
        assert_eq!(
            iso("Updated 2024/01/05 11:15 PM").as_deref(),
            Some("2024-01-05T23:15:00")
        );
    }

    #[test]
    fn test_span_with_offset() {
        assert_eq!(
            iso("posted 2024-01-05 10:00 +0900").as_deref(),
            Some("2024-01-05T10:00:00+09:00")
        );
    }

    #[test]
    fn test_month_names() {
        assert_eq!(iso("January 5, 2024").as_deref(), Some("2024-01-05T00:00:00"));
        assert_eq!(iso("5 Jan 2024").as_deref(), Some("2024-01-05T00:00:00"));
    }

    #[test]
    fn test_out_of_range_fails() {
        assert_eq!(iso("2024-13-45"), None);
        assert_eq!(iso("2024-02-30"), None);
        assert_eq!(iso("2024-01-05 25:00"), None);
        assert_eq!(iso("2024-01-05 13:00 PM"), None);
    }

    #[test]
    fn test_implausible_year_fails() {
        assert_eq!(iso("0001-01-01"), None);
        assert_eq!(iso("9999-12-31"), None);
    }

    #[test]
    fn test_no_date_fails() {
        assert_eq!(iso(""), None);
        assert_eq!(iso("   "), None);
        assert_eq!(iso("no date here at all"), None);
        assert_eq!(iso("call 555-1234"), None);
    }

    #[test]
    fn test_parse_offset_forms() {
        assert_eq!(parse_offset("Z"), FixedOffset::east_opt(0));
        assert_eq!(parse_offset("+09:00"), FixedOffset::east_opt(9 * 3600));
        assert_eq!(parse_offset("-0530"), FixedOffset::east_opt(-(5 * 3600 + 30 * 60)));
        assert_eq!(parse_offset("+9"), None);
    }
}
