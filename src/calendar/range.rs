//! Inclusive date ranges over string-dated records.
//!
//! Promotion records carry their bounds as `yyyy-MM-dd` strings. The
//! predicate parses them on every call and treats any malformed bound as
//! non-matching, so one corrupt record cannot take down a whole render.

use std::fmt;

use chrono::NaiveDate;

/// Wire format for calendar dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `yyyy-MM-dd` string as a naive calendar date.
#[must_use]
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT).ok()
}

/// Whether `day` falls within `[start, end]`, inclusive on both ends.
///
/// Comparison is on naive calendar dates only. Returns `false` when either
/// bound fails to parse or when the range is inverted.
#[must_use]
pub fn is_date_in_range(day: NaiveDate, start: &str, end: &str) -> bool {
    match (parse_iso_date(start), parse_iso_date(end)) {
        (Some(s), Some(e)) => s <= day && day <= e,
        _ => false,
    }
}

/// A parsed inclusive `[start, end]` span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateSpan {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateSpan {
    /// Create a span from parsed bounds.
    ///
    /// An inverted span (`end < start`) is representable and behaves as
    /// empty: `contains` is always false and `days` yields nothing.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse both bounds from `yyyy-MM-dd` strings.
    #[must_use]
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        Some(Self::new(parse_iso_date(start)?, parse_iso_date(end)?))
    }

    /// First day of the span.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the span.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `day` falls within the span, inclusive on both ends.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Every day of the span in order, both ends included.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Inclusive day count: a span from a day to itself is 1 day long.
    /// Inverted spans count 0.
    #[must_use]
    pub fn len_days(&self) -> u32 {
        let delta = (self.end - self.start).num_days();
        if delta < 0 {
            0
        } else {
            // num_days fits comfortably in u32 for calendar spans
            (delta + 1) as u32
        }
    }

    /// Whether the span covers exactly one day.
    #[must_use]
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for DateSpan {
    /// Compact display form: `"Sep 01 - Sep 05, 2025"`, collapsing
    /// single-day spans to one date.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_day() {
            write!(f, "{}", self.start.format("%b %d, %Y"))
        } else {
            write!(
                f,
                "{} - {}",
                self.start.format("%b %d"),
                self.end.format("%b %d, %Y")
            )
        }
    }
}

/// Format a date in the wire format, `yyyy-MM-dd`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Month heading, e.g. `"September 2025"`.
#[must_use]
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Day-of-month without padding, e.g. `"5"`.
#[must_use]
pub fn format_day(date: NaiveDate) -> String {
    date.format("%-d").to_string()
}
