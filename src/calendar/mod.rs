//! Calendar-date primitives: inclusive range membership and month grids.
//!
//! Everything here is a pure computation over naive calendar dates. No time
//! zones, no clocks: "today" is always injected by the caller.

mod grid;
mod range;

pub use grid::{
    month_days, month_days_from, next_month, previous_month, week_day_names, CalendarCell,
    MonthGrid, DEFAULT_WEEK_START,
};
pub use range::{
    format_date, format_day, format_month_year, is_date_in_range, parse_iso_date, DateSpan,
    ISO_DATE_FORMAT,
};
