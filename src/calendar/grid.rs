//! Rectangular month grids for calendar rendering.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use super::range::format_month_year;

/// First day of a displayed week, matching the source calendar's Sunday
/// start. Grid consumers that want Monday-start weeks pass a different value
/// to [`month_days_from`] or [`MonthGrid::with_week_start`].
pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;

/// Weekday abbreviations in display order for the default week start.
const WEEK_DAY_ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn first_of_month(anchor: NaiveDate) -> NaiveDate {
    anchor.with_day(1).unwrap_or(anchor)
}

fn last_of_month(anchor: NaiveDate) -> NaiveDate {
    let first = first_of_month(anchor);
    first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .unwrap_or(first)
}

/// Days since the last `week_start` on or before `day`.
fn days_into_week(day: NaiveDate, week_start: Weekday) -> u64 {
    let offset = i64::from(day.weekday().num_days_from_sunday())
        - i64::from(week_start.num_days_from_sunday());
    offset.rem_euclid(7) as u64
}

fn start_of_week(day: NaiveDate, week_start: Weekday) -> NaiveDate {
    day.checked_sub_days(Days::new(days_into_week(day, week_start)))
        .unwrap_or(day)
}

fn end_of_week(day: NaiveDate, week_start: Weekday) -> NaiveDate {
    day.checked_add_days(Days::new(6 - days_into_week(day, week_start)))
        .unwrap_or(day)
}

/// The dates of the displayed grid for `anchor`'s month with the default
/// week start.
///
/// Runs from the start of the week containing the 1st through the end of the
/// week containing the last day of the month, so the result length is always
/// a multiple of 7. Only `anchor`'s year and month matter: any two anchors in
/// the same month yield the same sequence.
#[must_use]
pub fn month_days(anchor: NaiveDate) -> Vec<NaiveDate> {
    month_days_from(anchor, DEFAULT_WEEK_START)
}

/// [`month_days`] with an explicit first day of the week.
#[must_use]
pub fn month_days_from(anchor: NaiveDate, week_start: Weekday) -> Vec<NaiveDate> {
    let grid_start = start_of_week(first_of_month(anchor), week_start);
    let grid_end = end_of_week(last_of_month(anchor), week_start);
    grid_start
        .iter_days()
        .take_while(|d| *d <= grid_end)
        .collect()
}

/// The same calendar day in the following month, day-of-month clamped to the
/// target month's length (Jan 31 → Feb 28).
#[must_use]
pub fn next_month(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1)).unwrap_or(date)
}

/// The same calendar day in the preceding month, clamped like [`next_month`].
#[must_use]
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(1)).unwrap_or(date)
}

/// Weekday header labels starting from `week_start`.
#[must_use]
pub fn week_day_names(week_start: Weekday) -> [&'static str; 7] {
    let shift = week_start.num_days_from_sunday() as usize;
    std::array::from_fn(|i| WEEK_DAY_ABBREVIATIONS[(shift + i) % 7])
}

/// One cell of a rendered month grid.
///
/// Ephemeral: regenerated on every grid build, no identity beyond its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    date: NaiveDate,
    in_month: bool,
    is_today: bool,
}

impl CalendarCell {
    /// The cell's date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Whether the date belongs to the displayed month (as opposed to an
    /// adjacent-month filler day).
    #[must_use]
    pub const fn in_month(&self) -> bool {
        self.in_month
    }

    /// Whether the date equals the injected "today".
    #[must_use]
    pub const fn is_today(&self) -> bool {
        self.is_today
    }

    /// Whether the date falls on Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// A month's grid of [`CalendarCell`]s.
///
/// `today` is injected by the caller so the grid stays a pure function of its
/// inputs; the CLI passes the local date at the edge.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    anchor: NaiveDate,
    week_start: Weekday,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Build the grid for `anchor`'s month with the default week start.
    #[must_use]
    pub fn new(anchor: NaiveDate, today: NaiveDate) -> Self {
        Self::with_week_start(anchor, today, DEFAULT_WEEK_START)
    }

    /// Build the grid with an explicit first day of the week.
    #[must_use]
    pub fn with_week_start(anchor: NaiveDate, today: NaiveDate, week_start: Weekday) -> Self {
        let anchor = first_of_month(anchor);
        let cells = month_days_from(anchor, week_start)
            .into_iter()
            .map(|date| CalendarCell {
                date,
                in_month: date.year() == anchor.year() && date.month() == anchor.month(),
                is_today: date == today,
            })
            .collect();
        Self {
            anchor,
            week_start,
            cells,
        }
    }

    /// First day of the displayed month.
    #[must_use]
    pub const fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// The configured first day of the week.
    #[must_use]
    pub const fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// All cells in display order.
    #[must_use]
    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// The grid row by row, seven cells each.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }

    /// Heading for the displayed month, e.g. `"September 2025"`.
    #[must_use]
    pub fn month_label(&self) -> String {
        format_month_year(self.anchor)
    }

    /// Weekday header labels for this grid's week start.
    #[must_use]
    pub fn header(&self) -> [&'static str; 7] {
        week_day_names(self.week_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
    }

    #[test]
    fn september_2025_grid_sunday_start() {
        let days = month_days(date("2025-09-15"));
        assert_eq!(days.len(), 35);
        assert_eq!(days[0], date("2025-08-31"));
        assert_eq!(days[34], date("2025-10-04"));
        assert_eq!(days[0].weekday(), Weekday::Sun);
        assert_eq!(days[34].weekday(), Weekday::Sat);
    }

    #[test]
    fn grid_length_is_multiple_of_seven() {
        // Every month of two years, including a leap February.
        for year in [2024, 2025] {
            for month in 1..=12 {
                let anchor = NaiveDate::from_ymd_opt(year, month, 1).expect("anchor");
                assert_eq!(month_days(anchor).len() % 7, 0, "{year}-{month}");
            }
        }
    }

    #[test]
    fn anchors_in_same_month_yield_identical_grids() {
        assert_eq!(month_days(date("2025-09-01")), month_days(date("2025-09-30")));
        assert_eq!(month_days(date("2025-09-07")), month_days(date("2025-09-21")));
    }

    #[test]
    fn six_week_month_has_42_cells() {
        // November 2025 starts on a Saturday and has 30 days: 6 display weeks.
        let days = month_days(date("2025-11-11"));
        assert_eq!(days.len(), 42);
    }

    #[test]
    fn exact_rectangle_month_has_28_cells() {
        // February 2026 starts on Sunday and has exactly 4 weeks.
        let days = month_days(date("2026-02-10"));
        assert_eq!(days.len(), 28);
        assert_eq!(days[0], date("2026-02-01"));
        assert_eq!(days[27], date("2026-02-28"));
    }

    #[test]
    fn monday_start_shifts_grid() {
        let days = month_days_from(date("2025-09-15"), Weekday::Mon);
        assert_eq!(days[0], date("2025-09-01"));
        assert_eq!(days[0].weekday(), Weekday::Mon);
        assert_eq!(days.len() % 7, 0);
        assert_eq!(days[days.len() - 1].weekday(), Weekday::Sun);
    }

    #[test]
    fn month_navigation_clamps_day() {
        assert_eq!(next_month(date("2025-01-31")), date("2025-02-28"));
        assert_eq!(next_month(date("2024-01-31")), date("2024-02-29"));
        assert_eq!(previous_month(date("2025-03-31")), date("2025-02-28"));
        assert_eq!(next_month(date("2025-12-15")), date("2026-01-15"));
    }

    #[test]
    fn week_day_names_rotate_with_start() {
        assert_eq!(
            week_day_names(Weekday::Sun),
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
        assert_eq!(
            week_day_names(Weekday::Mon),
            ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
    }

    #[test]
    fn grid_cells_mark_month_membership_and_today() {
        let grid = MonthGrid::new(date("2025-09-15"), date("2025-09-03"));
        assert_eq!(grid.cells().len(), 35);

        let filler = &grid.cells()[0];
        assert_eq!(filler.date(), date("2025-08-31"));
        assert!(!filler.in_month());

        let today: Vec<_> = grid.cells().iter().filter(|c| c.is_today()).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date(), date("2025-09-03"));
        assert!(today[0].in_month());
    }

    #[test]
    fn today_outside_month_marks_nothing() {
        let grid = MonthGrid::new(date("2025-09-15"), date("2025-12-25"));
        assert!(grid.cells().iter().all(|c| !c.is_today()));
    }

    #[test]
    fn weeks_iterator_yields_full_rows() {
        let grid = MonthGrid::new(date("2025-09-15"), date("2025-09-03"));
        let weeks: Vec<_> = grid.weeks().collect();
        assert_eq!(weeks.len(), 5);
        assert!(weeks.iter().all(|w| w.len() == 7));
    }

    #[test]
    fn weekend_cells_detected() {
        let grid = MonthGrid::new(date("2025-09-15"), date("2025-09-03"));
        let saturday = grid
            .cells()
            .iter()
            .find(|c| c.date() == date("2025-09-06"))
            .expect("cell");
        assert!(saturday.is_weekend());
        let wednesday = grid
            .cells()
            .iter()
            .find(|c| c.date() == date("2025-09-10"))
            .expect("cell");
        assert!(!wednesday.is_weekend());
    }

    #[test]
    fn grid_label_and_header() {
        let grid = MonthGrid::new(date("2025-09-15"), date("2025-09-03"));
        assert_eq!(grid.month_label(), "September 2025");
        assert_eq!(grid.header()[0], "Sun");
    }
}
