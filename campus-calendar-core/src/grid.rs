//! Month grid computation.
//!
//! A grid is `first_weekday` blank cells followed by one cell per day of the
//! month, ready to be laid out left-to-right in 7 columns. Each day cell
//! borrows the events active on that day, in source order.

use chrono::NaiveDate;

use crate::category::CategoryFilter;
use crate::error::CalendarResult;
use crate::event::Event;
use crate::month::DisplayedMonth;

/// Every event whose inclusive `[start_date, end_date]` contains `date`,
/// in input order.
pub fn events_overlapping_date<'a, I>(events: I, date: NaiveDate) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|event| event.is_active_on(date))
        .collect()
}

/// Events whose category passes `filter`, in input order.
pub fn filter_by_category(events: &[Event], filter: CategoryFilter) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| filter.matches(event.category))
        .collect()
}

/// Build the grid for the zero-based `month` of `year`.
pub fn build_month_grid(
    events: &[Event],
    year: i32,
    month: u32,
    filter: CategoryFilter,
) -> CalendarResult<MonthGrid<'_>> {
    let displayed = DisplayedMonth::new(year, month)?;
    Ok(MonthGrid::build(events, displayed, filter))
}

/// One position in the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayCell<'a> {
    /// Padding before the first of the month
    Blank,
    Day {
        day: u32,
        date: NaiveDate,
        events: Vec<&'a Event>,
    },
}

impl<'a> DayCell<'a> {
    pub fn is_blank(&self) -> bool {
        matches!(self, DayCell::Blank)
    }

    pub fn day_number(&self) -> Option<u32> {
        match self {
            DayCell::Blank => None,
            DayCell::Day { day, .. } => Some(*day),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DayCell::Blank => None,
            DayCell::Day { date, .. } => Some(*date),
        }
    }

    pub fn events(&self) -> &[&'a Event] {
        match self {
            DayCell::Blank => &[],
            DayCell::Day { events, .. } => events,
        }
    }

    /// The first `limit` events and how many more are hidden.
    pub fn preview(&self, limit: usize) -> (&[&'a Event], usize) {
        let events = self.events();
        let shown = events.len().min(limit);
        (&events[..shown], events.len() - shown)
    }
}

/// Render-ready grid for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid<'a> {
    month: DisplayedMonth,
    filter: CategoryFilter,
    cells: Vec<DayCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    pub fn build(events: &'a [Event], month: DisplayedMonth, filter: CategoryFilter) -> Self {
        let filtered = filter_by_category(events, filter);
        let leading = month.first_weekday() as usize;
        let days = month.days();

        let mut cells = Vec::with_capacity(leading + days as usize);
        cells.extend(std::iter::repeat_with(|| DayCell::Blank).take(leading));

        for (day, date) in (1..=days).filter_map(|d| month.day(d).map(|date| (d, date))) {
            cells.push(DayCell::Day {
                day,
                date,
                events: events_overlapping_date(filtered.iter().copied(), date),
            });
        }

        tracing::trace!(
            month = %month,
            filter = %filter,
            events = filtered.len(),
            cells = cells.len(),
            "Built month grid"
        );

        MonthGrid {
            month,
            filter,
            cells,
        }
    }

    pub fn month(&self) -> DisplayedMonth {
        self.month
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn cells(&self) -> &[DayCell<'a>] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<DayCell<'a>> {
        self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rows of 7 cells; the last row may be shorter.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell<'a>]> {
        self.cells.chunks(7)
    }

    pub fn cell_for(&self, date: NaiveDate) -> Option<&DayCell<'a>> {
        self.cells.iter().find(|cell| cell.date() == Some(date))
    }

    /// Day cells only, skipping the leading blanks.
    pub fn days(&self) -> impl Iterator<Item = &DayCell<'a>> {
        self.cells.iter().filter(|cell| !cell.is_blank())
    }
}
