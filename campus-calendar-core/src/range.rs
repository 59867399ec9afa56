//! Date-range membership for the list view.

use chrono::NaiveDate;

use crate::error::{CalendarError, CalendarResult};
use crate::event::Event;
use crate::month::DisplayedMonth;

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> CalendarResult<Self> {
        if from > to {
            return Err(CalendarError::InvalidArgument(format!(
                "range start {from} is after range end {to}"
            )));
        }
        Ok(DateRange { from, to })
    }

    /// First through last day of `month`.
    pub fn month(month: DisplayedMonth) -> Self {
        DateRange {
            from: month.first_day(),
            to: month.last_day(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Events sharing at least one day with this range, in input order.
    pub fn filter<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events
            .iter()
            .filter(|event| event.intersects(self.from, self.to))
            .collect()
    }
}

/// Events that overlap the zero-based `month` of `year` at all: starting
/// before and ending inside, starting inside, or spanning the whole month.
pub fn events_in_month_range(
    events: &[Event],
    year: i32,
    month: u32,
) -> CalendarResult<Vec<&Event>> {
    let displayed = DisplayedMonth::new(year, month)?;
    Ok(DateRange::month(displayed).filter(events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: &str, start: NaiveDate, end: NaiveDate, category: Category) -> Event {
        Event::new(id, id, start, end, category)
    }

    fn ids<'a>(events: &[&'a Event]) -> Vec<&'a str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn includes_partial_and_spanning_events() {
        let events = vec![
            event("before", date(2024, 2, 1), date(2024, 2, 28), Category::Academic),
            event("enters", date(2024, 2, 25), date(2024, 3, 2), Category::Holiday),
            event("inside", date(2024, 3, 15), date(2024, 3, 15), Category::Exam),
            event("leaves", date(2024, 3, 30), date(2024, 4, 3), Category::Event),
            event("spans", date(2024, 1, 1), date(2024, 6, 30), Category::Academic),
            event("after", date(2024, 4, 1), date(2024, 4, 2), Category::Sports),
        ];

        let in_march = events_in_month_range(&events, 2024, 2).unwrap();
        assert_eq!(ids(&in_march), ["enters", "inside", "leaves", "spans"]);
    }

    #[test]
    fn boundary_days_count() {
        let events = vec![
            event("last-of-feb", date(2024, 2, 29), date(2024, 2, 29), Category::Exam),
            event("first-of-mar", date(2024, 3, 1), date(2024, 3, 1), Category::Exam),
            event("last-of-mar", date(2024, 3, 31), date(2024, 3, 31), Category::Exam),
        ];

        let in_march = events_in_month_range(&events, 2024, 2).unwrap();
        assert_eq!(ids(&in_march), ["first-of-mar", "last-of-mar"]);
    }

    #[test]
    fn inverted_events_are_excluded() {
        let events = vec![Event::new(
            "bad",
            "Backwards",
            date(2024, 3, 20),
            date(2024, 3, 10),
            Category::Exam,
        )];
        assert!(events_in_month_range(&events, 2024, 2).unwrap().is_empty());
    }

    #[test]
    fn range_validation() {
        assert!(DateRange::new(date(2024, 3, 2), date(2024, 3, 1)).is_err());
        let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 1)).unwrap();
        assert!(range.contains(date(2024, 3, 1)));
        assert!(!range.contains(date(2024, 3, 2)));
    }
}
