//! Summary counts for dashboards.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::category::Category;
use crate::event::Event;

pub fn count_for<'a, I>(events: I, category: Category) -> usize
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|event| event.category == category)
        .count()
}

/// Events per category. Categories with no events are absent.
pub fn count_by_category<'a, I>(events: I) -> BTreeMap<Category, usize>
where
    I: IntoIterator<Item = &'a Event>,
{
    events.into_iter().fold(BTreeMap::new(), |mut counts, event| {
        *counts.entry(event.category).or_insert(0) += 1;
        counts
    })
}

/// Totals shown on the academic dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarStats {
    pub total_events: usize,
    /// Events starting on or after `today`
    pub upcoming_events: usize,
    pub events_by_category: BTreeMap<Category, usize>,
}

impl CalendarStats {
    pub fn compute<'a, I>(events: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let events: Vec<&Event> = events.into_iter().collect();

        CalendarStats {
            total_events: events.len(),
            upcoming_events: events.iter().filter(|e| e.start_date >= today).count(),
            events_by_category: count_by_category(events.iter().copied()),
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.events_by_category.get(&category).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Event> {
        vec![
            Event::new("1", "Midterm", date(2024, 3, 15), date(2024, 3, 15), Category::Exam),
            Event::new(
                "2",
                "Spring Break",
                date(2024, 3, 18),
                date(2024, 3, 22),
                Category::Holiday,
            ),
            Event::new("3", "Finals", date(2024, 5, 2), date(2024, 5, 10), Category::Exam),
        ]
    }

    #[test]
    fn counts_per_category() {
        let events = sample();

        assert_eq!(count_for(&events, Category::Exam), 2);
        assert_eq!(count_for(&events, Category::Sports), 0);

        let counts = count_by_category(&events);
        assert_eq!(counts.get(&Category::Exam), Some(&2));
        assert_eq!(counts.get(&Category::Holiday), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn upcoming_includes_today() {
        let events = sample();
        let stats = CalendarStats::compute(&events, date(2024, 3, 18));

        assert_eq!(stats.total_events, 3);
        assert_eq!(stats.upcoming_events, 2);
        assert_eq!(stats.count(Category::Exam), 2);
        assert_eq!(stats.count(Category::Academic), 0);
    }

    #[test]
    fn serializes_category_keys() {
        let events = sample();
        let stats = CalendarStats::compute(&events, date(2024, 1, 1));
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["eventsByCategory"]["exam"], 2);
        assert_eq!(json["upcomingEvents"], 3);
    }
}
