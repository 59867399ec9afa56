//! Normalized academic event.
//!
//! Feeds from different endpoints name their fields differently; the
//! `ingest` module converts every record into this one shape, and the rest
//! of the crate works exclusively with it.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// An academic calendar event covering an inclusive range of days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start_date: NaiveDate,
    /// Inclusive. Equal to `start_date` for single-day events.
    pub end_date: NaiveDate,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Display color supplied by the source, overriding the taxonomy color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Event {
    /// Minimal event; optional fields start empty.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        category: Category,
    ) -> Self {
        Event {
            id: id.into(),
            title: title.into(),
            start_date,
            end_date,
            category,
            description: None,
            venue: None,
            organizer: None,
            department: None,
            color: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether `start_date <= end_date`. Inverted events match no day.
    pub fn has_valid_range(&self) -> bool {
        self.start_date <= self.end_date
    }

    pub fn is_single_day(&self) -> bool {
        self.start_date == self.end_date
    }

    /// Inclusive on both ends.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Whether the event shares at least one day with `[from, to]`.
    pub fn intersects(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.has_valid_range() && self.start_date <= to && self.end_date >= from
    }

    /// Number of days covered, 0 for inverted ranges.
    pub fn duration_days(&self) -> i64 {
        if self.has_valid_range() {
            (self.end_date - self.start_date).num_days() + 1
        } else {
            0
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn active_range_is_inclusive() {
        let event = Event::new("1", "Fest", date(2024, 3, 10), date(2024, 3, 12), Category::Event);

        assert!(!event.is_active_on(date(2024, 3, 9)));
        assert!(event.is_active_on(date(2024, 3, 10)));
        assert!(event.is_active_on(date(2024, 3, 12)));
        assert!(!event.is_active_on(date(2024, 3, 13)));
        assert_eq!(event.duration_days(), 3);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let event = Event::new("1", "Bad", date(2024, 3, 12), date(2024, 3, 10), Category::Other);

        assert!(!event.has_valid_range());
        assert!(!event.is_active_on(date(2024, 3, 11)));
        assert!(!event.intersects(date(2024, 3, 1), date(2024, 3, 31)));
        assert_eq!(event.duration_days(), 0);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let day = date(2025, 12, 10);
        let event = Event::new("7", "Guest Lecture", day, day, Category::Academic)
            .with_description("AI in healthcare");
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["startDate"], "2025-12-10");
        assert_eq!(json["category"], "academic");
        assert_eq!(json["description"], "AI in healthcare");
        assert!(json.get("venue").is_none());
    }
}
