pub mod categories;
pub mod config;
pub mod day;
pub mod grid;
pub mod list;
pub mod stats;

use std::path::Path;

use anyhow::Result;
use campus_calendar_core::{CategoryFilter, Direction, DisplayedMonth, Event, Taxonomy};
use chrono::NaiveDate;

use crate::config::GlobalConfig;
use crate::feed;

/// Everything a read command needs, loaded once per invocation.
pub struct CalendarContext {
    pub config: GlobalConfig,
    pub taxonomy: Taxonomy,
    pub events: Vec<Event>,
    pub today: NaiveDate,
}

impl CalendarContext {
    /// Load the feed and taxonomy. Rejected records are reported, not fatal.
    pub fn load(config: GlobalConfig, events_path: Option<&Path>) -> Result<Self> {
        let path = feed::resolve_events_path(events_path, &config)?;
        let report = feed::load_events(&path)?;
        feed::report_diagnostics(&report);

        let taxonomy = feed::load_taxonomy(&config)?;

        Ok(CalendarContext {
            config,
            taxonomy,
            events: report.events,
            today: chrono::Local::now().date_naive(),
        })
    }

    /// `--category` if given, else `default_category` from config.
    pub fn filter(&self, category: Option<&str>) -> Result<CategoryFilter> {
        resolve_filter(category, self.config.default_category)
    }
}

pub fn resolve_filter(category: Option<&str>, default: CategoryFilter) -> Result<CategoryFilter> {
    match category {
        Some(c) => Ok(c.parse()?),
        None => Ok(default),
    }
}

/// Month to display: `--month YYYY-MM` (else the month of `today`), then
/// `next` steps forward and `prev` steps back.
pub fn resolve_month(
    month: Option<&str>,
    today: NaiveDate,
    next: u32,
    prev: u32,
) -> Result<DisplayedMonth> {
    let start = match month {
        Some(m) => m.parse()?,
        None => DisplayedMonth::of(today),
    };

    Ok(start
        .step(Direction::Next, next)
        .step(Direction::Previous, prev))
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_calendar_core::Category;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_defaults_to_today() {
        let month = resolve_month(None, date(2024, 3, 15), 0, 0).unwrap();
        assert_eq!(month, DisplayedMonth::new(2024, 2).unwrap());
    }

    #[test]
    fn month_flag_and_navigation() {
        let month = resolve_month(Some("2024-12"), date(2020, 1, 1), 1, 0).unwrap();
        assert_eq!(month, DisplayedMonth::new(2025, 0).unwrap());

        let month = resolve_month(Some("2024-01"), date(2020, 1, 1), 0, 1).unwrap();
        assert_eq!(month, DisplayedMonth::new(2023, 11).unwrap());

        assert!(resolve_month(Some("2024/01"), date(2020, 1, 1), 0, 0).is_err());
    }

    #[test]
    fn filter_flag_overrides_default() {
        let default = CategoryFilter::Only(Category::Exam);
        assert_eq!(resolve_filter(None, default).unwrap(), default);
        assert_eq!(resolve_filter(Some("all"), default).unwrap(), CategoryFilter::All);
        assert!(resolve_filter(Some("party"), default).is_err());
    }
}
