//! Core types for the campus academic calendar.
//!
//! This crate turns a flat list of academic events into the views the
//! portals render:
//! - `grid` builds the 7-column month grid with the events active per day
//! - `range` selects the events overlapping a month for the list view
//! - `month` handles month lengths, weekdays and prev/next navigation
//! - `ingest` normalizes raw event-source JSON into `Event`s
//!
//! Everything here is pure and synchronous; fetching the events is the
//! caller's job.

pub mod category;
pub mod error;
pub mod event;
pub mod grid;
pub mod ingest;
pub mod month;
pub mod range;
pub mod search;
pub mod stats;

pub use category::{Category, CategoryFilter, CategoryInfo, Taxonomy};
pub use error::{CalendarError, CalendarResult};
pub use event::Event;
pub use grid::{DayCell, MonthGrid, build_month_grid, events_overlapping_date};
pub use month::{
    Direction, DisplayedMonth, days_in_month, first_weekday_of_month, navigate_month,
};
pub use range::{DateRange, events_in_month_range};
