use anyhow::Result;
use campus_calendar_core::range::DateRange;
use campus_calendar_core::search::{for_department, search_events};
use campus_calendar_core::{CategoryFilter, DisplayedMonth, Event};
use owo_colors::OwoColorize;

use crate::commands::CalendarContext;
use crate::render::Render;

pub struct ListOptions<'a> {
    pub category: Option<&'a str>,
    pub search: Option<&'a str>,
    pub department: Option<&'a str>,
}

/// Events overlapping `month`, narrowed and sorted by start date.
pub fn select<'a>(
    events: &'a [Event],
    month: DisplayedMonth,
    filter: CategoryFilter,
    search: Option<&str>,
    department: Option<&str>,
) -> Vec<&'a Event> {
    let mut selected: Vec<&Event> = DateRange::month(month)
        .filter(events)
        .into_iter()
        .filter(|event| filter.matches(event.category))
        .collect();

    if let Some(term) = search {
        selected = search_events(selected, term);
    }
    if let Some(department) = department {
        selected = for_department(selected, department);
    }

    selected.sort_by_key(|event| event.start_date);
    selected
}

pub fn run(ctx: &CalendarContext, month: DisplayedMonth, options: ListOptions<'_>) -> Result<()> {
    let filter = ctx.filter(options.category)?;
    let events = select(&ctx.events, month, filter, options.search, options.department);

    println!("{}", month.to_string().bold());

    if events.is_empty() {
        println!("{}", "No events found for this month".dimmed());
        return Ok(());
    }

    for event in events {
        println!("  {}", event.render(&ctx.taxonomy));
    }

    Ok(())
}
