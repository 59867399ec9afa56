use anyhow::Result;
use campus_calendar_core::grid::filter_by_category;
use campus_calendar_core::events_overlapping_date;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::commands::CalendarContext;
use crate::render::Render;

pub fn run(ctx: &CalendarContext, date: NaiveDate, category: Option<&str>) -> Result<()> {
    let filter = ctx.filter(category)?;
    let candidates = filter_by_category(&ctx.events, filter);
    let events = events_overlapping_date(candidates, date);

    let label = date.format("%A, %B %-d, %Y").to_string();
    if date == ctx.today {
        println!("{} {}", label.bold(), "(today)".dimmed());
    } else {
        println!("{}", label.bold());
    }

    if events.is_empty() {
        println!("{}", "No events".dimmed());
        return Ok(());
    }

    for event in events {
        println!("  {}", event.render(&ctx.taxonomy));
    }

    Ok(())
}
