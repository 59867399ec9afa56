use anyhow::Result;
use campus_calendar_core::range::DateRange;
use campus_calendar_core::stats::CalendarStats;
use campus_calendar_core::{CategoryFilter, DisplayedMonth};
use owo_colors::OwoColorize;

use crate::commands::CalendarContext;
use crate::render::paint;

/// Totals for the whole feed, or for the events overlapping `month`.
pub fn run(ctx: &CalendarContext, month: Option<DisplayedMonth>) -> Result<()> {
    let stats = match month {
        Some(month) => {
            println!("{}", month.to_string().bold());
            CalendarStats::compute(DateRange::month(month).filter(&ctx.events), ctx.today)
        }
        None => {
            println!("{}", "All events".bold());
            CalendarStats::compute(&ctx.events, ctx.today)
        }
    };

    println!("  {:<12} {}", "Total", stats.total_events);
    println!("  {:<12} {}", "Upcoming", stats.upcoming_events);
    println!();

    for info in ctx.taxonomy.entries() {
        let CategoryFilter::Only(category) = info.value else {
            continue;
        };
        let count = stats.count(category);
        let name = format!("{:<12}", info.name);
        if count == 0 {
            println!("  {} {}", name.dimmed(), count.dimmed());
        } else {
            println!("  {} {}", paint(&name, Some(info.color.as_str())), count);
        }
    }

    Ok(())
}
