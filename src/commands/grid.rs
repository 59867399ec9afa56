use anyhow::Result;
use campus_calendar_core::{DisplayedMonth, MonthGrid};
use owo_colors::OwoColorize;

use crate::commands::CalendarContext;
use crate::render::render_month_grid;

pub fn run(ctx: &CalendarContext, month: DisplayedMonth, category: Option<&str>) -> Result<()> {
    let filter = ctx.filter(category)?;
    let grid = MonthGrid::build(&ctx.events, month, filter);

    println!(
        "{}",
        render_month_grid(&grid, &ctx.taxonomy, ctx.config.preview_limit, ctx.today)
    );

    let total: usize = grid.days().map(|cell| cell.events().len()).sum();
    if total == 0 {
        println!("\n{}", "No events this month".dimmed());
    }

    Ok(())
}
