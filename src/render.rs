//! Terminal rendering for calendar types.
//!
//! Colors come from the event itself when the source supplied one, else
//! from the taxonomy entry of its category.

use campus_calendar_core::month::DAY_NAMES;
use campus_calendar_core::{DayCell, Event, MonthGrid, Taxonomy};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

/// Width of one grid column, including the separating space
const CELL_WIDTH: usize = 14;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self, taxonomy: &Taxonomy) -> String;
}

/// Parse `#rrggbb` into RGB components.
fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Color `text` with a `#rrggbb` color; invalid or missing colors leave it plain.
pub fn paint(text: &str, color: Option<&str>) -> String {
    match color.and_then(parse_hex) {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text.to_string(),
    }
}

fn event_color<'a>(event: &'a Event, taxonomy: &'a Taxonomy) -> Option<&'a str> {
    event
        .color
        .as_deref()
        .or_else(|| taxonomy.color_for(event.category))
}

/// Cut `text` to at most `width` characters, marking the cut with `…`.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

/// A colored block for legends.
pub fn swatch(color: &str) -> String {
    paint("■", Some(color))
}

impl Render for Event {
    fn render(&self, taxonomy: &Taxonomy) -> String {
        let dates = if self.is_single_day() {
            format_date(self.start_date)
        } else {
            format!("{} - {}", format_date(self.start_date), format_date(self.end_date))
        };

        let mut line = format!(
            "{} {} {}",
            pad(&dates, 16).dimmed(),
            paint(&self.title, event_color(self, taxonomy)),
            format!("[{}]", self.category).dimmed()
        );

        if let Some(venue) = &self.venue {
            line.push_str(&format!(" @ {}", venue));
        }
        if let Some(description) = &self.description {
            line.push_str(&format!("\n{:17}{}", "", description.dimmed()));
        }

        line
    }
}

/// Format a date as e.g. "Mar 15"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Render a month grid as 7 columns, highlighting `today`.
///
/// Each day shows at most `preview_limit` titles followed by "+N more".
pub fn render_month_grid(
    grid: &MonthGrid<'_>,
    taxonomy: &Taxonomy,
    preview_limit: usize,
    today: NaiveDate,
) -> String {
    let title_width = CELL_WIDTH - 1;
    let mut lines = Vec::new();

    lines.push(grid.month().to_string().bold().to_string());
    lines.push(
        DAY_NAMES
            .iter()
            .map(|name| pad(name, CELL_WIDTH).dimmed().to_string())
            .collect::<String>()
            .trim_end()
            .to_string(),
    );

    for week in grid.weeks() {
        let mut day_line = String::new();
        let mut preview_lines = vec![String::new(); preview_limit];
        let mut more_line = String::new();
        let mut any_hidden = false;

        for cell in week {
            let label = match cell {
                DayCell::Blank => pad("", CELL_WIDTH),
                DayCell::Day { day, date, .. } => {
                    let text = pad(&format!("{day:>2}"), CELL_WIDTH);
                    if *date == today {
                        text.reversed().to_string()
                    } else {
                        text
                    }
                }
            };
            day_line.push_str(&label);

            let (shown, hidden) = cell.preview(preview_limit);
            for (i, line) in preview_lines.iter_mut().enumerate() {
                let text = match shown.get(i) {
                    Some(event) => paint(
                        &pad(&truncate(&event.title, title_width), CELL_WIDTH),
                        event_color(event, taxonomy),
                    ),
                    None => pad("", CELL_WIDTH),
                };
                line.push_str(&text);
            }

            if hidden > 0 {
                any_hidden = true;
                let more = pad(&format!("+{hidden} more"), CELL_WIDTH);
                more_line.push_str(&more.dimmed().to_string());
            } else {
                more_line.push_str(&pad("", CELL_WIDTH));
            }
        }

        lines.push(day_line.trim_end().to_string());
        lines.extend(
            preview_lines
                .into_iter()
                .map(|line| line.trim_end().to_string())
                .filter(|line| !line.is_empty()),
        );
        if any_hidden {
            lines.push(more_line.trim_end().to_string());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_calendar_core::{Category, CategoryFilter, DisplayedMonth};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex("#ef4444"), Some((0xef, 0x44, 0x44)));
        assert_eq!(parse_hex("ef4444"), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#zz0000"), None);
    }

    #[test]
    fn truncates_long_titles() {
        assert_eq!(truncate("Midterm", 13), "Midterm");
        assert_eq!(truncate("Technical Fest - TechVista", 10), "Technical…");
    }

    #[test]
    fn grid_shows_titles_and_overflow() {
        let d = date(2024, 3, 15);
        let events: Vec<Event> = ["Midterm", "Quiz", "Viva"]
            .iter()
            .enumerate()
            .map(|(i, title)| Event::new(i.to_string(), *title, d, d, Category::Exam))
            .collect();
        let month = DisplayedMonth::new(2024, 2).unwrap();
        let grid = MonthGrid::build(&events, month, CategoryFilter::All);

        let out = render_month_grid(&grid, &Taxonomy::default(), 2, date(2024, 3, 1));

        assert!(out.contains("March 2024"));
        assert!(out.contains("Midterm"));
        assert!(out.contains("Quiz"));
        assert!(!out.contains("Viva"));
        assert!(out.contains("+1 more"));
    }

    #[test]
    fn event_line_includes_range_and_category() {
        let event = Event::new(
            "2",
            "Spring Break",
            date(2024, 3, 18),
            date(2024, 3, 22),
            Category::Holiday,
        );
        let out = event.render(&Taxonomy::default());

        assert!(out.contains("Mar 18 - Mar 22"));
        assert!(out.contains("Spring Break"));
        assert!(out.contains("[holiday]"));
    }
}
