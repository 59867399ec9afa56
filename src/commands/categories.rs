use campus_calendar_core::Taxonomy;
use owo_colors::OwoColorize;

use crate::render::swatch;

pub fn run(taxonomy: &Taxonomy) {
    for info in taxonomy.entries() {
        println!(
            "{} {:<14} {}",
            swatch(&info.color),
            info.name,
            format!("{} {}", info.value, info.color).dimmed()
        );
    }
}
