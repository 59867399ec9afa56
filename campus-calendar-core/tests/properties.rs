use campus_calendar_core::{
    Category, CategoryFilter, Direction, DisplayedMonth, Event, build_month_grid, days_in_month,
    first_weekday_of_month, navigate_month,
};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn displayed_month() -> impl Strategy<Value = DisplayedMonth> {
    (1..=9999i32, 0..12u32).prop_map(|(year, month)| DisplayedMonth::new(year, month).unwrap())
}

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

/// Events clustered around March 2024 so that most of them hit the grid.
fn events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((0..60i64, 0..10i64, category()), 0..20).prop_map(|specs| {
        let base = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (offset, length, category))| {
                let start = base + Duration::days(offset);
                let end = start + Duration::days(length);
                Event::new(i.to_string(), format!("Event {i}"), start, end, category)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn grid_length_is_blanks_plus_days(month in displayed_month()) {
        let (year, index) = (month.year(), month.month());
        let grid = build_month_grid(&[], year, index, CategoryFilter::All).unwrap();
        let expected =
            first_weekday_of_month(year, index).unwrap() + days_in_month(year, index).unwrap();

        prop_assert_eq!(grid.len(), expected as usize);
        prop_assert_eq!(
            grid.cells().iter().take_while(|cell| cell.is_blank()).count(),
            first_weekday_of_month(year, index).unwrap() as usize
        );
    }

    #[test]
    fn navigation_round_trips(month in displayed_month()) {
        let forward = navigate_month(month, Direction::Next);
        prop_assert_eq!(navigate_month(forward, Direction::Previous), month);

        let back = navigate_month(month, Direction::Previous);
        prop_assert_eq!(navigate_month(back, Direction::Next), month);
    }

    #[test]
    fn all_filter_is_union_of_category_partition(events in events(), offset in 0..3u32) {
        let month = DisplayedMonth::new(2024, 1).unwrap().step(Direction::Next, offset);
        let grid_for =
            |filter| build_month_grid(&events, month.year(), month.month(), filter).unwrap();
        let all = grid_for(CategoryFilter::All);

        let per_category: Vec<_> = Category::ALL
            .iter()
            .map(|c| grid_for(CategoryFilter::Only(*c)))
            .collect();

        for (i, cell) in all.cells().iter().enumerate() {
            let mut expected: Vec<&str> = cell.events().iter().map(|e| e.id.as_str()).collect();
            let mut union: Vec<&str> = per_category
                .iter()
                .flat_map(|grid| grid.cells()[i].events().iter().map(|e| e.id.as_str()))
                .collect();

            expected.sort_unstable();
            union.sort_unstable();
            prop_assert_eq!(union, expected);
        }
    }
}
