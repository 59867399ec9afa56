//! Free-text and department narrowing for event tables.

use crate::event::Event;

/// Department value meaning "visible to every department".
pub const ALL_DEPARTMENTS: &str = "All";

/// Case-insensitive substring match on title or description, input order
/// preserved. An empty term matches everything.
pub fn search_events<'a, I>(events: I, term: &str) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let needle = term.trim().to_lowercase();

    events
        .into_iter()
        .filter(|event| {
            needle.is_empty()
                || event.title.to_lowercase().contains(&needle)
                || event
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Events addressed to `department`, including campus-wide ones
/// (no department or `All`).
pub fn for_department<'a, I>(events: I, department: &str) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|event| match event.department.as_deref() {
            None => true,
            Some(d) => {
                d.eq_ignore_ascii_case(ALL_DEPARTMENTS) || d.eq_ignore_ascii_case(department.trim())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use chrono::NaiveDate;

    fn event(id: &str, title: &str, description: Option<&str>, department: Option<&str>) -> Event {
        let d = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut event = Event::new(id, title, d, d, Category::Academic);
        event.description = description.map(str::to_string);
        event.department = department.map(str::to_string);
        event
    }

    #[test]
    fn matches_title_or_description() {
        let events = vec![
            event("1", "Guest Lecture", Some("AI in Healthcare"), None),
            event("2", "Workshop", Some("Modern web development"), None),
            event("3", "Hackathon", None, None),
        ];

        let ids = |term: &str| -> Vec<String> {
            search_events(&events, term).iter().map(|e| e.id.clone()).collect()
        };
        assert_eq!(ids("healthcare"), ["1"]);
        assert_eq!(ids("WORK"), ["2"]);

        assert_eq!(search_events(&events, "  ").len(), 3);
        assert!(search_events(&events, "sports").is_empty());
    }

    #[test]
    fn department_includes_campus_wide_events() {
        let events = vec![
            event("1", "Orientation", None, Some("All")),
            event("2", "CSE Symposium", None, Some("CSE")),
            event("3", "ECE Lab Exam", None, Some("ECE")),
            event("4", "Convocation", None, None),
        ];

        let found: Vec<_> = for_department(&events, "cse").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(found, ["1", "2", "4"]);
    }
}
