//! Event categories, the category filter, and the display taxonomy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CalendarError, CalendarResult};

/// Kind of an academic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Exam,
    Holiday,
    Academic,
    Event,
    Cultural,
    Sports,
    Placement,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Exam,
        Category::Holiday,
        Category::Academic,
        Category::Event,
        Category::Cultural,
        Category::Sports,
        Category::Placement,
        Category::Other,
    ];

    /// Canonical lowercase key, as the backend stores it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Exam => "exam",
            Category::Holiday => "holiday",
            Category::Academic => "academic",
            Category::Event => "event",
            Category::Cultural => "cultural",
            Category::Sports => "sports",
            Category::Placement => "placement",
            Category::Other => "other",
        }
    }

    /// Human-readable label used by the taxonomy defaults.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Exam => "Examination",
            Category::Holiday => "Holiday",
            Category::Academic => "Academic",
            Category::Event => "Event",
            Category::Cultural => "Cultural",
            Category::Sports => "Sports",
            Category::Placement => "Placement",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = CalendarError;

    fn from_str(s: &str) -> CalendarResult<Self> {
        let category = match s.trim().to_ascii_lowercase().as_str() {
            "exam" | "exams" | "examination" => Category::Exam,
            "holiday" => Category::Holiday,
            "academic" => Category::Academic,
            "event" => Category::Event,
            "cultural" => Category::Cultural,
            "sports" | "sport" => Category::Sports,
            "placement" => Category::Placement,
            "other" => Category::Other,
            _ => return Err(CalendarError::UnknownCategory(s.to_string())),
        };
        Ok(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Narrows the event set before grid computation. `all` exists only here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CalendarError;

    fn from_str(s: &str) -> CalendarResult<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(c) => c.fmt(f),
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One entry of the category taxonomy shown as filter buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub value: CategoryFilter,
    pub name: String,
    /// Hex color such as `#ef4444`
    pub color: String,
}

/// Ordered list of categories offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy(Vec<CategoryInfo>);

impl Taxonomy {
    pub fn new(entries: Vec<CategoryInfo>) -> Self {
        Taxonomy(entries)
    }

    pub fn entries(&self) -> &[CategoryInfo] {
        &self.0
    }

    pub fn get(&self, filter: CategoryFilter) -> Option<&CategoryInfo> {
        self.0.iter().find(|info| info.value == filter)
    }

    /// Color for a category, falling back to the "all" entry's color.
    pub fn color_for(&self, category: Category) -> Option<&str> {
        self.get(CategoryFilter::Only(category))
            .or_else(|| self.get(CategoryFilter::All))
            .map(|info| info.color.as_str())
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        let entry = |value: CategoryFilter, name: &str, color: &str| CategoryInfo {
            value,
            name: name.to_string(),
            color: color.to_string(),
        };

        Taxonomy(vec![
            entry(CategoryFilter::All, "All Events", "#6b7280"),
            entry(CategoryFilter::Only(Category::Exam), "Examination", "#ef4444"),
            entry(CategoryFilter::Only(Category::Holiday), "Holiday", "#06b6d4"),
            entry(CategoryFilter::Only(Category::Academic), "Academic", "#f59e0b"),
            entry(CategoryFilter::Only(Category::Event), "Event", "#8b5cf6"),
            entry(CategoryFilter::Only(Category::Cultural), "Cultural", "#ec4899"),
            entry(CategoryFilter::Only(Category::Sports), "Sports", "#10b981"),
            entry(CategoryFilter::Only(Category::Placement), "Placement", "#6366f1"),
            entry(CategoryFilter::Only(Category::Other), "Other", "#9ca3af"),
        ])
    }
}
