//! Ingestion boundary: turns raw event-source JSON into normalized events.
//!
//! Endpoints disagree on field names (`date` / `startDate` / `start`,
//! `endDate` / `end`, `category` / `type`, `id` / `_id`). Every record is
//! normalized here, one at a time, so a bad record is reported and skipped
//! without taking the rest of the feed down with it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::category::{Category, Taxonomy};
use crate::error::{CalendarError, CalendarResult};
use crate::event::Event;

/// Problem found in one record of a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Position of the record in the feed
    pub index: usize,
    pub id: Option<String>,
    pub error: CalendarError,
}

/// Result of ingesting a feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub events: Vec<Event>,
    /// Records that were dropped
    pub rejected: Vec<Diagnostic>,
    /// Records that were kept but look suspicious (e.g. inverted ranges)
    pub warnings: Vec<Diagnostic>,
}

impl IngestReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.warnings.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Feed {
    List(Vec<Value>),
    Envelope { data: Vec<Value> },
    Calendar { events: Vec<Value> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordId {
    Text(String),
    Number(serde_json::Number),
}

impl RecordId {
    fn into_string(self) -> String {
        match self {
            RecordId::Text(s) => s,
            RecordId::Number(n) => n.to_string(),
        }
    }
}

/// A record as any endpoint might send it.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventRecord {
    id: Option<RecordId>,
    #[serde(rename = "_id")]
    object_id: Option<RecordId>,
    title: Option<String>,

    start_date: Option<String>,
    date: Option<String>,
    start: Option<String>,
    end_date: Option<String>,
    end: Option<String>,

    category: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,

    description: Option<String>,
    venue: Option<String>,
    organizer: Option<String>,
    department: Option<String>,
    color: Option<String>,
}

/// First non-blank value among `(field name, value)` candidates.
fn first_present<const N: usize>(
    candidates: [(&'static str, Option<String>); N],
) -> Option<(&'static str, String)> {
    candidates
        .into_iter()
        .find_map(|(field, value)| value.filter(|v| !v.trim().is_empty()).map(|v| (field, v)))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse `YYYY-MM-DD`, or an RFC 3339 timestamp whose UTC date is used.
pub fn parse_date(field: &'static str, value: &str) -> CalendarResult<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| {
            DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.with_timezone(&Utc).date_naive())
        })
        .map_err(|_| CalendarError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

impl EventRecord {
    fn id(&mut self) -> Option<String> {
        self.id
            .take()
            .or_else(|| self.object_id.take())
            .map(RecordId::into_string)
    }

    /// The normalized event, plus a warning when the category had to be
    /// defaulted.
    fn normalize(mut self, id: String) -> CalendarResult<(Event, Option<CalendarError>)> {
        let title = non_blank(self.title.take()).ok_or(CalendarError::MissingField("title"))?;

        let (start_field, start_raw) = first_present([
            ("startDate", self.start_date.take()),
            ("date", self.date.take()),
            ("start", self.start.take()),
        ])
        .ok_or(CalendarError::MissingField("startDate"))?;
        let start_date = parse_date(start_field, &start_raw)?;

        let end_date = match first_present([
            ("endDate", self.end_date.take()),
            ("end", self.end.take()),
        ]) {
            Some((field, raw)) => parse_date(field, &raw)?,
            None => start_date,
        };

        let (category, warning) = match non_blank(self.category.take())
            .or_else(|| non_blank(self.kind.take()))
        {
            None => (Category::Event, Some(CalendarError::MissingField("category"))),
            Some(raw) => match raw.parse::<Category>() {
                Ok(category) => (category, None),
                Err(error) => (Category::Other, Some(error)),
            },
        };

        let event = Event {
            id,
            title: title.trim().to_string(),
            start_date,
            end_date,
            category,
            description: non_blank(self.description),
            venue: non_blank(self.venue),
            organizer: non_blank(self.organizer),
            department: non_blank(self.department),
            color: non_blank(self.color),
        };

        Ok((event, warning))
    }
}

fn normalize_record(
    index: usize,
    value: Value,
) -> Result<(Event, Option<CalendarError>), Diagnostic> {
    let mut record: EventRecord = serde_json::from_value(value).map_err(|e| Diagnostic {
        index,
        id: None,
        error: e.into(),
    })?;

    let id = record.id();
    let fallback_id = id.clone().unwrap_or_else(|| format!("#{index}"));

    record.normalize(fallback_id).map_err(|error| Diagnostic { index, id, error })
}

/// Normalize already-decoded records.
pub fn ingest_records(records: Vec<Value>) -> IngestReport {
    let mut report = IngestReport::default();

    for (index, value) in records.into_iter().enumerate() {
        match normalize_record(index, value) {
            Ok((event, category_warning)) => {
                if let Some(error) = category_warning {
                    tracing::warn!(
                        index,
                        id = %event.id,
                        error = %error,
                        category = %event.category,
                        "Event kept with a fallback category"
                    );
                    report.warnings.push(Diagnostic {
                        index,
                        id: Some(event.id.clone()),
                        error,
                    });
                }
                if !event.has_valid_range() {
                    let diagnostic = Diagnostic {
                        index,
                        id: Some(event.id.clone()),
                        error: CalendarError::InvertedRange {
                            start: event.start_date.to_string(),
                            end: event.end_date.to_string(),
                        },
                    };
                    tracing::warn!(
                        index,
                        id = %event.id,
                        error = %diagnostic.error,
                        "Event kept but will not appear on any day"
                    );
                    report.warnings.push(diagnostic);
                }
                report.events.push(event);
            }
            Err(diagnostic) => {
                tracing::warn!(
                    index,
                    id = ?diagnostic.id,
                    error = %diagnostic.error,
                    "Rejected event record"
                );
                report.rejected.push(diagnostic);
            }
        }
    }

    tracing::debug!(
        loaded = report.events.len(),
        rejected = report.rejected.len(),
        warnings = report.warnings.len(),
        "Ingested event feed"
    );

    report
}

/// Parse an event feed: a bare array, `{ "data": [...] }` or `{ "events": [...] }`.
pub fn parse_feed(json: &str) -> CalendarResult<IngestReport> {
    let feed: Feed = serde_json::from_str(json).map_err(|e| {
        CalendarError::Serialization(format!("Unrecognized event feed: {e}"))
    })?;

    let records = match feed {
        Feed::List(records)
        | Feed::Envelope { data: records }
        | Feed::Calendar { events: records } => records,
    };

    Ok(ingest_records(records))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TaxonomyDocument {
    Wrapped { categories: Taxonomy },
    Bare(Taxonomy),
}

/// Parse a category taxonomy: `{ "categories": [...] }` or a bare array.
pub fn parse_taxonomy(json: &str) -> CalendarResult<Taxonomy> {
    let document: TaxonomyDocument = serde_json::from_str(json)?;
    Ok(match document {
        TaxonomyDocument::Wrapped { categories } | TaxonomyDocument::Bare(categories) => categories,
    })
}
